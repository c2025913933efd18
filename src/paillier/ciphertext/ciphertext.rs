use std::fmt;
use num_bigint::BigUint;
use crate::crypto_error::{CryptoError, Result};
use crate::paillier::p_keygen::PublicKey;

/// Chiffré Paillier, élément de [0, n²).
///
/// Produit par le chiffrement ou une opération homomorphe ; une valeur
/// venue de l'extérieur passe par `from_biguint`, qui vérifie la borne.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ciphertext(BigUint);

impl Ciphertext {
    // Réservé aux opérations internes qui réduisent déjà mod n²
    pub(crate) fn new_unchecked(value: BigUint) -> Self {
        Ciphertext(value)
    }

    pub fn from_biguint(value: BigUint, pk: &PublicKey) -> Result<Self> {
        if &value >= pk.n_squared() {
            return Err(CryptoError::InvalidInput("le chiffré doit être dans [0, n²)".into()));
        }
        Ok(Ciphertext(value))
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_biguint_checks_upper_bound() {
        let pk = PublicKey::from_modulus(BigUint::from(323u32)).unwrap();
        assert!(Ciphertext::from_biguint(BigUint::from(104_328u32), &pk).is_ok());
        assert!(matches!(
            Ciphertext::from_biguint(BigUint::from(104_329u32), &pk),
            Err(CryptoError::InvalidInput(_))
        ));
    }
}

use num_bigint::BigUint;
use crate::crypto_error::{CryptoError, Result};
use crate::paillier::ciphertext::Ciphertext;
use crate::paillier::math::l_function;
use crate::paillier::p_keygen::PrivateKey;

// ---------------------------------------------------------------------------
// Déchiffrement Paillier : m = L(c^lambda mod n²) * mu  mod n
//
// Déterministe. Un chiffré produit sous une autre paire de clés donne une
// valeur sans signification, pas une erreur.
// ---------------------------------------------------------------------------
pub fn decrypt(c: &Ciphertext, sk: &PrivateKey) -> Result<BigUint> {
    let c = c.as_biguint();
    if c >= sk.n_squared() {
        return Err(CryptoError::InvalidInput("le chiffré doit être dans [0, n²)".into()));
    }

    // Calcule c^lambda mod n^2
    let c_lambda = c.modpow(sk.lambda(), sk.n_squared());

    // Calcule L(c^lambda mod n^2)
    let l_c_lambda = l_function(&c_lambda, sk.n())?;

    // Calcule m = L(c^lambda mod n^2) * mu (mod n)
    Ok((&l_c_lambda * sk.mu()) % sk.n())
}

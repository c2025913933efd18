use num_bigint::BigUint;
use crate::paillier::ciphertext::Ciphertext;
use crate::paillier::p_keygen::PublicKey;

// ============================================================================
// Opérations homomorphes — fonctions pures, sans état, sans déchiffrement
//
//   E(m1) · E(m2)  mod n²  = E(m1 + m2 mod n)
//   E(m)^k         mod n²  = E(m · k  mod n)
//   E(m) · g^k     mod n²  = E(m + k  mod n)
//
// Les chiffrés doivent venir de la même clé publique : un mélange de clés
// produit une valeur sans signification, non détectable à ce niveau.
// ============================================================================

pub fn add_encrypted(c1: &Ciphertext, c2: &Ciphertext, pk: &PublicKey) -> Ciphertext {
    let sum = (c1.as_biguint() * c2.as_biguint()) % pk.n_squared();
    Ciphertext::new_unchecked(sum)
}

// k n'a pas besoin d'être réduit mod n : E(m)^n déchiffre vers 0
pub fn scalar_multiply(c: &Ciphertext, k: &BigUint, pk: &PublicKey) -> Ciphertext {
    Ciphertext::new_unchecked(c.as_biguint().modpow(k, pk.n_squared()))
}

pub fn add_plain_to_encrypted(c: &Ciphertext, k: &BigUint, pk: &PublicKey) -> Ciphertext {
    let g_k = pk.g().modpow(k, pk.n_squared());
    Ciphertext::new_unchecked((c.as_biguint() * &g_k) % pk.n_squared())
}

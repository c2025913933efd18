// Déclaration des modules
pub mod config;
pub mod crypto_error;
pub mod paillier;

pub use crate::paillier::math;
pub use crate::paillier::ciphertext;
pub use crate::paillier::p_keygen;
pub use crate::paillier::p_encrypt;
pub use crate::paillier::p_decrypt;
pub use crate::paillier::p_homomorphic;

// Fonctions de théorie des nombres
pub use crate::paillier::math::{l_function, gcd, lcm, mod_inverse};

// Clés et génération
pub use p_keygen::{generate, generate_with_config, KeyPair, PrivateKey, PublicKey};

// Chiffrement / déchiffrement
pub use ciphertext::Ciphertext;
pub use p_encrypt::{encrypt, encrypt_with_rng, encrypt_with_randomizer, Randomizer};
pub use p_decrypt::decrypt;

// Opérations homomorphes
pub use p_homomorphic::{add_encrypted, scalar_multiply, add_plain_to_encrypted};

// Configuration
pub use config::{LambdaForm, PaillierConfig};

// Erreur centralisée
pub use crypto_error::{CryptoError, Result};

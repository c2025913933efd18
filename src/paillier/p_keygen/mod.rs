pub mod p_keygen;

pub use p_keygen::{generate, generate_with_config, KeyPair, PrivateKey, PublicKey};
pub(crate) use p_keygen::zeroize_biguint;

pub mod p_encrypt;

pub use p_encrypt::{encrypt, encrypt_with_randomizer, encrypt_with_rng, Randomizer};

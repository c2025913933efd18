pub mod p_homomorphic;

pub use p_homomorphic::{add_encrypted, add_plain_to_encrypted, scalar_multiply};

//! Cryptography module - SHA-256d and scrypt hashing, Merkle roots

mod hash;
mod merkle;

pub use hash::*;
pub use merkle::*;

//! Cryptographically secure random source for the `rand` ecosystem.
//!
//! [`CryptoRandomSource`] implements the [`Source`] contract by reading
//! big-endian integers from a secure byte stream (the OS CSPRNG by default),
//! and [`Rand`] exposes any source as a `rand::RngCore`.
//!
//! ```no_run
//! use rand::seq::SliceRandom;
//!
//! let mut rng = cryptorand::new();
//! let mut cards: Vec<u8> = (1..=52).collect();
//! cards.shuffle(&mut rng);
//! ```

pub mod bigint;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod prime;
pub mod source;

pub use bigint::random_big_int;
pub use entropy::{read, OsEntropy};
pub use error::{RandError, RandResult};
pub use generator::{new, new_with_reader, Rand};
pub use num_bigint::BigUint;
pub use prime::{is_probable_prime, random_prime, random_prime_with, PrimalityConfig};
pub use source::{new_source, new_source_with_reader, CryptoRandomSource, Source};

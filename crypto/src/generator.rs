//! Ready-made generator wired to a [`Source`].
//!
//! `Rand` turns any `Source` into a `rand::RngCore`, so the usual `rand`
//! surface (`Rng::gen_range`, `SliceRandom::shuffle`, float sampling, ...)
//! works on top of it. With a [`CryptoRandomSource`] underneath, every bit
//! handed out traces back to the entropy stream.

use std::io::Read;

use rand::{CryptoRng, RngCore};

use crate::entropy::OsEntropy;
use crate::source::{CryptoRandomSource, Source};

#[derive(Debug, Clone)]
pub struct Rand<S> {
    src: S,
}

impl<S: Source> Rand<S> {
    pub fn from_source(src: S) -> Self {
        Self { src }
    }

    /// Forward a seed to the source. Ignored by [`CryptoRandomSource`].
    pub fn seed(&mut self, seed: i64) {
        self.src.seed(seed);
    }

    pub fn int63(&mut self) -> i64 {
        self.src.int63()
    }

    pub fn uint64(&mut self) -> u64 {
        self.src.uint64()
    }

    pub fn source(&self) -> &S {
        &self.src
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.src
    }

    pub fn into_source(self) -> S {
        self.src
    }
}

/// # Panics
///
/// Every method panics if the source does; `try_fill_bytes` included, since
/// [`Source`] offers no way to report a failed read.
impl<S: Source> RngCore for Rand<S> {
    fn next_u32(&mut self) -> u32 {
        (self.src.uint64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.src.uint64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<R: Read> CryptoRng for Rand<CryptoRandomSource<R>> {}

/// A generator reading from the OS entropy stream.
pub fn new() -> Rand<CryptoRandomSource<OsEntropy>> {
    Rand::from_source(CryptoRandomSource::default())
}

/// A generator reading from `reader`.
pub fn new_with_reader<R: Read>(reader: R) -> Rand<CryptoRandomSource<R>> {
    Rand::from_source(CryptoRandomSource::new(reader))
}

//! Random-source adapter backed by a secure entropy stream.

use std::io::Read;

use crate::entropy::{read_full, OsEntropy};
use crate::error::RandResult;

/// The minimal capability a pseudo-random generator needs from its source.
///
/// Implementations have no error channel: a source that cannot produce a
/// value must panic rather than return something degraded.
pub trait Source {
    /// Reseed the source. Sources that cannot be seeded may ignore this.
    fn seed(&mut self, seed: i64);

    /// A non-negative value in `[0, 2^63)`.
    fn int63(&mut self) -> i64;

    /// A uniformly distributed 64-bit value.
    fn uint64(&mut self) -> u64;
}

/// A [`Source`] that draws every value from a secure byte stream.
///
/// Each value consumes exactly 8 bytes, decoded big-endian. The source never
/// repeats or reuses entropy and keeps no state besides the stream.
///
/// Pass `&mut reader` to read from a stream the caller keeps ownership of.
///
/// # Panics
///
/// [`Source::uint64`] and [`Source::int63`] panic if the stream fails or
/// delivers fewer than 8 bytes. Use [`CryptoRandomSource::try_uint64`] to
/// observe the error instead.
#[derive(Debug, Clone)]
pub struct CryptoRandomSource<R> {
    reader: R,
}

impl<R: Read> CryptoRandomSource<R> {
    /// Wrap a caller-supplied entropy stream.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the next 8 bytes as a big-endian `u64`.
    pub fn try_uint64(&mut self) -> RandResult<u64> {
        let mut buf = [0u8; 8];
        read_full(&mut self.reader, &mut buf)?;
        Ok(u64::from_be_bytes(buf))
    }

    /// Like [`Source::int63`], but surfaces entropy failures.
    pub fn try_int63(&mut self) -> RandResult<i64> {
        self.try_uint64().map(clear_sign_bit)
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl Default for CryptoRandomSource<OsEntropy> {
    fn default() -> Self {
        Self::new(OsEntropy)
    }
}

impl<R: Read> Source for CryptoRandomSource<R> {
    /// No-op: a secure stream cannot be seeded.
    fn seed(&mut self, _seed: i64) {}

    fn int63(&mut self) -> i64 {
        clear_sign_bit(self.uint64())
    }

    fn uint64(&mut self) -> u64 {
        match self.try_uint64() {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(error = %err, "entropy stream failed, refusing to fabricate randomness");
                panic!("secure random source: {err}");
            }
        }
    }
}

/// Drop the most significant bit, leaving 63 bits of entropy.
fn clear_sign_bit(value: u64) -> i64 {
    ((value << 1) >> 1) as i64
}

/// A source reading from the OS entropy stream.
pub fn new_source() -> CryptoRandomSource<OsEntropy> {
    CryptoRandomSource::default()
}

/// A source reading from `reader`.
pub fn new_source_with_reader<R: Read>(reader: R) -> CryptoRandomSource<R> {
    CryptoRandomSource::new(reader)
}

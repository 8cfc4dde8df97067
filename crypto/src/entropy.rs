//! Default entropy stream backed by the operating system CSPRNG.
//!
//! `OsEntropy` exposes `getrandom` as a `std::io::Read` so it can be used
//! anywhere a caller-supplied byte stream is accepted. Reads always fill the
//! whole buffer or fail; there is no partial success.

use std::io::{self, Read};

use crate::error::RandResult;

/// Process-wide secure byte stream.
///
/// Stateless and `Copy`: every handle reads from the same OS facility, which
/// is safe to call from multiple threads at once. `&OsEntropy` also
/// implements `Read`, so one handle can be shared without synchronization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsEntropy;

impl OsEntropy {
    fn fill(buf: &mut [u8]) -> io::Result<usize> {
        getrandom::fill(buf).map_err(os_error)?;
        Ok(buf.len())
    }
}

impl Read for OsEntropy {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Self::fill(buf)
    }
}

impl Read for &OsEntropy {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        OsEntropy::fill(buf)
    }
}

fn os_error(err: getrandom::Error) -> io::Error {
    match err.raw_os_error() {
        Some(code) => io::Error::from_raw_os_error(code),
        None => io::Error::other(format!("OS entropy source unavailable: {err}")),
    }
}

/// Fill `buf` entirely from the OS entropy stream.
///
/// Returns the number of bytes written, which is always `buf.len()` on
/// success.
pub fn read(buf: &mut [u8]) -> RandResult<usize> {
    read_full(&mut OsEntropy, buf)?;
    Ok(buf.len())
}

/// Read exactly `buf.len()` bytes from `reader`, treating a short stream as
/// an entropy failure.
pub(crate) fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> RandResult<()> {
    reader.read_exact(buf)?;
    Ok(())
}

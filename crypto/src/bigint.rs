use std::io::Read;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use zeroize::Zeroizing;

use crate::entropy::read_full;
use crate::error::{RandError, RandResult};

/// A uniform random integer in `[0, max)` drawn from `reader`.
///
/// Reads just enough bytes to cover the bit length of `max - 1`, masks the
/// excess high bits and redraws until the candidate falls below `max`.
/// `max == 1` returns zero without touching the stream.
pub fn random_big_int<R: Read + ?Sized>(reader: &mut R, max: &BigUint) -> RandResult<BigUint> {
    if max.is_zero() {
        return Err(RandError::InvalidArgument(
            "upper bound must be positive".into(),
        ));
    }

    let limit = max - BigUint::one();
    let bit_len = limit.bits();
    if bit_len == 0 {
        return Ok(BigUint::zero());
    }

    let len = bit_len.div_ceil(8) as usize;
    let top_bits = match bit_len % 8 {
        0 => 8,
        b => b,
    };
    let mut bytes = Zeroizing::new(vec![0u8; len]);

    loop {
        read_full(reader, &mut bytes)?;
        bytes[0] &= ((1u16 << top_bits) - 1) as u8;

        let candidate = BigUint::from_bytes_be(&bytes);
        if &candidate < max {
            return Ok(candidate);
        }
        tracing::trace!(bits = bit_len, "big integer candidate out of range, redrawing");
    }
}

//! Random prime generation over an entropy stream.

use std::io::Read;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::bigint::random_big_int;
use crate::entropy::read_full;
use crate::error::{RandError, RandResult};

const SMALL_PRIMES: [u32; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Tuning for the probabilistic primality test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimalityConfig {
    /// Miller-Rabin rounds per candidate. A composite survives one round
    /// with probability at most 1/4.
    pub rounds: u32,
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        Self { rounds: 20 }
    }
}

impl PrimalityConfig {
    pub fn validate(&self) -> RandResult<()> {
        if self.rounds == 0 {
            return Err(RandError::InvalidArgument(
                "primality test needs at least one round".into(),
            ));
        }
        Ok(())
    }
}

/// A random prime of exactly `bits` bits, using the default
/// [`PrimalityConfig`].
pub fn random_prime<R: Read + ?Sized>(reader: &mut R, bits: usize) -> RandResult<BigUint> {
    random_prime_with(reader, bits, &PrimalityConfig::default())
}

/// A random prime of exactly `bits` bits.
///
/// The top two bits of every candidate are set, so the product of two such
/// primes has exactly `2 * bits` bits. Witnesses for the primality test are
/// drawn from the same stream.
pub fn random_prime_with<R: Read + ?Sized>(
    reader: &mut R,
    bits: usize,
    config: &PrimalityConfig,
) -> RandResult<BigUint> {
    config.validate()?;
    if bits < 2 {
        return Err(RandError::InvalidArgument(format!(
            "prime size must be at least 2 bits, got {bits}"
        )));
    }

    let top_bits = match bits % 8 {
        0 => 8,
        b => b,
    };
    let mut bytes = Zeroizing::new(vec![0u8; bits.div_ceil(8)]);
    let last = bytes.len() - 1;
    let mut candidates: u64 = 0;

    loop {
        read_full(reader, &mut bytes)?;
        candidates += 1;

        bytes[0] &= ((1u16 << top_bits) - 1) as u8;
        if top_bits >= 2 {
            bytes[0] |= 3u8 << (top_bits - 2);
        } else {
            bytes[0] |= 1;
            if last > 0 {
                bytes[1] |= 0x80;
            }
        }
        bytes[last] |= 1;

        let candidate = BigUint::from_bytes_be(&bytes);
        if is_probable_prime(reader, &candidate, config.rounds)? {
            tracing::debug!(bits, candidates, "generated random prime");
            return Ok(candidate);
        }
    }
}

/// Miller-Rabin test with `rounds` random bases drawn from `reader`.
///
/// Numbers up to 47 and multiples of the primes below it are decided by
/// trial division without reading the stream.
pub fn is_probable_prime<R: Read + ?Sized>(
    reader: &mut R,
    n: &BigUint,
    rounds: u32,
) -> RandResult<bool> {
    let one = BigUint::one();
    if n <= &one {
        return Ok(false);
    }
    for p in SMALL_PRIMES {
        let p = BigUint::from(p);
        if n == &p {
            return Ok(true);
        }
        if (n % &p).is_zero() {
            return Ok(false);
        }
    }

    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    // bases are drawn from [2, n - 2]
    let base_span = n - 3u32;

    'witness: for _ in 0..rounds {
        let a = random_big_int(reader, &base_span)? + 2u32;
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return Ok(false);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::OsEntropy;
    use std::io::Cursor;

    fn probable_prime(n: &BigUint) -> bool {
        is_probable_prime(&mut OsEntropy, n, 20).unwrap()
    }

    #[test]
    fn default_config() {
        let cfg = PrimalityConfig::default();
        assert_eq!(cfg.rounds, 20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_from_json() {
        let cfg: PrimalityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, PrimalityConfig::default());

        let cfg: PrimalityConfig = serde_json::from_str(r#"{"rounds": 40}"#).unwrap();
        assert_eq!(cfg.rounds, 40);
    }

    #[test]
    fn zero_rounds_is_invalid() {
        let cfg = PrimalityConfig { rounds: 0 };
        assert!(cfg.validate().is_err());
        let err = random_prime_with(&mut OsEntropy, 64, &cfg).unwrap_err();
        assert!(matches!(err, RandError::InvalidArgument(_)));
    }

    #[test]
    fn recognises_primes() {
        for n in [2u64, 3, 5, 47, 53, 7919, 65_537, (1 << 61) - 1] {
            assert!(probable_prime(&BigUint::from(n)), "{n} should be prime");
        }
        let m127 = (BigUint::one() << 127u32) - 1u32;
        assert!(probable_prime(&m127));
    }

    #[test]
    fn rejects_composites() {
        // Includes Carmichael numbers and a strong pseudoprime to bases 2, 3, 5, 7.
        for n in [0u64, 1, 4, 49, 561, 41_041, 3_215_031_751, (1 << 61) + 1] {
            assert!(!probable_prime(&BigUint::from(n)), "{n} should be composite");
        }
    }

    #[test]
    fn primes_have_requested_size() {
        for bits in [2usize, 3, 8, 9, 16, 64, 256] {
            let p = random_prime(&mut OsEntropy, bits).unwrap();
            assert_eq!(p.bits(), bits as u64, "wrong size for {bits}-bit prime");
            assert!(probable_prime(&p));
        }
    }

    #[test]
    fn smallest_sizes_are_fixed() {
        assert_eq!(random_prime(&mut OsEntropy, 2).unwrap(), BigUint::from(3u32));
        assert_eq!(random_prime(&mut OsEntropy, 3).unwrap(), BigUint::from(7u32));
    }

    #[test]
    fn top_two_bits_are_set() {
        for _ in 0..10 {
            let p = random_prime(&mut OsEntropy, 128).unwrap();
            assert!(p.bit(127) && p.bit(126));
        }
    }

    #[test]
    fn rejected_candidates_are_skipped() {
        // 0x02 -> 0xc3 = 195 (divisible by 3), 0x06 -> 0xc7 = 199 (prime).
        let mut stream = Cursor::new([0x02u8, 0x06]).chain(OsEntropy);
        let p = random_prime(&mut stream, 8).unwrap();
        assert_eq!(p, BigUint::from(199u32));
    }

    #[test]
    fn too_few_bits() {
        for bits in [0, 1] {
            let err = random_prime(&mut OsEntropy, bits).unwrap_err();
            assert!(matches!(err, RandError::InvalidArgument(_)));
        }
    }

    #[test]
    fn short_stream_is_an_error() {
        let mut stream = Cursor::new([0xffu8; 3]);
        let err = random_prime(&mut stream, 64).unwrap_err();
        assert!(matches!(err, RandError::Entropy(_)));
    }
}

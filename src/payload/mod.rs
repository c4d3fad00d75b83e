//! Benchmark payload construction
//!
//! Throughput mode sends an opaque zero-filled buffer of the configured size.
//! Latency mode sends a small fixed-size buffer whose leading bytes carry the
//! send timestamp (nanoseconds since the Unix epoch) as a zig-zag signed
//! variable-length integer. The encoding is bit-compatible with Go's
//! `encoding/binary` varint functions; downstream consumers decode it to
//! compute per-message latency, so it is a contract boundary.

use std::time::{SystemTime, UNIX_EPOCH};

const MSB: u8 = 0b1000_0000;
const DROP_MSB: u8 = 0b0111_1111;

/// Maximum encoded length of a 64-bit varint
pub const MAX_VARINT_LEN: usize = 10;

/// Size of the latency-mode payload buffer
///
/// Nine bytes hold any zig-zagged nanosecond timestamp for wall-clock values
/// below 2^62 ns since epoch.
pub const TIMESTAMP_PAYLOAD_LEN: usize = 9;

#[inline]
fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[inline]
fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Encode a signed 64-bit integer as a zig-zag varint into `dst`
///
/// Returns the number of bytes written. `dst` must be large enough for the
/// encoded value; [`MAX_VARINT_LEN`] bytes always suffice.
#[inline]
pub fn encode_varint(value: i64, dst: &mut [u8]) -> usize {
    let mut n = zigzag_encode(value);
    let mut i = 0;

    while n >= 0x80 {
        dst[i] = MSB | (n as u8);
        i += 1;
        n >>= 7;
    }

    dst[i] = n as u8;
    i + 1
}

/// Number of bytes [`encode_varint`] will write for `value`
#[inline]
pub fn varint_len(value: i64) -> usize {
    let mut n = zigzag_encode(value);
    let mut i = 0;

    while n >= 0x80 {
        i += 1;
        n >>= 7;
    }

    i + 1
}

/// Decode a zig-zag varint from the leading bytes of `src`
///
/// Returns the decoded value and the number of bytes consumed, or `None` if
/// the input is truncated or overflows 64 bits.
#[inline]
pub fn decode_varint(src: &[u8]) -> Option<(i64, usize)> {
    let mut result: u64 = 0;
    let mut shift = 0;

    for (idx, &b) in src.iter().enumerate() {
        if shift >= 64 {
            return None;
        }
        result |= ((b & DROP_MSB) as u64) << shift;
        if b & MSB == 0 {
            return Some((zigzag_decode(result), idx + 1));
        }
        shift += 7;
    }

    None
}

/// Current wall-clock time in nanoseconds since the Unix epoch
///
/// Clocks set before the epoch yield a negative value rather than a panic.
#[inline]
pub fn wall_clock_nanos() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_nanos() as i64,
        Err(e) => -(e.duration().as_nanos() as i64),
    }
}

/// Allocate the opaque filler payload used in throughput mode
///
/// Content is irrelevant to the benchmark, only the size matters.
pub fn filler_payload(size: usize) -> Vec<u8> {
    vec![0u8; size]
}

/// Allocate the latency-mode payload buffer
pub fn timestamp_payload() -> Vec<u8> {
    vec![0u8; TIMESTAMP_PAYLOAD_LEN]
}

/// Overwrite the leading bytes of `buf` with the current send timestamp
///
/// Called immediately before each send in latency mode. Returns the encoded
/// length; the remainder of the buffer is left untouched.
#[inline]
pub fn stamp_timestamp(buf: &mut [u8]) -> usize {
    encode_varint(wall_clock_nanos(), buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Reference vectors produced by Go's binary.PutVarint
    #[test]
    fn test_encoding_matches_go_varint() {
        let cases: &[(i64, &[u8])] = &[
            (0, &[0x00]),
            (-1, &[0x01]),
            (1, &[0x02]),
            (-2, &[0x03]),
            (2, &[0x04]),
            (63, &[0x7e]),
            (-64, &[0x7f]),
            (64, &[0x80, 0x01]),
            (300, &[0xd8, 0x04]),
        ];

        for (value, expected) in cases {
            let mut buf = [0u8; MAX_VARINT_LEN];
            let n = encode_varint(*value, &mut buf);
            assert_eq!(&buf[..n], *expected, "encoding of {}", value);
            assert_eq!(varint_len(*value), expected.len());
        }
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode_varint(&[0x00]), Some((0, 1)));
        assert_eq!(decode_varint(&[0x01]), Some((-1, 1)));
        assert_eq!(decode_varint(&[0xd8, 0x04]), Some((300, 2)));
        // Trailing bytes beyond the varint are ignored
        assert_eq!(decode_varint(&[0x02, 0xff, 0xff]), Some((1, 1)));
    }

    #[test]
    fn test_decode_truncated_input() {
        // Continuation bit set but no following byte
        assert_eq!(decode_varint(&[0x80]), None);
        assert_eq!(decode_varint(&[]), None);
    }

    #[test]
    fn test_timestamp_fits_payload_buffer() {
        let nanos = wall_clock_nanos();
        assert!(nanos > 0);
        assert!(varint_len(nanos) <= TIMESTAMP_PAYLOAD_LEN);

        let mut buf = timestamp_payload();
        let n = stamp_timestamp(&mut buf);
        let (decoded, consumed) = decode_varint(&buf).unwrap();
        assert_eq!(consumed, n);
        // Decoded stamp is a plausible recent wall-clock reading
        assert!(decoded >= nanos);
    }

    #[test]
    fn test_filler_payload_size_and_content() {
        let payload = filler_payload(10);
        assert_eq!(payload.len(), 10);
        assert!(payload.iter().all(|&b| b == 0));
    }

    proptest! {
        // The varint encoding is a contract boundary with out-of-scope
        // decoders, so the full i64 domain is exercised here.
        #[test]
        fn prop_varint_round_trip(value in any::<i64>()) {
            let mut buf = [0u8; MAX_VARINT_LEN];
            let n = encode_varint(value, &mut buf);
            prop_assert!(n <= MAX_VARINT_LEN);
            prop_assert_eq!(varint_len(value), n);
            let (decoded, consumed) = decode_varint(&buf[..n]).unwrap();
            prop_assert_eq!(decoded, value);
            prop_assert_eq!(consumed, n);
        }

        #[test]
        fn prop_small_magnitudes_encode_short(value in -63i64..=63) {
            prop_assert_eq!(varint_len(value), 1);
        }
    }
}

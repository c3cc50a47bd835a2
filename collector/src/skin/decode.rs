//! Base64 field decoding for client-supplied skin data.
//!
//! Clients send skin fields as unpadded standard-alphabet base64. Decoding
//! never fails upward: a malformed field degrades to an empty buffer so that
//! a record is always produced. Every degradation is logged and counted so
//! the data loss stays visible.

use std::sync::atomic::{AtomicU64, Ordering};

use base64::Engine;

static DECODE_FAILURES: AtomicU64 = AtomicU64::new(0);

fn b64_engine() -> base64::engine::GeneralPurpose {
    base64::engine::GeneralPurpose::new(
        &base64::alphabet::STANDARD,
        base64::engine::general_purpose::NO_PAD,
    )
}

/// Decode one base64 field, degrading to an empty buffer on failure.
///
/// `field` names the source field for the degradation log line.
pub fn decode_field(field: &str, encoded: &str) -> Vec<u8> {
    match b64_engine().decode(encoded.as_bytes()) {
        Ok(bytes) => bytes,
        Err(error) => {
            DECODE_FAILURES.fetch_add(1, Ordering::Relaxed);
            log::warn!("Dropping undecodable {} field: {}", field, error);
            Vec::new()
        }
    }
}

/// Decode the pixel-buffer field.
///
/// On top of [`decode_field`], a decoded length that is not a multiple of 4
/// gets exactly one zero byte appended. A truncated payload can leave the
/// buffer short of an RGBA quad boundary; the single byte restores the
/// alignment but not the missing tail, so a short buffer stays short.
pub fn decode_pixel_field(encoded: &str) -> Vec<u8> {
    let mut pixels = decode_field("pixel data", encoded);
    if pixels.len() % 4 != 0 {
        pixels.push(0);
    }
    pixels
}

/// Number of fields degraded to empty buffers since process start.
pub fn failure_count() -> u64 {
    DECODE_FAILURES.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(bytes: &[u8]) -> String {
        b64_engine().encode(bytes)
    }

    #[test]
    fn valid_fields_round_trip() {
        let original: Vec<u8> = (0u8..=255).collect();
        assert_eq!(decode_field("geometry", &encode(&original)), original);
    }

    #[test]
    fn malformed_field_degrades_to_empty_and_counts() {
        let before = failure_count();
        assert!(decode_field("cape", "!!!not base64!!!").is_empty());
        assert!(failure_count() > before);
    }

    #[test]
    fn empty_field_decodes_to_empty_buffer() {
        assert!(decode_field("resource patch", "").is_empty());
    }

    #[test]
    fn pixel_field_multiple_of_four_is_untouched() {
        let pixels = vec![7u8; 64 * 64 * 4];
        assert_eq!(decode_pixel_field(&encode(&pixels)), pixels);
    }

    #[test]
    fn truncated_pixel_field_gets_one_zero_byte() {
        // 401 bytes: one short of an RGBA boundary plus two
        let original: Vec<u8> = (0..401u16).map(|n| (n % 251) as u8).collect();
        let decoded = decode_pixel_field(&encode(&original));

        assert_eq!(decoded.len(), 402);
        assert_eq!(&decoded[..401], &original[..]);
        assert_eq!(decoded[401], 0);
        // one shot, not pad-to-multiple: 402 is still not a multiple of 4
        assert_ne!(decoded.len() % 4, 0);
    }

    #[test]
    fn malformed_pixel_field_is_empty_not_padded() {
        assert!(decode_pixel_field("????").is_empty());
    }
}

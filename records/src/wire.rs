//! Serde helpers encoding byte buffers as base64 strings in JSON.
//!
//! The whole pipeline uses one base64 convention: standard alphabet, no
//! padding. Client handshake fields arrive that way, and records leave for
//! the sink that way.

use base64::Engine;
use serde::{Deserialize, Deserializer, Serializer};

/// The one base64 engine used across the pipeline.
pub fn engine() -> base64::engine::GeneralPurpose {
    base64::engine::GeneralPurpose::new(
        &base64::alphabet::STANDARD,
        base64::engine::general_purpose::NO_PAD,
    )
}

pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&engine().encode(bytes))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = String::deserialize(deserializer)?;
    engine()
        .decode(encoded.as_bytes())
        .map_err(serde::de::Error::custom)
}

//! Shared record types for the skin capture pipeline.
//!
//! This crate defines the canonical `Skin` record produced by the collector
//! and consumed by the vault, together with its sub-entries (animations,
//! persona pieces, tint colours) and the `SkinUpload` envelope that travels
//! over the wire between the two.
//!
//! All byte-buffer fields serialize as base64 strings (standard alphabet, no
//! padding) via the `wire` helper module, so a record is a single JSON
//! document end to end.

pub mod wire;

use serde::{Deserialize, Serialize};

/// One animation layer of an animated skin.
///
/// Frame counts arrive from clients as floating point and are carried through
/// unchanged; the animation and expression type tags are opaque numeric codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinAnimation {
    pub image_width: u32,
    pub image_height: u32,
    #[serde(with = "wire")]
    pub image_data: Vec<u8>,
    pub animation_type: u32,
    pub frame_count: f32,
    pub expression_type: u32,
}

/// A single persona customization piece (hair, eyes, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaPiece {
    pub piece_id: String,
    pub piece_type: String,
    pub pack_id: String,
    pub default: bool,
    pub product_id: String,
}

/// Colour overrides for one persona piece type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaPieceTintColour {
    pub piece_type: String,
    pub colours: Vec<String>,
}

/// The canonical skin record.
///
/// A flat aggregate of everything a client declares about its current skin.
/// Sub-lists keep the order of their source lists; index correspondence with
/// other client-side state is positional and must not be disturbed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skin {
    pub skin_id: String,
    pub play_fab_id: String,
    #[serde(with = "wire")]
    pub skin_resource_patch: Vec<u8>,
    pub skin_image_width: u32,
    pub skin_image_height: u32,
    /// Raw RGBA pixel buffer. The intended invariant is
    /// `skin_data.len() == skin_image_width * skin_image_height * 4`;
    /// truncated client payloads can leave it shorter.
    #[serde(with = "wire")]
    pub skin_data: Vec<u8>,
    pub animations: Vec<SkinAnimation>,
    pub cape_image_width: u32,
    pub cape_image_height: u32,
    #[serde(with = "wire")]
    pub cape_data: Vec<u8>,
    #[serde(with = "wire")]
    pub skin_geometry: Vec<u8>,
    /// Animation metadata exactly as the client sent it, not base64-decoded.
    #[serde(with = "wire")]
    pub animation_data: Vec<u8>,
    /// Geometry engine version tag, raw string bytes.
    #[serde(with = "wire")]
    pub geometry_data_engine_version: Vec<u8>,
    pub premium_skin: bool,
    pub persona_skin: bool,
    /// Always false: the collector never reports a persona cape on a classic skin.
    pub persona_cape_on_classic_skin: bool,
    /// Always true: every captured session counts as the primary user.
    pub primary_user: bool,
    pub cape_id: String,
    /// Always empty; a combined identifier is never derived here.
    pub full_id: String,
    pub skin_colour: String,
    pub arm_size: String,
    pub persona_pieces: Vec<PersonaPiece>,
    pub piece_tint_colours: Vec<PersonaPieceTintColour>,
    pub trusted: bool,
}

/// The envelope handed to the upload sink: one skin record plus the identity
/// of the player wearing it and the server address the client connected with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinUpload {
    pub player_name: String,
    pub xuid: String,
    pub server_address: String,
    pub skin: Skin,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_skin() -> Skin {
        Skin {
            skin_id: "c1b2".to_string(),
            play_fab_id: "pf-77".to_string(),
            skin_resource_patch: b"{\"geometry\":{}}".to_vec(),
            skin_image_width: 2,
            skin_image_height: 2,
            skin_data: vec![1u8; 16],
            animations: vec![SkinAnimation {
                image_width: 4,
                image_height: 4,
                image_data: vec![9, 8, 7],
                animation_type: 1,
                frame_count: 2.5,
                expression_type: 0,
            }],
            cape_data: vec![3, 3],
            skin_geometry: b"geom".to_vec(),
            animation_data: b"meta".to_vec(),
            geometry_data_engine_version: b"1.16.0".to_vec(),
            primary_user: true,
            cape_id: "cape-1".to_string(),
            persona_pieces: vec![PersonaPiece {
                piece_id: "p1".to_string(),
                piece_type: "hair".to_string(),
                ..Default::default()
            }],
            piece_tint_colours: vec![PersonaPieceTintColour {
                piece_type: "hair".to_string(),
                colours: vec!["#ff0000".to_string(); 4],
            }],
            trusted: true,
            ..Default::default()
        }
    }

    #[test]
    fn skin_round_trips_through_json() {
        let skin = sample_skin();
        let json = serde_json::to_string(&skin).unwrap();
        let parsed: Skin = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, skin);
    }

    #[test]
    fn byte_fields_serialize_as_base64_strings() {
        let json = serde_json::to_value(sample_skin()).unwrap();
        // "geom" in unpadded standard base64
        assert_eq!(json["skin_geometry"], "Z2VvbQ");
        assert!(json["skin_data"].is_string());
    }

    #[test]
    fn upload_envelope_round_trips() {
        let upload = SkinUpload {
            player_name: "Steve".to_string(),
            xuid: "2535400000000000".to_string(),
            server_address: "play.example.net:19132".to_string(),
            skin: sample_skin(),
        };
        let json = serde_json::to_string(&upload).unwrap();
        let parsed: SkinUpload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, upload);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let skin: Skin = serde_json::from_str("{}").unwrap();
        assert!(skin.skin_data.is_empty());
        assert!(skin.animations.is_empty());
        assert_eq!(skin.skin_image_width, 0);
    }
}

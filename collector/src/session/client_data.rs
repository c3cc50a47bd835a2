//! The client-supplied handshake data describing a player's current skin.
//!
//! Field names follow the Bedrock handshake JSON (PascalCase). Everything is
//! optional on the wire: absent fields deserialize to empty values, and the
//! skin pipeline degrades them to zero-valued buffers downstream.

use serde::Deserialize;

/// Skin, cape and persona customization fields captured at login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientData {
    #[serde(rename = "SkinId")]
    pub skin_id: String,
    #[serde(rename = "PlayFabId")]
    pub play_fab_id: String,
    #[serde(rename = "CapeId")]
    pub cape_id: String,
    /// Base64 resource patch selecting the geometry to use.
    #[serde(rename = "SkinResourcePatch")]
    pub skin_resource_patch: String,
    /// Base64 RGBA pixel buffer.
    #[serde(rename = "SkinData")]
    pub skin_data: String,
    #[serde(rename = "SkinImageWidth")]
    pub skin_image_width: i64,
    #[serde(rename = "SkinImageHeight")]
    pub skin_image_height: i64,
    #[serde(rename = "CapeData")]
    pub cape_data: String,
    #[serde(rename = "CapeImageWidth")]
    pub cape_image_width: i64,
    #[serde(rename = "CapeImageHeight")]
    pub cape_image_height: i64,
    #[serde(rename = "SkinGeometryData")]
    pub skin_geometry: String,
    /// Engine version of the geometry data, a plain version string.
    #[serde(rename = "SkinGeometryDataEngineVersion")]
    pub skin_geometry_version: String,
    /// Serialized animation metadata, a plain JSON string.
    #[serde(rename = "SkinAnimationData")]
    pub skin_animation_data: String,
    #[serde(rename = "AnimatedImageData")]
    pub animated_image_data: Vec<AnimatedImageData>,
    #[serde(rename = "PersonaPieces")]
    pub persona_pieces: Vec<PersonaPieceData>,
    #[serde(rename = "PieceTintColors")]
    pub piece_tint_colours: Vec<PieceTintColourData>,
    #[serde(rename = "PremiumSkin")]
    pub premium_skin: bool,
    #[serde(rename = "PersonaSkin")]
    pub persona_skin: bool,
    #[serde(rename = "TrustedSkin")]
    pub trusted_skin: bool,
    #[serde(rename = "ArmSize")]
    pub arm_size: String,
    #[serde(rename = "SkinColor")]
    pub skin_colour: String,
    /// The server address the client dialed; carried to the sink as record origin.
    #[serde(rename = "ServerAddress")]
    pub server_address: String,
}

/// One animation frame set inside the handshake data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnimatedImageData {
    /// Base64 frame image.
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "ImageWidth")]
    pub image_width: i64,
    #[serde(rename = "ImageHeight")]
    pub image_height: i64,
    #[serde(rename = "Type")]
    pub animation_type: i64,
    #[serde(rename = "Frames")]
    pub frames: f64,
    #[serde(rename = "AnimationExpression")]
    pub animation_expression: i64,
}

/// One persona piece inside the handshake data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonaPieceData {
    #[serde(rename = "PieceId")]
    pub piece_id: String,
    #[serde(rename = "PieceType")]
    pub piece_type: String,
    #[serde(rename = "PackId")]
    pub pack_id: String,
    #[serde(rename = "IsDefault")]
    pub default: bool,
    #[serde(rename = "ProductId")]
    pub product_id: String,
}

/// Tint colours for one persona piece type. The client always sends exactly
/// four colour slots.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PieceTintColourData {
    #[serde(rename = "PieceType")]
    pub piece_type: String,
    #[serde(rename = "Colors")]
    pub colours: [String; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pascal_case_handshake_fields() {
        let json = r##"{
            "SkinId": "s-1",
            "SkinData": "AAAA",
            "SkinImageWidth": 64,
            "SkinImageHeight": 64,
            "PersonaSkin": true,
            "PieceTintColors": [
                {"PieceType": "persona_hair", "Colors": ["#1", "#2", "#3", "#4"]}
            ],
            "ServerAddress": "mc.example.net:19132"
        }"##;

        let data: ClientData = serde_json::from_str(json).unwrap();
        assert_eq!(data.skin_id, "s-1");
        assert_eq!(data.skin_image_width, 64);
        assert!(data.persona_skin);
        assert_eq!(data.piece_tint_colours[0].colours[2], "#3");
        assert_eq!(data.server_address, "mc.example.net:19132");
        // absent fields fall back to empty values
        assert!(data.cape_data.is_empty());
        assert!(data.animated_image_data.is_empty());
    }
}

//! Normalization of client-supplied skin fields into canonical records.
//!
//! Two entry points produce the one `records::Skin` shape:
//! - [`from_client_data`] assembles a record from the raw handshake fields a
//!   client supplied at login (base64 strings, nested lists). This is the
//!   only place transport-level decoding happens.
//! - [`from_packet`] wraps the already-parsed skin carried by an in-session
//!   skin-change packet; the wire layer decoded it, nothing is re-decoded.
//!
//! Both paths yield field-for-field equivalent records for the same logical
//! skin.

pub mod decode;

use records::{PersonaPiece, PersonaPieceTintColour, Skin, SkinAnimation};

use crate::session::client_data::{
    AnimatedImageData, ClientData, PersonaPieceData, PieceTintColourData,
};
use crate::session::wire::PlayerSkinPacket;

/// Build one animation entry from a client animation item.
fn animation_entry(item: &AnimatedImageData) -> SkinAnimation {
    SkinAnimation {
        image_width: item.image_width as u32,
        image_height: item.image_height as u32,
        image_data: decode::decode_field("animation image", &item.image),
        animation_type: item.animation_type as u32,
        frame_count: item.frames as f32,
        expression_type: item.animation_expression as u32,
    }
}

/// Build one persona piece entry. Field copy, no decoding.
fn persona_piece(item: &PersonaPieceData) -> PersonaPiece {
    PersonaPiece {
        piece_id: item.piece_id.clone(),
        piece_type: item.piece_type.clone(),
        pack_id: item.pack_id.clone(),
        default: item.default,
        product_id: item.product_id.clone(),
    }
}

/// Build one tint-colour entry. Field copy of the fixed-size colour set.
fn tint_colour(item: &PieceTintColourData) -> PersonaPieceTintColour {
    PersonaPieceTintColour {
        piece_type: item.piece_type.clone(),
        colours: item.colours.to_vec(),
    }
}

/// Assemble a skin record from join-time client data.
///
/// Never fails: malformed base64 fields degrade to empty buffers (see
/// [`decode`]). The animation metadata and geometry version tag are carried
/// as the raw bytes of the client string, not base64-decoded.
pub fn from_client_data(data: &ClientData) -> Skin {
    Skin {
        skin_id: data.skin_id.clone(),
        play_fab_id: data.play_fab_id.clone(),
        skin_resource_patch: decode::decode_field("resource patch", &data.skin_resource_patch),
        skin_image_width: data.skin_image_width as u32,
        skin_image_height: data.skin_image_height as u32,
        skin_data: decode::decode_pixel_field(&data.skin_data),
        animations: data.animated_image_data.iter().map(animation_entry).collect(),
        cape_image_width: data.cape_image_width as u32,
        cape_image_height: data.cape_image_height as u32,
        cape_data: decode::decode_field("cape", &data.cape_data),
        skin_geometry: decode::decode_field("geometry", &data.skin_geometry),
        animation_data: data.skin_animation_data.as_bytes().to_vec(),
        geometry_data_engine_version: data.skin_geometry_version.as_bytes().to_vec(),
        premium_skin: data.premium_skin,
        persona_skin: data.persona_skin,
        persona_cape_on_classic_skin: false,
        primary_user: true,
        cape_id: data.cape_id.clone(),
        full_id: String::new(),
        skin_colour: data.skin_colour.clone(),
        arm_size: data.arm_size.clone(),
        persona_pieces: data.persona_pieces.iter().map(persona_piece).collect(),
        piece_tint_colours: data.piece_tint_colours.iter().map(tint_colour).collect(),
        trusted: data.trusted_skin,
    }
}

/// Assemble a skin record from an in-session skin-change packet.
pub fn from_packet(packet: &PlayerSkinPacket) -> Skin {
    packet.skin.clone()
}

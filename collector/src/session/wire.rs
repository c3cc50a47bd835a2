//! Wire frames exchanged with a connected client.
//!
//! The session protocol is newline-delimited JSON: the first line of a
//! connection is a [`LoginPacket`], every later line is a [`Frame`]. Frames
//! are an internally-tagged enum, so each packet kind deserializes straight
//! into its typed payload and handlers never downcast.

use serde::{Deserialize, Serialize};

use super::client_data::ClientData;

/// The first frame of a connection: player identity plus raw handshake data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginPacket {
    pub display_name: String,
    pub xuid: String,
    pub client_data: ClientData,
}

/// An in-session skin change. The skin arrives already parsed by the wire
/// layer; byte fields are base64 strings in the frame JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSkinPacket {
    pub skin: records::Skin,
    pub new_skin_name: String,
    pub old_skin_name: String,
}

/// A chat message from the client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextPacket {
    pub message: String,
}

/// Every in-session frame kind, tagged by `"packet"`.
#[derive(Debug, Deserialize)]
#[serde(tag = "packet", rename_all = "snake_case")]
pub enum Frame {
    PlayerSkin(PlayerSkinPacket),
    Text(TextPacket),
}

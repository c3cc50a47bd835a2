//! The per-connection session layer.
//!
//! A [`Session`] owns what the host knows about one connected player: the
//! identity and client data captured at login, the skin the player currently
//! wears, and a replaceable [`SkinChangeHandler`] slot. Skin-change frames
//! are routed through whatever handler is installed; [`DefaultSkinHandler`]
//! is the host's own behavior and is installed on every fresh session.

pub mod client_data;
pub mod intercept;
pub mod wire;

use async_trait::async_trait;

use client_data::ClientData;
use wire::PlayerSkinPacket;

/// The authenticated identity of a connected player.
#[derive(Debug, Clone, Default)]
pub struct PlayerIdentity {
    pub display_name: String,
    pub xuid: String,
}

/// Host-owned state for one session.
#[derive(Debug, Default)]
pub struct SessionState {
    pub identity: PlayerIdentity,
    pub client_data: ClientData,
    /// The skin the host currently considers active for this player.
    pub current_skin: records::Skin,
}

/// Handler for in-session skin-change events.
///
/// One handler is installed per session; installing a new one replaces the
/// previous. Implementations run inside the session's sequential task, so a
/// handler completes (success or failure) before the next frame is read.
#[async_trait]
pub trait SkinChangeHandler: Send + Sync {
    async fn handle(
        &self,
        packet: &PlayerSkinPacket,
        session: &mut SessionState,
    ) -> crate::error::Result<()>;
}

/// One connected player session.
pub struct Session {
    state: SessionState,
    skin_handler: Box<dyn SkinChangeHandler>,
}

impl Session {
    /// Create a session from login-time data, with the host's default
    /// skin-change handling installed.
    pub fn new(identity: PlayerIdentity, client_data: ClientData) -> Self {
        Session {
            state: SessionState {
                identity,
                client_data,
                current_skin: records::Skin::default(),
            },
            skin_handler: Box::new(DefaultSkinHandler),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replace the session's skin-change handler.
    pub fn set_skin_handler(&mut self, handler: Box<dyn SkinChangeHandler>) {
        self.skin_handler = handler;
    }

    /// Route a skin-change packet through the installed handler.
    pub async fn handle_skin_change(
        &mut self,
        packet: &PlayerSkinPacket,
    ) -> crate::error::Result<()> {
        let Session {
            state,
            skin_handler,
        } = self;
        skin_handler.handle(packet, state).await
    }
}

/// The host's own skin-change behavior: verify the packet skin is internally
/// consistent, then make it the session's active skin.
pub struct DefaultSkinHandler;

impl DefaultSkinHandler {
    fn check_dimensions(
        buffer_name: &str,
        buffer: &[u8],
        width: u32,
        height: u32,
    ) -> crate::error::Result<()> {
        let expected = width as usize * height as usize * 4;
        if buffer.len() != expected {
            return Err(crate::error::CollectorError::skin_rejected(format!(
                "{} buffer is {} bytes, {}x{} needs {}",
                buffer_name,
                buffer.len(),
                width,
                height,
                expected
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SkinChangeHandler for DefaultSkinHandler {
    async fn handle(
        &self,
        packet: &PlayerSkinPacket,
        session: &mut SessionState,
    ) -> crate::error::Result<()> {
        let skin = &packet.skin;
        Self::check_dimensions(
            "skin",
            &skin.skin_data,
            skin.skin_image_width,
            skin.skin_image_height,
        )?;
        Self::check_dimensions(
            "cape",
            &skin.cape_data,
            skin.cape_image_width,
            skin.cape_image_height,
        )?;

        session.current_skin = skin.clone();
        log::debug!(
            "{} now wears skin {}",
            session.identity.display_name,
            skin.skin_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consistent_skin(skin_id: &str) -> records::Skin {
        records::Skin {
            skin_id: skin_id.to_string(),
            skin_image_width: 2,
            skin_image_height: 2,
            skin_data: vec![1u8; 16],
            ..Default::default()
        }
    }

    fn packet_with(skin: records::Skin) -> PlayerSkinPacket {
        PlayerSkinPacket {
            skin,
            new_skin_name: "fresh".to_string(),
            old_skin_name: String::new(),
        }
    }

    #[tokio::test]
    async fn default_handler_stores_a_consistent_skin() {
        let mut session = Session::new(PlayerIdentity::default(), ClientData::default());
        let packet = packet_with(consistent_skin("s-ok"));

        session.handle_skin_change(&packet).await.unwrap();
        assert_eq!(session.state().current_skin.skin_id, "s-ok");
    }

    #[tokio::test]
    async fn default_handler_rejects_dimension_mismatch() {
        let mut session = Session::new(PlayerIdentity::default(), ClientData::default());
        let mut skin = consistent_skin("s-bad");
        skin.skin_data.truncate(15);
        let packet = packet_with(skin);

        let error = session.handle_skin_change(&packet).await.unwrap_err();
        assert!(matches!(
            error,
            crate::error::CollectorError::SkinRejected(_)
        ));
        // the rejected skin never became active
        assert_eq!(session.state().current_skin.skin_id, "");
    }
}

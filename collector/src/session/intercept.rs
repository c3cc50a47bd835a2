//! Skin interception: capture at join, then tap every in-session change.
//!
//! [`SkinInterceptor`] decorates the host's default skin-change handling.
//! [`SkinInterceptor::attach`] runs once per session at acceptance: it
//! assembles a record from the join-time client data, dispatches it, and
//! installs the interceptor as the session's skin-change handler. From then
//! on every change runs default handling first; only a successful default
//! pass is followed by assembly and dispatch of the new skin. The
//! interceptor stays installed for the life of the session.

use std::sync::Arc;

use async_trait::async_trait;

use super::wire::PlayerSkinPacket;
use super::{DefaultSkinHandler, Session, SessionState, SkinChangeHandler};
use crate::upload::{self, UploadSink};
use crate::{error, skin};

/// Decorator around the host's default skin-change handler.
pub struct SkinInterceptor {
    default_handler: Box<dyn SkinChangeHandler>,
    sink: Arc<dyn UploadSink>,
}

impl SkinInterceptor {
    /// Wrap a default handler. The sink is injected here; the interceptor
    /// holds no global upload state.
    pub fn new(default_handler: Box<dyn SkinChangeHandler>, sink: Arc<dyn UploadSink>) -> Self {
        SkinInterceptor {
            default_handler,
            sink,
        }
    }

    /// Join-time capture: dispatch a record built from the session's client
    /// data, then arm the session for in-session changes.
    pub fn attach(session: &mut Session, sink: Arc<dyn UploadSink>) {
        let state = session.state();
        upload::dispatch(
            Arc::clone(&sink),
            skin::from_client_data(&state.client_data),
            state.identity.display_name.clone(),
            state.identity.xuid.clone(),
            state.client_data.server_address.clone(),
        );

        session.set_skin_handler(Box::new(SkinInterceptor::new(
            Box::new(DefaultSkinHandler),
            sink,
        )));
    }
}

#[async_trait]
impl SkinChangeHandler for SkinInterceptor {
    async fn handle(
        &self,
        packet: &PlayerSkinPacket,
        session: &mut SessionState,
    ) -> error::Result<()> {
        // The host's own consistency guarantees come first; a failure here
        // propagates unchanged and nothing is dispatched for this event.
        self.default_handler.handle(packet, session).await?;

        log::info!(
            "{} new skin: {}",
            session.identity.display_name,
            packet.new_skin_name
        );
        upload::dispatch(
            Arc::clone(&self.sink),
            skin::from_packet(packet),
            session.identity.display_name.clone(),
            session.identity.xuid.clone(),
            session.client_data.server_address.clone(),
        );
        Ok(())
    }
}

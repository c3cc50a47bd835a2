//! The session listener and per-connection frame loop.
//!
//! Each accepted connection gets its own task. The task reads the login
//! frame, runs the join-time skin capture, then processes in-session frames
//! strictly in order. A handler failure ends the session, mirroring a host
//! kicking the client whose packet its own handler refused.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::config::Config;
use crate::error::{CollectorError, Result};
use crate::session::intercept::SkinInterceptor;
use crate::session::wire::{Frame, LoginPacket};
use crate::session::{PlayerIdentity, Session};
use crate::upload::UploadSink;

/// Bind the listener and accept sessions until shutdown.
pub async fn run(config: Config, sink: Arc<dyn UploadSink>) -> Result<()> {
    let listener = TcpListener::bind(&config.address).await?;
    log::info!("{} listening on {}", config.name, config.address);

    loop {
        let (stream, peer_addr) = listener.accept().await?;
        let sink = Arc::clone(&sink);

        tokio::spawn(async move {
            match handle_connection(stream, sink).await {
                Ok(player) => log::info!("{} ({}) disconnected", player, peer_addr),
                Err(error) => log::error!("Session from {} ended: {}", peer_addr, error),
            }
        });
    }
}

/// Drive one session from login to disconnect. Returns the player name for
/// the disconnect log line.
async fn handle_connection(stream: TcpStream, sink: Arc<dyn UploadSink>) -> Result<String> {
    let mut lines = BufReader::new(stream).lines();

    let login_line = lines
        .next_line()
        .await?
        .ok_or_else(|| CollectorError::protocol_error("connection closed before login"))?;
    let login: LoginPacket = serde_json::from_str(&login_line)?;
    log::info!("{} connected", login.display_name);

    let identity = PlayerIdentity {
        display_name: login.display_name.clone(),
        xuid: login.xuid,
    };
    let mut session = Session::new(identity, login.client_data);

    // Join-time capture happens before any in-session frame is read, so no
    // skin-change handling can precede the join dispatch.
    SkinInterceptor::attach(&mut session, sink);

    while let Some(line) = lines.next_line().await? {
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Frame>(&line)? {
            Frame::PlayerSkin(packet) => session.handle_skin_change(&packet).await?,
            Frame::Text(packet) => {
                log::info!("<{}> {}", session.state().identity.display_name, packet.message)
            }
        }
    }

    Ok(login.display_name)
}

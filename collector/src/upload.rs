//! The upload sink boundary and fire-and-forget dispatch.
//!
//! A finished record is handed off exactly once, as an owned value, to a
//! detached task. Session code never observes the outcome; sink failures are
//! logged inside the task and go no further.

use std::sync::Arc;

use async_trait::async_trait;
use records::{Skin, SkinUpload};

/// Accepts finished skin records.
///
/// Implementations own their transport entirely: the core applies no retry,
/// timeout or ordering on top of `upload`.
#[async_trait]
pub trait UploadSink: Send + Sync {
    async fn upload(
        &self,
        skin: Skin,
        player_name: String,
        xuid: String,
        server_address: String,
    ) -> crate::error::Result<()>;
}

/// Sink client POSTing the JSON upload envelope to an HTTP endpoint.
pub struct HttpSink {
    client: reqwest::Client,
    url: String,
}

impl HttpSink {
    pub fn new(url: String) -> Self {
        HttpSink {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl UploadSink for HttpSink {
    async fn upload(
        &self,
        skin: Skin,
        player_name: String,
        xuid: String,
        server_address: String,
    ) -> crate::error::Result<()> {
        let upload = SkinUpload {
            player_name,
            xuid,
            server_address,
            skin,
        };
        self.client
            .post(&self.url)
            .json(&upload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Dispatch one record to the sink, detached.
///
/// Returns immediately; the spawned task logs any sink error and nothing
/// else. No ordering is guaranteed between dispatches.
pub fn dispatch(
    sink: Arc<dyn UploadSink>,
    skin: Skin,
    player_name: String,
    xuid: String,
    server_address: String,
) {
    tokio::spawn(async move {
        let player = player_name.clone();
        if let Err(error) = sink.upload(skin, player_name, xuid, server_address).await {
            log::error!("Skin upload for {} failed: {}", player, error);
        }
    });
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use tokio::sync::mpsc;

    /// Test sink capturing every upload on a channel.
    pub(crate) struct ChannelSink(pub(crate) mpsc::UnboundedSender<SkinUpload>);

    #[async_trait]
    impl UploadSink for ChannelSink {
        async fn upload(
            &self,
            skin: Skin,
            player_name: String,
            xuid: String,
            server_address: String,
        ) -> crate::error::Result<()> {
            self.0
                .send(SkinUpload {
                    player_name,
                    xuid,
                    server_address,
                    skin,
                })
                .map_err(|_| crate::error::CollectorError::config_error("sink closed"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ChannelSink;
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn dispatch_delivers_the_owned_record() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sink: Arc<dyn UploadSink> = Arc::new(ChannelSink(tx));

        let skin = Skin {
            skin_id: "dispatched".to_string(),
            ..Default::default()
        };
        dispatch(
            sink,
            skin,
            "Steve".to_string(),
            "123".to_string(),
            "lobby:19132".to_string(),
        );

        let received = rx.recv().await.unwrap();
        assert_eq!(received.skin.skin_id, "dispatched");
        assert_eq!(received.player_name, "Steve");
        assert_eq!(received.server_address, "lobby:19132");
    }

    #[tokio::test]
    async fn dispatch_swallows_sink_failure() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let sink: Arc<dyn UploadSink> = Arc::new(ChannelSink(tx));

        // must not panic or surface anywhere
        dispatch(
            sink,
            Skin::default(),
            String::new(),
            String::new(),
            String::new(),
        );
        tokio::task::yield_now().await;
    }
}

//! HTTP ingestion endpoint for skin uploads.

/// HTTP POST handler receiving one `SkinUpload` envelope as a JSON body and
/// forwarding it to the background archive queue.
///
/// Parsing and queueing errors are converted to the appropriate HTTP
/// response by `VaultError`. Awaiting the channel send applies backpressure
/// when the archiver falls behind.
pub async fn post_handler(
    req_body: String,
    tx: actix_web::web::Data<tokio::sync::mpsc::Sender<records::SkinUpload>>,
) -> actix_web::Result<&'static str, crate::error::VaultError> {
    log::debug!("{} bytes received", req_body.len());

    let upload: records::SkinUpload = serde_json::from_str(&req_body)?;
    log::info!(
        "Received skin {} worn by {} on {}",
        upload.skin.skin_id,
        upload.player_name,
        upload.server_address
    );
    tx.send(upload).await?;

    Ok("ACK")
}

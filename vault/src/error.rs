//! HTTP error responses for the vault ingestion endpoint.
//!
//! Two failure categories reach a client:
//! - `BadPayload`: the request body did not parse as a skin upload; the
//!   sender should fix the payload (HTTP 400).
//! - `QueueClosed`: the background archiver is gone and nothing can be
//!   accepted; a server-side failure (HTTP 500).
//!
//! Details are logged at conversion time; response bodies stay generic.

use records::SkinUpload;

#[derive(Debug)]
pub enum VaultError {
    /// Malformed upload envelope (HTTP 400).
    BadPayload,
    /// Archive queue closed, the archiver task is no longer running (HTTP 500).
    QueueClosed,
}

impl std::fmt::Display for VaultError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VaultError::BadPayload => write!(f, "Error parsing skin upload."),
            VaultError::QueueClosed => write!(f, "Internal server error."),
        }
    }
}

impl actix_web::error::ResponseError for VaultError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            VaultError::BadPayload => actix_web::http::StatusCode::BAD_REQUEST,
            VaultError::QueueClosed => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse<actix_web::body::BoxBody> {
        actix_web::HttpResponse::build(self.status_code())
            .content_type(actix_web::http::header::ContentType::plaintext())
            .body(self.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(error: serde_json::Error) -> Self {
        log::error!("Rejecting unparseable skin upload: {}", error);
        VaultError::BadPayload
    }
}

impl From<tokio::sync::mpsc::error::SendError<SkinUpload>> for VaultError {
    fn from(error: tokio::sync::mpsc::error::SendError<SkinUpload>) -> Self {
        log::error!("Failed to queue skin upload for archiving: {}", error);
        VaultError::QueueClosed
    }
}

//! Collector library for the skin capture pipeline.
//!
//! This crate provides the pieces used by the `collector` binary:
//! - The `session` module hosts the per-connection session layer: the client
//!   handshake data, the typed packet frames, the replaceable skin-change
//!   handler slot and the interception controller that taps it.
//! - The `skin` module normalizes loosely-structured client fields into the
//!   canonical `records::Skin` record (base64 field decoding, sub-record
//!   builders, record assembly).
//! - The `upload` module defines the `UploadSink` boundary and the
//!   fire-and-forget dispatch used to hand finished records off.
//! - The `server` module runs the TCP accept loop and drives sessions.
//! - The `config`, `commands` and `error` modules carry configuration
//!   loading, CLI wiring and the crate-wide error type.
//!
//! Design notes:
//! - Record assembly is pure and synchronous; everything observable from a
//!   session happens in its own sequential task.
//! - The sink is injected where it is used; nothing in this crate holds
//!   process-global upload state.

pub mod commands;
pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod skin;
pub mod upload;

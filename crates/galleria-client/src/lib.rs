//! Galleria admin client
//!
//! This crate provides:
//! - HTTP transport with bearer-token authentication and request timeouts
//! - A typed session state machine over a pluggable token store
//! - The `AdminApi` facade exposing one collection handle per entity plus
//!   login, multipart product creation, and dashboard metrics

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod session;

pub use api::{AdminApi, Collection, ImageUpload};
pub use config::AdminConfig;
pub use error::{ClientError, Result};
pub use http::HttpTransport;
pub use session::{
    AuthSession, MemoryTokenStore, Session, SessionError, SessionManager, TokenStore,
};

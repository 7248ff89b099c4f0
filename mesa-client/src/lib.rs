//! Mesa Client - HTTP client for the appointments store
//!
//! The appointments store owns tables and reservations (CRUD and status
//! transitions). This crate fetches read-only snapshots, validates them at
//! the boundary, and forwards seat / leave / no-show actions.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::StoreClient;

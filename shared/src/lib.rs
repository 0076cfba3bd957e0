//! Types shared between directory-server and its API consumers
//!
//! - [`models`] - directory records and their create/update payloads
//! - [`client`] - auth request/response DTOs

pub mod client;
pub mod models;

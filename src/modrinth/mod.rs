//! Modrinth Integration
//!
//! HTTP access to the public Modrinth API. Every call is a single GET with
//! no retries; failures surface as [`ModrinthError`].

mod client;
mod error;

pub use client::{default_user_agent, ModrinthClient, ModrinthConfig, Transport, DEFAULT_BASE_URL};
pub use error::{ModrinthError, ModrinthResult};

//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - LLM access (OpenAI-compatible HTTP client, offline mock)
//! - Wiring (dependency container, CLI router and controllers)
//! - HTTP API (axum routes, error mapping)

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
pub use api::*;
pub use http::*;

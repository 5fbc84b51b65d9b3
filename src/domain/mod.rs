//! # Domain Layer
//!
//! Conversation models, the reply style catalogue, and the pure services that
//! turn a transcript into a prompt and an LLM reply into an analysis.
//! This layer is independent of HTTP clients and server frameworks.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;

//! # Application Layer
//!
//! Use cases and the ports they depend on, coordinating the domain services
//! with whichever LLM connector the container wires in.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;

//! Domain services: pure functions shaping the LLM exchange.

pub mod prompt_builder;
pub mod response_normalizer;

pub use prompt_builder::{build_prompt, format_transcript, SYSTEM_PROMPT};
pub use response_normalizer::{fallback_result, normalize};

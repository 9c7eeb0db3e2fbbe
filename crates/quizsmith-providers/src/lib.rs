//! quizsmith-providers: text-generation provider integrations.
//!
//! Implements the `LlmProvider` trait for OpenAI-compatible chat APIs and a
//! mock backend, plus configuration loading and the provider factory.

pub mod config;
pub mod mock;
pub mod openai;

pub use config::{create_provider, load_config, ProviderConfig, QuizsmithConfig};
pub use quizsmith_core::error::ProviderError;

//! AI core for Skycast
//!
//! Inference engine abstraction plus the Ollama-compatible chat client used
//! to turn assembled forecast reports into natural-language advice.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::OllamaInferenceEngine;
pub use ports::{
    InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage,
};

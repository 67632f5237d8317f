//! Ollama-compatible inference engine implementation
//!
//! Connects to any Ollama-compatible server which provides the `/api/chat`
//! endpoint.

mod client;

pub use client::OllamaInferenceEngine;

//! LLM provider adapters

pub mod openai;
pub mod gemini;

// Re-export for convenience
pub use openai::OpenAiClient;
pub use gemini::GeminiClient;

use serde::Deserialize;

// ===== Shared Error Envelope =====

/// Error envelope both vendors wrap failures in:
/// `{"error":{"message":"..."}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope
{   pub error: ErrorDetail
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail
{   pub message: String
}

/// Pull the nested error message out of a failure body,
/// falling back to the vendor's generic message.
pub fn error_message_or(body: &str, fallback: &str) -> String
{   serde_json::from_str::<ErrorEnvelope>(body)
      .map(|e| e.error.message)
      .unwrap_or_else(|_| fallback.to_string())
}

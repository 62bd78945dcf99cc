//! Unified request and response types

use serde::{Deserialize, Serialize};

/// Unified prompt request
///
/// Carries exactly one system instruction and one user instruction.
/// Callers that want conversation history concatenate it into the
/// prompts themselves; no multi-turn state is modeled here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest
{   /// Model name
    pub model: String
  , /// System instruction
    pub system_prompt: String
  , /// User instruction
    pub user_prompt: String
  , /// Temperature for sampling
    pub temperature: Option<f32>
}

impl PromptRequest
{   /// Build a request with the default sampling temperature
    pub fn new(
      model: impl Into<String>
    , system_prompt: impl Into<String>
    , user_prompt: impl Into<String>
    ) -> Self
    {   PromptRequest
        {   model: model.into()
          , system_prompt: system_prompt.into()
          , user_prompt: user_prompt.into()
          , temperature: Some(0.7)
        }
    }
}

/// Unified prompt response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse
{   /// Generated text
    pub text: String
  , /// Provider that generated it
    pub provider: crate::Provider
  , /// Model that generated it
    pub model: String
}

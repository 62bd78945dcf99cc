//! # aura-llm
//!
//! Core library for the Aura sidepanel assistant: a stateless LLM
//! request dispatcher over the public provider APIs, plus the locally
//! persisted snippet list and the assistant's prompt presets.
//!
//! One call, one outbound request: the dispatcher classifies the model
//! string into a [`Provider`], builds that vendor's request shape,
//! issues it, and returns the generated text. Rendering, storage of
//! settings, and UI concerns stay with the caller.

pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod client;
pub mod prompts;
pub mod snippets;

use serde::{Deserialize, Serialize};

pub use client::Dispatcher;
pub use config::{DispatchConfig, KeyConfig};
pub use error::Error;
pub use request::{PromptRequest, PromptResponse};
pub use snippets::{Snippet, SnippetStore};

/// Enum representing the supported LLM providers.
/// Each variant corresponds to a public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
pub enum Provider
{   /// OpenAI (chat-completions API)
    OpenAi
  ,
    /// Google AI Studio (Gemini and Gemma, generateContent API)
    Gemini
}

impl Provider
{   /// Classify a model string into a provider.
    ///
    /// The dispatch is total: a model string matching no known vendor
    /// family is an error, never a silent fallback. Adding a vendor
    /// means adding a variant and a branch here.
    pub fn classify(model: &str)
      -> Result<Provider, Error>
    {   if model.contains("gpt")
        {   return Ok(Provider::OpenAi);
        }
        if model.contains("gemini") || model.contains("gemma")
        {   return Ok(Provider::Gemini);
        }
        Err(Error::UnknownProvider(model.to_string()))
    }
}

impl std::fmt::Display for Provider
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   match self
        {   Provider::OpenAi => write!(f, "OpenAI")
          , Provider::Gemini => write!(f, "Gemini")
        }
    }
}

//! Configuration for the dispatcher and credential resolution

use serde::{Deserialize, Serialize};

/// Environment variable holding a user-set API key
pub const USER_KEY_ENV: &str = "AURA_API_KEY";
/// Environment variable holding the fallback API key
pub const DEFAULT_KEY_ENV: &str = "AURA_DEFAULT_API_KEY";

/// API key resolution with explicit precedence:
/// a user-set key always wins over the packaged default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyConfig
{   /// Key set by the user at runtime
    pub user_key: Option<String>
  , /// Fallback key configured at startup
    pub default_key: Option<String>
}

impl KeyConfig
{   /// Load both keys from the environment once at startup
    pub fn from_env() -> Self
    {   KeyConfig
        {   user_key: std::env::var(USER_KEY_ENV).ok()
          , default_key: std::env::var(DEFAULT_KEY_ENV).ok()
        }
    }

    /// Resolve the effective key: user-set value > default.
    /// Empty strings count as unset.
    pub fn effective(&self) -> Option<&str>
    {   self.user_key.as_deref()
          .filter(|k| !k.is_empty())
          .or_else(||
            self.default_key.as_deref()
              .filter(|k| !k.is_empty())
          )
    }
}

/// Dispatcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig
{   /// OpenAI API base URL (if custom)
    pub openai_api_base: Option<String>
  , /// Gemini API base URL (if custom)
    pub gemini_api_base: Option<String>
  , /// Request timeout in seconds; None disables the deadline
    pub timeout_secs: Option<u64>
  , /// API key resolution
    pub keys: KeyConfig
}

impl Default for DispatchConfig
{   fn default() -> Self
    {   DispatchConfig
        {   openai_api_base: None
          , gemini_api_base: None
          , timeout_secs: Some(30)
          , keys: KeyConfig::default()
        }
    }
}

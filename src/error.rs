use std::fmt;

/// Custom error type for dispatcher operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key is empty or absent
    MissingApiKey
  , /// Model string matched no known provider family
    UnknownProvider(String)
  , /// HTTP request error
    HttpError(String)
  , /// API returned an error response
    ApiError(String)
  , /// Failed to parse API response
    ParseError(String)
  , /// Success response missing the expected field
    MalformedResponse(String)
  , /// Timeout error
    Timeout
  , /// Snippet storage error
    Storage(String)
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey => {
              write!(f, "API key is missing")
            }
          , Error::UnknownProvider(model) => {
              write!(f,
                "No provider recognized for model: {}",
                model
              )
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::MalformedResponse(path) => {
              write!(f,
                "API response missing expected field: {}",
                path
              )
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::Storage(msg) => {
              write!(f, "Storage error: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}

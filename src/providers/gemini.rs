use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

const GEMINI_API_BASE: &str
  = "https://generativelanguage.googleapis.com/v1beta";

const GEMINI_ERROR_FALLBACK: &str = "Gemini API Error";

// ===== Content Types =====

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest
{   pub contents: Vec<Content>
}

#[derive(Debug, Clone, Serialize)]
pub struct Content
{   pub parts: Vec<Part>
}

#[derive(Debug, Clone, Serialize)]
pub struct Part
{   pub text: String
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse
{   #[serde(default)]
    pub candidates: Vec<Candidate>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate
{   pub content: Option<CandidateContent>
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent
{   #[serde(default)]
    pub parts: Vec<CandidatePart>
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart
{   pub text: Option<String>
}

// ===== Gemini Client =====

/// generateContent adapter. The credential travels as a `key` query
/// parameter, never in a header. This request shape has no separate
/// system role, so the system and user instructions are fused into
/// one part with a labeled separator.
pub struct GeminiClient
{   api_base: String
  , http_client: reqwest::Client
}

impl GeminiClient
{   pub fn new(api_base: Option<String>) -> Self
    {   debug!("Creating GeminiClient");
        GeminiClient
        {   api_base: api_base.unwrap_or_else(||
              GEMINI_API_BASE.to_string()
            )
          , http_client: reqwest::Client::new()
        }
    }

    /// Send one fused instruction and extract the reply text
    pub async fn send_generate(
      &self
    , api_key: &str
    , request: &crate::PromptRequest
    ) -> Result<String, crate::error::Error>
    {   debug!("Gemini send_generate for: {}", request.model);

        let url = format!(
          "{}/models/{}:generateContent?key={}",
          self.api_base,
          request.model,
          api_key
        );

        let body = GenerateRequest
        {   contents: vec![
              Content
              {   parts: vec![
                    Part
                    {   text: format!(
                          "{}\n\nUser: {}",
                          request.system_prompt,
                          request.user_prompt
                        )
                    }
                  ]
              }
            ]
        };

        trace!("Gemini request: {:?}", body);

        let response = self.http_client
          .post(url)
          .header("Content-Type", "application/json")
          .json(&body)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Gemini response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Gemini API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              super::error_message_or(
                &error_text,
                GEMINI_ERROR_FALLBACK
              )
            ));
        }

        let generate_response: GenerateResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        generate_response.candidates.first()
          .and_then(|c| c.content.as_ref())
          .and_then(|c| c.parts.first())
          .and_then(|p| p.text.clone())
          .ok_or_else(|| {
            error!("No candidates in Gemini response");
            crate::error::Error::MalformedResponse(
              "candidates[0].content.parts[0].text".to_string()
            )
          })
    }
}

use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

const OPENAI_API_BASE: &str
  = "https://api.openai.com/v1";

const OPENAI_ERROR_FALLBACK: &str = "OpenAI API Error";

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   #[serde(default)]
    pub role: String
  , pub content: String
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: Option<ChatMessage>
}

// ===== OpenAI Client =====

/// Chat-completions adapter. Credential travels as a bearer token;
/// the generated text lives at `choices[0].message.content`.
pub struct OpenAiClient
{   api_base: String
  , http_client: reqwest::Client
}

impl OpenAiClient
{   pub fn new(api_base: Option<String>) -> Self
    {   debug!("Creating OpenAiClient");
        OpenAiClient
        {   api_base: api_base.unwrap_or_else(||
              OPENAI_API_BASE.to_string()
            )
          , http_client: reqwest::Client::new()
        }
    }

    /// Send one system+user exchange and extract the reply text
    pub async fn send_chat(
      &self
    , api_key: &str
    , request: &crate::PromptRequest
    ) -> Result<String, crate::error::Error>
    {   debug!("OpenAI send_chat for: {}", request.model);

        let body = ChatRequest
        {   model: request.model.clone()
          , messages: vec![
              ChatMessage
              {   role: "system".to_string()
                , content: request.system_prompt.clone()
              }
            , ChatMessage
              {   role: "user".to_string()
                , content: request.user_prompt.clone()
              }
            ]
          , temperature: request.temperature
        };

        trace!("OpenAI request: {:?}", body);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&body)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("OpenAI response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("OpenAI API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              super::error_message_or(
                &error_text,
                OPENAI_ERROR_FALLBACK
              )
            ));
        }

        let chat_response: ChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        chat_response.choices.first()
          .and_then(|c| c.message.as_ref())
          .map(|m| m.content.clone())
          .ok_or_else(|| {
            error!("No choices in OpenAI response");
            crate::error::Error::MalformedResponse(
              "choices[0].message.content".to_string()
            )
          })
    }
}

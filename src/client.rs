use std::time::Duration;
use log::{debug, error};

use crate::{Provider, PromptRequest, PromptResponse};
use crate::config::DispatchConfig;
use crate::error::Error;
use crate::providers::{OpenAiClient, GeminiClient};

/// LLM request dispatcher.
///
/// Stateless and reentrant: holds only configuration and the
/// per-provider HTTP clients, so concurrent calls share no mutable
/// state. One call performs exactly one outbound request.
pub struct Dispatcher
{   config: DispatchConfig
  , openai: OpenAiClient
  , gemini: GeminiClient
}

impl Dispatcher
{   /// Create a dispatcher from configuration
    pub fn new(config: DispatchConfig) -> Self
    {   debug!("Creating Dispatcher");
        let openai = OpenAiClient::new(
          config.openai_api_base.clone()
        );
        let gemini = GeminiClient::new(
          config.gemini_api_base.clone()
        );
        Dispatcher
        {   config
          , openai
          , gemini
        }
    }

    /// Select a provider from the model string, issue the request,
    /// and return the extracted text.
    ///
    /// Fails with [`Error::MissingApiKey`] on an empty key and with
    /// [`Error::UnknownProvider`] on an unrecognized model string,
    /// both before any network activity. The configured deadline is
    /// enforced per call; dropping the returned future aborts the
    /// in-flight request.
    pub async fn call(
      &self
    , api_key: &str
    , model: &str
    , system_prompt: &str
    , user_prompt: &str
    ) -> Result<String, Error>
    {   let request = PromptRequest::new(
          model,
          system_prompt,
          user_prompt
        );
        let response = self.dispatch(api_key, &request).await?;
        Ok(response.text)
    }

    /// Same path as [`Dispatcher::call`], over the unified types
    pub async fn dispatch(
      &self
    , api_key: &str
    , request: &PromptRequest
    ) -> Result<PromptResponse, Error>
    {   if api_key.is_empty()
        {   error!("Rejecting call with empty API key");
            return Err(Error::MissingApiKey);
        }

        let provider = Provider::classify(&request.model)?;
        debug!(
          "Dispatching to {} for model: {}",
          provider,
          request.model
        );

        let text = match self.config.timeout_secs
        {   Some(secs) => {
              tokio::time::timeout(
                Duration::from_secs(secs),
                self.route(provider, api_key, request)
              )
              .await
              .map_err(|_| {
                error!(
                  "Request deadline of {}s elapsed",
                  secs
                );
                Error::Timeout
              })??
            }
          , None => {
              self.route(provider, api_key, request).await?
            }
        };

        Ok(PromptResponse
        {   text
          , provider
          , model: request.model.clone()
        })
    }

    /// Resolve the credential from configuration
    /// (user-set key > default key) and call with it
    pub async fn call_stored(
      &self
    , model: &str
    , system_prompt: &str
    , user_prompt: &str
    ) -> Result<String, Error>
    {   let api_key = self.config.keys.effective()
          .ok_or_else(|| {
            error!("No stored API key configured");
            Error::MissingApiKey
          })?;
        self.call(api_key, model, system_prompt, user_prompt)
          .await
    }

    async fn route(
      &self
    , provider: Provider
    , api_key: &str
    , request: &PromptRequest
    ) -> Result<String, Error>
    {   match provider
        {   Provider::OpenAi => {
              self.openai.send_chat(api_key, request).await
            }
          , Provider::Gemini => {
              self.gemini.send_generate(api_key, request).await
            }
        }
    }
}

impl Default for Dispatcher
{   fn default() -> Self
    {   Dispatcher::new(DispatchConfig::default())
    }
}

mod factory;
mod google;
mod open_ai;
mod prompt;

pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{render_recipe_prompt, RECIPE_PROMPT_TEMPLATE, VISION_PROMPT};

use crate::image::ImagePayload;
use async_trait::async_trait;
use std::error::Error;

/// Error type returned by provider adapters
pub type ProviderError = Box<dyn Error + Send + Sync>;

/// Unified trait for all LLM providers.
///
/// Implementations hide the provider's reply shape: every call yields the
/// reply as a single text value.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Send a text prompt and return the model's reply text
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Send a prompt together with one image and return the reply text
    async fn complete_with_image(
        &self,
        prompt: &str,
        image: &ImagePayload,
    ) -> Result<String, ProviderError>;
}

/// Reads a JSON reply body, turning non-success statuses into errors that
/// carry the status and the body text.
async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await?;
        return Err(format!("API error ({}): {}", status, error_text).into());
    }
    Ok(response.json().await?)
}

fn build_client(timeout: Option<std::time::Duration>) -> Result<reqwest::Client, ProviderError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

use async_trait::async_trait;
use mutfak_bilgini::image::ImagePayload;
use mutfak_bilgini::providers::{LlmProvider, ProviderError};
use std::sync::Mutex;

/// Provider that answers every request with a canned reply and records
/// what it was asked.
pub struct StubProvider {
    reply: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
    pub images: Mutex<Vec<ImagePayload>>,
}

#[allow(dead_code)]
impl StubProvider {
    pub fn replying(reply: &str) -> Self {
        StubProvider {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
            images: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        StubProvider {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
            images: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }

    fn answer(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(|e| e.into())
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.answer(prompt)
    }

    async fn complete_with_image(
        &self,
        prompt: &str,
        image: &ImagePayload,
    ) -> Result<String, ProviderError> {
        self.images.lock().unwrap().push(image.clone());
        self.answer(prompt)
    }
}

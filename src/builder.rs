use std::time::Duration;

use crate::{
    config::AiConfig, constraints::RecipeRequest, providers::LlmProvider,
    providers::ProviderFactory, suggest, vision, IngredientList, RecipeSet, SuggestError,
};

/// LLM provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    OpenAI,
}

impl Provider {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &str {
        match self {
            Provider::Google => "google",
            Provider::OpenAI => "openai",
        }
    }
}

/// Builder for configuring a [`RecipeAssistant`]
#[derive(Debug, Default)]
pub struct RecipeAssistantBuilder {
    config: Option<AiConfig>,
    provider: Option<Provider>,
    timeout: Option<Duration>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

impl RecipeAssistantBuilder {
    /// Use an already loaded configuration instead of reading
    /// `mutfak.toml` and `MUTFAK__*` variables
    pub fn config(mut self, config: AiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the LLM provider
    ///
    /// # Example
    /// ```
    /// use mutfak_bilgini::{Provider, RecipeAssistant};
    ///
    /// let builder = RecipeAssistant::builder().provider(Provider::OpenAI);
    /// ```
    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set a timeout for model requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the API key for the LLM provider
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the LLM provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the provider at a custom or proxy endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Resolve configuration and credentials into a ready assistant
    ///
    /// # Errors
    /// Returns [`SuggestError::Configuration`] if the configuration cannot be
    /// read, the provider is unknown or disabled, or no API key is found.
    /// No request is made.
    pub fn build(self) -> Result<RecipeAssistant, SuggestError> {
        let config = match self.config {
            Some(config) => config,
            None => AiConfig::load()?,
        };

        let provider_name = self
            .provider
            .as_ref()
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| config.default_provider.clone());

        let mut provider_config = config.provider(&provider_name);
        if let Some(api_key) = self.api_key {
            provider_config.api_key = Some(api_key);
        }
        if let Some(model) = self.model {
            provider_config.model = model;
        }
        if let Some(base_url) = self.base_url {
            provider_config.base_url = Some(base_url);
        }

        let timeout = self
            .timeout
            .or_else(|| config.timeout.map(Duration::from_secs));

        let provider = ProviderFactory::create(&provider_name, &provider_config, timeout)?;
        Ok(RecipeAssistant::from_provider(provider))
    }
}

/// Entry point for recipe suggestions and ingredient recognition
pub struct RecipeAssistant {
    provider: Box<dyn LlmProvider>,
}

impl RecipeAssistant {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use mutfak_bilgini::RecipeAssistant;
    ///
    /// let builder = RecipeAssistant::builder();
    /// ```
    pub fn builder() -> RecipeAssistantBuilder {
        RecipeAssistantBuilder::default()
    }

    /// Wrap any provider, e.g. a custom client
    pub fn from_provider(provider: Box<dyn LlmProvider>) -> Self {
        RecipeAssistant { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// See [`suggest::generate_recipes`]
    pub async fn generate_recipes(
        &self,
        ingredients: &str,
        servings: u32,
        extra_constraints: &str,
    ) -> Result<RecipeSet, SuggestError> {
        suggest::generate_recipes(
            self.provider.as_ref(),
            ingredients,
            servings,
            extra_constraints,
        )
        .await
    }

    /// See [`suggest::generate`]
    ///
    /// # Example
    /// ```no_run
    /// # use mutfak_bilgini::{RecipeAssistant, RecipeRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let assistant = RecipeAssistant::builder().build()?;
    /// let recipes = assistant
    ///     .suggest(&RecipeRequest::new("domates, kıyma, soğan", 2))
    ///     .await?;
    /// for recipe in &recipes {
    ///     println!("{}", recipe.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn suggest(&self, request: &RecipeRequest) -> Result<RecipeSet, SuggestError> {
        suggest::generate(self.provider.as_ref(), request).await
    }

    /// See [`vision::extract_ingredients`]
    pub async fn extract_ingredients(&self, image: &[u8]) -> Result<IngredientList, SuggestError> {
        vision::extract_ingredients(self.provider.as_ref(), image).await
    }
}

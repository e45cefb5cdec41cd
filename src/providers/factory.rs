use crate::config::{AiConfig, ProviderConfig};
use crate::error::SuggestError;
use crate::providers::{GoogleProvider, LlmProvider, OpenAIProvider};
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration.
    ///
    /// Fails with a configuration error when the provider is unknown,
    /// disabled, or has no API key.
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        timeout: Option<Duration>,
    ) -> Result<Box<dyn LlmProvider>, SuggestError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(SuggestError::Configuration(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        let provider: Box<dyn LlmProvider> = match provider_name {
            "google" => Box::new(
                GoogleProvider::new(config, timeout)
                    .map_err(|e| SuggestError::Configuration(e.to_string()))?,
            ),
            "openai" => Box::new(
                OpenAIProvider::new(config, timeout)
                    .map_err(|e| SuggestError::Configuration(e.to_string()))?,
            ),
            _ => {
                return Err(SuggestError::Configuration(format!(
                    "Unknown provider: {}",
                    provider_name
                )))
            }
        };
        Ok(provider)
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(config: &AiConfig) -> Result<Box<dyn LlmProvider>, SuggestError> {
        let provider_name = &config.default_provider;
        Self::create(
            provider_name,
            &config.provider(provider_name),
            config.timeout.map(Duration::from_secs),
        )
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "openai"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_provider_config() -> ProviderConfig {
        ProviderConfig {
            enabled: true,
            model: "test-model".to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            api_key: Some("test-key".to_string()),
            base_url: None,
        }
    }

    #[test]
    fn test_create_google_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("google", &config, None).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_create_openai_provider() {
        let config = create_test_provider_config();
        let provider =
            ProviderFactory::create("openai", &config, Some(Duration::from_secs(5))).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_create_unknown_provider() {
        let config = create_test_provider_config();
        let result = ProviderFactory::create("unknown", &config, None);
        assert!(matches!(result, Err(SuggestError::Configuration(ref m)) if m.contains("Unknown provider")));
    }

    #[test]
    fn test_create_disabled_provider() {
        let mut config = create_test_provider_config();
        config.enabled = false;

        let result = ProviderFactory::create("google", &config, None);
        assert!(matches!(result, Err(SuggestError::Configuration(ref m)) if m.contains("not enabled")));
    }

    #[test]
    fn test_get_default_provider() {
        let mut providers = HashMap::new();
        providers.insert("openai".to_string(), create_test_provider_config());

        let ai_config = AiConfig {
            default_provider: "openai".to_string(),
            providers,
            timeout: None,
        };

        let provider = ProviderFactory::get_default_provider(&ai_config).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_available_providers() {
        let providers = ProviderFactory::available_providers();
        assert_eq!(providers, vec!["google", "openai"]);
    }
}

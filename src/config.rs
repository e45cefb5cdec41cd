use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Main AI configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct AiConfig {
    /// Provider used when none is requested explicitly
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Request timeout in seconds. Unset means the HTTP client default.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: HashMap::new(),
            timeout: None,
        }
    }
}

/// Configuration for a specific AI provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Model identifier (e.g., "gemini-2.5-flash", "gpt-4o-mini")
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Settings used for a provider that has no section in the config
    pub fn for_provider(provider_name: &str) -> Self {
        ProviderConfig {
            enabled: true,
            model: default_model(provider_name).to_string(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

impl AiConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MUTFAK__ prefix
    /// 2. mutfak.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MUTFAK__PROVIDERS__GOOGLE__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Configuration of `provider_name`, or built-in defaults for it
    pub fn provider(&self, provider_name: &str) -> ProviderConfig {
        self.providers
            .get(provider_name)
            .cloned()
            .unwrap_or_else(|| ProviderConfig::for_provider(provider_name))
    }
}

// Default value functions
fn default_provider() -> String {
    "google".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    4000
}

/// Default model for a provider name
pub fn default_model(provider_name: &str) -> &'static str {
    match provider_name {
        "openai" => "gpt-4o-mini",
        _ => "gemini-2.5-flash",
    }
}

/// Load configuration from file and environment variables
///
/// See [`AiConfig::load`] for the precedence rules.
pub fn load_config() -> Result<AiConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mutfak").required(false))
        // Use double underscore for nested: MUTFAK__PROVIDERS__GOOGLE__API_KEY
        .add_source(
            Environment::with_prefix("MUTFAK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_provider(), "google");
        assert_eq!(default_temperature(), 0.7);
        assert_eq!(default_max_tokens(), 4000);
        assert_eq!(default_model("google"), "gemini-2.5-flash");
        assert_eq!(default_model("openai"), "gpt-4o-mini");
    }

    #[test]
    fn test_missing_provider_section_uses_defaults() {
        let config = AiConfig::default();
        let google = config.provider("google");
        assert!(google.enabled);
        assert_eq!(google.model, "gemini-2.5-flash");
        assert!(google.api_key.is_none());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let config: AiConfig = Config::builder()
            .add_source(config::File::from_str(
                r#"
                default_provider = "openai"
                timeout = 20

                [providers.openai]
                model = "gpt-4.1-mini"
                api_key = "test-key"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.default_provider, "openai");
        assert_eq!(config.timeout, Some(20));
        let openai = config.provider("openai");
        assert!(openai.enabled);
        assert_eq!(openai.model, "gpt-4.1-mini");
        assert_eq!(openai.temperature, 0.7);
        assert_eq!(openai.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_empty_source_deserializes_to_defaults() {
        let config: AiConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.default_provider, "google");
        assert!(config.providers.is_empty());
        assert!(config.timeout.is_none());
    }
}

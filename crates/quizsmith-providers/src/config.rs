//! Provider configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizsmith_core::generator::GeneratorConfig;
use quizsmith_core::storage::StorageConfig;
use quizsmith_core::traits::LlmProvider;

use crate::mock::MockProvider;
use crate::openai::OpenAiProvider;

/// Environment variables that override the OpenAI API key, highest priority first.
const OPENAI_KEY_VARS: &[&str] = &["QUIZSMITH_OPENAI_KEY", "OPENAI_API_KEY"];

/// Configuration for a single text-generation provider.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    OpenAI {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        org_id: Option<String>,
    },
    /// Offline provider that always replies with `response`.
    Mock {
        #[serde(default = "default_mock_response")]
        response: String,
    },
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderConfig::OpenAI {
                api_key: _,
                base_url,
                org_id,
            } => f
                .debug_struct("OpenAI")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .field("org_id", org_id)
                .finish(),
            ProviderConfig::Mock { response } => f
                .debug_struct("Mock")
                .field("response_len", &response.len())
                .finish(),
        }
    }
}

fn default_mock_response() -> String {
    "[]".to_string()
}

/// Top-level quizsmith configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizsmithConfig {
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Default provider to use.
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Default model to use.
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Sampling temperature for quiz generation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Max tokens per generation.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout for a single provider call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Max retries on provider errors.
    #[serde(default = "default_retries")]
    pub max_retries: u32,
    /// Delay between retries in milliseconds.
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
    /// Where the current quiz and results are stored.
    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_provider() -> String {
    "openai".to_string()
}
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}
fn default_temperature() -> f64 {
    0.7
}
fn default_max_tokens() -> u32 {
    4096
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_retries() -> u32 {
    2
}
fn default_retry_delay() -> u64 {
    1000
}

impl Default for QuizsmithConfig {
    fn default() -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider(),
            default_model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_retries(),
            retry_delay_ms: default_retry_delay(),
            storage: StorageConfig::default(),
        }
    }
}

impl QuizsmithConfig {
    /// Generator settings for `model`, or the default model when `None`.
    pub fn generator_config(&self, model: Option<&str>) -> GeneratorConfig {
        GeneratorConfig {
            model: model.unwrap_or(&self.default_model).to_string(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            system_prompt_override: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a provider config.
fn resolve_provider_config(config: &ProviderConfig) -> ProviderConfig {
    match config {
        ProviderConfig::OpenAI {
            api_key,
            base_url,
            org_id,
        } => ProviderConfig::OpenAI {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
            org_id: org_id.as_ref().map(|o| resolve_env_vars(o)),
        },
        ProviderConfig::Mock { response } => ProviderConfig::Mock {
            response: response.clone(),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizsmith.toml` in the current directory
/// 2. `~/.config/quizsmith/config.toml`
///
/// Environment variable overrides: `QUIZSMITH_OPENAI_KEY`, then `OPENAI_API_KEY`.
pub fn load_config() -> Result<QuizsmithConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizsmithConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizsmith.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizsmithConfig::default(),
    };

    // Apply env var overrides
    if let Some(key) = OPENAI_KEY_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|k| !k.is_empty()))
    {
        apply_openai_key(&mut config, key);
    }

    // Resolve env vars in all provider configs
    let resolved: HashMap<String, ProviderConfig> = config
        .providers
        .iter()
        .map(|(k, v)| (k.clone(), resolve_provider_config(v)))
        .collect();
    config.providers = resolved;

    Ok(config)
}

/// Parse a TOML configuration document.
pub fn parse_config(content: &str) -> Result<QuizsmithConfig> {
    Ok(toml::from_str(content)?)
}

fn apply_openai_key(config: &mut QuizsmithConfig, key: String) {
    let entry = config
        .providers
        .entry("openai".into())
        .or_insert(ProviderConfig::OpenAI {
            api_key: String::new(),
            base_url: None,
            org_id: None,
        });
    if let ProviderConfig::OpenAI { api_key, .. } = entry {
        *api_key = key;
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizsmith"))
}

/// Create a provider instance from its configuration.
pub fn create_provider(
    name: &str,
    config: &ProviderConfig,
    timeout_secs: u64,
) -> Result<Box<dyn LlmProvider>> {
    match config {
        ProviderConfig::OpenAI {
            api_key,
            base_url,
            org_id,
        } => {
            anyhow::ensure!(
                !api_key.is_empty(),
                "provider '{name}' has no API key; set OPENAI_API_KEY or api_key in the config"
            );
            Ok(Box::new(OpenAiProvider::new(
                api_key,
                base_url.clone(),
                org_id.clone(),
                timeout_secs,
            )?))
        }
        ProviderConfig::Mock { response } => Ok(Box::new(MockProvider::with_fixed_response(response))),
    }
}

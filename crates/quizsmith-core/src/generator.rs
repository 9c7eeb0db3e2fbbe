//! Quiz generation orchestrator.
//!
//! Builds the prompt, calls the provider with retries on transient errors,
//! and turns the raw reply into a canonical quiz. Nothing is persisted here;
//! on any failure the caller gets an error and no quiz.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::error::ProviderError;
use crate::model::Quiz;
use crate::prompt::{build_prompt, QuizRequest};
use crate::schema::parse_generator_output;
use crate::traits::{GenerateRequest, LlmProvider, TokenUsage, DEFAULT_SYSTEM_PROMPT};

/// Configuration for the quiz generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Model identifier passed to the provider.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Max tokens for generation.
    pub max_tokens: u32,
    /// Upper bound on a single provider call.
    pub timeout: Duration,
    /// Retries on transient provider errors.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub retry_delay: Duration,
    /// Optional system prompt override.
    pub system_prompt_override: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 4096,
            timeout: Duration::from_secs(30),
            max_retries: 2,
            retry_delay: Duration::from_secs(1),
            system_prompt_override: None,
        }
    }
}

/// A successfully generated quiz and where it came from.
#[derive(Debug, Clone)]
pub struct GeneratedQuiz {
    pub quiz: Quiz,
    /// Unprocessed provider reply.
    pub raw_output: String,
    pub model: String,
    pub token_usage: TokenUsage,
    pub latency_ms: u64,
}

/// Generates quizzes through an [`LlmProvider`].
pub struct QuizGenerator {
    provider: Arc<dyn LlmProvider>,
    config: GeneratorConfig,
}

impl QuizGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>, config: GeneratorConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a quiz for `request`.
    ///
    /// Fails with a [`crate::error::QuizError`] when the reply holds no
    /// usable JSON array, or with the provider's error once retries run out.
    pub async fn generate(&self, request: &QuizRequest) -> Result<GeneratedQuiz> {
        let start = Instant::now();
        let generate_request = GenerateRequest {
            model: self.config.model.clone(),
            prompt: build_prompt(request),
            system_prompt: Some(
                self.config
                    .system_prompt_override
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            ),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        tracing::info!(
            provider = self.provider.name(),
            model = %self.config.model,
            questions = request.params.num_questions,
            "generating quiz"
        );

        // Retry on transient provider errors with exponential backoff
        let mut last_error = None;
        let mut retry_delay = self.config.retry_delay;
        for retry in 0..=self.config.max_retries {
            if retry > 0 {
                tracing::warn!("retrying generation in {}ms (retry {retry})", retry_delay.as_millis());
                tokio::time::sleep(retry_delay).await;
                retry_delay = (retry_delay * 2).min(Duration::from_secs(60));
            }

            let attempt =
                tokio::time::timeout(self.config.timeout, self.provider.generate(&generate_request))
                    .await
                    .unwrap_or_else(|_| Err(ProviderError::Timeout(self.config.timeout.as_secs()).into()));

            match attempt {
                Ok(response) => {
                    let quiz = parse_generator_output(&response.content)?;
                    if quiz.is_empty() {
                        tracing::warn!("generator returned an empty question list");
                    }
                    tracing::info!(questions = quiz.len(), "quiz generated");
                    return Ok(GeneratedQuiz {
                        quiz,
                        raw_output: response.content,
                        model: response.model,
                        token_usage: response.token_usage,
                        latency_ms: start.elapsed().as_millis() as u64,
                    });
                }
                Err(e) => {
                    if let Some(provider_err) = e.downcast_ref::<ProviderError>() {
                        if provider_err.is_permanent() {
                            return Err(e);
                        }
                        // Use provider's retry-after hint if available
                        if let Some(ms) = provider_err.retry_after_ms() {
                            retry_delay = Duration::from_millis(ms);
                        }
                    }
                    tracing::warn!("generation attempt failed: {e:#}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("unknown error")))
    }
}

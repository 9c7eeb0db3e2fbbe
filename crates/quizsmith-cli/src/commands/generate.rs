//! The `quizsmith generate` command.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;

use quizsmith_core::generator::QuizGenerator;
use quizsmith_core::params::{GenerationParams, RawParams};
use quizsmith_core::prompt::{combine_sources, QuizRequest};
use quizsmith_core::storage::QuizStore;
use quizsmith_providers::create_provider;

use super::open_store;

pub struct GenerateArgs {
    pub text: String,
    pub files: Vec<PathBuf>,
    pub num_questions: Option<String>,
    pub num_options: Option<String>,
    pub num_correct: Option<String>,
    pub num_incorrect: Option<String>,
    pub test_type: String,
    pub difficulty: String,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub config: Option<PathBuf>,
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    let (config, store) = open_store(args.config.as_deref())?;

    let file_texts = args
        .files
        .iter()
        .filter_map(|path| match read_text_file(path) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping source file: {e:#}");
                None
            }
        })
        .collect::<Vec<_>>();
    let text = combine_sources(&args.text, &file_texts)?;

    let raw: RawParams = [
        ("num_questions", args.num_questions),
        ("num_options", args.num_options),
        ("num_correct", args.num_correct),
        ("num_incorrect", args.num_incorrect),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|v| (name.to_string(), Value::String(v))))
    .collect();
    let params = GenerationParams::validate(&raw);

    let provider_name = args
        .provider
        .unwrap_or_else(|| config.default_provider.clone());
    let Some(provider_config) = config.providers.get(&provider_name) else {
        anyhow::bail!(
            "provider '{}' not found in config. Available: {:?}",
            provider_name,
            config.providers.keys().collect::<Vec<_>>()
        );
    };
    let provider = create_provider(&provider_name, provider_config, config.timeout_secs)?;

    let generator = QuizGenerator::new(
        Arc::from(provider),
        config.generator_config(args.model.as_deref()),
    );
    let request = QuizRequest::new(text, params)
        .with_test_type(args.test_type)
        .with_difficulty(args.difficulty);

    eprintln!(
        "Generating {} questions with {} ({})...",
        params.num_questions,
        provider_name,
        generator.config().model
    );

    let generated = generator.generate(&request).await?;
    store.save_quiz(&generated.quiz)?;

    println!(
        "Generated {} questions and saved to {}",
        generated.quiz.len(),
        store.config().tests_file.display()
    );
    println!(
        "Tokens: {} prompt, {} completion ({}ms)",
        generated.token_usage.prompt_tokens,
        generated.token_usage.completion_tokens,
        generated.latency_ms
    );

    Ok(())
}

/// Read lecture text from a plain-text file. Other formats are rejected.
fn read_text_file(path: &Path) -> Result<String> {
    let is_txt = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    anyhow::ensure!(
        is_txt,
        "unsupported file type: {} (only .txt is read)",
        path.display()
    );
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}

//! Storage interface for the current quiz and graded attempts.
//!
//! Callers hold a [`QuizStore`] built from an explicit [`StorageConfig`];
//! the grading and normalization code never touches the filesystem.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::Quiz;
use crate::results::ResultRecord;

/// Where quiz and result documents live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON array of canonical questions (the current quiz).
    #[serde(default = "default_tests_file")]
    pub tests_file: PathBuf,
    /// JSON array of result records.
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,
}

fn default_tests_file() -> PathBuf {
    PathBuf::from("tests.json")
}

fn default_results_file() -> PathBuf {
    PathBuf::from("results.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            tests_file: default_tests_file(),
            results_file: default_results_file(),
        }
    }
}

/// Load/save boundary for quizzes and results.
pub trait QuizStore: Send + Sync {
    /// The current quiz; empty when none has been saved.
    fn load_quiz(&self) -> Result<Quiz>;

    /// Replace the current quiz.
    fn save_quiz(&self, quiz: &Quiz) -> Result<()>;

    /// All stored results in insertion order.
    fn load_results(&self) -> Result<Vec<ResultRecord>>;

    /// Store a result, assigning it the next id. Returns the stored record.
    fn append_result(&self, record: ResultRecord) -> Result<ResultRecord>;
}

/// [`QuizStore`] backed by two pretty-printed JSON files.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StorageConfig,
}

impl JsonFileStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl QuizStore for JsonFileStore {
    fn load_quiz(&self) -> Result<Quiz> {
        read_json_or_default(&self.config.tests_file)
    }

    fn save_quiz(&self, quiz: &Quiz) -> Result<()> {
        write_json(&self.config.tests_file, quiz)?;
        tracing::info!(
            "saved quiz with {} questions to {}",
            quiz.len(),
            self.config.tests_file.display()
        );
        Ok(())
    }

    fn load_results(&self) -> Result<Vec<ResultRecord>> {
        read_json_or_default(&self.config.results_file)
    }

    fn append_result(&self, mut record: ResultRecord) -> Result<ResultRecord> {
        let mut records = self.load_results()?;
        record.id = records.len() as u64 + 1;
        records.push(record.clone());
        write_json(&self.config.results_file, &records)?;
        tracing::info!(
            id = record.id,
            student = %record.student_name,
            score = record.score,
            "saved result"
        );
        Ok(record)
    }
}

/// Parse a JSON file, or return the default value if it does not exist.
fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize JSON")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

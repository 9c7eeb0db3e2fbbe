//! Subcommand implementations.

pub mod edit;
pub mod generate;
pub mod init;
pub mod list_models;
pub mod show;
pub mod stats;
pub mod take;
pub mod validate;

use std::path::Path;

use anyhow::Result;

use quizsmith_core::storage::JsonFileStore;
use quizsmith_providers::config::load_config_from;
use quizsmith_providers::QuizsmithConfig;

/// Load the config and the store it points at.
pub(crate) fn open_store(config_path: Option<&Path>) -> Result<(QuizsmithConfig, JsonFileStore)> {
    let config = load_config_from(config_path)?;
    let store = JsonFileStore::new(config.storage.clone());
    Ok((config, store))
}

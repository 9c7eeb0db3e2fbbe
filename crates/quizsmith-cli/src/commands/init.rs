//! The `quizsmith init` command.

use std::path::Path;

use anyhow::Result;

const CONFIG_FILE: &str = "quizsmith.toml";

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE).exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_FILE, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Export OPENAI_API_KEY or edit {CONFIG_FILE}");
    println!("  2. Run: quizsmith generate --file notes.txt");
    println!("  3. Run: quizsmith show");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizsmith configuration

default_provider = "openai"
default_model = "gpt-4o-mini"
temperature = 0.7
timeout_secs = 30
max_retries = 2

[providers.openai]
type = "openai"
api_key = "${OPENAI_API_KEY}"

# Offline provider that always returns the same reply.
# [providers.offline]
# type = "mock"
# response = '[{"question": "2 + 2?", "type": "text", "answers": ["4"]}]'

[storage]
tests_file = "tests.json"
results_file = "results.json"
"#;

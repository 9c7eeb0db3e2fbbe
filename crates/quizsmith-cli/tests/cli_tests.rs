//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MOCK_REPLY: &str = r#"Here is your quiz:
[
  {"question": "Capital of France?", "type": "choice", "options": ["Paris", "Lyon", "Nice"], "answers": ["Paris"]},
  {"question_text": "Largest planet?", "type": "text", "answer": "Jupiter"}
]"#;

fn quizsmith(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizsmith").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("OPENAI_API_KEY")
        .env_remove("QUIZSMITH_OPENAI_KEY");
    cmd
}

/// Write a config whose default provider always answers with `reply`.
fn write_mock_config(dir: &Path, reply: &str) -> PathBuf {
    let path = dir.join("mock.toml");
    let content = format!(
        "default_provider = \"offline\"\nmax_retries = 0\n\n[providers.offline]\ntype = \"mock\"\nresponse = '''\n{reply}'''\n"
    );
    std::fs::write(&path, content).unwrap();
    path
}

fn generate_quiz(dir: &Path) -> PathBuf {
    let config = write_mock_config(dir, MOCK_REPLY);
    quizsmith(dir)
        .arg("--config")
        .arg(&config)
        .args(["generate", "--text", "France and the solar system"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 questions"));
    config
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    quizsmith(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizsmith.toml"));

    assert!(dir.path().join("quizsmith.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizsmith(dir.path()).arg("init").assert().success();

    quizsmith(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn generate_saves_canonical_quiz() {
    let dir = TempDir::new().unwrap();
    generate_quiz(dir.path());

    let saved = std::fs::read_to_string(dir.path().join("tests.json")).unwrap();
    let quiz: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(quiz[0]["type"], "choice");
    assert_eq!(quiz[1]["question"], "Largest planet?");
    assert_eq!(quiz[1]["answers"], serde_json::json!(["Jupiter"]));
    assert_eq!(quiz[1]["options"], serde_json::json!([]));
}

#[test]
fn generate_reads_txt_files() {
    let dir = TempDir::new().unwrap();
    let config = write_mock_config(dir.path(), MOCK_REPLY);
    std::fs::write(dir.path().join("notes.txt"), "Paris is the capital.").unwrap();

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["generate", "--file", "notes.txt", "--num-questions", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 questions"));
}

#[test]
fn generate_without_source_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_mock_config(dir.path(), MOCK_REPLY);

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn generate_rejects_reply_without_json() {
    let dir = TempDir::new().unwrap();
    let config = write_mock_config(dir.path(), "Sorry, I cannot help with that.");

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["generate", "--text", "notes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no JSON array"));

    assert!(!dir.path().join("tests.json").exists());
}

#[test]
fn generate_unknown_provider_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_mock_config(dir.path(), MOCK_REPLY);

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["generate", "--text", "notes", "--provider", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider 'nope' not found"));
}

#[test]
fn show_without_quiz() {
    let dir = TempDir::new().unwrap();

    quizsmith(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No quiz has been generated yet."));
}

#[test]
fn show_lists_questions() {
    let dir = TempDir::new().unwrap();
    let config = generate_quiz(dir.path());

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] (choice) Capital of France?"))
        .stdout(predicate::str::contains("* Paris"))
        .stdout(predicate::str::contains("answers: Jupiter"));
}

#[test]
fn take_grades_and_records_result() {
    let dir = TempDir::new().unwrap();
    let config = generate_quiz(dir.path());
    std::fs::write(
        dir.path().join("answers.json"),
        r#"{"0": ["paris"], "1": "It is Jupiter."}"#,
    )
    .unwrap();

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["take", "--answers", "answers.json", "--student-name", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2 / 2 (100.00%)"))
        .stdout(predicate::str::contains("Result #1 saved for Ada"));

    let saved = std::fs::read_to_string(dir.path().join("results.json")).unwrap();
    let results: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(results[0]["id"], 1);
    assert_eq!(results[0]["username"], "student");
    assert_eq!(results[0]["score"], 2);
    assert_eq!(results[0]["test_metadata"][0]["question"], "Capital of France?");
}

#[test]
fn take_marks_missing_answers() {
    let dir = TempDir::new().unwrap();
    let config = generate_quiz(dir.path());
    std::fs::write(dir.path().join("answers.json"), r#"{"1": "Saturn"}"#).unwrap();

    let output = quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["take", "--answers", "answers.json", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["score"], 0);
    assert_eq!(record["percentage"], 0.0);
    assert_eq!(record["results"][0]["your_answer"], "—");
    assert_eq!(record["results"][1]["is_fully_correct"], false);
}

#[test]
fn take_without_quiz_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("answers.json"), "{}").unwrap();

    quizsmith(dir.path())
        .args(["take", "--answers", "answers.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no quiz has been generated yet"));
}

#[test]
fn edit_add_and_delete() {
    let dir = TempDir::new().unwrap();
    let config = generate_quiz(dir.path());

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .args([
            "edit", "add", "--question", "2 + 2?", "--option", "3", "--option", "4", "--answer",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question added at index 2"));

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["edit", "delete", "--index", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Capital of France?"));

    let saved = std::fs::read_to_string(dir.path().join("tests.json")).unwrap();
    let quiz: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(quiz.as_array().unwrap().len(), 2);
    assert_eq!(quiz[1]["question"], "2 + 2?");
    assert_eq!(quiz[1]["type"], "choice");
    assert_eq!(quiz[1]["options"], serde_json::json!(["3", "4"]));
}

#[test]
fn edit_rejects_empty_question_and_bad_index() {
    let dir = TempDir::new().unwrap();
    let config = generate_quiz(dir.path());

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["edit", "add", "--question", "   "])
        .assert()
        .failure();

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["edit", "update", "--index", "9", "--question", "Q?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn stats_after_attempts() {
    let dir = TempDir::new().unwrap();
    let config = generate_quiz(dir.path());
    std::fs::write(dir.path().join("good.json"), r#"{"0": "Paris", "1": "Jupiter"}"#).unwrap();
    std::fs::write(dir.path().join("bad.json"), r#"{"0": "Paris", "1": "Mars"}"#).unwrap();

    for answers in ["good.json", "bad.json"] {
        quizsmith(dir.path())
            .arg("--config")
            .arg(&config)
            .args(["take", "--answers", answers])
            .assert()
            .success();
    }

    let output = quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["stats", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total_attempts"], 2);
    assert_eq!(stats["average_score"], 1.5);
    assert_eq!(stats["average_percentage"], 75.0);
    assert_eq!(stats["hardest_question"]["question"], "Largest planet?");
    assert_eq!(stats["hardest_question"]["correct_rate"], 50.0);
}

#[test]
fn stats_without_results() {
    let dir = TempDir::new().unwrap();

    quizsmith(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempts: 0"))
        .stdout(predicate::str::contains("Hardest question: no data"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let quiz_path = dir.path().join("quiz.json");
    std::fs::write(
        &quiz_path,
        r#"[{"question": "Pick one", "type": "choice", "options": ["A", "B"], "answers": ["C"]}]"#,
    )
    .unwrap();

    quizsmith(dir.path())
        .arg("validate")
        .arg("--quiz")
        .arg(&quiz_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("'C' is not among the options"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn validate_generated_quiz() {
    let dir = TempDir::new().unwrap();
    let config = generate_quiz(dir.path());

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz: 2 questions"))
        .stdout(predicate::str::contains("Quiz is valid."));
}

#[test]
fn list_models_for_mock_provider() {
    let dir = TempDir::new().unwrap();
    let config = write_mock_config(dir.path(), MOCK_REPLY);

    quizsmith(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("list-models")
        .assert()
        .success()
        .stdout(predicate::str::contains("Provider: offline"))
        .stdout(predicate::str::contains("mock-model"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    quizsmith(dir.path())
        .args(["--config", "missing.toml", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    quizsmith(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate quizzes from lecture notes"));
}

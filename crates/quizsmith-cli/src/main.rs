//! quizsmith CLI: generate quizzes from lecture notes and grade attempts.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quizsmith",
    version,
    about = "Generate quizzes from lecture notes and grade answers"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a quiz from lecture text and save it as the current quiz
    Generate {
        /// Lecture text typed directly
        #[arg(long, default_value = "")]
        text: String,

        /// Plain-text files to append to the lecture text
        #[arg(long = "file")]
        files: Vec<PathBuf>,

        /// Number of questions (1-20)
        #[arg(long)]
        num_questions: Option<String>,

        /// Number of answer options (2-10)
        #[arg(long)]
        num_options: Option<String>,

        /// Correct answers per question (1-5)
        #[arg(long)]
        num_correct: Option<String>,

        /// Incorrect answers per question (1-10)
        #[arg(long)]
        num_incorrect: Option<String>,

        /// Question type to ask for: choice or text
        #[arg(long, default_value = "choice")]
        test_type: String,

        /// Difficulty hint for the generator
        #[arg(long, default_value = "easy")]
        difficulty: String,

        /// Provider name from the config (default: config's default_provider)
        #[arg(long)]
        provider: Option<String>,

        /// Model identifier (default: config's default_model)
        #[arg(long)]
        model: Option<String>,
    },

    /// Print the current quiz
    Show {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Grade answers against the current quiz and record the result
    Take {
        /// JSON object mapping question index to an answer string or list
        #[arg(long)]
        answers: PathBuf,

        /// Account submitting the attempt
        #[arg(long, default_value = "student")]
        username: String,

        /// Display name for the result
        #[arg(long)]
        student_name: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Add, update, or delete questions of the current quiz
    Edit {
        #[command(subcommand)]
        action: commands::edit::EditAction,
    },

    /// Show statistics over recorded results
    Stats {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Check a quiz file for common problems
    Validate {
        /// Quiz JSON file (default: the current quiz)
        #[arg(long)]
        quiz: Option<PathBuf>,
    },

    /// List available models
    ListModels {
        /// Filter to specific provider
        #[arg(long)]
        provider: Option<String>,
    },

    /// Create a starter config
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizsmith=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Generate {
            text,
            files,
            num_questions,
            num_options,
            num_correct,
            num_incorrect,
            test_type,
            difficulty,
            provider,
            model,
        } => {
            commands::generate::execute(commands::generate::GenerateArgs {
                text,
                files,
                num_questions,
                num_options,
                num_correct,
                num_incorrect,
                test_type,
                difficulty,
                provider,
                model,
                config,
            })
            .await
        }
        Commands::Show { format } => commands::show::execute(format, config),
        Commands::Take {
            answers,
            username,
            student_name,
            format,
        } => commands::take::execute(answers, username, student_name, format, config),
        Commands::Edit { action } => commands::edit::execute(action, config),
        Commands::Stats { format } => commands::stats::execute(format, config),
        Commands::Validate { quiz } => commands::validate::execute(quiz, config),
        Commands::ListModels { provider } => commands::list_models::execute(provider, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

//! quizbank CLI — browse question banks and check answers from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizbank", version, about = "Question-bank practice and answer checking")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bank directory (overrides config and QUIZBANK_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available banks
    Banks {
        /// Print the JSON response envelope
        #[arg(long)]
        json: bool,
    },

    /// Fetch a bank's questions
    Problems {
        /// Bank id (document file stem)
        #[arg(long)]
        bank: String,

        /// Practice mode: all, type
        #[arg(long)]
        mode: Option<String>,

        /// Question type kept in "type" mode
        #[arg(long = "type")]
        question_type: Option<String>,

        /// Randomize question order
        #[arg(long)]
        shuffle: bool,

        /// Print the JSON response envelope
        #[arg(long)]
        json: bool,
    },

    /// Check an answer against the stored one
    Check {
        /// Bank id (document file stem)
        #[arg(long)]
        bank: String,

        /// Origin index of the question
        #[arg(long, allow_hyphen_values = true)]
        index: Option<i64>,

        /// Answer as JSON (e.g. true, 2, "[0,2]", "[\"Paris\"]"); bare text is an essay answer
        #[arg(long, allow_hyphen_values = true)]
        answer: String,

        /// Print the JSON response envelope
        #[arg(long)]
        json: bool,
    },

    /// Validate bank documents
    Validate {
        /// Validate only this bank
        #[arg(long)]
        bank: Option<String>,
    },

    /// Create a starter config and example bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizbank=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();
    let global = commands::GlobalArgs {
        config: cli.config,
        data_dir: cli.data_dir,
    };

    let result = match cli.command {
        Commands::Banks { json } => commands::banks::execute(&global, json),
        Commands::Problems {
            bank,
            mode,
            question_type,
            shuffle,
            json,
        } => commands::problems::execute(&global, &bank, mode, question_type, shuffle, json),
        Commands::Check {
            bank,
            index,
            answer,
            json,
        } => commands::check::execute(&global, &bank, index, &answer, json),
        Commands::Validate { bank } => commands::validate::execute(&global, bank.as_deref()),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

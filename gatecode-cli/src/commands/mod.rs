//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod history;
mod play;
mod solved;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use gatecode_core::domain::language::Language;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run code against the first test case
    Run {
        /// Problem slug (e.g., two-sum)
        problem: String,

        /// Source file
        file: PathBuf,

        /// Language key or display name (e.g., python3, C++)
        #[arg(short, long, default_value = "javascript")]
        language: Language,
    },
    /// Submit code for judging against every test case
    Submit {
        /// Problem slug (e.g., two-sum)
        problem: String,

        /// Source file
        file: PathBuf,

        /// Language key or display name (e.g., python3, C++)
        #[arg(short, long, default_value = "javascript")]
        language: Language,

        /// Evaluate every case instead of stopping at the first failure
        #[arg(long)]
        all: bool,
    },
    /// Show recent submissions for a problem
    History {
        /// Problem slug
        problem: String,

        /// Maximum number of submissions
        #[arg(short = 'n', long, env = "GATECODE_HISTORY_LIMIT", default_value_t = 20)]
        limit: u32,

        /// Only show submissions in this language
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// List solved problems
    Solved,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run {
            problem,
            file,
            language,
        } => play::run(config, &problem, &file, language).await,
        Commands::Submit {
            problem,
            file,
            language,
            all,
        } => play::submit(config, &problem, &file, language, all).await,
        Commands::History {
            problem,
            limit,
            language,
        } => history::show(config, &problem, limit, language).await,
        Commands::Solved => solved::list(config).await,
    }
}

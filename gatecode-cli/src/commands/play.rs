//! Run and submit handlers

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::*;
use gatecode_core::domain::language::Language;
use gatecode_session::{AuthPrompt, PlaygroundSession, SubmitOutcome};

use crate::config::Config;
use crate::render::print_panel;

/// Login prompt printed to the terminal
struct TerminalAuthPrompt;

impl AuthPrompt for TerminalAuthPrompt {
    fn prompt_login(&self, problem: &str) {
        eprintln!(
            "{}",
            format!("Sign in to submit solutions for {}.", problem).yellow()
        );
        eprintln!(
            "{}",
            "  Pass --user and --token (or set GATECODE_USER and GATECODE_TOKEN).".dimmed()
        );
    }
}

/// Run a source file against the first test case
pub async fn run(config: &Config, problem: &str, file: &Path, language: Language) -> Result<()> {
    let code = read_source(file).await?;
    let session = open_session(config, problem, language)?;

    println!("{}", format!("Running {} ({})", problem, language).bold());
    session.run(&code).await;
    print_panel(&session.view());

    Ok(())
}

/// Submit a source file for judging
pub async fn submit(
    config: &Config,
    problem: &str,
    file: &Path,
    language: Language,
    run_all: bool,
) -> Result<()> {
    let code = read_source(file).await?;
    let session =
        open_session(config, problem, language)?.with_auth_prompt(Arc::new(TerminalAuthPrompt));

    println!("{}", format!("Submitting {} ({})", problem, language).bold());
    let outcome = session.submit(&code, run_all).await;

    // solved-marking runs in the background; finish it before exiting
    session.settle().await;

    if outcome == SubmitOutcome::AuthRequired {
        anyhow::bail!("Authentication required");
    }
    print_panel(&session.view());

    Ok(())
}

fn open_session(config: &Config, problem: &str, language: Language) -> Result<PlaygroundSession> {
    let session_config = config.session_config()?;
    Ok(PlaygroundSession::from_config(
        session_config,
        problem,
        language,
        Arc::new(config.identity()),
    ))
}

async fn read_source(file: &Path) -> Result<String> {
    tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read source file {}", file.display()))
}

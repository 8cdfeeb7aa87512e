//! History command handler

use std::sync::Arc;

use anyhow::Result;
use colored::*;
use gatecode_core::domain::language::Language;
use gatecode_session::{IdentityProvider, PlaygroundSession};

use crate::config::Config;
use crate::render::print_submission;

/// Show recent submissions for a problem, optionally for one language only
pub async fn show(
    config: &Config,
    problem: &str,
    limit: u32,
    language: Option<Language>,
) -> Result<()> {
    let identity = config.identity();
    if identity.current_user().is_none() {
        println!(
            "{}",
            "Sign in to see your submissions (--user and --token).".yellow()
        );
        return Ok(());
    }

    let session_config = config.session_config()?.with_history_limit(limit);
    let session = PlaygroundSession::from_config(
        session_config,
        problem,
        language.unwrap_or_default(),
        Arc::new(identity),
    );

    let records: Vec<_> = session
        .history()
        .await
        .into_iter()
        .filter(|record| language.is_none_or(|lang| record.language == lang.display_name()))
        .collect();

    if records.is_empty() {
        println!(
            "{}",
            format!("No submissions found for {}.", problem).yellow()
        );
    } else {
        println!(
            "{}",
            format!("Found {} submission(s) for {}:", records.len(), problem).bold()
        );
        println!();
        for record in &records {
            print_submission(record);
        }
    }

    Ok(())
}

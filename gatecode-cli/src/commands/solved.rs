//! Solved command handler

use anyhow::{Context, Result};
use colored::*;
use gatecode_session::{IdentityProvider, SolvedStore};

use crate::config::Config;

/// List problems the signed-in user has solved
pub async fn list(config: &Config) -> Result<()> {
    let Some(identity) = config.identity().current_user() else {
        println!("{}", "Sign in to see solved problems (--user and --token).".yellow());
        return Ok(());
    };

    if config.solved_store.is_none() {
        println!(
            "{}",
            "No solved store configured (--solved-store or GATECODE_SOLVED_STORE).".yellow()
        );
        return Ok(());
    }

    let solved = config
        .solved_store()
        .get_solved(&identity.user_id)
        .await
        .context("Failed to read solved problems")?;

    if solved.is_empty() {
        println!("{}", "No solved problems yet.".yellow());
    } else {
        println!(
            "{}",
            format!("{} solved {} problem(s):", identity.user_id, solved.len()).bold()
        );
        for problem in solved {
            println!("  {} {}", "✓".green(), problem);
        }
    }

    Ok(())
}

//! GateCode CLI
//!
//! Command-line front end of the playground: run code against a problem,
//! submit it for judging, browse submission history and solved problems.

mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gatecode")]
#[command(about = "GateCode playground CLI", long_about = None)]
struct Cli {
    /// Judge backend URL
    #[arg(
        long,
        env = "GATECODE_BACKEND_URL",
        default_value = "http://localhost:8081"
    )]
    backend_url: String,

    /// Deadline for quick runs, in seconds
    #[arg(long, env = "GATECODE_RUN_TIMEOUT_SECS", default_value_t = 5)]
    run_timeout: u64,

    /// Signed-in user id
    #[arg(long, env = "GATECODE_USER")]
    user: Option<String>,

    /// Bearer token of the signed-in user
    #[arg(long, env = "GATECODE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// JSON file recording solved problems
    #[arg(long, env = "GATECODE_SOLVED_STORE")]
    solved_store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "gatecode_cli=info,gatecode_session=info,gatecode_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        backend_url: cli.backend_url,
        run_timeout_secs: cli.run_timeout,
        user: cli.user,
        token: cli.token,
        solved_store: cli.solved_store,
    };
    tracing::debug!("Using backend {}", config.backend_url);

    handle_command(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn env_of(command: &clap::Command, arg: &str) -> Option<String> {
        command
            .get_arguments()
            .find(|a| a.get_id() == arg)
            .and_then(|a| a.get_env())
            .map(|env| env.to_string_lossy().into_owned())
    }

    #[test]
    fn test_flags_are_bound_to_environment() {
        let cli = Cli::command();
        assert_eq!(env_of(&cli, "backend_url").as_deref(), Some("GATECODE_BACKEND_URL"));
        assert_eq!(env_of(&cli, "run_timeout").as_deref(), Some("GATECODE_RUN_TIMEOUT_SECS"));
        assert_eq!(env_of(&cli, "solved_store").as_deref(), Some("GATECODE_SOLVED_STORE"));

        let history = cli
            .find_subcommand("history")
            .expect("history subcommand");
        assert_eq!(env_of(history, "limit").as_deref(), Some("GATECODE_HISTORY_LIMIT"));
    }

    #[test]
    fn test_history_limit_must_be_a_number() {
        assert!(Cli::try_parse_from(["gatecode", "history", "two-sum", "-n", "ten"]).is_err());

        let cli = Cli::try_parse_from(["gatecode", "history", "two-sum", "-n", "5"]).unwrap();
        assert!(matches!(cli.command, Commands::History { limit: 5, .. }));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}

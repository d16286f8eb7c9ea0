//! CLI for inspecting error classification and retry behaviour.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use worthit_core::config::WorthitConfig;

use commands::{run_classify, run_completions, run_policy, run_simulate, PolicyOverrides};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "worthit")]
#[command(about = "Worthit: classify data-layer failures and exercise the retry policy", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a failure and show the message a user would see.
    Classify {
        /// HTTP-like status code.
        #[arg(long)]
        status: Option<u16>,
        /// Failure message text.
        #[arg(long)]
        message: Option<String>,
        /// Raw failure as JSON (any value; non-objects classify as UNKNOWN).
        #[arg(long, conflicts_with_all = ["status", "message"])]
        json: Option<String>,
        /// What the user was doing, e.g. "voting".
        #[arg(long)]
        context: Option<String>,
    },

    /// Show the backoff schedule of the effective retry policy.
    Policy {
        #[command(flatten)]
        overrides: PolicyOverrides,
    },

    /// Run a fake operation that fails N times, through the retry driver.
    Simulate {
        /// Number of failures before the operation succeeds.
        #[arg(long, value_name = "N")]
        failures: u32,
        /// Status code of each failure.
        #[arg(long, conflicts_with = "message")]
        status: Option<u16>,
        /// Message of each failure (default "Network error" when no status is given).
        #[arg(long)]
        message: Option<String>,
        /// What the user was doing, used in the final message.
        #[arg(long)]
        context: Option<String>,
        #[command(flatten)]
        overrides: PolicyOverrides,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    /// Dispatch. Only commands that read the config fail when it could not be loaded.
    pub async fn run(self, cfg: Result<WorthitConfig>) -> Result<()> {
        match self {
            CliCommand::Classify {
                status,
                message,
                json,
                context,
            } => run_classify(status, message, json.as_deref(), context.as_deref())?,
            CliCommand::Policy { overrides } => run_policy(&required(cfg)?, &overrides)?,
            CliCommand::Simulate {
                failures,
                status,
                message,
                context,
                overrides,
            } => {
                let cfg = required(cfg)?;
                run_simulate(&cfg, &overrides, failures, status, message, context.as_deref())
                    .await?
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

fn required(cfg: Result<WorthitConfig>) -> Result<WorthitConfig> {
    let cfg = cfg.context("loading config")?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;

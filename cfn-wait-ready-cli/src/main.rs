mod output;

use anyhow::{anyhow, Context, Result};
use cfn_wait_ready::{CancellationToken, CloudFormationWaitService, WaitOutcome, WaitReadyError};
use clap::{Parser, Subcommand};
use colored::Colorize;
use output::TerminalReporter;
use std::process::ExitCode;

const REGION_ENV_VARS: [&str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];
const EXIT_CANCELLED: u8 = 130;

#[derive(Parser, Debug)]
#[command(
    name = "aws-cloudformation-wait-ready",
    version,
    about = "Wait for a CloudFormation stack to be ready for an update/create."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Wait until a stack can accept a new update or create
    Wait {
        /// The name of the stack to wait for.
        #[arg(short = 's', long)]
        stack_name: String,

        /// The AWS region to use. Defaults to the value of AWS_REGION or AWS_DEFAULT_REGION in the environment.
        #[arg(short = 'r', long)]
        region: Option<String>,
    },
}

/// Pick the region from the flag, then from the environment.
fn resolve_region(
    explicit: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    explicit
        .into_iter()
        .chain(REGION_ENV_VARS.iter().filter_map(|name| lookup(name)))
        .find(|region| !region.trim().is_empty())
        .ok_or_else(|| {
            anyhow!(
                "No region specified. Please specify a region with --region or set AWS_REGION or AWS_DEFAULT_REGION in the environment."
            )
        })
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Wait { stack_name, region } => {
            let region = resolve_region(region, |name| std::env::var(name).ok())?;
            log::debug!("Using region {}", region);

            let service = CloudFormationWaitService::new(region)
                .await
                .context("Failed to initialize CloudFormation client")?;

            let cancel = CancellationToken::new();
            let signal_cancel = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    log::debug!("Received interrupt, cancelling wait");
                    signal_cancel.cancel();
                }
            });

            let outcome = service
                .wait(&stack_name, &TerminalReporter, &cancel)
                .await
                .with_context(|| format!("Failed waiting for stack '{stack_name}'"))?;

            if let WaitOutcome::Ready { status } = &outcome {
                log::debug!("Stack '{}' finished in {}", stack_name, status);
            } else {
                log::debug!("Stack '{}' is absent: {:?}", stack_name, outcome);
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if matches!(e.downcast_ref::<WaitReadyError>(), Some(WaitReadyError::Cancelled)) => {
            eprintln!("{}", "Cancelled.".yellow());
            ExitCode::from(EXIT_CANCELLED)
        }
        Err(e) => {
            eprintln!("{}", format!("Error: {e:#}").red());
            ExitCode::FAILURE
        }
    }
}

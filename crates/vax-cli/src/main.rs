use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vax_cli::commands::{cases, parse, run, series};
use vax_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Run { case }) => {
            let names: Vec<String> = if case.is_empty() {
                let config = Config::load_from(cli.config.as_deref())
                    .context("failed to load configuration")?;
                tracing::debug!(?config, "loaded configuration");
                config.cases
            } else {
                case.clone()
            };
            for name in &names {
                run::run(&mut out, name)?;
            }
        }
        Some(Commands::Cases) => {
            cases::run(&mut out)?;
        }
        Some(Commands::Parse { text }) => {
            parse::run(&mut out, text)?;
        }
        Some(Commands::Series { antigen, cvx }) => {
            series::run(&mut out, antigen.as_deref(), cvx.as_deref())?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(out)?;
        }
    }

    Ok(())
}

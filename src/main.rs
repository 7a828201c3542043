// src/main.rs

use anyhow::Result;
use clap::Parser;
use snatcher::cli::Cli;
use snatcher::config::ConfigBuilder;
use snatcher::errors::AppError;
use snatcher::output::{self, set_color_enabled, should_colorize};
use snatcher::signal::setup_signal_handler;
use snatcher::{run, RunOutcome};
use std::io::{self, Write};

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "snatcher=debug".parse()?
                } else {
                    "snatcher=warn".parse()?
                },
            ),
        )
        .init();

    log::debug!("Starting snatcher v{}...", env!("CARGO_PKG_VERSION"));

    // --- Setup ---
    let cli = Cli::parse();
    if cli.url.is_none() {
        output::usage::write_usage(&mut io::stdout())?;
        std::process::exit(1);
    }

    let no_color_env = std::env::var_os("NO_COLOR").is_some();
    let stdout_is_tty = atty::is(atty::Stream::Stdout);
    let builder = ConfigBuilder::from_cli(cli);
    let color_allowed = builder.color_allowed();

    // --- Configuration ---
    let config = match builder.build() {
        Ok(config) => config,
        Err(e @ AppError::InvalidUrl { .. }) => {
            set_color_enabled(should_colorize(color_allowed, no_color_env, stdout_is_tty));
            output::usage::write_invalid_url(&mut io::stdout(), &e)?;
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    set_color_enabled(should_colorize(config.color, no_color_env, stdout_is_tty));

    let token = setup_signal_handler()?;

    // --- Execution ---
    let stdout = io::stdout();
    let result = run(&config, &token, &mut stdout.lock());

    // --- Error Handling ---
    match result {
        Ok(RunOutcome::Listed(listing)) => {
            output::summary::write_list_summary(&mut io::stderr(), &listing)?;
        }
        Ok(RunOutcome::Downloaded(report)) => {
            output::summary::write_download_summary(&mut io::stderr(), &report)?;
        }
        Ok(RunOutcome::Idle) => {}
        Err(AppError::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            io::stdout().flush().ok();
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

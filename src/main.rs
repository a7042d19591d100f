#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! sidebarcli — list and inspect widget-area sidebars from a CMS registry snapshot.

mod cli;
mod commands;
mod config;
mod logging;
mod registry;
mod types;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use crate::config::AppConfig;
use cli::{Cli, OutputCtx, write_error};
use commands::{Outcome, Streams};
use registry::{
    InactiveWidgetsPlaceholder, NormalizeHook, SidebarError, SidebarQuery, SnapshotSource,
};
use types::ErrorOutput;

/// Exit status for configuration and start-up failures.
const EXIT_STARTUP: i32 = 2;

fn main() {
    let cli = Cli::parse();
    let ctx = OutputCtx::new(cli.no_header, cli.json_errors);

    let config = match bootstrap(&cli) {
        Ok(config) => config,
        Err(err) => {
            write_error(&ErrorOutput::startup(&err), &ctx);
            std::process::exit(EXIT_STARTUP);
        }
    };

    match execute(&cli, &config, &ctx) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            write_error(&ErrorOutput::from_sidebar_error(&err), &ctx);
            std::process::exit(err.exit_code());
        }
    }
}

fn bootstrap(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config =
        crate::config::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init_logging(&config.logging, cli.debug)?;
    debug!(?config, "configuration resolved");
    Ok(config)
}

fn execute(cli: &Cli, config: &AppConfig, ctx: &OutputCtx) -> Result<Outcome, SidebarError> {
    let path = config.registry_path(cli.registry.as_deref())?;
    let registry = registry::snapshot::load(&SnapshotSource::from_arg(path))?;

    let placeholder = InactiveWidgetsPlaceholder;
    let hook: Option<&dyn NormalizeHook> = if config.register_unused_sidebar {
        Some(&placeholder)
    } else {
        None
    };
    let query = SidebarQuery::new(&registry, hook);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut io = Streams {
        out: &mut out,
        err: &mut err,
    };
    let outcome = commands::dispatch(&cli.command, &query, ctx, &mut io)?;
    io.out.flush()?;
    Ok(outcome)
}

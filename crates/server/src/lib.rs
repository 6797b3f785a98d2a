//! This crate provides the HTTP service and command-line front end for the
//! `learnavia` application. The recommendation engine itself lives in
//! `learnavia-intelligence`; this crate validates requests, maps them onto
//! engine calls and serializes the results.
//!
//! The main entry point is the [`run`] function, which reads
//! `~/.learnavia/config.toml`, parses the command line and dispatches to the
//! requested subcommand (`serve` when none is given).
//!
//! Logs go to stderr and are filtered with `RUST_LOG`; stdout carries only
//! command output.

use anyhow::Result;
use clap::Parser;

pub mod api;
pub mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod handler;
pub mod http_transport;
pub mod signals;

pub use api::{RecommendationRequest, RecommendationResponse};
pub use error::{ApiError, ApiResult};
pub use handler::{router, AppState};
pub use http_transport::{build_app, serve_http, HttpConfig};

use cli::{Cli, Commands};

/// The main entry point for the `learnavia` application.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Must run before parsing so clap sees the exported env vars.
    config::apply_config_to_env();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve(cli.serve)) {
        Commands::Serve(args) => commands::handle_serve_command(args),
        Commands::Recommend {
            input,
            catalog,
            num_recs,
            pretty,
        } => commands::handle_recommend_command(input, catalog, num_recs, pretty),
        Commands::Catalog { catalog } => commands::handle_catalog_command(catalog),
    }
}

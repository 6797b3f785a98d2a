use crate::config::{ENV_CATALOG, ENV_CORS_ORIGINS, ENV_HTTP};
use crate::http_transport::DEFAULT_BIND;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for the `learnavia` application.
#[derive(Debug, Parser)]
#[command(
    name = "learnavia",
    about = "Extracurricular activity recommendations for student portfolios",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Serve options used when no subcommand is given.
    #[command(flatten)]
    pub serve: ServeArgs,
}

/// Available `learnavia` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Runs the HTTP recommendation service (default).
    Serve(ServeArgs),
    /// Answers one recommendation request read from a file or stdin.
    Recommend {
        /// Request JSON (`{"profile": ..., "activities": ..., "num_recs": ...}`); stdin when omitted.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Catalog file (.toml or .json); the built-in pool when omitted.
        #[arg(long, env = ENV_CATALOG, value_name = "PATH")]
        catalog: Option<PathBuf>,
        /// Overrides the request's `num_recs`.
        #[arg(long, allow_negative_numbers = true)]
        num_recs: Option<i64>,
        /// Pretty-prints the response.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Prints the effective candidate catalog as JSON.
    Catalog {
        /// Catalog file (.toml or .json); the built-in pool when omitted.
        #[arg(long, env = ENV_CATALOG, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },
}

/// Options for the HTTP service.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Bind address for the HTTP service.
    #[arg(long, env = ENV_HTTP, value_name = "ADDR", default_value = DEFAULT_BIND)]
    pub http: String,
    /// Allowed CORS origins (repeatable or comma-separated; `*` for any).
    #[arg(
        long = "cors-origin",
        env = ENV_CORS_ORIGINS,
        value_name = "ORIGIN",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub cors_origins: Vec<String>,
    /// Catalog file (.toml or .json); the built-in pool when omitted.
    #[arg(long, env = ENV_CATALOG, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

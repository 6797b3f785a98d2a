//! Command-line interface for the `learnavia` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `learnavia-server` crate.

fn main() -> anyhow::Result<()> {
    learnavia_server::run()
}

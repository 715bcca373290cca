//! Entry point. Wires CLI commands to the options backend API.

mod analysis;
mod cli;
mod commands;
mod constants;
mod error;
mod models;
mod render;
mod services;
mod utils;

use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG overrides the warn default
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .init();

    cli::run();
}

//! tonedeck - terminal front end for the placeholder tone player
//!
//! Run with: cargo run
//! Logs go to stderr, filtered by RUST_LOG (default `tonedeck=info`).

mod app;
mod ui;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "tonedeck=info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    app::run()
}

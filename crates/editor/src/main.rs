use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // The alternate screen owns stdout, so diagnostics go to stderr; silent
    // unless RUST_LOG asks for them (redirect 2> a file to capture).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let initial_file = std::env::args().nth(1).map(PathBuf::from);
    plainpad::tui::run(initial_file).context("terminal session failed")
}

//! CLI entry point for the Mondriant generator

use clap::Parser;
use mondriant::io::cli::{Cli, Generator};
use tracing_subscriber::EnvFilter;

fn main() -> mondriant::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut generator = Generator::new(cli);
    generator.process()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// CLI binary entry point for e7song
//
// Decodes one e7impress song container per invocation.

mod cli;

use anyhow::Context;
use clap::Parser;
use std::process;

use cli::{Config, OutputFormatter};

fn main() {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&config) {
        OutputFormatter::new(config.format, config.quiet).print_error(&format!("{:#}", e));
        process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    cli::commands::execute(config)
        .with_context(|| format!("{} failed", config.command.name()))
}

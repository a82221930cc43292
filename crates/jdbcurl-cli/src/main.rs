use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

use args::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    // Initialize logging. --verbose wins over RUST_LOG.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load .env file if present
    let _ = dotenvy::dotenv();

    let result = commands::Context::load(cli.env.clone()).and_then(|ctx| match &cli.command {
        Command::Parse(args) => commands::parse::run(args, &ctx),
        Command::Detect(args) => commands::detect::run(args, &ctx),
        Command::Check(args) => commands::check::run(args, &ctx),
        Command::Mask(args) => commands::mask::run(args, &ctx),
    });

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

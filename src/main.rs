use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use gscript::cli::Cli;

fn main() {
    let args = Cli::parse();

    let default_filter = if args.verbose { "gscript=debug" } else { "gscript=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = gscript::run(&args) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

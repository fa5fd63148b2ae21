use clap::Parser;
use plover_cli::{Cli, commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match commands::scrape::execute(&cli.to_options()) {
        Ok(path) => {
            println!("Wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("plover=debug,plover_cli=debug,plover_core=debug,plover_browser=debug")
    } else {
        EnvFilter::new("plover=info,plover_cli=info,plover_core=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

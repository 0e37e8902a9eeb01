mod cli;
mod extract_cmd;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "pdftables=debug"
    } else {
        "pdftables=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let result = extract_cmd::run(
        &cli.file,
        &cli.output,
        cli.pages.as_deref(),
        cli.header_row_index(),
    );

    if let Err(code) = result {
        std::process::exit(code);
    }
}

//! Modelmap CLI - generate an ER diagram from PHP model classes

mod cli;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    // Verbose lowers the filter; RUST_LOG still wins when set
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

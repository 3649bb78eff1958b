//! just-install - The simple package installer for Windows
//!
//! Downloads installers listed in a package registry, runs them unattended, and exposes the
//! installed executables through shims.

use std::io::Write;

use clap::Parser;

mod arch;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod fetch;
mod installer;
mod operations;
mod progress;
mod system;
mod temp;
mod template;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::Settings;
use template::Environment;

/// Log to stderr at `info` (`debug` with `--verbose`); `RUST_LOG` overrides both
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let env = Environment::capture();
    let settings = Settings::from_environment(&env).with_registry(cli.registry);

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(&env, &settings, args),
        Commands::List(args) => commands::list::run(&settings, args),
        Commands::Clean => commands::clean::run(&settings),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

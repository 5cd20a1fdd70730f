//! Apkset - APK Set matching and sizing
//!
//! A command line tool that matches the artifacts of an APK Set archive
//! against a device specification, extracts the artifacts a device would
//! install, and reports download size ranges across device configurations.

use clap::Parser;

mod archive;
mod cli;
mod commands;
mod error;
mod matcher;
mod model;
mod progress;
mod resolver;
mod selector;
mod sizes;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Size(args) => commands::size::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

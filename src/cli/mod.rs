//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - extract: Extract command arguments
//! - size: Size command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod extract;
pub mod size;

pub use completions::CompletionsArgs;
pub use extract::ExtractArgs;
pub use size::SizeArgs;

/// Apkset - APK Set matching and sizing
///
/// Match artifacts of an APK Set against a device specification and report
/// download sizes across device configurations.
#[derive(Parser, Debug)]
#[command(
    name = "apkset",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Device-aware artifact extraction and sizing for APK Sets",
    long_about = "Apkset reads the table of contents of an APK Set archive, matches its \
                  variants and artifacts against a device specification, and either extracts \
                  the artifacts a device would install or reports download size ranges \
                  across device configurations.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  apkset extract --apks app.apks --device-spec pixel.json    \x1b[90m# Extract matched artifacts\x1b[0m\n   \
                  apkset extract --apks app.apks --device-spec pixel.json \\\n     --modules feature_a --instant                            \x1b[90m# Instant delivery, extra module\x1b[0m\n   \
                  apkset size total --apks app.apks                          \x1b[90m# Size range over all devices\x1b[0m\n   \
                  apkset size total --apks app.apks --dimensions ABI,SDK     \x1b[90m# Break sizes down per dimension\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the artifacts a device would install
    Extract(ExtractArgs),

    /// Report download sizes across device configurations
    Size(SizeArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

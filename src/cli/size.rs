use clap::Parser;
use std::path::PathBuf;

/// Arguments for the size command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Overall download size range:\n    apkset size total --apks app.apks\n\n\
                  Sizes for a concrete device:\n    apkset size total --apks app.apks --device-spec pixel.json\n\n\
                  Break sizes down per dimension:\n    apkset size total --apks app.apks --dimensions SDK,ABI\n\n\
                  All dimensions at once:\n    apkset size total --apks app.apks --dimensions ALL")]
pub struct SizeArgs {
    /// What to measure (only 'total' is supported)
    pub target: String,

    /// Path to the APK Set archive (zip file or extracted directory)
    #[arg(long)]
    pub apks: PathBuf,

    /// Path to a partial device specification file (JSON or YAML); unset
    /// fields range over all declared alternatives
    #[arg(long = "device-spec")]
    pub device_spec: Option<PathBuf>,

    /// Dimensions to break the report down by
    /// (SDK, ABI, SCREEN_DENSITY, LANGUAGE, or ALL)
    #[arg(long, value_name = "DIMENSION", value_delimiter = ',')]
    pub dimensions: Vec<String>,

    /// Modules to measure in addition to their dependencies (defaults to
    /// install-time modules)
    #[arg(long, value_name = "MODULE", value_delimiter = ',')]
    pub modules: Vec<String>,

    /// Measure instant-delivery modules instead of install-time ones
    #[arg(long)]
    pub instant: bool,
}

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Extract into a directory:\n    apkset extract --apks app.apks --device-spec pixel.json --output-dir out/\n\n\
                  Extract into a temporary directory:\n    apkset extract --apks app.apks --device-spec pixel.json\n\n\
                  Extract extra on-demand modules:\n    apkset extract --apks app.apks --device-spec pixel.json --modules feature_a,feature_b\n\n\
                  Extract instant-delivery artifacts:\n    apkset extract --apks app.apks --device-spec pixel.json --instant")]
pub struct ExtractArgs {
    /// Path to the APK Set archive (zip file or extracted directory)
    #[arg(long)]
    pub apks: PathBuf,

    /// Path to the device specification file (JSON or YAML)
    #[arg(long = "device-spec")]
    pub device_spec: PathBuf,

    /// Directory to extract artifacts into (defaults to a temporary directory)
    #[arg(long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Modules to extract in addition to their dependencies (defaults to
    /// install-time modules)
    #[arg(long, value_name = "MODULE", value_delimiter = ',')]
    pub modules: Vec<String>,

    /// Match instant-delivery modules instead of install-time ones
    #[arg(long)]
    pub instant: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_extract_full() {
        let cli = Cli::try_parse_from([
            "apkset",
            "extract",
            "--apks",
            "app.apks",
            "--device-spec",
            "pixel.json",
            "--output-dir",
            "out",
            "--modules",
            "feature_a,feature_b",
            "--instant",
        ])
        .unwrap();
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.apks, PathBuf::from("app.apks"));
                assert_eq!(args.device_spec, PathBuf::from("pixel.json"));
                assert_eq!(args.output_dir, Some(PathBuf::from("out")));
                assert_eq!(args.modules, vec!["feature_a", "feature_b"]);
                assert!(args.instant);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_cli_parsing_extract_defaults() {
        let cli = Cli::try_parse_from([
            "apkset",
            "extract",
            "--apks",
            "app.apks",
            "--device-spec",
            "pixel.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.output_dir, None);
                assert!(args.modules.is_empty());
                assert!(!args.instant);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_cli_parsing_extract_repeated_modules_flag() {
        let cli = Cli::try_parse_from([
            "apkset",
            "extract",
            "--apks",
            "app.apks",
            "--device-spec",
            "pixel.json",
            "--modules",
            "feature_a",
            "--modules",
            "feature_b",
        ])
        .unwrap();
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.modules, vec!["feature_a", "feature_b"]);
            }
            _ => panic!("Expected Extract command"),
        }
    }
}

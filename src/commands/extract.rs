//! Extract command implementation
//!
//! Matches the APK Set against a full device specification and extracts the
//! artifacts the device would install. With a directory APK Set the artifacts
//! are resolved in place instead of copied; combining that form with
//! --output-dir is rejected.

use std::collections::BTreeSet;
use std::path::PathBuf;

use console::Style;

use crate::archive::{ApkSet, create_output_temp_dir};
use crate::cli::ExtractArgs;
use crate::error::{ApkSetError, Result, validation};
use crate::matcher::match_variant;
use crate::model::DeviceSpec;
use crate::resolver::resolve_modules;
use crate::selector::select_artifacts;

/// Run extract command
pub fn run(args: ExtractArgs) -> Result<()> {
    let device = DeviceSpec::full_from_file(&args.device_spec)?;
    let apk_set = ApkSet::open(&args.apks)?;

    if apk_set.is_directory() && args.output_dir.is_some() {
        return Err(validation::output_dir_with_directory_archive());
    }

    let toc = apk_set.read_toc()?;
    let variant = match_variant(&device, &toc)?;

    let requested = requested_modules(&args.modules);
    let modules = resolve_modules(&toc, requested.as_ref(), args.instant)?;
    let entries = select_artifacts(&toc, variant, &modules, &device)?;

    let paths = if apk_set.is_directory() {
        apk_set.resolve_entries(&entries)?
    } else {
        let output_dir = prepare_output_dir(args.output_dir)?;
        apk_set.extract_entries(&entries, &output_dir)?
    };

    eprintln!(
        "{} {} artifact(s) for modules: {}",
        Style::new().bold().green().apply_to("Matched"),
        paths.len(),
        modules.iter().cloned().collect::<Vec<_>>().join(", ")
    );
    for path in &paths {
        println!("{}", path.display());
    }

    Ok(())
}

fn requested_modules(modules: &[String]) -> Option<BTreeSet<String>> {
    if modules.is_empty() {
        None
    } else {
        Some(modules.iter().cloned().collect())
    }
}

/// Use the given output directory, or create a kept temporary one
fn prepare_output_dir(output_dir: Option<PathBuf>) -> Result<PathBuf> {
    match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir).map_err(|e| ApkSetError::IoError {
                message: format!(
                    "Failed to create output directory '{}': {}",
                    dir.display(),
                    e
                ),
            })?;
            Ok(dir)
        }
        None => {
            let dir = create_output_temp_dir()?;
            eprintln!("Extracting into temporary directory: {}", dir.display());
            Ok(dir)
        }
    }
}

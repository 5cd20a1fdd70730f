//! Size command implementation
//!
//! Aggregates download sizes over every device configuration compatible with
//! a (possibly partial) device specification and prints a CSV report with one
//! row per combination of the requested dimensions.

use std::collections::BTreeSet;

use crate::archive::ApkSet;
use crate::cli::SizeArgs;
use crate::error::{Result, validation};
use crate::model::{DeviceSpec, Dimension};
use crate::sizes::{self, SizeRequest};

const SIZE_TARGET_TOTAL: &str = "total";

/// Run size command
pub fn run(args: SizeArgs) -> Result<()> {
    if args.target != SIZE_TARGET_TOTAL {
        return Err(validation::unknown_size_target(
            &args.target,
            SIZE_TARGET_TOTAL,
        ));
    }

    let device = match &args.device_spec {
        Some(path) => DeviceSpec::from_file(path)?,
        None => DeviceSpec::default(),
    };
    let dimensions = parse_dimensions(&args.dimensions)?;

    let apk_set = ApkSet::open(&args.apks)?;
    let toc = apk_set.read_toc()?;

    let request = SizeRequest {
        device,
        dimensions: dimensions.clone(),
        modules: requested_modules(&args.modules),
        instant: args.instant,
    };
    let table = sizes::aggregate(&toc, &request)?;

    print!("{}", sizes::csv::render(&table, &dimensions));
    Ok(())
}

fn requested_modules(modules: &[String]) -> Option<BTreeSet<String>> {
    if modules.is_empty() {
        None
    } else {
        Some(modules.iter().cloned().collect())
    }
}

/// Parse --dimensions values; ALL selects every dimension
fn parse_dimensions(names: &[String]) -> Result<BTreeSet<Dimension>> {
    let mut dimensions = BTreeSet::new();
    for name in names {
        if name.eq_ignore_ascii_case("ALL") {
            dimensions.extend(Dimension::ALL);
            continue;
        }
        let parsed = Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                validation::unknown_dimension(name, "SDK, ABI, SCREEN_DENSITY, LANGUAGE, ALL")
            })?;
        dimensions.insert(parsed);
    }
    Ok(dimensions)
}

//! CSV rendering of the size report
//!
//! One header row naming the expanded dimensions in fixed column order
//! followed by MIN and MAX, then one row per configuration in key order
//! (lexicographic by dimension values).

use std::collections::{BTreeMap, BTreeSet};

use crate::model::Dimension;
use crate::sizes::{SizeConfiguration, SizeRange};

/// Render the aggregated size table as CSV
pub fn render(
    table: &BTreeMap<SizeConfiguration, SizeRange>,
    dimensions: &BTreeSet<Dimension>,
) -> String {
    let columns: Vec<Dimension> = Dimension::ALL
        .into_iter()
        .filter(|dimension| dimensions.contains(dimension))
        .collect();

    let mut out = String::new();
    for dimension in &columns {
        out.push_str(&dimension.to_string());
        out.push(',');
    }
    out.push_str("MIN,MAX\n");

    for (config, range) in table {
        for dimension in &columns {
            out.push_str(config.column(*dimension));
            out.push(',');
        }
        out.push_str(&format!("{},{}\n", range.min, range.max));
    }
    out
}

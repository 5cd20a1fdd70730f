//! Size configuration keys
//!
//! A [`SizeConfiguration`] is the grouping key of the size report: one
//! concrete value per expanded dimension, absent for dimensions that were not
//! expanded (or that a variant declares no alternative for). Keys order
//! lexicographically by their dimension values, which drives the report row
//! order.

use crate::model::{Dimension, TargetingValue};

/// Concrete values for the expanded dimensions of one report row
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SizeConfiguration {
    pub sdk: Option<String>,
    pub abi: Option<String>,
    pub density: Option<String>,
    pub language: Option<String>,
}

impl SizeConfiguration {
    /// Set the value for one dimension
    pub fn set(&mut self, dimension: Dimension, value: &TargetingValue) {
        let rendered = value.to_string();
        match dimension {
            Dimension::Sdk => self.sdk = Some(rendered),
            Dimension::Abi => self.abi = Some(rendered),
            Dimension::ScreenDensity => self.density = Some(rendered),
            Dimension::Language => self.language = Some(rendered),
        }
    }

    /// Set the SDK column from a variant's range lower bound
    pub fn set_sdk(&mut self, sdk: u32) {
        self.sdk = Some(sdk.to_string());
    }

    /// The rendered value for one dimension, empty when absent
    pub fn column(&self, dimension: Dimension) -> &str {
        let value = match dimension {
            Dimension::Sdk => &self.sdk,
            Dimension::Abi => &self.abi,
            Dimension::ScreenDensity => &self.density,
            Dimension::Language => &self.language,
        };
        value.as_deref().unwrap_or("")
    }
}

/// Inclusive download-size bounds for one configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub min: u64,
    pub max: u64,
}

impl SizeRange {
    /// A range pinned to a single observed total
    pub fn of(total: u64) -> Self {
        SizeRange {
            min: total,
            max: total,
        }
    }

    /// Widen the range to include another observed total
    pub fn absorb(&mut self, total: u64) {
        self.min = self.min.min(total);
        self.max = self.max.max(total);
    }

    /// Widen the range to include another range
    pub fn merge(&mut self, other: SizeRange) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

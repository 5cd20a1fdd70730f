//! Device specification
//!
//! A device spec describes the configuration of a target device. Any absent
//! field is a wildcard that matches every declared alternative on that
//! dimension. The extract flow requires a full spec; the size flow accepts
//! partial ones.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, spec, validation};
use crate::model::targeting::{Dimension, TargetingValue};

/// A full or partial device configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeviceSpec {
    /// Android SDK version of the device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<u32>,

    /// Supported ABIs, most preferred first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_abis: Option<Vec<String>>,

    /// Screen density in dpi
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_density: Option<u32>,

    /// Supported locales as BCP-47 tags, most preferred first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_locales: Option<Vec<String>>,
}

impl DeviceSpec {
    /// Load a partial device spec from a JSON or YAML file
    pub fn from_file(path: &Path) -> Result<DeviceSpec> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| spec::read_failed(path.display().to_string(), e.to_string()))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            serde_yaml::from_str(&content)
                .map_err(|e| spec::parse_failed(path.display().to_string(), e.to_string()))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| spec::parse_failed(path.display().to_string(), e.to_string()))
        }
    }

    /// Load a device spec from a file and require every field to be present
    pub fn full_from_file(path: &Path) -> Result<DeviceSpec> {
        let device = DeviceSpec::from_file(path)?;
        device.require_full()?;
        Ok(device)
    }

    /// Validate that this spec is full: every field present and meaningful
    pub fn require_full(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.sdk_version.is_none_or(|sdk| sdk == 0) {
            missing.push("sdkVersion");
        }
        if self
            .supported_abis
            .as_ref()
            .is_none_or(|abis| abis.is_empty())
        {
            missing.push("supportedAbis");
        }
        if self.screen_density.is_none_or(|density| density == 0) {
            missing.push("screenDensity");
        }
        if self
            .supported_locales
            .as_ref()
            .is_none_or(|locales| locales.is_empty())
        {
            missing.push("supportedLocales");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(validation::incomplete_device_spec(missing))
        }
    }

    /// Whether the given dimension is left as a wildcard
    pub fn is_open(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Sdk => self.sdk_version.is_none(),
            Dimension::Abi => self.supported_abis.is_none(),
            Dimension::ScreenDensity => self.screen_density.is_none(),
            Dimension::Language => self.supported_locales.is_none(),
        }
    }

    /// Copy of this spec with one dimension pinned to a single concrete value
    ///
    /// Used by the size aggregator to materialize hypothetical devices. `None`
    /// pins ABI or language to "supported, but matching no declared
    /// alternative", which forces the default-artifact fallback.
    pub fn pinned(&self, dimension: Dimension, value: Option<&TargetingValue>) -> DeviceSpec {
        let mut device = self.clone();
        match (dimension, value) {
            (Dimension::Abi, Some(TargetingValue::Abi(abi))) => {
                device.supported_abis = Some(vec![abi.clone()]);
            }
            (Dimension::Abi, None) => {
                device.supported_abis = Some(vec!["__unmatched__".to_string()]);
            }
            (Dimension::ScreenDensity, Some(TargetingValue::Density(density))) => {
                device.screen_density = Some(*density);
            }
            (Dimension::Language, Some(TargetingValue::Language(language))) => {
                device.supported_locales = Some(vec![language.clone()]);
            }
            (Dimension::Language, None) => {
                device.supported_locales = Some(vec!["__unmatched__".to_string()]);
            }
            _ => {}
        }
        device
    }

    /// Copy of this spec with the SDK pinned
    pub fn with_sdk(&self, sdk: u32) -> DeviceSpec {
        let mut device = self.clone();
        device.sdk_version = Some(sdk);
        device
    }
}

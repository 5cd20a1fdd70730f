//! Language dimension matching
//!
//! Matching is by base-language subtag ("en-US" and "en-GB" both match a
//! declared "en" alternative). The device's locale list is a preference
//! order; the first device locale whose base subtag appears among the
//! declared alternatives wins. No match resolves to the default artifact,
//! which carries the resources for all untargeted and fallback locales.

use crate::matcher::DimensionMatcher;
use crate::model::{DeviceSpec, Dimension, TargetingValue, base_language};

pub struct LanguageMatcher;

impl DimensionMatcher for LanguageMatcher {
    fn dimension(&self) -> Dimension {
        Dimension::Language
    }

    fn best_alternative(
        &self,
        device: &DeviceSpec,
        declared: &[TargetingValue],
    ) -> Option<TargetingValue> {
        let device_locales = device.supported_locales.as_ref()?;
        for locale in device_locales {
            let base = base_language(locale);
            let matched = declared.iter().find(|value| match value {
                TargetingValue::Language(tag) => base_language(tag) == base,
                _ => false,
            });
            if let Some(value) = matched {
                return Some(value.clone());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(tags: &[&str]) -> Vec<TargetingValue> {
        tags.iter()
            .map(|tag| TargetingValue::Language((*tag).to_string()))
            .collect()
    }

    fn device(locales: &[&str]) -> DeviceSpec {
        DeviceSpec {
            supported_locales: Some(locales.iter().map(ToString::to_string).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_subtag_match() {
        let best =
            LanguageMatcher.best_alternative(&device(&["en-US"]), &declared(&["fr", "en"]));
        assert_eq!(best, Some(TargetingValue::Language("en".to_string())));
    }

    #[test]
    fn test_device_preference_order_wins() {
        let best = LanguageMatcher
            .best_alternative(&device(&["de-DE", "fr-FR"]), &declared(&["fr", "de"]));
        assert_eq!(best, Some(TargetingValue::Language("de".to_string())));
    }

    #[test]
    fn test_no_match_falls_back_to_default() {
        let best = LanguageMatcher.best_alternative(&device(&["ja-JP"]), &declared(&["fr", "en"]));
        assert_eq!(best, None);
    }

    #[test]
    fn test_wildcard_device_resolves_to_none() {
        let best = LanguageMatcher.best_alternative(&DeviceSpec::default(), &declared(&["en"]));
        assert_eq!(best, None);
    }
}

//! Screen density dimension matching
//!
//! Picks the nearest declared alternative at or above the device density;
//! when every alternative is below the device, the highest one wins. A set
//! with no density alternatives resolves to the default artifact.

use crate::matcher::DimensionMatcher;
use crate::model::{DeviceSpec, Dimension, TargetingValue};

pub struct DensityMatcher;

impl DimensionMatcher for DensityMatcher {
    fn dimension(&self) -> Dimension {
        Dimension::ScreenDensity
    }

    fn best_alternative(
        &self,
        device: &DeviceSpec,
        declared: &[TargetingValue],
    ) -> Option<TargetingValue> {
        let device_density = device.screen_density?;
        let densities: Vec<u32> = declared
            .iter()
            .filter_map(|value| match value {
                TargetingValue::Density(density) => Some(*density),
                _ => None,
            })
            .collect();

        let at_or_above = densities
            .iter()
            .filter(|&&density| density >= device_density)
            .min()
            .copied();
        at_or_above
            .or_else(|| densities.iter().max().copied())
            .map(TargetingValue::Density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(densities: &[u32]) -> Vec<TargetingValue> {
        densities.iter().copied().map(TargetingValue::Density).collect()
    }

    fn device(density: u32) -> DeviceSpec {
        DeviceSpec {
            screen_density: Some(density),
            ..Default::default()
        }
    }

    #[test]
    fn test_nearest_at_or_above() {
        let best = DensityMatcher.best_alternative(&device(420), &declared(&[320, 480, 640]));
        assert_eq!(best, Some(TargetingValue::Density(480)));
    }

    #[test]
    fn test_exact_match() {
        let best = DensityMatcher.best_alternative(&device(480), &declared(&[320, 480, 640]));
        assert_eq!(best, Some(TargetingValue::Density(480)));
    }

    #[test]
    fn test_highest_below_when_none_above() {
        let best = DensityMatcher.best_alternative(&device(700), &declared(&[320, 480, 640]));
        assert_eq!(best, Some(TargetingValue::Density(640)));
    }

    #[test]
    fn test_no_alternatives_resolves_to_default() {
        let best = DensityMatcher.best_alternative(&device(420), &[]);
        assert_eq!(best, None);
    }

    #[test]
    fn test_wildcard_device_resolves_to_none() {
        let best = DensityMatcher.best_alternative(&DeviceSpec::default(), &declared(&[480]));
        assert_eq!(best, None);
    }
}

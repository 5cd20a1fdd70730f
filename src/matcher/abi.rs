//! ABI dimension matching
//!
//! The device's ABI list is a preference order, most preferred first. The
//! first device ABI that appears among the declared alternatives wins; a
//! device whose ABIs all miss the declared set gets the default artifact,
//! never an error.

use crate::matcher::DimensionMatcher;
use crate::model::{DeviceSpec, Dimension, TargetingValue};

pub struct AbiMatcher;

impl DimensionMatcher for AbiMatcher {
    fn dimension(&self) -> Dimension {
        Dimension::Abi
    }

    fn best_alternative(
        &self,
        device: &DeviceSpec,
        declared: &[TargetingValue],
    ) -> Option<TargetingValue> {
        let device_abis = device.supported_abis.as_ref()?;
        device_abis
            .iter()
            .find(|abi| declared.contains(&TargetingValue::Abi((*abi).clone())))
            .map(|abi| TargetingValue::Abi(abi.clone()))
    }
}

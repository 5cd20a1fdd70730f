//! Targeting model for apkset
//!
//! Immutable value types describing an APK Set (variants, modules, artifacts
//! and their per-dimension targeting) and the device configuration they are
//! matched against. Everything here is read-only after parsing and can be
//! shared freely across concurrent matcher and aggregator invocations.

pub mod device;
pub mod targeting;
pub mod toc;

pub use device::DeviceSpec;
pub use targeting::{Dimension, TargetingValue, base_language};
pub use toc::{Artifact, DeliveryMode, StandaloneArtifact, TableOfContents, Variant};

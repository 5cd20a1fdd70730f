//! Command implementations for Apkset CLI

pub mod completions;
pub mod extract;
pub mod size;
pub mod version;

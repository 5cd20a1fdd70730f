//! Module closure resolution
//!
//! Expands a requested module set (or the delivery-mode default set) into its
//! transitive dependency closure. The APK Set builder guarantees an acyclic
//! module graph, but a corrupt table of contents must not hang the resolver:
//! traversal tracks the active chain and reports a cycle as a corruption
//! error instead of looping.

use std::collections::BTreeSet;

use crate::error::{Result, corruption, validation};
use crate::model::{DeliveryMode, TableOfContents};

/// Resolve the set of modules to deliver
///
/// With no explicit request, the default set is every module whose delivery
/// mode matches the requested installability: install-time modules normally,
/// instant modules when `instant` is set. An explicit request must be
/// non-empty and name only modules present in the APK Set. Either way the
/// result is closed over dependencies.
pub fn resolve_modules(
    toc: &TableOfContents,
    requested: Option<&BTreeSet<String>>,
    instant: bool,
) -> Result<BTreeSet<String>> {
    let seed: BTreeSet<String> = match requested {
        Some(modules) => {
            if modules.is_empty() {
                return Err(validation::empty_module_set());
            }
            for name in modules {
                if toc.module(name).is_none() {
                    return Err(validation::unknown_module(name));
                }
            }
            modules.clone()
        }
        None => {
            let wanted = if instant {
                DeliveryMode::Instant
            } else {
                DeliveryMode::InstallTime
            };
            toc.modules
                .iter()
                .filter(|module| module.delivery == wanted)
                .map(|module| module.name.clone())
                .collect()
        }
    };

    let mut resolved = BTreeSet::new();
    for name in &seed {
        let mut chain = Vec::new();
        close_over_dependencies(toc, name, &mut resolved, &mut chain)?;
    }
    Ok(resolved)
}

/// Depth-first closure with cycle detection over the active chain
fn close_over_dependencies(
    toc: &TableOfContents,
    name: &str,
    resolved: &mut BTreeSet<String>,
    chain: &mut Vec<String>,
) -> Result<()> {
    if let Some(position) = chain.iter().position(|entry| entry == name) {
        let mut cycle: Vec<String> = chain[position..].to_vec();
        cycle.push(name.to_string());
        return Err(corruption::dependency_cycle(cycle));
    }
    if resolved.contains(name) {
        return Ok(());
    }

    let module = toc.module(name).ok_or_else(|| {
        corruption::unknown_dependency(chain.last().cloned().unwrap_or_default(), name)
    })?;

    chain.push(name.to_string());
    for dependency in &module.dependencies {
        close_over_dependencies(toc, dependency, resolved, chain)?;
    }
    chain.pop();

    resolved.insert(name.to_string());
    Ok(())
}

//! Key string pool collapsing — decide which entry names may be dropped.

use rp_core::{IdResourceMap, ResourceName, ResourceNamedType, ResourceTable, ResourceTableEntryView};
use std::collections::BTreeSet;
use tracing::debug;

/// Outcome of classifying one entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObfuscationResult {
    /// Collapsing is off or the name is explicitly exempt.
    KeepExemptionList,
    /// Overlays match this entry by name at runtime.
    KeepOverlayable,
    Obfuscated,
}

/// Classify an entry's name. Pure: the same inputs always give the same result.
pub fn obfuscate_resource_name(
    collapse_key_stringpool: bool,
    name_collapse_exemptions: &BTreeSet<ResourceName>,
    type_name: &ResourceNamedType,
    entry: &ResourceTableEntryView<'_>,
) -> ObfuscationResult {
    let resource_name = ResourceName::unqualified(type_name.clone(), entry.name);
    if !collapse_key_stringpool || name_collapse_exemptions.contains(&resource_name) {
        ObfuscationResult::KeepExemptionList
    } else if entry.overlayable_item.is_some() {
        ObfuscationResult::KeepOverlayable
    } else {
        ObfuscationResult::Obfuscated
    }
}

/// Classify every entry with a resolved id and record `id → name` for
/// those whose names get collapsed. Returns an empty map when disabled.
pub fn collapse_key_string_pool(
    table: &ResourceTable,
    collapse_key_stringpool: bool,
    name_collapse_exemptions: &BTreeSet<ResourceName>,
) -> IdResourceMap {
    let mut id_resource_map = IdResourceMap::new();
    if !collapse_key_stringpool {
        return id_resource_map;
    }

    let (mut kept_exempt, mut kept_overlayable) = (0usize, 0usize);
    for (ty, entry) in table.entries() {
        let Some(id) = entry.id else { continue };
        if entry.name.is_empty() {
            continue;
        }
        match obfuscate_resource_name(
            collapse_key_stringpool,
            name_collapse_exemptions,
            &ty.named_type,
            &entry.view(),
        ) {
            ObfuscationResult::Obfuscated => {
                id_resource_map.insert(id.id(), entry.name.clone());
            }
            ObfuscationResult::KeepExemptionList => kept_exempt += 1,
            ObfuscationResult::KeepOverlayable => kept_overlayable += 1,
        }
    }

    debug!(
        obfuscated = id_resource_map.len(),
        kept_exempt,
        kept_overlayable,
        "classified resource names"
    );
    id_resource_map
}

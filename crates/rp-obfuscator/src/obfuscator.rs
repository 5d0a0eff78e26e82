//! Obfuscation pass — runs name collapsing, then path shortening.

use crate::name_collapse::collapse_key_string_pool;
use crate::path_shortener::shorten_file_paths;
use rp_core::{IdResourceMap, OptimizeOptions, ResourceName, ResourceTable, Result, ShortenedPathMap};
use std::collections::BTreeSet;
use tracing::info;

/// Which of the two transforms are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObfuscatorState {
    Disabled,
    PathOnly,
    NameOnly,
    Both,
}

/// Mappings needed to undo one obfuscation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObfuscationMaps {
    pub id_resource_map: IdResourceMap,
    pub shortened_path_map: ShortenedPathMap,
}

impl ObfuscationMaps {
    pub fn is_empty(&self) -> bool {
        self.id_resource_map.is_empty() && self.shortened_path_map.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Obfuscator {
    shorten_resource_paths: bool,
    collapse_key_stringpool: bool,
    name_collapse_exemptions: BTreeSet<ResourceName>,
}

impl Obfuscator {
    pub fn new(options: &OptimizeOptions) -> Self {
        Self {
            shorten_resource_paths: options.shorten_resource_paths,
            collapse_key_stringpool: options.collapse_key_stringpool,
            name_collapse_exemptions: options.name_collapse_exemptions.clone(),
        }
    }

    /// Run the pass over `table`, rewriting file paths in place.
    ///
    /// Never fails today; callers treat an `Err` as fatal to the optimize step.
    pub fn consume(&self, table: &mut ResourceTable) -> Result<ObfuscationMaps> {
        let id_resource_map = collapse_key_string_pool(
            table,
            self.collapse_key_stringpool,
            &self.name_collapse_exemptions,
        );
        let shortened_path_map = if self.shorten_resource_paths {
            shorten_file_paths(table)
        } else {
            ShortenedPathMap::new()
        };

        info!(
            state = ?self.state(),
            names = id_resource_map.len(),
            paths = shortened_path_map.len(),
            "obfuscation finished"
        );
        Ok(ObfuscationMaps { id_resource_map, shortened_path_map })
    }

    /// Whether a de-obfuscation mapping needs to be written.
    pub fn is_enabled(&self) -> bool {
        self.shorten_resource_paths || self.collapse_key_stringpool
    }

    pub fn state(&self) -> ObfuscatorState {
        match (self.shorten_resource_paths, self.collapse_key_stringpool) {
            (false, false) => ObfuscatorState::Disabled,
            (true, false) => ObfuscatorState::PathOnly,
            (false, true) => ObfuscatorState::NameOnly,
            (true, true) => ObfuscatorState::Both,
        }
    }
}

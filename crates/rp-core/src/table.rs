//! In-memory resource table: packages → types → entries → values.

use crate::id::ResourceId;
use crate::name::{ResourceName, ResourceNamedType};
use crate::string_pool::{Context, StringPool};
use crate::value::{FileReference, ResourceConfigValue, ResourceFileType, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityLevel {
    #[default]
    Undefined,
    Private,
    Public,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Visibility {
    pub level: VisibilityLevel,
    pub staged_api: bool,
    pub comment: String,
}

/// Marks an entry that may be added by an overlay without a base definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowNew {
    pub comment: String,
}

/// Marks an entry that a runtime overlay package may replace by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayableItem {
    pub overlayable_name: String,
    pub actor: String,
    pub policies: u32,
    pub comment: String,
}

/// Id an entry was staged under before being finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedId {
    pub id: ResourceId,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceEntry {
    pub name: String,
    pub id: Option<ResourceId>,
    pub visibility: Visibility,
    pub allow_new: Option<AllowNew>,
    pub overlayable_item: Option<OverlayableItem>,
    pub staged_id: Option<StagedId>,
    pub values: Vec<ResourceConfigValue>,
}

impl ResourceEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn view(&self) -> ResourceTableEntryView<'_> {
        ResourceTableEntryView {
            name: &self.name,
            id: self.id.map(|id| id.entry_id()),
            visibility: &self.visibility,
            allow_new: self.allow_new.as_ref(),
            overlayable_item: self.overlayable_item.as_ref(),
            staged_id: self.staged_id.as_ref(),
        }
    }
}

/// Read-only projection of an entry, decoupled from its values.
#[derive(Debug, Clone, Copy)]
pub struct ResourceTableEntryView<'a> {
    pub name: &'a str,
    pub id: Option<u16>,
    pub visibility: &'a Visibility,
    pub allow_new: Option<&'a AllowNew>,
    pub overlayable_item: Option<&'a OverlayableItem>,
    pub staged_id: Option<&'a StagedId>,
}

#[derive(Debug, Clone)]
pub struct ResourceTableType {
    pub named_type: ResourceNamedType,
    pub id: Option<u8>,
    pub entries: Vec<ResourceEntry>,
}

impl ResourceTableType {
    pub fn new(named_type: ResourceNamedType) -> Self {
        Self { named_type, id: None, entries: Vec::new() }
    }

    pub fn find_entry(&self, name: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn find_or_create_entry(&mut self, name: &str) -> &mut ResourceEntry {
        match self.entries.iter().position(|e| e.name == name) {
            Some(idx) => &mut self.entries[idx],
            None => {
                self.entries.push(ResourceEntry::new(name));
                let last = self.entries.len() - 1;
                &mut self.entries[last]
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResourceTablePackage {
    pub name: String,
    pub id: Option<u8>,
    pub types: Vec<ResourceTableType>,
}

impl ResourceTablePackage {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), id: None, types: Vec::new() }
    }

    pub fn find_type(&self, named_type: &ResourceNamedType) -> Option<&ResourceTableType> {
        self.types.iter().find(|t| &t.named_type == named_type)
    }

    pub fn find_or_create_type(&mut self, named_type: &ResourceNamedType) -> &mut ResourceTableType {
        match self.types.iter().position(|t| &t.named_type == named_type) {
            Some(idx) => &mut self.types[idx],
            None => {
                self.types.push(ResourceTableType::new(named_type.clone()));
                let last = self.types.len() - 1;
                &mut self.types[last]
            }
        }
    }
}

/// The table of all resources being packaged, plus the pool its strings
/// are interned in.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    pub packages: Vec<ResourceTablePackage>,
    pub string_pool: StringPool,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_package(&self, name: &str) -> Option<&ResourceTablePackage> {
        self.packages.iter().find(|p| p.name == name)
    }

    pub fn find_or_create_package(&mut self, name: &str) -> &mut ResourceTablePackage {
        match self.packages.iter().position(|p| p.name == name) {
            Some(idx) => &mut self.packages[idx],
            None => {
                self.packages.push(ResourceTablePackage::new(name));
                let last = self.packages.len() - 1;
                &mut self.packages[last]
            }
        }
    }

    /// Add `value` for `config` to the entry named `name`, creating the
    /// package, type and entry as needed. An id, when given, overwrites the
    /// entry's id.
    pub fn add_resource(
        &mut self,
        name: &ResourceName,
        id: Option<ResourceId>,
        config: &str,
        value: Value,
    ) -> &mut ResourceEntry {
        let entry = self
            .find_or_create_package(&name.package)
            .find_or_create_type(&name.ty)
            .find_or_create_entry(&name.entry);
        if id.is_some() {
            entry.id = id;
        }
        entry.values.push(ResourceConfigValue::new(config, value));
        entry
    }

    /// Add a file-backed value, interning `path` for `config`.
    pub fn add_file_reference(
        &mut self,
        name: &ResourceName,
        id: Option<ResourceId>,
        config: &str,
        path: &str,
    ) -> &mut ResourceEntry {
        let path_ref = self.string_pool.make_ref(path, Context::for_config(config));
        let file = FileReference { path: path_ref, file_type: ResourceFileType::from_path(path) };
        self.add_resource(name, id, config, Value::File(file))
    }

    pub fn find_entry(&self, name: &ResourceName) -> Option<&ResourceEntry> {
        self.find_package(&name.package)?
            .find_type(&name.ty)?
            .find_entry(&name.entry)
    }

    pub fn find_entry_mut(&mut self, name: &ResourceName) -> Option<&mut ResourceEntry> {
        self.packages
            .iter_mut()
            .find(|p| p.name == name.package)?
            .types
            .iter_mut()
            .find(|t| t.named_type == name.ty)?
            .entries
            .iter_mut()
            .find(|e| e.name == name.entry)
    }

    /// Every entry with its owning type, in traversal order.
    pub fn entries(&self) -> impl Iterator<Item = (&ResourceTableType, &ResourceEntry)> {
        self.packages
            .iter()
            .flat_map(|p| p.types.iter())
            .flat_map(|t| t.entries.iter().map(move |e| (t, e)))
    }

    /// Paths of all file references, in traversal order.
    pub fn file_paths(&self) -> Vec<&str> {
        self.entries()
            .flat_map(|(_, e)| e.values.iter())
            .filter_map(|v| v.value.as_file())
            .map(|f| self.string_pool.get(f.path))
            .collect()
    }

    /// Total number of entries across all packages.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

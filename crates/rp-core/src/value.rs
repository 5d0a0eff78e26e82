use crate::name::ResourceName;
use crate::string_pool::StringRef;
use serde::{Deserialize, Serialize};

/// Format of the file a [`FileReference`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFileType {
    #[default]
    Unknown,
    Png,
    BinaryXml,
    ProtoXml,
}

impl ResourceFileType {
    /// Guess from a file path's extension.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(".png") {
            Self::Png
        } else if path.ends_with(".xml") {
            Self::BinaryXml
        } else {
            Self::Unknown
        }
    }
}

/// A value backed by a file inside the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    pub path: StringRef,
    pub file_type: ResourceFileType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    File(FileReference),
    String(StringRef),
    Reference(ResourceName),
    Primitive { data_type: u8, data: u32 },
}

impl Value {
    pub fn as_file(&self) -> Option<&FileReference> {
        match self {
            Self::File(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut FileReference> {
        match self {
            Self::File(f) => Some(f),
            _ => None,
        }
    }
}

/// A value for one configuration (`""`, `hdpi`, `night-v8`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceConfigValue {
    pub config: String,
    pub value: Value,
}

impl ResourceConfigValue {
    pub fn new(config: impl Into<String>, value: Value) -> Self {
        Self { config: config.into(), value }
    }
}

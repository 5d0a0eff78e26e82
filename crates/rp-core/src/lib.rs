pub mod config;
pub mod error;
pub mod id;
pub mod name;
pub mod string_pool;
pub mod table;
pub mod types;
pub mod value;

pub use config::{parse_resource_config, OptimizeOptions, ResourceConfig};
pub use error::{Result, RpError};
pub use id::ResourceId;
pub use name::{ResourceName, ResourceNamedType, ResourceType};
pub use string_pool::{Context, StringPool, StringRef};
pub use table::{
    AllowNew, OverlayableItem, ResourceEntry, ResourceTable, ResourceTableEntryView,
    ResourceTablePackage, ResourceTableType, StagedId, Visibility, VisibilityLevel,
};
pub use types::{IdResourceMap, ShortenedPathMap};
pub use value::{FileReference, ResourceConfigValue, ResourceFileType, Value};

//! Resource obfuscation pass.
//!
//! Two independent transforms over a [`rp_core::ResourceTable`]:
//! 1. Name collapsing — classify which entry names may leave the key pool
//! 2. Path shortening — move file-backed resources to short hashed paths
//!
//! Both record what they changed so the run can be reversed with a
//! [`DeobfuscationMap`].

pub mod hash;
pub mod mapping;
pub mod name_collapse;
pub mod obfuscator;
pub mod path_shortener;

pub use mapping::DeobfuscationMap;
pub use name_collapse::{collapse_key_string_pool, obfuscate_resource_name, ObfuscationResult};
pub use obfuscator::{ObfuscationMaps, Obfuscator, ObfuscatorState};
pub use path_shortener::{
    extract_res_file_path_parts, optimal_shortened_length, shorten_file_name, shorten_file_paths,
    shortened_path, ResFilePathParts, ShortenedPathAllocator,
};

//! File path shortening — file-backed resources move to `res/<alias><ext>`.
//!
//! Aliases are a few characters of a base64-style encoding of the path's
//! FNV-1a hash. Paths are processed in byte order of their content, so
//! which path keeps the bare alias and which gets a numeric suffix is the
//! same on every run.

use crate::hash::hash_path;
use rp_core::{FileReference, ResourceTable, ShortenedPathMap};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace};

/// Filename-safe 64-symbol alphabet.
const BASE64_CHARS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
const RES_PREFIX: &str = "res/";
/// The runtime recognises color state lists by their directory name.
const COLOR_STATE_LIST_PREFIX: &str = "res/color";
/// Above this many files a 2-symbol alias collides for more than ~10% of them.
const LONG_ALIAS_THRESHOLD: usize = 4000;

/// Pieces of a `res/<subdir>/<name><ext>` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResFilePathParts<'a> {
    /// Directory including its trailing `/`, e.g. `res/drawable-hdpi/`.
    pub prefix: &'a str,
    pub entry: &'a str,
    /// Everything from the first `.` of the file name, e.g. `.9.png`.
    pub extension: &'a str,
}

/// Split a resource file path. Paths outside `res/<subdir>/` yield empty parts.
pub fn extract_res_file_path_parts(path: &str) -> ResFilePathParts<'_> {
    let Some(rest) = path.strip_prefix(RES_PREFIX) else {
        return ResFilePathParts::default();
    };
    let Some(slash) = rest.rfind('/') else {
        return ResFilePathParts::default();
    };
    let name_start = RES_PREFIX.len() + slash + 1;
    let ext_start = path[name_start..]
        .find('.')
        .map(|i| name_start + i)
        .unwrap_or(path.len());
    ResFilePathParts {
        prefix: &path[..name_start],
        entry: &path[name_start..ext_start],
        extension: &path[ext_start..],
    }
}

/// Alias length for a table holding `num_resources` distinct files.
pub fn optimal_shortened_length(num_resources: usize) -> usize {
    if num_resources > LONG_ALIAS_THRESHOLD { 3 } else { 2 }
}

/// Encode the low `output_length` sextets of the path hash, least
/// significant first.
pub fn shorten_file_name(file_path: &str, output_length: usize) -> String {
    let mut hash = hash_path(file_path);
    let mut result = String::with_capacity(output_length);
    for _ in 0..output_length {
        result.push(BASE64_CHARS[(hash & 0x3f) as usize] as char);
        hash >>= 6;
    }
    result
}

/// `res/<alias>[<collision_count>]<extension>`; the count is omitted when zero.
pub fn shortened_path(alias: &str, extension: &str, collision_count: usize) -> String {
    let mut path = String::with_capacity(RES_PREFIX.len() + alias.len() + extension.len() + 2);
    path.push_str(RES_PREFIX);
    path.push_str(alias);
    if collision_count > 0 {
        path.push_str(&collision_count.to_string());
    }
    path.push_str(extension);
    path
}

/// Hands out unique shortened paths, suffixing on collision.
#[derive(Debug, Default)]
pub struct ShortenedPathAllocator {
    assigned: HashSet<String>,
    collisions: usize,
}

impl ShortenedPathAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, alias: &str, extension: &str) -> String {
        let mut collision_count = 0;
        let mut candidate = shortened_path(alias, extension, collision_count);
        while self.assigned.contains(&candidate) {
            collision_count += 1;
            candidate = shortened_path(alias, extension, collision_count);
        }
        if collision_count > 0 {
            self.collisions += 1;
        }
        self.assigned.insert(candidate.clone());
        candidate
    }

    /// Number of allocations that needed a suffix.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Rewrite every eligible file reference in `table` to a shortened path.
///
/// References sharing a path are treated as one file and all receive the
/// same new path, re-interned under each reference's own pool context.
pub fn shorten_file_paths(table: &mut ResourceTable) -> ShortenedPathMap {
    let ResourceTable { packages, string_pool } = table;

    // Keyed by path content, never by reference identity.
    let mut file_refs: BTreeMap<String, Vec<&mut FileReference>> = BTreeMap::new();
    for package in packages.iter_mut() {
        for ty in package.types.iter_mut() {
            for entry in ty.entries.iter_mut() {
                for config_value in entry.values.iter_mut() {
                    if let Some(file_ref) = config_value.value.as_file_mut() {
                        let path = string_pool.get(file_ref.path).to_string();
                        file_refs.entry(path).or_default().push(file_ref);
                    }
                }
            }
        }
    }

    let num_chars = optimal_shortened_length(file_refs.len());
    debug!(files = file_refs.len(), alias_len = num_chars, "shortening resource paths");

    let mut allocator = ShortenedPathAllocator::new();
    let mut shortened_path_map = ShortenedPathMap::new();
    let mut skipped = 0usize;

    for (path, refs) in file_refs {
        let parts = extract_res_file_path_parts(&path);
        if parts.prefix.starts_with(COLOR_STATE_LIST_PREFIX) {
            trace!(%path, "keeping color state list path");
            skipped += 1;
            continue;
        }

        let alias = shorten_file_name(&path, num_chars);
        let shortened = allocator.allocate(&alias, parts.extension);
        for file_ref in refs {
            let context = string_pool.context(file_ref.path).clone();
            file_ref.path = string_pool.make_ref(shortened.as_str(), context);
        }
        trace!(%path, %shortened, "shortened");
        shortened_path_map.insert(path, shortened);
    }

    debug!(
        shortened = shortened_path_map.len(),
        skipped,
        collisions = allocator.collisions(),
        "resource paths shortened"
    );
    shortened_path_map
}

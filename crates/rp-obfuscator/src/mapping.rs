//! De-obfuscation mapping — the side artifact that reverses a run.
//!
//! Written as JSON with sorted keys so identical runs produce identical
//! files. Resource ids are rendered as `0x%08x` strings.

use crate::obfuscator::ObfuscationMaps;
use regex::{Captures, Regex, RegexBuilder};
use rp_core::{ResourceId, Result, RpError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

static RE_RESOURCE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b0[xX][0-9a-fA-F]{8}\b").unwrap());

const REGEX_SIZE_LIMIT: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeobfuscationMap {
    /// Original path → shortened path.
    pub shortened_paths: BTreeMap<String, String>,
    /// Resource id → original entry name.
    pub resource_names: BTreeMap<ResourceId, String>,
}

/// On-disk form; id keys are parsed after reading so a bad key surfaces
/// as `RpError::InvalidResourceId`.
#[derive(Deserialize)]
struct RawDeobfuscationMap {
    #[serde(default)]
    shortened_paths: BTreeMap<String, String>,
    #[serde(default)]
    resource_names: BTreeMap<String, String>,
}

impl DeobfuscationMap {
    pub fn from_maps(maps: &ObfuscationMaps) -> Self {
        Self {
            shortened_paths: maps.shortened_path_map.clone(),
            resource_names: maps
                .id_resource_map
                .iter()
                .map(|(id, name)| (ResourceId(*id), name.clone()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shortened_paths.is_empty() && self.resource_names.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDeobfuscationMap = serde_json::from_str(json)?;
        let resource_names = raw
            .resource_names
            .into_iter()
            .map(|(id, name)| Ok((id.parse::<ResourceId>()?, name)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self { shortened_paths: raw.shortened_paths, resource_names })
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Original path for a shortened one.
    pub fn original_path(&self, shortened: &str) -> Option<&str> {
        self.shortened_paths
            .iter()
            .find(|(_, s)| s.as_str() == shortened)
            .map(|(original, _)| original.as_str())
    }

    pub fn original_name(&self, id: ResourceId) -> Option<&str> {
        self.resource_names.get(&id).map(String::as_str)
    }

    /// Rewrite shortened paths and collapsed resource ids found in `text`
    /// (a report or stack trace) back to their original spelling.
    pub fn retrace(&self, text: &str) -> Result<String> {
        if self.is_empty() {
            return Ok(text.to_string());
        }
        let with_names = RE_RESOURCE_ID.replace_all(text, |caps: &Captures<'_>| {
            caps[0]
                .parse::<ResourceId>()
                .ok()
                .and_then(|id| self.original_name(id))
                .map(str::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        });

        if self.shortened_paths.is_empty() {
            return Ok(with_names.into_owned());
        }

        let reverse: BTreeMap<&str, &str> = self
            .shortened_paths
            .iter()
            .map(|(original, shortened)| (shortened.as_str(), original.as_str()))
            .collect();
        // Longest first so `res/Ab1.png` wins over `res/Ab.png`.
        let mut keys: Vec<&str> = reverse.keys().copied().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let pattern = keys.iter().map(|k| regex::escape(k)).collect::<Vec<_>>().join("|");
        let re = RegexBuilder::new(&pattern)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            .map_err(|e| RpError::Other(e.into()))?;

        // Only whole path tokens: a match glued to further path characters
        // belongs to some other path and is left alone.
        let haystack: &str = &with_names;
        let restored = re.replace_all(haystack, |caps: &Captures<'_>| {
            let m = caps.get(0).unwrap();
            let before = haystack[..m.start()].chars().next_back();
            let after = haystack[m.end()..].chars().next();
            if before.is_some_and(is_path_char) || after.is_some_and(is_path_char) {
                return m.as_str().to_string();
            }
            reverse
                .get(m.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| m.as_str().to_string())
        });
        Ok(restored.into_owned())
    }
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/')
}

//! Options consumed by the obfuscation pass and the resources-config
//! file that feeds its exemption list.

use crate::error::{Result, RpError};
use crate::name::ResourceName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeOptions {
    /// Drop entry names from the key string pool.
    pub collapse_key_stringpool: bool,
    /// Rewrite file-backed resource paths to short aliases.
    pub shorten_resource_paths: bool,
    /// Names that keep their key string regardless of `collapse_key_stringpool`.
    pub name_collapse_exemptions: BTreeSet<ResourceName>,
}

impl OptimizeOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_resource_config(mut self, config: ResourceConfig) -> Self {
        self.name_collapse_exemptions.extend(config.name_collapse_exemptions);
        self
    }
}

/// Per-resource directives read from a resources-config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceConfig {
    pub name_collapse_exemptions: BTreeSet<ResourceName>,
    /// Resources marked `remove`; honored by other optimizer passes.
    pub excluded_resources: BTreeSet<ResourceName>,
}

/// Parse lines of the form `type/name#directive[,directive...]`.
///
/// `no_collapse` and `no_obfuscate` exempt the name from key pool
/// collapsing, `remove` marks it for exclusion.
pub fn parse_resource_config(content: &str) -> Result<ResourceConfig> {
    let mut config = ResourceConfig::default();
    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let invalid = |message: String| RpError::InvalidConfig { line: line_no, message };

        let (name, directives) = line
            .split_once('#')
            .ok_or_else(|| invalid(format!("no directive for line '{line}'")))?;
        let name: ResourceName = name
            .trim()
            .parse()
            .map_err(|_| invalid(format!("malformed resource name '{}'", name.trim())))?;
        if !name.package.is_empty() {
            return Err(invalid(format!("resource name '{name}' must not carry a package")));
        }

        for directive in directives.split(',').map(str::trim) {
            match directive {
                "no_collapse" | "no_obfuscate" => {
                    config.name_collapse_exemptions.insert(name.clone());
                }
                "remove" => {
                    config.excluded_resources.insert(name.clone());
                }
                other => return Err(invalid(format!("unknown directive '{other}'"))),
            }
        }
    }
    debug!(
        exemptions = config.name_collapse_exemptions.len(),
        excluded = config.excluded_resources.len(),
        "parsed resources config"
    );
    Ok(config)
}

use std::collections::BTreeMap;

/// Original file path → shortened file path.
pub type ShortenedPathMap = BTreeMap<String, String>;

/// Resolved resource id → original entry name, for collapsed names only.
pub type IdResourceMap = BTreeMap<u32, String>;

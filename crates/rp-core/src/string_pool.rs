//! Interning pool for the strings a resource table refers to.
//!
//! Strings are appended once and never mutated. Changing the string a
//! value points at means interning the new content and swapping the
//! [`StringRef`] handle.

use std::collections::HashMap;

/// Ordering hint and configuration a string was interned for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Context {
    pub priority: u32,
    pub config: String,
}

impl Context {
    pub fn new(priority: u32, config: impl Into<String>) -> Self {
        Self { priority, config: config.into() }
    }

    pub fn for_config(config: impl Into<String>) -> Self {
        Self::new(0, config)
    }
}

/// Handle to an entry of a [`StringPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringRef(usize);

impl StringRef {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct PoolEntry {
    value: String,
    context: Context,
}

#[derive(Debug, Clone, Default)]
pub struct StringPool {
    entries: Vec<PoolEntry>,
    lookup: HashMap<(String, Context), usize>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `value` under `context`, reusing an identical existing entry.
    pub fn make_ref(&mut self, value: impl Into<String>, context: Context) -> StringRef {
        let value = value.into();
        let key = (value, context);
        if let Some(&idx) = self.lookup.get(&key) {
            return StringRef(idx);
        }
        let idx = self.entries.len();
        self.entries.push(PoolEntry { value: key.0.clone(), context: key.1.clone() });
        self.lookup.insert(key, idx);
        StringRef(idx)
    }

    pub fn get(&self, r: StringRef) -> &str {
        &self.entries[r.0].value
    }

    pub fn context(&self, r: StringRef) -> &Context {
        &self.entries[r.0].context
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

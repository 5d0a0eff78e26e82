use crate::error::{Result, RpError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Resolved resource id, laid out as `0xPPTTEEEE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ResourceId(pub u32);

impl ResourceId {
    pub fn new(package_id: u8, type_id: u8, entry_id: u16) -> Self {
        Self(((package_id as u32) << 24) | ((type_id as u32) << 16) | entry_id as u32)
    }

    pub fn id(&self) -> u32 {
        self.0
    }

    pub fn package_id(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn type_id(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn entry_id(&self) -> u16 {
        self.0 as u16
    }

    /// Package and type must both be assigned.
    pub fn is_valid(&self) -> bool {
        self.package_id() != 0 && self.type_id() != 0
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl FromStr for ResourceId {
    type Err = RpError;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| RpError::InvalidResourceId(s.to_string()))?;
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| RpError::InvalidResourceId(s.to_string()))
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

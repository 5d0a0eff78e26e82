//! Resource types and names.
//!
//! A [`ResourceName`] identifies an entry by `(package, type, entry)`,
//! independent of the numeric id it is assigned later.

use crate::error::{Result, RpError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Known resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceType {
    Anim,
    Animator,
    Array,
    Attr,
    AttrPrivate,
    Bool,
    Color,
    ConfigVarying,
    Dimen,
    Drawable,
    Font,
    Fraction,
    Id,
    Integer,
    Interpolator,
    Layout,
    Macro,
    Menu,
    Mipmap,
    Navigation,
    Plurals,
    Raw,
    String,
    Style,
    Styleable,
    Transition,
    Xml,
}

impl ResourceType {
    pub const ALL: &'static [ResourceType] = &[
        Self::Anim, Self::Animator, Self::Array, Self::Attr, Self::AttrPrivate,
        Self::Bool, Self::Color, Self::ConfigVarying, Self::Dimen, Self::Drawable,
        Self::Font, Self::Fraction, Self::Id, Self::Integer, Self::Interpolator,
        Self::Layout, Self::Macro, Self::Menu, Self::Mipmap, Self::Navigation,
        Self::Plurals, Self::Raw, Self::String, Self::Style, Self::Styleable,
        Self::Transition, Self::Xml,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anim => "anim",
            Self::Animator => "animator",
            Self::Array => "array",
            Self::Attr => "attr",
            Self::AttrPrivate => "^attr-private",
            Self::Bool => "bool",
            Self::Color => "color",
            Self::ConfigVarying => "configVarying",
            Self::Dimen => "dimen",
            Self::Drawable => "drawable",
            Self::Font => "font",
            Self::Fraction => "fraction",
            Self::Id => "id",
            Self::Integer => "integer",
            Self::Interpolator => "interpolator",
            Self::Layout => "layout",
            Self::Macro => "macro",
            Self::Menu => "menu",
            Self::Mipmap => "mipmap",
            Self::Navigation => "navigation",
            Self::Plurals => "plurals",
            Self::Raw => "raw",
            Self::String => "string",
            Self::Style => "style",
            Self::Styleable => "styleable",
            Self::Transition => "transition",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = RpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RpError::InvalidResourceType(s.to_string()))
    }
}

/// A resource type plus the name it was declared with.
///
/// The name is usually identical to the type's string form, but custom
/// named types (`drawable.night`) keep their full spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceNamedType {
    pub name: String,
    pub ty: ResourceType,
}

impl ResourceNamedType {
    pub fn new(ty: ResourceType) -> Self {
        Self { name: ty.as_str().to_string(), ty }
    }
}

impl From<ResourceType> for ResourceNamedType {
    fn from(ty: ResourceType) -> Self {
        Self::new(ty)
    }
}

impl fmt::Display for ResourceNamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for ResourceNamedType {
    type Err = RpError;

    fn from_str(s: &str) -> Result<Self> {
        let base = s.split('.').next().unwrap_or(s);
        let ty = base.parse::<ResourceType>()?;
        Ok(Self { name: s.to_string(), ty })
    }
}

/// Logical identity of a resource entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceName {
    pub package: String,
    pub ty: ResourceNamedType,
    pub entry: String,
}

impl ResourceName {
    pub fn new(
        package: impl Into<String>,
        ty: impl Into<ResourceNamedType>,
        entry: impl Into<String>,
    ) -> Self {
        Self { package: package.into(), ty: ty.into(), entry: entry.into() }
    }

    /// Name without a package, as used for exemption lookups.
    pub fn unqualified(ty: impl Into<ResourceNamedType>, entry: impl Into<String>) -> Self {
        Self::new(String::new(), ty, entry)
    }

    pub fn is_valid(&self) -> bool {
        !self.entry.is_empty()
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}:", self.package)?;
        }
        write!(f, "{}/{}", self.ty, self.entry)
    }
}

impl FromStr for ResourceName {
    type Err = RpError;

    /// Parses `[package:]type/entry`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RpError::InvalidResourceName(s.to_string());
        // A ':' only separates the package when it precedes the type.
        let slash = s.find('/').ok_or_else(invalid)?;
        let (package, rest) = match s[..slash].split_once(':') {
            Some((pkg, _)) => (pkg, &s[pkg.len() + 1..]),
            None => ("", s),
        };
        let (ty, entry) = rest.split_once('/').ok_or_else(invalid)?;
        if ty.is_empty() || entry.is_empty() {
            return Err(invalid());
        }
        let ty = ty.parse::<ResourceNamedType>().map_err(|_| invalid())?;
        Ok(Self::new(package, ty, entry))
    }
}

impl Serialize for ResourceName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Output-side data model: one record type per exported row kind.
//!
//! Records are transient snapshots of runtime metadata. Each one is read once
//! from a [`crate::reflect::Reflector`], shaped, and written once. Nothing here
//! holds references back into the runtime; methods and properties point at
//! their owning class by name only.

use serde::{Deserialize, Serialize};

mod records;

pub use records::*;

/// Structural kind of a class-like symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
    Trait,
}

impl ClassKind {
    /// Resolve the kind from reflection flags.
    ///
    /// The interface flag is checked first, then the trait flag; anything else
    /// is a plain class.
    pub fn from_flags(is_interface: bool, is_trait: bool) -> Self {
        if is_interface {
            ClassKind::Interface
        } else if is_trait {
            ClassKind::Trait
        } else {
            ClassKind::Class
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Trait => "trait",
        }
    }
}

/// Access-control tier of a method or property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Resolve visibility from modifier flags.
    ///
    /// Protected is checked before private and the first match wins, so a
    /// member flagged with both reports `protected`. No flag means public.
    pub fn from_flags(is_protected: bool, is_private: bool) -> Self {
        if is_protected {
            Visibility::Protected
        } else if is_private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// Render a boolean the way downstream consumers read it: `"true"` or `"false"`.
pub fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

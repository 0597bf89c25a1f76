//! Reflection seam over a runtime's symbol tables.
//!
//! A statically built exporter cannot introspect a live runtime the way the
//! runtime can introspect itself. Instead the exporter is handed a
//! [`Reflector`]: something that answers the same questions a reflection API
//! would (which functions exist, which classes are declared, what does class
//! `X` look like). [`RuntimeSnapshot`] is the registry-backed implementation
//! used by the CLI; tests plug in their own implementations to simulate
//! failures.
//!
//! Descriptors mirror what reflection reports, flags included. Turning flags
//! into output values (kind, visibility, `"true"`/`"false"`) is the
//! enumerator's job, not the descriptor's.

use serde::{Deserialize, Serialize};

use crate::error::ExportResult;
use crate::model::RuntimeValue;

mod snapshot;

pub use snapshot::*;

/// Queries a runtime for its symbol metadata.
///
/// Each call re-reads current state. Any error is fatal to the export.
pub trait Reflector {
    /// Variables bound in the caller's scope.
    fn defined_variables(&self) -> ExportResult<Vec<VariableDescriptor>>;

    /// Names of natively implemented functions, in registration order.
    fn internal_functions(&self) -> ExportResult<Vec<String>>;

    /// Names of every declared class-like symbol (classes, interfaces, traits).
    fn declared_classes(&self) -> ExportResult<Vec<String>>;

    /// Full reflection data for one declared class-like symbol.
    fn reflect_class(&self, name: &str) -> ExportResult<ClassDescriptor>;

    /// Defined constants with their current values.
    fn defined_constants(&self) -> ExportResult<Vec<ConstantDescriptor>>;
}

impl<R: Reflector + ?Sized> Reflector for &R {
    fn defined_variables(&self) -> ExportResult<Vec<VariableDescriptor>> {
        (**self).defined_variables()
    }

    fn internal_functions(&self) -> ExportResult<Vec<String>> {
        (**self).internal_functions()
    }

    fn declared_classes(&self) -> ExportResult<Vec<String>> {
        (**self).declared_classes()
    }

    fn reflect_class(&self, name: &str) -> ExportResult<ClassDescriptor> {
        (**self).reflect_class(name)
    }

    fn defined_constants(&self) -> ExportResult<Vec<ConstantDescriptor>> {
        (**self).defined_constants()
    }
}

/// Reflection-style modifier flag on a method or property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    #[serde(default)]
    pub is_interface: bool,
    #[serde(default)]
    pub is_trait: bool,
    /// Direct parent class, if any.
    #[serde(default)]
    pub parent: Option<String>,
    /// Interfaces declared directly on this symbol.
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub doc_comment: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default)]
    pub doc_comment: Option<String>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn with_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    pub fn with_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = names.into_iter().map(|n| ParameterDescriptor { name: n.into() }).collect();
        self
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

/// Only the name is captured; defaults and types are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub doc_comment: Option<String>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn with_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDescriptor {
    pub name: String,
    #[serde(default)]
    pub value: RuntimeValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstantDescriptor {
    pub name: String,
    #[serde(default)]
    pub value: RuntimeValue,
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ClassDescriptor, ConstantDescriptor, Reflector, VariableDescriptor};
use crate::error::{ExportError, ExportResult};
use crate::model::RuntimeValue;

/// Pre-collected registry of runtime symbols.
///
/// Order within each list is the runtime's native enumeration order and is
/// preserved through export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeSnapshot {
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
    #[serde(default)]
    pub variables: Vec<VariableDescriptor>,
    #[serde(default)]
    pub constants: Vec<ConstantDescriptor>,
}

/// Symbol counts for a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCounts {
    pub functions: usize,
    pub classes: usize,
    pub interfaces: usize,
    pub traits: usize,
    pub methods: usize,
    pub properties: usize,
    pub variables: usize,
    pub constants: usize,
}

impl RuntimeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a snapshot from JSON text.
    pub fn from_json_str(body: &str) -> ExportResult<Self> {
        let snapshot: Self =
            serde_json::from_str(body).map_err(|e| ExportError::Snapshot(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reject snapshots that declare the same class name twice; classes are
    /// reflected by name.
    pub fn validate(&self) -> ExportResult<()> {
        let mut seen = HashSet::new();
        for class in &self.classes {
            if !seen.insert(class.name.as_str()) {
                return Err(ExportError::Snapshot(format!(
                    "class '{}' is declared more than once",
                    class.name
                )));
            }
        }
        Ok(())
    }

    pub fn with_function(mut self, name: impl Into<String>) -> Self {
        self.functions.push(name.into());
        self
    }

    pub fn with_class(mut self, class: ClassDescriptor) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: RuntimeValue) -> Self {
        self.variables.push(VariableDescriptor { name: name.into(), value });
        self
    }

    pub fn with_constant(mut self, name: impl Into<String>, value: RuntimeValue) -> Self {
        self.constants.push(ConstantDescriptor { name: name.into(), value });
        self
    }

    pub fn counts(&self) -> SnapshotCounts {
        let mut counts = SnapshotCounts {
            functions: self.functions.len(),
            variables: self.variables.len(),
            constants: self.constants.len(),
            ..Default::default()
        };
        for class in &self.classes {
            if class.is_interface {
                counts.interfaces += 1;
            } else if class.is_trait {
                counts.traits += 1;
            } else {
                counts.classes += 1;
            }
            counts.methods += class.methods.len();
            counts.properties += class.properties.len();
        }
        counts
    }
}

impl Reflector for RuntimeSnapshot {
    fn defined_variables(&self) -> ExportResult<Vec<VariableDescriptor>> {
        Ok(self.variables.clone())
    }

    fn internal_functions(&self) -> ExportResult<Vec<String>> {
        Ok(self.functions.clone())
    }

    fn declared_classes(&self) -> ExportResult<Vec<String>> {
        Ok(self.classes.iter().map(|c| c.name.clone()).collect())
    }

    fn reflect_class(&self, name: &str) -> ExportResult<ClassDescriptor> {
        self.classes
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or_else(|| ExportError::SymbolVanished(name.to_string()))
    }

    fn defined_constants(&self) -> ExportResult<Vec<ConstantDescriptor>> {
        Ok(self.constants.clone())
    }
}

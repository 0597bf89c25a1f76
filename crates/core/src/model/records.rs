use serde::{Deserialize, Serialize};

use super::{bool_str, ClassKind, Visibility};
use crate::error::ExportResult;

/// Discriminator strings, one per row kind.
pub const FUNCTION_TAG: &str = "function";
pub const CLASS_TAG: &str = "class";
pub const INTERFACE_TAG: &str = "interface";
pub const METHOD_TAG: &str = "method";
pub const MEMBER_TAG: &str = "member";
pub const VARIABLE_TAG: &str = "variable";
pub const CONSTANT_TAG: &str = "constant";

/// A value bound to a variable or constant in the runtime.
///
/// Keyed arrays decode into `Map`, which keeps the snapshot's key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuntimeValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Array(Vec<RuntimeValue>),
    Map(serde_json::Map<String, serde_json::Value>),
}

impl RuntimeValue {
    /// Flatten the value into the text written to a CSV field.
    ///
    /// Null becomes empty, booleans become `true`/`false`, and arrays are
    /// written as compact JSON so the field stays parseable.
    pub fn to_field(&self) -> ExportResult<String> {
        let text = match self {
            RuntimeValue::Null => String::new(),
            RuntimeValue::Bool(b) => bool_str(*b).to_string(),
            RuntimeValue::Int(i) => i.to_string(),
            RuntimeValue::UInt(u) => u.to_string(),
            RuntimeValue::Float(f) => float_text(*f),
            RuntimeValue::String(s) => s.clone(),
            RuntimeValue::Array(_) | RuntimeValue::Map(_) => serde_json::to_string(self)?,
        };
        Ok(text)
    }
}

/// Exponent form outside `[1e-4, 1e15)` so extreme magnitudes stay short.
fn float_text(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && magnitude != 0.0 && !(1e-4..1e15).contains(&magnitude) {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
}

/// Class-like symbol with its single inheritance pointer and direct interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub kind: ClassKind,
    /// Direct parent class name; empty when there is none.
    pub parent_name: String,
    /// Interfaces declared directly on this symbol, in reported order.
    pub interface_names: Vec<String>,
    pub is_final: bool,
    pub is_abstract: bool,
    /// Raw documentation comment; empty when absent.
    pub doc_comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    pub class_name: String,
    pub is_static: bool,
    pub visibility: Visibility,
    pub parameter_names: Vec<String>,
    /// Always written blank, whatever the runtime reports.
    pub doc_comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    pub class_name: String,
    pub is_static: bool,
    pub visibility: Visibility,
    /// Always written blank, whatever the runtime reports.
    pub doc_comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: String,
    /// Captured but never written.
    pub value: RuntimeValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantRecord {
    pub name: String,
    pub value: RuntimeValue,
}

/// One exported row, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Function(FunctionRecord),
    Class(ClassRecord),
    Method(MethodRecord),
    #[serde(rename = "member")]
    Property(PropertyRecord),
    Variable(VariableRecord),
    Constant(ConstantRecord),
}

impl Record {
    /// The first column of this record's row.
    pub fn discriminator(&self) -> &'static str {
        match self {
            Record::Function(_) => FUNCTION_TAG,
            Record::Class(_) => CLASS_TAG,
            Record::Method(_) => METHOD_TAG,
            Record::Property(_) => MEMBER_TAG,
            Record::Variable(_) => VARIABLE_TAG,
            Record::Constant(_) => CONSTANT_TAG,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Function(r) => &r.name,
            Record::Class(r) => &r.name,
            Record::Method(r) => &r.name,
            Record::Property(r) => &r.name,
            Record::Variable(r) => &r.name,
            Record::Constant(r) => &r.name,
        }
    }

    /// Ordered field tuple for the row, discriminator first.
    pub fn fields(&self) -> ExportResult<Vec<String>> {
        let tag = self.discriminator().to_string();
        let fields = match self {
            Record::Function(r) => vec![tag, r.name.clone()],
            Record::Class(r) => vec![
                tag,
                r.name.clone(),
                r.kind.as_str().to_string(),
                r.parent_name.clone(),
                r.interface_names.join(","),
                bool_str(r.is_final).to_string(),
                bool_str(r.is_abstract).to_string(),
                r.doc_comment.clone(),
            ],
            Record::Method(r) => vec![
                tag,
                r.name.clone(),
                r.class_name.clone(),
                bool_str(r.is_static).to_string(),
                r.visibility.as_str().to_string(),
                r.parameter_names.join(","),
                r.doc_comment.clone(),
            ],
            Record::Property(r) => vec![
                tag,
                r.name.clone(),
                r.class_name.clone(),
                bool_str(r.is_static).to_string(),
                r.visibility.as_str().to_string(),
                r.doc_comment.clone(),
            ],
            Record::Variable(r) => vec![tag, r.name.clone(), String::new()],
            Record::Constant(r) => vec![tag, r.name.clone(), r.value.to_field()?],
        };
        Ok(fields)
    }
}

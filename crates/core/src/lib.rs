//! internals-core
//!
//! Core library for exporting the symbol metadata of a language runtime
//! (internal functions, classes/interfaces/traits with their methods and
//! properties, variables, constants) as flat CSV rows.
//!
//! Reflection is abstracted behind [`reflect::Reflector`]; a pre-collected
//! [`reflect::RuntimeSnapshot`] is the implementation frontends load from disk.
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends.

pub mod error;
pub mod model;
pub mod reflect;
pub mod services;

pub use error::{ExportError, ExportResult};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

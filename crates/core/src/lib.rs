//! Input constraints for the Infomaniak MCP tools.
//!
//! [`SchemaRegistry`] maps an operation name to its [`OperationSpec`];
//! [`validate`] turns an untyped argument bag into [`ValidatedArgs`] or the
//! first [`ValidationError`] found in field-declaration order.

pub mod catalog;
pub mod registry;
pub mod schema;
pub mod validate;

pub use registry::SchemaRegistry;
pub use schema::{FieldKind, FieldRule, OperationSpec};
pub use validate::{validate, ValidatedArgs, ValidationError};

// File: src/error.rs
// Purpose: Errors raised while registering descriptors or driving form state

use crate::layout::Breakpoint;
use thiserror::Error;

/// Descriptor shape and form-state errors
///
/// Field validation failures are not errors; they live in the form state's
/// error map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("duplicate field name `{0}`")]
    DuplicateName(String),

    #[error("duplicate field id `{0}`")]
    DuplicateId(String),

    #[error("column span {span} at breakpoint `{breakpoint}` is outside 1..=12")]
    InvalidColumnSpan { breakpoint: Breakpoint, span: u8 },

    #[error("field `{0}` cannot be shown conditionally on itself")]
    SelfReferencingShowIf(String),

    #[error("field `{field}` depends on `{target}`, but no field is named `{target}`")]
    UnknownShowIfField { field: String, target: String },

    #[error("field `{field}` has an invalid attribute name `{name}`")]
    InvalidAttributeName { field: String, name: String },

    #[error("no field named `{0}` in this form")]
    UnknownField(String),
}

// rusty-forms - declarative form renderer
// Field descriptors in; initial state, validation schema and HTML out

//! Build a form from an ordered list of [`FieldDescriptor`]s.
//!
//! Mounting a form derives its initial values (one per named descriptor) and
//! its validation schema (named, validated descriptors not marked
//! `is_visible = false`). Each render resolves `show_if` gates against the
//! current values and shows an error only once its field has been touched.
//!
//! ```
//! use rusty_forms::{FieldDescriptor, Form, Validator};
//!
//! let mut form = Form::builder()
//!     .field(FieldDescriptor::email("email").validator(Validator::new().required()))
//!     .field(FieldDescriptor::text("plan").value("free"))
//!     .field(FieldDescriptor::text("promo_code").show_if("plan", "paid"))
//!     .mount()
//!     .unwrap();
//!
//! assert!(form.render().field("promo_code").is_none());
//! form.handle_change("plan", "paid").unwrap();
//! assert!(form.render().field("promo_code").is_some());
//! ```

pub mod attrs;
pub mod config;
pub mod definition;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod form;
pub mod id;
pub mod layout;
pub mod registry;
pub mod render;

pub use config::FormConfig;
pub use definition::FormDefinition;
pub use descriptor::{FieldDescriptor, FieldKind, FieldProps, SelectOption, ShowIf};
pub use engine::{EngineOptions, FormEngine, FormState, SubmitOutcome, Touched};
pub use error::FormError;
pub use form::{Form, FormBuilder, SubmitHandler};
pub use id::{IdSource, SequentialIds, UuidIds};
pub use layout::{Breakpoint, Cols};
pub use registry::{initial_values, validation_schema, RegisteredField, Registry};
pub use render::{FormChrome, GridCell, RenderedField, RenderedForm, SubmitControl};

// Re-export the validation crate and its core types
pub use rusty_forms_validation as validation;
pub use rusty_forms_validation::{Errors, FieldValue, PasswordStrength, Rule, Schema, Validator, Values};

// Re-export Maud for callers embedding forms in their own templates
pub use maud::{Markup, Render};

//! Rusty-Forms Validation
//!
//! Validation rules for form fields. A [`Validator`] is the ordered list of
//! [`Rule`]s for one field, a [`Schema`] maps field names to validators and
//! turns a set of [`Values`] into an [`Errors`] map.
//!
//! The plain validation functions (string, email, password, numeric,
//! collection) are usable on their own.

pub mod collection;
pub mod email;
pub mod numeric;
pub mod password;
pub mod rule;
pub mod schema;
pub mod string;
pub mod validator;
pub mod value;

pub use password::PasswordStrength;
pub use rule::{CustomRule, Pattern, Rule, RuleKind};
pub use schema::{Errors, Schema};
pub use validator::Validator;
pub use value::{FieldValue, Values};

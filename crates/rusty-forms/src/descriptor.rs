// File: src/descriptor.rs
// Purpose: Declarative field descriptors, the input of a form

use crate::layout::Cols;
use rusty_forms_validation::{FieldValue, Validator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared input type of a field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Date,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Hidden,
}

impl FieldKind {
    /// Checkboxes and radios: no full-width layout and no error helper text
    pub fn is_toggle(self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }

    /// Value of the `type` attribute for kinds rendered as `<input>`
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Password => Some("password"),
            FieldKind::Number => Some("number"),
            FieldKind::Tel => Some("tel"),
            FieldKind::Url => Some("url"),
            FieldKind::Date => Some("date"),
            FieldKind::Checkbox => Some("checkbox"),
            FieldKind::Radio => Some("radio"),
            FieldKind::Hidden => Some("hidden"),
            FieldKind::Textarea | FieldKind::Select => None,
        }
    }
}

/// Visibility gate: render only while `field` currently equals `equals`
///
/// Written as a pair in definition files: `show_if = ["plan", "paid"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, FieldValue)", into = "(String, FieldValue)")]
pub struct ShowIf {
    pub field: String,
    pub equals: FieldValue,
}

impl ShowIf {
    pub fn new(field: impl Into<String>, equals: impl Into<FieldValue>) -> Self {
        Self {
            field: field.into(),
            equals: equals.into(),
        }
    }

    /// Whether the gate is open for the given current value of `field`
    ///
    /// A field that does not exist has no value and never opens the gate.
    pub fn is_open(&self, current: Option<&FieldValue>) -> bool {
        current == Some(&self.equals)
    }
}

impl From<(String, FieldValue)> for ShowIf {
    fn from((field, equals): (String, FieldValue)) -> Self {
        Self { field, equals }
    }
}

impl From<ShowIf> for (String, FieldValue) {
    fn from(gate: ShowIf) -> Self {
        (gate.field, gate.equals)
    }
}

/// One choice of a select or radio field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
        }
    }

    /// Text shown to the user; falls back to the value
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Presentation properties passed through to the rendered element
///
/// `full_width`, `helper_text` and `error` override what the form computes;
/// `attrs` override computed attributes of the same name on the element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_width: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
}

/// Declarative description of one form input
///
/// ```
/// use rusty_forms::{FieldDescriptor, Validator};
///
/// let email = FieldDescriptor::email("email")
///     .label("Email")
///     .validator(Validator::new().required().email());
/// assert_eq!(email.field_name(), Some("email"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Initial value; an empty string when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,

    /// Grid spans; full width at every breakpoint when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<Cols>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<ShowIf>,

    /// `Some(false)` keeps the field out of validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: FieldKind,

    #[serde(flatten)]
    pub props: FieldProps,
}

impl FieldDescriptor {
    /// Every key a descriptor table may carry, props included
    pub const KEYS: &'static [&'static str] = &[
        "name",
        "value",
        "validator",
        "cols",
        "show_if",
        "is_visible",
        "id",
        "type",
        "label",
        "placeholder",
        "helper_text",
        "full_width",
        "error",
        "disabled",
        "required",
        "options",
        "attrs",
    ];

    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Named field of the given kind
    pub fn named(kind: FieldKind, name: impl Into<String>) -> Self {
        Self::new(kind).name(name)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::named(FieldKind::Text, name)
    }

    pub fn email(name: impl Into<String>) -> Self {
        Self::named(FieldKind::Email, name)
    }

    pub fn password(name: impl Into<String>) -> Self {
        Self::named(FieldKind::Password, name)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::named(FieldKind::Number, name)
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self::named(FieldKind::Textarea, name)
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::named(FieldKind::Checkbox, name).value(false)
    }

    pub fn select<I>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = SelectOption>,
    {
        Self::named(FieldKind::Select, name).options(options)
    }

    pub fn radio<I>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = SelectOption>,
    {
        Self::named(FieldKind::Radio, name).options(options)
    }

    pub fn hidden(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::named(FieldKind::Hidden, name).value(value)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn cols(mut self, cols: Cols) -> Self {
        self.cols = Some(cols);
        self
    }

    pub fn show_if(mut self, field: impl Into<String>, equals: impl Into<FieldValue>) -> Self {
        self.show_if = Some(ShowIf::new(field, equals));
        self
    }

    pub fn visible(mut self, is_visible: bool) -> Self {
        self.is_visible = Some(is_visible);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.props.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.props.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.props.helper_text = Some(text.into());
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.props.full_width = Some(full_width);
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.props.error = Some(error);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.props.required = required;
        self
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.props.options.push(SelectOption::new(value, label));
        self
    }

    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = SelectOption>,
    {
        self.props.options.extend(options);
        self
    }

    /// Extra HTML attribute; replaces a computed attribute of the same name
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.attrs.insert(name.into(), value.into());
        self
    }

    /// Field name, treating an empty name as no name
    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Initial value; unchecked for checkboxes, otherwise the empty string
    pub fn initial_value(&self) -> FieldValue {
        match (&self.value, self.kind) {
            (Some(value), _) => value.clone(),
            (None, FieldKind::Checkbox) => FieldValue::Bool(false),
            (None, _) => FieldValue::default(),
        }
    }

    /// Grid spans, defaulting to full width
    pub fn layout(&self) -> Cols {
        self.cols.unwrap_or_default()
    }

    /// Whether the validator of this field is registered with the schema
    pub fn participates_in_validation(&self) -> bool {
        self.is_visible != Some(false) && self.field_name().is_some() && self.validator.is_some()
    }
}

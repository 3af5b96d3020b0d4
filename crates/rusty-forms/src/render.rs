// File: src/render.rs
// Purpose: Per-render field resolution and HTML output

use crate::attrs::Attrs;
use crate::descriptor::{FieldKind, SelectOption};
use crate::engine::FormState;
use crate::layout::Cols;
use crate::registry::{RegisteredField, Registry};
use maud::{html, Markup, PreEscaped, Render};
use rusty_forms_validation::FieldValue;
use std::collections::BTreeMap;

/// Form-level presentation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormChrome {
    /// Form identifier, rendered as the form's accessible label
    pub name: String,
    pub submit_button_text: String,
    /// Grid gap step
    pub spacing: u8,
}

impl Default for FormChrome {
    fn default() -> Self {
        Self {
            name: "form".to_string(),
            submit_button_text: "Submit".to_string(),
            spacing: 2,
        }
    }
}

/// A rendered form: one cell per visible field, then the submit control
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedForm {
    pub aria_label: String,
    pub spacing: u8,
    pub cells: Vec<GridCell>,
    pub submit: SubmitControl,
}

impl RenderedForm {
    /// A visible field by name
    pub fn field(&self, name: &str) -> Option<&RenderedField> {
        self.cells
            .iter()
            .map(|cell| &cell.field)
            .find(|field| field.name.as_deref() == Some(name))
    }

    /// Ids of the visible fields, in order
    pub fn field_ids(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.field.id.as_str()).collect()
    }

    pub fn into_html(self) -> String {
        self.render().into_string()
    }
}

/// Layout cell wrapping one field
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub cols: Cols,
    pub field: RenderedField,
}

/// Full-width submit button closing the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub text: String,
    pub cols: Cols,
}

/// A field with its computed props applied and descriptor props layered on top
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedField {
    pub id: String,
    pub name: Option<String>,
    pub kind: FieldKind,
    /// Current value; `None` for unnamed fields
    pub value: Option<FieldValue>,
    pub error: bool,
    pub full_width: bool,
    pub helper_text: Option<String>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub required: bool,
    pub options: Vec<SelectOption>,
    pub attrs: BTreeMap<String, String>,
}

/// Build the render tree for the current state
pub fn render_form(chrome: &FormChrome, registry: &Registry, state: &FormState) -> RenderedForm {
    let cells: Vec<GridCell> = registry
        .fields()
        .iter()
        .filter_map(|field| {
            resolve_field(field, state).map(|rendered| GridCell {
                cols: field.descriptor.layout(),
                field: rendered,
            })
        })
        .collect();

    tracing::trace!(
        form = %chrome.name,
        visible = cells.len(),
        hidden = registry.len() - cells.len(),
        "rendered form"
    );

    RenderedForm {
        aria_label: chrome.name.clone(),
        spacing: chrome.spacing,
        cells,
        submit: SubmitControl {
            text: chrome.submit_button_text.clone(),
            cols: Cols::full(),
        },
    }
}

/// Resolve one field; `None` when its `show_if` gate is closed
pub fn resolve_field(field: &RegisteredField, state: &FormState) -> Option<RenderedField> {
    let descriptor = &field.descriptor;

    if let Some(gate) = &descriptor.show_if {
        if !gate.is_open(state.value(&gate.field)) {
            return None;
        }
    }

    let name = descriptor.field_name();
    let visible_error = name.and_then(|n| state.visible_error(n));
    let toggle = descriptor.kind.is_toggle();
    let props = &descriptor.props;

    let computed_helper = if toggle { None } else { visible_error.map(str::to_string) };

    Some(RenderedField {
        id: field.id.clone(),
        name: name.map(str::to_string),
        kind: descriptor.kind,
        value: name.and_then(|n| state.value(n)).cloned(),
        error: props.error.unwrap_or(visible_error.is_some()),
        full_width: props.full_width.unwrap_or(!toggle),
        helper_text: props.helper_text.clone().or(computed_helper),
        label: props.label.clone(),
        placeholder: props.placeholder.clone(),
        disabled: props.disabled,
        required: props.required,
        options: props.options.clone(),
        attrs: props.attrs.clone(),
    })
}

impl RenderedField {
    fn helper_id(&self) -> String {
        format!("{}-helper-text", self.id)
    }

    fn wrapper_class(&self, base: &str) -> String {
        let mut classes = vec![base];
        if self.full_width {
            classes.push("full-width");
        }
        if self.error {
            classes.push("error");
        }
        if self.disabled {
            classes.push("disabled");
        }
        classes.join(" ")
    }

    fn text_value(&self) -> String {
        self.value.as_ref().map(FieldValue::to_attr_value).unwrap_or_default()
    }

    /// `id` and `name`, shared by every control
    fn base_attrs(&self, id: &str) -> Attrs {
        let mut attrs = Attrs::new();
        attrs.set("id", id);
        attrs.set_opt("name", self.name.as_deref());
        attrs
    }

    fn control_attrs(&self) -> Attrs {
        let mut attrs = self.base_attrs(&self.id);
        if let Some(input_type) = self.kind.input_type() {
            attrs.set("type", input_type);
            if let Some(value) = &self.value {
                attrs.set("value", value.to_attr_value());
            }
        }
        attrs.set_opt("placeholder", self.placeholder.as_deref());
        if self.error {
            attrs.set("aria-invalid", "true");
        }
        if self.helper_text.is_some() {
            attrs.set("aria-describedby", self.helper_id());
        }
        attrs.flag("required", self.required).flag("disabled", self.disabled);
        attrs.override_with(&self.attrs);
        attrs
    }

    fn helper(&self) -> Markup {
        html! {
            @if let Some(text) = &self.helper_text {
                p class="helper-text" id=(self.helper_id()) { (text) }
            }
        }
    }

    fn text_field(&self) -> Markup {
        let attrs = self.control_attrs();
        let control = match self.kind {
            FieldKind::Textarea => html! {
                (attrs.open_tag("textarea")) (self.text_value()) (PreEscaped("</textarea>"))
            },
            FieldKind::Select => {
                let current = self.value.as_ref().and_then(FieldValue::as_text);
                html! {
                    (attrs.open_tag("select"))
                    @for opt in &self.options {
                        option value=(opt.value) selected[current == Some(opt.value.as_str())] {
                            (opt.display_label())
                        }
                    }
                    (PreEscaped("</select>"))
                }
            }
            _ => attrs.open_tag("input"),
        };

        html! {
            div class=(self.wrapper_class("text-field")) {
                @if let Some(text) = &self.label {
                    label for=(self.id) {
                        (text)
                        @if self.required { " *" }
                    }
                }
                (control)
                (self.helper())
            }
        }
    }

    fn checkbox(&self) -> Markup {
        let mut attrs = self.base_attrs(&self.id);
        attrs.set("type", "checkbox").set("value", "true");
        attrs.flag("checked", self.value == Some(FieldValue::Bool(true)));
        if self.error {
            attrs.set("aria-invalid", "true");
        }
        attrs.flag("required", self.required).flag("disabled", self.disabled);
        attrs.override_with(&self.attrs);

        html! {
            div class=(self.wrapper_class("checkbox")) {
                label for=(self.id) {
                    (attrs.open_tag("input"))
                    @if let Some(text) = &self.label { " " (text) }
                }
                (self.helper())
            }
        }
    }

    fn radio_attrs(&self, option_id: &str, opt: &SelectOption, current: Option<&str>) -> Attrs {
        let mut attrs = self.base_attrs(option_id);
        attrs.set("type", "radio").set("value", opt.value.as_str());
        attrs.flag("checked", current == Some(opt.value.as_str()));
        attrs.flag("disabled", self.disabled);
        attrs.override_with(&self.attrs);
        attrs
    }

    fn radio_group(&self) -> Markup {
        let current = self.value.as_ref().and_then(FieldValue::as_text);

        html! {
            fieldset class=(self.wrapper_class("radio-group")) id=(self.id) {
                @if let Some(text) = &self.label {
                    legend { (text) }
                }
                @for (index, opt) in self.options.iter().enumerate() {
                    @let option_id = format!("{}-{}", self.id, index);
                    label for=(option_id) {
                        (self.radio_attrs(&option_id, opt, current).open_tag("input"))
                        " " (opt.display_label())
                    }
                }
                (self.helper())
            }
        }
    }
}

impl Render for RenderedField {
    fn render(&self) -> Markup {
        match self.kind {
            FieldKind::Checkbox => self.checkbox(),
            FieldKind::Radio => self.radio_group(),
            FieldKind::Hidden => self.control_attrs().open_tag("input"),
            _ => self.text_field(),
        }
    }
}

impl Render for RenderedForm {
    fn render(&self) -> Markup {
        html! {
            form aria-label=(self.aria_label) method="post" novalidate {
                div class=(format!("grid grid-container grid-spacing-{}", self.spacing)) {
                    @for cell in &self.cells {
                        div class=(cell.cols.class_list()) data-field=[cell.field.name.as_deref()] {
                            (cell.field)
                        }
                    }
                    div class=(self.submit.cols.class_list()) {
                        button type="submit" class="button button-contained button-large full-width" {
                            (self.submit.text)
                        }
                    }
                }
            }
        }
    }
}

// File: src/form.rs
// Purpose: Mounted form: descriptors, state engine and submit callback together

use crate::config::FormConfig;
use crate::descriptor::FieldDescriptor;
use crate::engine::{FormEngine, FormState, SubmitOutcome};
use crate::error::FormError;
use crate::id::{IdSource, UuidIds};
use crate::registry::{RegisteredField, Registry, RegistryOptions};
use crate::render::{render_form, FormChrome, RenderedForm};
use rusty_forms_validation::{FieldValue, Values};
use std::fmt;

/// Callback receiving the final values of a successful submit
pub type SubmitHandler = Box<dyn FnMut(&Values) + Send>;

/// Builder for a [`Form`]
///
/// ```
/// use rusty_forms::{FieldDescriptor, Form, Validator};
///
/// let mut form = Form::builder()
///     .name("signup")
///     .submit_button_text("Create account")
///     .field(FieldDescriptor::email("email").validator(Validator::new().required().email()))
///     .field(FieldDescriptor::text("plan").value("free"))
///     .on_submit(|values| println!("{values:?}"))
///     .mount()
///     .unwrap();
///
/// form.handle_change("email", "ada@example.com").unwrap();
/// assert!(form.submit().is_submitted());
/// ```
pub struct FormBuilder {
    config: FormConfig,
    name: Option<String>,
    submit_button_text: Option<String>,
    fields: Vec<FieldDescriptor>,
    on_submit: Option<SubmitHandler>,
    ids: Option<Box<dyn IdSource>>,
}

impl FormBuilder {
    fn new() -> Self {
        Self {
            config: FormConfig::default(),
            name: None,
            submit_button_text: None,
            fields: Vec::new(),
            on_submit: None,
            ids: None,
        }
    }

    /// Use a loaded configuration for defaults and behavior
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Form identifier, rendered as the form's accessible label
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn submit_button_text(mut self, text: impl Into<String>) -> Self {
        self.submit_button_text = Some(text.into());
        self
    }

    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    pub fn fields<I>(mut self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = FieldDescriptor>,
    {
        self.fields.extend(descriptors);
        self
    }

    pub fn on_submit<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&Values) + Send + 'static,
    {
        self.on_submit = Some(Box::new(handler));
        self
    }

    /// Replace the id generator used for descriptors without an `id`
    pub fn id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    /// Check the descriptors and create the form state
    pub fn mount(self) -> Result<Form, FormError> {
        let config = self.config;
        let mut ids = self
            .ids
            .unwrap_or_else(|| Box::new(UuidIds::new(config.layout.id_prefix.clone())));
        let registry_options = config.behavior.registry_options();

        let registry = Registry::register(self.fields, ids.as_mut(), None, registry_options)?;
        let initial_values = registry.initial_values();
        let schema = registry.schema();

        let chrome = FormChrome {
            name: self.name.unwrap_or(config.form.name),
            submit_button_text: self
                .submit_button_text
                .unwrap_or(config.form.submit_button_text),
            spacing: config.layout.spacing,
        };

        tracing::debug!(
            form = %chrome.name,
            fields = registry.len(),
            values = initial_values.len(),
            validated = schema.len(),
            "mounted form"
        );

        Ok(Form {
            chrome,
            registry_options,
            engine: FormEngine::new(initial_values, schema, config.behavior.engine_options()),
            registry,
            ids,
            on_submit: self.on_submit.unwrap_or_else(|| Box::new(|_: &Values| {})),
        })
    }
}

/// A mounted form instance
///
/// Owns its state for its whole lifetime. Descriptors can be swapped between
/// renders with [`Form::update`]; the state carries over.
pub struct Form {
    chrome: FormChrome,
    registry_options: RegistryOptions,
    registry: Registry,
    engine: FormEngine,
    ids: Box<dyn IdSource>,
    on_submit: SubmitHandler,
}

impl Form {
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.chrome.name
    }

    pub fn submit_button_text(&self) -> &str {
        &self.chrome.submit_button_text
    }

    pub fn fields(&self) -> &[RegisteredField] {
        self.registry.fields()
    }

    pub fn state(&self) -> &FormState {
        self.engine.state()
    }

    pub fn values(&self) -> &Values {
        self.engine.values()
    }

    pub fn engine(&self) -> &FormEngine {
        &self.engine
    }

    /// Replace the descriptors for the next render
    ///
    /// Ids stay stable for fields that were already registered. On error the
    /// previous descriptors stay in place.
    pub fn update(&mut self, descriptors: Vec<FieldDescriptor>) -> Result<(), FormError> {
        let registry = Registry::register(
            descriptors,
            self.ids.as_mut(),
            Some(&self.registry),
            self.registry_options,
        )?;

        self.engine.reconcile(registry.initial_values(), registry.schema());
        self.registry = registry;

        tracing::debug!(
            form = %self.chrome.name,
            fields = self.registry.len(),
            validated = self.engine.schema().len(),
            "updated form descriptors"
        );
        Ok(())
    }

    pub fn handle_change(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        self.engine.handle_change(name, value)
    }

    pub fn handle_blur(&mut self, name: &str) -> Result<(), FormError> {
        self.engine.handle_blur(name)
    }

    /// Run validation without touching any field
    pub fn validate(&mut self) -> bool {
        self.engine.validate()
    }

    /// Validate and, when everything passes, call the submit handler once
    pub fn submit(&mut self) -> SubmitOutcome {
        let on_submit = &mut self.on_submit;
        self.engine.submit(|values| on_submit(values))
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn render(&self) -> RenderedForm {
        render_form(&self.chrome, &self.registry, self.engine.state())
    }

    pub fn to_html(&self) -> String {
        self.render().into_html()
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("chrome", &self.chrome)
            .field("registry", &self.registry)
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

// File: src/registry.rs
// Purpose: Descriptor registration, shape checks, and state derivations

use crate::attrs;
use crate::descriptor::FieldDescriptor;
use crate::error::FormError;
use crate::id::IdSource;
use rusty_forms_validation::{Schema, Values};
use std::collections::{HashMap, HashSet};

/// Initial values: one entry per named descriptor, `value` or empty string
///
/// Unnamed descriptors contribute nothing.
pub fn initial_values(descriptors: &[FieldDescriptor]) -> Values {
    descriptors
        .iter()
        .filter_map(|d| d.field_name().map(|name| (name.to_string(), d.initial_value())))
        .collect()
}

/// Validation schema: named descriptors with a validator, unless `is_visible` is `false`
pub fn validation_schema(descriptors: &[FieldDescriptor]) -> Schema {
    descriptors
        .iter()
        .filter(|d| d.participates_in_validation())
        .filter_map(|d| Some((d.field_name()?.to_string(), d.validator.clone()?)))
        .collect()
}

/// A descriptor accepted into a form, with its resolved element id
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredField {
    pub descriptor: FieldDescriptor,
    pub id: String,
}

impl RegisteredField {
    pub fn name(&self) -> Option<&str> {
        self.descriptor.field_name()
    }
}

/// Registration options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Reject `show_if` gates on names no descriptor declares; otherwise they
    /// are logged and the gated field stays hidden
    pub strict_show_if: bool,
}

/// The checked, ordered descriptors of one form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    fields: Vec<RegisteredField>,
}

impl Registry {
    /// Check descriptor shapes and resolve element ids
    ///
    /// Descriptors without an `id` reuse the id they had in `previous` (same
    /// name, or same position for unnamed fields) and otherwise draw a new one
    /// from `ids`. Ids supplied on descriptors are never handed out twice.
    pub fn register(
        descriptors: Vec<FieldDescriptor>,
        ids: &mut dyn IdSource,
        previous: Option<&Registry>,
        options: RegistryOptions,
    ) -> Result<Self, FormError> {
        let mut names = HashSet::new();
        for (index, descriptor) in descriptors.iter().enumerate() {
            descriptor.layout().validate()?;
            if let Some(name) = descriptor.field_name() {
                if !names.insert(name) {
                    return Err(FormError::DuplicateName(name.to_string()));
                }
            }
            if let Some(bad) = descriptor.props.attrs.keys().find(|k| !attrs::is_valid_name(k)) {
                return Err(FormError::InvalidAttributeName {
                    field: display_name(descriptor, index),
                    name: bad.clone(),
                });
            }
        }

        for (index, descriptor) in descriptors.iter().enumerate() {
            let Some(gate) = &descriptor.show_if else {
                continue;
            };
            let field = display_name(descriptor, index);

            if descriptor.field_name() == Some(gate.field.as_str()) {
                return Err(FormError::SelfReferencingShowIf(field));
            }

            if !names.contains(gate.field.as_str()) {
                if options.strict_show_if {
                    return Err(FormError::UnknownShowIfField {
                        field,
                        target: gate.field.clone(),
                    });
                }
                tracing::warn!(
                    field = %field,
                    target = %gate.field,
                    "show_if references an undeclared field; the field will never be shown"
                );
            }
        }

        // Explicit ids are reserved before any id is reused or generated
        let mut used_ids = HashSet::new();
        for descriptor in &descriptors {
            if let Some(id) = &descriptor.id {
                if !used_ids.insert(id.clone()) {
                    return Err(FormError::DuplicateId(id.clone()));
                }
            }
        }

        let previous_ids = previous.map(Registry::ids_by_key).unwrap_or_default();

        let mut fields = Vec::with_capacity(descriptors.len());
        for (index, mut descriptor) in descriptors.into_iter().enumerate() {
            if descriptor.name.as_deref() == Some("") {
                descriptor.name = None;
            }

            let id = match &descriptor.id {
                Some(id) => id.clone(),
                None => {
                    let reused = previous_ids
                        .get(&FieldKey::of(&descriptor, index))
                        .filter(|id| !used_ids.contains(*id))
                        .cloned();
                    let id = match reused {
                        Some(id) => id,
                        None => fresh_id(&mut *ids, &used_ids),
                    };
                    used_ids.insert(id.clone());
                    id
                }
            };

            fields.push(RegisteredField { descriptor, id });
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[RegisteredField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredField> {
        self.fields.iter().find(|f| f.name() == Some(name))
    }

    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.fields.iter().map(|f| f.descriptor.clone()).collect()
    }

    pub fn initial_values(&self) -> Values {
        initial_values(&self.descriptors())
    }

    pub fn schema(&self) -> Schema {
        validation_schema(&self.descriptors())
    }

    fn ids_by_key(&self) -> HashMap<FieldKey, String> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, f)| (FieldKey::of(&f.descriptor, index), f.id.clone()))
            .collect()
    }
}

/// Identity of a field across re-registrations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum FieldKey {
    Named(String),
    Position(usize),
}

/// Name for messages: the field name, or `#index` for unnamed fields
fn display_name(descriptor: &FieldDescriptor, index: usize) -> String {
    descriptor
        .field_name()
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", index))
}

/// Next generated id not already taken
fn fresh_id(ids: &mut dyn IdSource, used: &HashSet<String>) -> String {
    loop {
        let id = ids.next_id();
        if !used.contains(&id) {
            return id;
        }
    }
}

impl FieldKey {
    fn of(descriptor: &FieldDescriptor, index: usize) -> Self {
        match descriptor.field_name() {
            Some(name) => FieldKey::Named(name.to_string()),
            None => FieldKey::Position(index),
        }
    }
}

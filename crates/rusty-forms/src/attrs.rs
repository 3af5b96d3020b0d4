// File: src/attrs.rs
// Purpose: Ordered HTML attribute lists where later writes replace earlier ones

use maud::{html, PreEscaped};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static ATTR_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_:][-A-Za-z0-9_:.]*$").expect("attribute name pattern is a valid regex")
});

/// Whether `name` can be written into a tag as an attribute name
pub fn is_valid_name(name: &str) -> bool {
    ATTR_NAME.is_match(name)
}

/// Attributes of one element, in insertion order
///
/// Setting a name that is already present replaces its value in place, which
/// is how descriptor-supplied attributes override computed ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: Vec<(String, Option<String>)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name="value"`
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.put(name.into(), Some(value.into()))
    }

    /// Set a value-less attribute such as `checked` when `on` is true
    pub fn flag(&mut self, name: impl Into<String>, on: bool) -> &mut Self {
        let name = name.into();
        if on {
            self.put(name, None)
        } else {
            self.remove(&name)
        }
    }

    pub fn set_opt(&mut self, name: impl Into<String>, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Apply caller-supplied attributes over the computed ones
    pub fn override_with(&mut self, overrides: &BTreeMap<String, String>) -> &mut Self {
        for (name, value) in overrides {
            self.set(name.as_str(), value.as_str());
        }
        self
    }

    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.entries.retain(|(n, _)| n != name);
        self
    }

    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref())
    }

    /// Render as ` name="value" flag`, values escaped
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| match value {
                Some(value) => format!(" {}=\"{}\"", name, escape(value)),
                None => format!(" {}", name),
            })
            .collect()
    }

    /// Opening tag for `tag` with these attributes
    pub fn open_tag(&self, tag: &str) -> PreEscaped<String> {
        PreEscaped(format!("<{}{}>", tag, self.render()))
    }

    fn put(&mut self, name: String, value: Option<String>) -> &mut Self {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }
}

fn escape(value: &str) -> String {
    html! { (value) }.into_string()
}

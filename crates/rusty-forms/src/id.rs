// File: src/id.rs
// Purpose: Element ids for descriptors that do not bring their own

use uuid::Uuid;

/// Source of element ids for fields registered without one
///
/// Ids are drawn once, when a descriptor is first registered, and then
/// reused on every render.
pub trait IdSource: Send {
    fn next_id(&mut self) -> String;
}

/// Random ids: `{prefix}-{uuid}`
#[derive(Debug, Clone)]
pub struct UuidIds {
    prefix: String,
}

impl UuidIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

impl Default for UuidIds {
    fn default() -> Self {
        Self::new("field")
    }
}

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        format!("{}-{}", self.prefix, Uuid::new_v4().simple())
    }
}

/// Deterministic ids: `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: usize,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

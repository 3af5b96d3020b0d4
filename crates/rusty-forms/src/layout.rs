// File: src/layout.rs
// Purpose: Responsive grid spans for form cells

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of columns in the layout grid
pub const GRID_COLUMNS: u8 = 12;

/// Responsive breakpoints, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column span of a grid cell at each breakpoint
///
/// Unset breakpoints inherit from the next smaller one in CSS, so they
/// produce no class. The default spans the full width at `xs` through `lg`.
/// A `Cols` supplied on a descriptor replaces the default as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cols {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<u8>,
}

impl Cols {
    /// No spans at all; build up with the breakpoint setters
    pub fn none() -> Self {
        Self {
            xs: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }

    /// Full width from `xs` to `lg`
    pub fn full() -> Self {
        Self::uniform(GRID_COLUMNS)
    }

    /// The same span from `xs` to `lg`
    pub fn uniform(span: u8) -> Self {
        Self {
            xs: Some(span),
            sm: Some(span),
            md: Some(span),
            lg: Some(span),
            xl: None,
        }
    }

    pub fn xs(mut self, span: u8) -> Self {
        self.xs = Some(span);
        self
    }

    pub fn sm(mut self, span: u8) -> Self {
        self.sm = Some(span);
        self
    }

    pub fn md(mut self, span: u8) -> Self {
        self.md = Some(span);
        self
    }

    pub fn lg(mut self, span: u8) -> Self {
        self.lg = Some(span);
        self
    }

    pub fn xl(mut self, span: u8) -> Self {
        self.xl = Some(span);
        self
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<u8> {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Set spans with their breakpoint, smallest first
    pub fn spans(&self) -> impl Iterator<Item = (Breakpoint, u8)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter_map(|bp| self.get(bp).map(|span| (bp, span)))
    }

    /// Reject spans outside `1..=12`
    pub fn validate(&self) -> Result<(), FormError> {
        match self.spans().find(|(_, span)| !(1..=GRID_COLUMNS).contains(span)) {
            Some((breakpoint, span)) => Err(FormError::InvalidColumnSpan { breakpoint, span }),
            None => Ok(()),
        }
    }

    /// CSS classes for a grid item with these spans
    pub fn class_list(&self) -> String {
        let mut classes = vec!["grid".to_string(), "grid-item".to_string()];
        classes.extend(self.spans().map(|(bp, span)| format!("grid-{}-{}", bp, span)));
        classes.join(" ")
    }
}

impl Default for Cols {
    fn default() -> Self {
        Self::full()
    }
}

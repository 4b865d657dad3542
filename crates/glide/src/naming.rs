//! Collision-free class names for generated component families.
//!
//! Every factory call takes the next number for its component kind, so two
//! buttons created from different configs never share a selector root.
//! The sequence belongs to one [`Glide`](crate::Glide) instance; create one
//! instance per document.

use std::collections::HashMap;
use std::fmt;

/// The component families that own a generated class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Button,
    Input,
    Checkbox,
    Choice,
    ChoiceGroup,
}

impl ComponentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Input => "input",
            ComponentKind::Checkbox => "checkbox",
            ComponentKind::Choice => "choice",
            ComponentKind::ChoiceGroup => "choice-group",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind monotonically increasing counters.
#[derive(Debug, Clone, Default)]
pub struct NameSequence {
    counters: HashMap<ComponentKind, u32>,
}

impl NameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next class name for `kind`, e.g. `glide-button-1`.
    pub fn next(&mut self, kind: ComponentKind) -> String {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        format!("glide-{kind}-{counter}")
    }

    /// How many names have been handed out for `kind`.
    pub fn issued(&self, kind: ComponentKind) -> u32 {
        self.counters.get(&kind).copied().unwrap_or(0)
    }
}

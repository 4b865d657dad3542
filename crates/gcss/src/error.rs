//! Error types for building and applying style rule trees.
//!
//! Every variant here is a configuration or environment error. They are
//! raised by the build call that introduced the problem, before anything is
//! inserted into a live stylesheet.

use thiserror::Error;

/// Errors that can occur while building or materializing a [`Stylesheet`](crate::Stylesheet).
///
/// # Examples
///
/// ```rust
/// use gcss::{GcssError, StyleMap, Stylesheet};
///
/// let mut sheet = Stylesheet::new();
/// let result = sheet.add_rule("", StyleMap::new());
/// assert!(matches!(result, Err(GcssError::EmptySelector)));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GcssError {
    /// A rule was given an empty selector fragment (or no selectors at all).
    #[error("Selector fragments must be non-empty")]
    EmptySelector,

    /// A variant names an `extends` target that is not part of the variant map.
    #[error("Variant `{variant}` extends unknown variant `{target}`")]
    UnknownExtends { variant: String, target: String },

    /// Following `extends` from this variant never reaches a root.
    ///
    /// Self-extension is reported the same way.
    #[error("Variant `{variant}` is part of an extends cycle")]
    ExtendsCycle { variant: String },

    /// A media scope was placed below another rule.
    ///
    /// Media scopes only exist at the top level of a stylesheet.
    #[error("Media rules cannot be nested (parent selectors: {parents})")]
    NestedMediaRule { parents: String },

    /// A rule handle does not belong to this stylesheet, or points at a
    /// node of the wrong kind.
    #[error("Unknown rule handle #{0}")]
    UnknownRule(usize),

    /// The host could not provide a live stylesheet to render into.
    #[error("No live stylesheet available: {0}")]
    SheetUnavailable(String),

    /// A rule was inserted at a position past the end of its sheet.
    #[error("Insert index {index} is out of range for a sheet with {len} rules")]
    IndexOutOfRange { index: usize, len: usize },
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, GcssError>;

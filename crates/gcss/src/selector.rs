//! Selector fragments and their combination with parent selectors.
//!
//! Selector fragments are raw strings. Nesting follows the `&` convention:
//!
//! - `&` at the start of a fragment is replaced by the parent selector
//!   (`&:hover` under `.button` gives `.button:hover`)
//! - any other fragment descends from the parent with a single space
//!   (`.label` under `.button` gives `.button .label`)
//!
//! Every parent is combined with every own fragment. The result is not
//! deduplicated.

use crate::error::{GcssError, Result};

/// Marks a fragment that attaches directly to its parent selector.
pub const PARENT_REFERENCE: char = '&';

/// Prefix of variant names that may be extended but never selected.
pub const PRIVATE_PREFIX: char = '.';

/// Conversion into a list of selector fragments.
///
/// Implemented for single strings as well as arrays, slices and vectors of
/// strings, so rule builders accept either `".foo"` or `["&.a", "&.b"]`.
pub trait IntoSelectors {
    fn into_selectors(self) -> Vec<String>;
}

impl IntoSelectors for &str {
    fn into_selectors(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoSelectors for String {
    fn into_selectors(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoSelectors for &String {
    fn into_selectors(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<S: Into<String>> IntoSelectors for Vec<S> {
    fn into_selectors(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: Into<String>, const N: usize> IntoSelectors for [S; N] {
    fn into_selectors(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: AsRef<str>> IntoSelectors for &[S] {
    fn into_selectors(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

/// Collects selector fragments, rejecting an empty list or an empty fragment.
pub fn validate_selectors(selectors: impl IntoSelectors) -> Result<Vec<String>> {
    let selectors = selectors.into_selectors();
    if selectors.is_empty() || selectors.iter().any(|s| s.trim().is_empty()) {
        return Err(GcssError::EmptySelector);
    }
    Ok(selectors)
}

/// Combines every parent selector with every own fragment, parents outermost.
///
/// An empty parent is the top-level context: a plain fragment is used as is
/// and a `&` fragment has its marker stripped.
pub fn combine_selectors(parents: &[String], own: &[String]) -> Vec<String> {
    let mut combined = Vec::with_capacity(parents.len() * own.len());
    for parent in parents {
        for selector in own {
            combined.push(combine_pair(parent, selector));
        }
    }
    combined
}

fn combine_pair(parent: &str, selector: &str) -> String {
    if let Some(rest) = selector.strip_prefix(PARENT_REFERENCE) {
        format!("{parent}{rest}")
    } else if parent.is_empty() {
        selector.to_string()
    } else {
        format!("{parent} {selector}")
    }
}

/// Formats a class selector that attaches to the parent, e.g. `&.primary`.
pub fn class_fragment(class_name: &str) -> String {
    format!("{PARENT_REFERENCE}.{class_name}")
}

/// True when a variant name carries the private prefix.
pub fn is_private(name: &str) -> bool {
    name.starts_with(PRIVATE_PREFIX)
}

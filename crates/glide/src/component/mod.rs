//! Component factories.
//!
//! Each submodule turns one config type into a [`Stylesheet`](gcss::Stylesheet)
//! and a small bound descriptor. The descriptor is all the presentation layer
//! needs afterwards: it computes the class list of a rendered element, which
//! is the only link between markup and the generated rules.

pub mod button;
pub mod checkbox;
pub mod choice;
pub mod choice_group;
pub mod input;

use bitflags::bitflags;
use gcss::VariantGraph;
use serde::{Deserialize, Serialize};

use crate::error::{GlideError, Result};

bitflags! {
    /// Runtime states that are expressed as classes on the component root.
    ///
    /// ```
    /// use glide::ComponentStates;
    ///
    /// let states = ComponentStates::ERROR | ComponentStates::DISABLED;
    /// assert_eq!(states.class_names().collect::<Vec<_>>(), ["error", "disabled"]);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ComponentStates: u8 {
        /// An async action is in flight
        const LOADING  = 0b0000_0001;
        /// Validation failed
        const ERROR    = 0b0000_0010;
        /// Interaction is blocked
        const DISABLED = 0b0000_0100;
        /// The control is selected
        const CHECKED  = 0b0000_1000;
    }
}

impl ComponentStates {
    /// Class names of the set states, in a fixed order.
    ///
    /// The item lifetime is free so the names chain with borrowed classes.
    pub fn class_names<'a>(self) -> impl Iterator<Item = &'a str> {
        [
            (ComponentStates::LOADING, "loading"),
            (ComponentStates::ERROR, "error"),
            (ComponentStates::DISABLED, "disabled"),
            (ComponentStates::CHECKED, "checked"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
    }
}

/// Cross-axis alignment used by the choice controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexAlignment {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
}

impl FlexAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            FlexAlignment::FlexStart => "flex-start",
            FlexAlignment::Center => "center",
            FlexAlignment::FlexEnd => "flex-end",
        }
    }
}

/// Which side of the indicator the label sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    #[default]
    Right,
}

/// Joins non-empty class names with single spaces.
pub(crate) fn join_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Picks the requested or default variant and checks that a user may select it.
pub(crate) fn select_variant<'a>(
    graph: &VariantGraph,
    requested: Option<&'a str>,
    default: Option<&'a str>,
) -> Result<Option<&'a str>> {
    let Some(name) = requested.or(default) else {
        return Ok(None);
    };
    check_selectable(graph, name)?;
    Ok(Some(name))
}

pub(crate) fn check_selectable(graph: &VariantGraph, name: &str) -> Result<()> {
    if !graph.contains(name) {
        return Err(GlideError::UnknownVariant(name.to_string()));
    }
    if !graph.is_public(name) {
        return Err(GlideError::PrivateVariant(name.to_string()));
    }
    Ok(())
}

//! Viewport width conditions for media scopes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a width condition is a lower or an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthMode {
    Min,
    Max,
}

/// A single `(min-width: Npx)` / `(max-width: Npx)` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaExpression {
    pub width: u32,
    pub mode: WidthMode,
}

impl MediaExpression {
    pub fn min_width(width: u32) -> Self {
        Self {
            width,
            mode: WidthMode::Min,
        }
    }

    pub fn max_width(width: u32) -> Self {
        Self {
            width,
            mode: WidthMode::Max,
        }
    }
}

impl fmt::Display for MediaExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            WidthMode::Min => "min",
            WidthMode::Max => "max",
        };
        write!(f, "({mode}-width: {}px)", self.width)
    }
}

/// Joins expressions into the condition of a `screen` media group.
///
/// All expressions must hold, so they are combined with `and`.
pub fn media_condition(expressions: &[MediaExpression]) -> String {
    let mut condition = String::from("screen");
    for expression in expressions {
        condition.push_str(" and ");
        condition.push_str(&expression.to_string());
    }
    condition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_display() {
        assert_eq!(MediaExpression::min_width(600).to_string(), "(min-width: 600px)");
        assert_eq!(MediaExpression::max_width(1024).to_string(), "(max-width: 1024px)");
    }

    #[test]
    fn test_condition_joins_with_and() {
        let condition = media_condition(&[
            MediaExpression::min_width(600),
            MediaExpression::max_width(1024),
        ]);
        assert_eq!(condition, "screen and (min-width: 600px) and (max-width: 1024px)");
    }
}

//! Rule tree nodes and the handles used to grow them.
//!
//! Nodes live in an arena owned by their [`Stylesheet`](crate::Stylesheet)
//! and refer to their children by [`RuleId`]. Build code keeps ids around and
//! reopens a node with [`Stylesheet::rule`](crate::Stylesheet::rule) whenever
//! it needs to add more children, which mirrors how component factories
//! return to earlier rules after building siblings.

use crate::error::{GcssError, Result};
use crate::media::MediaExpression;
use crate::selector::{IntoSelectors, validate_selectors};
use crate::style::StyleMap;
use crate::stylesheet::Stylesheet;

/// Handle to a node inside one stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(pub(crate) usize);

impl RuleId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Selector fragments with a property map and nested rules.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub(crate) selectors: Vec<String>,
    pub(crate) style: StyleMap,
    pub(crate) children: Vec<RuleId>,
}

impl StyleRule {
    pub(crate) fn new(selectors: Vec<String>, style: StyleMap) -> Self {
        Self {
            selectors,
            style,
            children: Vec::new(),
        }
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    pub fn children(&self) -> &[RuleId] {
        &self.children
    }
}

/// A top-level `@media screen and ...` group.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRule {
    pub(crate) expressions: Vec<MediaExpression>,
    pub(crate) children: Vec<RuleId>,
}

impl MediaRule {
    pub(crate) fn new(expressions: Vec<MediaExpression>) -> Self {
        Self {
            expressions,
            children: Vec::new(),
        }
    }

    pub fn expressions(&self) -> &[MediaExpression] {
        &self.expressions
    }

    pub fn children(&self) -> &[RuleId] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Style(StyleRule),
    Media(MediaRule),
}

impl Node {
    pub fn children(&self) -> &[RuleId] {
        match self {
            Node::Style(rule) => &rule.children,
            Node::Media(media) => &media.children,
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<RuleId> {
        match self {
            Node::Style(rule) => &mut rule.children,
            Node::Media(media) => &mut media.children,
        }
    }
}

/// Mutable view of one style rule.
pub struct RuleMut<'a> {
    pub(crate) sheet: &'a mut Stylesheet,
    pub(crate) id: RuleId,
}

impl RuleMut<'_> {
    pub fn id(&self) -> RuleId {
        self.id
    }

    /// Appends a child rule and returns its id.
    ///
    /// `style` may be an absent map (`None::<StyleMap>`), which creates a
    /// purely structural node.
    pub fn add_rule(
        &mut self,
        selectors: impl IntoSelectors,
        style: impl Into<StyleMap>,
    ) -> Result<RuleId> {
        let selectors = validate_selectors(selectors)?;
        self.rule_mut()?;
        let child = self.sheet.push_node(Node::Style(StyleRule::new(selectors, style.into())));
        self.rule_mut()?.children.push(child);
        Ok(child)
    }

    /// Replaces this rule's own property map.
    pub fn set_style(&mut self, style: impl Into<StyleMap>) -> Result<&mut Self> {
        self.rule_mut()?.style = style.into();
        Ok(self)
    }

    /// Appends selector fragments to this rule without creating a child.
    pub fn add_selector(&mut self, selectors: impl IntoSelectors) -> Result<&mut Self> {
        let selectors = selectors.into_selectors();
        if selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(GcssError::EmptySelector);
        }
        self.rule_mut()?.selectors.extend(selectors);
        Ok(self)
    }

    /// Moves an existing top-level node below this rule.
    ///
    /// Media scopes only exist at the top level, so nesting one fails with
    /// [`GcssError::NestedMediaRule`].
    pub fn nest(&mut self, child: RuleId) -> Result<&mut Self> {
        self.sheet.nest(self.id, child)?;
        Ok(self)
    }

    fn rule_mut(&mut self) -> Result<&mut StyleRule> {
        match self.sheet.node_mut(self.id) {
            Some(Node::Style(rule)) => Ok(rule),
            _ => Err(GcssError::UnknownRule(self.id.0)),
        }
    }
}

/// Mutable view of one media scope.
pub struct MediaMut<'a> {
    pub(crate) sheet: &'a mut Stylesheet,
    pub(crate) id: RuleId,
}

impl MediaMut<'_> {
    pub fn id(&self) -> RuleId {
        self.id
    }

    /// Adds a rule rendered inside this media group.
    pub fn add_rule(
        &mut self,
        selectors: impl IntoSelectors,
        style: impl Into<StyleMap>,
    ) -> Result<RuleId> {
        let selectors = validate_selectors(selectors)?;
        if !matches!(self.sheet.node(self.id), Some(Node::Media(_))) {
            return Err(GcssError::UnknownRule(self.id.0));
        }
        let child = self.sheet.push_node(Node::Style(StyleRule::new(selectors, style.into())));
        if let Some(node) = self.sheet.node_mut(self.id) {
            node.children_mut().push(child);
        }
        Ok(child)
    }
}

//! The root container of a rule tree and its materialization.
//!
//! ## Rendering
//!
//! Top-level nodes render in registration order. Each style rule combines
//! its fragments with the selectors of its parent (see
//! [`combine_selectors`]), emits one rule if it has properties, and then
//! renders its children with the combined list as their parents. A child
//! therefore always lands after its parent, and deeper rules win ties at
//! equal specificity through source order alone.
//!
//! ```rust
//! use gcss::{MemoryDocument, StyleMap, Stylesheet};
//!
//! let mut sheet = Stylesheet::new();
//! let button = sheet.add_rule(".button", StyleMap::from([("color", "white")])).unwrap();
//! sheet
//!     .rule(button)
//!     .unwrap()
//!     .add_rule("&:hover", StyleMap::from([("color", "red")]))
//!     .unwrap();
//!
//! let mut document = MemoryDocument::new();
//! sheet.apply(&mut document).unwrap();
//! assert_eq!(
//!     document.to_css(),
//!     ".button {\n  color: white;\n}\n.button:hover {\n  color: red;\n}"
//! );
//! ```

use log::{debug, trace};

use crate::error::{GcssError, Result};
use crate::media::{MediaExpression, media_condition};
use crate::rule::{MediaMut, MediaRule, Node, RuleId, RuleMut, StyleRule};
use crate::selector::{IntoSelectors, combine_selectors, validate_selectors};
use crate::sink::{MemorySheet, StyleHost, StyleSink};
use crate::style::StyleMap;

/// An ordered collection of top-level rules and media scopes.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    nodes: Vec<Node>,
    roots: Vec<RuleId>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new top-level style rule.
    pub fn add_rule(
        &mut self,
        selectors: impl IntoSelectors,
        style: impl Into<StyleMap>,
    ) -> Result<RuleId> {
        let selectors = validate_selectors(selectors)?;
        let id = self.push_node(Node::Style(StyleRule::new(selectors, style.into())));
        self.roots.push(id);
        Ok(id)
    }

    /// Registers a new top-level media scope.
    pub fn add_media_rule(
        &mut self,
        expressions: impl IntoIterator<Item = MediaExpression>,
    ) -> RuleId {
        let media = MediaRule::new(expressions.into_iter().collect());
        let id = self.push_node(Node::Media(media));
        self.roots.push(id);
        id
    }

    /// Reopens a style rule for further building.
    pub fn rule(&mut self, id: RuleId) -> Result<RuleMut<'_>> {
        if !matches!(self.node(id), Some(Node::Style(_))) {
            return Err(GcssError::UnknownRule(id.0));
        }
        Ok(RuleMut { sheet: self, id })
    }

    /// Reopens a media scope for further building.
    pub fn media(&mut self, id: RuleId) -> Result<MediaMut<'_>> {
        if !matches!(self.node(id), Some(Node::Media(_))) {
            return Err(GcssError::UnknownRule(id.0));
        }
        Ok(MediaMut { sheet: self, id })
    }

    /// Moves the top-level node `child` below the style rule `parent`.
    ///
    /// Fails with [`GcssError::NestedMediaRule`] when `child` is a media
    /// scope, and with [`GcssError::UnknownRule`] when `child` is not a
    /// top-level node or `parent` lies inside `child`.
    pub fn nest(&mut self, parent: RuleId, child: RuleId) -> Result<()> {
        let parent_selectors = match self.node(parent) {
            Some(Node::Style(rule)) => rule.selectors.join(", "),
            _ => return Err(GcssError::UnknownRule(parent.0)),
        };
        match self.node(child) {
            Some(Node::Media(_)) => {
                return Err(GcssError::NestedMediaRule {
                    parents: parent_selectors,
                });
            }
            Some(Node::Style(_)) => {}
            None => return Err(GcssError::UnknownRule(child.0)),
        }
        let position = self
            .roots
            .iter()
            .position(|root| *root == child)
            .ok_or(GcssError::UnknownRule(child.0))?;
        if self.contains(child, parent) {
            return Err(GcssError::UnknownRule(parent.0));
        }

        self.roots.remove(position);
        if let Some(node) = self.node_mut(parent) {
            node.children_mut().push(child);
        }
        Ok(())
    }

    pub fn node(&self, id: RuleId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Top-level nodes in registration order.
    pub fn roots(&self) -> &[RuleId] {
        &self.roots
    }

    /// Total number of nodes at any depth.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates one new live stylesheet on `host` and renders every
    /// top-level node into it, in registration order.
    ///
    /// The tree is rendered into a staging [`MemorySheet`] first, so a
    /// render error attaches nothing. Once the live sheet exists, only the
    /// sink itself can fail; a sink that rejects an insert partway through
    /// keeps the rules it already accepted.
    ///
    /// Applying the same stylesheet twice attaches a second sheet with the
    /// same rules.
    pub fn apply<H: StyleHost + ?Sized>(&self, host: &mut H) -> Result<()> {
        let mut staged = MemorySheet::new();
        self.render_into(&mut staged)?;

        let sink = host.create_stylesheet()?;
        staged.replay_into(sink)?;
        debug!(
            "Applied stylesheet: {} top-level nodes, {} rules inserted",
            self.roots.len(),
            sink.rule_count()
        );
        Ok(())
    }

    /// Like [`apply`](Self::apply), but first logs the full rule tree.
    pub fn apply_debug<H: StyleHost + ?Sized>(&self, host: &mut H) -> Result<()> {
        debug!("Rule tree: {:#?}", self);
        self.apply(host)
    }

    /// Renders every top-level node into an existing sink.
    pub fn render_into(&self, sink: &mut dyn StyleSink) -> Result<()> {
        for root in &self.roots {
            self.render_node(*root, sink, None)?;
        }
        Ok(())
    }

    pub(crate) fn push_node(&mut self, node: Node) -> RuleId {
        self.nodes.push(node);
        RuleId(self.nodes.len() - 1)
    }

    pub(crate) fn node_mut(&mut self, id: RuleId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    fn contains(&self, ancestor: RuleId, id: RuleId) -> bool {
        if ancestor == id {
            return true;
        }
        self.node(ancestor)
            .map(|node| node.children().iter().any(|child| self.contains(*child, id)))
            .unwrap_or(false)
    }

    fn render_node(
        &self,
        id: RuleId,
        sink: &mut dyn StyleSink,
        parents: Option<&[String]>,
    ) -> Result<()> {
        match self.node(id) {
            Some(Node::Style(rule)) => self.render_style(rule, sink, parents),
            Some(Node::Media(media)) => self.render_media(media, sink, parents),
            None => Err(GcssError::UnknownRule(id.0)),
        }
    }

    fn render_style(
        &self,
        rule: &StyleRule,
        sink: &mut dyn StyleSink,
        parents: Option<&[String]>,
    ) -> Result<()> {
        let top_level = [String::new()];
        let parents = parents.unwrap_or(&top_level);
        let combined = combine_selectors(parents, &rule.selectors);

        if !rule.style.is_empty() {
            let css_text = format_rule(&combined, &rule.style);
            let index = sink.rule_count();
            sink.insert_rule(&css_text, index)?;
            trace!("Inserted rule #{index}: {}", combined.join(", "));
        }

        for child in &rule.children {
            self.render_node(*child, sink, Some(combined.as_slice()))?;
        }
        Ok(())
    }

    fn render_media(
        &self,
        media: &MediaRule,
        sink: &mut dyn StyleSink,
        parents: Option<&[String]>,
    ) -> Result<()> {
        if let Some(parents) = parents {
            return Err(GcssError::NestedMediaRule {
                parents: parents.join(", "),
            });
        }

        let condition = media_condition(&media.expressions);
        let index = sink.rule_count();
        let index = sink.insert_group(&condition, index)?;
        trace!("Inserted media group #{index}: {condition}");
        let group = sink
            .group_mut(index)
            .ok_or_else(|| GcssError::SheetUnavailable(format!("media group #{index}")))?;
        for child in &media.children {
            self.render_node(*child, group, None)?;
        }
        Ok(())
    }
}

/// Formats one rule: the comma-joined selector list and one indented
/// declaration per line.
pub fn format_rule(selectors: &[String], style: &StyleMap) -> String {
    let mut css_text = selectors.join(", ");
    css_text.push_str(" {");
    for declaration in style.declarations() {
        css_text.push_str("\n  ");
        css_text.push_str(&declaration);
    }
    css_text.push_str("\n}");
    css_text
}

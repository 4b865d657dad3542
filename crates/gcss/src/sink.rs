//! Targets that rendered rules are inserted into.
//!
//! A [`StyleSink`] is the minimal surface of a live stylesheet: a list of
//! textual rules that can be extended at a given index, plus conditional
//! groups that hold their own nested list. A [`StyleHost`] plays the part of
//! the document and hands out one new, attached sheet per call.
//!
//! [`MemoryDocument`] and [`MemorySheet`] implement both traits in memory
//! and print the collected rules back as CSS text.

use crate::error::{GcssError, Result};

/// A live, ordered list of CSS rules.
pub trait StyleSink {
    /// Number of top-level rules currently in this sink.
    fn rule_count(&self) -> usize;

    /// Inserts a complete rule at `index` and returns the index it landed at.
    fn insert_rule(&mut self, css_text: &str, index: usize) -> Result<usize>;

    /// Inserts an empty `@media <condition>` group at `index`.
    fn insert_group(&mut self, condition: &str, index: usize) -> Result<usize>;

    /// The nested rule list of the group at `index`, if that rule is a group.
    fn group_mut(&mut self, index: usize) -> Option<&mut dyn StyleSink>;
}

/// Something that can attach new stylesheets, like a document head.
pub trait StyleHost {
    /// Creates and attaches one new, empty stylesheet.
    fn create_stylesheet(&mut self) -> Result<&mut dyn StyleSink>;
}

/// A rule held by a [`MemorySheet`].
#[derive(Debug, Clone, PartialEq)]
pub enum CssRule {
    Style(String),
    Media { condition: String, rules: MemorySheet },
}

impl CssRule {
    pub fn to_css(&self) -> String {
        match self {
            CssRule::Style(text) => text.clone(),
            CssRule::Media { condition, rules } if rules.is_empty() => {
                format!("@media {condition} {{}}")
            }
            CssRule::Media { condition, rules } => {
                let inner = rules
                    .to_css()
                    .lines()
                    .map(|line| format!("  {line}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("@media {condition} {{\n{inner}\n}}")
            }
        }
    }
}

/// In-memory stylesheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySheet {
    rules: Vec<CssRule>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[CssRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Prints all rules, one after another, separated by newlines.
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(CssRule::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Appends every rule of this sheet, groups included, to `sink`.
    pub fn replay_into(&self, sink: &mut dyn StyleSink) -> Result<()> {
        for rule in &self.rules {
            let index = sink.rule_count();
            match rule {
                CssRule::Style(text) => {
                    sink.insert_rule(text, index)?;
                }
                CssRule::Media { condition, rules } => {
                    let index = sink.insert_group(condition, index)?;
                    let group = sink.group_mut(index).ok_or_else(|| {
                        GcssError::SheetUnavailable(format!("media group #{index}"))
                    })?;
                    rules.replay_into(group)?;
                }
            }
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index > self.rules.len() {
            return Err(GcssError::IndexOutOfRange {
                index,
                len: self.rules.len(),
            });
        }
        Ok(())
    }
}

impl StyleSink for MemorySheet {
    fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn insert_rule(&mut self, css_text: &str, index: usize) -> Result<usize> {
        self.check_index(index)?;
        self.rules.insert(index, CssRule::Style(css_text.to_string()));
        Ok(index)
    }

    fn insert_group(&mut self, condition: &str, index: usize) -> Result<usize> {
        self.check_index(index)?;
        self.rules.insert(
            index,
            CssRule::Media {
                condition: condition.to_string(),
                rules: MemorySheet::new(),
            },
        );
        Ok(index)
    }

    fn group_mut(&mut self, index: usize) -> Option<&mut dyn StyleSink> {
        match self.rules.get_mut(index) {
            Some(CssRule::Media { rules, .. }) => Some(rules as &mut dyn StyleSink),
            _ => None,
        }
    }
}

/// In-memory document collecting every stylesheet attached to it.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    sheets: Vec<MemorySheet>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached sheets, in creation order.
    pub fn sheets(&self) -> &[MemorySheet] {
        &self.sheets
    }

    /// All attached sheets printed in creation order.
    pub fn to_css(&self) -> String {
        self.sheets
            .iter()
            .filter(|sheet| !sheet.is_empty())
            .map(MemorySheet::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StyleHost for MemoryDocument {
    fn create_stylesheet(&mut self) -> Result<&mut dyn StyleSink> {
        self.sheets.push(MemorySheet::new());
        let index = self.sheets.len() - 1;
        Ok(&mut self.sheets[index] as &mut dyn StyleSink)
    }
}

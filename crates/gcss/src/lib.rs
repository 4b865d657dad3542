//! # GCSS - Glide style rule trees
//!
//! Builds nested, conditional style rules in memory and renders them into a
//! live stylesheet in one pass. Component factories use it to describe
//! their look once, at construction time, and never touch the stylesheet
//! again afterwards.
//!
//! This crate provides:
//!
//! - **Rule trees**: [`Stylesheet`] owns top-level style rules and media
//!   scopes; rules nest with the `&` parent-reference convention
//! - **Rendering**: [`Stylesheet::apply`] creates one new sheet on a
//!   [`StyleHost`] and inserts every rule in tree order
//! - **Variants**: [`variants::resolve_variants`] turns a map of named
//!   variants with single-inheritance `extends` links into selector lists and
//!   a safe build order
//!
//! ## Quick Start
//!
//! ```rust
//! use gcss::{MediaExpression, MemoryDocument, StyleMap, Stylesheet};
//!
//! let mut sheet = Stylesheet::new();
//! let card = sheet
//!     .add_rule(".card", StyleMap::new().with("display", "flex").with("gap", "8px"))
//!     .unwrap();
//! sheet
//!     .rule(card)
//!     .unwrap()
//!     .add_rule(".title", StyleMap::from([("fontWeight", 600)]))
//!     .unwrap();
//!
//! let narrow = sheet.add_media_rule([MediaExpression::max_width(600)]);
//! sheet
//!     .media(narrow)
//!     .unwrap()
//!     .add_rule(".card", StyleMap::from([("flexDirection", "column")]))
//!     .unwrap();
//!
//! let mut document = MemoryDocument::new();
//! sheet.apply(&mut document).unwrap();
//!
//! let css = document.to_css();
//! assert!(css.contains(".card .title {\n  font-weight: 600;\n}"));
//! assert!(css.contains("@media screen and (max-width: 600px) {"));
//! ```
//!
//! ## Not Supported
//!
//! - Parsing CSS text
//! - Pseudo-class expansion beyond literal selector strings
//! - Specificity analysis or deduplication of generated selectors
//!
//! ## Modules
//!
//! - [`stylesheet`]: the rule tree root and rendering
//! - [`rule`]: rule nodes and build handles
//! - [`selector`]: selector fragments and their combination
//! - [`style`]: property maps
//! - [`media`]: width conditions for media scopes
//! - [`sink`]: live stylesheet abstraction and in-memory implementations
//! - [`variants`]: `extends` resolution
//! - [`error`]: error types

pub mod error;
pub mod media;
pub mod rule;
pub mod selector;
pub mod sink;
pub mod style;
pub mod stylesheet;
pub mod variants;

pub use error::{GcssError, Result};
pub use media::{MediaExpression, WidthMode};
pub use rule::{MediaMut, Node, RuleId, RuleMut};
pub use sink::{CssRule, MemoryDocument, MemorySheet, StyleHost, StyleSink};
pub use style::{StyleMap, StyleValue};
pub use stylesheet::Stylesheet;
pub use variants::{Extends, VariantGraph, resolve_variants};

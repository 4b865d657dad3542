//! Glide: scoped, variant-driven component styles.
//!
//! This crate bundles the two workspace crates:
//!
//! - [`gcss`]: nested rule trees, media scopes, variant resolution and the
//!   sinks they render into
//! - [`glide`]: component factories built on top of them
//!
//! ```rust
//! use glide_rs::{ButtonConfig, Glide, MemoryDocument};
//!
//! let mut glide = Glide::new(MemoryDocument::new());
//! let button = glide.create_button(&ButtonConfig::default()).unwrap();
//! assert!(glide.host().to_css().starts_with(&format!(".{} {{", button.class_name())));
//! ```

mod log_init;

pub use gcss;
pub use glide;

pub use gcss::{
    MediaExpression, MemoryDocument, MemorySheet, StyleHost, StyleMap, StyleSink, StyleValue,
    Stylesheet,
};
pub use glide::{
    ButtonConfig, ButtonVariant, CheckboxConfig, ChoiceConfig, ChoiceGroupConfig, ComponentStates,
    Glide, GlideError, InputConfig, InputVariant,
};
pub use log_init::init_logger;

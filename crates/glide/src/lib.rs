//! # Glide - variant-driven component styles
//!
//! Describe the look of a component family once, as plain data, and get a
//! scoped stylesheet plus a descriptor that produces class lists for
//! rendered elements.
//!
//! ## Variants
//!
//! Buttons and inputs accept named variants. A variant may `extend` one
//! other variant; its styles are then layered on top of everything it
//! extends. Names starting with `.` are private bases:
//!
//! ```rust
//! use glide::{ButtonConfig, ComponentStates, Glide};
//! use gcss::MemoryDocument;
//!
//! let config = r#"{
//!     "style": { "padding": "8px 16px", "borderRadius": "4px" },
//!     "variants": {
//!         ".solid": { "style": { "color": "white" } },
//!         "primary": { "extends": ".solid", "style": { "background": "blue" } },
//!         "danger": { "extends": "primary", "style": { "background": "red" } }
//!     },
//!     "defaultVariant": "primary"
//! }"#;
//!
//! let mut glide = Glide::new(MemoryDocument::new());
//! let button = glide.button_from_json(config).unwrap();
//!
//! assert_eq!(button.variants().collect::<Vec<_>>(), ["primary", "danger"]);
//! assert!(button.class_list(Some(".solid"), ComponentStates::empty(), None).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`component`]: the factories and their config types
//! - [`naming`]: generated class names
//! - [`error`]: error types

pub mod component;
pub mod error;
mod instance;
pub mod naming;

pub use component::button::{ButtonConfig, ButtonVariant, GlideButton};
pub use component::checkbox::{CheckboxConfig, GlideCheckbox};
pub use component::choice::{ChoiceConfig, ErrorPosition, GlideChoice, IndicatorConfig};
pub use component::choice_group::{ChoiceGroupConfig, GlideChoiceGroup};
pub use component::input::{GlideInput, InputConfig, InputVariant, LabelPosition};
pub use component::{ComponentStates, FlexAlignment, Side};
pub use error::{GlideError, Result};
pub use instance::Glide;
pub use naming::{ComponentKind, NameSequence};

// Re-export the log crate so users can configure logging alongside the factories.
pub use log;

//! Button factory.
//!
//! Expected markup:
//!
//! ```html
//! <button class="glide-button glide-button-1 primary [loading]">
//!   <div class="content">...</div>
//!   <div class="loading-wrap">...</div>
//! </button>
//! ```

use gcss::{Extends, StyleMap, Stylesheet, VariantGraph, resolve_variants};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::component::{ComponentStates, check_selectable, join_classes, select_variant};
use crate::error::Result;

/// Class carried by every button, independent of its generated root.
pub const BUTTON_CLASS: &str = "glide-button";

/// Styles of one button variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ButtonVariant {
    pub style: StyleMap,
    pub hover_style: StyleMap,
    pub click_style: StyleMap,
    pub disabled_style: StyleMap,
    /// Variant whose styles this one builds on.
    pub extends: Option<String>,
}

impl ButtonVariant {
    pub fn new(style: impl Into<StyleMap>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }

    pub fn with_hover_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.hover_style = style.into();
        self
    }

    pub fn with_click_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.click_style = style.into();
        self
    }

    pub fn with_disabled_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.disabled_style = style.into();
        self
    }

    pub fn extending(mut self, variant: impl Into<String>) -> Self {
        self.extends = Some(variant.into());
        self
    }
}

impl Extends for ButtonVariant {
    fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }
}

/// Configuration of one button family.
///
/// Variant names starting with `.` are private: other variants may extend
/// them, but they cannot be selected on a rendered button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ButtonConfig {
    pub style: StyleMap,
    pub hover_style: StyleMap,
    pub click_style: StyleMap,
    pub disabled_style: StyleMap,
    pub variants: IndexMap<String, ButtonVariant>,
    /// Variant used when a render does not ask for one.
    pub default_variant: Option<String>,
    /// Padding around the loader while the button is loading.
    pub loader_padding: Option<String>,
}

impl ButtonConfig {
    pub fn new(style: impl Into<StyleMap>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }

    pub fn with_hover_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.hover_style = style.into();
        self
    }

    pub fn with_click_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.click_style = style.into();
        self
    }

    pub fn with_disabled_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.disabled_style = style.into();
        self
    }

    pub fn with_variant(mut self, name: impl Into<String>, variant: ButtonVariant) -> Self {
        self.variants.insert(name.into(), variant);
        self
    }

    pub fn with_default_variant(mut self, name: impl Into<String>) -> Self {
        self.default_variant = Some(name.into());
        self
    }

    pub fn with_loader_padding(mut self, padding: impl Into<String>) -> Self {
        self.loader_padding = Some(padding.into());
        self
    }
}

/// Builds the rule tree of a button family rooted at `.{class_name}`.
pub fn build(config: &ButtonConfig, class_name: &str) -> Result<(Stylesheet, GlideButton)> {
    let graph = resolve_variants(&config.variants)?;
    if let Some(default) = &config.default_variant {
        check_selectable(&graph, default)?;
    }

    let mut sheet = Stylesheet::new();
    let root = sheet.add_rule(
        format!(".{class_name}"),
        StyleMap::from([("position", "relative")]).merged(Some(&config.style)),
    )?;

    {
        let mut rule = sheet.rule(root)?;
        rule.add_rule("&:hover", &config.hover_style)?;
        rule.add_rule("&:active", &config.click_style)?;
        rule.add_rule("&:disabled", &config.disabled_style)?;
        rule.add_rule(".loading-wrap", StyleMap::from([("display", "none")]))?;
        rule.add_rule("&.loading .content", StyleMap::from([("visibility", "hidden")]))?;
        rule.add_rule(
            "&.loading .loading-wrap",
            StyleMap::new()
                .with("display", "flex")
                .with("position", "absolute")
                .with("inset", 0)
                .with("alignItems", "center")
                .with("justifyContent", "center")
                .with_opt("padding", config.loader_padding.as_deref()),
        )?;
    }

    for name in graph.build_order() {
        let selectors = graph.selectors(name);
        if selectors.is_empty() {
            debug!("Skipping variant `{name}` of {class_name}: no public variant uses it");
            continue;
        }
        let variant = &config.variants[name];
        let variant_rule = sheet.rule(root)?.add_rule(selectors, &variant.style)?;
        let mut rule = sheet.rule(variant_rule)?;
        rule.add_rule("&:hover", &variant.hover_style)?;
        rule.add_rule("&:active", &variant.click_style)?;
        rule.add_rule("&:disabled", &variant.disabled_style)?;
    }

    let button = GlideButton {
        class_name: class_name.to_string(),
        default_variant: config.default_variant.clone(),
        graph,
    };
    Ok((sheet, button))
}

/// A bound button family.
#[derive(Debug, Clone)]
pub struct GlideButton {
    class_name: String,
    default_variant: Option<String>,
    graph: VariantGraph,
}

impl GlideButton {
    /// The generated root class, e.g. `glide-button-1`.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn default_variant(&self) -> Option<&str> {
        self.default_variant.as_deref()
    }

    /// Variants a render may ask for.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.graph.public_names()
    }

    /// Class list of one rendered button.
    ///
    /// Only the `loading` state is a class; disabled buttons use the
    /// `disabled` attribute, which `&:disabled` rules match.
    pub fn class_list(
        &self,
        variant: Option<&str>,
        states: ComponentStates,
        extra: Option<&str>,
    ) -> Result<String> {
        let variant = select_variant(&self.graph, variant, self.default_variant.as_deref())?;
        let loading = states
            .intersection(ComponentStates::LOADING)
            .class_names();
        Ok(join_classes(
            [BUTTON_CLASS, self.class_name.as_str()]
                .into_iter()
                .chain(variant)
                .chain(extra)
                .chain(loading),
        ))
    }
}

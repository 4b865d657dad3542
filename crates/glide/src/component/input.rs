//! Text input factory.
//!
//! Expected markup:
//!
//! ```html
//! <div class="glide-input-1 outlined [error] [disabled]">
//!   <span class="input-label">Email</span>
//!   <div class="input-wrapper">
//!     <input class="input">
//!   </div>
//!   <span class="input-error">Required</span>
//! </div>
//! ```
//!
//! With [`LabelPosition::InsideTop`] the label sits inside `.input-wrapper`.

use gcss::{Extends, StyleMap, Stylesheet, VariantGraph, resolve_variants};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::component::{ComponentStates, check_selectable, join_classes, select_variant};
use crate::error::Result;

/// Where the label is placed relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPosition {
    /// Above the input.
    #[default]
    OutsideTop,
    /// Left of the input.
    OutsideLeft,
    /// Inside the wrapper, above the input text.
    InsideTop,
    /// Used as the input's placeholder; no label element is shown.
    Placeholder,
    None,
}

/// Styles of one input variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InputVariant {
    /// Style of the input wrapper.
    pub style: StyleMap,
    pub label_style: StyleMap,
    pub hover_style: StyleMap,
    pub focus_style: StyleMap,
    pub extends: Option<String>,
}

impl InputVariant {
    pub fn new(style: impl Into<StyleMap>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }

    pub fn with_label_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.label_style = style.into();
        self
    }

    pub fn with_hover_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.hover_style = style.into();
        self
    }

    pub fn with_focus_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.focus_style = style.into();
        self
    }

    pub fn extending(mut self, variant: impl Into<String>) -> Self {
        self.extends = Some(variant.into());
        self
    }
}

impl Extends for InputVariant {
    fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InputConfig {
    /// Classes always added to the root.
    pub class_name: Option<String>,
    /// Style of the input wrapper.
    pub style: StyleMap,
    /// Padding around the input element itself.
    pub input_padding: Option<String>,
    pub error_style: StyleMap,
    pub focus_style: StyleMap,
    pub hover_style: StyleMap,
    pub disabled_style: StyleMap,
    pub placeholder_style: StyleMap,
    pub label_position: LabelPosition,
    pub label_style: StyleMap,
    /// Gap between label and input. Ignored for `placeholder` and `none`.
    pub label_gap: Option<String>,
    pub error_text_style: StyleMap,
    /// Gap between the input and the error text.
    pub error_gap: Option<String>,
    pub variants: IndexMap<String, InputVariant>,
    pub default_variant: Option<String>,
}

impl InputConfig {
    pub fn new(style: impl Into<StyleMap>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, position: LabelPosition, style: impl Into<StyleMap>) -> Self {
        self.label_position = position;
        self.label_style = style.into();
        self
    }

    pub fn with_label_gap(mut self, gap: impl Into<String>) -> Self {
        self.label_gap = Some(gap.into());
        self
    }

    pub fn with_input_padding(mut self, padding: impl Into<String>) -> Self {
        self.input_padding = Some(padding.into());
        self
    }

    pub fn with_hover_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.hover_style = style.into();
        self
    }

    pub fn with_focus_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.focus_style = style.into();
        self
    }

    pub fn with_error_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.error_style = style.into();
        self
    }

    pub fn with_disabled_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.disabled_style = style.into();
        self
    }

    pub fn with_placeholder_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.placeholder_style = style.into();
        self
    }

    pub fn with_error_text(mut self, style: impl Into<StyleMap>, gap: Option<String>) -> Self {
        self.error_text_style = style.into();
        self.error_gap = gap;
        self
    }

    pub fn with_variant(mut self, name: impl Into<String>, variant: InputVariant) -> Self {
        self.variants.insert(name.into(), variant);
        self
    }

    pub fn with_default_variant(mut self, name: impl Into<String>) -> Self {
        self.default_variant = Some(name.into());
        self
    }
}

/// Builds the rule tree of an input family rooted at `.{class_name}`.
pub fn build(config: &InputConfig, class_name: &str) -> Result<(Stylesheet, GlideInput)> {
    let graph = resolve_variants(&config.variants)?;
    if let Some(default) = &config.default_variant {
        check_selectable(&graph, default)?;
    }

    let position = config.label_position;
    let label_hidden = matches!(position, LabelPosition::Placeholder | LabelPosition::None);

    let mut root_style = StyleMap::new().with("display", "flex");
    if position == LabelPosition::OutsideLeft {
        root_style.set("flexDirection", "row");
        root_style.set("alignItems", "center");
    } else {
        root_style.set("flexDirection", "column");
    }
    if !label_hidden && position != LabelPosition::InsideTop {
        root_style.set_opt("gap", config.label_gap.as_deref());
    }

    let mut sheet = Stylesheet::new();
    let root = sheet.add_rule(format!(".{class_name}"), root_style)?;

    let label_style = if label_hidden {
        StyleMap::from([("display", "none")])
    } else {
        config.label_style.clone()
    };
    sheet.rule(root)?.add_rule(".input-label", label_style)?;

    let mut wrapper_style = StyleMap::new().with("display", "flex");
    if position == LabelPosition::InsideTop {
        wrapper_style.set("flexDirection", "column");
        wrapper_style.set("alignItems", "stretch");
    } else {
        wrapper_style.set("alignItems", "center");
    }
    let wrapper = sheet
        .rule(root)?
        .add_rule(".input-wrapper", wrapper_style.merged(Some(&config.style)))?;

    let input = {
        let mut rule = sheet.rule(wrapper)?;
        rule.add_rule("&:hover", &config.hover_style)?;
        rule.add_rule("&:focus-within", &config.focus_style)?;
        rule.add_rule(
            ".input",
            StyleMap::new()
                .with("flex", 1)
                .with("minWidth", 0)
                .with("border", "none")
                .with("outline", "none")
                .with("background", "transparent")
                .with("font", "inherit")
                .with("color", "inherit")
                .with_opt("padding", config.input_padding.as_deref()),
        )?
    };
    sheet
        .rule(input)?
        .add_rule("&::placeholder", &config.placeholder_style)?;

    sheet.rule(root)?.add_rule(
        ".input-error",
        StyleMap::new()
            .with_opt("marginTop", config.error_gap.as_deref())
            .merged(Some(&config.error_text_style)),
    )?;

    for name in graph.build_order() {
        let selectors = graph.selectors(name);
        if selectors.is_empty() {
            debug!("Skipping variant `{name}` of {class_name}: no public variant uses it");
            continue;
        }
        let variant = &config.variants[name];
        let variant_rule = sheet.rule(root)?.add_rule(selectors, StyleMap::new())?;
        let variant_wrapper = {
            let mut rule = sheet.rule(variant_rule)?;
            rule.add_rule(".input-label", &variant.label_style)?;
            rule.add_rule(".input-wrapper", &variant.style)?
        };
        let mut rule = sheet.rule(variant_wrapper)?;
        rule.add_rule("&:hover", &variant.hover_style)?;
        rule.add_rule("&:focus-within", &variant.focus_style)?;
    }

    // State rules come last so they win over variant styles.
    {
        let mut rule = sheet.rule(root)?;
        rule.add_rule("&.error .input-wrapper", &config.error_style)?;
        rule.add_rule("&.disabled .input-wrapper", &config.disabled_style)?;
    }

    let input = GlideInput {
        class_name: class_name.to_string(),
        extra_class: config.class_name.clone(),
        default_variant: config.default_variant.clone(),
        label_position: position,
        graph,
    };
    Ok((sheet, input))
}

/// A bound input family.
#[derive(Debug, Clone)]
pub struct GlideInput {
    class_name: String,
    extra_class: Option<String>,
    default_variant: Option<String>,
    label_position: LabelPosition,
    graph: VariantGraph,
}

impl GlideInput {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn label_position(&self) -> LabelPosition {
        self.label_position
    }

    pub fn default_variant(&self) -> Option<&str> {
        self.default_variant.as_deref()
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.graph.public_names()
    }

    /// Whether the label should be passed as the input's placeholder.
    pub fn label_as_placeholder(&self) -> bool {
        self.label_position == LabelPosition::Placeholder
    }

    /// Class list of one rendered input root. `error` and `disabled` states
    /// become classes.
    pub fn class_list(
        &self,
        variant: Option<&str>,
        states: ComponentStates,
        extra: Option<&str>,
    ) -> Result<String> {
        let variant = select_variant(&self.graph, variant, self.default_variant.as_deref())?;
        let states = states
            .intersection(ComponentStates::ERROR | ComponentStates::DISABLED)
            .class_names();
        Ok(join_classes(
            [self.class_name.as_str()]
                .into_iter()
                .chain(self.extra_class.as_deref())
                .chain(variant)
                .chain(extra)
                .chain(states),
        ))
    }
}

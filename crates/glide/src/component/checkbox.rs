//! Checkbox factory.
//!
//! Expected markup:
//!
//! ```html
//! <div class="glide-checkbox-1 [error] [disabled] [checked]">
//!   <label class="label-wrapper">
//!     <input type="checkbox">
//!     <div class="checkbox"><div class="checkmark">...</div></div>
//!     <span>Accept terms</span>
//!   </label>
//!   <span class="input-error">...</span>
//! </div>
//! ```

use gcss::{StyleMap, Stylesheet};
use serde::{Deserialize, Serialize};

use crate::component::{ComponentStates, FlexAlignment, Side, join_classes};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CheckboxConfig {
    /// Style of the outer wrapper around checkbox, label and error text.
    pub wrapper_style: StyleMap,
    pub label_wrapper_style: StyleMap,
    /// Side of the checkbox the label is shown on.
    pub label_position: Side,
    pub label_gap: Option<String>,
    pub label_style: StyleMap,
    pub label_alignment: Option<FlexAlignment>,
    /// Style of the checkbox box itself.
    pub style: StyleMap,
    pub checkbox_alignment: Option<FlexAlignment>,
    pub checked_style: StyleMap,
    pub error_style: StyleMap,
    pub disabled_style: StyleMap,
    pub error_text_style: StyleMap,
    pub error_gap: Option<String>,
}

impl CheckboxConfig {
    pub fn new(style: impl Into<StyleMap>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }

    pub fn with_checked_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.checked_style = style.into();
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

    pub fn with_label(mut self, position: Side, style: impl Into<StyleMap>) -> Self {
        self.label_position = position;
        self.label_style = style.into();
        self
    }

    pub fn with_label_gap(mut self, gap: impl Into<String>) -> Self {
        self.label_gap = Some(gap.into());
        self
    }
}

pub fn build(config: &CheckboxConfig, class_name: &str) -> Result<(Stylesheet, GlideCheckbox)> {
    let mut sheet = Stylesheet::new();
    let root = sheet.add_rule(
        format!(".{class_name}"),
        StyleMap::new()
            .with("display", "flex")
            .with("flexDirection", "column")
            .with_opt("gap", config.error_gap.as_deref())
            .merged(Some(&config.wrapper_style)),
    )?;

    let label_direction = match config.label_position {
        Side::Left => "row-reverse",
        Side::Right => "row",
    };
    let label_wrapper = sheet.rule(root)?.add_rule(
        ".label-wrapper",
        StyleMap::new()
            .with("display", "flex")
            .with("flexDirection", label_direction)
            .with("flex", "1")
            .with_opt("gap", config.label_gap.as_deref())
            .merged(Some(&config.label_wrapper_style)),
    )?;

    let (input, checkbox) = {
        let mut rule = sheet.rule(label_wrapper)?;
        rule.add_rule(
            "span",
            StyleMap::new()
                .with_opt("alignSelf", config.label_alignment.map(FlexAlignment::as_str))
                .merged(Some(&config.label_style)),
        )?;
        let input = rule.add_rule("input", StyleMap::from([("display", "none")]))?;
        let checkbox = rule.add_rule(
            ".checkbox",
            StyleMap::new()
                .with_opt("alignSelf", config.checkbox_alignment.map(FlexAlignment::as_str))
                .with("display", "flex")
                .with("alignItems", "center")
                .with("justifyContent", "center")
                .with("flexShrink", 0)
                .merged(Some(&config.style)),
        )?;
        (input, checkbox)
    };

    sheet
        .rule(checkbox)?
        .add_rule(".checkmark", StyleMap::from([("display", "none")]))?;

    {
        let mut rule = sheet.rule(input)?;
        rule.add_rule("&:checked + div .checkmark", StyleMap::from([("display", "flex")]))?;
        rule.add_rule("&:checked + div.checkbox", &config.checked_style)?;
    }

    {
        let mut rule = sheet.rule(root)?;
        rule.add_rule(".input-error", &config.error_text_style)?;
        rule.add_rule("&.error .checkbox", &config.error_style)?;
        rule.add_rule("&.disabled .checkbox", &config.disabled_style)?;
        rule.add_rule("&.checked .checkbox", &config.checked_style)?;
    }

    let checkbox = GlideCheckbox {
        class_name: class_name.to_string(),
    };
    Ok((sheet, checkbox))
}

/// A bound checkbox family.
#[derive(Debug, Clone)]
pub struct GlideCheckbox {
    class_name: String,
}

impl GlideCheckbox {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn class_list(&self, states: ComponentStates, extra: Option<&str>) -> String {
        let states = states
            .intersection(ComponentStates::ERROR | ComponentStates::DISABLED | ComponentStates::CHECKED)
            .class_names();
        join_classes([self.class_name.as_str()].into_iter().chain(extra).chain(states))
    }
}

//! Choice factory: a checkbox or radio control with a custom indicator.
//!
//! Expected markup:
//!
//! ```html
//! <label class="glide-choice-1 [error] [disabled]">
//!   <input type="radio">
//!   <div class="choice-wrapper">
//!     <div class="label-wrapper">
//!       <div class="indicator">...</div>
//!       <span class="label">Option A</span>
//!     </div>
//!     <span class="input-error">...</span>   <!-- errorPosition: inside -->
//!   </div>
//!   <span class="input-error">...</span>     <!-- errorPosition: under -->
//! </label>
//! ```

use gcss::{StyleMap, Stylesheet};
use serde::{Deserialize, Serialize};

use crate::component::{ComponentStates, FlexAlignment, Side, join_classes};
use crate::error::Result;

/// Where the error text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPosition {
    /// Inside the choice wrapper, below the label.
    #[default]
    Inside,
    /// Below the whole control.
    Under,
}

/// The selection indicator. Without one, `.indicator` is hidden.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct IndicatorConfig {
    pub style: StyleMap,
    pub selected_style: StyleMap,
    pub error_style: StyleMap,
    pub disabled_style: StyleMap,
    pub alignment: Option<FlexAlignment>,
    /// Side of the indicator the children are shown on.
    pub children_position: Side,
}

impl IndicatorConfig {
    pub fn new(style: impl Into<StyleMap>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }

    pub fn with_selected_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.selected_style = style.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ChoiceConfig {
    pub wrapper_style: StyleMap,
    pub selected_wrapper_style: StyleMap,
    pub error_wrapper_style: StyleMap,
    pub disabled_wrapper_style: StyleMap,
    pub indicator: Option<IndicatorConfig>,
    pub error_text_style: StyleMap,
    pub children_gap: Option<String>,
    pub error_gap: Option<String>,
    pub children_vertical_alignment: Option<FlexAlignment>,
    pub children_horizontal_alignment: Option<FlexAlignment>,
    pub error_position: ErrorPosition,
}

impl ChoiceConfig {
    pub fn new(wrapper_style: impl Into<StyleMap>) -> Self {
        Self {
            wrapper_style: wrapper_style.into(),
            ..Self::default()
        }
    }

    pub fn with_indicator(mut self, indicator: IndicatorConfig) -> Self {
        self.indicator = Some(indicator);
        self
    }

    pub fn with_selected_wrapper_style(mut self, style: impl Into<StyleMap>) -> Self {
        self.selected_wrapper_style = style.into();
        self
    }

    pub fn with_error_position(mut self, position: ErrorPosition, gap: Option<String>) -> Self {
        self.error_position = position;
        self.error_gap = gap;
        self
    }
}

pub fn build(config: &ChoiceConfig, class_name: &str) -> Result<(Stylesheet, GlideChoice)> {
    let under = config.error_position == ErrorPosition::Under;

    let root_style = if under {
        StyleMap::new()
            .with("display", "flex")
            .with("flexDirection", "column")
            .with_opt("gap", config.error_gap.as_deref())
    } else {
        StyleMap::new()
    };

    let mut sheet = Stylesheet::new();
    let root = sheet.add_rule(format!(".{class_name}"), root_style)?;

    let (input, choice_wrapper) = {
        let mut rule = sheet.rule(root)?;
        let input = rule.add_rule("input", StyleMap::from([("display", "none")]))?;
        let choice_wrapper = rule.add_rule(
            ".choice-wrapper",
            StyleMap::new()
                .with("display", "flex")
                .with("flexDirection", "column")
                .with_opt("gap", config.error_gap.as_deref().filter(|_| !under))
                .merged(Some(&config.wrapper_style)),
        )?;
        (input, choice_wrapper)
    };

    let children_direction = match config.indicator.as_ref().map(|i| i.children_position) {
        Some(Side::Left) => "row-reverse",
        _ => "row",
    };
    let label_wrapper = sheet.rule(choice_wrapper)?.add_rule(
        ".label-wrapper",
        StyleMap::new()
            .with("display", "flex")
            .with_opt("gap", config.children_gap.as_deref())
            .with("flexDirection", children_direction),
    )?;

    sheet.rule(label_wrapper)?.add_rule(
        ".label",
        StyleMap::new()
            .with("display", "flex")
            .with_opt(
                "alignItems",
                config.children_vertical_alignment.map(FlexAlignment::as_str),
            )
            .with_opt(
                "justifyContent",
                config.children_horizontal_alignment.map(FlexAlignment::as_str),
            )
            .with("flex", 1),
    )?;
    sheet
        .rule(root)?
        .add_rule(".input-error", &config.error_text_style)?;

    sheet
        .rule(input)?
        .add_rule("&:checked + .choice-wrapper", &config.selected_wrapper_style)?;
    {
        let mut rule = sheet.rule(root)?;
        rule.add_rule("&.disabled .choice-wrapper", &config.disabled_wrapper_style)?;
        rule.add_rule("&.error .choice-wrapper", &config.error_wrapper_style)?;
    }

    match &config.indicator {
        Some(indicator) => {
            let indicator_rule = sheet.rule(label_wrapper)?.add_rule(
                ".indicator",
                StyleMap::new()
                    .with("display", "flex")
                    .with("alignItems", "center")
                    .with("justifyContent", "center")
                    .with("flexShrink", 0)
                    .with_opt("alignSelf", indicator.alignment.map(FlexAlignment::as_str))
                    .merged(Some(&indicator.style)),
            )?;
            sheet
                .rule(indicator_rule)?
                .add_rule(">*", StyleMap::from([("display", "none")]))?;

            let checked = sheet.rule(input)?.add_rule(
                "&:checked + .choice-wrapper .indicator",
                &indicator.selected_style,
            )?;
            sheet
                .rule(checked)?
                .add_rule(">*", StyleMap::from([("display", "flex")]))?;

            let mut rule = sheet.rule(root)?;
            rule.add_rule("&.disabled .indicator", &indicator.disabled_style)?;
            rule.add_rule("&.error .indicator", &indicator.error_style)?;
        }
        None => {
            sheet
                .rule(label_wrapper)?
                .add_rule(".indicator", StyleMap::from([("display", "none")]))?;
        }
    }

    let choice = GlideChoice {
        class_name: class_name.to_string(),
        error_position: config.error_position,
        has_indicator: config.indicator.is_some(),
    };
    Ok((sheet, choice))
}

/// A bound choice family.
#[derive(Debug, Clone)]
pub struct GlideChoice {
    class_name: String,
    error_position: ErrorPosition,
    has_indicator: bool,
}

impl GlideChoice {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn error_position(&self) -> ErrorPosition {
        self.error_position
    }

    /// Whether the markup should include the `.indicator` element.
    pub fn has_indicator(&self) -> bool {
        self.has_indicator
    }

    /// Class list of one rendered choice. Selection is read from the
    /// hidden input, so only `error` and `disabled` become classes.
    pub fn class_list(&self, states: ComponentStates, extra: Option<&str>) -> String {
        let states = states
            .intersection(ComponentStates::ERROR | ComponentStates::DISABLED)
            .class_names();
        join_classes([self.class_name.as_str()].into_iter().chain(extra).chain(states))
    }
}

//! Choice group factory: lays out a list of choices with a shared error.
//!
//! Expected markup:
//!
//! ```html
//! <div class="glide-choice-group-1">
//!   <div>...choices...</div>
//!   <span class="error">...</span>
//! </div>
//! ```

use gcss::{StyleMap, Stylesheet};
use serde::{Deserialize, Serialize};

use crate::component::join_classes;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ChoiceGroupConfig {
    pub error_style: StyleMap,
    pub error_gap: Option<String>,
}

pub fn build(config: &ChoiceGroupConfig, class_name: &str) -> Result<(Stylesheet, GlideChoiceGroup)> {
    let mut sheet = Stylesheet::new();
    let root = sheet.add_rule(
        format!(".{class_name}"),
        StyleMap::new()
            .with("display", "flex")
            .with("flexDirection", "column")
            .with_opt("gap", config.error_gap.as_deref()),
    )?;

    let mut rule = sheet.rule(root)?;
    rule.add_rule(
        ">div:first-child",
        StyleMap::new()
            .with("display", "flex")
            .with("flexDirection", "column"),
    )?;
    rule.add_rule(".error", &config.error_style)?;

    let group = GlideChoiceGroup {
        class_name: class_name.to_string(),
    };
    Ok((sheet, group))
}

/// A bound choice group family.
#[derive(Debug, Clone)]
pub struct GlideChoiceGroup {
    class_name: String,
}

impl GlideChoiceGroup {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Class list of the group root.
    pub fn class_list(&self, extra: Option<&str>) -> String {
        join_classes([self.class_name.as_str()].into_iter().chain(extra))
    }
}

//! The `Glide` instance: one document, one naming sequence.

use gcss::{StyleHost, Stylesheet};
use log::debug;
use serde::de::DeserializeOwned;

use crate::component::button::{self, ButtonConfig, GlideButton};
use crate::component::checkbox::{self, CheckboxConfig, GlideCheckbox};
use crate::component::choice::{self, ChoiceConfig, GlideChoice};
use crate::component::choice_group::{self, ChoiceGroupConfig, GlideChoiceGroup};
use crate::component::input::{self, GlideInput, InputConfig};
use crate::error::Result;
use crate::naming::{ComponentKind, NameSequence};

/// Creates component families and attaches their stylesheets to `host`.
///
/// Every `create_*` call validates the config, builds the rule tree under a
/// fresh class name and applies it exactly once. Configuration errors are
/// returned before anything is attached.
///
/// ```rust
/// use glide::{ButtonConfig, ButtonVariant, ComponentStates, Glide};
/// use gcss::{MemoryDocument, StyleMap};
///
/// let mut glide = Glide::new(MemoryDocument::new());
/// let button = glide
///     .create_button(
///         &ButtonConfig::new(StyleMap::from([("padding", "8px 16px")]))
///             .with_variant("primary", ButtonVariant::new(StyleMap::from([("background", "blue")])))
///             .with_default_variant("primary"),
///     )
///     .unwrap();
///
/// assert_eq!(button.class_name(), "glide-button-1");
/// assert_eq!(
///     button.class_list(None, ComponentStates::LOADING, None).unwrap(),
///     "glide-button glide-button-1 primary loading"
/// );
/// assert!(glide.host().to_css().contains(".glide-button-1.primary {"));
/// ```
#[derive(Debug)]
pub struct Glide<H: StyleHost> {
    host: H,
    names: NameSequence,
    debug: bool,
}

impl<H: StyleHost> Glide<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            names: NameSequence::new(),
            debug: false,
        }
    }

    /// Logs every rule tree at `debug` level before applying it.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn names(&self) -> &NameSequence {
        &self.names
    }

    pub fn create_button(&mut self, config: &ButtonConfig) -> Result<GlideButton> {
        let class_name = self.names.next(ComponentKind::Button);
        let (sheet, button) = button::build(config, &class_name)?;
        self.attach(&class_name, &sheet)?;
        Ok(button)
    }

    pub fn create_input(&mut self, config: &InputConfig) -> Result<GlideInput> {
        let class_name = self.names.next(ComponentKind::Input);
        let (sheet, input) = input::build(config, &class_name)?;
        self.attach(&class_name, &sheet)?;
        Ok(input)
    }

    pub fn create_checkbox(&mut self, config: &CheckboxConfig) -> Result<GlideCheckbox> {
        let class_name = self.names.next(ComponentKind::Checkbox);
        let (sheet, checkbox) = checkbox::build(config, &class_name)?;
        self.attach(&class_name, &sheet)?;
        Ok(checkbox)
    }

    pub fn create_choice(&mut self, config: &ChoiceConfig) -> Result<GlideChoice> {
        let class_name = self.names.next(ComponentKind::Choice);
        let (sheet, choice) = choice::build(config, &class_name)?;
        self.attach(&class_name, &sheet)?;
        Ok(choice)
    }

    pub fn create_choice_group(&mut self, config: &ChoiceGroupConfig) -> Result<GlideChoiceGroup> {
        let class_name = self.names.next(ComponentKind::ChoiceGroup);
        let (sheet, group) = choice_group::build(config, &class_name)?;
        self.attach(&class_name, &sheet)?;
        Ok(group)
    }

    pub fn button_from_json(&mut self, json: &str) -> Result<GlideButton> {
        self.create_button(&parse_config(json)?)
    }

    pub fn input_from_json(&mut self, json: &str) -> Result<GlideInput> {
        self.create_input(&parse_config(json)?)
    }

    pub fn checkbox_from_json(&mut self, json: &str) -> Result<GlideCheckbox> {
        self.create_checkbox(&parse_config(json)?)
    }

    pub fn choice_from_json(&mut self, json: &str) -> Result<GlideChoice> {
        self.create_choice(&parse_config(json)?)
    }

    pub fn choice_group_from_json(&mut self, json: &str) -> Result<GlideChoiceGroup> {
        self.create_choice_group(&parse_config(json)?)
    }

    fn attach(&mut self, class_name: &str, sheet: &Stylesheet) -> Result<()> {
        debug!("Attaching stylesheet for {class_name} ({} nodes)", sheet.len());
        if self.debug {
            sheet.apply_debug(&mut self.host)?;
        } else {
            sheet.apply(&mut self.host)?;
        }
        Ok(())
    }
}

fn parse_config<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

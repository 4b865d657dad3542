//! Checkbox, choice and choice group factories.

use gcss::{MemoryDocument, StyleMap};
use glide::{
    CheckboxConfig, ChoiceConfig, ChoiceGroupConfig, ComponentStates, ErrorPosition,
    FlexAlignment, Glide, IndicatorConfig, Side,
};

// ============================================================================
// Checkbox
// ============================================================================

#[test]
fn test_checkbox_stylesheet() {
    let config = CheckboxConfig::new(StyleMap::from([("width", "16px"), ("height", "16px")]))
        .with_checked_style(StyleMap::from([("background", "blue")]))
        .with_label(Side::Left, StyleMap::new())
        .with_label_gap("6px");

    let mut glide = Glide::new(MemoryDocument::new());
    glide.create_checkbox(&config).unwrap();

    insta::assert_snapshot!(glide.host().to_css(), @r"
    .glide-checkbox-1 {
      display: flex;
      flex-direction: column;
    }
    .glide-checkbox-1 .label-wrapper {
      display: flex;
      flex-direction: row-reverse;
      flex: 1;
      gap: 6px;
    }
    .glide-checkbox-1 .label-wrapper input {
      display: none;
    }
    .glide-checkbox-1 .label-wrapper input:checked + div .checkmark {
      display: flex;
    }
    .glide-checkbox-1 .label-wrapper input:checked + div.checkbox {
      background: blue;
    }
    .glide-checkbox-1 .label-wrapper .checkbox {
      display: flex;
      align-items: center;
      justify-content: center;
      flex-shrink: 0;
      width: 16px;
      height: 16px;
    }
    .glide-checkbox-1 .label-wrapper .checkbox .checkmark {
      display: none;
    }
    .glide-checkbox-1.checked .checkbox {
      background: blue;
    }
    ");
}

#[test]
fn test_checkbox_state_rules() {
    let config = CheckboxConfig::default()
        .with_error_style(StyleMap::from([("borderColor", "red")]))
        .with_disabled_style(StyleMap::from([("opacity", 0.4)]));
    let mut glide = Glide::new(MemoryDocument::new());
    let checkbox = glide.create_checkbox(&config).unwrap();
    let css = glide.host().to_css();

    assert!(css.contains(".glide-checkbox-1.error .checkbox {\n  border-color: red;\n}"));
    assert!(css.contains(".glide-checkbox-1.disabled .checkbox {\n  opacity: 0.4;\n}"));
    assert_eq!(
        checkbox.class_list(ComponentStates::all(), None),
        "glide-checkbox-1 error disabled checked"
    );
    assert_eq!(checkbox.class_list(ComponentStates::empty(), Some("terms")), "glide-checkbox-1 terms");
}

// ============================================================================
// Choice
// ============================================================================

#[test]
fn test_choice_with_indicator() {
    let config = ChoiceConfig::new(StyleMap::from([("padding", "4px")]))
        .with_selected_wrapper_style(StyleMap::from([("borderColor", "blue")]))
        .with_indicator(
            IndicatorConfig::new(StyleMap::from([("width", "12px")]))
                .with_selected_style(StyleMap::from([("background", "blue")])),
        );

    let mut glide = Glide::new(MemoryDocument::new());
    let choice = glide.create_choice(&config).unwrap();
    let css = glide.host().to_css();

    assert!(choice.has_indicator());
    assert!(css.contains(
        ".glide-choice-1 .choice-wrapper {\n  display: flex;\n  flex-direction: column;\n  padding: 4px;\n}"
    ));
    assert!(css.contains(".glide-choice-1 input:checked + .choice-wrapper {\n  border-color: blue;\n}"));
    assert!(css.contains(".glide-choice-1 .choice-wrapper .label-wrapper .indicator >* {\n  display: none;\n}"));
    assert!(css.contains(
        ".glide-choice-1 input:checked + .choice-wrapper .indicator {\n  background: blue;\n}"
    ));
    assert!(css.contains(
        ".glide-choice-1 input:checked + .choice-wrapper .indicator >* {\n  display: flex;\n}"
    ));
    assert!(css.contains("  width: 12px;\n}"));
}

#[test]
fn test_choice_without_indicator_hides_it() {
    let mut glide = Glide::new(MemoryDocument::new());
    let choice = glide.create_choice(&ChoiceConfig::default()).unwrap();

    assert!(!choice.has_indicator());
    assert!(glide.host().to_css().contains(
        ".glide-choice-1 .choice-wrapper .label-wrapper .indicator {\n  display: none;\n}"
    ));
}

#[test]
fn test_choice_error_position() {
    let mut glide = Glide::new(MemoryDocument::new());
    glide
        .create_choice(
            &ChoiceConfig::default().with_error_position(ErrorPosition::Inside, Some("2px".into())),
        )
        .unwrap();
    glide
        .create_choice(
            &ChoiceConfig::default().with_error_position(ErrorPosition::Under, Some("2px".into())),
        )
        .unwrap();
    let css = glide.host().to_css();

    assert!(css.contains(
        ".glide-choice-1 .choice-wrapper {\n  display: flex;\n  flex-direction: column;\n  gap: 2px;\n}"
    ));
    assert!(css.contains(
        ".glide-choice-2 {\n  display: flex;\n  flex-direction: column;\n  gap: 2px;\n}"
    ));
    assert!(css.contains(
        ".glide-choice-2 .choice-wrapper {\n  display: flex;\n  flex-direction: column;\n}"
    ));
}

#[test]
fn test_choice_children_alignment() {
    let config = ChoiceConfig {
        children_gap: Some("8px".to_string()),
        children_vertical_alignment: Some(FlexAlignment::Center),
        children_horizontal_alignment: Some(FlexAlignment::FlexEnd),
        indicator: Some(IndicatorConfig {
            children_position: Side::Left,
            ..IndicatorConfig::default()
        }),
        ..ChoiceConfig::default()
    };
    let mut glide = Glide::new(MemoryDocument::new());
    glide.create_choice(&config).unwrap();
    let css = glide.host().to_css();

    assert!(css.contains(
        ".glide-choice-1 .choice-wrapper .label-wrapper {\n  display: flex;\n  gap: 8px;\n  flex-direction: row-reverse;\n}"
    ));
    assert!(css.contains(
        ".glide-choice-1 .choice-wrapper .label-wrapper .label {\n  display: flex;\n  align-items: center;\n  justify-content: flex-end;\n  flex: 1;\n}"
    ));
}

#[test]
fn test_choice_class_list_ignores_checked() {
    let mut glide = Glide::new(MemoryDocument::new());
    let choice = glide.create_choice(&ChoiceConfig::default()).unwrap();

    assert_eq!(
        choice.class_list(ComponentStates::CHECKED | ComponentStates::ERROR, None),
        "glide-choice-1 error"
    );
}

#[test]
fn test_choice_json_config() {
    let json = r#"{
        "errorPosition": "under",
        "indicator": { "alignment": "center", "childrenPosition": "left" }
    }"#;
    let mut glide = Glide::new(MemoryDocument::new());
    let choice = glide.choice_from_json(json).unwrap();

    assert_eq!(choice.error_position(), ErrorPosition::Under);
    assert!(glide.host().to_css().contains("  align-self: center;\n}"));
}

// ============================================================================
// Choice group
// ============================================================================

#[test]
fn test_choice_group_stylesheet() {
    let config = ChoiceGroupConfig {
        error_style: StyleMap::from([("color", "red")]),
        error_gap: Some("4px".to_string()),
    };
    let mut glide = Glide::new(MemoryDocument::new());
    let group = glide.create_choice_group(&config).unwrap();

    insta::assert_snapshot!(glide.host().to_css(), @r"
    .glide-choice-group-1 {
      display: flex;
      flex-direction: column;
      gap: 4px;
    }
    .glide-choice-group-1 >div:first-child {
      display: flex;
      flex-direction: column;
    }
    .glide-choice-group-1 .error {
      color: red;
    }
    ");
    assert_eq!(group.class_list(Some("stacked")), "glide-choice-group-1 stacked");
}

//! Button factory tests: rule output, variant layering and class lists.

use gcss::{GcssError, MemoryDocument, StyleMap};
use glide::{ButtonConfig, ButtonVariant, ComponentStates, Glide, GlideError};

fn layered_config() -> ButtonConfig {
    ButtonConfig::new(StyleMap::from([("padding", "8px")]))
        .with_hover_style(StyleMap::from([("opacity", 0.9)]))
        .with_variant(".base", ButtonVariant::new(StyleMap::from([("color", "white")])))
        .with_variant(
            "primary",
            ButtonVariant::new(StyleMap::from([("background", "blue")]))
                .with_hover_style(StyleMap::from([("background", "navy")]))
                .extending(".base"),
        )
        .with_variant(
            "danger",
            ButtonVariant::new(StyleMap::from([("background", "red")])).extending("primary"),
        )
        .with_default_variant("primary")
}

#[test]
fn test_button_stylesheet() {
    let mut glide = Glide::new(MemoryDocument::new());
    glide.create_button(&layered_config()).unwrap();

    insta::assert_snapshot!(glide.host().to_css(), @r"
    .glide-button-1 {
      position: relative;
      padding: 8px;
    }
    .glide-button-1:hover {
      opacity: 0.9;
    }
    .glide-button-1 .loading-wrap {
      display: none;
    }
    .glide-button-1.loading .content {
      visibility: hidden;
    }
    .glide-button-1.loading .loading-wrap {
      display: flex;
      position: absolute;
      inset: 0;
      align-items: center;
      justify-content: center;
    }
    .glide-button-1.primary, .glide-button-1.danger {
      color: white;
    }
    .glide-button-1.primary, .glide-button-1.danger {
      background: blue;
    }
    .glide-button-1.primary:hover, .glide-button-1.danger:hover {
      background: navy;
    }
    .glide-button-1.danger {
      background: red;
    }
    ");
}

#[test]
fn test_variant_order_follows_extends_not_declaration() {
    let config = ButtonConfig::default()
        .with_variant(
            "danger",
            ButtonVariant::new(StyleMap::from([("background", "red")])).extending("primary"),
        )
        .with_variant("primary", ButtonVariant::new(StyleMap::from([("background", "blue")])));

    let mut glide = Glide::new(MemoryDocument::new());
    glide.create_button(&config).unwrap();
    let css = glide.host().to_css();

    let primary = css.find("background: blue;").unwrap();
    let danger = css.find("background: red;").unwrap();
    assert!(primary < danger, "base variant must render first:\n{css}");
    assert!(css.contains(".glide-button-1.danger, .glide-button-1.primary {\n  background: blue;"));
}

#[test]
fn test_loader_padding() {
    let config = ButtonConfig::default().with_loader_padding("4px");
    let mut glide = Glide::new(MemoryDocument::new());
    glide.create_button(&config).unwrap();

    assert!(glide.host().to_css().contains("  padding: 4px;\n}"));
}

#[test]
fn test_factories_get_distinct_roots() {
    let mut glide = Glide::new(MemoryDocument::new());
    let first = glide.create_button(&ButtonConfig::default()).unwrap();
    let second = glide.create_button(&ButtonConfig::default()).unwrap();

    assert_eq!(first.class_name(), "glide-button-1");
    assert_eq!(second.class_name(), "glide-button-2");
    assert_eq!(glide.host().sheets().len(), 2);
}

#[test]
fn test_class_list() {
    let mut glide = Glide::new(MemoryDocument::new());
    let button = glide.create_button(&layered_config()).unwrap();

    assert_eq!(
        button.class_list(None, ComponentStates::empty(), None).unwrap(),
        "glide-button glide-button-1 primary"
    );
    assert_eq!(
        button
            .class_list(
                Some("danger"),
                ComponentStates::LOADING | ComponentStates::DISABLED,
                Some("wide")
            )
            .unwrap(),
        "glide-button glide-button-1 danger wide loading"
    );
    assert!(matches!(
        button.class_list(Some(".base"), ComponentStates::empty(), None),
        Err(GlideError::PrivateVariant(name)) if name == ".base"
    ));
    assert!(matches!(
        button.class_list(Some("ghost"), ComponentStates::empty(), None),
        Err(GlideError::UnknownVariant(name)) if name == "ghost"
    ));
}

#[test]
fn test_cycle_fails_before_anything_is_attached() {
    let config = ButtonConfig::default()
        .with_variant("a", ButtonVariant::default().extending("b"))
        .with_variant("b", ButtonVariant::default().extending("a"));

    let mut glide = Glide::new(MemoryDocument::new());
    let err = glide.create_button(&config).unwrap_err();

    assert!(matches!(
        err,
        GlideError::Style(GcssError::ExtendsCycle { ref variant }) if variant == "a"
    ));
    assert!(glide.host().sheets().is_empty());
}

#[test]
fn test_unknown_extends_target() {
    let config =
        ButtonConfig::default().with_variant("a", ButtonVariant::default().extending("missing"));

    let mut glide = Glide::new(MemoryDocument::new());
    let err = glide.create_button(&config).unwrap_err();
    assert!(matches!(err, GlideError::Style(GcssError::UnknownExtends { .. })));
}

#[test]
fn test_private_default_variant_is_rejected() {
    let config = ButtonConfig::default()
        .with_variant(".base", ButtonVariant::default())
        .with_default_variant(".base");

    let mut glide = Glide::new(MemoryDocument::new());
    let err = glide.create_button(&config).unwrap_err();
    assert!(matches!(err, GlideError::PrivateVariant(_)));
    assert!(glide.host().sheets().is_empty());
}

#[test]
fn test_unused_private_variant_emits_nothing() {
    let config = ButtonConfig::default()
        .with_variant(".unused", ButtonVariant::new(StyleMap::from([("color", "pink")])))
        .with_variant("plain", ButtonVariant::new(StyleMap::from([("color", "gray")])));

    let mut glide = Glide::new(MemoryDocument::new());
    glide.create_button(&config).unwrap();
    let css = glide.host().to_css();
    assert!(!css.contains("pink"));
    assert!(css.contains(".glide-button-1.plain {\n  color: gray;\n}"));
}

#[test]
fn test_json_config_matches_builder() {
    let json = r#"{
        "style": { "padding": "8px" },
        "hoverStyle": { "opacity": 0.9 },
        "variants": {
            ".base": { "style": { "color": "white" } },
            "primary": {
                "extends": ".base",
                "style": { "background": "blue" },
                "hoverStyle": { "background": "navy" }
            },
            "danger": { "extends": "primary", "style": { "background": "red" } }
        },
        "defaultVariant": "primary"
    }"#;

    let mut from_json = Glide::new(MemoryDocument::new());
    from_json.button_from_json(json).unwrap();
    let mut from_builder = Glide::new(MemoryDocument::new());
    from_builder.create_button(&layered_config()).unwrap();

    assert_eq!(from_json.host().to_css(), from_builder.host().to_css());
}

#[test]
fn test_misspelled_keys_are_config_errors() {
    let json = r#"{
        "variants": {
            "primary": { "style": { "background": "blue" } },
            "danger": { "extend": "primary", "style": { "background": "red" } }
        }
    }"#;
    let mut glide = Glide::new(MemoryDocument::new());
    let err = glide.button_from_json(json).unwrap_err();
    assert!(matches!(err, GlideError::Config(_)));
    assert!(err.to_string().contains("extend"));

    let err = glide
        .button_from_json(r#"{ "hoverstyle": { "opacity": 0.9 } }"#)
        .unwrap_err();
    assert!(matches!(err, GlideError::Config(_)));
    assert!(glide.host().sheets().is_empty());
}

#[test]
fn test_malformed_json_is_a_config_error() {
    let mut glide = Glide::new(MemoryDocument::new());
    let err = glide.button_from_json(r#"{ "variants": 3 }"#).unwrap_err();
    assert!(matches!(err, GlideError::Config(_)));
}

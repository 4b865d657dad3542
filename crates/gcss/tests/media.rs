use gcss::{CssRule, GcssError, MediaExpression, MemoryDocument, StyleMap, Stylesheet};

#[test]
fn test_media_scope_wraps_children() {
    let mut sheet = Stylesheet::new();
    let media = sheet.add_media_rule([
        MediaExpression::min_width(600),
        MediaExpression::max_width(1200),
    ]);
    let mut scope = sheet.media(media).unwrap();
    scope
        .add_rule(".grid", StyleMap::from([("gridTemplateColumns", "1fr 1fr")]))
        .unwrap();

    let mut document = MemoryDocument::new();
    sheet.apply(&mut document).unwrap();

    insta::assert_snapshot!(document.to_css(), @r"
    @media screen and (min-width: 600px) and (max-width: 1200px) {
      .grid {
        grid-template-columns: 1fr 1fr;
      }
    }
    ");
}

#[test]
fn test_media_children_start_from_empty_context() {
    let mut sheet = Stylesheet::new();
    sheet.add_rule(".outer", StyleMap::from([("color", "red")])).unwrap();
    let media = sheet.add_media_rule([MediaExpression::max_width(600)]);
    let inner = sheet.media(media).unwrap().add_rule(".card", StyleMap::new()).unwrap();
    sheet
        .rule(inner)
        .unwrap()
        .add_rule("&:hover", StyleMap::from([("color", "blue")]))
        .unwrap();

    let mut document = MemoryDocument::new();
    sheet.apply(&mut document).unwrap();

    let rules = document.sheets()[0].rules();
    assert_eq!(rules.len(), 2);
    match &rules[1] {
        CssRule::Media { condition, rules } => {
            assert_eq!(condition, "screen and (max-width: 600px)");
            assert_eq!(rules.to_css(), ".card:hover {\n  color: blue;\n}");
        }
        other => panic!("expected a media group, got {other:?}"),
    }
}

#[test]
fn test_nesting_media_scope_fails_at_build_time() {
    let mut sheet = Stylesheet::new();
    let button = sheet.add_rule(".button", StyleMap::new()).unwrap();
    let hover = sheet.rule(button).unwrap().add_rule("&:hover", StyleMap::new()).unwrap();
    let media = sheet.add_media_rule([MediaExpression::max_width(600)]);

    let err = sheet.rule(hover).unwrap().nest(media).err();
    assert_eq!(
        err,
        Some(GcssError::NestedMediaRule {
            parents: "&:hover".into()
        })
    );

    // The media scope stays at the top level and still renders there.
    assert!(sheet.roots().contains(&media));
}

#[test]
fn test_nest_moves_top_level_rule() {
    let mut sheet = Stylesheet::new();
    let button = sheet.add_rule(".button", StyleMap::new()).unwrap();
    let label = sheet.add_rule(".label", StyleMap::from([("color", "red")])).unwrap();
    sheet.nest(button, label).unwrap();

    assert_eq!(sheet.roots(), [button]);
    let mut document = MemoryDocument::new();
    sheet.apply(&mut document).unwrap();
    assert_eq!(document.to_css(), ".button .label {\n  color: red;\n}");

    // A node cannot be nested twice or below itself.
    assert_eq!(sheet.nest(button, label), Err(GcssError::UnknownRule(label.index())));
    assert_eq!(sheet.nest(label, button), Err(GcssError::UnknownRule(label.index())));
}

#[test]
fn test_empty_media_scope_still_emits_group() {
    let mut sheet = Stylesheet::new();
    sheet.add_media_rule([MediaExpression::min_width(320)]);

    let mut document = MemoryDocument::new();
    sheet.apply(&mut document).unwrap();
    assert_eq!(document.to_css(), "@media screen and (min-width: 320px) {}");
}

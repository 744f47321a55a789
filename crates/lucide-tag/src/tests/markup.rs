use crate::markup::{NameExpr, ValueExpr, parse_markup};
use crate::{EmptyContext, JsonContext};
use serde_json::json;

#[test]
fn parses_double_quoted_name() {
    let parsed = parse_markup(r#""arrow-right""#);
    assert_eq!(parsed.name, NameExpr::Quoted("arrow-right".to_string()));
    assert!(parsed.options.is_empty());
}

#[test]
fn parses_single_quoted_name() {
    let parsed = parse_markup("'arrow-right'");
    assert_eq!(parsed.name, NameExpr::Quoted("arrow-right".to_string()));
}

#[test]
fn parses_bare_identifier_as_reference() {
    let parsed = parse_markup("icon_name");
    assert_eq!(parsed.name, NameExpr::Reference("icon_name".to_string()));
}

#[test]
fn parses_dotted_path_as_reference() {
    let parsed = parse_markup("page.icon");
    assert_eq!(parsed.name, NameExpr::Reference("page.icon".to_string()));
}

#[test]
fn empty_markup_yields_empty_name_and_no_options() {
    let parsed = parse_markup("");
    assert_eq!(parsed.name, NameExpr::Empty);
    assert!(parsed.options.is_empty());
    assert_eq!(parsed.icon_name(&EmptyContext), "");
}

#[test]
fn reference_resolves_through_context() {
    let ctx = JsonContext::new(json!({ "icon_name": "home" }));
    let parsed = parse_markup("icon_name");
    assert_eq!(parsed.icon_name(&ctx), "home");
}

#[test]
fn nested_reference_resolves_through_context() {
    let ctx = JsonContext::new(json!({ "page": { "icon": "search" } }));
    let parsed = parse_markup("page.icon");
    assert_eq!(parsed.icon_name(&ctx), "search");
}

#[test]
fn unresolved_reference_falls_back_to_literal_name() {
    let parsed = parse_markup("home");
    assert_eq!(parsed.icon_name(&EmptyContext), "home");
}

#[test]
fn interpolation_resolves_variable() {
    let ctx = JsonContext::new(json!({ "page": { "icon": "home" } }));
    let parsed = parse_markup("{{ page.icon }}");
    assert!(matches!(parsed.name, NameExpr::Interpolated(_)));
    assert_eq!(parsed.icon_name(&ctx), "home");
}

#[test]
fn interpolation_preserves_surrounding_literal_text() {
    let ctx = JsonContext::new(json!({ "kind": "arrow" }));
    let parsed = parse_markup("{{ kind }}-right");
    assert_eq!(parsed.icon_name(&ctx), "arrow-right");
}

#[test]
fn interpolation_ignores_filter_chain() {
    let ctx = JsonContext::new(json!({ "icon": "home" }));
    let parsed = parse_markup("{{ icon | upcase }}");
    assert_eq!(parsed.icon_name(&ctx), "home");
}

#[test]
fn unresolved_interpolation_segment_is_empty() {
    let parsed = parse_markup("{{ missing }}");
    assert_eq!(parsed.icon_name(&EmptyContext), "");
}

#[test]
fn scans_quoted_option_values() {
    let parsed = parse_markup(r#""home" class="my-icon" stroke='red'"#);
    assert_eq!(
        parsed.options,
        vec![
            (
                "class".to_string(),
                ValueExpr::Literal("my-icon".to_string())
            ),
            ("stroke".to_string(), ValueExpr::Literal("red".to_string())),
        ]
    );
}

#[test]
fn unescapes_only_the_matching_quote() {
    let parsed = parse_markup(r#""home" a="say \"hi\"" b='it\'s'"#);
    assert_eq!(
        parsed.options[0].1,
        ValueExpr::Literal(r#"say "hi""#.to_string())
    );
    assert_eq!(parsed.options[1].1, ValueExpr::Literal("it's".to_string()));
}

#[test]
fn scans_bare_tokens_as_variables() {
    let parsed = parse_markup(r#""home" size=icon_size"#);
    assert_eq!(
        parsed.options,
        vec![(
            "size".to_string(),
            ValueExpr::Variable("icon_size".to_string())
        )]
    );
}

#[test]
fn option_variable_resolves_and_unresolved_is_empty() {
    let ctx = JsonContext::new(json!({ "icon_size": 48 }));
    let parsed = parse_markup(r#""home" width=icon_size height=missing"#);
    let opts = parsed.evaluate_options(&ctx);
    assert_eq!(opts.get("width").map(String::as_str), Some("48"));
    assert_eq!(opts.get("height").map(String::as_str), Some(""));
}

#[test]
fn preserves_option_order() {
    let parsed = parse_markup(r#""home" c="3" a="1" b="2""#);
    let opts = parsed.evaluate_options(&EmptyContext);
    let keys: Vec<_> = opts.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["c", "a", "b"]);
}

#[test]
fn duplicate_key_keeps_first_position_with_later_value() {
    let parsed = parse_markup(r#""home" class="first" id="x" class="second""#);
    let opts = parsed.evaluate_options(&EmptyContext);
    let keys: Vec<_> = opts.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["class", "id"]);
    assert_eq!(opts.get("class").map(String::as_str), Some("second"));
}

#[test]
fn size_expands_to_width_and_height() {
    let parsed = parse_markup(r#""home" size="32""#);
    let opts = parsed.evaluate_options(&EmptyContext);
    assert!(opts.get("size").is_none());
    assert_eq!(opts.get("width").map(String::as_str), Some("32"));
    assert_eq!(opts.get("height").map(String::as_str), Some("32"));
}

#[test]
fn hyphenated_keys_are_accepted() {
    let parsed = parse_markup(r#""home" stroke-width="1.5""#);
    let opts = parsed.evaluate_options(&EmptyContext);
    assert_eq!(opts.get("stroke-width").map(String::as_str), Some("1.5"));
}

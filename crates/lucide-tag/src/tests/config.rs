use crate::SiteConfig;
use serde_json::json;

#[test]
fn custom_icons_dir_defaults_to_lucide() {
    assert_eq!(SiteConfig::empty_object().custom_icons_dir(), "_lucide");
}

#[test]
fn custom_icons_dir_reads_config_key() {
    let config = SiteConfig::from_value(json!({
        "lucide": { "custom_icons_dir": "_my_icons" }
    }));
    assert_eq!(config.custom_icons_dir(), "_my_icons");
}

#[test]
fn get_str_walks_dotted_paths() {
    let config = SiteConfig::from_value(json!({ "a": { "b": { "c": "deep" } } }));
    assert_eq!(config.get_str("a.b.c"), Some("deep"));
    assert_eq!(config.get_str("a.b.missing"), None);
    assert_eq!(config.get_str("a.b"), None);
}

#[test]
fn defaults_preserve_declaration_order() {
    let config = SiteConfig::from_value(json!({
        "lucide": { "defaults": { "class": "x", "stroke-width": "1", "id": "icon" } }
    }));
    let keys: Vec<_> = config.defaults().keys().cloned().collect();
    assert_eq!(keys, vec!["class", "stroke-width", "id"]);
}

#[test]
fn defaults_stringify_scalars_and_skip_composites() {
    let config = SiteConfig::from_value(json!({
        "lucide": {
            "defaults": {
                "stroke-width": 1.5,
                "focusable": false,
                "class": "x",
                "nested": { "not": "used" },
                "list": [1, 2]
            }
        }
    }));
    let defaults = config.defaults();
    assert_eq!(defaults.get("stroke-width").map(String::as_str), Some("1.5"));
    assert_eq!(defaults.get("focusable").map(String::as_str), Some("false"));
    assert_eq!(defaults.get("class").map(String::as_str), Some("x"));
    assert!(defaults.get("nested").is_none());
    assert!(defaults.get("list").is_none());
}

#[test]
fn missing_or_malformed_defaults_are_empty() {
    assert!(SiteConfig::empty_object().defaults().is_empty());
    let config = SiteConfig::from_value(json!({ "lucide": { "defaults": "nope" } }));
    assert!(config.defaults().is_empty());
    let config = SiteConfig::from_value(json!({ "lucide": null }));
    assert!(config.defaults().is_empty());
    let config = SiteConfig::from_value(json!("not even an object"));
    assert!(config.defaults().is_empty());
}

use crate::render::AttributeSet;
use serde_json::{Map, Value};

/// Directory (relative to the site source root) searched for custom icons
/// when `lucide.custom_icons_dir` is not configured.
pub const DEFAULT_CUSTOM_ICONS_DIR: &str = "_lucide";

/// Read-only view over the host site's configuration.
///
/// The host generator owns config file loading; this type only consumes the
/// already-loaded value. Everything is permissive: missing or wrongly-typed
/// keys behave like absent ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig(Value);

impl Default for SiteConfig {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl SiteConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        cur.as_str()
    }

    /// The custom icon directory name under the site source root
    /// (`lucide.custom_icons_dir`, default `_lucide`).
    pub fn custom_icons_dir(&self) -> &str {
        self.get_str("lucide.custom_icons_dir")
            .unwrap_or(DEFAULT_CUSTOM_ICONS_DIR)
    }

    /// The `lucide.defaults` mapping as an ordered attribute set.
    ///
    /// A missing or non-mapping value yields an empty set. Scalar values are
    /// stringified; nested arrays/objects are skipped.
    pub fn defaults(&self) -> AttributeSet {
        let mut out = AttributeSet::new();
        let Some(map) = self
            .0
            .get("lucide")
            .and_then(|v| v.get("defaults"))
            .and_then(Value::as_object)
        else {
            return out;
        };
        for (key, value) in map {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => continue,
            };
            out.insert(key.clone(), value);
        }
        out
    }
}

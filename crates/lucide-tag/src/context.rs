use serde_json::Value;

/// Variable lookup against the host's rendering context.
///
/// The host templating engine owns variable scoping and filters; this trait
/// is the only thing the parser and renderer see of it. `path` is a dotted
/// property path (`page.icon`).
pub trait ContextLookup {
    fn lookup(&self, path: &str) -> Option<String>;
}

/// A context with no variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContext;

impl ContextLookup for EmptyContext {
    fn lookup(&self, _path: &str) -> Option<String> {
        None
    }
}

/// Context backed by a JSON object, mainly for tests and embedding hosts
/// that already hold their variables as `serde_json::Value`.
#[derive(Debug, Clone, Default)]
pub struct JsonContext(Value);

impl JsonContext {
    pub fn new(value: Value) -> Self {
        Self(value)
    }
}

impl ContextLookup for JsonContext {
    fn lookup(&self, path: &str) -> Option<String> {
        let mut cur = &self.0;
        for segment in path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        match cur {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

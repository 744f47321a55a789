//! Parser for the inline markup of a single icon tag invocation.
//!
//! The markup is everything following the tag name:
//!
//! ```text
//! "home" size="32" class=page.icon_class
//! ```
//!
//! Parsing is pure; variable resolution happens in a separate evaluation
//! step against an injected [`ContextLookup`].

use crate::context::ContextLookup;
use crate::render::AttributeSet;
use regex::Regex;
use std::sync::OnceLock;

// Quoted values unescape only their own quote character; bare tokens are
// variable references.
fn option_syntax_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([\w-]+)\s*=\s*(?:"([^"\\]*(?:\\.[^"\\]*)*)"|'([^'\\]*(?:\\.[^'\\]*)*)'|([\w.-]+))"#)
            .expect("valid regex")
    })
}

fn name_syntax_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?P<variable>[^\{]*(?:\{\{\s*[\w\-.]+\s*(?:\|.*)?\}\}[^\s\{\}]*)+)|(?P<name>[\w.-]+)|(?P<quoted>"[^"]*"|'[^']*')"#,
        )
        .expect("valid regex")
    })
}

fn interpolation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([\w\-.]+)\s*(?:\|[^\}]*)?\}\}"#).expect("valid regex")
    })
}

/// The icon-name expression at the start of the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameExpr {
    /// Quoted literal, quotes stripped, inner content verbatim.
    Quoted(String),
    /// One or more `{{ ... }}` segments, optionally mixed with literal text.
    Interpolated(String),
    /// Bare identifier or dotted path; looked up as a variable first, used
    /// literally when unresolved.
    Reference(String),
    /// No parsable name token (resolution will fail downstream).
    Empty,
}

/// A raw option value as it appeared in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueExpr {
    Literal(String),
    Variable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMarkup {
    pub name: NameExpr,
    /// `key=value` pairs in order of appearance.
    pub options: Vec<(String, ValueExpr)>,
}

pub fn parse_markup(markup: &str) -> ParsedMarkup {
    let markup = markup.trim();
    ParsedMarkup {
        name: parse_name(markup),
        options: parse_options(markup),
    }
}

fn parse_name(markup: &str) -> NameExpr {
    let Some(caps) = name_syntax_regex().captures(markup) else {
        return NameExpr::Empty;
    };

    if let Some(quoted) = caps.name("quoted") {
        let quoted = quoted.as_str();
        let inner = quoted.strip_prefix(['"', '\'']).unwrap_or(quoted);
        let inner = inner.strip_suffix(['"', '\'']).unwrap_or(inner);
        NameExpr::Quoted(inner.to_string())
    } else if let Some(variable) = caps.name("variable") {
        NameExpr::Interpolated(variable.as_str().to_string())
    } else if let Some(name) = caps.name("name") {
        NameExpr::Reference(name.as_str().to_string())
    } else {
        NameExpr::Empty
    }
}

fn parse_options(markup: &str) -> Vec<(String, ValueExpr)> {
    let mut options = Vec::new();
    for caps in option_syntax_regex().captures_iter(markup) {
        let key = caps[1].to_string();
        let value = if let Some(d_quoted) = caps.get(2) {
            ValueExpr::Literal(d_quoted.as_str().replace("\\\"", "\""))
        } else if let Some(s_quoted) = caps.get(3) {
            ValueExpr::Literal(s_quoted.as_str().replace("\\'", "'"))
        } else if let Some(variable) = caps.get(4) {
            ValueExpr::Variable(variable.as_str().to_string())
        } else {
            ValueExpr::Literal(String::new())
        };
        options.push((key, value));
    }
    options
}

impl ParsedMarkup {
    /// Resolves the icon-name expression against the rendering context.
    pub fn icon_name(&self, ctx: &dyn ContextLookup) -> String {
        match &self.name {
            NameExpr::Quoted(name) => name.clone(),
            NameExpr::Interpolated(raw) => eval_interpolation(raw, ctx),
            NameExpr::Reference(path) => {
                ctx.lookup(path).unwrap_or_else(|| path.clone())
            }
            NameExpr::Empty => String::new(),
        }
    }

    /// Resolves option values against the rendering context and applies the
    /// `size` → `width`/`height` rewrite.
    ///
    /// Duplicate keys keep their first position with the later value, and an
    /// unresolved variable value stringifies to an empty string.
    pub fn evaluate_options(&self, ctx: &dyn ContextLookup) -> AttributeSet {
        let mut out = AttributeSet::new();
        for (key, value) in &self.options {
            let value = match value {
                ValueExpr::Literal(s) => s.clone(),
                ValueExpr::Variable(path) => ctx.lookup(path).unwrap_or_default(),
            };
            out.insert(key.clone(), value);
        }

        // `size` is not a real SVG attribute; it expands to both dimensions
        // before the renderer merges the layers.
        if let Some(size) = out.shift_remove("size") {
            out.insert("width".to_string(), size.clone());
            out.insert("height".to_string(), size);
        }

        out
    }
}

/// Evaluates an interpolation run: each `{{ path | filters }}` segment is
/// replaced by the context value of `path` (empty when unresolved), literal
/// text around segments is preserved. Filter chains belong to the host
/// engine and are ignored here.
fn eval_interpolation(raw: &str, ctx: &dyn ContextLookup) -> String {
    interpolation_regex()
        .replace_all(raw, |caps: &regex::Captures| {
            ctx.lookup(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}

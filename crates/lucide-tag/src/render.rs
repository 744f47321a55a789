use crate::config::SiteConfig;
use crate::context::ContextLookup;
use crate::icons::{IconSource, ResolvedIcon, resolve_icon};
use crate::markup::parse_markup;
use crate::Result;
use indexmap::IndexMap;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Ordered attribute-name → attribute-value mapping. Insertion order fixes
/// an attribute's position; later merge layers overwrite values in place.
pub type AttributeSet = IndexMap<String, String>;

/// Applied to every icon regardless of source.
const BASE_ATTRS: &[(&str, &str)] = &[
    ("aria-hidden", "true"),
    ("width", "24"),
    ("height", "24"),
    ("viewBox", "0 0 24 24"),
];

/// Lucide's stroke-based presentation defaults; bundled icons only. Custom
/// icons define their own fill/stroke via inner markup or explicit
/// overrides.
const STROKE_ATTRS: &[(&str, &str)] = &[
    ("fill", "none"),
    ("stroke", "currentColor"),
    ("stroke-width", "2"),
    ("stroke-linecap", "round"),
    ("stroke-linejoin", "round"),
];

/// Renders icon tag invocations for one site build.
///
/// Holds only read-only state (site config, source root); renders are
/// independent and may run in parallel from the host's point of view.
#[derive(Debug, Clone)]
pub struct Renderer {
    site_config: SiteConfig,
    source_root: PathBuf,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            site_config: SiteConfig::empty_object(),
            source_root: PathBuf::from("."),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site_config(mut self, site_config: SiteConfig) -> Self {
        self.site_config = site_config;
        self
    }

    /// Sets the site source root that the custom icon directory is resolved
    /// against. Defaults to the current directory.
    pub fn with_source_root(mut self, source_root: impl Into<PathBuf>) -> Self {
        self.source_root = source_root.into();
        self
    }

    pub fn site_config(&self) -> &SiteConfig {
        &self.site_config
    }

    /// Renders one tag invocation to an `<svg>` element.
    ///
    /// `markup` is the raw text following the tag name; `ctx` resolves
    /// variable references. Fails with [`crate::Error::IconNotFound`] when
    /// the name resolves in neither the custom directory nor the bundled
    /// set; the output is never a partially-built string.
    pub fn render(&self, markup: &str, ctx: &dyn ContextLookup) -> Result<String> {
        let parsed = parse_markup(markup);
        let name = parsed.icon_name(ctx);
        let overrides = parsed.evaluate_options(ctx);

        let icon = resolve_icon(&name, &self.custom_icons_dir())?;
        let attrs = self.merge_attributes(icon.source, overrides);
        Ok(build_svg(&icon.body, &attrs))
    }

    /// Resolves an icon name to its body and source with the same
    /// precedence `render` uses (custom directory first, then bundled).
    pub fn resolve(&self, name: &str) -> Result<ResolvedIcon> {
        resolve_icon(name, &self.custom_icons_dir())
    }

    fn custom_icons_dir(&self) -> PathBuf {
        self.source_root.join(self.site_config.custom_icons_dir())
    }

    /// base → site-config defaults → per-use overrides; later layers fully
    /// overwrite same-keyed values, first insertion wins position.
    fn merge_attributes(&self, source: IconSource, overrides: AttributeSet) -> AttributeSet {
        let mut attrs = AttributeSet::new();
        for (key, value) in BASE_ATTRS {
            attrs.insert((*key).to_string(), (*value).to_string());
        }
        if source == IconSource::Bundled {
            for (key, value) in STROKE_ATTRS {
                attrs.insert((*key).to_string(), (*value).to_string());
            }
        }
        for (key, value) in self.site_config.defaults() {
            attrs.insert(key, value);
        }
        for (key, value) in overrides {
            attrs.insert(key, value);
        }
        attrs
    }
}

fn build_svg(inner: &str, attrs: &AttributeSet) -> String {
    let mut out = String::with_capacity(inner.len() + 128);
    out.push_str("<svg");
    for (key, value) in attrs {
        let _ = write!(&mut out, r#" {key}="{}""#, escape_attr(value));
    }
    out.push('>');
    out.push_str(inner);
    out.push_str("</svg>");
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

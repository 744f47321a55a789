#![forbid(unsafe_code)]

//! Lucide icon template tag for static site generators.
//!
//! The host engine hands [`Renderer::render`] the raw markup of one tag
//! invocation (`"home" size="32" class=page.icon_class`) together with a
//! [`ContextLookup`] for variable resolution, and gets back a complete
//! `<svg>` element. Icon bodies come from the site's custom icon directory
//! first (default `_lucide`), then from the bundled set; attribute values
//! are layered base → `lucide.defaults` site config → per-use overrides.
//!
//! The [`install`] module is the core of the companion CLI: it reduces a
//! standalone SVG file to the inner-content fragment convention the
//! renderer expects.

mod bundled;
pub mod config;
pub mod context;
pub mod error;
pub mod icons;
pub mod install;
pub mod markup;
mod render;

pub use config::{DEFAULT_CUSTOM_ICONS_DIR, SiteConfig};
pub use context::{ContextLookup, EmptyContext, JsonContext};
pub use error::{Error, Result};
pub use icons::{IconSource, ResolvedIcon};
pub use install::{extract_inner_svg, install_icon};
pub use markup::{NameExpr, ParsedMarkup, ValueExpr, parse_markup};
pub use render::{AttributeSet, Renderer};

#[cfg(test)]
mod tests;

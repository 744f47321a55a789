use crate::bundled::bundled_icon;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Where a resolved icon body came from. The source decides which base
/// attribute layer applies: custom icons get the minimal viewport-only set
/// so their inner markup keeps its own fill/stroke semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    Custom,
    Bundled,
}

#[derive(Debug, Clone)]
pub struct ResolvedIcon {
    pub source: IconSource,
    pub body: String,
}

/// Resolves an icon name to its inner SVG body.
///
/// The custom directory is checked first and wins on name collision; bodies
/// are never merged across sources. A miss in both sources is terminal for
/// the render.
pub(crate) fn resolve_icon(name: &str, custom_dir: &Path) -> Result<ResolvedIcon> {
    let custom_path = custom_dir.join(format!("{name}.svg"));
    if custom_path.exists() {
        tracing::debug!(icon = name, path = %custom_path.display(), "using custom icon");
        let body = fs::read_to_string(&custom_path).map_err(|source| Error::Io {
            path: custom_path,
            source,
        })?;
        return Ok(ResolvedIcon {
            source: IconSource::Custom,
            body,
        });
    }

    if let Some(body) = bundled_icon(name) {
        tracing::debug!(icon = name, "using bundled icon");
        return Ok(ResolvedIcon {
            source: IconSource::Bundled,
            body: body.to_string(),
        });
    }

    tracing::debug!(icon = name, "icon not found in custom or bundled sources");
    Err(Error::IconNotFound {
        name: name.to_string(),
    })
}

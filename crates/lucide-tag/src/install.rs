//! Installer core: converts a standalone SVG file into an inner-content
//! fragment under the custom-icon directory convention.

use crate::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn svg_span_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy: spans from the first opening tag to the last closing tag.
    RE.get_or_init(|| Regex::new(r"(?s)<svg[^>]*>(.*)</svg>").expect("valid regex"))
}

fn newline_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\n\s*").expect("valid regex"))
}

/// Extracts the inner markup of the first `<svg ...> ... </svg>` span.
///
/// Attributes on the opening tag are discarded. Whitespace runs containing a
/// newline are deleted entirely (inter-tag indentation), and the result is
/// trimmed; intra-line whitespace inside attribute values survives because
/// quoting is preserved verbatim. Returns `None` when no span exists.
pub fn extract_inner_svg(content: &str) -> Option<String> {
    let caps = svg_span_regex().captures(content)?;
    let inner = newline_run_regex().replace_all(caps.get(1)?.as_str(), "");
    Some(inner.trim().to_string())
}

/// Installs `source` as `<out_dir>/<name>.svg` holding inner content only.
///
/// `name` defaults to the source file name minus a `.svg` suffix. The
/// output directory is created recursively; an existing file of the same
/// name is overwritten. Nothing is written unless extraction succeeds.
/// Returns the written path; reporting is the caller's concern.
pub fn install_icon(source: &Path, out_dir: &Path, name: Option<&str>) -> Result<PathBuf> {
    if !source.exists() {
        return Err(Error::FileNotFound {
            path: source.to_path_buf(),
        });
    }

    let content = fs::read_to_string(source).map_err(|err| Error::Io {
        path: source.to_path_buf(),
        source: err,
    })?;

    let inner = extract_inner_svg(&content).ok_or_else(|| Error::MalformedSvg {
        path: source.to_path_buf(),
    })?;

    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.unwrap_or_else(|| file_name.strip_suffix(".svg").unwrap_or(&file_name));

    let out_path = out_dir.join(format!("{stem}.svg"));
    fs::create_dir_all(out_dir).map_err(|err| Error::Io {
        path: out_dir.to_path_buf(),
        source: err,
    })?;
    fs::write(&out_path, &inner).map_err(|err| Error::Io {
        path: out_path.clone(),
        source: err,
    })?;

    tracing::debug!(source = %source.display(), out = %out_path.display(), "installed icon");
    Ok(out_path)
}

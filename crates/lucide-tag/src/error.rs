use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown lucide icon '{name}'")]
    IconNotFound { name: String },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("no <svg> tags found in {}", path.display())]
    MalformedSvg { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the asset tree or decoding an image
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("folder not found: {}", .path.display())]
    MissingFolder { path: PathBuf },

    #[error("no images in {}", .path.display())]
    NoImages { path: PathBuf },

    #[error("No cups found")]
    NoCups { path: PathBuf },

    #[error("No courses found")]
    NoCourses { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    /// Wrap an I/O error, promoting `NotFound` to `MissingFolder`
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            AssetError::MissingFolder { path }
        } else {
            AssetError::Io { path, source }
        }
    }

    /// The I/O error kind this failure corresponds to
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AssetError::MissingFolder { .. } => io::ErrorKind::NotFound,
            AssetError::Io { source, .. } => source.kind(),
            AssetError::NoImages { .. }
            | AssetError::NoCups { .. }
            | AssetError::NoCourses { .. }
            | AssetError::Decode { .. } => io::ErrorKind::InvalidData,
        }
    }
}

/// Failures while loading `config.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("scale must be between 0.25 and 4.0, got {0}")]
    InvalidScale(f32),
}

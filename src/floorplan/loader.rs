//! Layout Document Loading
//!
//! Reads `LayoutData` JSON produced by the host application.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::LayoutData;

/// Why a layout document could not be used
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("venue must have a finite, positive width and length (got {width} x {length})")]
    InvalidVenue { width: f32, length: f32 },
}

/// Parse a layout document from a JSON string
pub fn parse_layout(source: &str) -> Result<LayoutData, LoadError> {
    let layout: LayoutData = serde_json::from_str(source)?;
    if !layout.venue.is_valid() {
        return Err(LoadError::InvalidVenue {
            width: layout.venue.width,
            length: layout.venue.length,
        });
    }
    log::debug!(
        "Parsed layout: {} x {} {} with {} objects",
        layout.venue.width,
        layout.venue.length,
        layout.venue.unit,
        layout.objects.len()
    );
    Ok(layout)
}

/// Read and parse a layout document from disk
pub fn load_layout(path: &Path) -> Result<LayoutData, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let layout = parse_layout(&content)?;
    log::info!("Loaded floor plan {} ({} objects)", path.display(), layout.objects.len());
    Ok(layout)
}

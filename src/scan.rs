//! Theme repository scanning and manifest generation.
//!
//! Stage 1 of the gallery pipeline. Enumerates the immediate subdirectories
//! of the unpacked-themes root, parses each theme's `metadata.xml`, and
//! produces a [`Manifest`] for the render stage.
//!
//! ## Directory Structure
//!
//! ```text
//! unpacked/                    # Scan root (config.root)
//! ├── emergence/               # One theme per subdirectory
//! │   ├── metadata.xml         # Required descriptor
//! │   └── ...                  # Theme payload (ignored by the scanner)
//! ├── livecd-2006.1/
//! │   └── metadata.xml
//! └── README                   # Non-directories are ignored
//! ```
//!
//! The theme id is exactly the subdirectory base name: it keys the screenshot
//! filenames and the download archive stem. Ids are unique by directory
//! listing semantics and sorted ascending lexicographically — the only
//! ordering guarantee, and the gallery row order.
//!
//! ## Error Policy
//!
//! - Missing, unreadable, or malformed `metadata.xml`: the theme is skipped.
//!   It contributes no gallery row and no diagnostic on the render path, but
//!   is recorded in [`Manifest::skipped`] for the `check` command.
//! - A well-formed descriptor missing a required field: the whole scan aborts
//!   with [`ScanError::InvalidDescriptor`]. See the module docs in
//!   [`crate::metadata`] for the rationale behind the split.
//!
//! The scanner also resolves the one piece of per-theme filesystem state the
//! renderer needs: whether the decorated screenshot variant exists.

use crate::config::GalleryConfig;
use crate::metadata::{MetadataError, ThemeDescriptor};
use crate::paths::ThemePaths;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("theme '{theme}': {source}")]
    InvalidDescriptor {
        theme: String,
        #[source]
        source: MetadataError,
    },
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Valid themes in ascending lexicographic id order.
    pub themes: Vec<Theme>,
    /// Themes dropped by the skip policy, with the reason. Consumed by the
    /// `check` and `scan` commands only; the renderer never sees these.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<Skipped>,
    /// The configuration the scan ran under.
    pub config: GalleryConfig,
}

/// One valid theme: its id, descriptor fields, and decorated-variant state.
#[derive(Debug, Serialize)]
pub struct Theme {
    /// Subdirectory base name; also the archive filename stem.
    pub id: String,
    #[serde(flatten)]
    pub descriptor: ThemeDescriptor,
    /// Whether the decorated screenshot exists on disk at scan time. Gates
    /// the decorated fragment in the gallery row.
    pub decorated: bool,
}

/// A theme dropped by the skip policy.
#[derive(Debug, Serialize)]
pub struct Skipped {
    pub id: String,
    pub reason: String,
}

/// Scan the unpacked-themes root into a manifest.
pub fn scan(config: &GalleryConfig) -> Result<Manifest, ScanError> {
    let root = Path::new(&config.root);
    let ids = collect_theme_ids(root)?;

    let mut themes = Vec::new();
    let mut skipped = Vec::new();

    for id in ids {
        let descriptor = match ThemeDescriptor::read(&root.join(&id)) {
            Ok(d) => d,
            Err(e) if e.is_skippable() => {
                skipped.push(Skipped {
                    id,
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => {
                return Err(ScanError::InvalidDescriptor {
                    theme: id,
                    source: e,
                });
            }
        };

        // Existence check resolves against the working directory, the same
        // base the emitted relative URLs assume. Check failure means absent.
        let decorated = Path::new(&ThemePaths::for_theme(config, &id).decorated_screenshot)
            .exists();

        themes.push(Theme {
            id,
            descriptor,
            decorated,
        });
    }

    Ok(Manifest {
        themes,
        skipped,
        config: config.clone(),
    })
}

/// List the immediate subdirectories of `root`, sorted ascending
/// lexicographically. Non-directories are ignored.
fn collect_theme_ids(root: &Path) -> Result<Vec<String>, ScanError> {
    let mut ids: Vec<String> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    ids.sort();
    Ok(ids)
}

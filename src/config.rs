//! Gallery configuration module.
//!
//! Handles loading and validating `gallery.toml`. Screenshot sizes and the
//! `../themes/` asset prefix are explicit configuration; the stock defaults
//! reproduce the classic fbsplash repository layout, so running with no
//! config file needs no setup at all.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! root = "unpacked"            # Directory of unpacked theme packages
//! themes_prefix = "../themes"  # Prefix for screenshot and archive URLs
//!
//! [shots]
//! full_size = "1024x768"       # Full screenshot dimensions (WxH)
//! thumb_size = "300x225"       # Thumbnail dimensions (WxH)
//! decor_tag = "fbcondecor"     # Filename tag for the decorated variant
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the thumbnail size
//! [shots]
//! thumb_size = "200x150"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default directory of unpacked theme packages, relative to the working
/// directory.
pub const DEFAULT_ROOT: &str = "unpacked";

/// Default URL prefix for screenshots and archives in the emitted HTML.
pub const DEFAULT_THEMES_PREFIX: &str = "../themes";

/// Default full screenshot dimensions.
pub const DEFAULT_FULL_SIZE: &str = "1024x768";

/// Default thumbnail dimensions.
pub const DEFAULT_THUMB_SIZE: &str = "300x225";

/// Default filename tag for the decorated (fbcondecor) screenshot variant.
pub const DEFAULT_DECOR_TAG: &str = "fbcondecor";

/// Gallery configuration loaded from `gallery.toml`.
///
/// All fields have stock defaults matching the classic fbsplash layout. User
/// config files need only specify the values they want to override. Unknown
/// keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Directory of unpacked theme packages, relative to the working directory.
    pub root: String,
    /// URL prefix for screenshot and archive links in the emitted HTML. Also
    /// the base for the decorated-screenshot existence check, resolved against
    /// the working directory, the same base the emitted relative URLs assume.
    pub themes_prefix: String,
    /// Screenshot naming settings.
    pub shots: ShotsConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            themes_prefix: DEFAULT_THEMES_PREFIX.to_string(),
            shots: ShotsConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.is_empty() {
            return Err(ConfigError::Validation("root must not be empty".into()));
        }
        if self.themes_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "themes_prefix must not be empty".into(),
            ));
        }
        if self.shots.decor_tag.is_empty() {
            return Err(ConfigError::Validation(
                "shots.decor_tag must not be empty".into(),
            ));
        }
        for (key, value) in [
            ("shots.full_size", &self.shots.full_size),
            ("shots.thumb_size", &self.shots.thumb_size),
        ] {
            if !is_dimension_string(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be WxH (e.g. \"1024x768\"), got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Screenshot naming settings embedded in asset filenames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShotsConfig {
    /// Full screenshot dimensions as `WxH` (e.g. `"1024x768"`).
    pub full_size: String,
    /// Thumbnail dimensions as `WxH` (e.g. `"300x225"`).
    pub thumb_size: String,
    /// Filename tag inserted before the extension for the decorated variant.
    pub decor_tag: String,
}

impl Default for ShotsConfig {
    fn default() -> Self {
        Self {
            full_size: DEFAULT_FULL_SIZE.to_string(),
            thumb_size: DEFAULT_THUMB_SIZE.to_string(),
            decor_tag: DEFAULT_DECOR_TAG.to_string(),
        }
    }
}

/// Check a `WxH` dimension string: two non-zero decimal parts joined by `x`.
fn is_dimension_string(s: &str) -> bool {
    match s.split_once('x') {
        Some((w, h)) => {
            matches!(w.parse::<u32>(), Ok(n) if n > 0) && matches!(h.parse::<u32>(), Ok(n) if n > 0)
        }
        None => false,
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `gallery.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `gallery.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("gallery.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `gallery.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. Uses pure defaults if no file exists.
pub fn load_config(dir: &Path) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `gallery.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Splash Gallery Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults, which reproduce the classic
# fbsplash theme repository layout.
#
# Unknown keys will cause an error.

# Directory of unpacked theme packages, relative to the working directory.
# Each immediate subdirectory is one theme; its name is the theme id used
# in screenshot filenames and the download archive name.
root = "unpacked"

# URL prefix for screenshot and archive links in the emitted HTML. The
# decorated-screenshot existence check resolves this prefix against the
# working directory, matching where the generated page is served from.
themes_prefix = "../themes"

# ---------------------------------------------------------------------------
# Screenshot naming
# ---------------------------------------------------------------------------
[shots]
# Full screenshot dimensions, embedded in the PNG filename (WxH).
full_size = "1024x768"

# Thumbnail dimensions, embedded in the JPG filename (WxH).
thumb_size = "300x225"

# Filename tag inserted before the extension for the decorated variant,
# e.g. 1024x768-slate-fbcondecor.png. Themes without this file simply
# don't get the decorated fragment in their gallery row.
decor_tag = "fbcondecor"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_classic_layout() {
        let config = GalleryConfig::default();
        assert_eq!(config.root, "unpacked");
        assert_eq!(config.themes_prefix, "../themes");
        assert_eq!(config.shots.full_size, "1024x768");
        assert_eq!(config.shots.thumb_size, "300x225");
        assert_eq!(config.shots.decor_tag, "fbcondecor");
    }

    #[test]
    fn defaults_validate() {
        GalleryConfig::default().validate().unwrap();
    }

    #[test]
    fn load_config_uses_defaults_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.shots.full_size, "1024x768");
    }

    #[test]
    fn partial_config_merges_over_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("gallery.toml"),
            "[shots]\nthumb_size = \"200x150\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.shots.thumb_size, "200x150");
        // Untouched keys keep their defaults
        assert_eq!(config.shots.full_size, "1024x768");
        assert_eq!(config.root, "unpacked");
    }

    #[test]
    fn unknown_keys_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("gallery.toml"), "thumbnale_size = \"1x1\"\n").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("gallery.toml"), "root = [unclosed\n").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn malformed_size_string_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("gallery.toml"),
            "[shots]\nfull_size = \"huge\"\n",
        )
        .unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn zero_dimension_rejected() {
        let mut config = GalleryConfig::default();
        config.shots.thumb_size = "0x225".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_decor_tag_rejected() {
        let mut config = GalleryConfig::default();
        config.shots.decor_tag = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn dimension_string_rules() {
        assert!(is_dimension_string("1024x768"));
        assert!(is_dimension_string("1x1"));
        assert!(!is_dimension_string("1024"));
        assert!(!is_dimension_string("x768"));
        assert!(!is_dimension_string("1024x"));
        assert!(!is_dimension_string("1024X768"));
        assert!(!is_dimension_string("-1x768"));
    }

    #[test]
    fn stock_config_toml_round_trips_to_defaults() {
        let parsed: GalleryConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = GalleryConfig::default();
        assert_eq!(parsed.root, defaults.root);
        assert_eq!(parsed.themes_prefix, defaults.themes_prefix);
        assert_eq!(parsed.shots.full_size, defaults.shots.full_size);
        assert_eq!(parsed.shots.thumb_size, defaults.shots.thumb_size);
        assert_eq!(parsed.shots.decor_tag, defaults.shots.decor_tag);
    }
}

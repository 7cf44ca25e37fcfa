//! Derived asset path formatting.
//!
//! A theme id (its directory name under `unpacked/`) deterministically names
//! every asset the gallery links to:
//!
//! ```text
//! {prefix}/shots/{full_size}-{id}.png              full screenshot
//! {prefix}/shots/thumbs/{thumb_size}-{id}.jpg      thumbnail
//! {prefix}/shots/{full_size}-{id}-{tag}.png        decorated screenshot
//! {prefix}/shots/thumbs/{thumb_size}-{id}-{tag}.jpg decorated thumbnail
//! {prefix}/repo/{id}.tar.bz2                       download archive
//! ```
//!
//! Nothing here touches the filesystem; the decorated pair may or may not
//! exist and the primary pair is linked unconditionally either way.

use crate::config::GalleryConfig;

/// Full screenshot path: `{prefix}/shots/{size}-{id}.png`.
pub fn screenshot(prefix: &str, size: &str, id: &str) -> String {
    format!("{prefix}/shots/{size}-{id}.png")
}

/// Thumbnail path: `{prefix}/shots/thumbs/{size}-{id}.jpg`.
pub fn thumbnail(prefix: &str, size: &str, id: &str) -> String {
    format!("{prefix}/shots/thumbs/{size}-{id}.jpg")
}

/// Download archive path: `{prefix}/repo/{id}.tar.bz2`.
pub fn archive(prefix: &str, id: &str) -> String {
    format!("{prefix}/repo/{id}.tar.bz2")
}

/// The decorated variant inserts `-{tag}` before the extension, so it is the
/// primary path formatted for a tagged pseudo-id.
fn tagged(id: &str, tag: &str) -> String {
    format!("{id}-{tag}")
}

/// Every asset path derived from one theme id.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePaths {
    pub screenshot: String,
    pub thumbnail: String,
    pub decorated_screenshot: String,
    pub decorated_thumbnail: String,
    pub archive: String,
}

impl ThemePaths {
    /// Compute all derived paths for a theme id under the given config.
    pub fn for_theme(config: &GalleryConfig, id: &str) -> Self {
        let prefix = &config.themes_prefix;
        let full = &config.shots.full_size;
        let thumb = &config.shots.thumb_size;
        let decor_id = tagged(id, &config.shots.decor_tag);
        Self {
            screenshot: screenshot(prefix, full, id),
            thumbnail: thumbnail(prefix, thumb, id),
            decorated_screenshot: screenshot(prefix, full, &decor_id),
            decorated_thumbnail: thumbnail(prefix, thumb, &decor_id),
            archive: archive(prefix, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slate_default_paths() {
        let paths = ThemePaths::for_theme(&GalleryConfig::default(), "slate");
        assert_eq!(paths.screenshot, "../themes/shots/1024x768-slate.png");
        assert_eq!(paths.thumbnail, "../themes/shots/thumbs/300x225-slate.jpg");
        assert_eq!(paths.archive, "../themes/repo/slate.tar.bz2");
    }

    #[test]
    fn decorated_pair_inserts_tag_before_extension() {
        let paths = ThemePaths::for_theme(&GalleryConfig::default(), "foo");
        assert_eq!(
            paths.decorated_screenshot,
            "../themes/shots/1024x768-foo-fbcondecor.png"
        );
        assert_eq!(
            paths.decorated_thumbnail,
            "../themes/shots/thumbs/300x225-foo-fbcondecor.jpg"
        );
    }

    #[test]
    fn config_overrides_flow_through() {
        let mut config = GalleryConfig::default();
        config.themes_prefix = "assets".to_string();
        config.shots.full_size = "800x600".to_string();
        config.shots.thumb_size = "160x120".to_string();
        config.shots.decor_tag = "decor".to_string();

        let paths = ThemePaths::for_theme(&config, "ice");
        assert_eq!(paths.screenshot, "assets/shots/800x600-ice.png");
        assert_eq!(paths.thumbnail, "assets/shots/thumbs/160x120-ice.jpg");
        assert_eq!(paths.decorated_screenshot, "assets/shots/800x600-ice-decor.png");
        assert_eq!(paths.archive, "assets/repo/ice.tar.bz2");
    }
}

//! Gallery HTML generation.
//!
//! Stage 2 of the gallery pipeline. Takes the scan manifest and renders one
//! `<table>` with a row per valid theme, in manifest (lexicographic id)
//! order, streamed to any writer — stdout by default, a file with `--output`.
//!
//! ## Row Structure
//!
//! ```text
//! <tr><td>
//!   <a href={screenshot}><img src={thumbnail} alt={name} /></a>
//!   [decorated <a>/<img> pair]            -- only if the file exists
//!   <br /><span class="theme">
//!     <a href={url}>{name} v. {version}</a>,   -- if the descriptor has a url
//!     {name} v. {version},                     -- otherwise
//!     <b><a href={archive}>download</a></b>
//!   </span>
//!   <br /><span class="desc">{description}</span><br /><br />
//! </td></tr>
//! ```
//!
//! The primary screenshot pair is linked unconditionally, whether or not the
//! files exist; only the decorated pair is gated on a filesystem check (done
//! at scan time). Author and license are parsed but never rendered.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Interpolated descriptor fields are auto-escaped.

use crate::config::GalleryConfig;
use crate::paths::ThemePaths;
use crate::scan::{Manifest, Theme};
use maud::{html, Markup};
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render one gallery row for a theme.
pub fn render_row(theme: &Theme, config: &GalleryConfig) -> Markup {
    let paths = ThemePaths::for_theme(config, &theme.id);
    let d = &theme.descriptor;

    html! {
        tr {
            td {
                a href=(paths.screenshot) {
                    img src=(paths.thumbnail) alt=(d.name);
                }
                @if theme.decorated {
                    " "
                    a href=(paths.decorated_screenshot) {
                        img src=(paths.decorated_thumbnail)
                            alt={ (d.name) " " (config.shots.decor_tag) };
                    }
                }
                br;
                span.theme {
                    @if let Some(url) = &d.url {
                        a href=(url) { (d.name) " v. " (d.version) }
                    } @else {
                        (d.name) " v. " (d.version)
                    }
                    ", "
                    b { a href=(paths.archive) { "download" } }
                }
                br;
                span.desc { (d.description) }
                br;
                br;
            }
        }
    }
}

/// Render the whole gallery table from a scan manifest.
pub fn render_gallery(manifest: &Manifest) -> Markup {
    html! {
        table {
            @for theme in &manifest.themes {
                (render_row(theme, &manifest.config))
            }
        }
    }
}

/// Render the gallery and stream it to `out`.
pub fn write_gallery(manifest: &Manifest, out: &mut dyn Write) -> Result<(), RenderError> {
    out.write_all(render_gallery(manifest).into_string().as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

//! # Splash Gallery
//!
//! A static HTML gallery generator for fbsplash theme repositories. The
//! filesystem is the data source: each subdirectory of `unpacked/` is a theme
//! package, and its `metadata.xml` descriptor supplies name, version, author,
//! description, and license.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan     unpacked/  →  Manifest   (filesystem + XML → structured data)
//! 2. Render   Manifest   →  HTML       (gallery table → stdout or file)
//! ```
//!
//! The split exists for the usual reasons:
//!
//! - **Debuggability**: the `scan` command dumps the manifest as JSON you can
//!   inspect before any HTML exists.
//! - **Testability**: rendering is a pure function from manifest to markup,
//!   so unit tests can exercise every row variant without touching the
//!   filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — enumerates theme directories, parses descriptors, produces the manifest |
//! | [`render`] | Stage 2 — renders the gallery `<table>` from the manifest using Maud |
//! | [`metadata`] | `metadata.xml` descriptor parsing and required-field extraction |
//! | [`paths`] | Derived asset path formatting: screenshots, thumbnails, archives |
//! | [`config`] | `gallery.toml` loading, validation, and stock defaults |
//! | [`report`] | CLI output formatting — human-readable display of scan results |
//!
//! # Design Decisions
//!
//! ## Maud Over String Formatting
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and interpolated metadata is auto-escaped.
//! Descriptor fields come from local packages, but escaping them costs
//! nothing and no consumer depends on them arriving verbatim.
//!
//! ## Two Error Policies, On Purpose
//!
//! A theme whose `metadata.xml` is missing, unreadable, or malformed is
//! silently dropped from the gallery — broken packages must not take the page
//! down. A descriptor that *parses* but lacks a required element aborts the
//! whole run instead: that is a repository curation error someone should fix,
//! not a package to paper over. The `check` command surfaces the silently
//! dropped entries.
//!
//! ## Explicit Configuration
//!
//! Screenshot sizes and the `../themes/` asset prefix are explicit
//! configuration ([`config::GalleryConfig`]) rather than hardcoded constants.
//! The documented defaults reproduce the classic fbsplash repository layout,
//! so a repository with different screenshot dimensions only needs a
//! three-line `gallery.toml`.

pub mod config;
pub mod metadata;
pub mod paths;
pub mod render;
pub mod report;
pub mod scan;

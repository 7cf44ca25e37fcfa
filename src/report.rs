//! CLI output formatting for the `check` command.
//!
//! The render path deliberately says nothing about themes it drops; `check`
//! is where a repository maintainer sees them. Output is information-first:
//! each theme leads with its positional index, display name, and version,
//! with descriptor context as indented lines.
//!
//! ```text
//! Themes
//! 001 Emergence v. 0.4 (emergence)
//!     Author: John Doe <jdoe@example.org>
//!     License: GPL-2
//!     Decorated: yes
//!     The default Gentoo splash theme.
//! 002 Slate v. 1.2 (slate)
//!     ...
//!
//! Skipped
//!     draft: XML parse error: ...
//!
//! 2 themes, 1 skipped
//! ```
//!
//! Format functions are pure (return `Vec<String>`) for testability; `print_*`
//! wrappers write to stdout.

use crate::scan::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
/// Cuts on a char boundary, never mid-codepoint.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Format the check report for a scan manifest.
pub fn format_check_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Themes".to_string());
    for (i, theme) in manifest.themes.iter().enumerate() {
        let d = &theme.descriptor;
        lines.push(format!(
            "{} {} v. {} ({})",
            format_index(i + 1),
            d.name,
            d.version,
            theme.id
        ));
        lines.push(format!("    Author: {} <{}>", d.author.name, d.author.email));
        lines.push(format!("    License: {}", d.license));
        if let Some(url) = &d.url {
            lines.push(format!("    Url: {url}"));
        }
        lines.push(format!(
            "    Decorated: {}",
            if theme.decorated { "yes" } else { "no" }
        ));
        let desc = truncate_desc(d.description.trim(), 60);
        if !desc.is_empty() {
            lines.push(format!("    {desc}"));
        }
    }

    if !manifest.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for entry in &manifest.skipped {
            lines.push(format!("    {}: {}", entry.id, entry.reason));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} themes, {} skipped",
        manifest.themes.len(),
        manifest.skipped.len()
    ));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(manifest: &Manifest) {
    for line in format_check_output(manifest) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;
    use crate::metadata::{Author, ThemeDescriptor};
    use crate::scan::{Skipped, Theme};

    fn manifest_with(themes: Vec<Theme>, skipped: Vec<Skipped>) -> Manifest {
        Manifest {
            themes,
            skipped,
            config: GalleryConfig::default(),
        }
    }

    fn theme(id: &str, decorated: bool) -> Theme {
        Theme {
            id: id.to_string(),
            descriptor: ThemeDescriptor {
                name: id.to_uppercase(),
                version: "1.0".to_string(),
                author: Author {
                    name: "Jane".to_string(),
                    email: "jane@example.org".to_string(),
                },
                description: "Words about the theme.".to_string(),
                license: "GPL-2".to_string(),
                url: None,
            },
            decorated,
        }
    }

    #[test]
    fn check_output_lists_themes_with_index() {
        let lines = format_check_output(&manifest_with(
            vec![theme("slate", true), theme("zen", false)],
            vec![],
        ));

        assert_eq!(lines[0], "Themes");
        assert_eq!(lines[1], "001 SLATE v. 1.0 (slate)");
        assert!(lines.contains(&"    Author: Jane <jane@example.org>".to_string()));
        assert!(lines.contains(&"    Decorated: yes".to_string()));
        assert!(lines.contains(&"002 ZEN v. 1.0 (zen)".to_string()));
    }

    #[test]
    fn skipped_section_only_when_nonempty() {
        let clean = format_check_output(&manifest_with(vec![theme("a", false)], vec![]));
        assert!(!clean.contains(&"Skipped".to_string()));

        let dirty = format_check_output(&manifest_with(
            vec![],
            vec![Skipped {
                id: "draft".to_string(),
                reason: "XML parse error".to_string(),
            }],
        ));
        assert!(dirty.contains(&"Skipped".to_string()));
        assert!(dirty.contains(&"    draft: XML parse error".to_string()));
    }

    #[test]
    fn summary_line_counts_both() {
        let lines = format_check_output(&manifest_with(
            vec![theme("a", false)],
            vec![Skipped {
                id: "b".to_string(),
                reason: "IO error".to_string(),
            }],
        ));
        assert_eq!(lines.last().unwrap(), "1 themes, 1 skipped");
    }

    #[test]
    fn long_descriptions_truncated() {
        let mut t = theme("wordy", false);
        t.descriptor.description = "x".repeat(100);
        let lines = format_check_output(&manifest_with(vec![t], vec![]));
        let desc_line = lines.iter().find(|l| l.contains("xxx")).unwrap();
        assert!(desc_line.ends_with("..."));
        assert!(desc_line.len() < 100);
    }

    #[test]
    fn multibyte_descriptions_truncate_on_char_boundary() {
        let mut t = theme("umlauts", false);
        // 81 chars, 161 bytes; byte 60 falls inside a 2-byte codepoint
        t.descriptor.description = format!("a{}", "ä".repeat(80));
        let lines = format_check_output(&manifest_with(vec![t], vec![]));
        let desc_line = lines.iter().find(|l| l.contains('ä')).unwrap();
        assert!(desc_line.ends_with("..."));
        assert_eq!(desc_line.chars().filter(|&c| c == 'ä').count(), 59);
    }

    #[test]
    fn url_line_only_when_present() {
        let mut t = theme("linked", false);
        t.descriptor.url = Some("http://example.org".to_string());
        let lines = format_check_output(&manifest_with(vec![t], vec![]));
        assert!(lines.contains(&"    Url: http://example.org".to_string()));

        let lines = format_check_output(&manifest_with(vec![theme("plain", false)], vec![]));
        assert!(!lines.iter().any(|l| l.starts_with("    Url:")));
    }
}

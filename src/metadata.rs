//! Theme metadata extraction.
//!
//! Each theme package carries a `metadata.xml` descriptor:
//!
//! ```xml
//! <theme>
//!   <name>Slate</name>
//!   <version>1.2</version>
//!   <author><name>Jane Doe</name><email>jane@example.org</email></author>
//!   <description>A dark slate theme.</description>
//!   <license>GPL-2</license>
//!   <url>http://example.org/slate</url>   <!-- optional -->
//! </theme>
//! ```
//!
//! The root element name is not validated; fields are located by their path
//! relative to the root (`name`, `author/name`, ...), first match in document
//! order.
//!
//! ## Two parse stages, two error policies
//!
//! 1. **Document walk** — reading and tokenizing the XML. Failures here
//!    ([`MetadataError::Io`], [`MetadataError::Xml`],
//!    [`MetadataError::Unclosed`] for truncated documents) mean the package
//!    itself is broken; the scanner skips such themes.
//! 2. **Field extraction** — turning collected element text into a
//!    [`ThemeDescriptor`]. A missing required element
//!    ([`MetadataError::MissingField`]) is a curation error in an otherwise
//!    well-formed descriptor and aborts the whole scan.
//!
//! `<url>` is the one optional field: its absence (or emptiness) selects the
//! plain name+version rendering instead of an anchor.
//!
//! Author and license are required and extracted eagerly even though the
//! gallery HTML never shows them — a descriptor without an author block is
//! invalid. They do surface in the `scan` JSON manifest and `check` report.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed XML: document ends with <{0}> unclosed")]
    Unclosed(String),
    #[error("missing required element <{0}>")]
    MissingField(&'static str),
}

impl MetadataError {
    /// Whether the scanner may recover by skipping the theme.
    ///
    /// Unreadable or malformed packages are skipped; a well-formed descriptor
    /// missing a required field is fatal to the whole run.
    pub fn is_skippable(&self) -> bool {
        !matches!(self, MetadataError::MissingField(_))
    }
}

/// Theme author attribution. Required in every descriptor, never rendered
/// into the gallery HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Parsed `metadata.xml` descriptor for one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub name: String,
    pub version: String,
    pub author: Author,
    pub description: String,
    pub license: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ThemeDescriptor {
    /// Parse a descriptor from XML text.
    ///
    /// Runs both stages: document walk (skippable errors), then required-field
    /// extraction (fatal errors). See the module docs for the policy split.
    pub fn from_xml(xml: &str) -> Result<Self, MetadataError> {
        walk_document(xml)?.extract()
    }

    /// Read and parse `<theme_dir>/metadata.xml`.
    pub fn read(theme_dir: &Path) -> Result<Self, MetadataError> {
        let content = std::fs::read_to_string(theme_dir.join("metadata.xml"))?;
        Self::from_xml(&content)
    }
}

/// Element text collected by the document walk, before required-field checks.
#[derive(Debug, Default)]
struct RawDescriptor {
    name: Option<String>,
    version: Option<String>,
    author_name: Option<String>,
    author_email: Option<String>,
    description: Option<String>,
    license: Option<String>,
    url: Option<String>,
}

impl RawDescriptor {
    /// Field-extraction stage: every absence here is a fatal error except `url`.
    fn extract(self) -> Result<ThemeDescriptor, MetadataError> {
        Ok(ThemeDescriptor {
            name: self.name.ok_or(MetadataError::MissingField("name"))?,
            version: self.version.ok_or(MetadataError::MissingField("version"))?,
            author: Author {
                name: self
                    .author_name
                    .ok_or(MetadataError::MissingField("author/name"))?,
                email: self
                    .author_email
                    .ok_or(MetadataError::MissingField("author/email"))?,
            },
            description: self
                .description
                .ok_or(MetadataError::MissingField("description"))?,
            license: self.license.ok_or(MetadataError::MissingField("license"))?,
            url: self.url,
        })
    }

    /// Store `text` for the element at `path` if it is the first non-empty
    /// occurrence (first match in document order wins).
    fn record(&mut self, path: &[String], text: &str) {
        let slot = match path {
            [a] if a == "name" => &mut self.name,
            [a] if a == "version" => &mut self.version,
            [a] if a == "description" => &mut self.description,
            [a] if a == "license" => &mut self.license,
            [a] if a == "url" => &mut self.url,
            [a, b] if a == "author" && b == "name" => &mut self.author_name,
            [a, b] if a == "author" && b == "email" => &mut self.author_email,
            _ => return,
        };
        if slot.is_none() && !text.is_empty() {
            *slot = Some(text.to_string());
        }
    }
}

/// Document-walk stage: tokenize the XML and collect the text of the elements
/// the gallery cares about, keyed by their path below the (unvalidated) root.
fn walk_document(xml: &str) -> Result<RawDescriptor, MetadataError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut raw = RawDescriptor::default();
    // Element name stack; stack[0] is the root, stack[1..] is the path used
    // for field lookup.
    let mut stack: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                stack.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(ref t) => {
                if stack.len() > 1 {
                    let text = t.unescape()?;
                    raw.record(&stack[1..], text.trim());
                }
            }
            Event::CData(ref c) => {
                if stack.len() > 1 {
                    let text = String::from_utf8_lossy(c).into_owned();
                    raw.record(&stack[1..], text.trim());
                }
            }
            Event::Eof => {
                // quick-xml reports EOF even with elements still open; a
                // truncated document is malformed, not missing fields.
                if let Some(open) = stack.pop() {
                    return Err(MetadataError::Unclosed(open));
                }
                break;
            }
            // Empty elements (<url/>) carry no text and count as absent.
            _ => {}
        }
    }

    Ok(raw)
}

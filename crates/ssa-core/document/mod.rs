//! Owned, mutable script document.
//!
//! The document is the shared record all section parsers write into and the
//! serializer reads from: header table, styles version, the single style
//! record, the column lists declared by `Format:` lines, comments and cues.
//! It is constructed with the format's built-in defaults; parsing only
//! overwrites known entries and never introduces new ones.

pub mod headers;
pub mod styles;

pub use headers::Headers;
pub use styles::StyleTable;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::cue::Cue;
use crate::errors::Error;
use crate::{Result, ScriptType, StylesVersion};

/// Outcome of applying one line or setter call under the permissive policy.
///
/// Unknown header names, unknown style fields, unknown section commands and
/// lines that do not split into the expected parts are not errors: they
/// report `Ignored` and leave the document untouched. A future strict mode
/// maps `Ignored` to an error at the policy layer without touching the
/// parsing logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The input was recognized and the document was updated
    Applied,
    /// The input was not recognized and was dropped
    Ignored,
}

/// An SSA/ASS script document.
///
/// Created either empty via [`Script::new`] (format defaults) or by parsing
/// script text via [`Script::parse`]. Serialization through
/// [`Script::render`] never mutates the document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Script {
    pub(crate) headers: Headers,
    pub(crate) styles_version: StylesVersion,
    pub(crate) styles: StyleTable,
    pub(crate) styles_format: Option<Vec<String>>,
    pub(crate) events_format: Option<Vec<String>>,
    pub(crate) comments: Vec<String>,
    pub(crate) cues: Vec<Cue>,
    pub(crate) line_ending: String,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            headers: Headers::default(),
            styles_version: StylesVersion::V4Plus,
            styles: StyleTable::default(),
            styles_format: None,
            events_format: None,
            comments: Vec::new(),
            cues: Vec::new(),
            line_ending: "\n".into(),
        }
    }
}

impl Script {
    /// Create an empty document populated with the format defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The header table
    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Look up a header value by name
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Overwrite a known header; unknown names are ignored
    pub fn set_header(&mut self, name: &str, value: &str) -> Outcome {
        self.headers.set(name, value)
    }

    /// The script type, e.g. `v4.00+`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyScriptType`] while the `ScriptType` header is
    /// unset. End-of-parse validation relies on the same check.
    pub fn script_type(&self) -> Result<&str> {
        self.headers.get("ScriptType").ok_or(Error::EmptyScriptType)
    }

    /// Set the script type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScriptType`] for anything but `v4.00` or
    /// `v4.00+`.
    pub fn set_script_type(&mut self, value: &str) -> Result<()> {
        if ScriptType::from_value(value).is_none() {
            return Err(Error::InvalidScriptType(value.to_string()));
        }
        self.headers.set("ScriptType", value);
        Ok(())
    }

    /// The styles table version selected for output
    #[must_use]
    pub fn styles_version(&self) -> StylesVersion {
        self.styles_version
    }

    /// Set the styles table version by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStylesVersion`] for anything but `V4` or
    /// `V4+`.
    pub fn set_styles_version(&mut self, name: &str) -> Result<()> {
        self.styles_version = StylesVersion::from_name(name)
            .ok_or_else(|| Error::InvalidStylesVersion(name.to_string()))?;
        Ok(())
    }

    /// The single retained style record
    #[must_use]
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Look up a style field by name
    #[must_use]
    pub fn style(&self, field: &str) -> Option<&str> {
        self.styles.get(field)
    }

    /// Overwrite a known style field; unknown names are ignored
    pub fn set_style(&mut self, field: &str, value: &str) -> Outcome {
        self.styles.set(field, value)
    }

    /// Style `(field, value)` pairs emitted for the current styles version
    #[must_use]
    pub fn needed_styles(&self) -> Vec<(&'static str, &str)> {
        self.styles.needed(self.styles_version)
    }

    /// Canonical event schema for the current script type.
    ///
    /// # Errors
    ///
    /// Fails when `ScriptType` is unset, or set to a value that names no
    /// known dialect.
    pub fn needed_events(&self) -> Result<&'static [&'static str]> {
        let value = self.script_type()?;
        ScriptType::from_value(value)
            .map(ScriptType::event_fields)
            .ok_or_else(|| Error::InvalidScriptType(value.to_string()))
    }

    /// The style column list declared by the parsed `Format:` line, if any
    #[must_use]
    pub fn styles_format(&self) -> Option<&[String]> {
        self.styles_format.as_deref()
    }

    /// The event column list declared by the parsed `Format:` line, if any
    #[must_use]
    pub fn events_format(&self) -> Option<&[String]> {
        self.events_format.as_deref()
    }

    /// Append a comment, preserved in encounter order
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Comments in encounter order
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Append a cue
    pub fn add_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    /// Cues in document order
    #[must_use]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// The line ending emitted between output lines
    #[must_use]
    pub fn line_ending(&self) -> &str {
        &self.line_ending
    }

    /// Set the line ending used verbatim on output
    pub fn set_line_ending(&mut self, line_ending: impl Into<String>) {
        self.line_ending = line_ending.into();
    }

    /// End-of-parse validation: `ScriptType` must be set and at least one
    /// cue must have been produced. Both failures abort the whole parse.
    pub(crate) fn validate(&self) -> Result<()> {
        self.script_type()?;
        if self.cues.is_empty() {
            return Err(Error::NoEvents);
        }
        Ok(())
    }
}

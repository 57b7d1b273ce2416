//! # SSA-Core
//!
//! Parser and serializer for the SubStation Alpha subtitle script format
//! (`.ssa` / `.ass`). Converts script text (header metadata, style table,
//! dialogue events) into an owned in-memory document and renders that
//! document back to format-compliant text, reconciling the legacy `v4.00`
//! and extended `v4.00+` dialects while tolerating the malformed files that
//! circulate in the wild.
//!
//! ## Features
//!
//! - **Two dialects**: `v4.00` (SSA) and `v4.00+` (ASS) header fields,
//!   style columns and event columns
//! - **Permissive parsing**: unknown sections, unknown commands and
//!   malformed lines are ignored rather than rejected
//! - **Deterministic output**: canonical field ordering and per-dialect
//!   field exclusion on write
//! - **Owned document**: plain `Send + Sync` value, no borrowed input
//!
//! ## Quick Start
//!
//! ```rust
//! use ssa_core::Script;
//!
//! let script_text = r#"[Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize
//! Style: Default, Arial, 20
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello World!
//! "#;
//!
//! let script = Script::parse(script_text)?;
//! assert_eq!(script.script_type()?, "v4.00+");
//! assert_eq!(script.cues().len(), 1);
//! # Ok::<(), ssa_core::Error>(())
//! ```
//!
//! ## Scope
//!
//! File loading, character-encoding conversion and byte-level BOM handling
//! are the caller's concern: this crate consumes already-decoded text and
//! produces a text buffer.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod cue;
pub mod document;
pub mod errors;

mod parser;
mod serializer;

pub use cue::{ms_to_timecode, timecode_to_ms, Cue};
pub use document::{Headers, Outcome, Script, StyleTable};
pub use errors::{Error, SectionKind};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for core operations, using the crate's unified [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Script dialect discriminator, as declared by the `ScriptType` header.
///
/// Selects the canonical event schema used on output: `v4.00` rows carry a
/// `Marked` column where `v4.00+` rows carry `Layer`. Correlated with, but
/// distinct from, [`StylesVersion`].
///
/// # Examples
///
/// ```rust
/// use ssa_core::ScriptType;
///
/// assert_eq!(ScriptType::from_value("v4.00"), Some(ScriptType::V4));
/// assert_eq!(ScriptType::from_value("v4.00+"), Some(ScriptType::V4Plus));
/// assert_eq!(ScriptType::from_value("v5.00"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptType {
    /// SSA `v4.00` (SubStation Alpha legacy format)
    V4,
    /// ASS `v4.00+` (Advanced SubStation Alpha)
    V4Plus,
}

impl ScriptType {
    /// Canonical event field order for `v4.00` scripts
    pub const V4_EVENT_FIELDS: [&'static str; 10] = [
        "Marked", "Start", "End", "Style", "Name", "MarginL", "MarginR", "MarginV", "Effect",
        "Text",
    ];

    /// Canonical event field order for `v4.00+` scripts
    pub const V4_PLUS_EVENT_FIELDS: [&'static str; 10] = [
        "Layer", "Start", "End", "Style", "Name", "MarginL", "MarginR", "MarginV", "Effect",
        "Text",
    ];

    /// Parse a `ScriptType` header value.
    ///
    /// Returns `None` for anything but the two known dialect markers.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "v4.00" => Some(Self::V4),
            "v4.00+" => Some(Self::V4Plus),
            _ => None,
        }
    }

    /// Header value for this dialect, e.g. `v4.00+`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V4 => "v4.00",
            Self::V4Plus => "v4.00+",
        }
    }

    /// Canonical ordered event schema emitted for this dialect.
    ///
    /// Output always uses this ordering, never the possibly-reordered
    /// `Format:` line a parsed file declared.
    #[must_use]
    pub const fn event_fields(self) -> &'static [&'static str] {
        match self {
            Self::V4 => &Self::V4_EVENT_FIELDS,
            Self::V4Plus => &Self::V4_PLUS_EVENT_FIELDS,
        }
    }
}

/// Style table dialect, as declared by the styles section header.
///
/// Selects which style fields are withheld from output; the in-memory style
/// record always carries the full field set.
///
/// # Examples
///
/// ```rust
/// use ssa_core::StylesVersion;
///
/// assert_eq!(StylesVersion::from_name("V4+"), Some(StylesVersion::V4Plus));
/// assert_eq!(StylesVersion::V4.as_str(), "V4");
/// assert!(StylesVersion::V4.excluded_fields().contains(&"ScaleX"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StylesVersion {
    /// `[V4 Styles]` legacy style table
    V4,
    /// `[V4+ Styles]` extended style table
    V4Plus,
}

impl StylesVersion {
    /// Extended fields never emitted for a `V4` style table
    pub const V4_EXCLUDED_FIELDS: [&'static str; 7] = [
        "OutlineColour",
        "Underline",
        "StrikeOut",
        "ScaleX",
        "ScaleY",
        "Spacing",
        "Angle",
    ];

    /// Legacy fields never emitted for a `V4+` style table
    pub const V4_PLUS_EXCLUDED_FIELDS: [&'static str; 2] = ["TertiaryColour", "AlphaLevel"];

    /// Parse a styles version name (`V4` or `V4+`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "V4" => Some(Self::V4),
            "V4+" => Some(Self::V4Plus),
            _ => None,
        }
    }

    /// Name used in the section header, e.g. `V4+`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V4 => "V4",
            Self::V4Plus => "V4+",
        }
    }

    /// Style fields withheld from output for this version.
    ///
    /// Exclusion is a write-time filter: the fields still exist in the
    /// in-memory style record.
    #[must_use]
    pub const fn excluded_fields(self) -> &'static [&'static str] {
        match self {
            Self::V4 => &Self::V4_EXCLUDED_FIELDS,
            Self::V4Plus => &Self::V4_PLUS_EXCLUDED_FIELDS,
        }
    }
}

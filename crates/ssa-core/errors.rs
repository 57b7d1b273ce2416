//! Error types for SSA script parsing and serialization.
//!
//! Two error kinds exist: configuration errors (invalid values handed to a
//! setter, rejected immediately) and malformed-document errors (raised while
//! parsing or validating; the whole parse aborts and no partial document is
//! returned). Unknown sections, unknown commands and lines that do not split
//! into the expected parts are not errors — they are reported to the caller
//! as [`Outcome::Ignored`](crate::Outcome) and dropped.

use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// Section discriminant for format-definition errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionKind {
    /// A `[V4 Styles]` / `[V4+ Styles]` section
    Styles,
    /// The `[Events]` section
    Events,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Styles => f.write_str("styles"),
            Self::Events => f.write_str("events"),
        }
    }
}

/// Unified error type for ssa-core operations
///
/// `InvalidScriptType` and `InvalidStylesVersion` are configuration errors;
/// the remaining variants are fatal malformed-document errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Script type value is neither `v4.00` nor `v4.00+`
    #[error("invalid script type `{0}`: expected `v4.00` or `v4.00+`")]
    InvalidScriptType(String),

    /// Styles version name is neither `V4` nor `V4+`
    #[error("invalid styles version `{0}`: expected `V4` or `V4+`")]
    InvalidStylesVersion(String),

    /// Content line encountered before any section header
    #[error("not a valid script: content before any section (line: `{line}`)")]
    ContentOutsideSection {
        /// The offending content line
        line: String,
    },

    /// Second `Format:` line in a section that does not allow redefinition
    #[error("not a valid script: duplicate {0} format definition")]
    DuplicateFormat(SectionKind),

    /// Data line encountered before the section's `Format:` line
    #[error("not a valid script: {0} format not defined before first data line")]
    MissingFormat(SectionKind),

    /// `ScriptType` header unset after parsing, or read while unset
    #[error("not a proper script: empty ScriptType")]
    EmptyScriptType,

    /// No qualifying dialogue rows survived parsing
    #[error("not a proper script: no events")]
    NoEvents,
}

//! Script parser: section state machine over a single pass of input lines.
//!
//! Parsing is a strict sequential fold — one line at a time, no lookahead.
//! The classifier decides what each line is; section headers move the state
//! machine; content lines are dispatched to the parser owning the current
//! section, each of which mutates the [`Script`] document directly. The
//! fold ends at input exhaustion, followed by document validation.

mod line;
mod sections;

use crate::document::Script;
use crate::errors::Error;
use crate::Result;
use crate::StylesVersion;

use alloc::borrow::ToOwned;

use line::LineKind;

/// Section the state machine is currently inside.
///
/// `Unknown` swallows content until the next recognized header; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionState {
    None,
    ScriptInfo,
    V4Styles,
    V4PlusStyles,
    Events,
    Unknown,
}

impl Script {
    /// Parse script text into a document.
    ///
    /// The input is consumed line by line; line endings may be `\n` or
    /// `\r\n` (decoding and ending normalization are the caller's concern).
    ///
    /// # Errors
    ///
    /// Fails on the malformed-document conditions: content before any
    /// section header, a redefined styles `Format:`, a conflicting events
    /// `Format:`, data lines before their `Format:`, a missing `ScriptType`
    /// header, or a script with no qualifying dialogue rows. Any failure
    /// aborts the whole parse; no partial document is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use ssa_core::Script;
    /// let script = Script::parse(
    ///     "[Script Info]\nScriptType: v4.00+\n\n[Events]\nFormat: Layer, Start, End, Text\nDialogue: 0,0:00:00.00,0:00:01.00,hi\n",
    /// )?;
    /// assert_eq!(script.cues().len(), 1);
    /// # Ok::<(), ssa_core::Error>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let mut script = Self::new();
        let mut state = SectionState::None;

        for raw in source.lines() {
            let stripped = line::strip_bom_artifact(raw);
            match line::classify(stripped) {
                LineKind::Blank => {}
                LineKind::Comment(comment) => script.comments.push(comment.to_owned()),
                LineKind::SectionHeader(name) => state = enter_section(&mut script, name),
                LineKind::Content(content) => match state {
                    SectionState::None => {
                        return Err(Error::ContentOutsideSection {
                            line: content.to_owned(),
                        })
                    }
                    SectionState::ScriptInfo => {
                        sections::script_info::parse_line(&mut script, content);
                    }
                    SectionState::V4Styles | SectionState::V4PlusStyles => {
                        sections::styles::parse_line(&mut script, content)?;
                    }
                    SectionState::Events => {
                        sections::events::parse_line(&mut script, content)?;
                    }
                    // Unknown sections swallow content; a strict mode would
                    // reject here instead.
                    SectionState::Unknown => {}
                },
            }
        }

        script.validate()?;
        Ok(script)
    }
}

/// Transition on a `[name]` header; styles headers also pin the version.
fn enter_section(script: &mut Script, name: &str) -> SectionState {
    match name {
        "Script Info" => SectionState::ScriptInfo,
        "V4 Styles" => {
            script.styles_version = StylesVersion::V4;
            SectionState::V4Styles
        }
        "V4+ Styles" => {
            script.styles_version = StylesVersion::V4Plus;
            SectionState::V4PlusStyles
        }
        "Events" => SectionState::Events,
        _ => SectionState::Unknown,
    }
}

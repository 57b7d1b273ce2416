//! Document serializer: renders a [`Script`] back to format-compliant text.
//!
//! A deterministic single pass over the document. Output always uses the
//! canonical field ordering — headers in table order, styles filtered
//! through the version's exclusion set, events under the per-dialect
//! schema — never the column order a parsed file happened to declare.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::document::Script;
use crate::errors::Error;
use crate::{Result, ScriptType};

impl Script {
    /// Render the document as script text.
    ///
    /// Every emitted line ends with the document's line ending; multi-line
    /// comments are continued with a `; ` prefix on each line. The
    /// document itself is never mutated.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyScriptType`] when the `ScriptType` header
    /// is unset, and with [`Error::InvalidScriptType`] when its value names
    /// no known dialect.
    pub fn render(&self) -> Result<String> {
        let type_value = self.script_type()?;
        let script_type = ScriptType::from_value(type_value)
            .ok_or_else(|| Error::InvalidScriptType(type_value.to_string()))?;
        let le = self.line_ending.as_str();

        let mut out = String::new();

        // Script info: comments first, then every set header in table order.
        out.push_str("[Script Info]");
        out.push_str(le);
        for comment in &self.comments {
            out.push_str("; ");
            out.push_str(&comment.replace(le, &format!("{le}; ")));
            out.push_str(le);
        }
        for (name, value) in self.headers.iter() {
            if let Some(value) = value {
                out.push_str(name);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(le);
            }
        }
        out.push_str(le);

        // Styles: the version-filtered view of the single record.
        out.push('[');
        out.push_str(self.styles_version.as_str());
        out.push_str(" Styles]");
        out.push_str(le);

        let styles = self.needed_styles();
        let fields: Vec<&str> = styles.iter().map(|(field, _)| *field).collect();
        let values: Vec<&str> = styles.iter().map(|(_, value)| *value).collect();
        out.push_str("Format: ");
        out.push_str(&fields.join(", "));
        out.push_str(le);
        out.push_str("Style: ");
        out.push_str(&values.join(", "));
        out.push_str(le);
        out.push_str(le);

        // Events: canonical schema for the dialect, then one line per cue.
        out.push_str("[Events]");
        out.push_str(le);
        out.push_str("Format: ");
        out.push_str(&script_type.event_fields().join(", "));
        out.push_str(le);
        for cue in &self.cues {
            out.push_str(&cue.to_dialogue_line(script_type));
            out.push_str(le);
        }

        Ok(out)
    }
}

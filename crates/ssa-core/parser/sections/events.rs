//! `[Events]` section parser.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::cue::Cue;
use crate::document::{Outcome, Script};
use crate::errors::{Error, SectionKind};
use crate::Result;

/// Apply one `[Events]` content line.
///
/// `Format:` declares the column list; `Dialogue:` rows are interpreted
/// positionally against it and become cues when their text is non-empty.
/// Other event commands (`Comment:`, `Picture:`, ...) and lines without a
/// `:` are ignored.
///
/// # Errors
///
/// - [`Error::DuplicateFormat`] on a second `Format:` line whose column
///   list differs from the first. An identical repeat is tolerated — some
///   real-world files duplicate the section header block — and is a no-op.
/// - [`Error::MissingFormat`] on a `Dialogue:` line before any `Format:`.
pub(crate) fn parse_line(script: &mut Script, line: &str) -> Result<Outcome> {
    let Some((command, value)) = line.split_once(':') else {
        return Ok(Outcome::Ignored);
    };

    match command {
        "Format" => {
            // Stored exactly as split, untrimmed; entries are trimmed at
            // assignment time instead.
            let fields: Vec<String> = value.split(',').map(ToOwned::to_owned).collect();
            if let Some(existing) = &script.events_format {
                if *existing != fields {
                    return Err(Error::DuplicateFormat(SectionKind::Events));
                }
                return Ok(Outcome::Applied);
            }
            script.events_format = Some(fields);
            Ok(Outcome::Applied)
        }
        "Dialogue" => {
            let Some(format) = &script.events_format else {
                return Err(Error::MissingFormat(SectionKind::Events));
            };

            let value = value.trim();
            // The final column — conventionally Text — absorbs remaining
            // commas verbatim, so dialogue may contain unescaped commas.
            let values = value.splitn(format.len(), ',');

            let mut row = EventRow::default();
            for (field, value) in format.iter().zip(values) {
                row.assign(field.trim(), value);
            }

            if row.text.as_deref().is_some_and(|text| !text.is_empty()) {
                script.cues.push(row.into_cue());
            }
            Ok(Outcome::Applied)
        }
        _ => Ok(Outcome::Ignored),
    }
}

/// Working row for one `Dialogue:` line, seeded with the format defaults.
///
/// `start`/`end`/`text` distinguish "column absent" from "column empty";
/// the styling columns carry their defaults outright.
struct EventRow {
    start: Option<String>,
    end: Option<String>,
    text: Option<String>,
    layer: String,
    style: String,
    name: String,
    margin_l: String,
    margin_r: String,
    margin_v: String,
    effect: String,
}

impl Default for EventRow {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            text: None,
            layer: "0".into(),
            style: "Default".into(),
            name: String::new(),
            margin_l: "0000".into(),
            margin_r: "0000".into(),
            margin_v: "0000".into(),
            effect: String::new(),
        }
    }
}

impl EventRow {
    /// Assign one positional value; the field name arrives trimmed and is
    /// matched case-insensitively. Names outside the known set (`Marked`
    /// among them) are no-ops.
    fn assign(&mut self, field: &str, value: &str) {
        match field.to_ascii_lowercase().as_str() {
            "start" => self.start = Some(value.to_owned()),
            "end" => self.end = Some(value.to_owned()),
            "text" => self.text = Some(value.to_owned()),
            "layer" => self.layer = value.to_owned(),
            "style" => self.style = value.to_owned(),
            "name" => self.name = value.to_owned(),
            "marginl" => self.margin_l = value.to_owned(),
            "marginr" => self.margin_r = value.to_owned(),
            "marginv" => self.margin_v = value.to_owned(),
            "effect" => self.effect = value.to_owned(),
            _ => {}
        }
    }

    fn into_cue(self) -> Cue {
        Cue {
            start: self.start.unwrap_or_default(),
            end: self.end.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            layer: self.layer,
            style: self.style,
            name: self.name,
            margin_l: self.margin_l,
            margin_r: self.margin_r,
            margin_v: self.margin_v,
            effect: self.effect,
        }
    }
}

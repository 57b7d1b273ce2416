//! `[V4 Styles]` / `[V4+ Styles]` section parser.
//!
//! Both styles sections share this grammar; the section header (handled by
//! the state machine) decides which version the table is written back as.

use alloc::borrow::ToOwned;

use crate::document::{Outcome, Script};
use crate::errors::{Error, SectionKind};
use crate::Result;

/// Apply one styles-section content line.
///
/// The line splits on its first `:` into command and value; the command is
/// matched untrimmed, the value half is trimmed. `Format:` declares the
/// column list data rows are interpreted against; `Style:` writes one row
/// into the single retained style record. Other commands, and lines
/// without a `:`, are ignored.
///
/// # Errors
///
/// - [`Error::DuplicateFormat`] on any second `Format:` line, even one
///   identical to the first.
/// - [`Error::MissingFormat`] on a `Style:` line before any `Format:`.
pub(crate) fn parse_line(script: &mut Script, line: &str) -> Result<Outcome> {
    let Some((command, value)) = line.split_once(':') else {
        return Ok(Outcome::Ignored);
    };
    let value = value.trim();

    match command {
        "Format" => {
            if script.styles_format.is_some() {
                return Err(Error::DuplicateFormat(SectionKind::Styles));
            }
            script.styles_format =
                Some(value.split(',').map(|field| field.trim().to_owned()).collect());
            Ok(Outcome::Applied)
        }
        "Style" => {
            let Some(format) = &script.styles_format else {
                return Err(Error::MissingFormat(SectionKind::Styles));
            };

            // The last declared column absorbs any remaining commas.
            let values = value.splitn(format.len(), ',');
            for (field, value) in format.iter().zip(values) {
                script.styles.set(field, value.trim());
            }
            Ok(Outcome::Applied)
        }
        _ => Ok(Outcome::Ignored),
    }
}

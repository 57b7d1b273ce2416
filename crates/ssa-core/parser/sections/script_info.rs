//! `[Script Info]` section parser.

use crate::document::{Outcome, Script};

/// Apply one `[Script Info]` content line.
///
/// The line splits on its first `:` into name and value; both halves are
/// trimmed and written through the header table, which ignores names
/// outside the known set. Lines without a `:` are ignored. This section
/// never errors.
pub(crate) fn parse_line(script: &mut Script, line: &str) -> Outcome {
    let Some((name, value)) = line.split_once(':') else {
        return Outcome::Ignored;
    };

    script.headers.set(name.trim(), value.trim())
}

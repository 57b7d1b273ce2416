//! Per-line classifier.
//!
//! Decides, for one raw line, whether it is blank, a comment, a section
//! header or section content. Classification happens after the
//! malformed-BOM strip and is independent of the surrounding section state.

/// Classification of one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Whitespace-only line; skipped with no state change
    Blank,
    /// `;`-led line; payload is everything after the `;`, untrimmed
    Comment(&'a str),
    /// Full-line `[name]`; payload is the bracketed name
    SectionHeader(&'a str),
    /// Anything else; dispatched to the current section's parser
    Content(&'a str),
}

/// Strip one leading codepoint in `U+FEFF..=U+FFFF` from the line.
///
/// Applied to every line, not just the first, and the range reaches far
/// past the BOM character. Both quirks are inherited behavior that callers
/// depend on; do not narrow the range.
pub(crate) fn strip_bom_artifact(line: &str) -> &str {
    match line.chars().next() {
        Some(first) if ('\u{FEFF}'..='\u{FFFF}').contains(&first) => &line[first.len_utf8()..],
        _ => line,
    }
}

/// Classify one line, already stripped by [`strip_bom_artifact`].
///
/// Comments win over section headers; a header must span the whole line
/// with no surrounding whitespace.
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    if let Some(comment) = line.trim_start().strip_prefix(';') {
        return LineKind::Comment(comment);
    }

    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        return LineKind::SectionHeader(&line[1..line.len() - 1]);
    }

    LineKind::Content(line)
}

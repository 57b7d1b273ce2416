//! Timed dialogue cue and `H:MM:SS.cc` timecode helpers.
//!
//! A cue keeps its start/end timecodes as the raw strings found in (or
//! destined for) the script, so malformed times survive a parse untouched;
//! the millisecond accessors parse on demand and return `None` for
//! anything that is not a well-formed timecode.

use alloc::format;
use alloc::string::String;

use crate::ScriptType;

/// One timed dialogue event with its display text and styling metadata.
///
/// # Examples
///
/// ```rust
/// use ssa_core::Cue;
///
/// let cue = Cue::new("0:00:00.00", "0:00:20.00", "Hello!");
/// assert_eq!(cue.start_ms(), Some(0));
/// assert_eq!(cue.end_ms(), Some(20_000));
/// assert_eq!(cue.duration_ms(), Some(20_000));
/// assert_eq!(cue.style, "Default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cue {
    /// Start timecode, `H:MM:SS.cc`
    pub start: String,
    /// End timecode, `H:MM:SS.cc`
    pub end: String,
    /// Display text, override tags and `\N` breaks included verbatim
    pub text: String,
    /// Layer number (`v4.00+`); rendered as the `Marked=` value for `v4.00`
    pub layer: String,
    /// Referenced style name
    pub style: String,
    /// Speaker name
    pub name: String,
    /// Left margin override
    pub margin_l: String,
    /// Right margin override
    pub margin_r: String,
    /// Vertical margin override
    pub margin_v: String,
    /// Transition effect
    pub effect: String,
}

impl Cue {
    /// Create a cue with default styling metadata: layer `0`, style
    /// `Default`, empty name and effect, margins `0`.
    #[must_use]
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            text: text.into(),
            layer: "0".into(),
            style: "Default".into(),
            name: String::new(),
            margin_l: "0".into(),
            margin_r: "0".into(),
            margin_v: "0".into(),
            effect: String::new(),
        }
    }

    /// Start time in milliseconds, `None` if the timecode is malformed
    #[must_use]
    pub fn start_ms(&self) -> Option<u32> {
        timecode_to_ms(&self.start)
    }

    /// End time in milliseconds, `None` if the timecode is malformed
    #[must_use]
    pub fn end_ms(&self) -> Option<u32> {
        timecode_to_ms(&self.end)
    }

    /// Duration in milliseconds, `None` for malformed or reversed times
    #[must_use]
    pub fn duration_ms(&self) -> Option<u32> {
        self.end_ms()?.checked_sub(self.start_ms()?)
    }

    /// Render the full dialogue line for the given dialect.
    ///
    /// `v4.00` rows open with a `Marked=<layer>` column; `v4.00+` rows
    /// carry the bare layer number. The remaining columns follow the
    /// canonical schema shared by both dialects.
    #[must_use]
    pub fn to_dialogue_line(&self, script_type: ScriptType) -> String {
        let lead = match script_type {
            ScriptType::V4 => format!("Marked={}", self.layer),
            ScriptType::V4Plus => self.layer.clone(),
        };
        format!(
            "Dialogue: {},{},{},{},{},{},{},{},{},{}",
            lead,
            self.start,
            self.end,
            self.style,
            self.name,
            self.margin_l,
            self.margin_r,
            self.margin_v,
            self.effect,
            self.text,
        )
    }
}

/// Parse an `H:MM:SS.cc` timecode into milliseconds.
///
/// Hours are unpadded in the wild (`0:01:12.50`); minutes, seconds and
/// centiseconds are two digits. Returns `None` for anything that does not
/// parse as four numeric components.
#[must_use]
pub fn timecode_to_ms(timecode: &str) -> Option<u32> {
    let (hours, rest) = timecode.split_once(':')?;
    let (minutes, rest) = rest.split_once(':')?;
    let (seconds, centis) = rest.split_once('.')?;

    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    let centis: u32 = centis.parse().ok()?;

    Some(((hours * 60 + minutes) * 60 + seconds) * 1000 + centis * 10)
}

/// Format milliseconds as an `H:MM:SS.cc` timecode.
///
/// Sub-centisecond precision is truncated, matching the format's
/// two-decimal resolution.
#[must_use]
pub fn ms_to_timecode(ms: u32) -> String {
    format!(
        "{}:{:02}:{:02}.{:02}",
        ms / 3_600_000,
        (ms / 60_000) % 60,
        (ms / 1000) % 60,
        (ms % 1000) / 10,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timecodes_convert_to_milliseconds() {
        assert_eq!(timecode_to_ms("0:00:00.00"), Some(0));
        assert_eq!(timecode_to_ms("0:00:20.00"), Some(20_000));
        assert_eq!(timecode_to_ms("0:01:12.50"), Some(72_500));
        assert_eq!(timecode_to_ms("1:00:00.00"), Some(3_600_000));
        assert_eq!(timecode_to_ms("0:23:49.57"), Some(1_429_570));
    }

    #[test]
    fn malformed_timecodes_yield_none() {
        assert_eq!(timecode_to_ms(""), None);
        assert_eq!(timecode_to_ms("0:00:00"), None);
        assert_eq!(timecode_to_ms("00.00"), None);
        assert_eq!(timecode_to_ms("a:bb:cc.dd"), None);
    }

    #[test]
    fn milliseconds_format_back_to_timecodes() {
        assert_eq!(ms_to_timecode(0), "0:00:00.00");
        assert_eq!(ms_to_timecode(20_000), "0:00:20.00");
        assert_eq!(ms_to_timecode(72_500), "0:01:12.50");
        assert_eq!(ms_to_timecode(3_661_230), "1:01:01.23");
    }

    #[test]
    fn duration_needs_both_ends_well_formed() {
        let cue = Cue::new("0:00:01.00", "0:00:21.00", "hi");
        assert_eq!(cue.duration_ms(), Some(20_000));

        let cue = Cue::new("bad", "0:00:21.00", "hi");
        assert_eq!(cue.duration_ms(), None);

        let reversed = Cue::new("0:00:21.00", "0:00:01.00", "hi");
        assert_eq!(reversed.duration_ms(), None);
    }

    #[test]
    fn dialogue_line_follows_the_dialect() {
        let mut cue = Cue::new("0:00:00.00", "0:00:05.00", "Hello, world");
        cue.name = "Fred".into();

        assert_eq!(
            cue.to_dialogue_line(crate::ScriptType::V4Plus),
            "Dialogue: 0,0:00:00.00,0:00:05.00,Default,Fred,0,0,0,,Hello, world"
        );
        assert_eq!(
            cue.to_dialogue_line(crate::ScriptType::V4),
            "Dialogue: Marked=0,0:00:00.00,0:00:05.00,Default,Fred,0,0,0,,Hello, world"
        );
    }
}

//! Fixed `[Script Info]` header table.
//!
//! The format defines a closed set of header names; parsing only overwrites
//! known entries and never introduces new ones. The table iterates in the
//! fixed declared order so serialized output is deterministic.

use alloc::string::String;

use super::Outcome;

/// Known header names in canonical output order
pub const HEADER_NAMES: [&str; 15] = [
    "Title",
    "Original Script",
    "Original Translation",
    "Original Editing",
    "Original Timing",
    "Synch Point",
    "Script Updated By",
    "Update Details",
    "ScriptType",
    "Collisions",
    "PlayResX",
    "PlayResY",
    "PlayDepth",
    "Timer",
    "WrapStyle",
];

/// Ordered table of the fixed, known `[Script Info]` headers.
///
/// Every entry holds an optional value; unset entries are skipped on output.
/// `ScriptType` starts unset and is the one semantically required entry —
/// its absence at the end of a parse fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Headers {
    title: Option<String>,
    original_script: Option<String>,
    original_translation: Option<String>,
    original_editing: Option<String>,
    original_timing: Option<String>,
    synch_point: Option<String>,
    script_updated_by: Option<String>,
    update_details: Option<String>,
    script_type: Option<String>,
    collisions: Option<String>,
    play_res_x: Option<String>,
    play_res_y: Option<String>,
    play_depth: Option<String>,
    timer: Option<String>,
    wrap_style: Option<String>,
}

impl Default for Headers {
    fn default() -> Self {
        Self {
            title: Some("<untitled>".into()),
            original_script: Some("<unknown>".into()),
            original_translation: None,
            original_editing: None,
            original_timing: None,
            synch_point: None,
            script_updated_by: None,
            update_details: None,
            script_type: None,
            collisions: Some("Normal".into()),
            play_res_x: Some("384".into()),
            play_res_y: Some("288".into()),
            play_depth: Some("0".into()),
            timer: Some("100.0".into()),
            wrap_style: Some("0".into()),
        }
    }
}

impl Headers {
    /// Look up a header value by name.
    ///
    /// Returns `None` both for unknown names and for known-but-unset
    /// entries.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.slot(name).and_then(|slot| slot.as_deref())
    }

    /// Overwrite a known header.
    ///
    /// Unknown names are silently dropped ([`Outcome::Ignored`]); parsing
    /// never introduces header names beyond the fixed set.
    pub fn set(&mut self, name: &str, value: &str) -> Outcome {
        let Some(slot) = self.slot_mut(name) else {
            return Outcome::Ignored;
        };
        *slot = Some(value.into());
        Outcome::Applied
    }

    /// Iterate `(name, value)` pairs in canonical output order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        HEADER_NAMES
            .into_iter()
            .zip(self.slots())
            .map(|(name, slot)| (name, slot.as_deref()))
    }

    fn slot(&self, name: &str) -> Option<&Option<String>> {
        let index = HEADER_NAMES.iter().position(|&known| known == name)?;
        Some(self.slots()[index])
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "Title" => Some(&mut self.title),
            "Original Script" => Some(&mut self.original_script),
            "Original Translation" => Some(&mut self.original_translation),
            "Original Editing" => Some(&mut self.original_editing),
            "Original Timing" => Some(&mut self.original_timing),
            "Synch Point" => Some(&mut self.synch_point),
            "Script Updated By" => Some(&mut self.script_updated_by),
            "Update Details" => Some(&mut self.update_details),
            "ScriptType" => Some(&mut self.script_type),
            "Collisions" => Some(&mut self.collisions),
            "PlayResX" => Some(&mut self.play_res_x),
            "PlayResY" => Some(&mut self.play_res_y),
            "PlayDepth" => Some(&mut self.play_depth),
            "Timer" => Some(&mut self.timer),
            "WrapStyle" => Some(&mut self.wrap_style),
            _ => None,
        }
    }

    fn slots(&self) -> [&Option<String>; 15] {
        [
            &self.title,
            &self.original_script,
            &self.original_translation,
            &self.original_editing,
            &self.original_timing,
            &self.synch_point,
            &self.script_updated_by,
            &self.update_details,
            &self.script_type,
            &self.collisions,
            &self.play_res_x,
            &self.play_res_y,
            &self.play_depth,
            &self.timer,
            &self.wrap_style,
        ]
    }
}

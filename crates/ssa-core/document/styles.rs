//! Fixed-schema style record and the per-version output filter.
//!
//! The format retains a single style record: every `Style:` line overwrites
//! this record field-by-field, and there is no table of named styles. The
//! record always carries the full field set of both dialects; writing a
//! `V4` or `V4+` table withholds the other dialect's fields without
//! deleting them.

use alloc::string::String;
use alloc::vec::Vec;

use super::Outcome;
use crate::StylesVersion;

/// Known style field names in canonical output order
pub const STYLE_FIELDS: [&str; 25] = [
    "Name",
    "Fontname",
    "Fontsize",
    "PrimaryColour",
    "SecondaryColour",
    "TertiaryColour",
    "OutlineColour",
    "BackColour",
    "Bold",
    "Italic",
    "Underline",
    "StrikeOut",
    "ScaleX",
    "ScaleY",
    "Spacing",
    "Angle",
    "BorderStyle",
    "Outline",
    "Shadow",
    "Alignment",
    "MarginL",
    "MarginR",
    "MarginV",
    "AlphaLevel",
    "Encoding",
];

/// The single retained style record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleTable {
    name: String,
    fontname: String,
    fontsize: String,
    primary_colour: String,
    secondary_colour: String,
    tertiary_colour: String,
    outline_colour: String,
    back_colour: String,
    bold: String,
    italic: String,
    underline: String,
    strikeout: String,
    scale_x: String,
    scale_y: String,
    spacing: String,
    angle: String,
    border_style: String,
    outline: String,
    shadow: String,
    alignment: String,
    margin_l: String,
    margin_r: String,
    margin_v: String,
    alpha_level: String,
    encoding: String,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            name: "Default".into(),
            fontname: "Arial".into(),
            fontsize: "20".into(),
            primary_colour: "&H00FFFFFF".into(),
            secondary_colour: "&H00000000".into(),
            // Value carried over verbatim from the reference tables,
            // including the missing `H`
            tertiary_colour: "&0000000".into(),
            outline_colour: "&H00000000".into(),
            back_colour: "&H00000000".into(),
            bold: "0".into(),
            italic: "0".into(),
            underline: "0".into(),
            strikeout: "0".into(),
            scale_x: "100".into(),
            scale_y: "100".into(),
            spacing: "0".into(),
            angle: "0".into(),
            border_style: "1".into(),
            outline: "2".into(),
            shadow: "0".into(),
            alignment: "2".into(),
            margin_l: "15".into(),
            margin_r: "15".into(),
            margin_v: "15".into(),
            alpha_level: "0".into(),
            encoding: "0".into(),
        }
    }
}

impl StyleTable {
    /// Look up a style field by name; `None` for unknown names.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        let index = STYLE_FIELDS.iter().position(|&known| known == field)?;
        Some(self.values()[index])
    }

    /// Overwrite a known style field.
    ///
    /// Unknown field names are silently dropped ([`Outcome::Ignored`]).
    pub fn set(&mut self, field: &str, value: &str) -> Outcome {
        let Some(slot) = self.slot_mut(field) else {
            return Outcome::Ignored;
        };
        *slot = value.into();
        Outcome::Applied
    }

    /// Iterate `(field, value)` pairs in canonical output order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        STYLE_FIELDS.into_iter().zip(self.values())
    }

    /// The `(field, value)` pairs emitted for the given styles version.
    ///
    /// Applies the version's exclusion set as a write-time filter; the
    /// record itself keeps all fields.
    #[must_use]
    pub fn needed(&self, version: StylesVersion) -> Vec<(&'static str, &str)> {
        let excluded = version.excluded_fields();
        self.iter()
            .filter(|(field, _)| !excluded.contains(field))
            .collect()
    }

    fn slot_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "Name" => Some(&mut self.name),
            "Fontname" => Some(&mut self.fontname),
            "Fontsize" => Some(&mut self.fontsize),
            "PrimaryColour" => Some(&mut self.primary_colour),
            "SecondaryColour" => Some(&mut self.secondary_colour),
            "TertiaryColour" => Some(&mut self.tertiary_colour),
            "OutlineColour" => Some(&mut self.outline_colour),
            "BackColour" => Some(&mut self.back_colour),
            "Bold" => Some(&mut self.bold),
            "Italic" => Some(&mut self.italic),
            "Underline" => Some(&mut self.underline),
            "StrikeOut" => Some(&mut self.strikeout),
            "ScaleX" => Some(&mut self.scale_x),
            "ScaleY" => Some(&mut self.scale_y),
            "Spacing" => Some(&mut self.spacing),
            "Angle" => Some(&mut self.angle),
            "BorderStyle" => Some(&mut self.border_style),
            "Outline" => Some(&mut self.outline),
            "Shadow" => Some(&mut self.shadow),
            "Alignment" => Some(&mut self.alignment),
            "MarginL" => Some(&mut self.margin_l),
            "MarginR" => Some(&mut self.margin_r),
            "MarginV" => Some(&mut self.margin_v),
            "AlphaLevel" => Some(&mut self.alpha_level),
            "Encoding" => Some(&mut self.encoding),
            _ => None,
        }
    }

    fn values(&self) -> [&str; 25] {
        [
            &self.name,
            &self.fontname,
            &self.fontsize,
            &self.primary_colour,
            &self.secondary_colour,
            &self.tertiary_colour,
            &self.outline_colour,
            &self.back_colour,
            &self.bold,
            &self.italic,
            &self.underline,
            &self.strikeout,
            &self.scale_x,
            &self.scale_y,
            &self.spacing,
            &self.angle,
            &self.border_style,
            &self.outline,
            &self.shadow,
            &self.alignment,
            &self.margin_l,
            &self.margin_r,
            &self.margin_v,
            &self.alpha_level,
            &self.encoding,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_format_constants() {
        let styles = StyleTable::default();
        assert_eq!(styles.get("Name"), Some("Default"));
        assert_eq!(styles.get("Fontname"), Some("Arial"));
        assert_eq!(styles.get("PrimaryColour"), Some("&H00FFFFFF"));
        assert_eq!(styles.get("TertiaryColour"), Some("&0000000"));
        assert_eq!(styles.get("MarginV"), Some("15"));
        assert_eq!(styles.get("Encoding"), Some("0"));
    }

    #[test]
    fn set_overwrites_known_fields_only() {
        let mut styles = StyleTable::default();
        assert_eq!(styles.set("Fontsize", "32"), Outcome::Applied);
        assert_eq!(styles.get("Fontsize"), Some("32"));

        assert_eq!(styles.set("Fontweight", "700"), Outcome::Ignored);
        assert_eq!(styles.get("Fontweight"), None);
    }

    #[test]
    fn excluded_fields_exist_in_the_record() {
        // Exclusion filters output; it never names a field the record lacks.
        let styles = StyleTable::default();
        for version in [StylesVersion::V4, StylesVersion::V4Plus] {
            for field in version.excluded_fields() {
                assert!(styles.get(field).is_some(), "missing field {field}");
            }
        }
    }

    #[test]
    fn needed_applies_the_version_filter() {
        let styles = StyleTable::default();

        let v4: Vec<&str> = styles
            .needed(StylesVersion::V4)
            .into_iter()
            .map(|(field, _)| field)
            .collect();
        assert_eq!(v4.len(), 18);
        assert!(!v4.contains(&"ScaleX"));
        assert!(!v4.contains(&"OutlineColour"));
        assert!(v4.contains(&"TertiaryColour"));

        let v4plus: Vec<&str> = styles
            .needed(StylesVersion::V4Plus)
            .into_iter()
            .map(|(field, _)| field)
            .collect();
        assert_eq!(v4plus.len(), 23);
        assert!(!v4plus.contains(&"TertiaryColour"));
        assert!(!v4plus.contains(&"AlphaLevel"));
        assert!(v4plus.contains(&"ScaleX"));
    }
}

//! End-to-end parsing tests over complete v4.00 and v4.00+ scripts.

use ssa_core::{Script, StylesVersion};

const SSA_V4: &str = r"[Script Info]
; This script was generated by a test fixture
Title: Coffee Talk
Original Script: <unknown>
ScriptType: v4.00
Collisions: Normal
PlayResX: 384
PlayResY: 288
PlayDepth: 0
Timer: 100.0

[V4 Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, TertiaryColour, BackColour, Bold, Italic, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, AlphaLevel, Encoding
Style: Default, Arial, 20, &H00FFFFFF, &H00000000, &0000000, &H00000000, 0, 0, 1, 2, 0, 2, 15, 15, 15, 0, 0

[Events]
Format: Marked, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: Marked=0,0:00:00.00,0:00:20.00,Default,,0000,0000,0000,,Hi, my name is Fred,\Nnice to meet you.
Dialogue: Marked=0,0:00:21.50,0:00:22.50,Default,,0000,0000,0000,,Hi, I'm Bill.
Dialogue: Marked=0,0:00:23.00,0:00:25.00,Default,,0000,0000,0000,,Would you like to get a coffee?
Dialogue: Marked=0,0:00:27.50,0:00:37.50,Default,,0000,0000,0000,,Sure! I've only had one today.
Dialogue: Marked=0,0:00:40.00,0:00:41.00,Default,,0000,0000,0000,,This is my fourth!
Dialogue: Marked=0,0:01:12.50,0:01:32.50,Default,,0000,0000,0000,,OK, let's go.
";

const ASS_V4_PLUS: &str = r"[Script Info]
Title: Coffee Talk
ScriptType: v4.00+
Collisions: Normal
PlayResX: 384
PlayResY: 288
Timer: 100.0

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20,&H00FFFFFF,&H00000000,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,15,15,15,0

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:00.00,0:00:20.00,Default,,0000,0000,0000,,Hi, my name is Fred,\Nnice to meet you.
Dialogue: 0,0:00:21.50,0:00:22.50,Default,,0000,0000,0000,,Hi, I'm Bill.
Dialogue: 0,0:00:23.00,0:00:25.00,Default,,0000,0000,0000,,Would you like to get a coffee?
Dialogue: 0,0:00:27.50,0:00:37.50,Default,,0000,0000,0000,,Sure! I've only had one today.
Dialogue: 0,0:00:40.00,0:00:41.00,Default,,0000,0000,0000,,This is my fourth!
Dialogue: 0,0:01:12.50,0:01:32.50,Default,,0000,0000,0000,,OK, let's go.
";

#[test]
fn v4_script_parses_completely() {
    let script = Script::parse(SSA_V4).expect("fixture should parse");

    assert_eq!(script.script_type().unwrap(), "v4.00");
    assert_eq!(script.styles_version(), StylesVersion::V4);
    assert_eq!(script.cues().len(), 6);

    let first = &script.cues()[0];
    assert_eq!(first.start_ms(), Some(0));
    assert_eq!(first.end_ms(), Some(20_000));
    assert_eq!(first.duration_ms(), Some(20_000));
    assert_eq!(first.text, r"Hi, my name is Fred,\Nnice to meet you.");
    // The Marked column never reaches the cue; the layer keeps its default.
    assert_eq!(first.layer, "0");

    let second = &script.cues()[1];
    assert_eq!(second.start_ms(), Some(21_500));
    assert_eq!(second.end_ms(), Some(22_500));
    assert_eq!(second.text, "Hi, I'm Bill.");

    let last = &script.cues()[5];
    assert_eq!(last.start_ms(), Some(72_500));
    assert_eq!(last.end_ms(), Some(92_500));
    assert_eq!(last.duration_ms(), Some(20_000));
    assert_eq!(last.text, "OK, let's go.");
}

#[test]
fn v4_script_collects_headers_styles_and_comments() {
    let script = Script::parse(SSA_V4).unwrap();

    assert_eq!(script.header("Title"), Some("Coffee Talk"));
    assert_eq!(script.header("PlayResX"), Some("384"));
    assert_eq!(
        script.comments(),
        &[" This script was generated by a test fixture"]
    );

    // The style row landed in the single retained record.
    assert_eq!(script.style("Name"), Some("Default"));
    assert_eq!(script.style("Fontname"), Some("Arial"));
    assert_eq!(script.style("MarginV"), Some("15"));

    // The declared column list is kept as parsed.
    let format = script.styles_format().unwrap();
    assert_eq!(format[0], "Name");
    assert_eq!(format.len(), 18);
}

#[test]
fn v4_plus_script_parses_completely() {
    let script = Script::parse(ASS_V4_PLUS).expect("fixture should parse");

    assert_eq!(script.script_type().unwrap(), "v4.00+");
    assert_eq!(script.styles_version(), StylesVersion::V4Plus);
    assert_eq!(script.cues().len(), 6);

    let first = &script.cues()[0];
    assert_eq!(first.start_ms(), Some(0));
    assert_eq!(first.end_ms(), Some(20_000));
    assert_eq!(first.text, r"Hi, my name is Fred,\Nnice to meet you.");
    assert_eq!(first.layer, "0");

    let last = &script.cues()[5];
    assert_eq!(last.start_ms(), Some(72_500));
    assert_eq!(last.end_ms(), Some(92_500));
    assert_eq!(last.text, "OK, let's go.");
}

#[test]
fn duplicate_identical_events_format_is_tolerated() {
    // Some real-world files repeat the whole [Events] header block.
    let source = ASS_V4_PLUS.replace(
        "[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n",
        "[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n",
    );

    let script = Script::parse(&source).unwrap();
    assert_eq!(script.cues().len(), 6);
}

#[test]
fn dialogue_text_keeps_commas_and_override_tags() {
    let source = r"[Script Info]
ScriptType: v4.00+

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:23:49.57,0:23:54.25,Sign,,0,0,0,,{\fad(234,1)}Page 159\N\N{\fs18} Quiet Lakes and Forest Shadows
";

    let script = Script::parse(source).unwrap();
    let cue = &script.cues()[0];
    assert_eq!(cue.start_ms(), Some(1_429_570));
    assert_eq!(
        cue.text,
        r"{\fad(234,1)}Page 159\N\N{\fs18} Quiet Lakes and Forest Shadows"
    );
    assert_eq!(cue.style, "Sign");
}

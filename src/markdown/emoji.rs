//! Emoji shortcode substitution.
//!
//! Only the shortcodes the export commonly contains are covered; anything
//! outside the dictionary passes through verbatim.

/// Shortcode dictionary. `shit` and `sparkle` intentionally alias the
/// glyphs of `poop` and `sparkles`.
const EMOJI: &[(&str, &str)] = &[
    ("+1", "👍"),
    ("-1", "👎"),
    ("bulb", "💡"),
    ("computer", "💻"),
    ("inbox_tray", "📥"),
    ("link", "🔗"),
    ("lock", "🔒"),
    ("mag", "🔍"),
    ("memo", "📝"),
    ("moneybag", "💰"),
    ("movie_camera", "🎥"),
    ("poop", "💩"),
    ("pray", "🙏"),
    ("shit", "💩"),
    ("sparkle", "✨"),
    ("sparkles", "✨"),
    ("speech_balloon", "💬"),
    ("unlock", "🔓"),
];

/// Replaces every `:<shortcode>:` occurrence for dictionary entries.
pub fn replace_shortcodes(input: &str) -> String {
    EMOJI.iter().fold(input.to_string(), |text, (code, glyph)| {
        text.replace(&format!(":{code}:"), glyph)
    })
}

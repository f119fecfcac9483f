//! Large block glyphs for the clock face.
//!
//! Terminals cannot change font size, so large `fontSize` settings switch the
//! clock to these five-row glyphs instead.

/// Glyph height in rows.
pub const HEIGHT: usize = 5;

/// Font sizes at or above this render with block glyphs.
pub const LARGE_FONT_THRESHOLD: f64 = 48.0;

const ZERO: [&str; HEIGHT] = ["███", "█ █", "█ █", "█ █", "███"];
const ONE: [&str; HEIGHT] = [" ██", "  █", "  █", "  █", "  █"];
const TWO: [&str; HEIGHT] = ["███", "  █", "███", "█  ", "███"];
const THREE: [&str; HEIGHT] = ["███", "  █", "███", "  █", "███"];
const FOUR: [&str; HEIGHT] = ["█ █", "█ █", "███", "  █", "  █"];
const FIVE: [&str; HEIGHT] = ["███", "█  ", "███", "  █", "███"];
const SIX: [&str; HEIGHT] = ["███", "█  ", "███", "█ █", "███"];
const SEVEN: [&str; HEIGHT] = ["███", "  █", "  █", "  █", "  █"];
const EIGHT: [&str; HEIGHT] = ["███", "█ █", "███", "█ █", "███"];
const NINE: [&str; HEIGHT] = ["███", "█ █", "███", "  █", "███"];
const COLON: [&str; HEIGHT] = [" ", "█", " ", "█", " "];
const DOT: [&str; HEIGHT] = [" ", " ", " ", " ", "█"];

fn glyph(c: char) -> Option<&'static [&'static str; HEIGHT]> {
    let glyph = match c {
        '0' => &ZERO,
        '1' => &ONE,
        '2' => &TWO,
        '3' => &THREE,
        '4' => &FOUR,
        '5' => &FIVE,
        '6' => &SIX,
        '7' => &SEVEN,
        '8' => &EIGHT,
        '9' => &NINE,
        ':' => &COLON,
        '.' => &DOT,
        _ => return None,
    };
    Some(glyph)
}

/// Renders `text` as block glyphs, one string per row.
///
/// Characters without a glyph are skipped.
pub fn render(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();
    (0..HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Whether `font_size` calls for block glyphs.
pub fn is_large(font_size: f64) -> bool {
    font_size >= LARGE_FONT_THRESHOLD
}

//! Block-letter title banner
//!
//! Stands in for the title image on terminals tall enough to show it.

/// Rows in the block-letter banner
pub const BANNER_HEIGHT: u16 = 5;

const GLYPH_WIDTH: usize = 5;

const TITLE: &str = "ARCHER";

/// Plain title for terminals too short for the banner
pub const COMPACT_TITLE: &str = "A R C H E R";

fn glyph(c: char) -> [&'static str; 5] {
    match c {
        'A' => [" ███ ", "█   █", "█████", "█   █", "█   █"],
        'R' => ["████ ", "█   █", "████ ", "█  █ ", "█   █"],
        'C' => [" ████", "█    ", "█    ", "█    ", " ████"],
        'H' => ["█   █", "█   █", "█████", "█   █", "█   █"],
        'E' => ["█████", "█    ", "████ ", "█    ", "█████"],
        _ => ["     "; 5],
    }
}

/// Banner rows, glyphs separated by one blank column
pub fn banner_lines() -> Vec<String> {
    (0..BANNER_HEIGHT as usize)
        .map(|row| {
            TITLE
                .chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Display width of the banner
pub fn banner_width() -> usize {
    let glyphs = TITLE.chars().count();
    glyphs * GLYPH_WIDTH + glyphs.saturating_sub(1)
}

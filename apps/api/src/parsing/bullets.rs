//! Legacy bullet glyph removal.
//!
//! Source resumes use whatever list markers their authors liked. BRF output
//! applies its own uniform glyph, so any leading marker run is dropped while
//! the wording after it is kept byte-for-byte.

/// List markers recognised at the start of a source line.
pub const LEGACY_BULLETS: &[char] = &[
    '-', '•', '●', '▪', '◦', '■', '□', '*', '–', '—', '→', '►', '➤', '➔', '➢', '✓', '✔', '·',
];

pub fn is_legacy_bullet(c: char) -> bool {
    LEGACY_BULLETS.contains(&c)
}

/// Removes a leading run of bullet glyphs (and the whitespace around them).
///
/// Lines that do not start with a glyph, after optional indentation, are
/// returned unchanged. The glyph run may be interleaved with whitespace
/// (`"- • text"`), and all of it is removed in one call so a second call
/// is always a no-op.
pub fn strip_bullets(line: &str) -> &str {
    let body = line.trim_start();
    match body.chars().next() {
        Some(c) if is_legacy_bullet(c) => {
            body.trim_start_matches(|c: char| is_legacy_bullet(c) || c.is_whitespace())
        }
        _ => line,
    }
}

/// Bullet-stripped, whitespace-trimmed form of a content line.
pub fn clean_line(line: &str) -> String {
    strip_bullets(line).trim().to_string()
}

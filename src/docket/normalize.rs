const NBSP: char = '\u{00A0}';

/// Strips the markup artifacts the docket pages leave in cell text.
///
/// Only the first non-breaking space and the first double space are touched,
/// so a second `clean` pass can still change the result.
pub fn clean(raw: &str) -> String {
    let trimmed = raw.strip_suffix('\n').unwrap_or(raw);
    let without_nbsp = trimmed.replacen(NBSP, "", 1);
    without_nbsp.replacen("  ", " ", 1)
}

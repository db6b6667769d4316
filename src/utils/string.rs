//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Pluralize `dependency` style words ending in `y`
pub fn pluralize_y(word: &str, count: usize) -> String {
    match word.strip_suffix('y') {
        Some(stem) if count != 1 => format!("{stem}ies"),
        _ => word.to_string(),
    }
}

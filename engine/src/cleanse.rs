//! Preset-based text cleaning.
//!
//! Deletes every occurrence of each preset pattern from the input, including
//! the pattern spelled with the opposite path separator, so a preset written
//! with forward slashes also strips its backslashed form and vice versa.

/// Patterns are one per line; surrounding whitespace is trimmed and blank
/// lines are ignored.
pub fn preset_patterns(presets: &str) -> Vec<&str> {
    presets
        .lines()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Remove every preset pattern (and its slash-swapped spellings) from `input`.
pub fn cleanse_text(input: &str, presets: &str) -> String {
    let mut result = input.to_string();
    for pattern in preset_patterns(presets) {
        result = result.replace(pattern, "");
        let backslashed = pattern.replace('/', "\\");
        result = result.replace(&backslashed, "");
        let forward = pattern.replace('\\', "/");
        result = result.replace(&forward, "");
    }
    result
}

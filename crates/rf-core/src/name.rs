//! Name normalization.

/// Normalize a display name for identity matching.
///
/// Lower-cases the input, trims surrounding whitespace, and collapses every
/// internal run of whitespace to a single space. Never fails; an empty or
/// whitespace-only input yields an empty string. Whitespace is the set of
/// [`is_name_space`].
pub fn normalize_name(name: &str) -> String {
    name.split(is_name_space)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace as browsers see it in pasted names: Unicode `White_Space`
/// plus the byte-order mark, without NEXT LINE (U+0085).
pub fn is_name_space(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

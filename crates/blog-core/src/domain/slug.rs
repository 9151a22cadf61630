use unicode_normalization::UnicodeNormalization;

/// Derive a URL-safe slug from free text.
///
/// Lower-cases, decomposes (NFD) and drops combining diacritics, then
/// collapses every run of characters outside `[a-z0-9]` into one `-`.
/// Leading and trailing separators are trimmed.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.to_lowercase().nfd() {
        if ('\u{0300}'..='\u{036f}').contains(&c) {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

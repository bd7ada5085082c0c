/// Removes every whitespace character (not only at the edges) and upper-cases the rest.
///
/// Upper-casing is the full Unicode mapping, so a character may expand
/// (`ß` becomes `SS`). Length checks must therefore run on the normalized value.
pub fn normalize_candidate(candidate: &str) -> String {
    candidate
        .chars()
        .filter(|c| !is_ignored_whitespace(*c))
        .collect::<String>()
        .to_uppercase()
}

#[inline]
fn is_ignored_whitespace(c: char) -> bool {
    // U+FEFF is not `White_Space` in Unicode but browsers treat it as such in `\s`
    c.is_whitespace() || c == '\u{feff}'
}

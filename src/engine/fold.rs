use icu_normalizer::DecomposingNormalizerBorrowed;

/// Combining diacritical marks block.
fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

/// Strip accents for comparison: NFD-decompose, then drop combining marks.
/// Only used to compare words; never shown to the user.
pub fn fold_diacritics(word: &str) -> String {
    let nfd = DecomposingNormalizerBorrowed::new_nfd();
    nfd.normalize(word)
        .chars()
        .filter(|&ch| !is_combining_mark(ch))
        .collect()
}

//! Diacritic folding into the plain working alphabet used by the transducers

use unicode_normalization::UnicodeNormalization;

/// Special-letter folds, applied in order after decomposition.
///
/// Precomposed forms are listed alongside their base letters so that input
/// which survives decomposition (æ, þ, ð, ƿ have no canonical decomposition)
/// is still caught.
const FOLDS: &[(char, &str)] = &[
    ('ǣ', "ae"),
    ('æ', "ae"),
    ('ā', "a"),
    ('ă', "a"),
    ('ē', "e"),
    ('ĕ', "e"),
    ('ī', "i"),
    ('ĭ', "i"),
    ('ō', "o"),
    ('ŏ', "o"),
    ('ū', "u"),
    ('ŭ', "u"),
    ('ȳ', "y"),
    ('ċ', "c"),
    ('ġ', "g"),
    ('ƿ', "w"),
    ('þ', "th"),
    ('ð', "th"),
];

/// Combining diacritical marks block
#[inline]
fn is_combining_diacritic(ch: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&ch)
}

#[inline]
fn fold(ch: char) -> Option<&'static str> {
    FOLDS
        .iter()
        .find(|(from, _)| *from == ch)
        .map(|(_, to)| *to)
}

/// Lowercase `text`, strip combining diacritics and fold special letters.
///
/// ```
/// use runescript_core::normalize;
///
/// assert_eq!(normalize("Ǣþelrēd"), "aethelred");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.to_lowercase().nfd() {
        if is_combining_diacritic(ch) {
            continue;
        }
        match fold(ch) {
            Some(folded) => out.push_str(folded),
            None => out.push(ch),
        }
    }
    out
}

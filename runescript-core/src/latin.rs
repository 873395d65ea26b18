//! Classical Latin orthography
//!
//! Converts free-standing numbers to Roman numerals, uppercases, folds U/J
//! onto V/I and strips punctuation the inscriptional style does not use.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Subtractive Roman numeral table, largest first
const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value with a standard Roman numeral
pub const MAX_ROMAN: u32 = 3999;

const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '\'', '"', '(', ')', '[', ']', '{', '}',
];

const DASHES: &[char] = &[
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}',
];

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?-u:\b)[0-9]+(?-u:\b)").expect("numeral pattern is valid")
    })
}

/// Roman numeral for `n`, or `None` outside `1..=3999`.
pub fn to_roman(n: u32) -> Option<String> {
    if n == 0 || n > MAX_ROMAN {
        return None;
    }

    let mut remaining = n;
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while remaining >= value {
            out.push_str(numeral);
            remaining -= value;
        }
    }
    Some(out)
}

fn replace_numbers(text: &str) -> String {
    number_pattern()
        .replace_all(text, |caps: &Captures| {
            let digits = &caps[0];
            digits
                .parse::<u32>()
                .ok()
                .and_then(to_roman)
                .unwrap_or_else(|| digits.to_string())
        })
        .into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Apply classical Latin orthography to `text`.
///
/// ```
/// use runescript_core::to_classical_latin;
///
/// assert_eq!(to_classical_latin("veni vidi vici 9"), "VENI VIDI VICI IX");
/// ```
pub fn to_classical_latin(text: &str) -> String {
    // Numerals first: they are already uppercase and must not be re-cased
    let numbered = replace_numbers(text);
    let upper: String = numbered
        .to_uppercase()
        .chars()
        .filter(|ch| !STRIPPED_PUNCTUATION.contains(ch))
        .map(|ch| match ch {
            'U' => 'V',
            'J' => 'I',
            other => other,
        })
        .collect();
    collapse_whitespace(&upper)
}

/// [`to_classical_latin`] plus dash removal and `QU` → `QV`.
///
/// `AE` and `OE` are already classical spellings and are left as they are.
/// The base transform has already folded every `U` to `V`, so the `QU`
/// replacement never fires on its output.
pub fn to_classical_latin_extended(text: &str) -> String {
    let base = to_classical_latin(text);
    let undashed: String = base
        .chars()
        .map(|ch| if DASHES.contains(&ch) { ' ' } else { ch })
        .collect();
    collapse_whitespace(&undashed.replace("QU", "QV"))
}

//! Casing transfer from an input token onto a replacement string
//!
//! The transducers work on lowercase text only. Hosts that substitute a
//! replacement for a typed token use this to carry the token's casing over.

/// Casing pattern detected on an input token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasingPattern {
    /// No recognized capitalization
    AllLower,
    /// First character is unchanged by uppercasing
    InitialCapital,
    /// Multi-character token that is unchanged by uppercasing
    AllUpper,
}

impl CasingPattern {
    /// Classify `token`.
    ///
    /// Both checks compare against the uppercased form, so digits, punctuation
    /// and caseless letters count as already uppercase. A single character is
    /// never [`CasingPattern::AllUpper`].
    pub fn of(token: &str) -> Self {
        let mut chars = token.chars();
        let first = match chars.next() {
            Some(ch) => ch,
            None => return CasingPattern::AllLower,
        };

        if chars.next().is_some() && upper_case(token) == token {
            CasingPattern::AllUpper
        } else if first.to_uppercase().eq(std::iter::once(first)) {
            CasingPattern::InitialCapital
        } else {
            CasingPattern::AllLower
        }
    }

    /// Apply this pattern to `replacement`
    pub fn apply(self, replacement: &str) -> String {
        match self {
            CasingPattern::AllLower => replacement.to_string(),
            CasingPattern::InitialCapital => upper_first(replacement),
            CasingPattern::AllUpper => upper_case(replacement),
        }
    }
}

#[inline]
fn upper_case(s: &str) -> String {
    s.chars().flat_map(char::to_uppercase).collect()
}

#[inline]
fn upper_first(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

/// Reapply the casing of `input_token` to `replacement`.
///
/// ```
/// use runescript_core::apply_casing;
///
/// assert_eq!(apply_casing("Test", "example"), "Example");
/// assert_eq!(apply_casing("TEST", "example"), "EXAMPLE");
/// ```
pub fn apply_casing(input_token: &str, replacement: &str) -> String {
    CasingPattern::of(input_token).apply(replacement)
}

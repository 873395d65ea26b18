//! Marker → transform resolution
//!
//! A marker names either a script transducer or one of the classical Latin
//! transforms.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::latin::{to_classical_latin, to_classical_latin_extended};
use crate::script::ScriptId;

/// Marker for [`Transform::ClassicalLatin`]
pub const LATIN_MARKER: &str = "Latin";
/// Marker for [`Transform::ClassicalLatinExtended`]
pub const LATIN_EXTENDED_MARKER: &str = "LatinExtended";

/// Conversion selected by a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Transliterate into a built-in script
    Script(ScriptId),
    /// Classical Latin orthography
    ClassicalLatin,
    /// Classical Latin with dash and `QU` handling
    ClassicalLatinExtended,
}

impl Transform {
    /// Resolve a marker, script code or alias, ignoring ASCII case
    pub fn from_marker(marker: &str) -> Option<Self> {
        let marker = marker.trim();
        if marker.eq_ignore_ascii_case(LATIN_MARKER) {
            Some(Transform::ClassicalLatin)
        } else if marker.eq_ignore_ascii_case(LATIN_EXTENDED_MARKER) {
            Some(Transform::ClassicalLatinExtended)
        } else {
            marker.parse::<ScriptId>().ok().map(Transform::Script)
        }
    }

    /// Canonical marker spelling
    pub fn marker(&self) -> &'static str {
        match self {
            Transform::Script(id) => id.marker(),
            Transform::ClassicalLatin => LATIN_MARKER,
            Transform::ClassicalLatinExtended => LATIN_EXTENDED_MARKER,
        }
    }

    /// Run the transform over `text`
    pub fn apply(&self, text: &str) -> String {
        match self {
            Transform::Script(id) => id.transliterate(text),
            Transform::ClassicalLatin => to_classical_latin(text),
            Transform::ClassicalLatinExtended => to_classical_latin_extended(text),
        }
    }

    /// Every transform, in display order
    pub fn all() -> Vec<Transform> {
        ScriptId::ALL
            .into_iter()
            .map(Transform::Script)
            .chain([Transform::ClassicalLatin, Transform::ClassicalLatinExtended])
            .collect()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

impl FromStr for Transform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transform::from_marker(s).ok_or_else(|| Error::UnsupportedScript(s.to_string()))
    }
}

/// Canonical marker allow-list covering every transform
pub fn default_markers() -> Vec<&'static str> {
    Transform::all().iter().map(Transform::marker).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        assert_eq!(
            default_markers(),
            vec![
                "Futhorc",
                "ElderFuthark",
                "YoungerFuthark",
                "Medieval",
                "Gothic",
                "Latin",
                "LatinExtended"
            ]
        );
    }

    #[test]
    fn test_from_marker() {
        assert_eq!(
            Transform::from_marker("Futhorc"),
            Some(Transform::Script(ScriptId::Futhorc))
        );
        assert_eq!(
            Transform::from_marker("futhorc"),
            Some(Transform::Script(ScriptId::Futhorc))
        );
        assert_eq!(Transform::from_marker("latin"), Some(Transform::ClassicalLatin));
        assert_eq!(
            Transform::from_marker("LatinExtended"),
            Some(Transform::ClassicalLatinExtended)
        );
        assert_eq!(Transform::from_marker("Ogham"), None);
    }

    #[test]
    fn test_markers_round_trip() {
        for transform in Transform::all() {
            assert_eq!(Transform::from_marker(transform.marker()), Some(transform));
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(
            Transform::Script(ScriptId::Futhorc).apply("thing"),
            "ᚦᛁᛝ"
        );
        assert_eq!(Transform::ClassicalLatin.apply("anno 2024"), "ANNO MMXXIV");
    }

    #[test]
    fn test_from_str_error() {
        assert!(matches!(
            "nope".parse::<Transform>(),
            Err(Error::UnsupportedScript(_))
        ));
    }
}

//! Digraph-aware transducer
//!
//! One generic transducer serves every script; the script only contributes
//! its [`MappingTable`].

use crate::normalize::normalize;
use crate::script::{MappingTable, ScriptConfig};

/// Converts normalized Latin text into a target script by table lookup
#[derive(Debug, Clone)]
pub struct Transducer {
    code: String,
    name: String,
    marker: String,
    aliases: Vec<String>,
    table: MappingTable,
}

impl Transducer {
    /// Create a transducer over a bare table
    pub fn new(code: impl Into<String>, table: MappingTable) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            marker: code.clone(),
            aliases: Vec::new(),
            code,
            table,
        }
    }

    /// Create from a validated script configuration
    pub fn from_config(config: &ScriptConfig) -> Self {
        let table = MappingTable::from_config(config);
        tracing::trace!(
            code = %config.metadata.code,
            keys = table.len(),
            digraphs = table.digraphs().len(),
            "built mapping table"
        );
        Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            marker: config.marker().to_string(),
            aliases: config.metadata.aliases.clone(),
            table,
        }
    }

    /// Script code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Script display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical block marker
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Extra lookup names from the table metadata
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Underlying mapping table
    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Transliterate `text` into the target script.
    ///
    /// Text is normalized first. At each position the longest table key is
    /// preferred; characters without a mapping are copied through.
    pub fn transliterate(&self, text: &str) -> String {
        let normalized = normalize(text);
        self.transliterate_normalized(&normalized)
    }

    /// Transliterate text that is already normalized
    pub fn transliterate_normalized(&self, text: &str) -> String {
        // Byte offset of every char boundary, including the end of the string
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let n = offsets.len() - 1;

        let mut out = String::with_capacity(text.len() * 3);
        let mut i = 0;

        'scan: while i < n {
            for &len in self.table.candidate_lengths() {
                if i + len > n {
                    continue;
                }
                let candidate = &text[offsets[i]..offsets[i + len]];
                if let Some(mapped) = self.table.get_digraph(candidate) {
                    out.push_str(mapped);
                    i += len;
                    continue 'scan;
                }
            }

            let current = &text[offsets[i]..offsets[i + 1]];
            let ch = current.chars().next().unwrap_or_default();
            match self.table.get_char(ch) {
                Some(mapped) => out.push_str(mapped),
                None => out.push_str(current),
            }
            i += 1;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Transducer {
        Transducer::new("toy", MappingTable::new([("a", "X"), ("aa", "Y"), ("b", "Z")]))
    }

    #[test]
    fn test_longest_match_wins() {
        assert_eq!(toy().transliterate("aa"), "Y");
    }

    #[test]
    fn test_odd_run_falls_back_to_single() {
        assert_eq!(toy().transliterate("aaa"), "YX");
        assert_eq!(toy().transliterate("aab"), "YZ");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(toy().transliterate("c a!"), "c X!");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(toy().transliterate(""), "");
    }

    #[test]
    fn test_input_is_normalized() {
        assert_eq!(toy().transliterate("ÁĀ"), "Y");
    }

    #[test]
    fn test_three_char_key_preferred() {
        let t = Transducer::new(
            "t",
            MappingTable::new([("s", "1"), ("sc", "2"), ("sch", "3"), ("h", "4")]),
        );
        assert_eq!(t.transliterate("schsc"), "32");
        assert_eq!(t.transliterate("sh"), "14");
    }

    #[test]
    fn test_multibyte_pass_through() {
        assert_eq!(toy().transliterate("ᚠ a ✓"), "ᚠ X ✓");
    }

    #[test]
    fn test_digraph_near_end_of_input() {
        // candidate longer than the remaining input must not panic
        let t = Transducer::new("t", MappingTable::new([("abc", "1")]));
        assert_eq!(t.transliterate("ab"), "ab");
    }

    #[test]
    fn test_new_sets_identity() {
        let t = toy();
        assert_eq!(t.code(), "toy");
        assert_eq!(t.marker(), "toy");
        assert_eq!(t.name(), "toy");
    }
}

//! Runtime mapping table with longest-match lookup support
//!
//! Single characters are looked up through an ASCII array on the hot path;
//! multi-character keys (the digraph set) live in a hash map keyed by
//! string, probed only for the lengths the table actually defines.

use std::collections::{BTreeSet, HashMap};

use smallvec::SmallVec;

use super::config::ScriptConfig;

/// Immutable source-token → target-string table for one script
#[derive(Debug, Clone)]
pub struct MappingTable {
    /// ASCII lookup table for single-character keys
    ascii: [Option<Box<str>>; 128],
    /// Non-ASCII single-character keys (þ, ð, ø, ƕ...)
    non_ascii: HashMap<char, Box<str>>,
    /// Keys of two or more characters
    digraphs: HashMap<Box<str>, Box<str>>,
    /// Distinct digraph key lengths in characters, strictly decreasing
    lengths: SmallVec<[usize; 4]>,
}

impl MappingTable {
    /// Build from `(key, value)` pairs
    ///
    /// Keys are expected to be validated already: non-empty and lowercase.
    /// A later duplicate key overrides an earlier one.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        const NONE: Option<Box<str>> = None;
        let mut ascii = [NONE; 128];
        let mut non_ascii = HashMap::new();
        let mut digraphs = HashMap::new();
        let mut lengths = BTreeSet::new();

        for (key, value) in entries {
            let key = key.as_ref();
            let value: Box<str> = value.as_ref().into();
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (None, _) => continue,
                (Some(ch), None) if ch.is_ascii() => ascii[ch as usize] = Some(value),
                (Some(ch), None) => {
                    non_ascii.insert(ch, value);
                }
                _ => {
                    lengths.insert(key.chars().count());
                    digraphs.insert(key.into(), value);
                }
            }
        }

        Self {
            ascii,
            non_ascii,
            digraphs,
            lengths: lengths.into_iter().rev().collect(),
        }
    }

    /// Build from a validated script configuration
    pub fn from_config(config: &ScriptConfig) -> Self {
        Self::new(config.mappings.iter())
    }

    /// Look up a single character - hot path
    #[inline]
    pub fn get_char(&self, ch: char) -> Option<&str> {
        if ch.is_ascii() {
            self.ascii[ch as usize].as_deref()
        } else {
            self.non_ascii.get(&ch).map(|v| &**v)
        }
    }

    /// Look up a multi-character key
    #[inline]
    pub fn get_digraph(&self, key: &str) -> Option<&str> {
        self.digraphs.get(key).map(|v| &**v)
    }

    /// Look up any key
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.get_char(ch),
            (Some(_), Some(_)) => self.get_digraph(key),
            (None, _) => None,
        }
    }

    /// Digraph key lengths to try, longest first
    #[inline]
    pub fn candidate_lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// The digraph set, sorted
    pub fn digraphs(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.digraphs.keys().map(|k| &**k).collect();
        keys.sort_unstable();
        keys
    }

    /// Total number of keys
    pub fn len(&self) -> usize {
        self.ascii.iter().filter(|v| v.is_some()).count()
            + self.non_ascii.len()
            + self.digraphs.len()
    }

    /// Whether the table has no keys at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_digraph_lookup() {
        let table = MappingTable::new([("a", "X"), ("aa", "Y"), ("þ", "Z")]);

        assert_eq!(table.get_char('a'), Some("X"));
        assert_eq!(table.get_char('þ'), Some("Z"));
        assert_eq!(table.get_char('b'), None);
        assert_eq!(table.get_digraph("aa"), Some("Y"));
        assert_eq!(table.get("aa"), Some("Y"));
        assert_eq!(table.get(""), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_candidate_lengths_descending() {
        let table = MappingTable::new([("a", "1"), ("th", "2"), ("sch", "3"), ("ng", "4")]);
        assert_eq!(table.candidate_lengths(), &[3, 2]);
    }

    #[test]
    fn test_no_digraphs() {
        let table = MappingTable::new([("a", "1"), ("b", "2")]);
        assert!(table.candidate_lengths().is_empty());
        assert!(table.digraphs().is_empty());
    }

    #[test]
    fn test_digraph_lengths_counted_in_chars() {
        // Two characters, four bytes
        let table = MappingTable::new([("þa", "1")]);
        assert_eq!(table.candidate_lengths(), &[2]);
    }

    #[test]
    fn test_empty_key_skipped() {
        let table = MappingTable::new([("", "X")]);
        assert!(table.is_empty());
    }
}

//! Target scripts and their mapping tables
//!
//! Tables are data: each built-in script ships as an embedded TOML document
//! under `configs/scripts/`, parsed once into a [`MappingTable`]. External
//! tables with the same schema can be loaded through [`ScriptConfig`].

pub mod config;
pub(crate) mod loader;
pub mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use config::ScriptConfig;
pub use loader::{list_scripts, transducer};
pub use table::MappingTable;

/// Built-in target scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptId {
    /// Anglo-Saxon Futhorc
    Futhorc,
    /// Elder Futhark
    ElderFuthark,
    /// Younger Futhark (long-branch)
    YoungerFuthark,
    /// Medieval (dotted) runes
    MedievalRunes,
    /// Gothic alphabet
    Gothic,
}

impl ScriptId {
    /// Every built-in script, in display order
    pub const ALL: [ScriptId; 5] = [
        ScriptId::Futhorc,
        ScriptId::ElderFuthark,
        ScriptId::YoungerFuthark,
        ScriptId::MedievalRunes,
        ScriptId::Gothic,
    ];

    /// Registry code, matching `metadata.code` of the embedded table
    pub fn code(&self) -> &'static str {
        match self {
            ScriptId::Futhorc => "futhorc",
            ScriptId::ElderFuthark => "elder-futhark",
            ScriptId::YoungerFuthark => "younger-futhark",
            ScriptId::MedievalRunes => "medieval",
            ScriptId::Gothic => "gothic",
        }
    }

    /// Canonical marker used in `<Marker>` blocks and `@marker` lines
    pub fn marker(&self) -> &'static str {
        match self {
            ScriptId::Futhorc => "Futhorc",
            ScriptId::ElderFuthark => "ElderFuthark",
            ScriptId::YoungerFuthark => "YoungerFuthark",
            ScriptId::MedievalRunes => "Medieval",
            ScriptId::Gothic => "Gothic",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ScriptId::Futhorc => "Anglo-Saxon Futhorc",
            ScriptId::ElderFuthark => "Elder Futhark",
            ScriptId::YoungerFuthark => "Younger Futhark",
            ScriptId::MedievalRunes => "Medieval Runes",
            ScriptId::Gothic => "Gothic",
        }
    }

    /// Transliterate `text` with this script's table
    pub fn transliterate(&self, text: &str) -> String {
        transducer(*self).transliterate(text)
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ScriptId {
    type Err = Error;

    /// Accepts a code, marker or table alias, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ScriptId::ALL
            .into_iter()
            .find(|id| {
                needle.eq_ignore_ascii_case(id.code())
                    || needle.eq_ignore_ascii_case(id.marker())
                    || transducer(*id)
                        .aliases()
                        .iter()
                        .any(|alias| needle.eq_ignore_ascii_case(alias))
            })
            .ok_or_else(|| Error::UnsupportedScript(s.to_string()))
    }
}

/// Transliterate `text` into `script`.
///
/// ```
/// use runescript_core::{transliterate, ScriptId};
///
/// assert_eq!(transliterate(ScriptId::Futhorc, "thing"), "ᚦᛁᛝ");
/// ```
pub fn transliterate(script: ScriptId, text: &str) -> String {
    script.transliterate(text)
}

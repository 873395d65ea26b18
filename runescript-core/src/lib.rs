//! Transliteration of Latin-alphabet text into historical scripts
//!
//! This crate converts text into Anglo-Saxon Futhorc, Elder and Younger
//! Futhark, Medieval runes and the Gothic alphabet, applies classical Latin
//! orthography, and finds the marked regions of a document those conversions
//! apply to.
//!
//! # Architecture
//!
//! - **Normalizer**: folds diacritics and special letters to a plain working
//!   alphabet
//! - **Transducer**: one generic longest-match table walker; each script is
//!   only a [`MappingTable`] loaded from embedded TOML
//! - **Markers**: `<Marker>...</Marker>` blocks and `@marker` lines
//! - **Document**: splices transform outputs back into a document
//!
//! Every conversion is total: characters a table does not know pass through
//! unchanged, and unrecognized markup is ignored.
//!
//! # Example
//!
//! ```rust
//! use runescript_core::{convert_document, transliterate, ScriptId};
//!
//! assert_eq!(transliterate(ScriptId::Futhorc, "thing"), "ᚦᛁᛝ");
//!
//! let doc = convert_document("<Gothic>guth</Gothic>", &["Gothic"]);
//! assert_eq!(doc.text, "𐌲𐌿𐌸");
//! ```

pub mod casing;
pub mod document;
pub mod error;
pub mod latin;
pub mod markers;
pub mod normalize;
pub mod script;
pub mod transducer;
pub mod transform;

pub use casing::{apply_casing, CasingPattern};
pub use document::{
    convert_document, convert_documents, find_replacements, Conversion, Replacement,
    ReplacementKind,
};
pub use error::{Error, Result};
pub use latin::{to_classical_latin, to_classical_latin_extended, to_roman};
pub use markers::{parse_blocks, parse_line_commands, LineCommand, MarkerBlock};
pub use normalize::normalize;
pub use script::{list_scripts, transducer, transliterate, MappingTable, ScriptConfig, ScriptId};
pub use transducer::Transducer;
pub use transform::{default_markers, Transform};

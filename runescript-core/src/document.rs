//! Whole-document conversion
//!
//! Locates marker blocks and line commands in a document, runs each through
//! the transform its marker names, and splices the outputs back in.

use serde::Serialize;

use crate::markers::{parse_blocks, parse_line_commands};
use crate::transform::Transform;

/// Form of the marked region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementKind {
    /// `<Marker>...</Marker>`
    Block,
    /// `@marker ...`
    Line,
}

/// One substitution performed on a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub kind: ReplacementKind,
    pub marker: String,
    /// Text handed to the transform (trimmed block content or line payload)
    pub input: String,
    pub output: String,
    /// Byte span in the source document
    pub start: usize,
    pub end: usize,
}

/// Result of converting one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub text: String,
    pub replacements: Vec<Replacement>,
}

impl Conversion {
    /// Whether any marked region was found
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

/// Collect the replacements for `text` without building the new document
pub fn find_replacements<S: AsRef<str>>(text: &str, allowed_markers: &[S]) -> Vec<Replacement> {
    let mut replacements = Vec::new();

    for block in parse_blocks(text, allowed_markers) {
        let Some(transform) = Transform::from_marker(&block.marker) else {
            tracing::debug!(marker = %block.marker, "no transform for marker");
            continue;
        };
        replacements.push(Replacement {
            kind: ReplacementKind::Block,
            output: transform.apply(&block.content),
            marker: block.marker,
            input: block.content,
            start: block.start,
            end: block.end,
        });
    }

    let block_count = replacements.len();
    for command in parse_line_commands(text, allowed_markers) {
        // Lines inside a block belong to the block
        let inside_block = replacements[..block_count]
            .iter()
            .any(|r| command.start < r.end && r.start < command.end);
        if inside_block {
            continue;
        }
        let Some(transform) = Transform::from_marker(&command.marker) else {
            tracing::debug!(marker = %command.marker, "no transform for marker");
            continue;
        };
        replacements.push(Replacement {
            kind: ReplacementKind::Line,
            output: transform.apply(&command.payload),
            marker: command.marker,
            input: command.payload,
            start: command.start,
            end: command.end,
        });
    }

    replacements.sort_by_key(|r| r.start);
    replacements
}

/// Convert every marked region of `text`.
///
/// Spans refer to the original text; outputs are spliced in a single
/// forward pass.
///
/// ```
/// use runescript_core::convert_document;
///
/// let out = convert_document("Hail <Futhorc>thing</Futhorc>!", &["Futhorc"]);
/// assert_eq!(out.text, "Hail ᚦᛁᛝ!");
/// ```
pub fn convert_document<S: AsRef<str>>(text: &str, allowed_markers: &[S]) -> Conversion {
    let replacements = find_replacements(text, allowed_markers);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for replacement in &replacements {
        out.push_str(&text[cursor..replacement.start]);
        out.push_str(&replacement.output);
        cursor = replacement.end;
    }
    out.push_str(&text[cursor..]);

    Conversion {
        text: out,
        replacements,
    }
}

/// Convert several documents, in parallel when the `parallel` feature is on
pub fn convert_documents<T, S>(documents: &[T], allowed_markers: &[S]) -> Vec<Conversion>
where
    T: AsRef<str> + Sync,
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        documents
            .par_iter()
            .map(|doc| convert_document(doc.as_ref(), allowed_markers))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        documents
            .iter()
            .map(|doc| convert_document(doc.as_ref(), allowed_markers))
            .collect()
    }
}

//! Marker block and line command parsing
//!
//! Two forms mark text for conversion:
//!
//! - `<Marker>content</Marker>` blocks. The close tag must repeat the open
//!   tag's spelling; the first matching close tag ends the block, so blocks
//!   never nest.
//! - `@marker payload` lines, where the whole line is the replaceable span.
//!
//! Anything that does not parse (unknown markers, dangling tags, stray angle
//! brackets) is left alone. There is no parse error.

use serde::Serialize;

/// A paired `<Marker>...</Marker>` region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerBlock {
    /// Marker spelling, as listed in the allow-list
    pub marker: String,
    /// Inner text with surrounding whitespace trimmed
    pub content: String,
    /// Byte offset of the opening `<`
    pub start: usize,
    /// Byte offset just past the closing `>`
    pub end: usize,
    /// Character offset of the opening `<`
    pub char_start: usize,
    /// Character offset just past the closing `>`
    pub char_end: usize,
}

/// A `@marker payload` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineCommand {
    /// Marker spelling, as listed in the allow-list
    pub marker: String,
    /// Text after the marker word and its following whitespace
    pub payload: String,
    /// Byte offset of the `@`
    pub start: usize,
    /// Byte offset of the end of the line, excluding the line terminator
    pub end: usize,
}

/// Find every `<Marker>...</Marker>` block whose marker is in `allowed_markers`.
///
/// ```
/// use runescript_core::parse_blocks;
///
/// let blocks = parse_blocks("<Futhorc>hello</Futhorc>", &["Futhorc", "Gothic"]);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].content, "hello");
///
/// assert!(parse_blocks("<Futhorc>hello</Gothic>", &["Futhorc", "Gothic"]).is_empty());
/// ```
pub fn parse_blocks<S: AsRef<str>>(text: &str, allowed_markers: &[S]) -> Vec<MarkerBlock> {
    let mut blocks = Vec::new();
    let mut pos = 0;
    // Character count of text[..pos]
    let mut char_pos = 0;

    while let Some(found) = text[pos..].find('<') {
        let open_at = pos + found;
        char_pos += text[pos..open_at].chars().count();
        pos = open_at;

        let Some((marker, content_start)) = match_open_tag(text, open_at, allowed_markers) else {
            // Not one of ours: step over the '<' and keep scanning
            pos += 1;
            char_pos += 1;
            continue;
        };

        let close_tag = format!("</{marker}>");
        let Some(close_offset) = text[content_start..].find(&close_tag) else {
            tracing::trace!(marker, offset = open_at, "unterminated marker block");
            pos += 1;
            char_pos += 1;
            continue;
        };

        let content_end = content_start + close_offset;
        let end = content_end + close_tag.len();
        let char_end = char_pos + text[open_at..end].chars().count();

        blocks.push(MarkerBlock {
            marker: marker.to_string(),
            content: text[content_start..content_end].trim().to_string(),
            start: open_at,
            end,
            char_start: char_pos,
            char_end,
        });

        pos = end;
        char_pos = char_end;
    }

    tracing::debug!(blocks = blocks.len(), "parsed marker blocks");
    blocks
}

/// If an allowed `<Marker>` tag starts at `open_at`, return the marker and
/// the byte offset just past the tag.
fn match_open_tag<'a, S: AsRef<str>>(
    text: &str,
    open_at: usize,
    allowed_markers: &'a [S],
) -> Option<(&'a str, usize)> {
    let rest = &text[open_at + 1..];
    allowed_markers
        .iter()
        .map(as_str)
        .filter(|marker| !marker.is_empty())
        .find(|marker| {
            rest.strip_prefix(marker)
                .is_some_and(|after| after.starts_with('>'))
        })
        .map(|marker| (marker, open_at + 1 + marker.len() + 1))
}

#[inline]
fn as_str<S: AsRef<str>>(s: &S) -> &str {
    s.as_ref()
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Find every `@marker payload` line whose marker word matches an entry of
/// `allowed_markers`, ignoring ASCII case.
///
/// ```
/// use runescript_core::parse_line_commands;
///
/// let commands = parse_line_commands("intro\n@futhorc thing\n", &["Futhorc"]);
/// assert_eq!(commands[0].marker, "Futhorc");
/// assert_eq!(commands[0].payload, "thing");
/// ```
pub fn parse_line_commands<S: AsRef<str>>(
    text: &str,
    allowed_markers: &[S],
) -> Vec<LineCommand> {
    let mut commands = Vec::new();
    let mut line_start = 0;

    for raw_line in text.split_inclusive('\n') {
        let start = line_start;
        line_start += raw_line.len();

        let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let Some(rest) = line.strip_prefix('@') else {
            continue;
        };
        let word_len: usize = rest
            .chars()
            .take_while(|ch| is_word_char(*ch))
            .map(char::len_utf8)
            .sum();
        if word_len == 0 {
            continue;
        }

        let word = &rest[..word_len];
        let Some(marker) = allowed_markers
            .iter()
            .map(as_str)
            .find(|marker| marker.eq_ignore_ascii_case(word))
        else {
            continue;
        };

        commands.push(LineCommand {
            marker: marker.to_string(),
            payload: rest[word_len..].trim_start().to_string(),
            start,
            end: start + line.len(),
        });
    }

    tracing::debug!(commands = commands.len(), "parsed line commands");
    commands
}

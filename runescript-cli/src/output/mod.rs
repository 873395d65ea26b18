//! Output formatting for extracted marker regions

use anyhow::Result;
use runescript_core::Replacement;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Sink for the regions found by `blocks --extract`
pub trait OutputFormatter: Send + Sync {
    /// Record one converted region found in `source`
    fn format_replacement(&mut self, source: &str, replacement: &Replacement) -> Result<()>;

    /// Flush anything buffered
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One region per line
    Text,
    /// JSON array of regions with offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Every format, in display order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name used on the command line and in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "source:offset, marker, input and output on one line",
            OutputFormat::Json => "JSON array with kind, marker, input, output and byte span",
            OutputFormat::Markdown => "numbered Markdown list with a total",
        }
    }

    /// Build a formatter writing to `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as clap::ValueEnum>::from_str(s, true)
    }
}

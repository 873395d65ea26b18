//! Input handling

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::path::PathBuf;

/// A piece of text to convert and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// File the text was read from; `None` for arguments and stdin
    pub path: Option<PathBuf>,
    pub text: String,
}

impl Source {
    /// Name used in logs and extracted output
    pub fn label(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }
}

/// Collect the text to convert: positional arguments joined by spaces, or
/// the files matching `patterns`, or stdin when both are empty.
pub fn gather_sources(args: &[String], patterns: &[String]) -> Result<Vec<Source>> {
    let mut sources = Vec::new();

    if !args.is_empty() {
        sources.push(Source {
            path: None,
            text: args.join(" "),
        });
    }

    if !patterns.is_empty() {
        for path in resolve_patterns(patterns)? {
            let text = FileReader::read_text(&path)?;
            sources.push(Source {
                path: Some(path),
                text,
            });
        }
    }

    if sources.is_empty() {
        log::debug!("Reading from stdin");
        sources.push(Source {
            path: None,
            text: FileReader::read_stdin()?,
        });
    }

    Ok(sources)
}

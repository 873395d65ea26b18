//! Blocks command implementation

use anyhow::{Context, Result};
use clap::Args;
use runescript_core::{convert_document, convert_documents, Conversion};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::AppContext;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;

/// Arguments for the blocks command
#[derive(Debug, Args)]
pub struct BlocksArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Rewrite each input file with its converted text
    #[arg(long)]
    pub in_place: bool,

    /// List the marked regions instead of replacing them
    #[arg(short = 'x', long, conflicts_with = "in_place")]
    pub extract: bool,

    /// Output format for --extract (default from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Comma-separated marker allow-list (default from config)
    #[arg(short, long, value_name = "MARKERS", value_delimiter = ',')]
    pub markers: Vec<String>,

    /// Convert files on a worker pool
    #[arg(short, long)]
    pub parallel: bool,
}

impl BlocksArgs {
    /// Execute the blocks command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        let markers = self.allowed_markers(&ctx.config);
        log::info!(
            "Scanning {} file(s) for markers: {}",
            files.len(),
            markers.join(", ")
        );

        let documents = files
            .iter()
            .map(|path| FileReader::read_text(path))
            .collect::<Result<Vec<_>>>()?;

        let mut progress = ProgressReporter::new(ctx.quiet);
        progress.init_files(files.len() as u64);
        let conversions = if self.parallel {
            let conversions =
                convert_on_pool(&documents, &markers, ctx.config.worker_threads())?;
            progress.files_completed(files.len() as u64);
            conversions
        } else {
            files
                .iter()
                .zip(&documents)
                .map(|(path, text)| {
                    let conversion = convert_document(text, &markers);
                    progress.file_completed(&path.display().to_string());
                    conversion
                })
                .collect()
        };
        progress.finish();

        let total: usize = conversions.iter().map(|c| c.replacements.len()).sum();
        log::info!("Found {} marked region(s)", total);

        if self.extract {
            self.write_extracted(&files, &conversions, &ctx.config)
        } else if self.in_place {
            write_in_place(&files, &conversions)
        } else {
            let mut out = open_output(self.output.as_deref())?;
            for conversion in &conversions {
                out.write_all(conversion.text.as_bytes())?;
            }
            out.flush()?;
            Ok(())
        }
    }

    /// `--markers` when given, otherwise the configured allow-list
    fn allowed_markers(&self, config: &CliConfig) -> Vec<String> {
        if self.markers.is_empty() {
            config.markers.allowed.clone()
        } else {
            self.markers
                .iter()
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect()
        }
    }

    fn write_extracted(
        &self,
        files: &[PathBuf],
        conversions: &[Conversion],
        config: &CliConfig,
    ) -> Result<()> {
        if conversions.iter().all(Conversion::is_empty) {
            return Err(CliError::NoBlocksFound.into());
        }

        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = format.formatter(writer, config.output.pretty_json);

        for (path, conversion) in files.iter().zip(conversions) {
            let label = path.display().to_string();
            for replacement in &conversion.replacements {
                formatter.format_replacement(&label, replacement)?;
            }
        }
        formatter.finish()
    }
}

fn convert_on_pool(
    documents: &[String],
    markers: &[String],
    threads: usize,
) -> Result<Vec<Conversion>> {
    log::debug!("Converting on {} worker thread(s)", threads);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build thread pool")?;
    Ok(pool.install(|| convert_documents(documents, markers)))
}

fn write_in_place(files: &[PathBuf], conversions: &[Conversion]) -> Result<()> {
    for (path, conversion) in files.iter().zip(conversions) {
        if conversion.is_empty() {
            log::debug!("No markers in {}, leaving it untouched", path.display());
            continue;
        }
        FileReader::write_text(path, &conversion.text)?;
        log::info!(
            "Rewrote {} ({} region(s))",
            path.display(),
            conversion.replacements.len()
        );
    }
    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

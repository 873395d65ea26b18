//! Generate config command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::CliConfig;

/// What kind of template to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKind {
    /// CLI configuration for `--config`
    Cli,
    /// Script table for `--table` and `validate`
    Script,
}

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Template kind
    #[arg(short, long, value_enum, default_value = "script")]
    pub kind: ConfigKind,

    /// Script code written into a script table template
    #[arg(long, value_name = "CODE", default_value = "custom")]
    pub code: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;

        let Some(path) = &self.output else {
            io::stdout().write_all(template.as_bytes())?;
            return Ok(());
        };

        fs::write(path, template)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        eprintln!("✓ Template written to {}", path.display());
        match self.kind {
            ConfigKind::Script => {
                eprintln!("Next steps:");
                eprintln!("1. Fill in the [mappings] table");
                eprintln!("2. runescript validate -t {}", path.display());
                eprintln!("3. runescript convert --table {} \"text\"", path.display());
            }
            ConfigKind::Cli => {
                eprintln!("Use it with: runescript -c {} blocks -i ...", path.display());
            }
        }
        Ok(())
    }

    /// Template content for the selected kind
    pub fn generate_template(&self) -> Result<String> {
        match self.kind {
            ConfigKind::Cli => {
                let body = toml::to_string_pretty(&CliConfig::default())
                    .context("Failed to serialize default configuration")?;
                Ok(format!("# runescript CLI configuration\n\n{body}"))
            }
            ConfigKind::Script => Ok(self.script_template()),
        }
    }

    fn script_template(&self) -> String {
        format!(
            r#"# Script table for {code}

[metadata]
# Registry key
code = "{code}"
name = "Custom Script"
# Spelling used in <Marker>...</Marker> blocks (defaults to name)
marker = "Custom"
aliases = []

# Keys are lowercase, at most 3 characters. Multi-character keys are
# digraphs and win over single letters (longest match first).
# Characters without a key pass through unchanged.
[mappings]
a = "ᚨ"
b = "ᛒ"
d = "ᛞ"
e = "ᛖ"
f = "ᚠ"
# th = "ᚦ"
# ng = "ᛜ"
"#,
            code = self.code
        )
    }
}

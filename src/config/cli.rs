use crate::config::toml_config::TomlConfig;
use crate::core::Position;
use crate::utils::error::{AccessorGenError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "accessor-gen")]
#[command(about = "Generate getter/setter pairs from an I<Name>Data interface")]
pub struct CliConfig {
    /// Document to edit; its file name selects the interface
    pub file: PathBuf,

    /// Cursor line (1-based); the accessors are inserted at its start
    #[arg(short, long)]
    pub line: u32,

    /// Cursor column (1-based)
    #[arg(long, default_value = "1")]
    pub column: u32,

    /// Declaration name to look for instead of the file name
    #[arg(short, long)]
    pub interface: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override declaration.prefix from the config
    #[arg(long)]
    pub prefix: Option<String>,

    /// Override declaration.suffix from the config
    #[arg(long)]
    pub suffix: Option<String>,

    /// Override render.indent from the config
    #[arg(long)]
    pub indent: Option<usize>,

    /// Skip whitespace-only lines inside the declaration
    #[arg(long)]
    pub skip_blank_lines: bool,

    /// Print the generated accessors instead of editing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Print the extracted properties as JSON and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn cursor(&self) -> Position {
        Position::new(self.line.saturating_sub(1), self.column.saturating_sub(1))
    }

    /// Loads the TOML file if one was given, then applies the flag overrides.
    pub fn resolve_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(prefix) = &self.prefix {
            settings.declaration.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            settings.declaration.suffix = suffix.clone();
        }
        if let Some(indent) = self.indent {
            settings.render.indent = indent;
        }
        if self.skip_blank_lines {
            settings.extract.skip_blank_lines = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file.to_string_lossy())?;
        validate_positive_number("line", self.line as usize, 1)?;
        validate_positive_number("column", self.column as usize, 1)?;

        if let Some(interface) = &self.interface {
            if interface.trim().is_empty() {
                return Err(AccessorGenError::ConfigError {
                    message: "--interface needs a declaration name".to_string(),
                });
            }
        }
        Ok(())
    }
}

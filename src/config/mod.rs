pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{InputSource, Mode};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "phone-extract", version)]
#[command(about = "Extract Russian phone numbers from text and normalize them to +7(XXX)XXX-XX-XX")]
pub struct CliConfig {
    /// TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Upper bound on files read at the same time
    #[arg(long, global = true)]
    pub max_concurrent_reads: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Extract phone numbers from several files
    FromFiles {
        #[arg(value_parser = parse_existing_file)]
        files: Vec<PathBuf>,

        /// File to save the results to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract phone numbers from a single text file
    FromFile {
        #[arg(value_parser = parse_existing_file)]
        file: PathBuf,

        /// File to save the results to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract phone numbers from standard input
    FromText {
        /// File to save the results to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
impl Command {
    pub fn mode(&self) -> Mode {
        match self {
            Command::FromFiles { .. } => Mode::Files,
            Command::FromFile { .. } => Mode::File,
            Command::FromText { .. } => Mode::Text,
        }
    }

    pub fn inputs(&self) -> Vec<InputSource> {
        match self {
            Command::FromFiles { files, .. } => {
                files.iter().cloned().map(InputSource::File).collect()
            }
            Command::FromFile { file, .. } => vec![InputSource::File(file.clone())],
            Command::FromText { .. } => vec![InputSource::Stdin],
        }
    }

    pub fn output(&self) -> Option<&Path> {
        match self {
            Command::FromFiles { output, .. }
            | Command::FromFile { output, .. }
            | Command::FromText { output } => output.as_deref(),
        }
    }
}

#[cfg(feature = "cli")]
fn parse_existing_file(value: &str) -> std::result::Result<PathBuf, String> {
    crate::utils::validation::validate_existing_file("input", value).map_err(|e| match e {
        crate::utils::error::PhoneError::InvalidConfigValueError { reason, .. } => reason,
        other => other.to_string(),
    })?;
    Ok(PathBuf::from(value))
}

/// Settings for one run after command-line flags are layered over the TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub output_path: Option<PathBuf>,
    pub max_concurrent_reads: usize,
    pub json: bool,
}

impl RunSettings {
    pub fn resolve(
        file: &TomlConfig,
        output: Option<&Path>,
        max_concurrent_reads: Option<usize>,
        json: bool,
    ) -> Self {
        Self {
            output_path: output
                .map(Path::to_path_buf)
                .or_else(|| file.output_path().map(PathBuf::from)),
            max_concurrent_reads: max_concurrent_reads.unwrap_or_else(|| file.max_concurrent_reads()),
            json: json || file.json(),
        }
    }
}

impl crate::utils::validation::Validate for RunSettings {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::utils::validation::validate_range(
            "max_concurrent_reads",
            self.max_concurrent_reads,
            1,
            toml_config::MAX_CONCURRENT_READS_LIMIT,
        )?;
        if let Some(path) = &self.output_path {
            crate::utils::validation::validate_path("output", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

impl ConfigProvider for RunSettings {
    fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    fn max_concurrent_reads(&self) -> usize {
        self.max_concurrent_reads
    }
}

pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, Mode};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "defang-ip")]
#[command(about = "Defang IPv4 addresses: 1.1.1.1 becomes 1[.]1[.]1[.]1")]
pub struct CliConfig {
    /// Addresses to transform
    #[arg(value_name = "ADDRESS")]
    pub addresses: Vec<String>,

    /// Files with one address per line
    #[arg(long, value_delimiter = ',')]
    pub input_files: Vec<String>,

    /// Write the result here instead of stdout
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Turn `[.]` back into `.`
    #[arg(long)]
    pub refang: bool,

    /// Reject lines that are not dotted-decimal IPv4 addresses
    #[arg(long)]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn addresses(&self) -> &[String] {
        &self.addresses
    }

    fn input_files(&self) -> &[String] {
        &self.input_files
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_format(&self) -> &str {
        &self.format
    }

    fn mode(&self) -> Mode {
        if self.refang {
            Mode::Refang
        } else {
            Mode::Defang
        }
    }

    fn strict(&self) -> bool {
        self.strict
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_has_input(&self.addresses, &self.input_files)?;
        for file in &self.input_files {
            validation::validate_path("input_files", file)?;
        }
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        validation::validate_output_format("format", &self.format)
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::defang::{defang_ip_addr, defang_with_count, refang_ip_addr, refang_with_count};
pub use crate::core::{engine::DefangEngine, pipeline::DefangPipeline};
pub use domain::model::{DefangReport, DefangedAddress, LoadOutcome, Mode};
pub use utils::error::{DefangError, Result};

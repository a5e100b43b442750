pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, RunSettings};

pub use crate::core::{
    engine::ExtractionEngine,
    extractor::{extract, PhoneExtractor},
    pipeline::ExtractionPipeline,
};
pub use crate::domain::model::{Delivery, InputSource, Mode, PhoneNumber, ResultSet, RunReport};
pub use crate::utils::error::{PhoneError, Result};

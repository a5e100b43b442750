use crate::utils::error::{PhoneError, Result};
use crate::utils::validation::{self, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_CONCURRENT_READS: usize = 8;
pub const MAX_CONCURRENT_READS_LIMIT: usize = 256;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

static ENV_VAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("Env var regex pattern is valid and should compile")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub max_concurrent_reads: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PhoneError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PhoneError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn max_concurrent_reads(&self) -> usize {
        self.input
            .as_ref()
            .and_then(|i| i.max_concurrent_reads)
            .unwrap_or(DEFAULT_MAX_CONCURRENT_READS)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn json(&self) -> bool {
        self.output.as_ref().and_then(|o| o.json).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range(
            "input.max_concurrent_reads",
            self.max_concurrent_reads(),
            1,
            MAX_CONCURRENT_READS_LIMIT,
        )?;

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }
}

use config::{Config, File};
use serde::Deserialize;

use crate::application::services::ExtractionRules;

use super::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";
const LIST_KEYS: [&str; 2] = ["extraction.page_markers", "extraction.acceptance_columns"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body. Base64 adds a third to the file size.
    pub max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_body_bytes: 25 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub header_scan_rows: usize,
    pub client_row_start: usize,
    pub client_row_end: usize,
    pub company_name: Option<String>,
    pub page_markers: Vec<String>,
    pub acceptance_columns: Vec<String>,
    pub instructions_min_length: usize,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        let rules = ExtractionRules::default();
        Self {
            header_scan_rows: rules.header_scan_rows,
            client_row_start: *rules.client_rows.start(),
            client_row_end: *rules.client_rows.end(),
            company_name: rules.company_name,
            page_markers: rules.page_markers,
            acceptance_columns: rules.acceptance_columns,
            instructions_min_length: rules.instructions_min_length,
        }
    }
}

impl ExtractionSettings {
    pub fn to_rules(&self) -> ExtractionRules {
        ExtractionRules {
            header_scan_rows: self.header_scan_rows,
            client_rows: self.client_row_start..=self.client_row_end,
            company_name: self
                .company_name
                .clone()
                .filter(|name| !name.trim().is_empty()),
            page_markers: self.page_markers.clone(),
            acceptance_columns: self.acceptance_columns.clone(),
            instructions_min_length: self.instructions_min_length,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

impl Settings {
    /// Defaults, then `appsettings.<env>.*` if present, then `APP__SECTION__KEY` variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let mut env_source = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .list_separator(",");
        for key in LIST_KEYS {
            env_source = env_source.with_list_parse_key(key);
        }

        let settings: Settings = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(env_source)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let extraction = &self.extraction;
        if extraction.header_scan_rows == 0 {
            return Err(SettingsError::Invalid(
                "extraction.header_scan_rows must be greater than zero".to_string(),
            ));
        }
        if extraction.client_row_start > extraction.client_row_end {
            return Err(SettingsError::Invalid(format!(
                "extraction.client_row_start ({}) is after client_row_end ({})",
                extraction.client_row_start, extraction.client_row_end
            )));
        }
        if extraction.acceptance_columns.is_empty() {
            return Err(SettingsError::Invalid(
                "extraction.acceptance_columns must name at least one column".to_string(),
            ));
        }
        if self.server.max_body_bytes == 0 {
            return Err(SettingsError::Invalid(
                "server.max_body_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

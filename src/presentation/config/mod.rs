mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ExtractionSettings, LoggingSettings, ServerSettings, Settings, SettingsError,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TypeError: option '{option}' must be a boolean, got {found}")]
    NotBoolean { option: &'static str, found: String },

    #[error("Logger options must be an object, got {0}")]
    NotAnObject(String),

    #[error("Failed to parse logger options: {0}")]
    Parse(String),

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Color is not defined: {0}")]
    UnknownColor(String),

    #[error("Background is not defined: {0}")]
    UnknownBackground(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown message type: {0}")]
    UnknownLevel(String),
}

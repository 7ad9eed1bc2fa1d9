use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Option names recognized in dynamic configuration
pub const OPTION_KEYS: [&str; 3] = ["colors", "timestamps", "trace"];

/// Configuration for logger behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub colors: bool,
    pub timestamps: bool,
    pub trace: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            colors: true,
            timestamps: true,
            trace: true,
        }
    }
}

impl LoggerConfig {
    /// Build a config from an untyped option map.
    ///
    /// Missing options take their defaults and unknown keys are ignored. Every
    /// recognized option is checked before anything is built, so a single
    /// non-boolean value rejects the whole map.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let obj = match value {
            Value::Object(obj) => obj,
            Value::Null => return Ok(Self::default()),
            other => return Err(ConfigError::NotAnObject(describe(other))),
        };

        let mut parsed: [Option<bool>; 3] = [None; 3];
        for (slot, key) in parsed.iter_mut().zip(OPTION_KEYS) {
            *slot = match obj.get(key) {
                None => None,
                Some(Value::Bool(b)) => Some(*b),
                Some(other) => {
                    return Err(ConfigError::NotBoolean {
                        option: key,
                        found: describe(other),
                    })
                }
            };
        }

        let defaults = Self::default();
        let [colors, timestamps, trace] = parsed;
        Ok(LoggerConfig {
            colors: colors.unwrap_or(defaults.colors),
            timestamps: timestamps.unwrap_or(defaults.timestamps),
            trace: trace.unwrap_or(defaults.trace),
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        // An empty document means all defaults, as for YAML and TOML
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(s)?;
        Self::from_value(&value)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let value: Value = toml::from_str(s)?;
        Self::from_value(&value)
    }

    /// Load options from a file, picking the parser by extension
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let parse: fn(&str) -> Result<Self, ConfigError> = match ext.as_str() {
            "json" => Self::from_json_str,
            "yaml" | "yml" => Self::from_yaml_str,
            "toml" => Self::from_toml_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat(
                    path.display().to_string(),
                ))
            }
        };

        let content = std::fs::read_to_string(path)?;
        parse(&content)
    }
}

/// Short human-readable description of a JSON value, used in type errors
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

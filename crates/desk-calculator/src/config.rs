//! Calculator configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Environment variable naming a JSON configuration file
pub const CONFIG_ENV: &str = "DESK_CALC_CONFIG";

/// Most fractional digits accepted for exponential display
pub const MAX_EXPONENT_DIGITS: usize = 16;

/// How readouts are rendered on the display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Text shown for NaN and infinities
    pub error_text: String,
    /// Fractional digits of exponential notation before trimming
    pub exponent_digits: usize,
    /// Magnitudes above this switch to exponential notation
    pub upper_threshold: f64,
    /// Nonzero magnitudes below this switch to exponential notation
    pub lower_threshold: f64,
    /// Separator between groups of three integer digits
    pub group_separator: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            error_text: "Error".to_string(),
            exponent_digits: 5,
            upper_threshold: 999_999_999.0,
            lower_threshold: 0.000_001,
            group_separator: ',',
        }
    }
}

impl DisplayConfig {
    /// Checks value ranges
    pub fn validate(&self) -> CalcResult<()> {
        if self.exponent_digits > MAX_EXPONENT_DIGITS {
            return Err(CalcError::config(format!(
                "exponent_digits must be at most {MAX_EXPONENT_DIGITS}, got {}",
                self.exponent_digits
            )));
        }
        if !(self.lower_threshold > 0.0 && self.lower_threshold < self.upper_threshold) {
            return Err(CalcError::config(format!(
                "thresholds must satisfy 0 < lower < upper, got lower={} upper={}",
                self.lower_threshold, self.upper_threshold
            )));
        }
        if self.group_separator.is_ascii_digit() || self.group_separator == '.' {
            return Err(CalcError::config(format!(
                "group_separator {:?} would be read as part of a number",
                self.group_separator
            )));
        }
        Ok(())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Display rendering
    pub display: DisplayConfig,
    /// Tracing filter directive used when `DESK_CALC_LOG` is unset
    pub log_filter: String,
    /// Log sink for the terminal host; logging is off when unset
    pub log_file: Option<PathBuf>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            log_filter: "info".to_string(),
            log_file: None,
        }
    }
}

impl CalculatorConfig {
    /// Parses and validates a JSON document
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON file
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Loads the file named by `DESK_CALC_CONFIG`, or defaults when unset
    pub fn from_env() -> CalcResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks value ranges
    pub fn validate(&self) -> CalcResult<()> {
        self.display.validate()?;
        if self.log_filter.trim().is_empty() {
            return Err(CalcError::config("log_filter must not be empty"));
        }
        Ok(())
    }

    /// Serializes to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

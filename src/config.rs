use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Run configuration.
///
/// Loaded from an optional TOML file and validated before use.
/// Every key is optional; missing keys take their default values.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub columns: Columns,
    pub input: Input,
}

/// Names of the columns holding the x and y values.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Columns {
    pub x: String,
    pub y: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            x: "size".to_string(),
            y: "weight".to_string(),
        }
    }
}

/// CSV input options.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Input {
    pub delimiter: char,
}

impl Default for Input {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    /// Replace the configured column names with any given on the command line.
    pub fn override_columns(&mut self, x: Option<String>, y: Option<String>) -> Result<()> {
        if let Some(x) = x {
            self.columns.x = x;
        }
        if let Some(y) = y {
            self.columns.y = y;
        }
        self.validate()
    }

    /// Delimiter as the single byte the CSV reader expects.
    pub fn delimiter(&self) -> u8 {
        self.input.delimiter as u8
    }

    fn validate(&self) -> Result<()> {
        check_name(&self.columns.x).context("invalid x column")?;
        check_name(&self.columns.y).context("invalid y column")?;

        let delimiter = self.input.delimiter;
        if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
            bail!("delimiter must be an ASCII character other than a quote or newline, but is {delimiter:?}");
        }

        Ok(())
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("column name must not be empty");
    }
    Ok(())
}

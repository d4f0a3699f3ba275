use serde_derive::{Deserialize, Serialize};
use serde_yaml;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, Read};

use crate::common::helpers::{parse_flag, FundError};

pub type ConfigMap = HashMap<String, Vec<String>>;

const LEVEL_KEY: &str = "LEVEL";
const PARAMETERS_KEY: &str = "PARAMETERS";
const CACHE_PARAMETERS_KEY: &str = "CACHEPARAMETERS";
const OUTPUT_KEY: &str = "OUTPUT";

const DEFAULT_LEVEL: i32 = 1;

trait ConfigMapExt {
    /// Get the first value of a key in the config map
    fn first(&self, key: &str) -> Option<String>;
}

impl ConfigMapExt for ConfigMap {
    fn first(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|values| values.first().cloned())
    }
}

/// Reads a legacy `KEY=VALUE` configuration file.
/// Lines starting with `%` or `#` are comments, repeated keys accumulate.
pub fn read_config(file_name: impl Into<String>) -> Result<ConfigMap, FundError> {
    let file_name = file_name.into();
    let file =
        File::open(&file_name).map_err(|error| format!("error opening config file: {error}"))?;
    let reader = io::BufReader::new(file);

    let mut config_map: ConfigMap = ConfigMap::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|error| format!("error line: {i} \n {error}"))?;
        let line = line.trim();

        if line.starts_with('%') || line.starts_with('#') || line.is_empty() {
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .ok_or(format!("error parsing config file {file_name} at line {i}."))?;

        config_map
            .entry(key.trim().to_string())
            .or_default()
            .push(value.trim().to_string());
    }
    Ok(config_map)
}

/// Where the diagnostic values go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputConfig {
    /// Semicolon separated text file, optionally echoed to the console
    File {
        path: String,
        #[serde(default)]
        console_output: bool,
    },
    /// SQLite database, created if missing
    Database { path: String },
}

impl OutputConfig {
    /// Parses the legacy output definition: `file:<path>[:console]` or `db:<path>`
    fn from_definition(definition: &str) -> Result<Self, FundError> {
        let (kind, rest) = definition
            .split_once(':')
            .ok_or(format!("Invalid output definition {}", definition))?;

        match kind {
            "file" => {
                let (path, console_output) = match rest.rsplit_once(':') {
                    Some((path, "console")) => (path, true),
                    _ => (rest, false),
                };
                Ok(OutputConfig::File {
                    path: path.into(),
                    console_output,
                })
            }
            "db" => Ok(OutputConfig::Database { path: rest.into() }),
            _ => Err(format!("Unsupported output type {}", kind).into()),
        }
    }
}

fn default_level() -> i32 {
    DEFAULT_LEVEL
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigContainer {
    /// Diagnostic level to run
    #[serde(default = "default_level")]
    pub level: i32,
    /// Location of the best guess parameter set
    pub parameters_path: String,
    /// Load the parameter set once per run instead of once per value
    #[serde(default)]
    pub cache_parameters: bool,
    pub output: OutputConfig,
}

impl ConfigContainer {
    pub fn from_file(config_file: &str) -> Result<ConfigContainer, FundError> {
        // Check the file extension to determine which method to use
        if config_file.ends_with(".yaml") || config_file.ends_with(".yml") {
            Self::from_yaml(config_file)
        } else if config_file.ends_with(".txt") {
            Self::from_txt_file(config_file)
        } else {
            Err(FundError::from(format!(
                "Unsupported config file format: {}",
                config_file
            )))
        }
    }

    pub fn from_yaml(config_file: &str) -> Result<Self, FundError> {
        let mut file = File::open(config_file)
            .map_err(|err| format!("Cannot open config file {}: {}", config_file, err))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|err| format!("Cannot read config file {}: {}", config_file, err))?;

        let conf = serde_yaml::from_str(&contents)
            .map_err(|err| format!("Cannot parse config file {}: {}", config_file, err))?;
        Ok(conf)
    }

    fn from_txt_file(config_file: &str) -> Result<ConfigContainer, FundError> {
        let config_map = read_config(config_file)?;

        let level = match config_map.first(LEVEL_KEY) {
            Some(value) => value
                .parse::<i32>()
                .map_err(|_| format!("Invalid {LEVEL_KEY} {value}"))?,
            None => DEFAULT_LEVEL,
        };

        let parameters_path = config_map
            .first(PARAMETERS_KEY)
            .ok_or(format!("Error: {PARAMETERS_KEY} not found in config"))?;

        let cache_parameters = config_map
            .first(CACHE_PARAMETERS_KEY)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        let output_def = config_map
            .first(OUTPUT_KEY)
            .ok_or(format!("Error: {OUTPUT_KEY} not found in config"))?;
        let output = OutputConfig::from_definition(&output_def)?;

        Ok(ConfigContainer {
            level,
            parameters_path,
            cache_parameters,
            output,
        })
    }
}

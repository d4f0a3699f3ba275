use std::fs::File;
use std::io::Read;
use std::path::Path;

use fund::{
    diagnostics::external::ParameterSource, error::DiagnosticError, models::gas::MarginalGas,
};
use log::debug;
use serde_derive::{Deserialize, Serialize};

/// Undiscounted marginal damages of one extra unit of each gas, one value per
/// year starting at the base year of the parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginalDamages {
    #[serde(rename = "C")]
    pub carbon: Vec<f64>,
    #[serde(rename = "CH4")]
    pub methane: Vec<f64>,
    #[serde(rename = "N2O")]
    pub nitrous_oxide: Vec<f64>,
    #[serde(rename = "SF6")]
    pub sulphur_hexafluoride: Vec<f64>,
}

impl MarginalDamages {
    pub fn for_gas(&self, gas: MarginalGas) -> &[f64] {
        match gas {
            MarginalGas::C => &self.carbon,
            MarginalGas::CH4 => &self.methane,
            MarginalGas::N2O => &self.nitrous_oxide,
            MarginalGas::SF6 => &self.sulphur_hexafluoride,
        }
    }
}

/// Best guess parameter set consumed by the discounted damage model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// First year of every yearly series
    pub base_year: i32,
    /// Elasticity of marginal utility of consumption
    #[serde(default = "default_eta")]
    pub eta: f64,
    /// Growth rate of per capita consumption, per year
    pub growth: Vec<f64>,
    /// Average equity weight, per year
    pub equity_weights: Vec<f64>,
    pub marginal_damages: MarginalDamages,
}

fn default_eta() -> f64 {
    1.0
}

/// Reads the parameter set from a YAML or JSON file each time it is requested
pub struct ParameterFile {
    path: String,
}

impl ParameterFile {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    fn read(&self) -> Result<ParameterSet, String> {
        let mut file = File::open(&self.path)
            .map_err(|err| format!("Cannot open parameter file {}: {}", self.path, err))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|err| format!("Cannot read parameter file {}: {}", self.path, err))?;

        let extension = Path::new(&self.path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match extension {
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|err| format!("Cannot parse parameter file {}: {}", self.path, err)),
            "json" => serde_json::from_str(&contents)
                .map_err(|err| format!("Cannot parse parameter file {}: {}", self.path, err)),
            _ => Err(format!("Unsupported parameter file format: {}", self.path)),
        }
    }
}

impl ParameterSource for ParameterFile {
    type Parameters = ParameterSet;

    fn best_guess(&self) -> Result<ParameterSet, DiagnosticError> {
        debug!("Loading parameters from {}", self.path);
        self.read().map_err(DiagnosticError::Parameters)
    }
}

use serde_derive::{Deserialize, Serialize};
use strum::EnumProperty;
use strum_macros::{Display, EnumIter, EnumProperty, EnumString};

/// Gas whose marginal emission is priced by the damage model
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    EnumString,
    EnumProperty,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum MarginalGas {
    /// Carbon dioxide, priced per ton of carbon
    #[strum(props(label = "SCC", long_name = "Carbon"))]
    C,
    /// Methane
    #[strum(props(label = "SCCH4", long_name = "Methane"))]
    CH4,
    /// Nitrous oxide
    #[strum(props(label = "SCN2O", long_name = "Nitrous oxide"))]
    N2O,
    /// Sulphur hexafluoride
    #[strum(props(label = "SCSF6", long_name = "Sulphur hexafluoride"))]
    SF6,
}

impl MarginalGas {
    /// Prefix of the diagnostic variables reporting the social cost of this gas
    pub fn label(&self) -> &'static str {
        self.get_str("label").unwrap_or("SC")
    }

    pub fn long_name(&self) -> &'static str {
        self.get_str("long_name").unwrap_or("")
    }
}

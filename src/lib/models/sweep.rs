use std::fmt::Display;

use serde_derive::{Deserialize, Serialize};

use super::gas::MarginalGas;

/// Suffix of variables computed with equity weights
const EQUITY_WEIGHTS_SUFFIX: &str = "-AvgEw";

/// One combination of parameters evaluated by a diagnostic level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepCell {
    pub gas: MarginalGas,
    /// Pure rate of time preference, as a fraction (0.01 is 1%)
    pub prtp: f64,
    pub equity_weights: bool,
    /// Year of the marginal emission
    pub report_year: i32,
}

impl SweepCell {
    pub fn new(gas: MarginalGas, prtp: f64, equity_weights: bool, report_year: i32) -> Self {
        Self {
            gas,
            prtp,
            equity_weights,
            report_year,
        }
    }

    /// Discount rate as a whole percentage
    pub fn prtp_percent(&self) -> i64 {
        (self.prtp * 100.0).round() as i64
    }

    /// Name under which the value of this cell is recorded,
    /// e.g. `SCC-2010-1prtp` or `SCCH4-2010-1prtp-AvgEw`
    pub fn variable_name(&self) -> String {
        let mut name = format!(
            "{}-{}-{}prtp",
            self.gas.label(),
            self.report_year,
            self.prtp_percent()
        );
        if self.equity_weights {
            name.push_str(EQUITY_WEIGHTS_SUFFIX);
        }
        name
    }
}

impl Display for SweepCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} emitted in {}, prtp {}, equity weights {}",
            self.gas.long_name(),
            self.report_year,
            self.prtp,
            self.equity_weights
        )
    }
}

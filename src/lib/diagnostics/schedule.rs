use itertools::iproduct;
use lazy_static::lazy_static;
use log::debug;

use crate::{
    constants::REPORT_YEAR,
    models::{gas::MarginalGas, sweep::SweepCell},
};

/// Discount rates swept for carbon
const CARBON_PRTPS: [f64; 3] = [0.0, 0.01, 0.03];
/// Discount rate used for the other gases
const OTHER_GASES_PRTP: f64 = 0.01;
const OTHER_GASES: [MarginalGas; 3] = [MarginalGas::CH4, MarginalGas::N2O, MarginalGas::SF6];

lazy_static! {
    /// Cells of level 1, in reporting order: carbon at every discount rate,
    /// first without then with equity weights, followed by each other gas at
    /// 1% without then with equity weights.
    static ref LEVEL_ONE: Vec<SweepCell> = {
        let carbon = iproduct!([false, true], CARBON_PRTPS).map(|(equity_weights, prtp)| {
            SweepCell::new(MarginalGas::C, prtp, equity_weights, REPORT_YEAR)
        });
        let others = iproduct!(OTHER_GASES, [false, true]).map(|(gas, equity_weights)| {
            SweepCell::new(gas, OTHER_GASES_PRTP, equity_weights, REPORT_YEAR)
        });
        carbon.chain(others).collect()
    };
}

/// Fixed sequence of cells computed by a diagnostic level.
///
/// Levels 2 and 3 are defined but empty. Any other level is unknown and is
/// also empty: running it writes nothing and is not an error.
pub fn schedule(level: i32) -> &'static [SweepCell] {
    match level {
        1 => LEVEL_ONE.as_slice(),
        2 | 3 => &[],
        _ => {
            debug!("Unknown diagnostic level {}, nothing to compute", level);
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn level_one_order() {
        let names: Vec<String> = schedule(1).iter().map(|c| c.variable_name()).collect();
        assert_eq!(
            names,
            vec![
                "SCC-2010-0prtp",
                "SCC-2010-1prtp",
                "SCC-2010-3prtp",
                "SCC-2010-0prtp-AvgEw",
                "SCC-2010-1prtp-AvgEw",
                "SCC-2010-3prtp-AvgEw",
                "SCCH4-2010-1prtp",
                "SCCH4-2010-1prtp-AvgEw",
                "SCN2O-2010-1prtp",
                "SCN2O-2010-1prtp-AvgEw",
                "SCSF6-2010-1prtp",
                "SCSF6-2010-1prtp-AvgEw",
            ]
        );
    }

    #[test]
    fn level_one_parameters() {
        let cells = schedule(1);
        assert_eq!(cells[0], SweepCell::new(MarginalGas::C, 0.0, false, 2010));
        assert_eq!(cells[5], SweepCell::new(MarginalGas::C, 0.03, true, 2010));
        assert_eq!(cells[7], SweepCell::new(MarginalGas::CH4, 0.01, true, 2010));
        assert_eq!(cells[10], SweepCell::new(MarginalGas::SF6, 0.01, false, 2010));
        assert!(cells.iter().all(|c| c.report_year == REPORT_YEAR));
    }

    #[test]
    fn level_one_names_are_unique() {
        let names: HashSet<String> = schedule(1).iter().map(|c| c.variable_name()).collect();
        assert_eq!(names.len(), schedule(1).len());
    }

    #[test]
    fn other_levels_are_empty() {
        for level in [-1, 0, 2, 3, 4, 100] {
            assert!(schedule(level).is_empty(), "level {}", level);
        }
    }
}

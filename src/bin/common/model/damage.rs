use fund::{
    diagnostics::external::MarginalDamageModel, error::DiagnosticError, models::sweep::SweepCell,
};

use super::parameters::ParameterSet;

/// Social cost from a precomputed marginal damage path.
///
/// Damages from the emission year onwards are discounted back to the emission
/// year with the Ramsey rate `prtp + eta * growth`. With equity weights every
/// year is also multiplied by the average equity weight of that year.
pub struct DiscountedDamageModel;

impl MarginalDamageModel<ParameterSet> for DiscountedDamageModel {
    fn social_cost(
        &self,
        cell: &SweepCell,
        parameters: &ParameterSet,
    ) -> Result<f64, DiagnosticError> {
        let damages = parameters.marginal_damages.for_gas(cell.gas);

        let offset = usize::try_from(cell.report_year - parameters.base_year).map_err(|_| {
            DiagnosticError::Model(format!(
                "emission year {} is before the base year {}",
                cell.report_year, parameters.base_year
            ))
        })?;
        if offset >= damages.len() {
            return Err(DiagnosticError::Model(format!(
                "no {} damages for emission year {}",
                cell.gas, cell.report_year
            )));
        }
        if parameters.growth.len() < damages.len()
            || (cell.equity_weights && parameters.equity_weights.len() < damages.len())
        {
            return Err(DiagnosticError::Model(format!(
                "growth and equity weight series must cover the {} {} damages",
                damages.len(),
                cell.gas
            )));
        }

        let mut discount_factor = 1.0;
        let mut social_cost = 0.0;
        for year in offset..damages.len() {
            if year > offset {
                discount_factor /= 1.0 + cell.prtp + parameters.eta * parameters.growth[year];
            }
            let weight = if cell.equity_weights {
                parameters.equity_weights[year]
            } else {
                1.0
            };
            social_cost += damages[year] * weight * discount_factor;
        }
        Ok(social_cost)
    }
}

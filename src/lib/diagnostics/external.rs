use crate::{error::DiagnosticError, models::sweep::SweepCell};

/// Provider of the calibrated (best guess) parameter set of the model
pub trait ParameterSource {
    type Parameters;

    fn best_guess(&self) -> Result<Self::Parameters, DiagnosticError>;
}

/// Model computing the social cost of a marginal emission
///
/// The result is passed on as is, a non finite value is not an error.
pub trait MarginalDamageModel<P> {
    fn social_cost(&self, cell: &SweepCell, parameters: &P) -> Result<f64, DiagnosticError>;
}

impl<P, F> MarginalDamageModel<P> for F
where
    F: Fn(&SweepCell, &P) -> Result<f64, DiagnosticError>,
{
    fn social_cost(&self, cell: &SweepCell, parameters: &P) -> Result<f64, DiagnosticError> {
        self(cell, parameters)
    }
}

use chrono::Utc;
use log::{debug, info, trace};

use crate::{error::DiagnosticError, models::sweep::SweepCell, sinks::prelude::DiagnosticSink};

use super::{
    external::{MarginalDamageModel, ParameterSource},
    schedule::schedule,
};

/// Computes the cells of a diagnostic level one after the other and records
/// each value in a sink.
///
/// The parameter set is requested from the source for every cell unless the
/// parameter cache is enabled, in which case it is loaded once per run.
pub struct DiagnosticRunner<S, M> {
    parameters: S,
    model: M,
    cache_parameters: bool,
}

impl<S, M> DiagnosticRunner<S, M>
where
    S: ParameterSource,
    M: MarginalDamageModel<S::Parameters>,
{
    pub fn new(parameters: S, model: M) -> Self {
        Self {
            parameters,
            model,
            cache_parameters: false,
        }
    }

    pub fn with_parameter_cache(mut self, cache_parameters: bool) -> Self {
        self.cache_parameters = cache_parameters;
        self
    }

    /// Runs diagnostic `level`, writing one data point per cell in schedule
    /// order.
    ///
    /// Stops at the first failure of the parameter source, the model or the
    /// sink; points written before the failure stay written.
    pub fn run(&self, sink: &mut dyn DiagnosticSink, level: i32) -> Result<(), DiagnosticError> {
        let cells = schedule(level);
        info!("Running diagnostic level {} ({} cells)", level, cells.len());

        let mut cache: Option<S::Parameters> = None;
        for cell in cells {
            let variable_name = cell.variable_name();
            debug!("Computing {}: {}", variable_name, cell);

            let c = Utc::now();
            let value = self.social_cost(cell, &mut cache)?;
            trace!("Computing {} took {} seconds", variable_name, Utc::now() - c);

            sink.write_data_point(&variable_name, value)?;
        }

        info!("Diagnostic level {} wrote {} values", level, cells.len());
        Ok(())
    }

    fn social_cost(
        &self,
        cell: &SweepCell,
        cache: &mut Option<S::Parameters>,
    ) -> Result<f64, DiagnosticError> {
        if !self.cache_parameters {
            let parameters = self.parameters.best_guess()?;
            return self.model.social_cost(cell, &parameters);
        }

        let parameters = match cache.take() {
            Some(parameters) => parameters,
            None => self.parameters.best_guess()?,
        };
        let value = self.model.social_cost(cell, &parameters);
        *cache = Some(parameters);
        value
    }
}

use crate::error::DiagnosticError;

/// Trait implemented by the targets that record diagnostic values (delimited
/// file, database table).
///
/// A sink is append only: every successful call leaves exactly one more record
/// in the underlying transport. Values are recorded as given, NaN and infinities
/// included. The transport belongs to the caller, a sink never closes it.
pub trait DiagnosticSink {
    fn write_data_point(&mut self, variable_name: &str, value: f64)
        -> Result<(), DiagnosticError>;
}

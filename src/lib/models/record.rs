use chrono::{DateTime, Utc};

/// A single diagnostic value as persisted by a sink
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRecord {
    /// Reporting date of the whole session
    pub date: DateTime<Utc>,
    pub variable_name: String,
    pub value: f64,
}

impl DiagnosticRecord {
    pub fn new(date: DateTime<Utc>, variable_name: &str, value: f64) -> Self {
        Self {
            date,
            variable_name: variable_name.to_string(),
            value,
        }
    }
}

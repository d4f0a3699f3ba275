use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, Utc};
use fund::error::DiagnosticError;

/// Format of the run date given on the command line
pub const RUN_DATE_FORMAT: &str = "%Y%m%d%H%M";

/// Parses the reporting date of the session, e.g. `201001010000`
pub fn parse_run_date(date_str: &str) -> Result<DateTime<Utc>, FundError> {
    let date = NaiveDateTime::parse_from_str(date_str, RUN_DATE_FORMAT)
        .map_err(|_| format!("Could not parse run date '{}'", date_str))?;
    Ok(DateTime::from_naive_utc_and_offset(date, Utc))
}

/// Parses the boolean flags of the legacy configuration format
pub fn parse_flag(value: &str) -> bool {
    matches!(value, "true" | "True" | "TRUE" | "1")
}

#[derive(Debug)]
pub struct FundError {
    msg: String,
}

impl From<String> for FundError {
    fn from(msg: String) -> Self {
        FundError { msg }
    }
}

impl From<&str> for FundError {
    fn from(msg: &str) -> Self {
        FundError { msg: msg.into() }
    }
}

impl From<DiagnosticError> for FundError {
    fn from(err: DiagnosticError) -> Self {
        FundError {
            msg: err.to_string(),
        }
    }
}

impl Display for FundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for FundError {}

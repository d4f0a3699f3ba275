/// Emission year every long-term diagnostic is reported for
pub const REPORT_YEAR: i32 = 2010;

/// Table receiving one row per diagnostic data point
pub const DIAGNOSTIC_TABLE: &str = "FundLongtermDiagnosticOutput";

/// Textual form of the session date in delimited files
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Digits after the decimal point for values in delimited files
pub const FILE_VALUE_PRECISION: usize = 15;

/// Column labels of the header line of delimited files
pub const FILE_HEADER: [&str; 3] = ["Date", "Variable", "Value"];

/// Field separator of delimited files
pub const FILE_SEPARATOR: char = ';';

/// Width of the variable name column of the console echo
pub const ECHO_NAME_WIDTH: usize = 20;
/// Width of the value column of the console echo
pub const ECHO_VALUE_WIDTH: usize = 10;
/// Digits after the decimal point of the console echo
pub const ECHO_VALUE_PRECISION: usize = 2;

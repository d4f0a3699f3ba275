//! Long-term diagnostic output of the FUND model.
//!
//! A [`diagnostics::runner::DiagnosticRunner`] walks the fixed schedule of a
//! diagnostic level, asks an external marginal damage model for the social
//! cost of each sweep cell and hands every value to a
//! [`sinks::prelude::DiagnosticSink`].

pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod sinks;
pub mod version;

use chrono::{DateTime, Utc};
use log::{debug, trace};
use sqlx::SqliteConnection;
use tokio::runtime::Runtime;

use crate::{
    constants::DIAGNOSTIC_TABLE, error::DiagnosticError, models::record::DiagnosticRecord,
};

use super::prelude::DiagnosticSink;

/// Inserts one row per diagnostic value into the diagnostic table.
///
/// The connection is borrowed: opening it, wrapping several calls in a
/// transaction and closing it are left to the caller. Every call is a
/// separate statement with bound parameters and returns once the engine has
/// accepted the row. SQLite has no NaN, such values are stored as NULL.
pub struct DatabaseSink<'c> {
    connection: &'c mut SqliteConnection,
    runtime: &'c Runtime,
    date: DateTime<Utc>,
    insert_statement: String,
}

impl<'c> DatabaseSink<'c> {
    pub fn new(
        connection: &'c mut SqliteConnection,
        runtime: &'c Runtime,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            connection,
            runtime,
            date,
            insert_statement: format!(
                "INSERT INTO {} (date, variableName, value) VALUES (?, ?, ?)",
                DIAGNOSTIC_TABLE
            ),
        }
    }
}

impl DiagnosticSink for DatabaseSink<'_> {
    fn write_data_point(
        &mut self,
        variable_name: &str,
        value: f64,
    ) -> Result<(), DiagnosticError> {
        trace!("[DB] Inserting {} = {}", variable_name, value);
        let record = DiagnosticRecord::new(self.date, variable_name, value);
        let statement = sqlx::query(&self.insert_statement)
            .bind(record.date)
            .bind(record.variable_name.as_str())
            .bind(record.value);

        self.runtime
            .block_on(statement.execute(&mut *self.connection))?;
        Ok(())
    }
}

/// Creates the diagnostic table on `connection` if it does not exist yet
pub fn create_table(
    connection: &mut SqliteConnection,
    runtime: &Runtime,
) -> Result<(), DiagnosticError> {
    let statement = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            date TEXT NOT NULL,
            variableName TEXT NOT NULL,
            value REAL
        )
        "#,
        DIAGNOSTIC_TABLE
    );
    runtime.block_on(sqlx::query(&statement).execute(&mut *connection))?;
    debug!("[DB] Table {} ready", DIAGNOSTIC_TABLE);
    Ok(())
}

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use fund::sinks::{
    database::{create_table, DatabaseSink},
    file::FileSink,
    prelude::DiagnosticSink,
};
use log::{debug, info};
use sqlx::{sqlite::SqliteConnectOptions, ConnectOptions, Connection, SqliteConnection};
use tokio::runtime::{Builder, Runtime};

use crate::common::{config::builder::OutputConfig, helpers::FundError};

/// Open transport behind a diagnostic sink.
///
/// The transport is opened before the sink is created and closed after the
/// sink is gone; the sink itself only borrows it.
pub enum OutputTransport {
    File {
        path: String,
        writer: BufWriter<File>,
        console_output: bool,
    },
    Database {
        path: String,
        runtime: Runtime,
        connection: SqliteConnection,
    },
}

fn create_parent_dir(path: &str) -> Result<(), FundError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!("Cannot create directory {}: {}", parent.display(), err)
            })?;
        }
    }
    Ok(())
}

impl OutputTransport {
    pub fn open(config: &OutputConfig) -> Result<Self, FundError> {
        match config {
            OutputConfig::File {
                path,
                console_output,
            } => {
                create_parent_dir(path)?;
                let file = File::create(path)
                    .map_err(|err| format!("Cannot create output file {}: {}", path, err))?;
                info!("Writing diagnostics to file {}", path);
                Ok(OutputTransport::File {
                    path: path.clone(),
                    writer: BufWriter::new(file),
                    console_output: *console_output,
                })
            }
            OutputConfig::Database { path } => {
                create_parent_dir(path)?;
                let runtime = Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(|err| format!("Cannot start database runtime: {}", err))?;

                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true);
                let mut connection = runtime
                    .block_on(options.connect())
                    .map_err(|err| format!("Cannot open database {}: {}", path, err))?;
                create_table(&mut connection, &runtime)?;

                info!("Writing diagnostics to database {}", path);
                Ok(OutputTransport::Database {
                    path: path.clone(),
                    runtime,
                    connection,
                })
            }
        }
    }

    /// Creates the sink writing to this transport, with `date` as the date of
    /// every record
    pub fn sink(
        &mut self,
        date: DateTime<Utc>,
    ) -> Result<Box<dyn DiagnosticSink + '_>, FundError> {
        let sink: Box<dyn DiagnosticSink + '_> = match self {
            OutputTransport::File {
                writer,
                console_output,
                ..
            } => Box::new(FileSink::new(writer, date, *console_output)?),
            OutputTransport::Database {
                runtime,
                connection,
                ..
            } => Box::new(DatabaseSink::new(connection, runtime, date)),
        };
        Ok(sink)
    }

    /// Flushes and releases the transport
    pub fn close(self) -> Result<(), FundError> {
        match self {
            OutputTransport::File {
                path, mut writer, ..
            } => {
                writer
                    .flush()
                    .map_err(|err| format!("Cannot write output file {}: {}", path, err))?;
                debug!("Closed output file {}", path);
            }
            OutputTransport::Database {
                path,
                runtime,
                connection,
            } => {
                runtime
                    .block_on(connection.close())
                    .map_err(|err| format!("Cannot close database {}: {}", path, err))?;
                debug!("Closed database {}", path);
            }
        }
        Ok(())
    }
}

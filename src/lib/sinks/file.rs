use std::io::{self, Stdout, Write};

use chrono::{DateTime, Utc};
use log::{trace, warn};

use crate::{
    constants::{
        DATE_FORMAT, ECHO_NAME_WIDTH, ECHO_VALUE_PRECISION, ECHO_VALUE_WIDTH, FILE_HEADER,
        FILE_SEPARATOR, FILE_VALUE_PRECISION,
    },
    error::DiagnosticError,
    models::record::DiagnosticRecord,
};

use super::prelude::DiagnosticSink;

/// Writes diagnostic values as semicolon separated lines:
///
/// ```text
/// "Date";"Variable";"Value"
/// "2010-01-01 00:00:00";"SCC-2010-1prtp";12.345678901234567
/// ```
///
/// The header line is written when the sink is created. Each data point can
/// also be echoed to a console channel as `name value`, with the name padded
/// to 20 characters and the value rounded to 2 decimals.
pub struct FileSink<W: Write, E: Write = Stdout> {
    file: W,
    date: DateTime<Utc>,
    date_string: String,
    echo: Option<E>,
}

impl<W: Write> FileSink<W, Stdout> {
    /// Creates a sink over `file`, echoing every data point to stdout when
    /// `console_output` is set.
    pub fn new(
        file: W,
        date: DateTime<Utc>,
        console_output: bool,
    ) -> Result<Self, DiagnosticError> {
        Self::with_echo_channel(file, date, console_output.then(io::stdout))
    }
}

impl<W: Write, E: Write> FileSink<W, E> {
    /// Creates a sink over `file` echoing to `echo` if given.
    ///
    /// Writes the header line before returning.
    pub fn with_echo_channel(
        mut file: W,
        date: DateTime<Utc>,
        echo: Option<E>,
    ) -> Result<Self, DiagnosticError> {
        writeln!(file, "{}", header_line())?;

        Ok(Self {
            file,
            date,
            date_string: date.format(DATE_FORMAT).to_string(),
            echo,
        })
    }

    /// Gives back the transport and the echo channel
    pub fn into_parts(self) -> (W, Option<E>) {
        (self.file, self.echo)
    }

    fn write_record(&mut self, record: &DiagnosticRecord) -> Result<(), DiagnosticError> {
        writeln!(
            self.file,
            "\"{}\"{sep}\"{}\"{sep}{:.prec$}",
            self.date_string,
            record.variable_name,
            record.value,
            sep = FILE_SEPARATOR,
            prec = FILE_VALUE_PRECISION
        )?;

        // a closed console must not cut the file short
        if let Some(echo) = self.echo.as_mut() {
            if let Err(err) = writeln!(echo, "{}", echo_line(&record.variable_name, record.value))
            {
                warn!("[FILE] echo failed, disabling console output: {}", err);
                self.echo = None;
            }
        }
        Ok(())
    }
}

impl<W: Write, E: Write> DiagnosticSink for FileSink<W, E> {
    fn write_data_point(
        &mut self,
        variable_name: &str,
        value: f64,
    ) -> Result<(), DiagnosticError> {
        trace!("[FILE] Writing {} = {}", variable_name, value);
        let record = DiagnosticRecord::new(self.date, variable_name, value);
        self.write_record(&record)
    }
}

fn header_line() -> String {
    let separator = FILE_SEPARATOR.to_string();
    FILE_HEADER
        .iter()
        .map(|label| format!("\"{}\"", label))
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

fn echo_line(variable_name: &str, value: f64) -> String {
    format!(
        "{:<name_width$} {:>value_width$.prec$}",
        variable_name,
        value,
        name_width = ECHO_NAME_WIDTH,
        value_width = ECHO_VALUE_WIDTH,
        prec = ECHO_VALUE_PRECISION
    )
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use chrono::TimeZone;
    use tempfile::TempDir;

    use super::*;

    fn session_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2012, 3, 4, 5, 6, 7)
            .single()
            .expect("should be a valid date")
    }

    fn lines(buffer: &[u8]) -> Vec<String> {
        String::from_utf8(buffer.to_vec())
            .expect("should be utf8")
            .lines()
            .map(String::from)
            .collect()
    }

    fn fields(line: &str) -> Vec<&str> {
        line.split(FILE_SEPARATOR).collect()
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn header_is_written_on_creation() {
        let sink = FileSink::with_echo_channel(Vec::new(), session_date(), None::<Vec<u8>>)
            .expect("should create sink");
        let (file, _) = sink.into_parts();
        assert_eq!(lines(&file), vec!["\"Date\";\"Variable\";\"Value\""]);
    }

    #[test]
    fn one_data_point_gives_header_and_one_row() {
        let mut sink = FileSink::with_echo_channel(Vec::new(), session_date(), None::<Vec<u8>>)
            .expect("should create sink");
        sink.write_data_point("X", 1.5).expect("should write");

        let (file, _) = sink.into_parts();
        let lines = lines(&file);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "\"2012-03-04 05:06:07\";\"X\";1.500000000000000");

        let value: f64 = fields(&lines[1])[2].parse().expect("should parse");
        assert!((value - 1.5).abs() < 1e-15);
    }

    #[test]
    fn values_use_fixed_point_notation() {
        let mut sink = FileSink::with_echo_channel(Vec::new(), session_date(), None::<Vec<u8>>)
            .expect("should create sink");
        sink.write_data_point("big", 1.0e21).expect("should write");
        sink.write_data_point("small", -2.5e-7).expect("should write");

        let (file, _) = sink.into_parts();
        let lines = lines(&file);
        assert_eq!(fields(&lines[1])[2], "1000000000000000000000.000000000000000");
        assert_eq!(fields(&lines[2])[2], "-0.000000250000000");
    }

    #[test]
    fn all_rows_share_the_session_date() {
        let mut sink = FileSink::with_echo_channel(Vec::new(), session_date(), None::<Vec<u8>>)
            .expect("should create sink");
        for i in 0..5 {
            sink.write_data_point(&format!("V{}", i), i as f64)
                .expect("should write");
        }

        let (file, _) = sink.into_parts();
        let lines = lines(&file);
        assert_eq!(lines.len(), 6);
        assert!(lines[1..]
            .iter()
            .all(|line| fields(line)[0] == "\"2012-03-04 05:06:07\""));
    }

    #[test]
    fn non_finite_values_are_written() {
        let mut sink = FileSink::with_echo_channel(Vec::new(), session_date(), None::<Vec<u8>>)
            .expect("should create sink");
        sink.write_data_point("nan", f64::NAN).expect("should write");
        sink.write_data_point("inf", f64::INFINITY)
            .expect("should write");

        let (file, _) = sink.into_parts();
        let lines = lines(&file);
        assert_eq!(lines.len(), 3);

        let nan: f64 = fields(&lines[1])[2].parse().expect("should parse");
        assert!(nan.is_nan());
        let inf: f64 = fields(&lines[2])[2].parse().expect("should parse");
        assert_eq!(inf, f64::INFINITY);
    }

    #[test]
    fn echo_gets_one_line_per_data_point() {
        let mut sink = FileSink::with_echo_channel(Vec::new(), session_date(), Some(Vec::new()))
            .expect("should create sink");
        sink.write_data_point("SCC-2010-1prtp", 12.3456)
            .expect("should write");
        sink.write_data_point("SCCH4-2010-1prtp-AvgEw", -3.0)
            .expect("should write");

        let (file, echo) = sink.into_parts();
        let echo = lines(&echo.expect("should have echo channel"));
        assert_eq!(
            echo,
            vec![
                "SCC-2010-1prtp            12.35",
                "SCCH4-2010-1prtp-AvgEw      -3.00",
            ]
        );
        assert_eq!(lines(&file).len(), 3);
    }

    #[test]
    fn echo_does_not_change_file_content() {
        let mut quiet = FileSink::with_echo_channel(Vec::new(), session_date(), None::<Vec<u8>>)
            .expect("should create sink");
        let mut verbose =
            FileSink::with_echo_channel(Vec::new(), session_date(), Some(Vec::new()))
                .expect("should create sink");
        for (name, value) in [("A", 1.0), ("B", f64::NAN), ("C", -7.25)] {
            quiet.write_data_point(name, value).expect("should write");
            verbose.write_data_point(name, value).expect("should write");
        }

        assert_eq!(quiet.into_parts().0, verbose.into_parts().0);
    }

    #[test]
    fn writes_through_a_borrowed_file() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("diagnostics.csv");
        let mut file = File::create(&path).expect("should create file");
        {
            let mut sink = FileSink::new(&mut file, session_date(), false)
                .expect("should create sink");
            sink.write_data_point("SCC-2010-0prtp", 42.0)
                .expect("should write");
        }
        // the caller still owns the file and can keep writing to it
        file.flush().expect("should flush");

        let content = fs::read_to_string(&path).expect("should read back");
        assert_eq!(
            content,
            "\"Date\";\"Variable\";\"Value\"\n\
             \"2012-03-04 05:06:07\";\"SCC-2010-0prtp\";42.000000000000000\n"
        );
    }

    #[test]
    fn header_failure_is_reported() {
        let result = FileSink::with_echo_channel(BrokenPipe, session_date(), None::<Vec<u8>>);
        match result {
            Err(DiagnosticError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            _ => panic!("expected an I/O error"),
        }
    }

    #[test]
    fn broken_echo_leaves_file_content_unchanged() {
        let mut quiet = FileSink::with_echo_channel(Vec::new(), session_date(), None::<Vec<u8>>)
            .expect("should create sink");
        let mut broken =
            FileSink::with_echo_channel(Vec::new(), session_date(), Some(BrokenPipe))
                .expect("should create sink");
        for (name, value) in [("A", 1.0), ("B", 2.0), ("C", -7.25)] {
            quiet.write_data_point(name, value).expect("should write");
            broken
                .write_data_point(name, value)
                .expect("echo failure should not be reported");
        }

        let (quiet_file, _) = quiet.into_parts();
        let (broken_file, echo) = broken.into_parts();
        assert!(echo.is_none());
        assert_eq!(lines(&broken_file).len(), 4);
        assert_eq!(quiet_file, broken_file);
    }
}

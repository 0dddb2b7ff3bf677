use std::io::{self, Read};

use email_domains_domain::Row;
use email_domains_ports::RecordSource;
use email_domains_shared_kernel::{InfrastructureError, Result};
use log::debug;

/// Settings for [`CsvRecordReader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Accept rows whose field count differs from the first row's.
    pub flexible: bool,
}

/// Comma-separated values reader backed by the `csv` crate.
///
/// Headers are not interpreted here; the first row comes back like any other.
/// Double quotes delimit fields and `""` escapes a quote inside one. Blank
/// lines produce no row. A quote left open at end of input, a `"` inside an
/// unquoted field, or stray text after a closing quote is a malformed record.
#[derive(Debug, Clone, Default)]
pub struct CsvRecordReader {
    options: ReaderOptions,
}

impl CsvRecordReader {
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    fn builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder.has_headers(false).delimiter(b',').flexible(self.options.flexible);
        builder
    }
}

impl RecordSource for CsvRecordReader {
    fn read_rows(&self, input: &mut dyn Read) -> Result<Vec<Row>> {
        let mut reader = self.builder().from_reader(QuoteGuard::new(input));
        let mut record = csv::StringRecord::new();
        let mut rows = Vec::new();

        loop {
            match reader.read_record(&mut record) {
                Ok(true) => rows.push(record.iter().map(str::to_owned).collect::<Row>()),
                Ok(false) => break,
                // 引用符違反で入力を打ち切った場合はそちらを優先
                Err(err) => {
                    let violation = reader.get_ref().violation();
                    return Err(violation.map_or_else(|| from_csv_error(err), QuoteViolation::into_error).into());
                }
            }
        }
        if let Some(violation) = reader.get_ref().violation() {
            return Err(violation.into_error().into());
        }

        debug!("read {} rows", rows.len());
        Ok(rows)
    }
}

/// I/O failures keep their `std::io::Error`; everything else is a grammar violation.
fn from_csv_error(err: csv::Error) -> InfrastructureError {
    let line = err.position().map(csv::Position::line);
    let details = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => InfrastructureError::Read { source },
        _ => InfrastructureError::MalformedRecord { line, details },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// A `"` inside a quoted field: either an escape or the closing quote.
    QuoteInQuoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteViolation {
    BareQuote { line: u64 },
    ExtraneousQuote { line: u64 },
    Unterminated { line: u64 },
}

impl QuoteViolation {
    fn into_error(self) -> InfrastructureError {
        let (line, details) = match self {
            Self::BareQuote { line } => (line, "bare '\"' in non-quoted field"),
            Self::ExtraneousQuote { line } => (line, "extraneous '\"' in quoted field"),
            Self::Unterminated { line } => (line, "quoted field is never closed"),
        };
        InfrastructureError::MalformedRecord { line: Some(line), details: details.to_string() }
    }
}

/// Tracks quoting as bytes pass through to the parser.
///
/// The `csv` parser closes an open quote at end of input and keeps stray
/// quotes as data. On the first violation this stops yielding bytes and
/// records it; the caller checks [`QuoteGuard::violation`] afterwards.
struct QuoteGuard<R> {
    inner: R,
    state: QuoteState,
    line: u64,
    opened_at: u64,
    violation: Option<QuoteViolation>,
}

impl<R: Read> QuoteGuard<R> {
    fn new(inner: R) -> Self {
        Self { inner, state: QuoteState::FieldStart, line: 1, opened_at: 1, violation: None }
    }

    fn violation(&self) -> Option<QuoteViolation> {
        self.violation
    }

    fn step(&mut self, byte: u8) -> std::result::Result<QuoteState, QuoteViolation> {
        use QuoteState::*;

        Ok(match (self.state, byte) {
            (Quoted, b'"') => QuoteInQuoted,
            (Quoted, _) => Quoted,
            (QuoteInQuoted, b'"') => Quoted,
            (_, b',' | b'\n' | b'\r') => FieldStart,
            (FieldStart, b'"') => {
                self.opened_at = self.line;
                Quoted
            }
            (Unquoted, b'"') => return Err(QuoteViolation::BareQuote { line: self.line }),
            (QuoteInQuoted, _) => return Err(QuoteViolation::ExtraneousQuote { line: self.line }),
            _ => Unquoted,
        })
    }

    /// Advances over `buf`; on a violation returns the offset of the offending byte.
    fn scan(&mut self, buf: &[u8]) -> std::result::Result<(), (usize, QuoteViolation)> {
        for (offset, &byte) in buf.iter().enumerate() {
            self.state = self.step(byte).map_err(|violation| (offset, violation))?;
            if byte == b'\n' {
                self.line += 1;
            }
        }
        Ok(())
    }
}

impl<R: Read> Read for QuoteGuard<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.violation.is_some() {
            return Ok(0);
        }

        let n = self.inner.read(buf)?;
        if n == 0 {
            if self.state == QuoteState::Quoted {
                self.violation = Some(QuoteViolation::Unterminated { line: self.opened_at });
            }
            return Ok(0);
        }

        match self.scan(&buf[..n]) {
            Ok(()) => Ok(n),
            Err((offset, violation)) => {
                self.violation = Some(violation);
                Ok(offset)
            }
        }
    }
}

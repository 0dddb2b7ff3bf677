// crates/shared-kernel/src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum EmailDomainsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<EmailDomainsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, EmailDomainsError>;

/// Errors raised while validating rows and extracting domains.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty record set")]
    EmptyInput,

    #[error("invalid number of columns in row {row}: expected at least {required}, found {found}")]
    InvalidColumnCount { row: usize, required: usize, found: usize },

    #[error("invalid domain name in row {row}: '{email}' has no '@'")]
    InvalidDomain { row: usize, email: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input: {source}")]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("Malformed record{}: {details}", at_line(.line))]
    MalformedRecord { line: Option<u64>, details: String },

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: Option<io::Error>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue { flag: String, value: String, reason: String },

    #[error("No input file given: pass FILE or --file")]
    MissingInput,
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Coarse classification callers branch on (exit codes, retry decisions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Io,
    MalformedRecord,
    EmptyInput,
    InvalidColumnCount,
    InvalidDomain,
    Output,
    Usage,
}

impl ErrorKind {
    /// Process exit code used by the binary for this kind.
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Usage => 2,
            Self::NotFound => 3,
            Self::Io => 4,
            Self::MalformedRecord => 5,
            Self::EmptyInput => 6,
            Self::InvalidColumnCount => 7,
            Self::InvalidDomain => 8,
            Self::Output => 9,
        }
    }
}

impl EmailDomainsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::Domain(err) => match err {
                DomainError::EmptyInput => ErrorKind::EmptyInput,
                DomainError::InvalidColumnCount { .. } => ErrorKind::InvalidColumnCount,
                DomainError::InvalidDomain { .. } => ErrorKind::InvalidDomain,
            },
            Self::Infrastructure(err) => match err {
                InfrastructureError::Open { source, .. } | InfrastructureError::Read { source }
                    if source.kind() == io::ErrorKind::NotFound =>
                {
                    ErrorKind::NotFound
                }
                InfrastructureError::Open { .. } | InfrastructureError::Read { .. } => ErrorKind::Io,
                InfrastructureError::MalformedRecord { .. } => ErrorKind::MalformedRecord,
                InfrastructureError::Serialization { .. } | InfrastructureError::Output { .. } => {
                    ErrorKind::Output
                }
            },
            Self::Presentation(_) => ErrorKind::Usage,
        }
    }

    /// The underlying I/O error for `Open`/`Read` failures.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Context { source, .. } => source.io_error(),
            Self::Infrastructure(
                InfrastructureError::Open { source, .. } | InfrastructureError::Read { source },
            ) => Some(source),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

fn at_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl From<io::Error> for InfrastructureError {
    fn from(err: io::Error) -> Self {
        Self::Read { source: err }
    }
}

impl From<io::Error> for EmailDomainsError {
    fn from(err: io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { format: "JSON".to_string(), details: err.to_string() }
    }
}

impl From<serde_json::Error> for EmailDomainsError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization { format: "YAML".to_string(), details: err.to_string() }
    }
}

impl From<serde_yaml::Error> for EmailDomainsError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<EmailDomainsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EmailDomainsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| EmailDomainsError::Context { context: f(), source: Box::new(e.into()) })
    }
}

//! Error and warning types produced while reading or writing hextuples.

use std::fmt;

use crate::record::RawRecord;

/// Errors that can arise when decoding a hextuple stream or writing one out.
///
/// Per-line variants carry the 1-based line number once the parser has
/// attached it (see [`HextError::at_line`]); they are `None` when the error
/// was produced by calling a decoding step directly.
#[derive(Debug)]
pub enum HextError {
    /// Underlying I/O error while reading the source or writing output.
    Io(std::io::Error),
    /// The line is not a JSON array of exactly six strings or nulls.
    Decode {
        line: Option<usize>,
        message: String,
    },
    /// A required field (subject, predicate, value, datatype) is absent.
    Validation {
        line: Option<usize>,
        field: &'static str,
        record: RawRecord,
    },
    /// The target store cannot hold named graphs.
    Capability,
    /// A resolved term was rejected by the RDF model (bad IRI, blank node id
    /// or language tag), or a term cannot be expressed as a hextuple.
    InvalidTerm {
        line: Option<usize>,
        message: String,
    },
    /// The store refused an insertion.
    Store(String),
}

impl HextError {
    /// Attaches a line number to per-line errors; other variants pass through.
    pub fn at_line(self, n: usize) -> Self {
        match self {
            HextError::Decode { message, .. } => HextError::Decode {
                line: Some(n),
                message,
            },
            HextError::Validation { field, record, .. } => HextError::Validation {
                line: Some(n),
                field,
                record,
            },
            HextError::InvalidTerm { message, .. } => HextError::InvalidTerm {
                line: Some(n),
                message,
            },
            other => other,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            HextError::Decode { line, .. }
            | HextError::Validation { line, .. }
            | HextError::InvalidTerm { line, .. } => *line,
            _ => None,
        }
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        HextError::Decode {
            line: None,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_term(message: impl Into<String>) -> Self {
        HextError::InvalidTerm {
            line: None,
            message: message.into(),
        }
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, line: &Option<usize>) -> fmt::Result {
    match line {
        Some(n) => write!(f, " at line {}", n),
        None => Ok(()),
    }
}

impl fmt::Display for HextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HextError::Io(e) => write!(f, "{}", e),
            HextError::Decode { line, message } => {
                write!(f, "malformed hextuple")?;
                write_line(f, line)?;
                write!(f, ": {}", message)
            }
            HextError::Validation {
                line,
                field,
                record,
            } => {
                write!(
                    f,
                    "subject, predicate, value, datatype cannot be null ({} is missing)",
                    field
                )?;
                write_line(f, line)?;
                write!(f, ". Given: {}", record)
            }
            HextError::Capability => {
                write!(f, "the hextuples parser needs a context-aware store")
            }
            HextError::InvalidTerm { line, message } => {
                write!(f, "invalid term")?;
                write_line(f, line)?;
                write!(f, ": {}", message)
            }
            HextError::Store(m) => write!(f, "store error: {}", m),
        }
    }
}

impl std::error::Error for HextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HextError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HextError {
    fn from(e: std::io::Error) -> Self {
        HextError::Io(e)
    }
}

impl From<oxigraph::store::StorageError> for HextError {
    fn from(e: oxigraph::store::StorageError) -> Self {
        HextError::Store(e.to_string())
    }
}

/// Non-fatal conditions reported alongside a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The caller declared an encoding other than UTF-8; input was still read as UTF-8.
    EncodingMismatch { declared: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::EncodingMismatch { declared } => write!(
                f,
                "Hextuples files are always utf-8 encoded, got {}, reading as utf-8 anyway",
                declared
            ),
        }
    }
}

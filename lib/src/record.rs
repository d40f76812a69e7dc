//! Line decoding and field validation.
//!
//! A hextuple line is a JSON array `[subject, predicate, value, datatype,
//! language, graph]` whose elements are strings or `null`. [`decode_line`]
//! turns one line into a [`RawRecord`], normalizing empty strings to absent
//! everywhere except the `value` position, where an empty literal is
//! legitimate. [`RawRecord::validate`] then checks the required fields.

use std::fmt;

use serde::Serialize;

use crate::consts::{ARITY, DATATYPE, FIELD_NAMES, GRAPH, LANGUAGE, PREDICATE, SUBJECT, VALUE};
use crate::errors::HextError;
use crate::Result;

/// The six positional fields of one decoded line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawRecord([Option<String>; ARITY]);

impl RawRecord {
    pub fn new(fields: [Option<String>; ARITY]) -> Self {
        RawRecord(fields)
    }

    pub fn fields(&self) -> &[Option<String>; ARITY] {
        &self.0
    }

    pub fn subject(&self) -> Option<&str> {
        self.0[SUBJECT].as_deref()
    }

    pub fn predicate(&self) -> Option<&str> {
        self.0[PREDICATE].as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.0[VALUE].as_deref()
    }

    pub fn datatype(&self) -> Option<&str> {
        self.0[DATATYPE].as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.0[LANGUAGE].as_deref()
    }

    pub fn graph(&self) -> Option<&str> {
        self.0[GRAPH].as_deref()
    }

    /// Checks that subject, predicate, value and datatype are present.
    ///
    /// The first missing field is named in the error, which also carries the
    /// whole record for diagnostics.
    pub fn validate(self) -> Result<ValidatedRecord> {
        match self.0 {
            [Some(subject), Some(predicate), Some(value), Some(datatype), language, graph] => {
                Ok(ValidatedRecord {
                    subject,
                    predicate,
                    value,
                    datatype,
                    language,
                    graph,
                })
            }
            fields => {
                let pos = (SUBJECT..=DATATYPE)
                    .find(|&i| fields[i].is_none())
                    .unwrap_or(SUBJECT);
                Err(HextError::Validation {
                    line: None,
                    field: FIELD_NAMES[pos],
                    record: RawRecord(fields),
                })
            }
        }
    }
}

impl fmt::Display for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{:?}", self.0),
        }
    }
}

/// A record whose required fields are known to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    pub subject: String,
    pub predicate: String,
    pub value: String,
    pub datatype: String,
    pub language: Option<String>,
    pub graph: Option<String>,
}

/// Decodes one line into a [`RawRecord`].
///
/// Fails if the line is not a JSON array of exactly six strings or nulls.
/// Empty strings become `None` in every position except `value`.
pub fn decode_line(line: &str) -> Result<RawRecord> {
    let parsed: Vec<Option<String>> =
        serde_json::from_str(line).map_err(|e| HextError::decode(e.to_string()))?;
    if parsed.len() != ARITY {
        return Err(HextError::decode(format!(
            "expected {} fields, found {}",
            ARITY,
            parsed.len()
        )));
    }

    let mut fields: [Option<String>; ARITY] = Default::default();
    for (pos, field) in parsed.into_iter().enumerate() {
        fields[pos] = match field {
            Some(s) if s.is_empty() && pos != VALUE => None,
            other => other,
        };
    }
    Ok(RawRecord(fields))
}

//! hextuples: streaming reader and writer for the Hextuples RDF format.
//!
//! Hextuples files are newline-delimited JSON: every line is an array
//! `[subject, predicate, value, datatype, language, graph]` describing one
//! RDF statement and, optionally, the named graph it belongs to.
//!
//! Parse a document into an oxigraph store
//!
//! ```
//! use hextuples::{HextuplesParser, LineSource};
//! use oxigraph::store::Store;
//!
//! let data = r#"["http://ex/a","http://ex/b","v","http://www.w3.org/2001/XMLSchema#string","",""]
//! ["_:b1","http://ex/b","_:b2","localId","","http://ex/g"]"#;
//!
//! let mut store = Store::new().unwrap();
//! let summary = HextuplesParser::new()
//!     .parse(LineSource::from(data), &mut store)
//!     .unwrap();
//! assert_eq!(summary.triples, 1);
//! assert_eq!(summary.quads, 1);
//! ```
//!
//! The store must be able to hold named graphs; see [`ContextAwareStore`].

pub mod consts;
pub mod errors;
pub mod options;
pub mod parser;
pub mod record;
pub mod serializer;
pub mod source;
pub mod store;
pub mod term;

pub use errors::{HextError, Warning};
pub use options::{ParserOptions, TermValidation};
pub use parser::{HextuplesParser, ParseSummary, StatementIter};
pub use record::{decode_line, RawRecord, ValidatedRecord};
pub use serializer::{encode_statement, HextuplesSerializer};
pub use source::LineSource;
pub use store::{ContextAwareStore, Emitted, Emitter};
pub use term::{LiteralKind, Statement, Subject, Term};

/// Crate-level result type.
pub type Result<T> = std::result::Result<T, HextError>;

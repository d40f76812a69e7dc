//! Writes statements out as hextuple lines.
//!
//! Each statement becomes one JSON array of six strings followed by `\n`.
//! Absent fields are written as empty strings. IRIs in object position use
//! the `globalId` datatype, blank nodes `localId`, and language-tagged
//! literals carry `rdf:langString` as their datatype.

use std::io::Write;

use oxigraph::model::QuadRef;
use serde_json::json;

use crate::consts::{BLANK_NODE_PREFIX, GLOBAL_ID, LOCAL_ID, RDF_LANG_STRING};
use crate::term::{LiteralKind, Statement, Subject, Term};
use crate::Result;

/// Renders one statement as a hextuple line, without the trailing newline.
pub fn encode_statement(statement: &Statement) -> String {
    let subject = match &statement.subject {
        Subject::Iri(i) => i.clone(),
        Subject::BNode(b) => format!("{}{}", BLANK_NODE_PREFIX, b),
    };
    let (value, datatype, language) = match &statement.object {
        Term::Iri(i) => (i.clone(), GLOBAL_ID, ""),
        Term::BNode(b) => (format!("{}{}", BLANK_NODE_PREFIX, b), LOCAL_ID, ""),
        Term::Literal {
            lex,
            kind: LiteralKind::Typed(dt),
        } => (lex.clone(), dt.as_str(), ""),
        Term::Literal {
            lex,
            kind: LiteralKind::Lang(lang),
        } => (lex.clone(), RDF_LANG_STRING.as_str(), lang.as_str()),
    };
    let graph = statement.context.as_deref().unwrap_or("");
    json!([
        subject,
        statement.predicate,
        value,
        datatype,
        language,
        graph
    ])
    .to_string()
}

/// Streams hextuple lines into a writer.
pub struct HextuplesSerializer<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> HextuplesSerializer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn serialize_statement(&mut self, statement: &Statement) -> Result<()> {
        let line = encode_statement(statement);
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Writes an oxigraph quad; the default graph is written as no context.
    pub fn serialize_quad<'a>(&mut self, quad: impl Into<QuadRef<'a>>) -> Result<()> {
        let statement = Statement::try_from(quad.into())?;
        self.serialize_statement(&statement)
    }

    /// Number of lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

//! Streaming hextuples parser.
//!
//! ```no_run
//! use hextuples::{HextuplesParser, LineSource};
//! use oxigraph::store::Store;
//!
//! let mut store = Store::new().unwrap();
//! let summary = HextuplesParser::new()
//!     .parse(LineSource::from_path("data.hext"), &mut store)
//!     .unwrap();
//! println!("{} triples, {} quads", summary.triples, summary.quads);
//! ```

use std::io::ErrorKind;

use log::{debug, warn};
use oxigraph::model::GraphName;

use crate::errors::{HextError, Warning};
use crate::options::{ParserOptions, TermValidation};
use crate::record::decode_line;
use crate::source::{LineSource, SourceLines};
use crate::store::{ContextAwareStore, Emitted, Emitter};
use crate::term::Statement;
use crate::Result;

/// Counts reported by a successful [`HextuplesParser::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Statements inserted into the default graph.
    pub triples: usize,
    /// Statements inserted into a named graph.
    pub quads: usize,
    pub warnings: Vec<Warning>,
}

impl ParseSummary {
    pub fn statements(&self) -> usize {
        self.triples + self.quads
    }
}

/// Reads hextuples one line at a time and stops at the first bad line.
#[derive(Debug, Clone, Default)]
pub struct HextuplesParser {
    options: ParserOptions,
}

impl HextuplesParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Sets the graph that receives statements without a context.
    pub fn with_default_graph(mut self, graph: impl Into<GraphName>) -> Self {
        self.options.default_graph = graph.into();
        self
    }

    /// Declares the input encoding. Only UTF-8 is supported; other values
    /// produce a warning.
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.options.encoding = Some(encoding.into());
        self
    }

    /// Rejects lines whose IRIs, blank node ids or language tags are not
    /// valid RDF, failing with [`HextError::InvalidTerm`].
    pub fn strict(mut self) -> Self {
        self.options.validation = TermValidation::Strict;
        self
    }

    /// Builds terms from the field strings without checking them. This is
    /// the default.
    pub fn lenient(mut self) -> Self {
        self.options.validation = TermValidation::Lenient;
        self
    }

    /// Iterates over the statements of a source without storing them.
    pub fn statements(&self, source: LineSource) -> Result<StatementIter> {
        Ok(StatementIter {
            lines: source.lines()?,
            line_no: 0,
            done: false,
        })
    }

    /// Parses every line of `source` into `store`.
    ///
    /// Fails with [`HextError::Capability`] before reading anything if the
    /// store cannot hold named graphs. Otherwise statements are inserted in
    /// source order until the source is exhausted or a line fails.
    pub fn parse<S>(&self, source: LineSource, store: &mut S) -> Result<ParseSummary>
    where
        S: ContextAwareStore + ?Sized,
    {
        let mut summary = ParseSummary::default();
        if let Some(w) = self.options.encoding_warning() {
            warn!("{}", w);
            summary.warnings.push(w);
        }

        if !store.is_context_aware() {
            return Err(HextError::Capability);
        }

        let mut emitter = Emitter::new(
            store,
            self.options.default_graph.clone(),
            self.options.validation.is_lenient(),
        );
        let mut statements = self.statements(source)?;
        while let Some(statement) = statements.next() {
            let statement = statement?;
            let line_no = statements.line_no();
            match emitter.emit(&statement).map_err(|e| e.at_line(line_no))? {
                Emitted::Triple => summary.triples += 1,
                Emitted::Quad => summary.quads += 1,
            }
        }
        summary.lines = statements.line_no();
        debug!(
            "Parsed {} lines: {} triples, {} quads",
            summary.lines, summary.triples, summary.quads
        );
        Ok(summary)
    }
}

/// Iterator returned by [`HextuplesParser::statements`].
///
/// Blank lines are skipped. After the first error the iterator is fused.
#[derive(Debug)]
pub struct StatementIter {
    lines: SourceLines,
    line_no: usize,
    done: bool,
}

impl StatementIter {
    /// Number of the line most recently read, starting at 1.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    fn next_statement(&mut self, line: &str) -> Result<Statement> {
        let record = decode_line(line)?;
        let record = record.validate()?;
        Ok(Statement::resolve(record))
    }
}

impl Iterator for StatementIter {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let next = self.lines.next()?;
            self.line_no += 1;
            let line = match next {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    let err = if e.kind() == ErrorKind::InvalidData {
                        HextError::decode(e.to_string()).at_line(self.line_no)
                    } else {
                        HextError::Io(e)
                    };
                    return Some(Err(err));
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let res = self
                .next_statement(&line)
                .map_err(|e| e.at_line(self.line_no));
            if res.is_err() {
                self.done = true;
            }
            return Some(res);
        }
    }
}

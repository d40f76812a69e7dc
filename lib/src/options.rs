//! Parser configuration.

use oxigraph::model::GraphName;

use crate::errors::Warning;

/// The only encoding hextuples files may use.
pub const UTF8: &str = "utf-8";

/// Controls whether resolved terms are checked by the RDF model.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TermValidation {
    /// Reject invalid IRIs, blank node ids and language tags.
    Strict,
    /// Build terms from the field strings as given.
    #[default]
    Lenient,
}

impl TermValidation {
    pub fn is_lenient(self) -> bool {
        matches!(self, TermValidation::Lenient)
    }
}

impl From<bool> for TermValidation {
    fn from(lenient: bool) -> Self {
        if lenient {
            TermValidation::Lenient
        } else {
            TermValidation::Strict
        }
    }
}

/// Options recognised by [`crate::HextuplesParser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Declared input encoding. Anything other than unset or `utf-8` only
    /// produces a warning; input is always read as UTF-8.
    pub encoding: Option<String>,
    /// Graph receiving statements that carry no context.
    pub default_graph: GraphName,
    pub validation: TermValidation,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            encoding: None,
            default_graph: GraphName::DefaultGraph,
            validation: TermValidation::Lenient,
        }
    }
}

impl ParserOptions {
    /// Returns a warning when the declared encoding is not UTF-8.
    pub fn encoding_warning(&self) -> Option<Warning> {
        match &self.encoding {
            Some(enc) if !enc.eq_ignore_ascii_case(UTF8) => Some(Warning::EncodingMismatch {
                declared: enc.clone(),
            }),
            _ => None,
        }
    }
}

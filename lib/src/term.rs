//! Typed statements and the rules that resolve a validated record into one.
//!
//! Resolution follows the hextuples conventions:
//!
//! - a subject starting with `_:` is a blank node, anything else an IRI;
//! - the predicate is always an IRI;
//! - the object depends on the datatype field: `globalId` gives an IRI,
//!   `localId` a blank node, and anything else a literal. A literal with a
//!   language tag is language-tagged and its datatype field is dropped, since
//!   RDF language-tagged literals carry no datatype of their own;
//! - a present graph field becomes the statement's context IRI.

use std::fmt;

use oxigraph::model::{
    BlankNode, GraphName, GraphNameRef, Literal, NamedNode, NamedOrBlankNode, NamedOrBlankNodeRef,
    Quad, QuadRef, TermRef,
};

use crate::consts::{BLANK_NODE_PREFIX, GLOBAL_ID, LOCAL_ID};
use crate::errors::HextError;
use crate::record::ValidatedRecord;
use crate::Result;

/// Subject of a statement: an IRI or a blank node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    Iri(String),
    /// Blank node label without the `_:` prefix.
    BNode(String),
}

/// Kind of a literal: datatype-typed or language-tagged, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Datatype IRI.
    Typed(String),
    /// Language tag.
    Lang(String),
}

/// Object position term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Iri(String),
    /// Blank node label without the `_:` prefix.
    BNode(String),
    Literal { lex: String, kind: LiteralKind },
}

impl From<Subject> for Term {
    fn from(s: Subject) -> Self {
        match s {
            Subject::Iri(i) => Term::Iri(i),
            Subject::BNode(b) => Term::BNode(b),
        }
    }
}

/// One RDF statement with an optional graph context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    pub subject: Subject,
    /// Predicate IRI.
    pub predicate: String,
    pub object: Term,
    /// Named graph IRI; `None` means the default graph.
    pub context: Option<String>,
}

fn strip_bnode_prefix(s: String) -> String {
    match s.strip_prefix(BLANK_NODE_PREFIX) {
        Some(rest) => rest.to_string(),
        None => s,
    }
}

impl Statement {
    /// Resolves a validated record into a statement.
    pub fn resolve(record: ValidatedRecord) -> Self {
        let ValidatedRecord {
            subject,
            predicate,
            value,
            datatype,
            language,
            graph,
        } = record;

        let subject = if subject.starts_with(BLANK_NODE_PREFIX) {
            Subject::BNode(strip_bnode_prefix(subject))
        } else {
            Subject::Iri(subject)
        };

        let object = match datatype.as_str() {
            GLOBAL_ID => Term::Iri(value),
            LOCAL_ID => Term::BNode(strip_bnode_prefix(value)),
            _ => match language {
                Some(lang) => Term::Literal {
                    lex: value,
                    kind: LiteralKind::Lang(lang),
                },
                None => Term::Literal {
                    lex: value,
                    kind: LiteralKind::Typed(datatype),
                },
            },
        };

        Statement {
            subject,
            predicate,
            object,
            context: graph,
        }
    }

    pub fn is_quad(&self) -> bool {
        self.context.is_some()
    }

    /// Builds an oxigraph quad, placing context-less statements in `default_graph`.
    ///
    /// With `lenient` the field strings are used as given; otherwise IRIs,
    /// blank node ids and language tags are validated.
    pub fn to_quad(&self, default_graph: GraphNameRef<'_>, lenient: bool) -> Result<Quad> {
        let subject: NamedOrBlankNode = match &self.subject {
            Subject::Iri(i) => named_node(i, lenient)?.into(),
            Subject::BNode(b) => blank_node(b, lenient)?.into(),
        };
        let predicate = named_node(&self.predicate, lenient)?;
        let object: oxigraph::model::Term = match &self.object {
            Term::Iri(i) => named_node(i, lenient)?.into(),
            Term::BNode(b) => blank_node(b, lenient)?.into(),
            Term::Literal {
                lex,
                kind: LiteralKind::Typed(dt),
            } => Literal::new_typed_literal(lex.as_str(), named_node(dt, lenient)?).into(),
            Term::Literal {
                lex,
                kind: LiteralKind::Lang(lang),
            } => lang_literal(lex, lang, lenient)?.into(),
        };
        let graph_name = match &self.context {
            Some(c) => GraphName::NamedNode(named_node(c, lenient)?),
            None => default_graph.into_owned(),
        };
        Ok(Quad::new(subject, predicate, object, graph_name))
    }
}

fn named_node(iri: &str, lenient: bool) -> Result<NamedNode> {
    if lenient {
        return Ok(NamedNode::new_unchecked(iri));
    }
    NamedNode::new(iri).map_err(|e| HextError::invalid_term(format!("<{}>: {}", iri, e)))
}

fn blank_node(id: &str, lenient: bool) -> Result<BlankNode> {
    if lenient {
        return Ok(BlankNode::new_unchecked(id));
    }
    BlankNode::new(id).map_err(|e| HextError::invalid_term(format!("_:{}: {}", id, e)))
}

fn lang_literal(lex: &str, lang: &str, lenient: bool) -> Result<Literal> {
    if lenient {
        return Ok(Literal::new_language_tagged_literal_unchecked(lex, lang));
    }
    Literal::new_language_tagged_literal(lex, lang)
        .map_err(|e| HextError::invalid_term(format!("@{}: {}", lang, e)))
}

impl<'a> TryFrom<QuadRef<'a>> for Statement {
    type Error = HextError;

    /// Maps an oxigraph quad back into a statement; the default graph maps to
    /// no context. Blank node graph names have no hextuple form.
    fn try_from(q: QuadRef<'a>) -> Result<Self> {
        #[allow(unreachable_patterns)]
        let subject = match q.subject {
            NamedOrBlankNodeRef::NamedNode(n) => Subject::Iri(n.as_str().to_string()),
            NamedOrBlankNodeRef::BlankNode(b) => Subject::BNode(b.as_str().to_string()),
            other => {
                return Err(HextError::invalid_term(format!(
                    "unsupported subject {}",
                    other
                )))
            }
        };
        #[allow(unreachable_patterns)]
        let object = match q.object {
            TermRef::NamedNode(n) => Term::Iri(n.as_str().to_string()),
            TermRef::BlankNode(b) => Term::BNode(b.as_str().to_string()),
            TermRef::Literal(l) => {
                let kind = match l.language() {
                    Some(lang) => LiteralKind::Lang(lang.to_string()),
                    None => LiteralKind::Typed(l.datatype().as_str().to_string()),
                };
                Term::Literal {
                    lex: l.value().to_string(),
                    kind,
                }
            }
            other => {
                return Err(HextError::invalid_term(format!(
                    "unsupported object {}",
                    other
                )))
            }
        };
        let context = match q.graph_name {
            GraphNameRef::NamedNode(n) => Some(n.as_str().to_string()),
            GraphNameRef::DefaultGraph => None,
            GraphNameRef::BlankNode(b) => {
                return Err(HextError::invalid_term(format!(
                    "blank node graph name {} cannot be written as a hextuple",
                    b
                )))
            }
        };
        Ok(Statement {
            subject,
            predicate: q.predicate.as_str().to_string(),
            object,
            context,
        })
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Iri(i) => write!(f, "<{}>", i),
            Subject::BNode(b) => write!(f, "_:{}", b),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(i) => write!(f, "<{}>", i),
            Term::BNode(b) => write!(f, "_:{}", b),
            Term::Literal {
                lex,
                kind: LiteralKind::Typed(dt),
            } => write!(f, "{:?}^^<{}>", lex, dt),
            Term::Literal {
                lex,
                kind: LiteralKind::Lang(lang),
            } => write!(f, "{:?}@{}", lex, lang),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {}", self.subject, self.predicate, self.object)?;
        if let Some(c) = &self.context {
            write!(f, " <{}>", c)?;
        }
        Ok(())
    }
}

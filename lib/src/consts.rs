//! Constants of the hextuples wire format and the RDF vocabulary terms it
//! refers to.

use oxigraph::model::NamedNodeRef;

/// Number of positional fields in every hextuple line.
pub const ARITY: usize = 6;

/// Field names by position, used in diagnostics.
pub const FIELD_NAMES: [&str; ARITY] = [
    "subject",
    "predicate",
    "value",
    "datatype",
    "language",
    "graph",
];

// field positions
pub const SUBJECT: usize = 0;
pub const PREDICATE: usize = 1;
pub const VALUE: usize = 2;
pub const DATATYPE: usize = 3;
pub const LANGUAGE: usize = 4;
pub const GRAPH: usize = 5;

/// Datatype marker for an object that is an IRI.
pub const GLOBAL_ID: &str = "globalId";
/// Datatype marker for an object that is a blank node.
pub const LOCAL_ID: &str = "localId";
/// Prefix of blank node labels in subject and value positions.
pub const BLANK_NODE_PREFIX: &str = "_:";

pub const XSD_STRING: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#string");
pub const RDF_LANG_STRING: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString");

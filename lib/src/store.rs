//! Store abstraction and the statement emitter.
//!
//! Parsing writes into anything implementing [`ContextAwareStore`]. The
//! [`Emitter`] borrows the store for one parse call and inserts each
//! statement as a quad when it has a context, or as a triple in the
//! caller's default graph when it does not.

use log::trace;
use oxigraph::model::{Dataset, Graph, GraphName, GraphNameRef, Quad, QuadRef, TripleRef};
use oxigraph::store::Store;

use crate::errors::HextError;
use crate::term::Statement;
use crate::Result;

/// A statement store that may hold named graphs.
pub trait ContextAwareStore {
    /// Returns true if the store can partition statements into named graphs.
    fn is_context_aware(&self) -> bool;

    /// Inserts a triple into the given graph.
    fn add_triple(&mut self, triple: TripleRef<'_>, graph: GraphNameRef<'_>) -> Result<()> {
        self.add_quad(triple.in_graph(graph))
    }

    /// Inserts a quad.
    fn add_quad(&mut self, quad: QuadRef<'_>) -> Result<()>;
}

impl ContextAwareStore for Store {
    fn is_context_aware(&self) -> bool {
        true
    }

    fn add_quad(&mut self, quad: QuadRef<'_>) -> Result<()> {
        self.insert(quad)?;
        Ok(())
    }
}

impl ContextAwareStore for Dataset {
    fn is_context_aware(&self) -> bool {
        true
    }

    fn add_quad(&mut self, quad: QuadRef<'_>) -> Result<()> {
        self.insert(quad);
        Ok(())
    }
}

/// Keeps every quad in insertion order.
impl ContextAwareStore for Vec<Quad> {
    fn is_context_aware(&self) -> bool {
        true
    }

    fn add_quad(&mut self, quad: QuadRef<'_>) -> Result<()> {
        self.push(quad.into_owned());
        Ok(())
    }
}

/// A single graph has no named graphs; the parser refuses it.
impl ContextAwareStore for Graph {
    fn is_context_aware(&self) -> bool {
        false
    }

    fn add_triple(&mut self, triple: TripleRef<'_>, graph: GraphNameRef<'_>) -> Result<()> {
        if !graph.is_default_graph() {
            return Err(HextError::Capability);
        }
        self.insert(triple);
        Ok(())
    }

    fn add_quad(&mut self, quad: QuadRef<'_>) -> Result<()> {
        self.add_triple(
            TripleRef::new(quad.subject, quad.predicate, quad.object),
            quad.graph_name,
        )
    }
}

/// What the emitter did with a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted {
    /// Inserted as a triple into the default graph.
    Triple,
    /// Inserted as a quad into the statement's named graph.
    Quad,
}

/// Inserts resolved statements into a borrowed store.
pub struct Emitter<'a, S: ContextAwareStore + ?Sized> {
    store: &'a mut S,
    default_graph: GraphName,
    lenient: bool,
}

impl<'a, S: ContextAwareStore + ?Sized> Emitter<'a, S> {
    /// Wraps a store whose context-awareness the caller has already checked.
    pub fn new(store: &'a mut S, default_graph: GraphName, lenient: bool) -> Self {
        Self {
            store,
            default_graph,
            lenient,
        }
    }

    pub fn default_graph(&self) -> GraphNameRef<'_> {
        self.default_graph.as_ref()
    }

    /// Inserts one statement.
    pub fn emit(&mut self, statement: &Statement) -> Result<Emitted> {
        let quad = statement.to_quad(self.default_graph.as_ref(), self.lenient)?;
        trace!("Emitting {}", quad);
        if statement.is_quad() {
            self.store.add_quad(quad.as_ref())?;
            Ok(Emitted::Quad)
        } else {
            let q = quad.as_ref();
            self.store.add_triple(
                TripleRef::new(q.subject, q.predicate, q.object),
                self.default_graph.as_ref(),
            )?;
            Ok(Emitted::Triple)
        }
    }
}

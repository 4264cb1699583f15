//! Turtle 1.1 parsing via sophia.
//!
//! sophia's Turtle parser streams triples; each one is copied into an owned
//! [`Term`] triple and inserted into a fresh [`Graph`]. Relative IRIs are
//! resolved against the configured base IRI.

use sophia_api::parser::TripleParser;
use sophia_api::prelude::Iri;
use sophia_api::source::TripleSource;
use sophia_api::term::{Term as SophiaTerm, TermKind};
use sophia_api::triple::Triple as SophiaTriple;
use sophia_turtle::parser::turtle::TurtleParser;

use crate::graph::Graph;
use crate::term::{Literal, Term};

/// Errors raised while turning Turtle text into a [`Graph`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The base IRI used for resolution is not an absolute IRI.
    #[error("invalid base IRI <{iri}>: {reason}")]
    InvalidBase {
        /// The rejected base IRI.
        iri: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The document is not valid Turtle.
    #[error("{0}")]
    Syntax(String),

    /// The document uses a term kind outside plain RDF 1.1 (e.g. quoted triples).
    #[error("unsupported term in {position} position")]
    UnsupportedTerm {
        /// Which triple position held the term.
        position: &'static str,
    },
}

/// Parses a Turtle document into a [`Graph`].
///
/// # Errors
///
/// Returns [`ParseError`] if `base` is not an absolute IRI, if the document
/// is not valid Turtle, or if it contains terms that are not IRIs, blank
/// nodes or literals.
pub fn parse_turtle(input: &str, base: &str) -> Result<Graph, ParseError> {
    let base_iri = Iri::new(base.to_owned()).map_err(|e| ParseError::InvalidBase {
        iri: base.to_owned(),
        reason: e.to_string(),
    })?;
    let parser = TurtleParser {
        base: Some(base_iri),
    };

    let mut graph = Graph::new();
    let mut unsupported: Option<&'static str> = None;

    parser
        .parse_str(input)
        .for_each_triple(|t| {
            let converted = (
                convert(t.s()).ok_or("subject"),
                convert(t.p())
                    .and_then(|p| p.as_iri().map(str::to_owned))
                    .ok_or("predicate"),
                convert(t.o()).ok_or("object"),
            );
            match converted {
                (Ok(s), Ok(p), Ok(o)) => {
                    graph.insert(s, &p, o);
                }
                (Err(position), _, _) | (_, Err(position), _) | (_, _, Err(position)) => {
                    unsupported.get_or_insert(position);
                }
            }
        })
        .map_err(|e| ParseError::Syntax(e.to_string()))?;

    if let Some(position) = unsupported {
        return Err(ParseError::UnsupportedTerm { position });
    }

    tracing::debug!(triples = graph.len(), "parsed input graph");
    Ok(graph)
}

fn convert<T: SophiaTerm>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::BlankNode(id.as_str().to_owned())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?.to_string();
            let datatype = term.datatype()?.as_str().to_owned();
            let language = term.language_tag().map(|tag| tag.as_str().to_owned());
            Some(Term::Literal(Literal {
                lexical,
                datatype,
                language,
            }))
        }
        _ => None,
    }
}

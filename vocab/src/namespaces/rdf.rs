//! `rdf:` namespace: RDF core terms.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// `rdf:type`.
pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:value`, the generic value of a structured entity.
pub const VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";
/// `rdf:langString`, the datatype of language-tagged literals.
pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// Returns the `rdf:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "rdf",
        iri: NS,
        label: "RDF",
        comment: "Typing and generic values.",
    }
}

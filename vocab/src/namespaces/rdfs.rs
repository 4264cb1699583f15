//! `rdfs:` namespace: RDF Schema.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// `rdfs:label`.
pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// Returns the `rdfs:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "rdfs",
        iri: NS,
        label: "RDF Schema",
        comment: "Labels of results and plan variables.",
    }
}

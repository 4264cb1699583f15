//! `bfo:` namespace: placeholder for the "is input of" relation.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "https://example.org/bfo/";

/// `bfo:is_input_of`, relating an input entity to the activity consuming it.
pub const IS_INPUT_OF: &str = "https://example.org/bfo/is_input_of";

/// Returns the `bfo:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "bfo",
        iri: NS,
        label: "BFO relations",
        comment: "Input-of relation between entities and activities.",
    }
}

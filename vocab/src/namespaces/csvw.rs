//! `csvw:` namespace: CSV on the Web.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/ns/csvw#";

/// `csvw:url`, the location of the tabular data a column was read from.
pub const URL: &str = "http://www.w3.org/ns/csvw#url";

/// Returns the `csvw:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "csvw",
        iri: NS,
        label: "CSV on the Web",
        comment: "Source table of a loaded column.",
    }
}

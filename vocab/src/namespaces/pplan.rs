//! `p-plan:` namespace: workflow plans and variables.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://purl.org/net/p-plan#";

/// `p-plan:correspondsToVariable`.
pub const CORRESPONDS_TO_VARIABLE: &str = "http://purl.org/net/p-plan#correspondsToVariable";

/// Returns the `p-plan:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "p-plan",
        iri: NS,
        label: "P-Plan",
        comment: "Binds step inputs to the plan variables they instantiate.",
    }
}

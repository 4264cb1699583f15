//! `qudt:` namespace: quantities and units.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://qudt.org/schema/qudt/";

/// `qudt:QuantityValue`.
pub const QUANTITY_VALUE: &str = "http://qudt.org/schema/qudt/QuantityValue";
/// `qudt:numericValue`.
pub const NUMERIC_VALUE: &str = "http://qudt.org/schema/qudt/numericValue";
/// `qudt:unit`.
pub const UNIT: &str = "http://qudt.org/schema/qudt/unit";

/// Returns the `qudt:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "qudt",
        iri: NS,
        label: "QUDT Schema",
        comment: "Numeric quantity values and their units.",
    }
}

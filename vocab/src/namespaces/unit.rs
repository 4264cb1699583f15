//! `unit:` namespace: QUDT unit individuals.
//!
//! Only the units the CSV column loader can map from a notation are listed.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://qudt.org/vocab/unit/";

/// `unit:MilliM`.
pub const MILLI_M: &str = "http://qudt.org/vocab/unit/MilliM";
/// `unit:CentiM`.
pub const CENTI_M: &str = "http://qudt.org/vocab/unit/CentiM";
/// `unit:M`.
pub const M: &str = "http://qudt.org/vocab/unit/M";
/// `unit:KiloGM`.
pub const KILO_GM: &str = "http://qudt.org/vocab/unit/KiloGM";
/// `unit:GM`.
pub const GM: &str = "http://qudt.org/vocab/unit/GM";
/// `unit:SEC`.
pub const SEC: &str = "http://qudt.org/vocab/unit/SEC";
/// `unit:DEG_C`.
pub const DEG_C: &str = "http://qudt.org/vocab/unit/DEG_C";
/// `unit:K`.
pub const K: &str = "http://qudt.org/vocab/unit/K";

/// Returns the `unit:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "unit",
        iri: NS,
        label: "QUDT Units",
        comment: "Unit individuals attached to quantity values.",
    }
}

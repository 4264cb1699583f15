//! `xsd:` namespace: XML Schema datatypes.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// `xsd:string`.
pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:decimal`.
pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
/// `xsd:integer`.
pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:double`.
pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
/// `xsd:boolean`.
pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

/// Returns the `xsd:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "xsd",
        iri: NS,
        label: "XML Schema Datatypes",
        comment: "Literal datatypes for numeric values, counts and messages.",
    }
}

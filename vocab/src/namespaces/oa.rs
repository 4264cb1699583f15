//! `oa:` namespace: W3C Web Annotation.
//!
//! Reused to carry step error messages: an `oa:Annotation` targets the
//! activity and its `oa:TextualBody` holds the message.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/ns/oa#";

/// `oa:Annotation`.
pub const ANNOTATION: &str = "http://www.w3.org/ns/oa#Annotation";
/// `oa:TextualBody`.
pub const TEXTUAL_BODY: &str = "http://www.w3.org/ns/oa#TextualBody";
/// `oa:hasBody`.
pub const HAS_BODY: &str = "http://www.w3.org/ns/oa#hasBody";
/// `oa:hasTarget`.
pub const HAS_TARGET: &str = "http://www.w3.org/ns/oa#hasTarget";
/// `oa:motivatedBy`.
pub const MOTIVATED_BY: &str = "http://www.w3.org/ns/oa#motivatedBy";

/// Returns the `oa:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "oa",
        iri: NS,
        label: "Web Annotation",
        comment: "Error annotations targeting the failed activity.",
    }
}

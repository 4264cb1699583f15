//! `prov:` namespace: PROV-O.
//!
//! Activities, entities, agents and the derivation links that tie a step's
//! result back to its inputs.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/ns/prov#";

/// `prov:Activity`.
pub const ACTIVITY: &str = "http://www.w3.org/ns/prov#Activity";
/// `prov:Entity`.
pub const ENTITY: &str = "http://www.w3.org/ns/prov#Entity";
/// `prov:Collection`.
pub const COLLECTION: &str = "http://www.w3.org/ns/prov#Collection";
/// `prov:Agent`.
pub const AGENT: &str = "http://www.w3.org/ns/prov#Agent";
/// `prov:Plan`.
pub const PLAN: &str = "http://www.w3.org/ns/prov#Plan";
/// `prov:Association`.
pub const ASSOCIATION: &str = "http://www.w3.org/ns/prov#Association";

/// `prov:used`.
pub const USED: &str = "http://www.w3.org/ns/prov#used";
/// `prov:hadMember`.
pub const HAD_MEMBER: &str = "http://www.w3.org/ns/prov#hadMember";
/// `prov:wasGeneratedBy`.
pub const WAS_GENERATED_BY: &str = "http://www.w3.org/ns/prov#wasGeneratedBy";
/// `prov:wasDerivedFrom`.
pub const WAS_DERIVED_FROM: &str = "http://www.w3.org/ns/prov#wasDerivedFrom";
/// `prov:wasAssociatedWith`.
pub const WAS_ASSOCIATED_WITH: &str = "http://www.w3.org/ns/prov#wasAssociatedWith";
/// `prov:qualifiedAssociation`.
pub const QUALIFIED_ASSOCIATION: &str = "http://www.w3.org/ns/prov#qualifiedAssociation";
/// `prov:agent`.
pub const AGENT_PROP: &str = "http://www.w3.org/ns/prov#agent";
/// `prov:hadPlan`.
pub const HAD_PLAN: &str = "http://www.w3.org/ns/prov#hadPlan";

/// Returns the `prov:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "prov",
        iri: NS,
        label: "PROV-O",
        comment: "Activities, collections and derivation links.",
    }
}

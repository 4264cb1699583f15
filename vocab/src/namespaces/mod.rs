//! Namespace modules.
//!
//! Each sub-module declares one namespace as a [`Namespace`](crate::Namespace)
//! value plus the term IRIs the workflow steps read or write. Modules are
//! listed in binding order; see [`crate::Vocabulary::standard`].

pub mod rdf;
pub mod rdfs;
pub mod xsd;
pub mod prov;
pub mod qudt;
pub mod unit;
pub mod oa;
pub mod pplan;
pub mod csvw;
pub mod bfo;
pub mod ex;

//! Fixed RDF vocabularies used by the semflow workflow steps.
//!
//! The `semflow-vocab` crate encodes every namespace the steps read or write
//! (PROV-O, QUDT, Web Annotation, p-plan, CSVW, the `ex:` project vocabulary
//! and the `bfo:` input relation) as static Rust data: one module per
//! namespace, each with its namespace declaration and term IRIs.
//!
//! # Entry Point
//!
//! ```
//! let vocab = semflow_vocab::Vocabulary::standard();
//! assert_eq!(
//!     vocab.compact(semflow_vocab::namespaces::prov::ACTIVITY),
//!     Some(("prov", "Activity"))
//! );
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod namespaces;

pub use model::{Namespace, Vocabulary};

impl Vocabulary {
    /// Returns the standard vocabulary with every namespace the steps bind.
    ///
    /// Binding order: `rdf → rdfs → xsd → prov → qudt → unit → oa → p-plan →
    /// csvw → bfo → ex`.
    #[must_use]
    pub fn standard() -> &'static Vocabulary {
        static VOCABULARY: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| Vocabulary {
            namespaces: vec![
                namespaces::rdf::namespace(),
                namespaces::rdfs::namespace(),
                namespaces::xsd::namespace(),
                namespaces::prov::namespace(),
                namespaces::qudt::namespace(),
                namespaces::unit::namespace(),
                namespaces::oa::namespace(),
                namespaces::pplan::namespace(),
                namespaces::csvw::namespace(),
                namespaces::bfo::namespace(),
                namespaces::ex::namespace(),
            ],
        })
    }
}

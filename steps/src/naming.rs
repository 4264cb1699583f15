//! Content-addressed naming of step outputs.
//!
//! A step execution is identified by its activity and the set of inputs it
//! consumed. Hashing both gives a stable name, so running the same step on
//! the same inputs again lands on the same result IRI and replaces the old
//! result instead of adding a second one.
//!
//! Blank-node labels do not survive a serialize/parse cycle, so a blank-node
//! input is keyed by its outgoing triples instead of its label.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::{ResultNaming, StepConfig};
use crate::graph::Graph;
use crate::term::Term;

/// Hash used before the activity and inputs are known.
pub const UNKNOWN_HASH: &str = "unknown";

/// Number of hex characters kept from the SHA-256 digest.
pub const HASH_LEN: usize = 16;

/// Computes the execution hash of an activity and its inputs.
///
/// The inputs are sorted first, so their order in the graph does not matter:
/// `sha256(activity ++ sorted(inputs).concat())`, truncated to
/// [`HASH_LEN`] lowercase hex characters.
pub fn execution_hash<I, S>(activity: &str, inputs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<S> = inputs.into_iter().collect();
    sorted.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));

    let mut hasher = Sha256::new();
    hasher.update(activity.as_bytes());
    for input in &sorted {
        hasher.update(input.as_ref().as_bytes());
    }
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(HASH_LEN);
    hex
}

/// Execution hash of an activity term and input terms.
///
/// IRIs and literals contribute their plain string form; blank nodes
/// contribute [`input_key`].
#[must_use]
pub fn execution_hash_of(graph: &Graph, activity: &Term, inputs: &[Term]) -> String {
    execution_hash(
        &input_key(graph, activity),
        inputs.iter().map(|input| input_key(graph, input)),
    )
}

/// A key for `term` that is stable across re-serialization.
///
/// A blank node is written as `[p o; ...]` over its sorted outgoing triples,
/// with nested blank nodes collapsed to `[]`.
#[must_use]
pub fn input_key(graph: &Graph, term: &Term) -> String {
    if !matches!(term, Term::BlankNode(_)) {
        return term.to_string();
    }
    let mut pairs: Vec<String> = graph
        .triples_matching(Some(term), None, None)
        .map(|t| match &t.object {
            Term::BlankNode(_) => format!("{} []", t.predicate),
            object => format!("{} {object}", t.predicate),
        })
        .collect();
    pairs.sort();
    format!("[{}]", pairs.join("; "))
}

/// Mints the IRI `<base>#<prefix>_<suffix>` for a step output.
///
/// The suffix is `hash` under [`ResultNaming::ContentAddressed`] and a fresh
/// UUID under [`ResultNaming::Random`].
#[must_use]
pub fn mint(config: &StepConfig, prefix: &str, hash: &str) -> Term {
    let local = match config.naming {
        ResultNaming::ContentAddressed => format!("{prefix}_{hash}"),
        ResultNaming::Random => format!("{prefix}_{}", Uuid::new_v4().simple()),
    };
    Term::iri(config.mint_iri(&local))
}

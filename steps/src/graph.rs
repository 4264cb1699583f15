//! In-memory RDF graph owned by a single step invocation.
//!
//! The graph is a sorted set of triples plus the prefix bindings used when it
//! is written back out. Lookups are linear scans: step input graphs hold a
//! handful of activities and values, and every invocation touches the graph
//! only a few dozen times.

use std::collections::BTreeSet;

use semflow_vocab::namespaces::rdf;
use semflow_vocab::Vocabulary;

use crate::term::{Term, Triple};

/// A set of triples with prefix bindings.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: BTreeSet<Triple>,
    prefixes: Vec<(String, String)>,
    next_blank: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates over all triples in subject-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Binds `prefix` to `namespace`, replacing an earlier binding of the
    /// same prefix.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        match self.prefixes.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = namespace,
            None => self.prefixes.push((prefix, namespace)),
        }
    }

    /// Binds every namespace of `vocabulary`.
    pub fn bind_vocabulary(&mut self, vocabulary: &Vocabulary) {
        for ns in &vocabulary.namespaces {
            self.bind(ns.prefix, ns.iri);
        }
    }

    /// Prefix bindings in binding order.
    #[must_use]
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// Adds a triple. Returns false if it was already present.
    pub fn insert(&mut self, subject: Term, predicate: &str, object: Term) -> bool {
        self.triples.insert(Triple::new(subject, predicate, object))
    }

    /// Removes a triple. Returns false if it was absent.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.triples.remove(triple)
    }

    /// Returns true if the exact triple is present.
    #[must_use]
    pub fn contains(&self, subject: &Term, predicate: &str, object: &Term) -> bool {
        self.triples
            .contains(&Triple::new(subject.clone(), predicate, object.clone()))
    }

    /// Iterates over the triples matching a pattern; `None` matches anything.
    pub fn triples_matching<'a, 'q>(
        &'a self,
        subject: Option<&'q Term>,
        predicate: Option<&'q str>,
        object: Option<&'q Term>,
    ) -> impl Iterator<Item = &'a Triple> + 'q
    where
        'a: 'q,
    {
        self.triples.iter().filter(move |t| {
            subject.map_or(true, |s| t.subject == *s)
                && predicate.map_or(true, |p| t.predicate == p)
                && object.map_or(true, |o| t.object == *o)
        })
    }

    /// Subjects of `(?, predicate, object)`, in term order.
    pub fn subjects<'a, 'q>(
        &'a self,
        predicate: &'q str,
        object: &'q Term,
    ) -> impl Iterator<Item = &'a Term> + 'q
    where
        'a: 'q,
    {
        self.triples_matching(None, Some(predicate), Some(object))
            .map(|t| &t.subject)
    }

    /// Objects of `(subject, predicate, ?)`, in term order.
    pub fn objects<'a, 'q>(
        &'a self,
        subject: &'q Term,
        predicate: &'q str,
    ) -> impl Iterator<Item = &'a Term> + 'q
    where
        'a: 'q,
    {
        self.triples_matching(Some(subject), Some(predicate), None)
            .map(|t| &t.object)
    }

    /// The first object of `(subject, predicate, ?)`, if any.
    #[must_use]
    pub fn value(&self, subject: &Term, predicate: &str) -> Option<&Term> {
        self.objects(subject, predicate).next()
    }

    /// Returns true if `subject rdf:type class` is asserted.
    #[must_use]
    pub fn has_type(&self, subject: &Term, class: &str) -> bool {
        self.contains(subject, rdf::TYPE, &Term::iri(class))
    }

    /// All instances of `class`, in term order.
    pub fn instances_of<'a>(&'a self, class: &str) -> impl Iterator<Item = &'a Term> + 'a {
        let class = Term::iri(class);
        self.triples
            .iter()
            .filter(move |t| t.predicate == rdf::TYPE && t.object == class)
            .map(|t| &t.subject)
    }

    /// Returns true if `term` occurs as subject or object of any triple.
    #[must_use]
    pub fn mentions(&self, term: &Term) -> bool {
        self.triples
            .iter()
            .any(|t| t.subject == *term || t.object == *term)
    }

    /// Mints a blank node label not yet used in this graph.
    pub fn fresh_blank_node(&mut self) -> Term {
        loop {
            let candidate = Term::blank(format!("n{}", self.next_blank));
            self.next_blank += 1;
            if !self.mentions(&candidate) {
                return candidate;
            }
        }
    }

    /// Removes every triple that has `resource` as subject or object.
    /// Returns the number of triples removed.
    pub fn remove_resource(&mut self, resource: &Term) -> usize {
        self.take_resource(resource).len()
    }

    /// Like [`Graph::remove_resource`], but also removes blank nodes hanging
    /// off `resource` that are no longer referenced afterwards, so an
    /// annotation's body does not linger once the annotation is gone.
    pub fn remove_tree(&mut self, resource: &Term) -> usize {
        let doomed = self.take_resource(resource);
        let mut removed = doomed.len();
        for triple in doomed {
            if triple.subject == *resource
                && triple.object.is_blank_node()
                && !self.triples.iter().any(|t| t.object == triple.object)
            {
                removed += self.remove_tree(&triple.object);
            }
        }
        removed
    }

    fn take_resource(&mut self, resource: &Term) -> Vec<Triple> {
        let doomed: Vec<Triple> = self
            .triples
            .iter()
            .filter(|t| t.subject == *resource || t.object == *resource)
            .cloned()
            .collect();
        for triple in &doomed {
            self.triples.remove(triple);
        }
        doomed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semflow_vocab::namespaces::{oa, prov};

    fn iri(s: &str) -> Term {
        Term::iri(s)
    }

    #[test]
    fn insert_is_idempotent() {
        let mut g = Graph::new();
        assert!(g.insert(iri("urn:a"), rdf::TYPE, iri(prov::ACTIVITY)));
        assert!(!g.insert(iri("urn:a"), rdf::TYPE, iri(prov::ACTIVITY)));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn pattern_queries() {
        let mut g = Graph::new();
        g.insert(iri("urn:act"), prov::USED, iri("urn:x"));
        g.insert(iri("urn:act"), prov::USED, iri("urn:y"));
        g.insert(iri("urn:other"), prov::USED, iri("urn:x"));

        let used: Vec<_> = g.objects(&iri("urn:act"), prov::USED).collect();
        assert_eq!(used, vec![&iri("urn:x"), &iri("urn:y")]);

        let users: Vec<_> = g.subjects(prov::USED, &iri("urn:x")).collect();
        assert_eq!(users, vec![&iri("urn:act"), &iri("urn:other")]);

        assert_eq!(g.value(&iri("urn:act"), prov::USED), Some(&iri("urn:x")));
        assert_eq!(g.triples_matching(None, None, None).count(), 3);
    }

    #[test]
    fn fresh_blank_nodes_avoid_existing_labels() {
        let mut g = Graph::new();
        g.insert(Term::blank("n0"), rdf::TYPE, iri(oa::TEXTUAL_BODY));
        let fresh = g.fresh_blank_node();
        assert_eq!(fresh, Term::blank("n1"));
    }

    #[test]
    fn remove_tree_cascades_into_orphaned_blank_nodes() {
        let mut g = Graph::new();
        let ann = iri("urn:ann");
        let body = Term::blank("body");
        g.insert(ann.clone(), rdf::TYPE, iri(oa::ANNOTATION));
        g.insert(ann.clone(), oa::HAS_BODY, body.clone());
        g.insert(body.clone(), rdf::TYPE, iri(oa::TEXTUAL_BODY));
        g.insert(iri("urn:keep"), rdf::TYPE, iri(prov::ENTITY));

        assert_eq!(g.remove_tree(&ann), 3);
        assert_eq!(g.len(), 1);
        assert!(!g.mentions(&body));
    }

    #[test]
    fn remove_resource_leaves_blank_objects() {
        let mut g = Graph::new();
        let result = iri("urn:result");
        let input = Term::blank("input");
        g.insert(result.clone(), prov::WAS_DERIVED_FROM, input.clone());
        g.insert(input.clone(), rdf::TYPE, iri(prov::ENTITY));

        assert_eq!(g.remove_resource(&result), 1);
        assert!(g.contains(&input, rdf::TYPE, &iri(prov::ENTITY)));
    }

    #[test]
    fn remove_tree_keeps_shared_blank_nodes() {
        let mut g = Graph::new();
        let shared = Term::blank("shared");
        g.insert(iri("urn:a"), prov::HAD_MEMBER, shared.clone());
        g.insert(iri("urn:b"), prov::HAD_MEMBER, shared.clone());
        g.insert(shared.clone(), rdf::TYPE, iri(prov::ENTITY));

        assert_eq!(g.remove_tree(&iri("urn:a")), 1);
        assert!(g.mentions(&shared));
    }

    #[test]
    fn rebinding_a_prefix_replaces_it() {
        let mut g = Graph::new();
        g.bind("ex", "urn:one:");
        g.bind("ex", "urn:two:");
        assert_eq!(g.prefixes(), &[("ex".to_owned(), "urn:two:".to_owned())]);
    }
}

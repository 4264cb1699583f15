//! Vocabulary model types.
//!
//! A [`Vocabulary`] is an ordered list of [`Namespace`] declarations. The
//! order matters: it is the order in which prefixes are bound when a graph is
//! serialized, and the first matching namespace wins when an IRI is
//! compacted.

/// A namespace bound to a Turtle prefix (e.g., `prov:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// The prefix used in Turtle output (e.g., `"prov"`).
    pub prefix: &'static str,
    /// The full namespace IRI (e.g., `"http://www.w3.org/ns/prov#"`).
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// What the steps use this namespace for.
    pub comment: &'static str,
}

impl Namespace {
    /// Returns the full IRI of `local` in this namespace.
    #[must_use]
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.iri, local)
    }

    /// Returns the local part of `iri` if it lies in this namespace.
    #[must_use]
    pub fn local_name<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.iri)
    }
}

/// The set of namespaces known to the workflow steps.
#[derive(Debug)]
pub struct Vocabulary {
    /// All namespaces, in binding order.
    pub namespaces: Vec<Namespace>,
}

impl Vocabulary {
    /// Looks up a namespace by its prefix. Returns `None` if not found.
    #[must_use]
    pub fn find_prefix(&self, prefix: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|ns| ns.prefix == prefix)
    }

    /// Splits `iri` into `(prefix, local)` using the longest matching
    /// namespace. Returns `None` if no namespace matches.
    #[must_use]
    pub fn compact<'a>(&self, iri: &'a str) -> Option<(&'static str, &'a str)> {
        self.namespaces
            .iter()
            .filter_map(|ns| ns.local_name(iri).map(|local| (ns, local)))
            .max_by_key(|(ns, _)| ns.iri.len())
            .map(|(ns, local)| (ns.prefix, local))
    }

    /// Expands a prefixed name such as `"qudt:unit"` to a full IRI.
    ///
    /// Returns `None` if the input has no colon or the prefix is unknown.
    #[must_use]
    pub fn expand(&self, curie: &str) -> Option<String> {
        let (prefix, local) = curie.split_once(':')?;
        self.find_prefix(prefix).map(|ns| ns.term(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EX: Namespace = Namespace {
        prefix: "ex",
        iri: "https://example.org/",
        label: "Example",
        comment: "",
    };

    const EX_DEEP: Namespace = Namespace {
        prefix: "deep",
        iri: "https://example.org/deep/",
        label: "Deep example",
        comment: "",
    };

    #[test]
    fn compact_prefers_longest_namespace() {
        let vocab = Vocabulary {
            namespaces: vec![EX, EX_DEEP],
        };
        assert_eq!(
            vocab.compact("https://example.org/deep/thing"),
            Some(("deep", "thing"))
        );
        assert_eq!(vocab.compact("https://example.org/thing"), Some(("ex", "thing")));
        assert_eq!(vocab.compact("urn:other"), None);
    }

    #[test]
    fn expand_known_prefix() {
        let vocab = Vocabulary {
            namespaces: vec![EX],
        };
        assert_eq!(
            vocab.expand("ex:value").as_deref(),
            Some("https://example.org/value")
        );
        assert_eq!(vocab.expand("nope:value"), None);
        assert_eq!(vocab.expand("novalue"), None);
    }
}

//! RDF terms and triples.
//!
//! Terms are owned values: a step parses its input once, mutates the graph in
//! place and serializes it, so there is nothing to gain from borrowing into
//! the parser's buffers.

use std::fmt;

use semflow_vocab::namespaces::xsd;

/// A literal value with its datatype and optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The lexical form, exactly as written.
    pub lexical: String,
    /// Full datatype IRI. Language-tagged literals carry `rdf:langString`.
    pub datatype: String,
    /// Language tag, if any.
    pub language: Option<String>,
}

/// An RDF term: IRI, blank node or literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node, identified by a graph-local label.
    BlankNode(String),
    /// A literal.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a blank node term.
    pub fn blank(label: impl Into<String>) -> Self {
        Term::BlankNode(label.into())
    }

    /// Creates a literal with an explicit datatype.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        })
    }

    /// Creates an `xsd:string` literal.
    pub fn string(value: impl Into<String>) -> Self {
        Term::typed(value, xsd::STRING)
    }

    /// Creates an `xsd:decimal` literal from a finite float.
    #[must_use]
    pub fn decimal(value: f64) -> Self {
        Term::typed(decimal_lexical(value), xsd::DECIMAL)
    }

    /// Creates an `xsd:integer` literal.
    #[must_use]
    pub fn integer(value: usize) -> Self {
        Term::typed(value.to_string(), xsd::INTEGER)
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns true for blank nodes.
    #[must_use]
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Returns the lexical form for literals and the IRI for IRIs.
    ///
    /// This is the "string value" a host would read out of an input entity,
    /// e.g. the metadata URI given either as `"…"` or as `<…>`.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(lit) => Some(&lit.lexical),
            Term::BlankNode(_) => None,
        }
    }

    /// Interprets the term as a finite real number.
    ///
    /// Only literals qualify; the lexical form is trimmed before parsing and
    /// any datatype is accepted. NaN and infinities are rejected since they
    /// have no `xsd:decimal` representation.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let lit = self.as_literal()?;
        parse_finite(&lit.lexical)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => f.write_str(iri),
            Term::BlankNode(label) => write!(f, "_:{label}"),
            Term::Literal(lit) => f.write_str(&lit.lexical),
        }
    }
}

/// A single (subject, predicate, object) statement.
///
/// Ordering is subject-major, which the Turtle serializer relies on to group
/// statements about the same subject.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject (IRI or blank node).
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Term,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// Parses a trimmed string as a finite `f64`.
#[must_use]
pub fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a finite float as an `xsd:decimal` lexical form.
///
/// `f64`'s `Display` never uses exponent notation, so only the missing
/// fractional part of whole numbers needs fixing up (`5` becomes `5.0`).
#[must_use]
pub fn decimal_lexical(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

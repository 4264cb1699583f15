//! Turtle 1.1 serializer for step output graphs.
//!
//! Produces a prefix header for the namespaces actually used, followed by one
//! statement block per subject: `rdf:type` first (written as `a`), then the
//! remaining predicates in IRI order, objects separated by `,`. Blank nodes
//! are relabeled `_:b0`, `_:b1`, … in order of first appearance.

use std::collections::{BTreeMap, BTreeSet};

use semflow_vocab::namespaces::{rdf, xsd};

use crate::graph::Graph;
use crate::term::{Literal, Term, Triple};

/// Serializes a graph to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let writer = Writer::new(graph);
    let mut out = String::with_capacity(64 * graph.len() + 512);

    // Prefix declarations
    for (prefix, namespace) in graph.prefixes() {
        if writer.used_prefixes.contains(prefix.as_str()) {
            out.push_str(&format!("@prefix {prefix}: <{}> .\n", escape_iri(namespace)));
        }
    }
    if !writer.used_prefixes.is_empty() {
        out.push('\n');
    }

    // Statement blocks, one per subject
    let mut by_subject: BTreeMap<&Term, Vec<&Triple>> = BTreeMap::new();
    for triple in graph.iter() {
        by_subject.entry(&triple.subject).or_default().push(triple);
    }

    for (subject, mut triples) in by_subject {
        triples.sort_by(|a, b| {
            (a.predicate != rdf::TYPE, &a.predicate, &a.object).cmp(&(
                b.predicate != rdf::TYPE,
                &b.predicate,
                &b.object,
            ))
        });

        out.push_str(&writer.term(subject));
        let mut current: Option<&str> = None;
        for triple in triples {
            if current == Some(triple.predicate.as_str()) {
                out.push_str(" ,\n        ");
            } else {
                if current.is_some() {
                    out.push_str(" ;\n    ");
                } else {
                    out.push(' ');
                }
                out.push_str(&writer.predicate(&triple.predicate));
                out.push(' ');
                current = Some(&triple.predicate);
            }
            out.push_str(&writer.term(&triple.object));
        }
        out.push_str(" .\n\n");
    }

    out
}

struct Writer<'g> {
    prefixes: &'g [(String, String)],
    blank_labels: BTreeMap<&'g str, String>,
    used_prefixes: BTreeSet<&'g str>,
}

impl<'g> Writer<'g> {
    fn new(graph: &'g Graph) -> Self {
        let mut writer = Writer {
            prefixes: graph.prefixes(),
            blank_labels: BTreeMap::new(),
            used_prefixes: BTreeSet::new(),
        };

        for triple in graph.iter() {
            writer.scan(&triple.subject);
            if triple.predicate != rdf::TYPE {
                writer.scan_iri(&triple.predicate);
            }
            writer.scan(&triple.object);
        }
        writer
    }

    fn scan(&mut self, term: &'g Term) {
        match term {
            Term::Iri(iri) => self.scan_iri(iri),
            Term::BlankNode(label) => {
                let next = self.blank_labels.len();
                self.blank_labels
                    .entry(label.as_str())
                    .or_insert_with(|| format!("b{next}"));
            }
            Term::Literal(lit) => {
                if lit.language.is_none()
                    && !is_bare_literal(lit)
                    && lit.datatype != xsd::STRING
                {
                    self.scan_iri(&lit.datatype);
                }
            }
        }
    }

    fn scan_iri(&mut self, iri: &str) {
        if let Some((prefix, _)) = self.compact(iri) {
            self.used_prefixes.insert(prefix);
        }
    }

    /// Longest bound namespace whose remainder is a safe local name.
    fn compact<'i>(&self, iri: &'i str) -> Option<(&'g str, &'i str)> {
        let prefixes: &'g [(String, String)] = self.prefixes;
        prefixes
            .iter()
            .filter_map(|(prefix, ns)| {
                iri.strip_prefix(ns.as_str())
                    .filter(|local| is_local_name(local))
                    .map(|local| (prefix.as_str(), ns.len(), local))
            })
            .max_by_key(|(_, len, _)| *len)
            .map(|(prefix, _, local)| (prefix, local))
    }

    fn iri(&self, iri: &str) -> String {
        match self.compact(iri) {
            Some((prefix, local)) => format!("{prefix}:{local}"),
            None => format!("<{}>", escape_iri(iri)),
        }
    }

    fn predicate(&self, iri: &str) -> String {
        if iri == rdf::TYPE {
            "a".to_owned()
        } else {
            self.iri(iri)
        }
    }

    fn term(&self, term: &Term) -> String {
        match term {
            Term::Iri(iri) => self.iri(iri),
            Term::BlankNode(label) => match self.blank_labels.get(label.as_str()) {
                Some(relabeled) => format!("_:{relabeled}"),
                None => format!("_:{label}"),
            },
            Term::Literal(lit) => self.literal(lit),
        }
    }

    fn literal(&self, lit: &Literal) -> String {
        if let Some(language) = &lit.language {
            return format!("{}@{language}", quote(&lit.lexical));
        }
        if is_bare_literal(lit) {
            return lit.lexical.clone();
        }
        if lit.datatype == xsd::STRING {
            return quote(&lit.lexical);
        }
        format!("{}^^{}", quote(&lit.lexical), self.iri(&lit.datatype))
    }
}

/// Integers, decimals and booleans whose lexical form Turtle accepts unquoted.
fn is_bare_literal(lit: &Literal) -> bool {
    let lex = lit.lexical.as_str();
    let unsigned = lex.strip_prefix(['+', '-']).unwrap_or(lex);
    match lit.datatype.as_str() {
        xsd::INTEGER => !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()),
        xsd::DECIMAL => match unsigned.split_once('.') {
            Some((int, frac)) => {
                !frac.is_empty()
                    && int.bytes().all(|b| b.is_ascii_digit())
                    && frac.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        },
        xsd::BOOLEAN => lex == "true" || lex == "false",
        _ => false,
    }
}

/// A conservative subset of Turtle's `PN_LOCAL`: ASCII letters, digits,
/// `_` and `-`, not starting with `-`.
fn is_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escapes characters that may not appear raw inside `<…>`.
fn escape_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c if c <= ' ' => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

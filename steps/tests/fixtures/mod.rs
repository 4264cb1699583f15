//! Input graphs and helpers shared by the step integration tests.
//!
//! Every fixture uses relative IRIs (`<#…>`), which resolve against the
//! default base IRI `https://example.org/workflow/run`.

#![allow(dead_code)]

mod average;
mod csvw;
mod sum;

use std::cell::RefCell;
use std::collections::BTreeMap;

use semflow_steps::annotation::error_reports;
use semflow_steps::config::DEFAULT_BASE_IRI;
use semflow_steps::csvw::{FetchError, Fetcher};
use semflow_steps::parser::parse_turtle;
use semflow_steps::{ErrorCode, Graph, Term};
use url::Url;

pub use average::*;
pub use csvw::*;
pub use sum::*;

/// The IRI a relative `<#local>` reference resolves to.
pub fn iri(local: &str) -> Term {
    Term::iri(format!("{DEFAULT_BASE_IRI}#{local}"))
}

/// Parses a step's output graph.
pub fn parse(turtle: &str) -> Graph {
    parse_turtle(turtle, DEFAULT_BASE_IRI).expect("step output must be valid Turtle")
}

/// The error codes of all error annotations in `graph`.
pub fn error_codes(graph: &Graph) -> Vec<ErrorCode> {
    error_reports(graph)
        .into_iter()
        .filter_map(|report| report.code)
        .collect()
}

/// A numeric literal object as `f64`.
pub fn number(graph: &Graph, subject: &Term, predicate: &str) -> f64 {
    graph
        .value(subject, predicate)
        .and_then(Term::as_f64)
        .unwrap_or_else(|| panic!("{subject} has no numeric {predicate}"))
}

/// Serves documents from memory and records every requested URL.
#[derive(Debug, Default)]
pub struct MapFetcher {
    documents: BTreeMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.documents.insert(url.to_owned(), body.to_owned());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetcher for MapFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        self.documents
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

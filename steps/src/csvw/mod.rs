//! Loading one column of a CSVW-described table into the graph.
//!
//! The activity takes two inputs via `bfo:is_input_of`, told apart by the
//! label of the plan variable each one corresponds to: the metadata document
//! URI (label mentions "metadata" or "uri") and the column name (label
//! mentions "column"). The column becomes a `prov:Collection` with one member
//! per CSV row.

pub mod fetch;
pub mod metadata;
pub mod table;
pub mod units;

use semflow_vocab::namespaces::{bfo, csvw, ex, pplan, prov, qudt, rdf, rdfs};
use url::Url;

use crate::config::StepConfig;
use crate::context::StepContext;
use crate::error::StepError;
use crate::graph::Graph;
use crate::naming;
use crate::step::{self, resolve_activity, Scope, Step};
use crate::term::Term;

pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use metadata::{load_column, LoadedColumn};
pub use table::Cell;
pub use units::UnitTable;

/// Errors raised while loading a CSVW column.
#[derive(Debug, thiserror::Error)]
pub enum CsvwError {
    /// A document could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The metadata document is not JSON.
    #[error("invalid JSON in {url}: {source}")]
    Json {
        /// The metadata URL.
        url: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The table description has an unexpected shape.
    #[error("invalid table description: {0}")]
    Metadata(serde_json::Error),

    /// `tables` is an empty array.
    #[error("No tables found in CSVW metadata")]
    NoTables,

    /// The table has no `url`.
    #[error("No CSV URL found in metadata")]
    NoTableUrl,

    /// A URL could not be parsed or resolved.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        /// The offending reference.
        url: String,
        /// Why it was rejected.
        source: url::ParseError,
    },

    /// No column has the requested name or title.
    #[error("Column '{0}' not found in metadata")]
    ColumnNotFound(String),
}

/// The CSVW column loader step.
#[derive(Debug, Clone, Default)]
pub struct CsvwColumn<F = HttpFetcher> {
    fetcher: F,
}

impl CsvwColumn<HttpFetcher> {
    /// A loader fetching over HTTP and from `file:` URLs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Fetcher> CsvwColumn<F> {
    /// A loader using `fetcher` for all documents.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }
}

/// The two string inputs of the loader.
#[derive(Debug, Default, PartialEq, Eq)]
struct Inputs {
    metadata_uri: Option<String>,
    column_name: Option<String>,
}

impl Inputs {
    /// Assigns roles by variable label; the first input (term order) for each
    /// role wins.
    fn read(graph: &Graph, inputs: &[Term]) -> Self {
        let mut found = Inputs::default();
        for input in inputs {
            let label = graph
                .value(input, pplan::CORRESPONDS_TO_VARIABLE)
                .and_then(|var| graph.value(var, rdfs::LABEL))
                .and_then(Term::text)
                .map(str::to_lowercase)
                .unwrap_or_default();
            let Some(value) = graph.value(input, rdf::VALUE).and_then(Term::text) else {
                continue;
            };

            let slot = if label.contains("metadata") || label.contains("uri") {
                &mut found.metadata_uri
            } else if label.contains("column") {
                &mut found.column_name
            } else {
                continue;
            };
            if slot.is_none() {
                tracing::debug!(%input, role = %label, value, "assigned input");
                *slot = Some(value.to_owned());
            }
        }
        found
    }
}

impl<F: Fetcher> Step for CsvwColumn<F> {
    fn name(&self) -> &'static str {
        "csvw-column"
    }

    fn apply(
        &self,
        graph: &mut Graph,
        context: &StepContext,
        config: &StepConfig,
        scope: &mut Scope,
    ) -> Result<Term, StepError> {
        let activity = resolve_activity(graph, context, config, scope)?;

        let inputs: Vec<Term> = graph
            .subjects(bfo::IS_INPUT_OF, &activity)
            .cloned()
            .collect();
        scope.set_hash(naming::execution_hash_of(graph, &activity, &inputs));

        if inputs.len() < 2 {
            return Err(StepError::InputTooFew {
                expected: "2 inputs (metadata URI, column name)",
                found: inputs.len(),
            });
        }

        let (metadata_uri, column_name) = match Inputs::read(graph, &inputs) {
            Inputs {
                metadata_uri: Some(uri),
                column_name: Some(name),
            } => (uri, name),
            _ => return Err(StepError::MissingInput("metadata URI or column name")),
        };

        let metadata_url =
            Url::parse(&config.resolve(&metadata_uri)).map_err(|source| CsvwError::InvalidUrl {
                url: metadata_uri.clone(),
                source,
            })?;
        let units = UnitTable::with_overrides(&config.units);
        let column = load_column(&self.fetcher, &metadata_url, &column_name, &units)?;

        let collection = naming::mint(config, "columnData", scope.hash());
        let previous: Vec<Term> = graph
            .objects(&collection, prov::HAD_MEMBER)
            .cloned()
            .collect();
        let mut removed = graph.remove_resource(&collection);
        for member in &previous {
            removed += graph.remove_resource(member);
        }
        if removed > 0 {
            tracing::info!(%collection, removed, "removed previous column data");
        }

        graph.insert(collection.clone(), rdf::TYPE, Term::iri(prov::ENTITY));
        graph.insert(collection.clone(), rdf::TYPE, Term::iri(prov::COLLECTION));
        graph.insert(
            collection.clone(),
            rdfs::LABEL,
            Term::string(format!("Column data: {}", column.title)),
        );
        graph.insert(collection.clone(), prov::WAS_GENERATED_BY, activity);
        for input in inputs {
            graph.insert(collection.clone(), prov::WAS_DERIVED_FROM, input);
        }

        for (idx, cell) in column.cells.iter().enumerate() {
            let member = naming::mint(config, &format!("value{idx}"), scope.hash());
            graph.insert(member.clone(), rdf::TYPE, Term::iri(prov::ENTITY));
            match (cell, &column.unit) {
                (Cell::Number(value), Some(unit)) => {
                    graph.insert(member.clone(), rdf::TYPE, Term::iri(qudt::QUANTITY_VALUE));
                    graph.insert(member.clone(), qudt::NUMERIC_VALUE, Term::decimal(*value));
                    graph.insert(member.clone(), qudt::UNIT, Term::iri(unit.as_str()));
                }
                (Cell::Number(value), None) => {
                    graph.insert(member.clone(), rdf::VALUE, Term::decimal(*value));
                }
                (Cell::Text(text), _) => {
                    graph.insert(member.clone(), rdf::VALUE, Term::string(text.as_str()));
                }
            }
            graph.insert(collection.clone(), prov::HAD_MEMBER, member);
        }

        if let Some(unit) = &column.unit {
            graph.insert(collection.clone(), qudt::UNIT, Term::iri(unit.as_str()));
        }
        graph.insert(collection.clone(), ex::SOURCE_COLUMN, Term::string(column_name));
        graph.insert(
            collection.clone(),
            ex::COLUMN_TITLE,
            Term::string(column.title.as_str()),
        );
        graph.insert(
            collection.clone(),
            ex::VALUE_COUNT,
            Term::integer(column.cells.len()),
        );
        graph.insert(
            collection.clone(),
            csvw::URL,
            Term::iri(column.csv_url.as_str()),
        );

        tracing::info!(%collection, rows = column.cells.len(), "loaded column");
        Ok(collection)
    }
}

/// Runs the column loader with an [`HttpFetcher`].
#[must_use]
pub fn run(input: &str, context: &StepContext, config: &StepConfig) -> String {
    step::run(&CsvwColumn::<HttpFetcher>::new(), input, context, config)
}

/// Runs the column loader with a custom fetcher.
#[must_use]
pub fn run_with<F: Fetcher>(
    fetcher: F,
    input: &str,
    context: &StepContext,
    config: &StepConfig,
) -> String {
    step::run(&CsvwColumn::with_fetcher(fetcher), input, context, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(graph: &mut Graph, name: &str, label: &str, value: Term) -> Term {
        let input = Term::iri(format!("urn:input:{name}"));
        let var = Term::iri(format!("urn:var:{name}"));
        graph.insert(input.clone(), pplan::CORRESPONDS_TO_VARIABLE, var.clone());
        graph.insert(var, rdfs::LABEL, Term::string(label));
        graph.insert(input.clone(), rdf::VALUE, value);
        input
    }

    #[test]
    fn roles_from_variable_labels() {
        let mut g = Graph::new();
        let a = input(&mut g, "a", "CSVW Metadata", Term::iri("http://x/meta.json"));
        let b = input(&mut g, "b", "Column Name", Term::string("len"));
        let roles = Inputs::read(&g, &[a, b]);
        assert_eq!(roles.metadata_uri.as_deref(), Some("http://x/meta.json"));
        assert_eq!(roles.column_name.as_deref(), Some("len"));
    }

    #[test]
    fn unlabelled_inputs_have_no_role() {
        let mut g = Graph::new();
        let a = input(&mut g, "a", "threshold", Term::string("3"));
        let b = input(&mut g, "b", "Source URI", Term::string("meta.json"));
        let roles = Inputs::read(&g, &[a, b]);
        assert_eq!(roles.metadata_uri.as_deref(), Some("meta.json"));
        assert_eq!(roles.column_name, None);
    }
}

//! Arithmetic mean of a collection's members.
//!
//! The input is a `prov:Collection` the activity `prov:used` that is bound to
//! a plan variable (`p-plan:correspondsToVariable`). Each member contributes
//! its `qudt:numericValue`, or its `rdf:value` when it is a plain entity.

use semflow_vocab::namespaces::{ex, pplan, prov, qudt, rdf, rdfs};

use crate::config::StepConfig;
use crate::context::StepContext;
use crate::error::StepError;
use crate::graph::Graph;
use crate::naming;
use crate::numeric::{common_unit, read_quantity, Quantity, Summary, ValueSource};
use crate::step::{self, resolve_activity, Scope, Step};
use crate::term::Term;

/// The average step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Average;

impl Step for Average {
    fn name(&self) -> &'static str {
        "average"
    }

    fn apply(
        &self,
        graph: &mut Graph,
        context: &StepContext,
        config: &StepConfig,
        scope: &mut Scope,
    ) -> Result<Term, StepError> {
        let activity = resolve_activity(graph, context, config, scope)?;

        let mut inputs: Vec<Term> = graph
            .objects(&activity, prov::USED)
            .filter(|e| {
                graph.has_type(e, prov::COLLECTION)
                    && graph
                        .triples_matching(Some(*e), Some(pplan::CORRESPONDS_TO_VARIABLE), None)
                        .next()
                        .is_some()
            })
            .cloned()
            .collect();
        inputs.sort();
        scope.set_hash(naming::execution_hash_of(graph, &activity, &inputs));

        let collection = match inputs.as_slice() {
            [] => {
                return Err(StepError::InputTooFew {
                    expected: "1 PROV Collection as input",
                    found: 0,
                })
            }
            [only] => only.clone(),
            [first, rest @ ..] => {
                tracing::warn!(
                    collection = %first,
                    ignored = rest.len(),
                    "several input collections; using the first"
                );
                first.clone()
            }
        };

        let members: Vec<Term> = graph
            .objects(&collection, prov::HAD_MEMBER)
            .cloned()
            .collect();
        tracing::debug!(%collection, members = members.len(), "found collection members");
        if members.is_empty() {
            return Err(StepError::EmptyCollection(collection));
        }

        let quantities = members
            .iter()
            .map(|m| read_quantity(graph, m, ValueSource::NumericValueOrValue, "Member"))
            .collect::<Result<Vec<Quantity>, _>>()?;
        let unit = match common_unit(&quantities, "Collection members")? {
            Some(unit) => Some(unit),
            None => graph.value(&collection, qudt::UNIT).cloned(),
        };

        let values: Vec<f64> = quantities.iter().map(|q| q.value).collect();
        let summary = Summary::of(&values)
            .filter(|s| s.mean.is_finite())
            .ok_or_else(|| StepError::Calculation {
                operation: "mean",
                reason: "result is not a finite number".to_owned(),
            })?;

        let result = naming::mint(config, "averageResult", scope.hash());
        let removed = graph.remove_resource(&result);
        if removed > 0 {
            tracing::info!(%result, removed, "removed previous result");
        }

        graph.insert(result.clone(), rdf::TYPE, Term::iri(qudt::QUANTITY_VALUE));
        graph.insert(result.clone(), rdf::TYPE, Term::iri(prov::ENTITY));
        graph.insert(result.clone(), qudt::NUMERIC_VALUE, Term::decimal(summary.mean));
        if let Some(unit) = unit {
            graph.insert(result.clone(), qudt::UNIT, unit);
        }
        graph.insert(result.clone(), prov::WAS_GENERATED_BY, activity);
        graph.insert(result.clone(), prov::WAS_DERIVED_FROM, collection);

        graph.insert(
            result.clone(),
            rdfs::LABEL,
            Term::string(format!("Average of {} values", summary.count)),
        );
        graph.insert(result.clone(), ex::VALUE_COUNT, Term::integer(summary.count));
        graph.insert(
            result.clone(),
            ex::CALCULATION_METHOD,
            Term::string("arithmetic mean"),
        );
        graph.insert(result.clone(), ex::MIN_VALUE, Term::decimal(summary.min));
        graph.insert(result.clone(), ex::MAX_VALUE, Term::decimal(summary.max));

        tracing::info!(%result, mean = summary.mean, count = summary.count, "computed average");
        Ok(result)
    }
}

/// Runs the average step over a Turtle graph and returns the updated graph.
#[must_use]
pub fn run(input: &str, context: &StepContext, config: &StepConfig) -> String {
    step::run(&Average, input, context, config)
}

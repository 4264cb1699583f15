//! Sum of the quantity values fed into an activity.
//!
//! Inputs are the `qudt:QuantityValue` entities linked to the activity with
//! `bfo:is_input_of`. The result is a new quantity value carrying their sum in
//! the shared unit, or the configured default unit when none of the inputs
//! has one.

use semflow_vocab::namespaces::{bfo, prov, qudt, rdf};

use crate::config::StepConfig;
use crate::context::StepContext;
use crate::error::StepError;
use crate::graph::Graph;
use crate::naming;
use crate::numeric::{common_unit, read_quantity, Quantity, ValueSource};
use crate::step::{self, resolve_activity, Scope, Step};
use crate::term::Term;

/// The sum step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl Step for Sum {
    fn name(&self) -> &'static str {
        "sum"
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
            .filter(|qv| graph.has_type(qv, qudt::QUANTITY_VALUE))
            .cloned()
            .collect();
        scope.set_hash(naming::execution_hash_of(graph, &activity, &inputs));
        tracing::debug!(inputs = inputs.len(), "found quantity value inputs");

        if inputs.len() < 2 {
            return Err(StepError::InputTooFew {
                expected: "at least two qudt:QuantityValue inputs linked via bfo:is_input_of",
                found: inputs.len(),
            });
        }

        let quantities = inputs
            .iter()
            .map(|qv| read_quantity(graph, qv, ValueSource::NumericValue, "Input"))
            .collect::<Result<Vec<Quantity>, _>>()?;
        let unit = common_unit(&quantities, "Inputs")?
            .unwrap_or_else(|| Term::iri(config.default_unit.as_str()));

        let total: f64 = quantities.iter().map(|q| q.value).sum();
        if !total.is_finite() {
            return Err(StepError::Calculation {
                operation: "sum",
                reason: "result is not a finite number".to_owned(),
            });
        }

        let result = naming::mint(config, "sumResult", scope.hash());
        let removed = graph.remove_resource(&result);
        if removed > 0 {
            tracing::info!(%result, removed, "removed previous result");
        }

        graph.insert(result.clone(), rdf::TYPE, Term::iri(qudt::QUANTITY_VALUE));
        graph.insert(result.clone(), rdf::TYPE, Term::iri(prov::ENTITY));
        graph.insert(result.clone(), qudt::NUMERIC_VALUE, Term::decimal(total));
        graph.insert(result.clone(), qudt::UNIT, unit);
        graph.insert(result.clone(), prov::WAS_GENERATED_BY, activity);
        for input in inputs {
            graph.insert(result.clone(), prov::WAS_DERIVED_FROM, input);
        }

        tracing::info!(%result, total, "computed sum");
        Ok(result)
    }
}

/// Runs the sum step over a Turtle graph and returns the updated graph.
#[must_use]
pub fn run(input: &str, context: &StepContext, config: &StepConfig) -> String {
    step::run(&Sum, input, context, config)
}

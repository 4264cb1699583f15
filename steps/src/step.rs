//! The shared step driver.
//!
//! Every step follows the same shape: parse, locate inputs, validate,
//! compute, write the result back, serialize. [`execute`] owns everything
//! around the middle part, so a [`Step`] only implements
//! [`Step::apply`] and never has to care about parse failures, annotations or
//! provenance links to the host's agent and plan.

use semflow_vocab::namespaces::{prov, rdf};
use semflow_vocab::Vocabulary;
use sophia_api::prelude::Iri;

use crate::annotation::annotate_error;
use crate::config::StepConfig;
use crate::context::StepContext;
use crate::error::{ErrorCode, StepError};
use crate::graph::Graph;
use crate::naming::{self, UNKNOWN_HASH};
use crate::parser::parse_turtle;
use crate::serializer::turtle::to_turtle;
use crate::term::Term;

/// A single workflow step.
pub trait Step {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Runs the step against a parsed graph and returns the result entity.
    ///
    /// Implementations record the activity and execution hash in `scope` as
    /// soon as they are known, so a later failure is annotated against them.
    ///
    /// # Errors
    ///
    /// Returns the [`StepError`] to be written as an error annotation.
    fn apply(
        &self,
        graph: &mut Graph,
        context: &StepContext,
        config: &StepConfig,
        scope: &mut Scope,
    ) -> Result<Term, StepError>;
}

/// What a step has established about its execution so far.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    activity: Option<Term>,
    hash: Option<String>,
}

impl Scope {
    /// Records the activity being executed.
    pub fn set_activity(&mut self, activity: Term) {
        self.activity = Some(activity);
    }

    /// Records the execution hash.
    pub fn set_hash(&mut self, hash: impl Into<String>) {
        self.hash = Some(hash.into());
    }

    /// The activity, once known.
    #[must_use]
    pub fn activity(&self) -> Option<&Term> {
        self.activity.as_ref()
    }

    /// The execution hash, or [`UNKNOWN_HASH`] before it is known.
    #[must_use]
    pub fn hash(&self) -> &str {
        self.hash.as_deref().unwrap_or(UNKNOWN_HASH)
    }
}

/// The output of one step invocation.
#[derive(Debug)]
pub struct Execution {
    /// The output graph as Turtle.
    pub turtle: String,
    /// The result entity, or the error that was annotated.
    pub outcome: Result<Term, StepError>,
}

impl Execution {
    /// Returns true if the step produced a result.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The result entity, if any.
    #[must_use]
    pub fn result(&self) -> Option<&Term> {
        self.outcome.as_ref().ok()
    }

    /// The code of the annotated error, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.outcome.as_ref().err().map(StepError::code)
    }
}

/// Runs `step` over `input` and returns the output graph and outcome.
///
/// Never fails: a graph that cannot be parsed yields a fresh graph holding
/// only a `PARSE_ERROR` annotation, and any step failure is annotated in the
/// input graph.
pub fn execute<S: Step + ?Sized>(
    step: &S,
    input: &str,
    context: &StepContext,
    config: &StepConfig,
) -> Execution {
    let span = tracing::info_span!("step", step = step.name());
    let _enter = span.enter();

    let mut graph = match parse_turtle(input, &config.base_iri) {
        Ok(graph) => graph,
        Err(err) => {
            tracing::warn!(error = %err, "input graph could not be parsed");
            let err = StepError::from(err);
            let mut graph = Graph::new();
            bind_prefixes(&mut graph, config);
            let activity = context
                .activity
                .as_deref()
                .and_then(|a| context_iri(config, "activity", a).ok());
            let annotation = naming::mint(config, "errorAnn", UNKNOWN_HASH);
            annotate_error(&mut graph, &annotation, activity.as_ref(), &err);
            return Execution {
                turtle: to_turtle(&graph),
                outcome: Err(err),
            };
        }
    };
    tracing::debug!(triples = graph.len(), "parsed input graph");
    bind_prefixes(&mut graph, config);

    let mut scope = Scope::default();
    let outcome = Association::resolve(context, config).and_then(|association| {
        step.apply(&mut graph, context, config, &mut scope)
            .map(|result| (result, association))
    });
    let annotation = naming::mint(config, "errorAnn", scope.hash());

    let outcome = match outcome {
        Ok((result, association)) => {
            let removed = graph.remove_tree(&annotation);
            if removed > 0 {
                tracing::info!(%annotation, removed, "removed stale error annotation");
            }
            if let Some(activity) = scope.activity() {
                association.link(&mut graph, activity, config, scope.hash());
            }
            tracing::info!(%result, "step succeeded");
            Ok(result)
        }
        Err(err) => {
            tracing::warn!(code = %err.code(), error = %err, "step failed");
            annotate_error(&mut graph, &annotation, scope.activity(), &err);
            Err(err)
        }
    };

    Execution {
        turtle: to_turtle(&graph),
        outcome,
    }
}

/// Runs `step` and returns only the output Turtle.
#[must_use]
pub fn run<S: Step + ?Sized>(
    step: &S,
    input: &str,
    context: &StepContext,
    config: &StepConfig,
) -> String {
    execute(step, input, context, config).turtle
}

/// Resolves a host-supplied IRI reference against the base IRI.
///
/// # Errors
///
/// [`StepError::InvalidContext`] if the result is not an absolute IRI.
pub fn context_iri(
    config: &StepConfig,
    role: &'static str,
    reference: &str,
) -> Result<Term, StepError> {
    let resolved = config.resolve(reference);
    if Iri::new(resolved.as_str()).is_err() {
        return Err(StepError::InvalidContext {
            role,
            iri: reference.to_owned(),
        });
    }
    Ok(Term::iri(resolved))
}

/// Determines the activity: the host's, or the first `prov:Activity` IRI in
/// the graph. Records it in `scope`.
///
/// # Errors
///
/// [`StepError::NoActivity`] if neither is available.
pub fn resolve_activity(
    graph: &Graph,
    context: &StepContext,
    config: &StepConfig,
    scope: &mut Scope,
) -> Result<Term, StepError> {
    let activity = match &context.activity {
        Some(iri) => context_iri(config, "activity", iri)?,
        None => {
            let mut found = graph
                .instances_of(prov::ACTIVITY)
                .filter(|t| t.as_iri().is_some());
            let first = found.next().cloned().ok_or(StepError::NoActivity)?;
            let others = found.count();
            if others > 0 {
                tracing::warn!(
                    activity = %first,
                    others,
                    "several activities in graph; using the first"
                );
            }
            first
        }
    };
    tracing::debug!(%activity, "resolved activity");
    scope.set_activity(activity.clone());
    Ok(activity)
}

/// Binds the standard prefixes and the empty prefix for minted IRIs.
pub fn bind_prefixes(graph: &mut Graph, config: &StepConfig) {
    graph.bind_vocabulary(Vocabulary::standard());
    graph.bind("", format!("{}#", config.document_iri()));
}

/// The host's agent and plan for the `prov:qualifiedAssociation`.
#[derive(Debug, Default)]
struct Association {
    agent: Option<Term>,
    plan: Option<Term>,
}

impl Association {
    fn resolve(context: &StepContext, config: &StepConfig) -> Result<Self, StepError> {
        Ok(Association {
            agent: context
                .agent
                .as_deref()
                .map(|a| context_iri(config, "agent", a))
                .transpose()?,
            plan: context
                .plan
                .as_deref()
                .map(|p| context_iri(config, "plan", p))
                .transpose()?,
        })
    }

    fn link(self, graph: &mut Graph, activity: &Term, config: &StepConfig, hash: &str) {
        if self.agent.is_none() && self.plan.is_none() {
            return;
        }

        let association = naming::mint(config, "association", hash);
        graph.remove_resource(&association);
        graph.insert(activity.clone(), prov::QUALIFIED_ASSOCIATION, association.clone());
        graph.insert(association.clone(), rdf::TYPE, Term::iri(prov::ASSOCIATION));

        if let Some(agent) = self.agent {
            graph.insert(agent.clone(), rdf::TYPE, Term::iri(prov::AGENT));
            graph.insert(activity.clone(), prov::WAS_ASSOCIATED_WITH, agent.clone());
            graph.insert(association.clone(), prov::AGENT_PROP, agent);
        }
        if let Some(plan) = self.plan {
            graph.insert(plan.clone(), rdf::TYPE, Term::iri(prov::PLAN));
            graph.insert(association, prov::HAD_PLAN, plan);
        }
    }
}

//! Error annotations.
//!
//! A failed step reports through the graph instead of failing the call:
//!
//! ```text
//! <base#errorAnn_…> a oa:Annotation ;
//!     oa:motivatedBy ex:errorReporting ;
//!     oa:hasTarget <activity> ;          # when known
//!     prov:wasGeneratedBy <activity> ;   # when known
//!     oa:hasBody [ a oa:TextualBody ;
//!                  rdf:value "message" ;
//!                  ex:errorCode "CODE" ] .
//! ```

use semflow_vocab::namespaces::{ex, oa, prov, rdf};

use crate::error::{ErrorCode, StepError};
use crate::graph::Graph;
use crate::term::Term;

/// Writes an error annotation for `error` at `annotation`.
///
/// Any triples already stored about `annotation` (from an earlier failed run
/// with the same execution hash) are removed first, together with their
/// orphaned body.
pub fn annotate_error(
    graph: &mut Graph,
    annotation: &Term,
    activity: Option<&Term>,
    error: &StepError,
) {
    let removed = graph.remove_tree(annotation);
    if removed > 0 {
        tracing::info!(%annotation, removed, "removed previous error annotation");
    }
    add_annotation(
        graph,
        annotation,
        activity,
        &error.to_string(),
        Some(error.code()),
    );
}

/// Writes an annotation with a free-form message and optional code.
pub fn add_annotation(
    graph: &mut Graph,
    annotation: &Term,
    activity: Option<&Term>,
    message: &str,
    code: Option<ErrorCode>,
) {
    let body = graph.fresh_blank_node();

    graph.insert(annotation.clone(), rdf::TYPE, Term::iri(oa::ANNOTATION));
    graph.insert(
        annotation.clone(),
        oa::MOTIVATED_BY,
        Term::iri(ex::ERROR_REPORTING),
    );
    graph.insert(annotation.clone(), oa::HAS_BODY, body.clone());

    if let Some(activity) = activity {
        graph.insert(annotation.clone(), oa::HAS_TARGET, activity.clone());
        graph.insert(annotation.clone(), prov::WAS_GENERATED_BY, activity.clone());
    }

    graph.insert(body.clone(), rdf::TYPE, Term::iri(oa::TEXTUAL_BODY));
    graph.insert(body.clone(), rdf::VALUE, Term::string(message));
    if let Some(code) = code {
        graph.insert(body, ex::ERROR_CODE, Term::string(code.as_str()));
    }
}

/// A single error annotation as read back from a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// The annotation node.
    pub annotation: Term,
    /// The targeted activity, if any.
    pub target: Option<Term>,
    /// The human-readable message.
    pub message: String,
    /// The machine-readable code, if present and known.
    pub code: Option<ErrorCode>,
}

/// Collects all error-reporting annotations in `graph`.
#[must_use]
pub fn error_reports(graph: &Graph) -> Vec<ErrorReport> {
    let reporting = Term::iri(ex::ERROR_REPORTING);
    graph
        .instances_of(oa::ANNOTATION)
        .filter(|ann| graph.contains(ann, oa::MOTIVATED_BY, &reporting))
        .map(|ann| {
            let body = graph.value(ann, oa::HAS_BODY);
            let text = |predicate: &str| {
                body.and_then(|b| graph.value(b, predicate))
                    .and_then(Term::text)
                    .map(str::to_owned)
            };
            ErrorReport {
                annotation: ann.clone(),
                target: graph.value(ann, oa::HAS_TARGET).cloned(),
                message: text(rdf::VALUE).unwrap_or_default(),
                code: text(ex::ERROR_CODE).and_then(|c| ErrorCode::from_code(&c)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_shape() {
        let mut g = Graph::new();
        let ann = Term::iri("urn:ann");
        let act = Term::iri("urn:act");
        annotate_error(&mut g, &ann, Some(&act), &StepError::NoActivity);

        assert!(g.has_type(&ann, oa::ANNOTATION));
        assert!(g.contains(&ann, oa::HAS_TARGET, &act));
        assert!(g.contains(&ann, prov::WAS_GENERATED_BY, &act));
        let body = g.value(&ann, oa::HAS_BODY).expect("body").clone();
        assert!(body.is_blank_node());
        assert!(g.has_type(&body, oa::TEXTUAL_BODY));
        assert!(g.contains(&body, ex::ERROR_CODE, &Term::string("NO_ACTIVITY")));
        assert_eq!(g.len(), 8);
    }

    #[test]
    fn no_target_without_activity() {
        let mut g = Graph::new();
        let ann = Term::iri("urn:ann");
        annotate_error(&mut g, &ann, None, &StepError::NoActivity);
        assert_eq!(g.value(&ann, oa::HAS_TARGET), None);
        assert_eq!(g.value(&ann, prov::WAS_GENERATED_BY), None);
    }

    #[test]
    fn re_annotating_replaces_previous_report() {
        let mut g = Graph::new();
        let ann = Term::iri("urn:ann");
        annotate_error(&mut g, &ann, None, &StepError::NoActivity);
        annotate_error(&mut g, &ann, None, &StepError::MissingInput("column name"));

        let reports = error_reports(&g);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].code, Some(ErrorCode::MissingInput));
        assert_eq!(reports[0].message, "Could not determine column name from inputs");
        assert_eq!(g.len(), 6);
    }

    #[test]
    fn free_form_annotation_without_code() {
        let mut g = Graph::new();
        let ann = Term::iri("urn:ann");
        add_annotation(&mut g, &ann, None, "just a note", None);
        let reports = error_reports(&g);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].code, None);
        assert_eq!(reports[0].message, "just a note");
    }
}

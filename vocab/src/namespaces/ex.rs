//! `ex:` namespace: project vocabulary for error codes and result metadata.

use crate::model::Namespace;

/// Namespace IRI.
pub const NS: &str = "https://github.com/ThHanke/PyodideSemanticWorkflow/";

/// `ex:errorReporting`, the motivation of error annotations.
pub const ERROR_REPORTING: &str =
    "https://github.com/ThHanke/PyodideSemanticWorkflow/errorReporting";
/// `ex:errorCode`, the machine-readable code on an annotation body.
pub const ERROR_CODE: &str = "https://github.com/ThHanke/PyodideSemanticWorkflow/errorCode";
/// `ex:valueCount`.
pub const VALUE_COUNT: &str = "https://github.com/ThHanke/PyodideSemanticWorkflow/valueCount";
/// `ex:calculationMethod`.
pub const CALCULATION_METHOD: &str =
    "https://github.com/ThHanke/PyodideSemanticWorkflow/calculationMethod";
/// `ex:minValue`.
pub const MIN_VALUE: &str = "https://github.com/ThHanke/PyodideSemanticWorkflow/minValue";
/// `ex:maxValue`.
pub const MAX_VALUE: &str = "https://github.com/ThHanke/PyodideSemanticWorkflow/maxValue";
/// `ex:sourceColumn`.
pub const SOURCE_COLUMN: &str = "https://github.com/ThHanke/PyodideSemanticWorkflow/sourceColumn";
/// `ex:columnTitle`.
pub const COLUMN_TITLE: &str = "https://github.com/ThHanke/PyodideSemanticWorkflow/columnTitle";

/// Returns the `ex:` namespace declaration.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "ex",
        iri: NS,
        label: "PyodideSemanticWorkflow",
        comment: "Error codes and step result metadata.",
    }
}

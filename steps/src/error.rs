//! Step error types and their stable machine codes.
//!
//! Every [`StepError`] ends up as an error annotation in the output graph;
//! the host tells failures apart by the `ex:errorCode` string from
//! [`ErrorCode::as_str`], and shows the `Display` text to the user.

use std::fmt;

use crate::csvw::CsvwError;
use crate::parser::ParseError;
use crate::term::Term;

/// Machine-readable error code carried by `ex:errorCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The input graph could not be parsed.
    ParseError,
    /// No activity was supplied and none is typed `prov:Activity`.
    NoActivity,
    /// A host-supplied activity, agent or plan is not an absolute IRI.
    InvalidContext,
    /// Fewer qualifying inputs than the step needs.
    InputTooFew,
    /// Inputs were found but their roles could not be determined.
    MissingInput,
    /// An input carries no numeric value property.
    MissingNumericValue,
    /// An input's value is not a finite number.
    NonNumericValue,
    /// Inputs carry more than one distinct unit.
    UnitMismatch,
    /// The input collection has no members.
    EmptyCollection,
    /// The computation produced no representable result.
    CalculationError,
    /// Fetching or interpreting CSVW metadata or data failed.
    CsvwLoadError,
}

impl ErrorCode {
    /// All codes, in declaration order.
    pub const ALL: [ErrorCode; 11] = [
        ErrorCode::ParseError,
        ErrorCode::NoActivity,
        ErrorCode::InvalidContext,
        ErrorCode::InputTooFew,
        ErrorCode::MissingInput,
        ErrorCode::MissingNumericValue,
        ErrorCode::NonNumericValue,
        ErrorCode::UnitMismatch,
        ErrorCode::EmptyCollection,
        ErrorCode::CalculationError,
        ErrorCode::CsvwLoadError,
    ];

    /// The string written to `ex:errorCode`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::NoActivity => "NO_ACTIVITY",
            ErrorCode::InvalidContext => "INVALID_CONTEXT",
            ErrorCode::InputTooFew => "INPUT_TOO_FEW",
            ErrorCode::MissingInput => "MISSING_INPUT",
            ErrorCode::MissingNumericValue => "MISSING_NUMERIC_VALUE",
            ErrorCode::NonNumericValue => "NON_NUMERIC_VALUE",
            ErrorCode::UnitMismatch => "UNIT_MISMATCH",
            ErrorCode::EmptyCollection => "EMPTY_COLLECTION",
            ErrorCode::CalculationError => "CALCULATION_ERROR",
            ErrorCode::CsvwLoadError => "CSVW_LOAD_ERROR",
        }
    }

    /// Parses a code string as written by [`ErrorCode::as_str`].
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain failure of a workflow step.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    /// The input graph is not valid Turtle.
    #[error("Failed to parse input graph: {0}")]
    Parse(#[from] ParseError),

    /// No activity to execute.
    #[error("No prov:Activity found in graph")]
    NoActivity,

    /// A host-supplied IRI does not resolve to an absolute IRI.
    #[error("Invalid {role} IRI: {iri}")]
    InvalidContext {
        /// `"activity"`, `"agent"` or `"plan"`.
        role: &'static str,
        /// The reference as supplied.
        iri: String,
    },

    /// Not enough qualifying inputs.
    #[error("Expected {expected}. Found {found}")]
    InputTooFew {
        /// Description of what the step expects.
        expected: &'static str,
        /// Number of qualifying inputs found.
        found: usize,
    },

    /// Inputs exist but their roles could not be determined.
    #[error("Could not determine {0} from inputs")]
    MissingInput(&'static str),

    /// An input has none of the accepted value properties.
    #[error("{role} {subject} has no {property}")]
    MissingNumericValue {
        /// `"Input"` or `"Member"`.
        role: &'static str,
        /// The offending entity.
        subject: Term,
        /// The accepted value properties, in prefixed form.
        property: &'static str,
    },

    /// An input's value is not a finite number.
    #[error("{role} {subject} has a non-numeric value: {value}")]
    NonNumericValue {
        /// `"Input"` or `"Member"`.
        role: &'static str,
        /// The offending entity.
        subject: Term,
        /// The value that failed to parse.
        value: Term,
    },

    /// More than one distinct unit among the inputs.
    #[error("{role} have different units: {}", join_terms(.units))]
    UnitMismatch {
        /// `"Inputs"` or `"Collection members"`.
        role: &'static str,
        /// The distinct units, in term order.
        units: Vec<Term>,
    },

    /// The input collection has no members.
    #[error("Collection {0} has no members (prov:hadMember)")]
    EmptyCollection(Term),

    /// The computation produced no representable result.
    #[error("Failed to calculate {operation}: {reason}")]
    Calculation {
        /// What was being computed.
        operation: &'static str,
        /// Why it failed.
        reason: String,
    },

    /// Fetching or interpreting CSVW metadata or data failed.
    #[error("Failed to load column from CSVW: {0}")]
    CsvwLoad(#[from] CsvwError),
}

impl StepError {
    /// The machine-readable code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            StepError::Parse(_) => ErrorCode::ParseError,
            StepError::NoActivity => ErrorCode::NoActivity,
            StepError::InvalidContext { .. } => ErrorCode::InvalidContext,
            StepError::InputTooFew { .. } => ErrorCode::InputTooFew,
            StepError::MissingInput(_) => ErrorCode::MissingInput,
            StepError::MissingNumericValue { .. } => ErrorCode::MissingNumericValue,
            StepError::NonNumericValue { .. } => ErrorCode::NonNumericValue,
            StepError::UnitMismatch { .. } => ErrorCode::UnitMismatch,
            StepError::EmptyCollection(_) => ErrorCode::EmptyCollection,
            StepError::Calculation { .. } => ErrorCode::CalculationError,
            StepError::CsvwLoad(_) => ErrorCode::CsvwLoadError,
        }
    }
}

fn join_terms(terms: &[Term]) -> String {
    terms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

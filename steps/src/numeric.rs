//! Reading quantities out of a graph and summarizing them.

use semflow_vocab::namespaces::{qudt, rdf};

use crate::error::StepError;
use crate::graph::Graph;
use crate::term::Term;

/// Which properties hold an entity's numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Only `qudt:numericValue`.
    NumericValue,
    /// `qudt:numericValue`, falling back to `rdf:value`.
    NumericValueOrValue,
}

impl ValueSource {
    /// The accepted properties, most preferred first.
    #[must_use]
    pub fn properties(self) -> &'static [&'static str] {
        match self {
            ValueSource::NumericValue => &[qudt::NUMERIC_VALUE],
            ValueSource::NumericValueOrValue => &[qudt::NUMERIC_VALUE, rdf::VALUE],
        }
    }

    /// Prefixed description used in error messages.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            ValueSource::NumericValue => "qudt:numericValue",
            ValueSource::NumericValueOrValue => "qudt:numericValue or rdf:value",
        }
    }
}

/// A numeric value read from an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    /// The entity the value was read from.
    pub entity: Term,
    /// The value.
    pub value: f64,
    /// The entity's `qudt:unit`, if any.
    pub unit: Option<Term>,
}

/// Reads the value and unit of `entity`.
///
/// `role` names the entity in error messages (`"Input"`, `"Member"`).
///
/// # Errors
///
/// [`StepError::MissingNumericValue`] if none of the accepted properties is
/// present, [`StepError::NonNumericValue`] if the value is not a finite
/// number.
pub fn read_quantity(
    graph: &Graph,
    entity: &Term,
    source: ValueSource,
    role: &'static str,
) -> Result<Quantity, StepError> {
    let raw = source
        .properties()
        .iter()
        .find_map(|p| graph.value(entity, p))
        .ok_or_else(|| StepError::MissingNumericValue {
            role,
            subject: entity.clone(),
            property: source.describe(),
        })?;

    let value = raw.as_f64().ok_or_else(|| StepError::NonNumericValue {
        role,
        subject: entity.clone(),
        value: raw.clone(),
    })?;

    Ok(Quantity {
        entity: entity.clone(),
        value,
        unit: graph.value(entity, qudt::UNIT).cloned(),
    })
}

/// The single unit shared by all quantities that carry one.
///
/// Quantities without a unit are ignored; `Ok(None)` means no quantity has a
/// unit.
///
/// # Errors
///
/// [`StepError::UnitMismatch`] if more than one distinct unit is present.
pub fn common_unit(quantities: &[Quantity], role: &'static str) -> Result<Option<Term>, StepError> {
    let mut units: Vec<Term> = quantities.iter().filter_map(|q| q.unit.clone()).collect();
    units.sort();
    units.dedup();
    match units.len() {
        0 => Ok(None),
        1 => Ok(units.pop()),
        _ => Err(StepError::UnitMismatch { role, units }),
    }
}

/// Count, mean and range of a non-empty set of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Summary {
    /// Summarizes `values`; `None` if there are none.
    ///
    /// The mean is accumulated incrementally, so it stays finite whenever
    /// the values are finite even if their sum is not.
    #[must_use]
    pub fn of(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        let mut summary = Summary {
            count: 1,
            mean: first,
            min: first,
            max: first,
        };
        for &v in rest {
            summary.count += 1;
            #[allow(clippy::cast_precision_loss)]
            let k = summary.count as f64;
            summary.mean += v / k - summary.mean / k;
            summary.min = summary.min.min(v);
            summary.max = summary.max.max(v);
        }
        Some(summary)
    }
}

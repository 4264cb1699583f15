//! Single-shot RDF workflow steps.
//!
//! Each step takes a Turtle graph describing a PROV-O activity and its
//! inputs, performs one operation and returns the graph with either a result
//! entity or an error annotation added. Steps never fail on graph content:
//! problems are reported inside the returned graph.
//!
//! | Step | Inputs | Result |
//! |------|--------|--------|
//! | [`sum`] | ≥2 `qudt:QuantityValue` via `bfo:is_input_of` | `#sumResult_<hash>` |
//! | [`average`] | one `prov:Collection` via `prov:used` | `#averageResult_<hash>` |
//! | [`csvw`] | metadata URI + column name via `bfo:is_input_of` | `#columnData_<hash>` |
//!
//! # Entry Point
//!
//! ```
//! use semflow_steps::{sum, StepConfig, StepContext};
//!
//! let input = r#"
//!     @prefix prov: <http://www.w3.org/ns/prov#> .
//!     @prefix qudt: <http://qudt.org/schema/qudt/> .
//!     @prefix unit: <http://qudt.org/vocab/unit/> .
//!     @prefix bfo:  <https://example.org/bfo/> .
//!
//!     <#add> a prov:Activity .
//!     <#a> a qudt:QuantityValue ; qudt:numericValue 2.0 ; qudt:unit unit:MilliM ;
//!          bfo:is_input_of <#add> .
//!     <#b> a qudt:QuantityValue ; qudt:numericValue 3.0 ; qudt:unit unit:MilliM ;
//!          bfo:is_input_of <#add> .
//! "#;
//! let output = sum::run(input, &StepContext::new(), &StepConfig::default());
//! assert!(output.contains("qudt:numericValue 5.0"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod annotation;
pub mod average;
pub mod config;
pub mod context;
pub mod csvw;
pub mod error;
pub mod graph;
pub mod naming;
pub mod numeric;
pub mod parser;
pub mod serializer;
pub mod step;
pub mod sum;
pub mod term;

pub use config::{ConfigError, ResultNaming, StepConfig};
pub use context::StepContext;
pub use error::{ErrorCode, StepError};
pub use graph::Graph;
pub use step::{execute, Execution, Step};
pub use term::{Literal, Term, Triple};

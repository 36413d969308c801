//! tsukamoto-core: Tsukamoto fuzzy inference for academic performance.
//!
//! Five crisp metrics (GPA, core course average, attendance rate, midterm and
//! final exam scores) are fuzzified into Low/Medium/High degrees, matched
//! against a static rule base with the minimum operator, and defuzzified by
//! a firing-strength weighted average into a crisp score and a category.
//!
//! The engine modules (`fuzzify`, `rules`, `inference`, `defuzzify`) are
//! pure: no shared mutable state, no I/O. `dataset`, `batch` and
//! `evaluation` build on them for working with student datasets.

pub mod batch;
pub mod dataset;
pub mod defuzzify;
pub mod error;
pub mod evaluation;
pub mod fuzzify;
pub mod inference;
pub mod model;
pub mod rules;
pub mod validate;

pub use defuzzify::{assess, categorize, defuzzify, Assessment};
pub use error::EngineError;
pub use inference::{infer, InferenceResult, RuleOutput};
pub use model::{AcademicInputs, Level, MembershipTriple, Metric, Performance};

//! Career-fit assessment: question catalog, answer collection, scoring, and reporting.
//!
//! The scoring engine is a pure function of the answers and the catalog. Everything
//! else in this module exists to feed it well-formed input or to present its output.

pub mod catalog;
pub mod domain;
pub mod import;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog};
pub use domain::{
    Answer, AnswerValue, AssessmentResult, LikertScale, Question, QuestionId, QuestionType,
    Recommendation, Section, WiscarAxis, WiscarScore,
};
pub use import::{AnswerImportError, AnswerImporter};
pub use report::ResultReport;
pub use router::assessment_router;
pub use scoring::{score, ScoringConfig, ScoringEngine};
pub use service::{AssessmentOutcome, AssessmentService, PublicQuestion};
pub use session::{deduplicate, AnswerError, AnswerSheet, SheetProgress};

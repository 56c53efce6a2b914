//! Immutable question catalog and the reference data surrounding it.
//!
//! A catalog is validated once when it is built; scoring trusts it afterwards.

mod standard;

pub use standard::{career_path_profiles, learning_path, CareerPathProfile, LearningStage};

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

use super::domain::{AnswerValue, Question, QuestionId, Section};

/// Validated, read-only set of questions.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionCatalog {
    /// Validates `questions` and builds the lookup index.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        validate(&questions)?;
        Ok(Self::indexed(questions))
    }

    /// The fraud-detection questionnaire shipped with the crate.
    pub fn standard() -> Self {
        Self::indexed(standard::standard_questions())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        Self::new(questions)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            questions = catalog.len(),
            "loaded assessment catalog"
        );
        Ok(catalog)
    }

    fn indexed(questions: Vec<Question>) -> Self {
        let index = questions
            .iter()
            .enumerate()
            .map(|(position, question)| (question.id.clone(), position))
            .collect();
        Self { questions, index }
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|position| &self.questions[*position])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn section(&self, section: Section) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.section == section)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Raised when a catalog cannot be loaded or violates its invariants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question id '{0}' appears more than once")]
    DuplicateId(QuestionId),
    #[error("likert question '{0}' has no scale")]
    MissingScale(QuestionId),
    #[error("question '{id}' scale runs from {min} down to {max}")]
    InvertedScale { id: QuestionId, min: u32, max: u32 },
    #[error("question '{id}' scale expects {expected} labels, found {actual}")]
    ScaleLabelMismatch {
        id: QuestionId,
        expected: u64,
        actual: usize,
    },
    #[error("choice question '{0}' has no options")]
    MissingOptions(QuestionId),
    #[error("question '{id}' correct answer '{answer}' is not one of its options")]
    CorrectAnswerNotAnOption { id: QuestionId, answer: String },
}

fn validate(questions: &[Question]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for question in questions {
        if !seen.insert(&question.id) {
            return Err(CatalogError::DuplicateId(question.id.clone()));
        }

        if question.kind.is_likert() {
            let scale = question
                .scale
                .as_ref()
                .ok_or_else(|| CatalogError::MissingScale(question.id.clone()))?;
            if scale.max < scale.min {
                return Err(CatalogError::InvertedScale {
                    id: question.id.clone(),
                    min: scale.min,
                    max: scale.max,
                });
            }
            if scale.labels.len() as u64 != scale.span() {
                return Err(CatalogError::ScaleLabelMismatch {
                    id: question.id.clone(),
                    expected: scale.span(),
                    actual: scale.labels.len(),
                });
            }
            continue;
        }

        if question.options.is_empty() {
            return Err(CatalogError::MissingOptions(question.id.clone()));
        }

        // Options are strings, so a numeric key could never be selected.
        let listed = match &question.correct_answer {
            Some(AnswerValue::Text(answer)) => question.options.iter().any(|option| option == answer),
            Some(AnswerValue::Number(_)) => false,
            None => true,
        };
        if !listed {
            let answer = question
                .correct_answer
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            return Err(CatalogError::CorrectAnswerNotAnOption {
                id: question.id.clone(),
                answer,
            });
        }
    }
    Ok(())
}

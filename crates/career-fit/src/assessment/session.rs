use serde::Serialize;

use super::catalog::QuestionCatalog;
use super::domain::{Answer, AnswerValue, QuestionId};

/// Collects answers for one sitting. A later answer to the same question replaces the earlier one.
#[derive(Debug, Clone)]
pub struct AnswerSheet<'a> {
    catalog: &'a QuestionCatalog,
    answers: Vec<Answer>,
}

impl<'a> AnswerSheet<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self {
            catalog,
            answers: Vec::new(),
        }
    }

    /// Validate `answer` against its question and store it.
    pub fn record(&mut self, answer: Answer) -> Result<(), AnswerError> {
        let question = self
            .catalog
            .get(&answer.question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(answer.question_id.clone()))?;

        match (&question.scale, &answer.answer) {
            (Some(scale), AnswerValue::Number(value)) if question.kind.is_likert() => {
                if value.fract() != 0.0 {
                    return Err(AnswerError::NotAStep {
                        id: question.id.clone(),
                        value: *value,
                    });
                }
                if !scale.contains(*value) {
                    return Err(AnswerError::OutOfRange {
                        id: question.id.clone(),
                        value: *value,
                        min: scale.min,
                        max: scale.max,
                    });
                }
            }
            (_, AnswerValue::Text(choice)) if !question.kind.is_likert() => {
                if !question.options.iter().any(|option| option == choice) {
                    return Err(AnswerError::NotAnOption {
                        id: question.id.clone(),
                        choice: choice.clone(),
                    });
                }
            }
            _ => {
                let expected = if question.kind.is_likert() {
                    "a likert value"
                } else {
                    "one of the listed options"
                };
                return Err(AnswerError::WrongKind {
                    id: question.id.clone(),
                    expected,
                });
            }
        }

        self.answers
            .retain(|existing| existing.question_id != answer.question_id);
        self.answers.push(answer);
        Ok(())
    }

    pub fn answer_for(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.answers
            .iter()
            .find(|answer| &answer.question_id == id)
            .map(|answer| &answer.answer)
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn into_answers(self) -> Vec<Answer> {
        self.answers
    }

    pub fn progress(&self) -> SheetProgress {
        let total = self.catalog.len();
        let answered = self.answers.len();
        let percent = if total > 0 {
            answered as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        SheetProgress {
            answered,
            total,
            remaining: total.saturating_sub(answered),
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.catalog.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProgress {
    pub answered: usize,
    pub total: usize,
    pub remaining: usize,
    pub percent: f64,
}

/// Keep only the most recent answer per question, in the order each question was last answered.
pub fn deduplicate(answers: Vec<Answer>) -> Vec<Answer> {
    let mut unique: Vec<Answer> = Vec::with_capacity(answers.len());
    for answer in answers {
        unique.retain(|existing| existing.question_id != answer.question_id);
        unique.push(answer);
    }
    unique
}

/// Raised when an answer does not fit the question it targets.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerError {
    #[error("question '{0}' is not part of the catalog")]
    UnknownQuestion(QuestionId),
    #[error("answer {value} to '{id}' is outside the scale {min}..={max}")]
    OutOfRange {
        id: QuestionId,
        value: f64,
        min: u32,
        max: u32,
    },
    #[error("answer {value} to '{id}' is not a whole step on the scale")]
    NotAStep { id: QuestionId, value: f64 },
    #[error("'{choice}' is not an option for question '{id}'")]
    NotAnOption { id: QuestionId, choice: String },
    #[error("question '{id}' expects {expected}")]
    WrongKind {
        id: QuestionId,
        expected: &'static str,
    },
}

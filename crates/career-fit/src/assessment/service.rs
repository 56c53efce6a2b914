use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog::QuestionCatalog;
use super::domain::{Answer, AssessmentResult, LikertScale, QuestionId, QuestionType, Section};
use super::report::ResultReport;
use super::scoring::{ScoringConfig, ScoringEngine};
use super::session::{deduplicate, AnswerError, AnswerSheet};

/// Question as shown to a respondent; grading keys stay server side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestion {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub section: Section,
    pub category: String,
    pub question: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<LikertScale>,
}

/// Scored submission returned to API callers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOutcome {
    pub result: AssessmentResult,
    pub report: ResultReport,
    pub answered: usize,
    pub total_questions: usize,
    pub scored_at: DateTime<Utc>,
}

/// Service composing the question catalog and the scoring engine.
pub struct AssessmentService {
    catalog: Arc<QuestionCatalog>,
    engine: ScoringEngine,
}

impl AssessmentService {
    pub fn new(catalog: Arc<QuestionCatalog>, config: ScoringConfig) -> Self {
        Self {
            catalog,
            engine: ScoringEngine::new(config),
        }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(QuestionCatalog::standard()), ScoringConfig::default())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn questions(&self) -> Vec<PublicQuestion> {
        self.catalog
            .questions()
            .iter()
            .map(|question| PublicQuestion {
                id: question.id.clone(),
                kind: question.kind,
                section: question.section,
                category: question.category.clone(),
                question: question.prompt.clone(),
                options: question.options.clone(),
                scale: question.scale.clone(),
            })
            .collect()
    }

    /// Score a submission leniently: duplicates collapse to the latest answer and
    /// answers the catalog does not know are ignored by the engine.
    pub fn evaluate(&self, answers: Vec<Answer>) -> AssessmentOutcome {
        let answers = deduplicate(answers);
        self.outcome(&answers)
    }

    /// Score a submission after checking every answer against its question.
    pub fn evaluate_checked(
        &self,
        answers: Vec<Answer>,
    ) -> Result<AssessmentOutcome, AnswerError> {
        let mut sheet = AnswerSheet::new(&self.catalog);
        for answer in answers {
            sheet.record(answer)?;
        }
        Ok(self.outcome(sheet.answers()))
    }

    fn outcome(&self, answers: &[Answer]) -> AssessmentOutcome {
        let result = self.engine.score(answers, &self.catalog);
        let report = ResultReport::from_result(&result);
        let answered = answers
            .iter()
            .filter(|answer| self.catalog.get(&answer.question_id).is_some())
            .count();

        AssessmentOutcome {
            result,
            report,
            answered,
            total_questions: self.catalog.len(),
            scored_at: Utc::now(),
        }
    }
}

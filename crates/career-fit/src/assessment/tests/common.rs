use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    Answer, AnswerValue, LikertScale, Question, QuestionId, QuestionType, Section, WiscarScore,
};
use crate::assessment::scoring::rules::ScoreSignals;
use crate::assessment::{AssessmentService, QuestionCatalog};

pub(super) fn catalog() -> QuestionCatalog {
    QuestionCatalog::standard()
}

pub(super) fn service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::standard())
}

pub(super) fn likert(id: &str, value: u32) -> Answer {
    Answer::new(id, value)
}

pub(super) fn choice(id: &str, option: &str) -> Answer {
    Answer::new(id, option)
}

pub(super) const PSYCH_IDS: [&str; 8] = [
    "psych_1", "psych_2", "psych_3", "psych_4", "psych_5", "psych_6", "psych_7", "psych_8",
];

pub(super) fn psychometric_answers(value: u32) -> Vec<Answer> {
    PSYCH_IDS.iter().map(|id| likert(id, value)).collect()
}

/// Correct choice for every gradable question in the standard catalog.
pub(super) fn correct_answers() -> Vec<Answer> {
    catalog()
        .questions()
        .iter()
        .filter_map(|question| {
            question
                .correct_answer
                .clone()
                .map(|answer| Answer {
                    question_id: question.id.clone(),
                    answer,
                })
        })
        .collect()
}

/// A distractor for every gradable question in the standard catalog.
pub(super) fn wrong_answers() -> Vec<Answer> {
    catalog()
        .questions()
        .iter()
        .filter_map(|question| {
            let correct = question.correct_answer.as_ref()?;
            let distractor = question
                .options
                .iter()
                .find(|option| correct.as_text() != Some(option.as_str()))?;
            Some(Answer {
                question_id: question.id.clone(),
                answer: AnswerValue::text(distractor.clone()),
            })
        })
        .collect()
}

pub(super) fn strong_answers() -> Vec<Answer> {
    let mut answers = psychometric_answers(5);
    answers.extend(correct_answers());
    answers
}

pub(super) fn likert_question(id: &str, section: Section, category: &str) -> Question {
    Question {
        id: QuestionId::new(id),
        kind: QuestionType::Likert,
        section,
        category: category.to_string(),
        prompt: format!("Prompt for {id}"),
        options: Vec::new(),
        scale: Some(LikertScale::agreement()),
        correct_answer: None,
        points: None,
    }
}

pub(super) fn choice_question(
    id: &str,
    section: Section,
    category: &str,
    correct: &str,
    points: Option<u32>,
) -> Question {
    Question {
        id: QuestionId::new(id),
        kind: QuestionType::MultipleChoice,
        section,
        category: category.to_string(),
        prompt: format!("Prompt for {id}"),
        options: vec![correct.to_string(), "Something else".to_string()],
        scale: None,
        correct_answer: Some(AnswerValue::text(correct)),
        points,
    }
}

pub(super) fn neutral_wiscar() -> WiscarScore {
    WiscarScore {
        will: 70.0,
        interest: 70.0,
        skill: 70.0,
        cognitive: 70.0,
        ability: 70.0,
        real_world: 70.0,
    }
}

pub(super) fn signals(psychometric: f64, technical: f64, overall: f64) -> ScoreSignals {
    ScoreSignals {
        psychometric,
        technical,
        wiscar: neutral_wiscar(),
        overall,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

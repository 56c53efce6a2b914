use super::common::*;
use crate::assessment::domain::{AnswerValue, QuestionId};
use crate::assessment::{deduplicate, AnswerError, AnswerSheet};

#[test]
fn later_answer_replaces_earlier_one() {
    let catalog = catalog();
    let mut sheet = AnswerSheet::new(&catalog);

    sheet.record(likert("psych_1", 2)).expect("valid");
    sheet.record(likert("psych_2", 4)).expect("valid");
    sheet.record(likert("psych_1", 5)).expect("valid");

    assert_eq!(sheet.answers().len(), 2);
    assert_eq!(
        sheet.answer_for(&QuestionId::new("psych_1")),
        Some(&AnswerValue::Number(5.0))
    );
    assert_eq!(sheet.answers()[1].question_id.as_str(), "psych_1");
}

#[test]
fn progress_counts_distinct_questions() {
    let catalog = catalog();
    let mut sheet = AnswerSheet::new(&catalog);
    for answer in psychometric_answers(3) {
        sheet.record(answer).expect("valid");
    }
    sheet.record(likert("psych_4", 1)).expect("valid");

    let progress = sheet.progress();
    assert_eq!(progress.answered, 8);
    assert_eq!(progress.total, 14);
    assert_eq!(progress.remaining, 6);
    assert_close(progress.percent, 8.0 / 14.0 * 100.0);
    assert!(!sheet.is_complete());

    for answer in correct_answers() {
        sheet.record(answer).expect("valid");
    }
    assert!(sheet.is_complete());
    assert_eq!(sheet.progress().remaining, 0);
}

#[test]
fn unknown_question_is_rejected() {
    let catalog = catalog();
    let mut sheet = AnswerSheet::new(&catalog);

    let err = sheet.record(likert("psych_42", 3)).expect_err("unknown id");

    assert_eq!(err, AnswerError::UnknownQuestion(QuestionId::new("psych_42")));
    assert!(sheet.answers().is_empty());
}

#[test]
fn likert_value_must_sit_on_the_scale() {
    let catalog = catalog();
    let mut sheet = AnswerSheet::new(&catalog);

    let err = sheet.record(likert("psych_1", 6)).expect_err("above scale");
    assert!(matches!(err, AnswerError::OutOfRange { min: 1, max: 5, .. }));

    let err = sheet.record(likert("psych_1", 0)).expect_err("below scale");
    assert!(matches!(err, AnswerError::OutOfRange { .. }));
}

#[test]
fn likert_value_must_be_a_whole_step() {
    let catalog = catalog();
    let mut sheet = AnswerSheet::new(&catalog);

    let err = sheet
        .record(crate::assessment::Answer::new("psych_1", AnswerValue::Number(3.5)))
        .expect_err("fractional answer");

    assert_eq!(
        err,
        AnswerError::NotAStep {
            id: QuestionId::new("psych_1"),
            value: 3.5,
        }
    );
    assert!(sheet
        .record(crate::assessment::Answer::new("psych_1", AnswerValue::Number(f64::NAN)))
        .is_err());
    assert!(sheet.answers().is_empty());
}

#[test]
fn choice_must_be_listed() {
    let catalog = catalog();
    let mut sheet = AnswerSheet::new(&catalog);

    let err = sheet.record(choice("tech_2", "Polars")).expect_err("not an option");

    assert_eq!(
        err,
        AnswerError::NotAnOption {
            id: QuestionId::new("tech_2"),
            choice: "Polars".to_string(),
        }
    );
}

#[test]
fn answer_kind_must_match_question() {
    let catalog = catalog();
    let mut sheet = AnswerSheet::new(&catalog);

    let err = sheet.record(choice("psych_1", "Agree")).expect_err("text on likert");
    assert!(matches!(err, AnswerError::WrongKind { expected: "a likert value", .. }));

    let err = sheet.record(likert("tech_1", 2)).expect_err("number on choice");
    assert!(err.to_string().contains("one of the listed options"));
}

#[test]
fn deduplicate_keeps_latest_answer_in_last_answered_order() {
    let answers = vec![
        likert("psych_1", 1),
        likert("psych_2", 2),
        likert("psych_1", 4),
        choice("tech_2", "Pandas"),
    ];

    let unique = deduplicate(answers);

    let ids: Vec<&str> = unique.iter().map(|answer| answer.question_id.as_str()).collect();
    assert_eq!(ids, vec!["psych_2", "psych_1", "tech_2"]);
    assert_eq!(unique[1].answer, AnswerValue::Number(4.0));
}

#[test]
fn sheet_answers_score_like_raw_answers() {
    let catalog = catalog();
    let mut sheet = AnswerSheet::new(&catalog);
    for answer in strong_answers() {
        sheet.record(answer).expect("valid");
    }

    let from_sheet = crate::assessment::score(sheet.answers(), &catalog);
    let raw = crate::assessment::score(&strong_answers(), &catalog);
    assert_eq!(from_sheet, raw);
    assert_eq!(sheet.into_answers().len(), 14);
}

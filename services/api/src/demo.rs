use crate::infra::{build_service, load_catalog};
use career_fit::assessment::{
    Answer, AnswerImporter, AnswerValue, AssessmentOutcome, QuestionCatalog, QuestionType,
};
use career_fit::error::AppError;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer file: JSON array of {questionId, answer} or a questionId,answer CSV
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// JSON question catalog (defaults to the built-in questionnaire)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the full outcome as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
    /// Reject answers that do not fit their question
    #[arg(long)]
    pub(crate) strict: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// JSON question catalog (defaults to the built-in questionnaire)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Synthetic respondent to score
    #[arg(long, value_enum, default_value_t = DemoProfile::Moderate)]
    pub(crate) profile: DemoProfile,
    /// Print the full outcome as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum DemoProfile {
    /// Top of every scale and every graded question correct
    Strong,
    /// Agrees with most statements and gets half the graded questions right
    #[default]
    Moderate,
    /// Submits nothing
    Empty,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        catalog,
        json,
        strict,
    } = args;

    let service = build_service(load_catalog(catalog.as_deref())?);
    let answers = AnswerImporter::from_path(&answers)?;

    let outcome = if strict {
        service.evaluate_checked(answers)?
    } else {
        service.evaluate(answers)
    };

    print_outcome(&outcome, json)
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    println!("Career fit questionnaire ({} questions)", catalog.len());
    for question in catalog.questions() {
        println!(
            "\n[{}] {} / {}",
            question.id,
            question.section.label(),
            question.category
        );
        println!("  {}", question.prompt);
        if let Some(scale) = &question.scale {
            for (step, label) in (scale.min..=scale.max).zip(&scale.labels) {
                println!("    {step}. {label}");
            }
        }
        for option in &question.options {
            println!("    - {option}");
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = build_service(QuestionCatalog::standard());
    let answers = synthetic_answers(service.catalog(), args.profile);

    if !args.json {
        println!("Career fit demo ({:?} respondent)", args.profile);
    }
    let outcome = service.evaluate(answers);
    print_outcome(&outcome, args.json)
}

/// Answers a synthetic respondent of the given profile would give.
pub(crate) fn synthetic_answers(catalog: &QuestionCatalog, profile: DemoProfile) -> Vec<Answer> {
    if profile == DemoProfile::Empty {
        return Vec::new();
    }

    let mut graded_seen = 0usize;
    catalog
        .questions()
        .iter()
        .filter_map(|question| {
            let answer = if question.kind == QuestionType::Likert {
                let scale = question.scale.as_ref()?;
                let value = match profile {
                    DemoProfile::Strong => scale.max,
                    _ => scale.max.saturating_sub(1).max(scale.min),
                };
                AnswerValue::Number(f64::from(value))
            } else {
                let correct = question.correct_answer.clone()?;
                let answer_correctly = profile == DemoProfile::Strong || graded_seen % 2 == 0;
                graded_seen += 1;
                if answer_correctly {
                    correct
                } else {
                    question
                        .options
                        .iter()
                        .find(|option| correct.as_text() != Some(option.as_str()))
                        .map(|option| AnswerValue::text(option.clone()))
                        .unwrap_or(correct)
                }
            };
            Some(Answer {
                question_id: question.id.clone(),
                answer,
            })
        })
        .collect()
}

fn print_outcome(outcome: &AssessmentOutcome, json: bool) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(outcome)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
        return Ok(());
    }

    render_outcome(outcome);
    Ok(())
}

pub(crate) fn render_outcome(outcome: &AssessmentOutcome) {
    let result = &outcome.result;
    let report = &outcome.report;

    println!(
        "Answered {} of {} questions",
        outcome.answered, outcome.total_questions
    );
    println!(
        "\nRecommendation: {} ({}% overall)",
        report.recommendation_label, report.overall_rounded
    );
    println!("{}", report.recommendation_description);
    println!(
        "Psychometric fit: {}% | Technical readiness: {}%",
        report.psychometric_rounded, report.technical_rounded
    );

    println!("\nWISCAR profile");
    for entry in &report.wiscar {
        println!("  {:<18} {:>3}%", entry.label, entry.rounded);
    }

    print_list("Strengths", &result.strengths);
    print_list("Areas for improvement", &result.improvement_areas);
    print_list("Next steps", &result.next_steps);

    println!("\nSuggested career paths");
    for title in &result.career_paths {
        match report
            .career_paths
            .iter()
            .find(|profile| profile.title == title.as_str())
        {
            Some(profile) => println!(
                "- {} ({}): {}",
                profile.title, profile.salary, profile.description
            ),
            None => println!("- {}", title),
        }
    }

    println!(
        "\nLearning path ({})",
        report.learning_stage.label()
    );
    for step in report.learning_path {
        println!("- {}", step);
    }
}

fn print_list(heading: &str, items: &[String]) {
    println!("\n{heading}");
    for item in items {
        println!("- {}", item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_fit::assessment::{AnswerSheet, Recommendation};

    fn score(profile: DemoProfile) -> AssessmentOutcome {
        let catalog = QuestionCatalog::standard();
        let answers = synthetic_answers(&catalog, profile);
        build_service(catalog).evaluate(answers)
    }

    #[test]
    fn strong_profile_is_highly_recommended() {
        let outcome = score(DemoProfile::Strong);
        assert_eq!(outcome.answered, 14);
        assert_eq!(
            outcome.result.recommendation,
            Recommendation::HighlyRecommended
        );
    }

    #[test]
    fn moderate_profile_is_recommended() {
        let outcome = score(DemoProfile::Moderate);
        assert_eq!(outcome.result.technical_score, 50.0);
        assert_eq!(outcome.result.recommendation, Recommendation::Recommended);
    }

    #[test]
    fn empty_profile_is_not_recommended() {
        let outcome = score(DemoProfile::Empty);
        assert_eq!(outcome.answered, 0);
        assert_eq!(outcome.result.recommendation, Recommendation::NotRecommended);
    }

    #[test]
    fn synthetic_answers_fit_their_questions() {
        let catalog = QuestionCatalog::standard();
        for profile in [DemoProfile::Strong, DemoProfile::Moderate] {
            let mut sheet = AnswerSheet::new(&catalog);
            for answer in synthetic_answers(&catalog, profile) {
                sheet.record(answer).expect("synthetic answer is valid");
            }
            assert!(sheet.is_complete());
        }
    }
}

use super::super::catalog::QuestionCatalog;
use super::super::domain::{Answer, AnswerValue, Question, Section, WiscarAxis, WiscarScore};
use super::config::ScoringConfig;

/// Headline numbers the policy tables are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScoreSignals {
    pub psychometric: f64,
    pub technical: f64,
    pub wiscar: WiscarScore,
    pub overall: f64,
}

/// (section, category) pairs feeding each axis. Multi-source axes are summed and then capped.
const AXIS_SOURCES: [(WiscarAxis, &[(Section, &str)]); 6] = [
    (WiscarAxis::Will, &[(Section::Psychometric, "motivation")]),
    (WiscarAxis::Interest, &[(Section::Psychometric, "interest")]),
    (
        WiscarAxis::Skill,
        &[
            (Section::Technical, "data-analysis"),
            (Section::Technical, "programming"),
        ],
    ),
    (
        WiscarAxis::Cognitive,
        &[(Section::Aptitude, "logical-reasoning")],
    ),
    // Labelled "Ability to Learn" but sourced from personality items; kept pending product review.
    (WiscarAxis::Ability, &[(Section::Psychometric, "personality")]),
    (
        WiscarAxis::RealWorld,
        &[(Section::Technical, "domain-knowledge")],
    ),
];

pub(crate) fn score_answers(
    answers: &[Answer],
    catalog: &QuestionCatalog,
    config: &ScoringConfig,
) -> ScoreSignals {
    // Answers without a catalog question are dropped here and never reach an aggregate.
    let matched: Vec<(&Question, &AnswerValue)> = answers
        .iter()
        .filter_map(|answer| {
            catalog
                .get(&answer.question_id)
                .map(|question| (question, &answer.answer))
        })
        .collect();

    let psychometric = psychometric_score(&matched, config);
    let technical = technical_score(&matched, config);
    let wiscar = wiscar_profile(&matched, config);

    let overall = clamp_percent(
        psychometric * config.psychometric_weight
            + technical * config.technical_weight
            + wiscar.mean() * config.wiscar_weight,
    );

    ScoreSignals {
        psychometric,
        technical,
        wiscar,
        overall,
    }
}

fn psychometric_score(matched: &[(&Question, &AnswerValue)], config: &ScoringConfig) -> f64 {
    let mut total = 0.0;
    let mut capacity = 0.0;

    for (question, answer) in matched
        .iter()
        .filter(|(question, _)| question.section == Section::Psychometric)
    {
        total += answer.as_number().unwrap_or(0.0);
        let scale_max = question
            .scale
            .as_ref()
            .map(|scale| scale.max)
            .unwrap_or(config.default_likert_max);
        capacity += f64::from(scale_max);
    }

    if capacity > 0.0 {
        clamp_percent(total / capacity * 100.0)
    } else {
        0.0
    }
}

fn technical_score(matched: &[(&Question, &AnswerValue)], config: &ScoringConfig) -> f64 {
    let mut earned: u64 = 0;
    let mut possible: u64 = 0;

    for (question, answer) in matched
        .iter()
        .filter(|(question, _)| question.section.is_graded())
    {
        let Some(correct) = &question.correct_answer else {
            continue;
        };
        let weight = u64::from(config.question_weight(question.points));
        possible += weight;
        if *answer == correct {
            earned += weight;
        }
    }

    if possible > 0 {
        clamp_percent(earned as f64 / possible as f64 * 100.0)
    } else {
        0.0
    }
}

fn wiscar_profile(matched: &[(&Question, &AnswerValue)], config: &ScoringConfig) -> WiscarScore {
    let mut profile = WiscarScore {
        will: 0.0,
        interest: 0.0,
        skill: 0.0,
        cognitive: 0.0,
        ability: 0.0,
        real_world: 0.0,
    };

    for (axis, sources) in AXIS_SOURCES {
        let combined: f64 = sources
            .iter()
            .map(|(section, category)| category_score(matched, *section, category, config))
            .sum();
        profile.set(axis, clamp_percent(combined));
    }

    profile
}

pub(crate) fn category_score(
    matched: &[(&Question, &AnswerValue)],
    section: Section,
    category: &str,
    config: &ScoringConfig,
) -> f64 {
    let values: Vec<f64> = matched
        .iter()
        .filter(|(question, _)| question.section == section && question.category == category)
        .map(|(_, answer)| {
            answer
                .as_number()
                .unwrap_or(config.non_numeric_axis_value)
        })
        .collect();

    if values.is_empty() {
        return config.neutral_axis_score;
    }

    let average = values.iter().sum::<f64>() / values.len() as f64;
    clamp_percent(average / config.axis_scale_max * 100.0)
}

pub(crate) fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

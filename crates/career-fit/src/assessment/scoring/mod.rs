mod config;
pub(crate) mod policy;
pub(crate) mod rules;

pub use config::ScoringConfig;

use tracing::debug;

use super::catalog::QuestionCatalog;
use super::domain::{Answer, AssessmentResult};
use policy::{career_paths, decide_recommendation, improvement_areas, next_steps, strengths};

/// Stateless scorer that applies the configured weights to a set of answers.
///
/// Scoring is total: missing data, unmatched question ids and mistyped answers all
/// resolve to defined fallbacks rather than errors. Callers deduplicate answers per
/// question before scoring.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, answers: &[Answer], catalog: &QuestionCatalog) -> AssessmentResult {
        let signals = rules::score_answers(answers, catalog, &self.config);

        let recommendation = decide_recommendation(&signals);
        let strengths = strengths(&signals);
        let improvement_areas = improvement_areas(&signals);
        let next_steps = next_steps(recommendation, &improvement_areas);
        let career_paths = career_paths(&signals, &strengths);

        debug!(
            answers = answers.len(),
            psychometric = signals.psychometric,
            technical = signals.technical,
            overall = signals.overall,
            %recommendation,
            "scored assessment"
        );

        AssessmentResult {
            psychometric_score: signals.psychometric,
            technical_score: signals.technical,
            wiscar_scores: signals.wiscar,
            overall_score: signals.overall,
            recommendation,
            strengths,
            improvement_areas,
            next_steps,
            career_paths,
        }
    }
}

/// Scores `answers` with the default weights.
pub fn score(answers: &[Answer], catalog: &QuestionCatalog) -> AssessmentResult {
    ScoringEngine::default().score(answers, catalog)
}

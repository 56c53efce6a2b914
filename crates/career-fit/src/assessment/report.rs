use serde::Serialize;

use super::catalog::{career_path_profiles, learning_path, CareerPathProfile, LearningStage};
use super::domain::{AssessmentResult, Recommendation, WiscarAxis};

/// Display tone associated with a recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTone {
    Success,
    Primary,
    Warning,
    Destructive,
}

impl RecommendationTone {
    pub const fn for_recommendation(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::HighlyRecommended => Self::Success,
            Recommendation::Recommended => Self::Primary,
            Recommendation::ConsiderAlternatives => Self::Warning,
            Recommendation::NotRecommended => Self::Destructive,
        }
    }
}

pub const fn recommendation_description(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::HighlyRecommended => "You show excellent potential for a successful career in fraud detection. Your personality, skills, and interests align strongly with this field.",
        Recommendation::Recommended => "You have good potential for fraud detection roles. With some additional development in key areas, you could thrive in this field.",
        Recommendation::ConsiderAlternatives => "While fraud detection might be possible, you may find better fit in related fields. Consider the alternative career paths suggested below.",
        Recommendation::NotRecommended => "Based on your assessment, other career paths might be a better fit. Explore the alternatives suggested to find your ideal career direction.",
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarAxisEntry {
    pub axis: WiscarAxis,
    pub label: &'static str,
    pub score: f64,
    pub rounded: u8,
}

/// Presentation-neutral summary layered over an [`AssessmentResult`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultReport {
    pub recommendation: Recommendation,
    pub recommendation_label: &'static str,
    pub recommendation_description: &'static str,
    pub tone: RecommendationTone,
    pub overall_rounded: u8,
    pub psychometric_rounded: u8,
    pub technical_rounded: u8,
    pub wiscar: Vec<WiscarAxisEntry>,
    pub career_paths: Vec<CareerPathProfile>,
    pub learning_stage: LearningStage,
    pub learning_path: &'static [&'static str],
}

impl ResultReport {
    pub fn from_result(result: &AssessmentResult) -> Self {
        let recommendation = result.recommendation;
        let learning_stage = LearningStage::for_recommendation(recommendation);

        let wiscar = result
            .wiscar_scores
            .axes()
            .into_iter()
            .map(|(axis, score)| WiscarAxisEntry {
                axis,
                label: axis.label(),
                score,
                rounded: round_percent(score),
            })
            .collect();

        // Only titles with a reference profile are expanded; fallback titles have none.
        let career_paths = career_path_profiles()
            .iter()
            .filter(|profile| result.career_paths.iter().any(|title| title == profile.title))
            .cloned()
            .collect();

        Self {
            recommendation,
            recommendation_label: recommendation.label(),
            recommendation_description: recommendation_description(recommendation),
            tone: RecommendationTone::for_recommendation(recommendation),
            overall_rounded: round_percent(result.overall_score),
            psychometric_rounded: round_percent(result.psychometric_score),
            technical_rounded: round_percent(result.technical_score),
            wiscar,
            career_paths,
            learning_stage,
            learning_path: learning_path(learning_stage),
        }
    }
}

pub(crate) fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::WiscarScore;

    fn result_with(recommendation: Recommendation, career_paths: &[&str]) -> AssessmentResult {
        AssessmentResult {
            psychometric_score: 72.5,
            technical_score: 64.4,
            wiscar_scores: WiscarScore {
                will: 80.0,
                interest: 86.666,
                skill: 100.0,
                cognitive: 70.0,
                ability: 73.3,
                real_world: 60.0,
            },
            overall_score: 69.5,
            recommendation,
            strengths: vec!["Solid technical foundation".to_string()],
            improvement_areas: vec!["Continue building on existing strengths".to_string()],
            next_steps: Vec::new(),
            career_paths: career_paths.iter().map(|title| title.to_string()).collect(),
        }
    }

    #[test]
    fn report_rounds_scores_and_labels_axes() {
        let report = ResultReport::from_result(&result_with(Recommendation::Recommended, &[]));

        assert_eq!(report.overall_rounded, 70);
        assert_eq!(report.psychometric_rounded, 73);
        assert_eq!(report.technical_rounded, 64);
        assert_eq!(report.recommendation_label, "Recommended");
        assert_eq!(report.tone, RecommendationTone::Primary);

        let labels: Vec<&str> = report.wiscar.iter().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            vec![
                "Will",
                "Interest",
                "Skill",
                "Cognitive",
                "Ability to Learn",
                "Real-World Fit"
            ]
        );
        assert_eq!(report.wiscar[1].rounded, 87);
    }

    #[test]
    fn report_expands_known_career_titles_only() {
        let report = ResultReport::from_result(&result_with(
            Recommendation::ConsiderAlternatives,
            &["Risk Management Analyst", "Compliance Assistant"],
        ));

        assert_eq!(report.career_paths.len(), 1);
        assert_eq!(report.career_paths[0].title, "Risk Management Analyst");
        assert_eq!(report.career_paths[0].salary, "$55,000 - $90,000");
    }

    #[test]
    fn learning_path_follows_tier() {
        let advanced =
            ResultReport::from_result(&result_with(Recommendation::HighlyRecommended, &[]));
        assert_eq!(advanced.learning_stage, LearningStage::Advanced);
        assert!(advanced.learning_path.contains(&"Forensic Accounting"));

        let beginner =
            ResultReport::from_result(&result_with(Recommendation::NotRecommended, &[]));
        assert_eq!(beginner.learning_stage, LearningStage::Beginner);
        assert_eq!(beginner.tone, RecommendationTone::Destructive);
        assert_eq!(beginner.learning_path.len(), 4);
    }
}

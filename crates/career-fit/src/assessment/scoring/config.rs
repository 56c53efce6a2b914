use serde::{Deserialize, Serialize};

/// Weights and neutral defaults applied by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub psychometric_weight: f64,
    pub technical_weight: f64,
    pub wiscar_weight: f64,
    /// Weight of a gradable question that declares no (or zero) points.
    pub default_question_points: u32,
    /// Axis score reported when the user answered nothing feeding the axis.
    pub neutral_axis_score: f64,
    /// Value substituted for a non-numeric answer when averaging an axis.
    pub non_numeric_axis_value: f64,
    pub axis_scale_max: f64,
    /// Scale max used for psychometric questions that declare no scale.
    pub default_likert_max: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            psychometric_weight: 0.4,
            technical_weight: 0.4,
            wiscar_weight: 0.2,
            default_question_points: 10,
            neutral_axis_score: 70.0,
            non_numeric_axis_value: 3.0,
            axis_scale_max: 5.0,
            default_likert_max: 5,
        }
    }
}

impl ScoringConfig {
    pub(crate) fn question_weight(&self, points: Option<u32>) -> u32 {
        match points {
            Some(points) if points > 0 => points,
            _ => self.default_question_points,
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Presentation hint for a question. Scoring only distinguishes likert from the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Likert,
    MultipleChoice,
    Scenario,
    Technical,
}

impl QuestionType {
    pub const fn is_likert(self) -> bool {
        matches!(self, Self::Likert)
    }
}

/// Top-level grouping deciding which aggregates a question feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Psychometric,
    Technical,
    Aptitude,
    Domain,
}

impl Section {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric",
            Self::Technical => "Technical",
            Self::Aptitude => "Aptitude",
            Self::Domain => "Domain",
        }
    }

    /// Sections graded against a correct answer for the technical score.
    pub const fn is_graded(self) -> bool {
        matches!(self, Self::Technical | Self::Aptitude | Self::Domain)
    }
}

/// Ordered agreement scale for likert questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikertScale {
    pub min: u32,
    pub max: u32,
    pub labels: Vec<String>,
}

impl LikertScale {
    /// Standard five point agreement scale.
    pub fn agreement() -> Self {
        Self {
            min: 1,
            max: 5,
            labels: [
                "Strongly Disagree",
                "Disagree",
                "Neutral",
                "Agree",
                "Strongly Agree",
            ]
            .iter()
            .map(|label| label.to_string())
            .collect(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value <= f64::from(self.max)
    }

    /// Number of distinct responses the scale admits. Computed in u64 so a
    /// full-width `u32` range cannot overflow.
    pub fn span(&self) -> u64 {
        u64::from(self.max.saturating_sub(self.min)) + 1
    }
}

/// Either a selected choice or a numeric likert response.
///
/// Equality is exact and never coerces across kinds: `Text("3")` and
/// `Number(3.0)` are different answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Number(_) => None,
        }
    }
}

impl From<u32> for AnswerValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub section: Section,
    pub category: String,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<LikertScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<AnswerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

impl Question {
    pub fn is_gradable(&self) -> bool {
        self.correct_answer.is_some()
    }
}

/// A single response keyed by question id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub answer: AnswerValue,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, answer: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: QuestionId(question_id.into()),
            answer: answer.into(),
        }
    }
}

/// The six WISCAR readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WiscarAxis {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarAxis {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::Ability,
            Self::RealWorld,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive",
            Self::Ability => "Ability to Learn",
            Self::RealWorld => "Real-World Fit",
        }
    }
}

/// Six independent axes, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScore {
    pub will: f64,
    pub interest: f64,
    pub skill: f64,
    pub cognitive: f64,
    pub ability: f64,
    pub real_world: f64,
}

impl WiscarScore {
    pub fn get(&self, axis: WiscarAxis) -> f64 {
        match axis {
            WiscarAxis::Will => self.will,
            WiscarAxis::Interest => self.interest,
            WiscarAxis::Skill => self.skill,
            WiscarAxis::Cognitive => self.cognitive,
            WiscarAxis::Ability => self.ability,
            WiscarAxis::RealWorld => self.real_world,
        }
    }

    pub(crate) fn set(&mut self, axis: WiscarAxis, value: f64) {
        match axis {
            WiscarAxis::Will => self.will = value,
            WiscarAxis::Interest => self.interest = value,
            WiscarAxis::Skill => self.skill = value,
            WiscarAxis::Cognitive => self.cognitive = value,
            WiscarAxis::Ability => self.ability = value,
            WiscarAxis::RealWorld => self.real_world = value,
        }
    }

    pub fn axes(&self) -> [(WiscarAxis, f64); 6] {
        WiscarAxis::ordered().map(|axis| (axis, self.get(axis)))
    }

    /// Unweighted arithmetic mean of the six axes.
    pub fn mean(&self) -> f64 {
        let axes = self.axes();
        axes.iter().map(|(_, value)| value).sum::<f64>() / axes.len() as f64
    }
}

/// Recommendation tier, ordered from least to most desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    NotRecommended,
    ConsiderAlternatives,
    Recommended,
    HighlyRecommended,
}

impl Recommendation {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::HighlyRecommended,
            Self::Recommended,
            Self::ConsiderAlternatives,
            Self::NotRecommended,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::HighlyRecommended => "highly-recommended",
            Self::Recommended => "recommended",
            Self::ConsiderAlternatives => "consider-alternatives",
            Self::NotRecommended => "not-recommended",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly Recommended",
            Self::Recommended => "Recommended",
            Self::ConsiderAlternatives => "Consider Alternatives",
            Self::NotRecommended => "Not Recommended",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Complete output of a scoring run. Percentages are raw and unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub psychometric_score: f64,
    pub technical_score: f64,
    pub wiscar_scores: WiscarScore,
    pub overall_score: f64,
    pub recommendation: Recommendation,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub next_steps: Vec<String>,
    pub career_paths: Vec<String>,
}

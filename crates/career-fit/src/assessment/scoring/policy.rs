//! Declarative rule tables turning scores into a tier and narrative guidance.
//!
//! Every table is evaluated top to bottom. Recommendation rules stop at the first
//! match; narrative rules are independent and keep table order in their output.

use super::super::domain::{Recommendation, WiscarAxis};
use super::rules::ScoreSignals;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Metric {
    Psychometric,
    Technical,
    Overall,
    Axis(WiscarAxis),
}

impl Metric {
    fn read(self, signals: &ScoreSignals) -> f64 {
        match self {
            Metric::Psychometric => signals.psychometric,
            Metric::Technical => signals.technical,
            Metric::Overall => signals.overall,
            Metric::Axis(axis) => signals.wiscar.get(axis),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Threshold {
    /// Inclusive lower bound.
    AtLeast(f64),
    /// Exclusive upper bound.
    Below(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Condition {
    pub metric: Metric,
    pub threshold: Threshold,
}

impl Condition {
    const fn at_least(metric: Metric, bound: f64) -> Self {
        Self {
            metric,
            threshold: Threshold::AtLeast(bound),
        }
    }

    const fn below(metric: Metric, bound: f64) -> Self {
        Self {
            metric,
            threshold: Threshold::Below(bound),
        }
    }

    pub(crate) fn holds(&self, signals: &ScoreSignals) -> bool {
        let value = self.metric.read(signals);
        match self.threshold {
            Threshold::AtLeast(bound) => value >= bound,
            Threshold::Below(bound) => value < bound,
        }
    }
}

pub(crate) struct RecommendationRule {
    pub tier: Recommendation,
    /// All conditions must hold; an empty list always matches.
    pub conditions: &'static [Condition],
}

pub(crate) const RECOMMENDATION_LADDER: [RecommendationRule; 4] = [
    RecommendationRule {
        tier: Recommendation::HighlyRecommended,
        conditions: &[
            Condition::at_least(Metric::Overall, 80.0),
            Condition::at_least(Metric::Psychometric, 75.0),
            Condition::at_least(Metric::Technical, 70.0),
        ],
    },
    RecommendationRule {
        tier: Recommendation::Recommended,
        conditions: &[
            Condition::at_least(Metric::Overall, 65.0),
            Condition::at_least(Metric::Psychometric, 60.0),
        ],
    },
    RecommendationRule {
        tier: Recommendation::ConsiderAlternatives,
        conditions: &[Condition::at_least(Metric::Overall, 45.0)],
    },
    RecommendationRule {
        tier: Recommendation::NotRecommended,
        conditions: &[],
    },
];

pub(crate) struct NarrativeRule {
    pub condition: Condition,
    pub message: &'static str,
}

pub(crate) const STRENGTH_RULES: [NarrativeRule; 6] = [
    NarrativeRule {
        condition: Condition::at_least(Metric::Psychometric, 75.0),
        message: "Strong personality fit for fraud detection",
    },
    NarrativeRule {
        condition: Condition::at_least(Metric::Technical, 70.0),
        message: "Solid technical foundation",
    },
    NarrativeRule {
        condition: Condition::at_least(Metric::Axis(WiscarAxis::Will), 80.0),
        message: "High motivation and persistence",
    },
    NarrativeRule {
        condition: Condition::at_least(Metric::Axis(WiscarAxis::Interest), 80.0),
        message: "Genuine interest in fraud prevention",
    },
    NarrativeRule {
        condition: Condition::at_least(Metric::Axis(WiscarAxis::Cognitive), 75.0),
        message: "Strong analytical thinking",
    },
    NarrativeRule {
        condition: Condition::at_least(Metric::Axis(WiscarAxis::Ability), 75.0),
        message: "Good learning adaptability",
    },
];

pub(crate) const STRENGTH_FALLBACK: [&str; 2] = ["Enthusiasm for learning", "Attention to detail"];

pub(crate) const IMPROVEMENT_RULES: [NarrativeRule; 4] = [
    NarrativeRule {
        condition: Condition::below(Metric::Technical, 60.0),
        message: "Technical skills development (programming, data analysis)",
    },
    NarrativeRule {
        condition: Condition::below(Metric::Axis(WiscarAxis::Skill), 60.0),
        message: "Hands-on experience with fraud detection tools",
    },
    NarrativeRule {
        condition: Condition::below(Metric::Psychometric, 60.0),
        message: "Building confidence in investigative work",
    },
    NarrativeRule {
        condition: Condition::below(Metric::Axis(WiscarAxis::RealWorld), 60.0),
        message: "Domain knowledge of fraud schemes and prevention",
    },
];

pub(crate) const IMPROVEMENT_FALLBACK: [&str; 1] = ["Continue building on existing strengths"];

pub(crate) fn next_steps_for(tier: Recommendation) -> [&'static str; 3] {
    match tier {
        Recommendation::HighlyRecommended => [
            "Apply for entry-level fraud analyst positions",
            "Pursue relevant certifications (CFE, CAMS)",
            "Build a portfolio with fraud detection projects",
        ],
        Recommendation::Recommended => [
            "Complete a fraud detection course or bootcamp",
            "Gain experience through internships or volunteer work",
            "Strengthen technical skills with online courses",
        ],
        Recommendation::ConsiderAlternatives => [
            "Explore related fields (risk management, compliance)",
            "Take foundational courses in data analysis",
            "Consider entry-level positions to gain experience",
        ],
        Recommendation::NotRecommended => [
            "Focus on building foundational skills",
            "Explore other career paths that align with your interests",
            "Consider general business or technology roles",
        ],
    }
}

pub(crate) enum CareerTrigger {
    Score(Condition),
    /// Fires when any strength message contains the needle (case-sensitive).
    StrengthMentions(&'static str),
}

pub(crate) struct CareerPathRule {
    pub trigger: CareerTrigger,
    pub titles: &'static [&'static str],
}

pub(crate) const CAREER_PATH_RULES: [CareerPathRule; 3] = [
    CareerPathRule {
        trigger: CareerTrigger::Score(Condition::at_least(Metric::Overall, 70.0)),
        titles: &["Fraud Analyst", "AML Compliance Officer"],
    },
    CareerPathRule {
        trigger: CareerTrigger::Score(Condition::at_least(Metric::Overall, 80.0)),
        titles: &["Cyber Fraud Specialist", "Financial Crime Investigator"],
    },
    CareerPathRule {
        trigger: CareerTrigger::StrengthMentions("technical"),
        titles: &["Risk Management Analyst"],
    },
];

pub(crate) const CAREER_PATH_FALLBACK: [&str; 2] = ["Entry-level Risk Analyst", "Compliance Assistant"];

pub(crate) fn decide_recommendation(signals: &ScoreSignals) -> Recommendation {
    RECOMMENDATION_LADDER
        .iter()
        .find(|rule| rule.conditions.iter().all(|condition| condition.holds(signals)))
        .map(|rule| rule.tier)
        .unwrap_or(Recommendation::NotRecommended)
}

pub(crate) fn strengths(signals: &ScoreSignals) -> Vec<String> {
    collect_narrative(&STRENGTH_RULES, signals, &STRENGTH_FALLBACK)
}

pub(crate) fn improvement_areas(signals: &ScoreSignals) -> Vec<String> {
    collect_narrative(&IMPROVEMENT_RULES, signals, &IMPROVEMENT_FALLBACK)
}

/// Guidance depends on the tier alone; improvement areas are accepted but not yet consulted.
pub(crate) fn next_steps(recommendation: Recommendation, _improvement_areas: &[String]) -> Vec<String> {
    next_steps_for(recommendation)
        .iter()
        .map(|step| step.to_string())
        .collect()
}

pub(crate) fn career_paths(signals: &ScoreSignals, strengths: &[String]) -> Vec<String> {
    let paths: Vec<String> = CAREER_PATH_RULES
        .iter()
        .filter(|rule| match &rule.trigger {
            CareerTrigger::Score(condition) => condition.holds(signals),
            CareerTrigger::StrengthMentions(needle) => {
                strengths.iter().any(|strength| strength.contains(*needle))
            }
        })
        .flat_map(|rule| rule.titles.iter().map(|title| title.to_string()))
        .collect();

    if paths.is_empty() {
        to_owned_list(&CAREER_PATH_FALLBACK)
    } else {
        paths
    }
}

fn collect_narrative(
    rules: &[NarrativeRule],
    signals: &ScoreSignals,
    fallback: &[&str],
) -> Vec<String> {
    let messages: Vec<String> = rules
        .iter()
        .filter(|rule| rule.condition.holds(signals))
        .map(|rule| rule.message.to_string())
        .collect();

    if messages.is_empty() {
        to_owned_list(fallback)
    } else {
        messages
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

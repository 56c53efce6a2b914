use super::common::*;
use crate::assessment::domain::Recommendation;
use crate::assessment::scoring::policy::{
    career_paths, decide_recommendation, improvement_areas, next_steps, strengths,
    RECOMMENDATION_LADDER,
};

#[test]
fn highly_recommended_bounds_are_inclusive() {
    assert_eq!(
        decide_recommendation(&signals(75.0, 70.0, 80.0)),
        Recommendation::HighlyRecommended
    );
}

#[test]
fn overall_just_below_eighty_falls_through() {
    assert_eq!(
        decide_recommendation(&signals(75.0, 70.0, 79.99)),
        Recommendation::Recommended
    );
}

#[test]
fn weak_psychometric_blocks_top_tier() {
    assert_eq!(
        decide_recommendation(&signals(74.99, 95.0, 90.0)),
        Recommendation::Recommended
    );
    assert_eq!(
        decide_recommendation(&signals(90.0, 69.99, 90.0)),
        Recommendation::Recommended
    );
}

#[test]
fn recommended_requires_psychometric_sixty() {
    assert_eq!(
        decide_recommendation(&signals(60.0, 0.0, 65.0)),
        Recommendation::Recommended
    );
    assert_eq!(
        decide_recommendation(&signals(59.99, 100.0, 70.0)),
        Recommendation::ConsiderAlternatives
    );
}

#[test]
fn lowest_tiers_split_at_forty_five() {
    assert_eq!(
        decide_recommendation(&signals(0.0, 0.0, 45.0)),
        Recommendation::ConsiderAlternatives
    );
    assert_eq!(
        decide_recommendation(&signals(100.0, 100.0, 44.99)),
        Recommendation::NotRecommended
    );
}

#[test]
fn ladder_runs_from_best_to_worst_tier() {
    let tiers: Vec<Recommendation> = RECOMMENDATION_LADDER.iter().map(|rule| rule.tier).collect();
    assert_eq!(tiers, Recommendation::ordered().to_vec());
    assert!(RECOMMENDATION_LADDER
        .last()
        .map(|rule| rule.conditions.is_empty())
        .unwrap_or(false));
}

#[test]
fn strengths_keep_table_order() {
    let mut scores = signals(80.0, 75.0, 70.0);
    scores.wiscar.will = 85.0;
    scores.wiscar.cognitive = 75.0;

    assert_eq!(
        strengths(&scores),
        vec![
            "Strong personality fit for fraud detection",
            "Solid technical foundation",
            "High motivation and persistence",
            "Strong analytical thinking",
        ]
    );
}

#[test]
fn strengths_fall_back_when_nothing_stands_out() {
    assert_eq!(
        strengths(&signals(74.99, 69.99, 60.0)),
        vec!["Enthusiasm for learning", "Attention to detail"]
    );
}

#[test]
fn improvement_areas_fire_independently() {
    let mut scores = signals(70.0, 59.99, 60.0);
    scores.wiscar.skill = 40.0;
    scores.wiscar.real_world = 59.0;

    assert_eq!(
        improvement_areas(&scores),
        vec![
            "Technical skills development (programming, data analysis)",
            "Hands-on experience with fraud detection tools",
            "Domain knowledge of fraud schemes and prevention",
        ]
    );
    assert_eq!(
        improvement_areas(&signals(60.0, 60.0, 60.0)),
        vec!["Continue building on existing strengths"]
    );
}

#[test]
fn next_steps_depend_on_tier_only() {
    let none: Vec<String> = Vec::new();
    let many = vec!["Technical skills development (programming, data analysis)".to_string()];

    for tier in Recommendation::ordered() {
        let plain = next_steps(tier, &none);
        assert_eq!(plain.len(), 3);
        assert_eq!(plain, next_steps(tier, &many));
    }
    assert_eq!(
        next_steps(Recommendation::Recommended, &none)[0],
        "Complete a fraud detection course or bootcamp"
    );
    assert_eq!(
        next_steps(Recommendation::ConsiderAlternatives, &none)[2],
        "Consider entry-level positions to gain experience"
    );
}

#[test]
fn career_paths_accumulate_across_thresholds() {
    let paths = career_paths(&signals(70.0, 50.0, 85.0), &[]);

    assert_eq!(
        paths,
        vec![
            "Fraud Analyst",
            "AML Compliance Officer",
            "Cyber Fraud Specialist",
            "Financial Crime Investigator",
        ]
    );
}

#[test]
fn technical_strength_adds_risk_path() {
    let strengths = vec!["Solid technical foundation".to_string()];

    assert_eq!(
        career_paths(&signals(70.0, 75.0, 72.0), &strengths),
        vec![
            "Fraud Analyst",
            "AML Compliance Officer",
            "Risk Management Analyst",
        ]
    );
    assert_eq!(
        career_paths(&signals(70.0, 75.0, 50.0), &strengths),
        vec!["Risk Management Analyst"]
    );
}

#[test]
fn strength_match_is_case_sensitive() {
    let strengths = vec!["Technical curiosity".to_string()];

    assert_eq!(
        career_paths(&signals(50.0, 50.0, 50.0), &strengths),
        vec!["Entry-level Risk Analyst", "Compliance Assistant"]
    );
}

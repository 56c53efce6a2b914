use serde::Serialize;

use super::super::domain::{
    AnswerValue, LikertScale, Question, QuestionId, QuestionType, Recommendation, Section,
};

pub(super) fn standard_questions() -> Vec<Question> {
    let mut questions: Vec<Question> = LIKERT_ITEMS
        .iter()
        .map(|(id, category, prompt)| Question {
            id: QuestionId::new(*id),
            kind: QuestionType::Likert,
            section: Section::Psychometric,
            category: category.to_string(),
            prompt: prompt.to_string(),
            options: Vec::new(),
            scale: Some(LikertScale::agreement()),
            correct_answer: None,
            points: None,
        })
        .collect();

    questions.extend(vec![
        graded(
            "tech_1",
            QuestionType::MultipleChoice,
            Section::Technical,
            "data-analysis",
            "Which statistical measure is most useful for detecting outliers in transaction amounts?",
            &["Mean (Average)", "Standard Deviation", "Median", "Mode"],
            "Standard Deviation",
            10,
        ),
        graded(
            "tech_2",
            QuestionType::MultipleChoice,
            Section::Technical,
            "programming",
            "In Python, which library is commonly used for data analysis and manipulation?",
            &["NumPy", "Pandas", "Matplotlib", "Scikit-learn"],
            "Pandas",
            10,
        ),
        graded(
            "tech_3",
            QuestionType::Scenario,
            Section::Aptitude,
            "logical-reasoning",
            "You notice that credit card transactions from a specific merchant always occur in round numbers ($100, $200, $300) and only during business hours. What type of fraud pattern might this indicate?",
            &[
                "Card skimming at the merchant location",
                "Employee fraud using stolen card numbers",
                "Legitimate business transactions - no fraud",
                "Account takeover fraud",
            ],
            "Employee fraud using stolen card numbers",
            15,
        ),
        graded(
            "tech_4",
            QuestionType::MultipleChoice,
            Section::Technical,
            "domain-knowledge",
            "What is the primary purpose of the \"3-2-1 rule\" in fraud detection?",
            &[
                "Three failed login attempts, two-factor authentication, one warning",
                "Three data sources, two validation methods, one decision",
                "A backup strategy: 3 copies, 2 different media, 1 offsite",
                "Three strikes policy for suspicious accounts",
            ],
            "Three data sources, two validation methods, one decision",
            15,
        ),
        graded(
            "tech_5",
            QuestionType::Scenario,
            Section::Domain,
            "fraud-types",
            "A customer reports multiple small charges on their card from unfamiliar merchants, all processed within a few hours. This pattern most likely indicates:",
            &[
                "Card testing fraud",
                "Account takeover",
                "Merchant fraud",
                "Identity theft",
            ],
            "Card testing fraud",
            15,
        ),
        graded(
            "tech_6",
            QuestionType::MultipleChoice,
            Section::Technical,
            "data-analysis",
            "Which machine learning technique is most commonly used for anomaly detection in fraud prevention?",
            &[
                "Linear Regression",
                "Decision Trees",
                "Clustering (e.g., K-means)",
                "Natural Language Processing",
            ],
            "Clustering (e.g., K-means)",
            15,
        ),
    ]);

    questions
}

const LIKERT_ITEMS: [(&str, &str, &str); 8] = [
    (
        "psych_1",
        "interest",
        "I enjoy solving puzzles and uncovering hidden patterns in data.",
    ),
    (
        "psych_2",
        "personality",
        "I prefer clear guidelines and structured workflows over ambiguous tasks.",
    ),
    (
        "psych_3",
        "motivation",
        "I am motivated to work on preventing wrongdoing and protecting organizations from fraud.",
    ),
    (
        "psych_4",
        "personality",
        "I pay attention to small details that others might overlook.",
    ),
    (
        "psych_5",
        "interest",
        "I find it fascinating to understand how different types of fraud schemes work.",
    ),
    (
        "psych_6",
        "motivation",
        "I am persistent when investigating complex problems, even when progress is slow.",
    ),
    (
        "psych_7",
        "personality",
        "I maintain high ethical standards even under pressure.",
    ),
    (
        "psych_8",
        "interest",
        "I would enjoy analyzing financial transactions to identify suspicious patterns.",
    ),
];

#[allow(clippy::too_many_arguments)]
fn graded(
    id: &str,
    kind: QuestionType,
    section: Section,
    category: &str,
    prompt: &str,
    options: &[&str],
    correct: &str,
    points: u32,
) -> Question {
    Question {
        id: QuestionId::new(id),
        kind,
        section,
        category: category.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        scale: None,
        correct_answer: Some(AnswerValue::text(correct)),
        points: Some(points),
    }
}

/// Reference description of a suggested career path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerPathProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub salary: &'static str,
}

pub fn career_path_profiles() -> &'static [CareerPathProfile] {
    &CAREER_PATHS
}

static CAREER_PATHS: [CareerPathProfile; 5] = [
    CareerPathProfile {
        title: "Fraud Analyst",
        description: "Monitor and investigate suspicious financial activities",
        requirements: &[
            "Data analysis skills",
            "Attention to detail",
            "Basic programming",
        ],
        salary: "$45,000 - $75,000",
    },
    CareerPathProfile {
        title: "AML Compliance Officer",
        description: "Ensure adherence to anti-money laundering regulations",
        requirements: &[
            "Regulatory knowledge",
            "Risk assessment",
            "Documentation skills",
        ],
        salary: "$60,000 - $95,000",
    },
    CareerPathProfile {
        title: "Cyber Fraud Specialist",
        description: "Detect and prevent cyber-based fraud attempts",
        requirements: &[
            "Cybersecurity knowledge",
            "Technical skills",
            "Incident response",
        ],
        salary: "$65,000 - $110,000",
    },
    CareerPathProfile {
        title: "Financial Crime Investigator",
        description: "Lead investigations on complex fraud schemes",
        requirements: &[
            "Investigation skills",
            "Legal knowledge",
            "Advanced analytics",
        ],
        salary: "$70,000 - $120,000",
    },
    CareerPathProfile {
        title: "Risk Management Analyst",
        description: "Analyze and mitigate operational fraud risks",
        requirements: &["Risk modeling", "Statistical analysis", "Business acumen"],
        salary: "$55,000 - $90,000",
    },
];

/// Depth of the suggested learning curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStage {
    Beginner,
    Intermediate,
    Advanced,
}

impl LearningStage {
    pub const fn for_recommendation(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::HighlyRecommended => Self::Advanced,
            Recommendation::Recommended => Self::Intermediate,
            Recommendation::ConsiderAlternatives | Recommendation::NotRecommended => {
                Self::Beginner
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

pub fn learning_path(stage: LearningStage) -> &'static [&'static str] {
    match stage {
        LearningStage::Beginner => &[
            "Fraud Fundamentals Course",
            "Introduction to Data Analysis",
            "Basic Python Programming",
            "Compliance and Ethics Training",
        ],
        LearningStage::Intermediate => &[
            "Advanced Statistical Analysis",
            "Machine Learning for Fraud Detection",
            "SQL for Data Analysis",
            "Financial Crime Typologies",
        ],
        LearningStage::Advanced => &[
            "Advanced ML Algorithms",
            "Forensic Accounting",
            "Regulatory Frameworks",
            "Real-world Case Studies",
        ],
    }
}

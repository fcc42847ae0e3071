// Title recommender: maps a grade to a blog title strategy.
//
// Only low-competition keywords get a concrete title template. For anything
// more crowded the useful advice is to split the keyword further.

use serde::Serialize;

use crate::models::Grade;

/// Advice shown instead of a template for crowded or unscoreable keywords.
pub const DECOMPOSE_ADVISORY: &str =
    "Competition is high. Rather than polishing a title, break this keyword \
     into narrower long-tail variants and analyze those instead.";

/// A fill-in template plus one worked example for a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSuggestion {
    pub template: String,
    pub example: String,
}

/// Either a title to write or an advisory. Never both, never neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    Title {
        grade: Grade,
        suggestion: TitleSuggestion,
    },
    Advisory {
        message: String,
    },
}

impl Recommendation {
    pub fn suggestion(&self) -> Option<&TitleSuggestion> {
        match self {
            Recommendation::Title { suggestion, .. } => Some(suggestion),
            Recommendation::Advisory { .. } => None,
        }
    }
}

/// Recommend a title strategy for a keyword of the given grade.
pub fn recommend(keyword: &str, grade: Grade) -> Recommendation {
    let suggestion = match grade {
        Grade::Golden => TitleSuggestion {
            template: format!("🔥 {keyword} [key information hook] [number/secret]"),
            example: format!("🔥 {keyword}: 5 foolproof secrets (ready in 10 minutes)"),
        },
        Grade::Good => TitleSuggestion {
            template: format!("📌 {keyword} core summary | [specific problem solved]"),
            example: format!("📌 {keyword} core summary | the common mistake, fixed for good"),
        },
        Grade::Caution | Grade::RedOcean | Grade::InsufficientData => {
            return Recommendation::Advisory {
                message: DECOMPOSE_ADVISORY.to_string(),
            };
        }
    };
    Recommendation::Title { grade, suggestion }
}

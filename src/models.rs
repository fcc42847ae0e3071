// Data models: the types that flow between the parser, scorer and output.
//
// Kept separate from the parsing and scoring code so the output layer can use
// them without depending on either.

use serde::{Deserialize, Serialize};

use crate::input::parser::ParseError;

/// One parsed input line: keyword, monthly search volume, total document count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    pub search_volume: i64,
    pub document_count: i64,
}

/// Competition tier derived from the document/search ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Golden,
    Good,
    Caution,
    RedOcean,
    InsufficientData,
}

impl Grade {
    pub const ALL: [Grade; 5] = [
        Grade::Golden,
        Grade::Good,
        Grade::Caution,
        Grade::RedOcean,
        Grade::InsufficientData,
    ];

    /// Machine-readable name, also accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Golden => "golden",
            Grade::Good => "good",
            Grade::Caution => "caution",
            Grade::RedOcean => "red_ocean",
            Grade::InsufficientData => "insufficient_data",
        }
    }

    /// Human-facing label used in the table and the CSV export.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Golden => "🥇 Golden keyword",
            Grade::Good => "🥈 Good keyword",
            Grade::Caution => "🥉 Caution keyword",
            Grade::RedOcean => "🚨 Red ocean",
            Grade::InsufficientData => "Insufficient data",
        }
    }

    /// Competition level in words.
    pub fn description(&self) -> &'static str {
        match self {
            Grade::Golden => "very low",
            Grade::Good => "moderate",
            Grade::Caution => "fierce",
            Grade::RedOcean => "very high",
            Grade::InsufficientData => "zero search volume",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = Grade::ALL.iter().map(|g| g.as_str()).collect();
                format!("unknown grade '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Score and grade derived from a record. Has no lifecycle of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Rounded ratio, or 0.0 as a sentinel when the grade is `InsufficientData`.
    pub score: f64,
    pub grade: Grade,
    pub description: &'static str,
}

impl ScoreResult {
    /// False for the zero-volume sentinel, which must not be ranked against real scores.
    pub fn is_comparable(&self) -> bool {
        self.grade != Grade::InsufficientData
    }
}

/// A record enriched with its score, one per valid input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRow {
    /// 1-based position in the submitted text
    pub line_number: usize,
    #[serde(flatten)]
    pub record: KeywordRecord,
    #[serde(flatten)]
    pub result: ScoreResult,
}

/// A rejected input line, kept so the caller can show it without aborting the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineDiagnostic {
    pub line_number: usize,
    pub line: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: ParseError,
}

fn serialize_display<S: serde::Serializer>(
    value: &ParseError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

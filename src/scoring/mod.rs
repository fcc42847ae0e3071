// Scoring: competition ratio and grade classification.

pub mod difficulty;

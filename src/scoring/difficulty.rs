// Competition score formula.
//
// score = document_count / search_volume, rounded to two decimals. Fewer
// documents per search means a less saturated keyword. The rounded score is
// what gets graded, so the number in the table always agrees with its tier.

use crate::models::{Grade, ScoreResult};

/// Inclusive upper bounds for each grade.
///
/// A score at or below `golden_max` is Golden, at or below `good_max` is Good,
/// at or below `caution_max` is Caution, and anything above is a red ocean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeThresholds {
    pub golden_max: f64,
    pub good_max: f64,
    pub caution_max: f64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            golden_max: 5.0,
            good_max: 15.0,
            caution_max: 30.0,
        }
    }
}

impl GradeThresholds {
    /// Check the bounds are finite, non-negative and strictly increasing.
    pub fn validate(&self) -> anyhow::Result<()> {
        let bounds = [self.golden_max, self.good_max, self.caution_max];
        if bounds.iter().any(|b| !b.is_finite() || *b < 0.0) {
            anyhow::bail!("grade thresholds must be finite and non-negative: {bounds:?}");
        }
        if !(self.golden_max < self.good_max && self.good_max < self.caution_max) {
            anyhow::bail!(
                "grade thresholds must be strictly increasing \
                 (golden {} < good {} < caution {})",
                self.golden_max,
                self.good_max,
                self.caution_max
            );
        }
        Ok(())
    }

    /// Determine the grade for an already-rounded score.
    pub fn grade(&self, score: f64) -> Grade {
        match score {
            s if s <= self.golden_max => Grade::Golden,
            s if s <= self.good_max => Grade::Good,
            s if s <= self.caution_max => Grade::Caution,
            _ => Grade::RedOcean,
        }
    }
}

/// Round to two decimal places.
///
/// Rounds the exact binary value with ties to even, so 0.125 becomes 0.12 and
/// 30.005 (stored as 30.00499...) becomes 30.0. Scaling by 100 first would
/// round both up.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Score a keyword with the default thresholds.
pub fn score(document_count: i64, search_volume: i64) -> ScoreResult {
    score_with(&GradeThresholds::default(), document_count, search_volume)
}

/// Score a keyword against a custom set of thresholds.
///
/// A zero search volume has no meaningful ratio: the result is graded
/// `InsufficientData` and carries a 0.0 sentinel score.
pub fn score_with(
    thresholds: &GradeThresholds,
    document_count: i64,
    search_volume: i64,
) -> ScoreResult {
    if search_volume == 0 {
        return ScoreResult {
            score: 0.0,
            grade: Grade::InsufficientData,
            description: Grade::InsufficientData.description(),
        };
    }

    let score = round2(document_count as f64 / search_volume as f64);
    let grade = thresholds.grade(score);

    ScoreResult {
        score,
        grade,
        description: grade.description(),
    }
}

// Analysis pipeline: one pasted submission in, a ranked keyword table out.
//
// Stateless per call. Each non-blank line is parsed and scored on its own;
// a bad line becomes a diagnostic and the rest of the input still runs.
// Rows are then ranked lowest score first, with zero-volume rows (whose 0.0
// is only a sentinel) kept after every real score.

use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::input::parser::parse_line;
use crate::models::{AnalysisRow, LineDiagnostic};
use crate::recommend::title::{recommend, Recommendation};
use crate::scoring::difficulty::{score_with, GradeThresholds};

/// The result of analyzing one submission.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Valid rows, ranked (see [`rank_rows`])
    pub rows: Vec<AnalysisRow>,
    /// Rejected lines, in input order
    pub diagnostics: Vec<LineDiagnostic>,
    /// Blank lines ignored before parsing
    pub skipped_blank: usize,
}

/// A submission that produced nothing to rank.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("no valid keyword rows to analyze ({} line(s) rejected); check the input format", .diagnostics.len())]
    EmptyResult { diagnostics: Vec<LineDiagnostic> },
}

impl Analysis {
    /// The most favorable keyword: the first row after ranking.
    pub fn best(&self) -> Option<&AnalysisRow> {
        self.rows.first()
    }

    /// Title recommendation for the best row.
    pub fn recommendation(&self) -> Option<Recommendation> {
        self.best()
            .map(|row| recommend(&row.record.keyword, row.result.grade))
    }
}

/// Analyze with the default grade thresholds.
pub fn analyze(input: &str) -> Result<Analysis, AnalysisError> {
    analyze_with(input, &GradeThresholds::default())
}

/// Parse, score and rank every line of a submission.
pub fn analyze_with(
    input: &str,
    thresholds: &GradeThresholds,
) -> Result<Analysis, AnalysisError> {
    let mut rows = Vec::new();
    let mut diagnostics = Vec::new();
    let mut skipped_blank = 0;

    for (idx, line) in input.lines().enumerate() {
        let line_number = idx + 1;
        if line.trim().is_empty() {
            skipped_blank += 1;
            continue;
        }

        match parse_line(line) {
            Ok(record) => {
                let result = score_with(thresholds, record.document_count, record.search_volume);
                debug!(
                    line = line_number,
                    keyword = %record.keyword,
                    score = result.score,
                    grade = %result.grade,
                    "Scored keyword"
                );
                rows.push(AnalysisRow {
                    line_number,
                    record,
                    result,
                });
            }
            Err(error) => {
                warn!(line = line_number, error = %error, "Rejected input line");
                diagnostics.push(LineDiagnostic {
                    line_number,
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    if rows.is_empty() {
        return Err(AnalysisError::EmptyResult { diagnostics });
    }

    rank_rows(&mut rows);
    info!(
        rows = rows.len(),
        rejected = diagnostics.len(),
        "Analysis complete"
    );

    Ok(Analysis {
        rows,
        diagnostics,
        skipped_blank,
    })
}

/// Sort rows ascending by score, keeping input order for ties.
///
/// Zero-volume rows go after every scored row since their 0.0 is not a score.
pub fn rank_rows(rows: &mut [AnalysisRow]) {
    rows.sort_by(compare_rows);
}

fn compare_rows(a: &AnalysisRow, b: &AnalysisRow) -> Ordering {
    match (a.result.is_comparable(), b.result.is_comparable()) {
        (true, true) => a.result.score.total_cmp(&b.result.score),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

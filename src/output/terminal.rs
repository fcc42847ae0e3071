// Colored terminal output for keyword tables and recommendations.
//
// This module handles all terminal-specific formatting: colors, the ranked
// table, diagnostics. main.rs delegates here.

use colored::Colorize;

use crate::models::{AnalysisRow, Grade, LineDiagnostic, ScoreResult};
use crate::pipeline::analysis::Analysis;
use crate::recommend::title::Recommendation;
use crate::scoring::difficulty::GradeThresholds;

/// Display the ranked keyword table. The best (first) row is highlighted.
pub fn display_keyword_table(analysis: &Analysis) {
    let rows = &analysis.rows;
    println!(
        "\n{}",
        format!("=== Keyword Analysis ({} keywords, easiest first) ===", rows.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<30} {:>9} {:>11} {:>8}  {:<20} {:<18}",
        "Rank".dimmed(),
        "Keyword".dimmed(),
        "Searches".dimmed(),
        "Documents".dimmed(),
        "Score".dimmed(),
        "Grade".dimmed(),
        "Competition".dimmed(),
    );
    println!("  {}", "-".repeat(108).dimmed());

    for (i, row) in rows.iter().enumerate() {
        let keyword = super::pad_to_width(&super::truncate_width(&row.record.keyword, 30), 30);
        let keyword = if i == 0 {
            keyword.green().bold()
        } else {
            keyword.normal()
        };
        let score = if row.result.is_comparable() {
            super::format_score(row.result.score)
        } else {
            "-".to_string()
        };

        println!(
            "  {:>4}. {} {:>9} {:>11} {:>8}  {:<20} {:<18}",
            i + 1,
            keyword,
            row.record.search_volume,
            row.record.document_count,
            score,
            colorize_grade(row.result.grade),
            row.result.description,
        );
    }

    println!();

    // Summary
    for grade in Grade::ALL {
        let count = rows.iter().filter(|r| r.result.grade == grade).count();
        if count > 0 {
            println!("  {} {}", colorize_grade(grade), count);
        }
    }
    if analysis.skipped_blank > 0 {
        println!(
            "  {}",
            format!("({} blank line(s) ignored)", analysis.skipped_blank).dimmed()
        );
    }
}

/// Print rejected lines to stderr. Each names the offending line.
pub fn display_diagnostics(diagnostics: &[LineDiagnostic]) {
    for diag in diagnostics {
        eprintln!(
            "  {} line {}: {}",
            "Warning:".yellow(),
            diag.line_number,
            diag.error
        );
    }
}

/// Display the best keyword and its title strategy.
pub fn display_recommendation(best: &AnalysisRow, recommendation: &Recommendation) {
    println!(
        "\n{}",
        format!("=== Title Strategy: {} ===", best.record.keyword).bold()
    );
    let score = if best.result.is_comparable() {
        super::format_score(best.result.score)
    } else {
        "n/a".to_string()
    };
    println!(
        "  Most favorable keyword: {} ({})  {}",
        best.record.keyword.bold(),
        score,
        colorize_grade(best.result.grade)
    );
    println!();

    match recommendation {
        Recommendation::Title { grade, suggestion } => {
            let heading = format!("Suggested template ({}):", grade.as_str());
            let heading = match grade {
                Grade::Golden => heading.green().bold(),
                _ => heading.yellow().bold(),
            };
            println!("  {} {}", heading, suggestion.template);
            println!("  {} {}", "Example title:".bold(), suggestion.example.cyan());
        }
        Recommendation::Advisory { message } => {
            println!("  {} {}", "Strategy:".blue().bold(), message);
        }
    }
}

/// Display the score for a single search-volume/document-count pair.
pub fn display_score(search_volume: i64, document_count: i64, result: &ScoreResult) {
    println!("  Searches: {search_volume}  Documents: {document_count}");
    if result.is_comparable() {
        println!("  Score: {}", super::format_score(result.score).bold());
    } else {
        println!("  Score: {}", "n/a".dimmed());
    }
    println!("  Grade: {}", colorize_grade(result.grade));
    println!("  Competition: {}", result.description);
}

/// Display the active grade thresholds.
pub fn display_thresholds(thresholds: &GradeThresholds) {
    println!("\n{}", "=== Grade Thresholds (documents per search) ===".bold());
    println!(
        "  {:<20} score <= {:.2}",
        colorize_grade(Grade::Golden),
        thresholds.golden_max
    );
    println!(
        "  {:<20} score <= {:.2}",
        colorize_grade(Grade::Good),
        thresholds.good_max
    );
    println!(
        "  {:<20} score <= {:.2}",
        colorize_grade(Grade::Caution),
        thresholds.caution_max
    );
    println!(
        "  {:<20} score >  {:.2}",
        colorize_grade(Grade::RedOcean),
        thresholds.caution_max
    );
    println!(
        "  {:<20} search volume is 0",
        colorize_grade(Grade::InsufficientData)
    );
}

/// Colorize a grade label.
fn colorize_grade(grade: Grade) -> colored::ColoredString {
    let label = grade.label();
    match grade {
        Grade::Golden => label.green().bold(),
        Grade::Good => label.bright_green(),
        Grade::Caution => label.yellow(),
        Grade::RedOcean => label.red().bold(),
        Grade::InsufficientData => label.dimmed(),
    }
}

// Unit tests for scoring and output functions.
//
// Tests isolated pure functions: grade boundaries (closed on the upper
// bound), the zero-volume sentinel, rounding, Grade naming, and the
// width-aware truncation and padding used by the terminal table.

use kwscout::models::Grade;
use kwscout::output::{display_width, pad_to_width, truncate_width};
use kwscout::scoring::difficulty::{round2, score, GradeThresholds};

// ============================================================
// Grade boundaries: inclusive upper bounds
// ============================================================

#[test]
fn grade_exact_golden_boundary() {
    // 500 / 100 = 5.00
    assert_eq!(score(500, 100).grade, Grade::Golden);
}

#[test]
fn grade_just_above_golden() {
    // 501 / 100 = 5.01
    assert_eq!(score(501, 100).grade, Grade::Good);
}

#[test]
fn grade_exact_good_boundary() {
    assert_eq!(score(1500, 100).grade, Grade::Good);
}

#[test]
fn grade_just_above_good() {
    assert_eq!(score(1501, 100).grade, Grade::Caution);
}

#[test]
fn grade_exact_caution_boundary() {
    assert_eq!(score(3000, 100).grade, Grade::Caution);
}

#[test]
fn grade_just_above_caution() {
    assert_eq!(score(3001, 100).grade, Grade::RedOcean);
}

#[test]
fn thresholds_grade_directly() {
    let t = GradeThresholds::default();
    assert_eq!(t.grade(0.0), Grade::Golden);
    assert_eq!(t.grade(5.0), Grade::Golden);
    assert_eq!(t.grade(5.01), Grade::Good);
    assert_eq!(t.grade(15.0), Grade::Good);
    assert_eq!(t.grade(15.01), Grade::Caution);
    assert_eq!(t.grade(30.0), Grade::Caution);
    assert_eq!(t.grade(30.01), Grade::RedOcean);
}

#[test]
fn grade_uses_rounded_score() {
    // 50004 / 10000 = 5.0004, which rounds to 5.00 and stays Golden
    let result = score(50004, 10000);
    assert_eq!(result.score, 5.0);
    assert_eq!(result.grade, Grade::Golden);
}

#[test]
fn half_cent_ratio_rounds_on_binary_value() {
    // 1 / 8 = 0.125 exactly; the tie goes to the even digit
    assert_eq!(score(1, 8).score, 0.12);
    assert_eq!(score(3, 8).score, 0.38);
}

#[test]
fn golden_boundary_half_cent_stays_golden() {
    // 1001 / 200 = 5.005, stored just below, rounds to 5.00
    let result = score(1001, 200);
    assert_eq!(result.score, 5.0);
    assert_eq!(result.grade, Grade::Golden);
}

#[test]
fn caution_boundary_half_cent_stays_caution() {
    // 6001 / 200 = 30.005, stored just below, rounds to 30.00
    let result = score(6001, 200);
    assert_eq!(result.score, 30.0);
    assert_eq!(result.grade, Grade::Caution);
}

// ============================================================
// Zero search volume
// ============================================================

#[test]
fn zero_volume_is_insufficient_regardless_of_documents() {
    for docs in [0, 1, 1_000_000] {
        let result = score(docs, 0);
        assert_eq!(result.grade, Grade::InsufficientData);
        assert_eq!(result.score, 0.0);
        assert!(!result.is_comparable());
    }
}

// ============================================================
// Score value
// ============================================================

#[test]
fn score_is_rounded_ratio() {
    for (docs, volume) in [(6470, 2220), (73000, 4500), (320000, 18000), (7, 3)] {
        let expected = round2(docs as f64 / volume as f64);
        assert_eq!(score(docs, volume).score, expected, "{docs}/{volume}");
    }
}

#[test]
fn score_two_decimals() {
    assert_eq!(score(320000, 18000).score, 17.78);
    assert_eq!(score(1, 3).score, 0.33);
    assert_eq!(score(2, 3).score, 0.67);
}

#[test]
fn zero_documents_scores_zero_but_stays_comparable() {
    let result = score(0, 500);
    assert_eq!(result.score, 0.0);
    assert!(result.is_comparable());
}

#[test]
fn scoring_is_idempotent() {
    assert_eq!(score(73000, 4500), score(73000, 4500));
    assert_eq!(score(12, 0), score(12, 0));
}

// ============================================================
// Grade naming
// ============================================================

#[test]
fn grade_descriptions() {
    assert_eq!(Grade::Golden.description(), "very low");
    assert_eq!(Grade::Good.description(), "moderate");
    assert_eq!(Grade::Caution.description(), "fierce");
    assert_eq!(Grade::RedOcean.description(), "very high");
    assert_eq!(Grade::InsufficientData.description(), "zero search volume");
}

#[test]
fn grade_from_str_accepts_as_str() {
    for grade in Grade::ALL {
        assert_eq!(grade.as_str().parse::<Grade>().unwrap(), grade);
    }
}

#[test]
fn grade_from_str_is_lenient_on_case_and_dashes() {
    assert_eq!("RED-OCEAN".parse::<Grade>().unwrap(), Grade::RedOcean);
    assert!("platinum".parse::<Grade>().is_err());
}

// ============================================================
// truncate_width / pad_to_width: terminal column handling
// ============================================================

#[test]
fn truncate_empty_string() {
    assert_eq!(truncate_width("", 10), "");
}

#[test]
fn truncate_exactly_at_limit() {
    assert_eq!(truncate_width("hello", 5), "hello");
}

#[test]
fn truncate_ascii_over_limit() {
    assert_eq!(truncate_width("hello world", 8), "hello...");
}

#[test]
fn hangul_counts_two_columns() {
    assert_eq!(display_width("고등어조림"), 10);
    assert_eq!(display_width("abc고"), 5);
}

#[test]
fn truncate_hangul_by_columns() {
    // 10 columns into 7: two syllables (4) plus "..." (3)
    let cut = truncate_width("고등어조림", 7);
    assert_eq!(cut, "고등...");
    assert!(display_width(&cut) <= 7);
}

#[test]
fn truncate_never_splits_a_wide_char() {
    // 8 columns leaves a budget of 5; a third syllable would need 6
    assert_eq!(truncate_width("고등어조림", 8), "고등...");
}

#[test]
fn pad_hangul_to_column_width() {
    let padded = pad_to_width("고등어", 10);
    assert_eq!(padded, "고등어    ");
    assert_eq!(display_width(&padded), 10);
}

#[test]
fn pad_mixed_rows_line_up() {
    assert_eq!(
        display_width(&pad_to_width("백종원 고등어조림", 30)),
        display_width(&pad_to_width("mackerel stew", 30))
    );
}

#[test]
fn pad_leaves_wide_text_alone() {
    assert_eq!(pad_to_width("longer than", 4), "longer than");
}

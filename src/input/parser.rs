// Line parser: turns one pasted row into a KeywordRecord.
//
// Rows copied out of keyword tools arrive either comma- or tab-separated.
// Each delimiter is tried in order; the first one that yields exactly three
// non-empty fields wins.

use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

use crate::models::KeywordRecord;

/// Number of fields every row must carry: keyword, search volume, document count.
pub const FIELD_COUNT: usize = 3;

/// A field separator the parser is willing to split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

/// Delimiters tried by [`parse_line`], in order.
pub const DEFAULT_DELIMITERS: [Delimiter; 2] = [Delimiter::Comma, Delimiter::Tab];

/// Why a single line was rejected. Never fatal to the rest of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("'{line}' is not in 'keyword, search volume, document count' form ({found} fields found)")]
    MalformedLine { line: String, found: usize },

    #[error("'{line}': {field} '{value}' is not a whole number")]
    NonNumericField {
        line: String,
        field: &'static str,
        value: String,
    },

    #[error("'{line}': {field} '{value}' is out of range")]
    OutOfRange {
        line: String,
        field: &'static str,
        value: String,
    },

    #[error("'{line}': {field} must not be negative (got {value})")]
    NegativeField {
        line: String,
        field: &'static str,
        value: i64,
    },
}

/// Split a line on one delimiter, trimming fields and dropping empty ones.
pub fn split_fields(line: &str, delimiter: Delimiter) -> Vec<&str> {
    line.split(delimiter.as_char())
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// Parse a line with the default comma-then-tab policy.
pub fn parse_line(line: &str) -> Result<KeywordRecord, ParseError> {
    parse_line_with(line, &DEFAULT_DELIMITERS)
}

/// Parse a line, trying each delimiter in order until one yields three fields.
pub fn parse_line_with(line: &str, delimiters: &[Delimiter]) -> Result<KeywordRecord, ParseError> {
    let mut found = 0;
    let mut fields = None;
    for &delimiter in delimiters {
        let parts = split_fields(line, delimiter);
        if parts.len() == FIELD_COUNT {
            fields = Some(parts);
            break;
        }
        // Report what the first (preferred) delimiter saw
        if delimiter == delimiters[0] {
            found = parts.len();
        }
    }

    let Some(fields) = fields else {
        return Err(ParseError::MalformedLine {
            line: line.to_string(),
            found,
        });
    };

    let search_volume = parse_count(line, "search volume", fields[1])?;
    let document_count = parse_count(line, "document count", fields[2])?;

    Ok(KeywordRecord {
        keyword: fields[0].to_string(),
        search_volume,
        document_count,
    })
}

fn parse_count(line: &str, field: &'static str, value: &str) -> Result<i64, ParseError> {
    let parsed: i64 = value.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::OutOfRange {
            line: line.to_string(),
            field,
            value: value.to_string(),
        },
        _ => ParseError::NonNumericField {
            line: line.to_string(),
            field,
            value: value.to_string(),
        },
    })?;
    if parsed < 0 {
        return Err(ParseError::NegativeField {
            line: line.to_string(),
            field,
            value: parsed,
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        let record = parse_line("a, 10, 20").unwrap();
        assert_eq!(record.keyword, "a");
        assert_eq!(record.search_volume, 10);
        assert_eq!(record.document_count, 20);
    }

    #[test]
    fn test_tab_separated_matches_comma() {
        assert_eq!(parse_line("a\t10\t20").unwrap(), parse_line("a, 10, 20").unwrap());
    }

    #[test]
    fn test_keyword_with_spaces_is_kept_whole() {
        let record = parse_line("백종원 고등어조림, 18000, 320000").unwrap();
        assert_eq!(record.keyword, "백종원 고등어조림");
    }

    #[test]
    fn test_tab_fallback_when_keyword_contains_comma() {
        // Comma split gives two fields, so the tab split is used instead
        let record = parse_line("salt, pepper\t100\t200").unwrap();
        assert_eq!(record.keyword, "salt, pepper");
        assert_eq!(record.search_volume, 100);
    }

    #[test]
    fn test_empty_fields_are_dropped_before_count() {
        let record = parse_line("a,, 10 ,  , 20,").unwrap();
        assert_eq!(record.search_volume, 10);
        assert_eq!(record.document_count, 20);
    }

    #[test]
    fn test_two_fields_is_malformed() {
        let err = parse_line("a, 10").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line: "a, 10".to_string(),
                found: 2
            }
        );
    }

    #[test]
    fn test_non_numeric_volume() {
        let err = parse_line("a, x, 20").unwrap_err();
        assert!(matches!(
            err,
            ParseError::NonNumericField { field: "search volume", .. }
        ));
    }

    #[test]
    fn test_non_numeric_document_count() {
        let err = parse_line("a, 10, 2.5").unwrap_err();
        assert!(matches!(
            err,
            ParseError::NonNumericField { field: "document count", .. }
        ));
    }

    #[test]
    fn test_negative_rejected() {
        let err = parse_line("a, -10, 20").unwrap_err();
        assert!(matches!(err, ParseError::NegativeField { value: -10, .. }));
    }

    #[test]
    fn test_overflow_is_out_of_range() {
        let err = parse_line("a, 99999999999999999999, 20").unwrap_err();
        assert!(matches!(
            err,
            ParseError::OutOfRange { field: "search volume", .. }
        ));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_error_message_quotes_line() {
        let err = parse_line("only one field").unwrap_err();
        assert!(err.to_string().contains("'only one field'"));
    }

    #[test]
    fn test_crlf_is_trimmed() {
        let record = parse_line("a, 10, 20\r").unwrap();
        assert_eq!(record.document_count, 20);
    }

    #[test]
    fn test_tab_only_policy() {
        let err = parse_line_with("a, 10, 20", &[Delimiter::Tab]).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { found: 1, .. }));
    }
}

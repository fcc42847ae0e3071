// CSV export of the ranked keyword table.
//
// The file starts with a UTF-8 byte-order mark. Without it, spreadsheet tools
// open the file in a legacy code page and Hangul keywords come out garbled.

use chrono::NaiveDate;

use crate::models::AnalysisRow;

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &str = "\u{feff}";

pub const HEADER: [&str; 6] = [
    "keyword",
    "search_volume",
    "document_count",
    "score",
    "grade",
    "description",
];

/// Export filename for a given day, e.g. `keyword_analysis_20261016.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("keyword_analysis_{}.csv", date.format("%Y%m%d"))
}

/// Quote a field if it contains a delimiter, quote or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render rows (in the given order) as a complete CSV document, BOM included.
pub fn render(rows: &[AnalysisRow]) -> String {
    let mut out = String::from(UTF8_BOM);
    push_record(&mut out, HEADER.iter().copied());

    for row in rows {
        let search_volume = row.record.search_volume.to_string();
        let document_count = row.record.document_count.to_string();
        let score = super::format_score(row.result.score);
        push_record(
            &mut out,
            [
                row.record.keyword.as_str(),
                search_volume.as_str(),
                document_count.as_str(),
                score.as_str(),
                row.result.grade.label(),
                row.result.description,
            ],
        );
    }
    out
}

fn push_record<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let line: Vec<String> = fields.into_iter().map(escape_field).collect();
    out.push_str(&line.join(","));
    out.push_str("\r\n");
}

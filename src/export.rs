//! Attendance report export: pure row shaping plus CSV serialization.
//! The browser download itself lives in `utils::download`.

use std::fmt;

use crate::models::AttendanceRecord;
use crate::utils::INSTITUTION_NAME;

/// Which subset of the loaded records is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    All,
    PresentOnly,
    AbsentOnly,
}

impl ExportScope {
    pub fn label(&self) -> &'static str {
        match self {
            ExportScope::All => "All Students",
            ExportScope::PresentOnly => "Present Only",
            ExportScope::AbsentOnly => "Absent Only",
        }
    }

    fn matches(&self, present: bool) -> bool {
        match self {
            ExportScope::All => true,
            ExportScope::PresentOnly => present,
            ExportScope::AbsentOnly => !present,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ExportError {
    /// Nothing matched the selected scope; no file is produced.
    NoRecords,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoRecords => write!(f, "No records match the selected scope."),
        }
    }
}

/// Filter context printed in the report header.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMeta {
    pub department: String,
    pub year: String,
    pub date: String,
    pub session: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    /// present / total * 100, rounded to 2 decimals. 0 when total is 0.
    pub percentage: f64,
}

/// Summary over the whole loaded collection; the scope only narrows which
/// rows are listed, not the totals.
pub fn summarize(records: &[AttendanceRecord]) -> Summary {
    let total = records.len();
    let present = records.iter().filter(|r| r.present).count();
    let percentage = if total == 0 {
        0.0
    } else {
        (present as f64 / total as f64 * 10000.0).round() / 100.0
    };
    Summary {
        total,
        present,
        absent: total - present,
        percentage,
    }
}

/// Shape the report: header block, blank separator, column header, then one
/// row per record matching the scope.
pub fn build_rows(
    records: &[AttendanceRecord],
    scope: ExportScope,
    meta: &ReportMeta,
) -> Result<Vec<Vec<String>>, ExportError> {
    let matching: Vec<&AttendanceRecord> =
        records.iter().filter(|r| scope.matches(r.present)).collect();
    if matching.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let summary = summarize(records);
    let mut rows: Vec<Vec<String>> = vec![
        vec![INSTITUTION_NAME.to_string()],
        vec!["Department".to_string(), meta.department.clone()],
        vec!["Year".to_string(), meta.year.clone()],
        vec!["Date".to_string(), meta.date.clone()],
        vec!["Session".to_string(), meta.session.clone()],
        vec!["Scope".to_string(), scope.label().to_string()],
        vec!["Total".to_string(), summary.total.to_string()],
        vec!["Present".to_string(), summary.present.to_string()],
        vec!["Absent".to_string(), summary.absent.to_string()],
        vec![
            "Percentage".to_string(),
            format!("{:.2}", summary.percentage),
        ],
        vec![],
        vec![
            "Name".to_string(),
            "Exam No".to_string(),
            "Department".to_string(),
            "Year".to_string(),
            "Status".to_string(),
        ],
    ];

    for record in matching {
        rows.push(vec![
            record.name.clone(),
            record.exam_no.clone(),
            record.department.to_string(),
            record.year.to_string(),
            if record.present { "Present" } else { "Absent" }.to_string(),
        ]);
    }

    Ok(rows)
}

/// RFC 4180 style CSV: CRLF line ends, quote fields containing commas,
/// quotes or newlines.
pub fn to_csv(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|field| escape(field)).collect();
        out.push_str(&line.join(","));
        out.push_str("\r\n");
    }
    out
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    fn record(name: &str, present: bool) -> AttendanceRecord {
        AttendanceRecord {
            name: name.to_string(),
            exam_no: format!("21IT{}", name.len()),
            department: Department::IT,
            year: 4,
            present,
        }
    }

    fn meta() -> ReportMeta {
        ReportMeta {
            department: "IT".into(),
            year: "4".into(),
            date: "2026-08-27".into(),
            session: "Morning".into(),
        }
    }

    #[test]
    fn summary_counts_and_rounds_percentage() {
        let records = vec![record("a", true), record("bb", true), record("ccc", false)];
        let summary = summarize(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.present, 2);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.percentage, 66.67);
    }

    #[test]
    fn summary_of_empty_collection_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage, 0.0);
    }

    #[test]
    fn rows_contain_header_block_and_matching_records() {
        let records = vec![record("a", true), record("bb", false)];
        let rows = build_rows(&records, ExportScope::All, &meta()).unwrap();

        assert_eq!(rows[0], vec![INSTITUTION_NAME.to_string()]);
        assert_eq!(rows[5], vec!["Scope".to_string(), "All Students".to_string()]);
        assert_eq!(rows[6], vec!["Total".to_string(), "2".to_string()]);
        assert_eq!(rows[9], vec!["Percentage".to_string(), "50.00".to_string()]);
        assert!(rows[10].is_empty());
        // column header + 2 records
        assert_eq!(rows.len(), 12 + 2);
        assert_eq!(rows[12][4], "Present");
        assert_eq!(rows[13][4], "Absent");
    }

    #[test]
    fn scope_narrows_rows_but_not_summary() {
        let records = vec![record("a", true), record("bb", false), record("ccc", false)];
        let rows = build_rows(&records, ExportScope::PresentOnly, &meta()).unwrap();
        // summary still over the full collection
        assert_eq!(rows[6], vec!["Total".to_string(), "3".to_string()]);
        assert_eq!(rows[7], vec!["Present".to_string(), "1".to_string()]);
        // only one record row
        assert_eq!(rows.len(), 12 + 1);
        assert_eq!(rows[12][0], "a");
    }

    #[test]
    fn empty_scope_produces_no_file() {
        let records = vec![record("a", true)];
        let err = build_rows(&records, ExportScope::AbsentOnly, &meta()).unwrap_err();
        assert_eq!(err, ExportError::NoRecords);
        assert_eq!(
            build_rows(&[], ExportScope::All, &meta()).unwrap_err(),
            ExportError::NoRecords
        );
    }

    #[test]
    fn csv_escapes_commas_and_quotes() {
        let rows = vec![
            vec!["plain".to_string(), "with,comma".to_string()],
            vec!["say \"hi\"".to_string()],
        ];
        let csv = to_csv(&rows);
        assert_eq!(csv, "plain,\"with,comma\"\r\n\"say \"\"hi\"\"\"\r\n");
    }
}

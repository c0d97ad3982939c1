//! Two-column (name, value) report.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// Default header of the label column.
pub const NAME_COLUMN: &str = "Name";

/// Default header of the value column.
pub const VALUE_COLUMN: &str = "Value";

/// A single (label, value) row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportRow {
    name: String,
    value: String,
}

impl ReportRow {
    /// Creates a row.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the row label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the row as a `(name, value)` pair of string slices.
    #[must_use]
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.name, &self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for ReportRow {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// Ordered rows of a display report.
///
/// Rows keep insertion order. A `Report` handed out by
/// [`ProductReportBuilder`](crate::ProductReportBuilder) is read-only:
/// only the builder appends to it.
///
/// Serializes as a list of records keyed by the column headers:
///
/// ```json
/// [{"Name": "Type", "Value": "BulletCashflow"}, ...]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    columns: [String; 2],
    rows: Vec<ReportRow>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    /// Creates an empty report with the default `Name`/`Value` headers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_columns(NAME_COLUMN, VALUE_COLUMN)
    }

    /// Creates an empty report with custom column headers.
    #[must_use]
    pub fn with_columns(name_column: impl Into<String>, value_column: impl Into<String>) -> Self {
        Self {
            columns: [name_column.into(), value_column.into()],
            rows: Vec::new(),
        }
    }

    /// Returns the column headers.
    #[must_use]
    pub fn columns(&self) -> [&str; 2] {
        [&self.columns[0], &self.columns[1]]
    }

    /// Returns the rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Iterates the rows in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ReportRow> {
        self.rows.iter()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the report has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the value of the first row with the given label.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.name == name)
            .map(ReportRow::value)
    }

    /// Returns the values of every row with the given label, in order.
    pub fn values<'r>(&'r self, name: &'r str) -> impl Iterator<Item = &'r str> + 'r {
        self.rows
            .iter()
            .filter(move |row| row.name == name)
            .map(ReportRow::value)
    }

    /// Returns the rows as `[name, value]` records, ready for a table writer.
    #[must_use]
    pub fn to_records(&self) -> Vec<[String; 2]> {
        self.rows
            .iter()
            .map(|row| [row.name.clone(), row.value.clone()])
            .collect()
    }

    /// Serializes the report to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub(crate) fn extend(&mut self, rows: impl IntoIterator<Item = ReportRow>) {
        self.rows.extend(rows);
    }
}

impl<'r> IntoIterator for &'r Report {
    type Item = &'r ReportRow;
    type IntoIter = std::slice::Iter<'r, ReportRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for Report {
    type Item = ReportRow;
    type IntoIter = std::vec::IntoIter<ReportRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

struct RowRecord<'r> {
    columns: &'r [String; 2],
    row: &'r ReportRow,
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&self.columns[0], &self.row.name)?;
        map.serialize_entry(&self.columns[1], &self.row.value)?;
        map.end()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowRecord {
                columns: &self.columns,
                row,
            })?;
        }
        seq.end()
    }
}

/// Plain-text two-column table.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.name.chars().count())
            .chain(std::iter::once(self.columns[0].chars().count()))
            .max()
            .unwrap_or(0);

        writeln!(f, "{:<width$} | {}", self.columns[0], self.columns[1])?;
        writeln!(f, "{}-+-{}", "-".repeat(width), "-".repeat(self.columns[1].chars().count()))?;
        for row in &self.rows {
            writeln!(f, "{:<width$} | {}", row.name, row.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let mut report = Report::new();
        report.extend([
            ReportRow::new("Type", "BulletCashflow"),
            ReportRow::new("Notional", "1000000"),
            ReportRow::new("Type", "RFRSwap"),
        ]);
        report
    }

    #[test]
    fn test_default_columns() {
        let report = Report::new();
        assert_eq!(report.columns(), ["Name", "Value"]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_lookup() {
        let report = sample();
        assert_eq!(report.len(), 3);
        assert_eq!(report.get("Type"), Some("BulletCashflow"));
        assert_eq!(report.get("Spread"), None);
        assert_eq!(
            report.values("Type").collect::<Vec<_>>(),
            vec!["BulletCashflow", "RFRSwap"]
        );
    }

    #[test]
    fn test_records_keep_order() {
        let records = sample().to_records();
        assert_eq!(records[0], ["Type".to_string(), "BulletCashflow".to_string()]);
        assert_eq!(records[2][1], "RFRSwap");
    }

    #[test]
    fn test_json_uses_column_headers() {
        let json = sample().to_json().unwrap();
        assert!(json.starts_with(r#"[{"Name":"Type","Value":"BulletCashflow"}"#));

        let mut custom = Report::with_columns("Field", "Shown");
        custom.extend([ReportRow::from(("Spread", "0.001"))]);
        assert_eq!(custom.to_json().unwrap(), r#"[{"Field":"Spread","Shown":"0.001"}]"#);
    }

    #[test]
    fn test_display_table() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name     | Value");
        assert_eq!(lines[1], "---------+------");
        assert_eq!(lines[2], "Type     | BulletCashflow");
        assert_eq!(lines[3], "Notional | 1000000");
    }
}

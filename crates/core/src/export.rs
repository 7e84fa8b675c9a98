//! CSV export of the catalog and the usage history.
//!
//! Both exports are unbounded full dumps. Optional fields render as empty
//! strings and timestamps as milliseconds since the Unix epoch so the files
//! load cleanly into spreadsheets and notebooks.

use crate::types::Timestamp;

/// Header of `catalog.csv`, in column order.
pub const CATALOG_COLUMNS: &[&str] = &[
    "id",
    "category",
    "brand",
    "color",
    "pattern",
    "title",
    "description",
    "price",
    "last_activity",
];

/// Header of `activity.csv`, in column order.
pub const ACTIVITY_COLUMNS: &[&str] = &["id", "cid", "time", "note"];

/// One catalog item, borrowed for export.
#[derive(Debug, Clone, Copy)]
pub struct CatalogRow<'a> {
    pub id: &'a str,
    pub category: Option<&'a str>,
    pub brand: Option<&'a str>,
    pub color: Option<&'a str>,
    pub pattern: Option<&'a str>,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub price: Option<f64>,
    pub last_activity: Option<Timestamp>,
}

impl CatalogRow<'_> {
    /// Short text fields are trimmed; the description is kept verbatim.
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            trimmed(self.category),
            trimmed(self.brand),
            trimmed(self.color),
            trimmed(self.pattern),
            trimmed(self.title),
            self.description.unwrap_or_default().to_string(),
            format_price(self.price),
            format_epoch_millis(self.last_activity),
        ]
    }
}

/// One usage event, borrowed for export.
#[derive(Debug, Clone, Copy)]
pub struct ActivityRow<'a> {
    pub id: &'a str,
    pub cid: &'a str,
    pub ts: Timestamp,
    pub note: Option<&'a str>,
}

impl ActivityRow<'_> {
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.cid.to_string(),
            self.ts.timestamp_millis().to_string(),
            self.note.unwrap_or_default().to_string(),
        ]
    }
}

/// Render the catalog export.
pub fn catalog_csv<'a>(rows: impl IntoIterator<Item = CatalogRow<'a>>) -> String {
    let mut table = CsvTable::new(CATALOG_COLUMNS);
    for row in rows {
        table.push_row(row.fields());
    }
    table.finish()
}

/// Render the usage history export.
pub fn activity_csv<'a>(rows: impl IntoIterator<Item = ActivityRow<'a>>) -> String {
    let mut table = CsvTable::new(ACTIVITY_COLUMNS);
    for row in rows {
        table.push_row(row.fields());
    }
    table.finish()
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Two-decimal price, or empty when unset.
pub fn format_price(price: Option<f64>) -> String {
    price.map(|p| format!("{p:.2}")).unwrap_or_default()
}

/// Milliseconds since the epoch, or empty when unset.
pub fn format_epoch_millis(ts: Option<Timestamp>) -> String {
    ts.map(|t| t.timestamp_millis().to_string())
        .unwrap_or_default()
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// Escape a value for CSV: wrap in quotes if it contains a comma, quote or
/// line break.
fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Line-oriented CSV builder. Every record, including the last, ends with `\n`.
struct CsvTable {
    out: String,
}

impl CsvTable {
    fn new(header: &[&str]) -> Self {
        let mut table = Self { out: String::new() };
        table.push_row(header.iter().map(|h| h.to_string()));
        table
    }

    fn push_row(&mut self, fields: impl IntoIterator<Item = String>) {
        let escaped: Vec<String> = fields.into_iter().map(|f| csv_escape(&f)).collect();
        self.out.push_str(&escaped.join(","));
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

/// Whether a dimension describes geography.
///
/// Decided once when the dimension is decoded; nothing downstream re-derives
/// it from labels or type strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKind {
    /// Geography dimension: positioned first, never truncated
    Area,
    #[default]
    Standard,
}

/// One category value within a dimension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionOption {
    /// Ordering key, often numeric
    pub code: String,
    pub label: String,
}

impl DimensionOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// A categorical axis of a dataset together with the options to display.
///
/// `total_items` is the upstream count and may exceed `options.len()` when
/// only a capped page of options was fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DimensionRecord")]
pub struct Dimension {
    pub id: String,
    pub label: String,
    pub kind: DimensionKind,
    pub total_items: usize,
    pub options: Vec<DimensionOption>,
}

impl Dimension {
    /// Build a standard dimension whose total equals the number of options
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<DimensionOption>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: DimensionKind::Standard,
            total_items: options.len(),
            options,
        }
    }

    pub fn with_kind(mut self, kind: DimensionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.total_items = total_items;
        self
    }

    pub fn is_area_type(&self) -> bool {
        self.kind == DimensionKind::Area
    }
}

// Wire shape: `kind` and `total_items` are optional in page input files.
#[derive(Deserialize)]
struct DimensionRecord {
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    kind: DimensionKind,
    #[serde(default)]
    total_items: Option<usize>,
    #[serde(default)]
    options: Vec<DimensionOption>,
}

impl From<DimensionRecord> for Dimension {
    fn from(record: DimensionRecord) -> Self {
        let total_items = record.total_items.unwrap_or(record.options.len());
        Self {
            id: record.id,
            label: record.label,
            kind: record.kind,
            total_items,
            options: record.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_items_defaults_to_option_count() {
        let json = r#"{
            "id": "aggregate",
            "label": "Aggregate",
            "options": [
                {"code": "cpih1dim1A0", "label": "Overall Index"},
                {"code": "cpih1dim1G10100", "label": "Food"}
            ]
        }"#;

        let dim: Dimension = serde_json::from_str(json).unwrap();
        assert_eq!(dim.total_items, 2);
        assert_eq!(dim.kind, DimensionKind::Standard);
        assert!(!dim.is_area_type());
    }

    #[test]
    fn test_explicit_kind_and_total() {
        let json = r#"{
            "id": "geography",
            "label": "Geography",
            "kind": "area",
            "total_items": 400,
            "options": [{"code": "K02000001", "label": "United Kingdom"}]
        }"#;

        let dim: Dimension = serde_json::from_str(json).unwrap();
        assert!(dim.is_area_type());
        assert_eq!(dim.total_items, 400);
        assert_eq!(dim.options.len(), 1);
    }

    #[test]
    fn test_builder() {
        let dim = Dimension::new("time", "Time", vec![DimensionOption::new("2020", "2020")])
            .with_kind(DimensionKind::Area)
            .with_total_items(12);

        assert!(dim.is_area_type());
        assert_eq!(dim.total_items, 12);
    }
}

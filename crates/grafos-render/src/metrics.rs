//! Metrics panel: summary pairs and the indicator table.

use grafos_core::models::MetricsSummary;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::format::{plain_text, Formatter};

/// Accepted names for a row's indicator, first match wins
pub const INDICATOR_KEYS: [&str; 3] = ["indicateur", "indicador", "index"];

/// Accepted names for a row's value, first match wins
pub const VALUE_KEYS: [&str; 3] = ["valeur", "valor", "value"];

/// Column read when no value alias is present
const POSITIONAL_VALUE_COLUMN: usize = 1;

/// One summary label/value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricItem {
    pub label: String,
    pub value: String,
}

/// One row of the indicator table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    pub indicator: String,
    pub value: String,
}

/// Rendered content of the metrics panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsPanel {
    pub hidden: bool,
    pub summary: Vec<MetricItem>,
    pub rows: Vec<MetricRow>,
}

impl Default for MetricsPanel {
    fn default() -> Self {
        Self { hidden: true, summary: Vec::new(), rows: Vec::new() }
    }
}

impl MetricsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the panel content
    ///
    /// An absent or empty summary hides the panel and clears everything,
    /// whatever was shown before.
    pub fn update(
        &mut self,
        summary: Option<&MetricsSummary>,
        table: Option<&Value>,
        formatter: &Formatter,
    ) {
        self.summary.clear();
        self.rows.clear();

        let Some(summary) = summary.filter(|s| !s.is_empty()) else {
            self.hidden = true;
            return;
        };
        self.hidden = false;

        self.summary = summary
            .iter()
            .map(|(key, value)| MetricItem { label: key.clone(), value: formatter.format(Some(value)) })
            .collect();

        if let Some(Value::Array(rows)) = table {
            self.rows = rows.iter().map(|row| table_row(row, formatter)).collect();
        }
    }
}

fn table_row(row: &Value, formatter: &Formatter) -> MetricRow {
    let Value::Object(fields) = row else {
        return MetricRow { indicator: String::new(), value: formatter.format(None) };
    };

    let indicator = first_alias(fields, &INDICATOR_KEYS).map(plain_text).unwrap_or_default();
    let value =
        first_alias(fields, &VALUE_KEYS).or_else(|| fields.values().nth(POSITIONAL_VALUE_COLUMN));

    MetricRow { indicator, value: formatter.format(value) }
}

fn first_alias<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| fields.get(*k).filter(|v| !v.is_null()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grafos_core::models::Language;
    use serde_json::json;

    fn summary(value: Value) -> MetricsSummary {
        value.as_object().cloned().unwrap_or_default()
    }

    fn en() -> Formatter {
        Formatter::new(Language::En)
    }

    #[test]
    fn test_summary_in_insertion_order() {
        let mut panel = MetricsPanel::new();
        panel.update(Some(&summary(json!({"nodes": 1200, "betweenness_avg": 0.421987}))), None, &en());

        assert!(!panel.hidden);
        assert_eq!(
            panel.summary,
            vec![
                MetricItem { label: "nodes".to_string(), value: "1,200".to_string() },
                MetricItem { label: "betweenness_avg".to_string(), value: "0.422".to_string() },
            ]
        );
        assert!(panel.rows.is_empty());
    }

    #[test]
    fn test_empty_summary_hides_and_clears() {
        let mut panel = MetricsPanel::new();
        panel.update(
            Some(&summary(json!({"nodes": 3}))),
            Some(&json!([{"indicateur": "nodes", "valeur": 3}])),
            &en(),
        );
        assert!(!panel.hidden);
        assert_eq!(panel.rows.len(), 1);

        panel.update(Some(&summary(json!({}))), Some(&json!([{"index": "x", "value": 1}])), &en());
        assert!(panel.hidden);
        assert!(panel.summary.is_empty());
        assert!(panel.rows.is_empty());

        panel.update(None, None, &en());
        assert!(panel.hidden);
    }

    #[test]
    fn test_row_aliases_resolve_first_match() {
        let mut panel = MetricsPanel::new();
        let table = json!([
            {"indicateur": "Noeuds", "valeur": 1500},
            {"indicador": "Aristas", "valor": 2.5},
            {"index": "components", "value": null, "extra": 7},
            {"label": "positional", "amount": 0.12345},
            {"indicateur": null, "indicador": "fallback", "valeur": "n/a"},
            "not a row"
        ]);
        panel.update(Some(&summary(json!({"nodes": 1}))), Some(&table), &en());

        let rows: Vec<(&str, &str)> =
            panel.rows.iter().map(|r| (r.indicator.as_str(), r.value.as_str())).collect();
        assert_eq!(
            rows,
            vec![
                ("Noeuds", "1,500"),
                ("Aristas", "2.5"),
                ("components", "—"),
                ("", "0.123"),
                ("fallback", "n/a"),
                ("", "—"),
            ]
        );
    }

    #[test]
    fn test_non_array_table_is_ignored() {
        let mut panel = MetricsPanel::new();
        panel.update(Some(&summary(json!({"nodes": 1}))), Some(&json!({"rows": []})), &en());

        assert!(!panel.hidden);
        assert!(panel.rows.is_empty());
    }
}

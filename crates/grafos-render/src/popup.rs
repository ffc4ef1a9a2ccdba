//! Popup fragments for map features.

use grafos_core::models::{Language, Popup, PopupEntry};
use serde_json::{Map, Value};

use crate::format::Formatter;

/// Known edge properties in display order, with their Spanish and English labels
const EDGE_FIELDS: [(&str, &str, &str); 8] = [
    ("name", "Nombre", "Name"),
    ("highway", "Tipo", "Type"),
    ("length", "Longitud (m)", "Length (m)"),
    ("betweenness", "Betweenness", "Betweenness"),
    ("closeness", "Closeness", "Closeness"),
    ("degree", "Grado", "Degree"),
    ("straightness", "Straightness", "Straightness"),
    ("eigenvector", "Eigenvector", "Eigenvector"),
];

/// Build the popup of a street edge
///
/// Only allowlisted, non-null properties are listed, in allowlist order.
/// Unknown keys never appear.
pub fn edge_popup(properties: &Map<String, Value>, formatter: &Formatter) -> Popup {
    let language = formatter.language();
    let entries = EDGE_FIELDS
        .iter()
        .filter_map(|(key, es, en)| {
            let value = properties.get(*key).filter(|v| !v.is_null())?;
            let label = match language {
                Language::Es => *es,
                Language::En => *en,
            };
            Some(PopupEntry { label: label.to_string(), value: formatter.format(Some(value)) })
        })
        .collect();
    Popup { entries }
}

/// Build the popup of a hex cell: every stored property, in stored order
pub fn hex_popup(properties: &Map<String, Value>, formatter: &Formatter) -> Popup {
    let entries = properties
        .iter()
        .map(|(key, value)| PopupEntry { label: key.clone(), value: formatter.format(Some(value)) })
        .collect();
    Popup { entries }
}

/// Drop empty fragments so no popup gets bound
pub fn non_empty(popup: Popup) -> Option<Popup> {
    (!popup.is_empty()).then_some(popup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_edge_popup_follows_allowlist_order() {
        let properties = props(json!({
            "degree": 3,
            "osmid": 42,
            "length": 125.4567,
            "name": "Rue de Rivoli",
            "betweenness": null
        }));
        let popup = edge_popup(&properties, &Formatter::new(Language::Es));

        let labels: Vec<&str> = popup.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Nombre", "Longitud (m)", "Grado"]);
        assert_eq!(popup.entries[1].value, "125,457");
    }

    #[test]
    fn test_edge_popup_english_labels() {
        let properties = props(json!({"highway": "residential", "degree": 4}));
        let popup = edge_popup(&properties, &Formatter::new(Language::En));

        assert_eq!(popup.to_html(), "<strong>Type:</strong> residential<br/><strong>Degree:</strong> 4");
    }

    #[test]
    fn test_edge_popup_without_known_keys_is_empty() {
        let properties = props(json!({"osmid": 1, "oneway": true, "__style": {"color": "#000"}}));
        let popup = edge_popup(&properties, &Formatter::default());

        assert!(popup.is_empty());
        assert!(non_empty(popup).is_none());
    }

    #[test]
    fn test_hex_popup_lists_everything_in_stored_order() {
        let properties = props(json!({"h3": "871fb4670ffffff", "length_km": 1.23456, "edges": null}));
        let popup = hex_popup(&properties, &Formatter::new(Language::En));

        let labels: Vec<&str> = popup.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["h3", "length_km", "edges"]);
        assert_eq!(popup.entries[1].value, "1.235");
        assert_eq!(popup.entries[2].value, "—");
    }
}

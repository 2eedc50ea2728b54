//! Frontend Models
//!
//! Invoice data as served by the invoice API. Only the fields the dashboard
//! displays are typed; everything else rides along in `extra`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};

/// Template used when an invoice does not name one
pub const DEFAULT_TEMPLATE: &str = "template1";

/// Known invoice templates (id, label)
pub const TEMPLATES: &[(&str, &str)] = &[
    ("template1", "Classic"),
    ("template2", "Modern"),
    ("template3", "Minimal"),
    ("template4", "Bold"),
    ("template5", "Elegant"),
];

/// Timestamp as sent by the API: ISO-8601 text or epoch milliseconds.
/// Anything else is kept so a bad value never fails the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
    Other(Value),
}

/// Invoice record (read-only copy of the server entity)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Parties, line items, totals, ids...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Invoice {
    /// Title, or `fallback` when missing or empty
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_empty(&self.title).unwrap_or(fallback)
    }

    /// Card heading
    pub fn display_title(&self) -> &str {
        self.title_or("Untitled")
    }

    pub fn template_or_default(&self) -> &str {
        non_empty(&self.template).unwrap_or(DEFAULT_TEMPLATE)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        non_empty(&self.thumbnail_url)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Numbers and booleans are shown as text; arrays, objects and null are dropped
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// Label for a template id, falling back to the id itself
pub fn template_label(id: &str) -> &str {
    TEMPLATES
        .iter()
        .find(|(template, _)| *template == id)
        .map(|(_, label)| *label)
        .unwrap_or(id)
}

/// Empty invoice used to seed the editor for "Create New"
pub fn blank_invoice() -> Invoice {
    let mut extra = Map::new();
    extra.insert(
        "company".into(),
        json!({ "name": "", "number": "", "address": "" }),
    );
    extra.insert(
        "billing".into(),
        json!({ "name": "", "phone": "", "address": "" }),
    );
    extra.insert(
        "shipping".into(),
        json!({ "name": "", "phone": "", "address": "" }),
    );
    extra.insert(
        "invoice".into(),
        json!({ "number": "", "date": "", "dueDate": "" }),
    );
    extra.insert(
        "account".into(),
        json!({ "name": "", "number": "", "ifsccode": "" }),
    );
    extra.insert("tax".into(), json!(0));
    extra.insert("notes".into(), json!(""));
    extra.insert("logo".into(), json!(""));
    extra.insert(
        "items".into(),
        json!([{ "name": "", "qty": "", "amount": "", "description": "", "total": 0 }]),
    );

    Invoice {
        title: Some("New Invoice".to_string()),
        template: None,
        last_updated_at: None,
        thumbnail_url: None,
        extra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_opaque_fields() {
        let invoice: Invoice = serde_json::from_value(json!({
            "id": "abc123",
            "title": "Acme Co",
            "template": "template2",
            "lastUpdatedAt": "2023-05-10",
            "items": [{ "name": "Widget", "qty": 2 }]
        }))
        .unwrap();

        assert_eq!(invoice.title.as_deref(), Some("Acme Co"));
        assert_eq!(
            invoice.last_updated_at,
            Some(Timestamp::Text("2023-05-10".to_string()))
        );
        assert_eq!(invoice.extra["id"], json!("abc123"));
        assert_eq!(invoice.extra["items"][0]["qty"], json!(2));

        let back = serde_json::to_value(&invoice).unwrap();
        assert_eq!(back["id"], json!("abc123"));
        assert_eq!(back["lastUpdatedAt"], json!("2023-05-10"));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let invoice: Invoice = serde_json::from_value(json!({
            "title": null,
            "thumbnailUrl": null
        }))
        .unwrap();

        assert_eq!(invoice.display_title(), "Untitled");
        assert_eq!(invoice.template_or_default(), DEFAULT_TEMPLATE);
        assert!(invoice.thumbnail().is_none());
        assert!(invoice.last_updated_at.is_none());
    }

    #[test]
    fn test_empty_strings_fall_back() {
        let invoice = Invoice {
            title: Some(String::new()),
            template: Some(String::new()),
            thumbnail_url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(invoice.title_or("View Invoice"), "View Invoice");
        assert_eq!(invoice.template_or_default(), "template1");
        assert!(invoice.thumbnail().is_none());
    }

    #[test]
    fn test_mistyped_display_fields() {
        let invoice: Invoice = serde_json::from_value(json!({
            "title": 42,
            "template": ["template2"],
            "thumbnailUrl": { "href": "x.png" },
            "id": "abc"
        }))
        .unwrap();

        assert_eq!(invoice.display_title(), "42");
        assert_eq!(invoice.template_or_default(), DEFAULT_TEMPLATE);
        assert!(invoice.thumbnail().is_none());
        assert_eq!(invoice.extra["id"], json!("abc"));

        let flagged: Invoice = serde_json::from_value(json!({ "title": true })).unwrap();
        assert_eq!(flagged.display_title(), "true");
    }

    #[test]
    fn test_timestamp_variants() {
        let millis: Invoice =
            serde_json::from_value(json!({ "lastUpdatedAt": 1683676800000i64 })).unwrap();
        assert_eq!(millis.last_updated_at, Some(Timestamp::Millis(1683676800000)));

        let odd: Invoice =
            serde_json::from_value(json!({ "lastUpdatedAt": { "seconds": 1 } })).unwrap();
        assert!(matches!(odd.last_updated_at, Some(Timestamp::Other(_))));
    }

    #[test]
    fn test_blank_invoice_shape() {
        let blank = blank_invoice();
        assert_eq!(blank.title.as_deref(), Some("New Invoice"));
        assert!(blank.template.is_none());
        assert_eq!(blank.extra["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(blank.extra["tax"], json!(0));
    }

    #[test]
    fn test_template_label() {
        assert_eq!(template_label("template2"), "Modern");
        assert_eq!(template_label("custom"), "custom");
    }
}

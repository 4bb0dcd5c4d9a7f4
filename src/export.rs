use chrono::NaiveDate;
use leptos::document;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Browser refused the download: {0}")]
    Browser(String),
}

impl From<JsValue> for ExportError {
    fn from(value: JsValue) -> Self {
        ExportError::Browser(format!("{value:?}"))
    }
}

/// Exactly what the export endpoint returned, pretty printed.
pub fn to_json(generations: &[Value]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(generations)?)
}

pub fn file_name(date: NaiveDate) -> String {
    format!("generaciones_{}.json", date.format("%Y-%m-%d"))
}

/// Offers `generations` as a JSON file download named after today's UTC date.
pub fn download(generations: &[Value]) -> Result<String, ExportError> {
    let json = to_json(generations)?;
    let name = file_name(chrono::Utc::now().date_naive());

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document().create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(&name);
    let body = document()
        .body()
        .ok_or_else(|| ExportError::Browser("missing body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_json_keeps_values() {
        let generations = vec![
            json!({"id": 2, "type": "thread", "prompt": "p", "content": "[\"a\"]", "created_at": "2025-01-02"}),
            json!({"id": 1, "type": "newsletter", "prompt": "q", "content": "{}", "extra": null}),
        ];
        let exported = to_json(&generations).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&exported).unwrap();
        assert_eq!(parsed, generations);
        assert!(exported.contains("\n  {"));

        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(file_name(date), "generaciones_2025-03-07.json");
    }
}

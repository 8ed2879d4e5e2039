//! Figma REST wire documents and style resolution.
//!
//! `GET /files/:key/styles` lists the published styles; `GET /files/:key/nodes`
//! returns the node document behind each one. [`resolve`] joins the two into
//! [`RawStyle`] records.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::style::{Effect, Paint, RawStyle, StyleMeta, TypeStyle};
use crate::ExtractError;

/// Body of `GET /files/:key/styles`.
#[derive(Debug, Clone, Deserialize)]
pub struct StylesResponse {
    pub meta: StylesMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylesMeta {
    #[serde(default)]
    pub styles: Vec<PublishedStyle>,
}

/// One entry of the published style list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublishedStyle {
    pub node_id: String,
    pub style_type: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `GET /files/:key/nodes`. Unknown ids come back as `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodesResponse {
    #[serde(default)]
    pub nodes: HashMap<String, Option<NodeEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeEntry {
    #[serde(default)]
    pub document: Option<Value>,
}

impl NodesResponse {
    fn document(&self, node_id: &str) -> Option<&Value> {
        self.nodes
            .get(node_id)
            .and_then(Option::as_ref)
            .and_then(|entry| entry.document.as_ref())
    }
}

/// Both API responses saved side by side, for offline runs.
///
/// ```json
/// { "styles": [ ... ], "nodes": { "1:2": { "document": { ... } } } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleDump {
    #[serde(default)]
    pub styles: Vec<PublishedStyle>,
    #[serde(default)]
    pub nodes: HashMap<String, Option<NodeEntry>>,
}

impl StyleDump {
    pub fn from_json(source: &str) -> Result<Self, ExtractError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn resolve(self) -> Vec<RawStyle> {
        let nodes = NodesResponse { nodes: self.nodes };
        resolve(&self.styles, &nodes)
    }
}

/// Attach node payloads to published styles.
///
/// Styles of an unknown type are dropped. A style whose node is missing or
/// whose payload does not decode keeps an empty payload, so the extractors
/// skip it without failing the run.
pub fn resolve(styles: &[PublishedStyle], nodes: &NodesResponse) -> Vec<RawStyle> {
    let mut resolved = Vec::with_capacity(styles.len());

    for style in styles {
        let meta = StyleMeta {
            node_id: style.node_id.clone(),
            name: style.name.clone(),
            description: style.description.clone(),
        };
        let document = nodes.document(&style.node_id);
        if document.is_none() {
            log::debug!("No node document for style {:?} ({})", style.name, style.node_id);
        }

        let raw = match style.style_type.as_str() {
            "FILL" => RawStyle::Fill {
                meta,
                fills: document.map(|doc| list(doc, "fills")).unwrap_or_default(),
            },
            "EFFECT" => RawStyle::Effect {
                meta,
                effects: document.map(|doc| list(doc, "effects")).unwrap_or_default(),
            },
            "TEXT" => RawStyle::Text {
                meta,
                style: document.and_then(type_style),
            },
            other => {
                log::debug!("Ignoring {other} style {:?}", style.name);
                continue;
            }
        };
        resolved.push(raw);
    }

    resolved
}

/// Decode `doc[field]` item by item. Entries that do not decode become
/// `T::default()` so list positions are kept.
fn list<T>(doc: &Value, field: &str) -> Vec<T>
where
    T: for<'de> Deserialize<'de> + Fallback,
{
    let Some(items) = doc.get(field).and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            T::deserialize(item).unwrap_or_else(|err| {
                log::debug!("Skipping malformed {field} entry: {err}");
                T::fallback()
            })
        })
        .collect()
}

fn type_style(doc: &Value) -> Option<TypeStyle> {
    let style = doc.get("style")?;
    match TypeStyle::deserialize(style) {
        Ok(style) => Some(style),
        Err(err) => {
            log::debug!("Skipping malformed text style: {err}");
            None
        }
    }
}

/// Placeholder for list entries that fail to decode.
trait Fallback {
    fn fallback() -> Self;
}

impl Fallback for Paint {
    fn fallback() -> Self {
        Paint::Other
    }
}

impl Fallback for Effect {
    fn fallback() -> Self {
        Effect::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rgba;
    use serde_json::json;

    fn nodes(value: Value) -> NodesResponse {
        serde_json::from_value(value).unwrap()
    }

    fn style(node_id: &str, style_type: &str, name: &str) -> PublishedStyle {
        PublishedStyle {
            node_id: node_id.into(),
            style_type: style_type.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_styles_response() {
        let body = json!({
            "status": 200,
            "error": false,
            "meta": {
                "styles": [{
                    "key": "abc",
                    "file_key": "F1",
                    "node_id": "1:2",
                    "style_type": "FILL",
                    "name": "Primary/Blue",
                    "description": "Brand",
                    "created_at": "2024-01-01T00:00:00Z"
                }]
            }
        });
        let response: StylesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.meta.styles, vec![PublishedStyle {
            node_id: "1:2".into(),
            style_type: "FILL".into(),
            name: "Primary/Blue".into(),
            description: "Brand".into(),
        }]);
    }

    #[test]
    fn test_resolve_fill() {
        let styles = [style("1:2", "FILL", "Primary")];
        let nodes = nodes(json!({"nodes": {"1:2": {"document": {
            "id": "1:2",
            "fills": [{"type": "SOLID", "color": {"r": 0.2, "g": 0.4, "b": 0.8, "a": 1}}]
        }}}}));
        let resolved = resolve(&styles, &nodes);
        assert_eq!(resolved.len(), 1);
        match &resolved[0] {
            RawStyle::Fill { meta, fills } => {
                assert_eq!(meta.name, "Primary");
                assert_eq!(fills, &vec![Paint::Solid {
                    color: Rgba { r: 0.2, g: 0.4, b: 0.8, a: 1.0 },
                    opacity: 1.0,
                }]);
            }
            other => panic!("expected fill, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_entry_keeps_position() {
        let styles = [style("1:2", "FILL", "Broken")];
        let nodes = nodes(json!({"nodes": {"1:2": {"document": {
            "fills": [
                {"type": "SOLID"},
                {"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}
            ]
        }}}}));
        let resolved = resolve(&styles, &nodes);
        match &resolved[0] {
            RawStyle::Fill { fills, .. } => {
                assert_eq!(fills.len(), 2);
                assert_eq!(fills[0], Paint::Other);
            }
            other => panic!("expected fill, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_node_gives_empty_payload() {
        let styles = [
            style("9:9", "EFFECT", "Gone"),
            style("8:8", "TEXT", "Null node"),
        ];
        let nodes = nodes(json!({"nodes": {"8:8": null}}));
        let resolved = resolve(&styles, &nodes);
        assert_eq!(resolved.len(), 2);
        assert!(matches!(&resolved[0], RawStyle::Effect { effects, .. } if effects.is_empty()));
        assert!(matches!(&resolved[1], RawStyle::Text { style: None, .. }));
    }

    #[test]
    fn test_unknown_style_type_dropped() {
        let styles = [style("1:1", "GRID", "Layout grid"), style("1:2", "FILL", "Red")];
        let resolved = resolve(&styles, &NodesResponse::default());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].meta().name, "Red");
    }

    #[test]
    fn test_malformed_text_style() {
        let styles = [style("3:1", "TEXT", "Body")];
        let nodes = nodes(json!({"nodes": {"3:1": {"document": {"style": {"fontSize": 16}}}}}));
        let resolved = resolve(&styles, &nodes);
        assert!(matches!(&resolved[0], RawStyle::Text { style: None, .. }));
    }

    #[test]
    fn test_dump_round_trip_through_resolve() {
        let dump = StyleDump::from_json(
            r#"{
                "styles": [{"node_id": "3:1", "style_type": "TEXT", "name": "Body"}],
                "nodes": {"3:1": {"document": {"style": {
                    "fontFamily": "Inter", "fontSize": 16, "fontWeight": 400
                }}}}
            }"#,
        )
        .unwrap();
        let resolved = dump.resolve();
        assert!(matches!(
            &resolved[0],
            RawStyle::Text { style: Some(s), .. } if s.font_family == "Inter"
        ));
    }

    #[test]
    fn test_dump_invalid_json() {
        let err = StyleDump::from_json("[").unwrap_err();
        assert!(err.to_string().starts_with("Malformed Figma document:"));
    }
}

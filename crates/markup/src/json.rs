//! JSON ingestion - build a pure tree from a JSON document
//!
//! Input format mirrors the node records callers usually assemble:
//! ```json
//! {
//!   "tag": "div",
//!   "props": {
//!     "class": "card",
//!     "style": { "backgroundColor": "red" },
//!     "children": ["hello", { "tag": "b", "props": { "children": ["x"] } }]
//!   }
//! }
//! ```
//!
//! Anything that is not one of these shapes is rejected with its JSON path,
//! rather than silently rendering as nothing.

use serde_json::{Map, Value};

use crate::error::{MarkupError, Result};
use crate::types::*;

impl Node {
    /// Build a node tree from a JSON value
    pub fn from_json(value: &Value) -> Result<Node> {
        parse_node(value, "$")
    }

    /// Parse JSON text and build a node tree
    pub fn from_json_str(text: &str) -> Result<Node> {
        let value: Value = serde_json::from_str(text)?;
        Node::from_json(&value)
    }
}

fn parse_node(value: &Value, path: &str) -> Result<Node> {
    match value {
        Value::Null | Value::Bool(_) => Ok(Node::Empty),
        Value::String(s) => Ok(Node::Text(s.clone())),
        Value::Number(n) => Ok(Node::Number(number(n, path)?)),
        Value::Array(items) => {
            let children = items
                .iter()
                .enumerate()
                .map(|(i, item)| parse_node(item, &format!("{}[{}]", path, i)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Node::fragment(children))
        }
        Value::Object(record) => parse_element(record, path).map(Node::Element),
    }
}

fn parse_element(record: &Map<String, Value>, path: &str) -> Result<Element> {
    let tag = match record.get("tag") {
        Some(Value::String(name)) if name == FRAGMENT => Tag::Fragment,
        Some(Value::String(name)) if !name.is_empty() => Tag::Name(name.clone()),
        Some(_) => return Err(MarkupError::malformed(path, "'tag' must be a non-empty string")),
        None => return Err(MarkupError::malformed(path, "missing 'tag'")),
    };

    let props_path = format!("{}.props", path);
    let props = match record.get("props") {
        None | Some(Value::Null) => Props::new(),
        Some(Value::Object(props)) => parse_props(props, &props_path)?,
        Some(_) => return Err(MarkupError::malformed(&props_path, "'props' must be an object")),
    };

    Ok(Element::with_props(tag, props))
}

fn parse_props(record: &Map<String, Value>, path: &str) -> Result<Props> {
    let mut props = Props::new();

    for (key, value) in record {
        let key_path = format!("{}.{}", path, key);

        match key.as_str() {
            "children" => props.children = parse_children(value, &key_path)?,
            "dangerouslySetInnerHTML" => props.inner_html = parse_inner_html(value, &key_path)?,
            "style" => {
                if let Some(style) = parse_style(value, &key_path)? {
                    props.set(key.as_str(), style);
                }
            }
            _ => {
                if let Some(prop) = parse_prop_value(value, &key_path)? {
                    props.set(key.as_str(), prop);
                }
            }
        }
    }

    Ok(props)
}

/// Children arrays are flattened one level
fn parse_children(value: &Value, path: &str) -> Result<Vec<Node>> {
    let Value::Array(items) = value else {
        return Ok(vec![parse_node(value, path)?]);
    };

    let mut children = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let item_path = format!("{}[{}]", path, i);
        match item {
            Value::Array(nested) => {
                for (j, inner) in nested.iter().enumerate() {
                    children.push(parse_node(inner, &format!("{}[{}]", item_path, j))?);
                }
            }
            _ => children.push(parse_node(item, &item_path)?),
        }
    }
    Ok(children)
}

fn parse_inner_html(value: &Value, path: &str) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Object(record) => match record.get("__html") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(html)) => Ok(Some(html.clone())),
            Some(_) => Err(MarkupError::malformed(path, "'__html' must be a string")),
        },
        _ => Err(MarkupError::malformed(path, "expected an object with '__html'")),
    }
}

fn parse_style(value: &Value, path: &str) -> Result<Option<PropValue>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(PropValue::Str(s.clone()))),
        Value::Object(declarations) => {
            let mut style = Style::new();
            for (property, v) in declarations {
                let text = match v {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => format_number(number(n, path)?),
                    _ => {
                        return Err(MarkupError::malformed(
                            &format!("{}.{}", path, property),
                            "style values must be strings or numbers",
                        ))
                    }
                };
                style.insert(property.as_str(), text);
            }
            Ok(Some(PropValue::Style(style)))
        }
        _ => Err(MarkupError::malformed(path, "'style' must be an object or string")),
    }
}

/// `null` props are dropped, like absent ones
fn parse_prop_value(value: &Value, path: &str) -> Result<Option<PropValue>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(PropValue::Bool(*b))),
        Value::String(s) => Ok(Some(PropValue::Str(s.clone()))),
        Value::Number(n) => Ok(Some(PropValue::Number(number(n, path)?))),
        Value::Array(_) | Value::Object(_) => Err(MarkupError::malformed(
            path,
            "attribute values must be strings, numbers or booleans",
        )),
    }
}

fn number(n: &serde_json::Number, path: &str) -> Result<f64> {
    n.as_f64()
        .ok_or_else(|| MarkupError::malformed(path, "number out of range"))
}

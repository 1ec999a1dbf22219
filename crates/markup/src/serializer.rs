//! Markup serializer - turn a resolved tree into HTML text
//!
//! This module handles:
//! - Inline vs block layout per element
//! - Indentation and newlines under a formatting policy
//! - Void elements, fragments, `textarea`, `pre` and raw inner HTML
//!
//! The serializer is synchronous and never mutates the tree. The only error
//! it reports is a component tag that survived resolution.

use serde::{Deserialize, Serialize};

use crate::attrs::{render_attr_list, render_attrs};
use crate::classify::{is_empty_node, is_self_closing};
use crate::encode::encode;
use crate::error::{MarkupError, Result};
use crate::types::*;

/// Formatting options, overridable field by field
///
/// Deserializes from camelCase keys (`maxInlineContentWidth`); missing keys
/// keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub pretty: bool,
    pub max_inline_content_width: usize,
    pub tab: String,
    pub newline: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            max_inline_content_width: 40,
            tab: "    ".to_string(),
            newline: "\n".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn max_inline_content_width(mut self, width: usize) -> Self {
        self.max_inline_content_width = width;
        self
    }

    pub fn tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = tab.into();
        self
    }

    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    /// Effective policy: indent and newline collapse when not pretty
    pub fn policy(&self) -> RenderPolicy {
        if self.pretty {
            RenderPolicy {
                max_inline_content_width: self.max_inline_content_width,
                tab: self.tab.clone(),
                newline: self.newline.clone(),
            }
        } else {
            RenderPolicy::compact(self.max_inline_content_width)
        }
    }
}

/// Formatting policy consumed by the serializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPolicy {
    pub max_inline_content_width: usize,
    pub tab: String,
    pub newline: String,
}

impl RenderPolicy {
    /// No indentation, no newlines
    pub fn compact(max_inline_content_width: usize) -> Self {
        Self {
            max_inline_content_width,
            tab: String::new(),
            newline: String::new(),
        }
    }
}

/// Markup serializer
#[derive(Debug, Clone)]
pub struct Renderer {
    policy: RenderPolicy,
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_options(&RenderOptions::default())
    }

    pub fn with_options(options: &RenderOptions) -> Self {
        Self::with_policy(options.policy())
    }

    pub fn with_policy(policy: RenderPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RenderPolicy {
        &self.policy
    }

    /// Serialize a resolved tree starting at zero indent
    pub fn render(&self, node: &Node) -> Result<String> {
        self.render_node(node, "")
    }

    /// Serialize a single node at the given indent prefix
    pub fn render_node(&self, node: &Node, pad: &str) -> Result<String> {
        match node {
            Node::Empty => Ok(String::new()),
            Node::Text(_) | Node::Number(_) => {
                let text = node.primitive_text().unwrap_or_default();
                Ok(format!("{}{}", pad, encode(&text)))
            }
            Node::Element(element) => self.render_element(element, pad),
        }
    }

    fn render_element(&self, element: &Element, pad: &str) -> Result<String> {
        // None means fragment
        let name = match &element.tag {
            Tag::Component(c) => {
                return Err(MarkupError::UnresolvedComponent(c.name().to_string()));
            }
            Tag::Fragment => None,
            Tag::Name(name) => Some(name.as_str()),
        };
        let props = &element.props;

        if let Some(tag) = name {
            if is_self_closing(tag) {
                return Ok(format!("{}<{}{} />", pad, tag, render_attrs(Some(props))));
            }
            if tag == "textarea" {
                return self.render_textarea(props, pad);
            }
        }

        let RenderPolicy {
            max_inline_content_width,
            tab,
            newline,
        } = &self.policy;
        let is_pre = name == Some("pre");

        // draw tag on multiple lines
        let block;
        let inner;

        if let Some(html) = props.raw_html() {
            block = true;
            inner = match name {
                Some(_) => format!("{}{}{}", pad, tab, html),
                None => format!("{}{}", pad, html),
            };
        } else if props.children.iter().all(|child| !child.is_element()) {
            let text: String = props
                .children
                .iter()
                .filter_map(Node::primitive_text)
                .collect();
            let encoded = encode(&text);

            if name.is_none() {
                if encoded.is_empty() {
                    return Ok(encoded);
                }
                return Ok(format!("{}{}", pad, encoded));
            }

            block = !is_pre && encoded.chars().count() > *max_inline_content_width;
            inner = if block {
                format!("{}{}{}", pad, tab, encoded)
            } else {
                encoded
            };
        } else {
            block = !is_pre;
            let child_pad = match name {
                None => pad.to_string(),
                Some(_) if block => format!("{}{}", pad, tab),
                Some(_) => String::new(),
            };
            inner = props
                .children
                .iter()
                .filter(|child| !is_empty_node(child))
                .map(|child| self.render_node(child, &child_pad))
                .collect::<Result<Vec<_>>>()?
                .join(newline.as_str());
        }

        let Some(tag) = name else {
            return Ok(inner);
        };

        let mut output = String::with_capacity(inner.len() + 2 * tag.len() + pad.len() + 8);
        output.push_str(pad);
        output.push('<');
        output.push_str(tag);
        output.push_str(&render_attrs(Some(props)));
        output.push('>');
        if block {
            output.push_str(newline);
            output.push_str(&inner);
            output.push_str(newline);
            output.push_str(pad);
        } else {
            output.push_str(&inner);
        }
        output.push_str("</");
        output.push_str(tag);
        output.push('>');

        Ok(output)
    }

    /// `value` wins over children; content is emitted as-is
    fn render_textarea(&self, props: &Props, pad: &str) -> Result<String> {
        let attrs = render_attr_list(props.attrs().filter(|(key, _)| *key != "value"));

        let content = match props.get("value") {
            Some(value) => value.to_string(),
            None => {
                let compact =
                    Renderer::with_policy(RenderPolicy::compact(self.policy.max_inline_content_width));
                let mut content = String::new();
                for child in &props.children {
                    match child.primitive_text() {
                        Some(text) => content.push_str(&text),
                        None => content.push_str(&compact.render(child)?),
                    }
                }
                content
            }
        };

        Ok(format!("{}<textarea{}>{}</textarea>", pad, attrs, content))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

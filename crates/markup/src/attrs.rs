//! Attribute serialization
//!
//! Every rendered attribute carries its own leading space, so the result can
//! be appended directly after the tag name.

use crate::encode::{css, quote};
use crate::types::{PropValue, Props};

/// Keys that are never rendered as attributes
const RESERVED_KEYS: &[&str] = &["children", "dangerouslySetInnerHTML"];

/// Render all attributes of `props`, or "" when there are none
pub fn render_attrs(props: Option<&Props>) -> String {
    let Some(props) = props else {
        return String::new();
    };
    render_attr_list(props.attrs())
}

/// Render attributes from an arbitrary `(key, value)` sequence
pub fn render_attr_list<'a, I>(attrs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a PropValue)>,
{
    let mut output = String::new();

    for (key, value) in attrs {
        if RESERVED_KEYS.contains(&key) {
            continue;
        }

        match value {
            PropValue::Bool(false) => {}
            PropValue::Bool(true) => {
                output.push(' ');
                output.push_str(key);
            }
            PropValue::Style(style) if key == "style" => {
                output.push_str(&format!(" style=\"{}\"", quote(&css(style))));
            }
            other => {
                output.push_str(&format!(" {}=\"{}\"", key, quote(&other.to_string())));
            }
        }
    }

    output
}

//! Core type definitions for the UI tree
//!
//! Key design principles:
//! 1. Every node shape is an enum variant, never a sentinel value
//! 2. Attribute order is insertion order (SmallVec, most elements have <4)
//! 3. Component tags are trait objects; only the resolver invokes them

use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

use crate::component::Component;
use crate::encode;

/// Reference name of the fragment marker in serialized documents
pub const FRAGMENT: &str = "fragment";

/// Element tag
#[derive(Clone)]
pub enum Tag {
    /// Plain element name (`div`, `img`, ...)
    Name(String),
    /// No wrapper element, children only
    Fragment,
    /// Callable tag, expanded during resolution
    Component(Arc<dyn Component>),
}

impl Tag {
    /// Tag name for plain elements
    pub fn name(&self) -> Option<&str> {
        match self {
            Tag::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self, Tag::Fragment)
    }

    pub fn is_component(&self) -> bool {
        matches!(self, Tag::Component(_))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Tag::Fragment => f.write_str("Fragment"),
            Tag::Component(c) => f.debug_tuple("Component").field(&c.name()).finish(),
        }
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::Name(name.to_string())
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Tag::Name(name)
    }
}

impl From<Arc<dyn Component>> for Tag {
    fn from(component: Arc<dyn Component>) -> Self {
        Tag::Component(component)
    }
}

/// Ordered CSS declarations for the `style` attribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style(SmallVec<[(String, String); 4]>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration. Property names are camelCase (`backgroundColor`).
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.0.push((property, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.insert(property, value);
        }
        style
    }
}

/// Value of a single prop
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Bool(bool),
    Str(String),
    Number(f64),
    Style(Style),
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::Str(s) => f.write_str(s),
            PropValue::Number(n) => f.write_str(&format_number(*n)),
            PropValue::Style(style) => f.write_str(&encode::css(style)),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<Style> for PropValue {
    fn from(value: Style) -> Self {
        PropValue::Style(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<usize> for PropValue {
    fn from(value: usize) -> Self {
        PropValue::Number(value as f64)
    }
}

/// Props attached to an element
///
/// `children` and `inner_html` are the reserved entries; everything in
/// `attrs` is a candidate attribute.
#[derive(Debug, Clone, Default)]
pub struct Props {
    attrs: SmallVec<[(String, PropValue); 4]>,
    pub children: Vec<Node>,
    /// Raw markup from `dangerouslySetInnerHTML`
    pub inner_html: Option<String>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prop, replacing an existing entry in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Chainable form of [`Props::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// String prop lookup, for components reading their inputs
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(PropValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        let pos = self.attrs.iter().position(|(k, _)| k == key)?;
        Some(self.attrs.remove(pos).1)
    }

    /// Attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Raw inner HTML, if any non-empty markup was supplied
    pub fn raw_html(&self) -> Option<&str> {
        self.inner_html.as_deref().filter(|html| !html.is_empty())
    }
}

/// Element descriptor: tag + props
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Tag,
    pub props: Props,
}

impl Element {
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            props: Props::new(),
        }
    }

    pub fn fragment() -> Self {
        Self::new(Tag::Fragment)
    }

    pub fn component(component: Arc<dyn Component>) -> Self {
        Self::new(Tag::Component(component))
    }

    pub fn with_props(tag: impl Into<Tag>, props: Props) -> Self {
        Self {
            tag: tag.into(),
            props,
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.set(key, value);
        self
    }

    /// Boolean attribute; `false` omits it from the output
    pub fn flag(self, key: impl Into<String>, on: bool) -> Self {
        self.attr(key, on)
    }

    pub fn style(self, style: Style) -> Self {
        self.attr("style", style)
    }

    pub fn inner_html(mut self, html: impl Into<String>) -> Self {
        self.props.inner_html = Some(html.into());
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        child.into().append_to(&mut self.props.children);
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        for child in children {
            child.into().append_to(&mut self.props.children);
        }
        self
    }

    pub fn tag_name(&self) -> Option<&str> {
        self.tag.name()
    }
}

/// The universal tree unit
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// Absent, null or boolean: renders to nothing
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Element(Element),
}

impl Node {
    /// Fragment wrapping several nodes
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        let mut element = Element::fragment();
        element.props.children.extend(children);
        Node::Element(element)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// String form of a primitive leaf (`Empty` yields "")
    pub fn primitive_text(&self) -> Option<String> {
        match self {
            Node::Empty => Some(String::new()),
            Node::Text(s) => Some(s.clone()),
            Node::Number(n) => Some(format_number(*n)),
            Node::Element(_) => None,
        }
    }

    /// True when no component tag remains anywhere in the tree
    pub fn is_resolved(&self) -> bool {
        match self {
            Node::Element(el) => {
                !el.tag.is_component() && el.props.children.iter().all(Node::is_resolved)
            }
            _ => true,
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Number(n)
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::Number(n as f64)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Number(n as f64)
    }
}

impl From<u32> for Node {
    fn from(n: u32) -> Self {
        Node::Number(n as f64)
    }
}

impl From<usize> for Node {
    fn from(n: usize) -> Self {
        Node::Number(n as f64)
    }
}

impl From<bool> for Node {
    fn from(_: bool) -> Self {
        Node::Empty
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Node::Empty)
    }
}

/// Child argument at construction time: one node, or a list flattened
/// into the parent's children
#[derive(Debug, Clone)]
pub enum Child {
    One(Node),
    Many(Vec<Node>),
}

impl Child {
    fn append_to(self, children: &mut Vec<Node>) {
        match self {
            Child::One(node) => children.push(node),
            Child::Many(nodes) => children.extend(nodes),
        }
    }
}

impl From<Vec<Node>> for Child {
    fn from(nodes: Vec<Node>) -> Self {
        Child::Many(nodes)
    }
}

macro_rules! child_from_node {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Child {
                fn from(value: $ty) -> Self {
                    Child::One(Node::from(value))
                }
            }
        )*
    };
}

child_from_node!(Node, Element, &str, String, f64, i32, i64, u32, usize, bool);

impl<T: Into<Node>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        Child::One(Node::from(value))
    }
}

/// Build an element, flattening list children one level
pub fn h(tag: impl Into<Tag>, props: Props, children: impl IntoIterator<Item = Child>) -> Node {
    let mut element = Element::with_props(tag, props);
    element.props.children.clear();
    for child in children {
        child.append_to(&mut element.props.children);
    }
    Node::Element(element)
}

/// String form of a number: integral values print without a fraction,
/// magnitudes at or above 1e21 or below 1e-6 use exponent form (`1e+21`, `1e-7`)
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let word = if n > 0.0 { "Infinity" } else { "-Infinity" };
        word.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

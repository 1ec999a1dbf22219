//! Tag classifiers

use crate::types::Node;

/// HTML5 void elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Void elements never have children or a closing tag
pub fn is_self_closing(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Renders to nothing
pub fn is_empty_node(node: &Node) -> bool {
    node.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements() {
        for tag in VOID_ELEMENTS {
            assert!(is_self_closing(tag));
        }
        assert!(!is_self_closing("div"));
        assert!(!is_self_closing("IMG"));
        assert!(!is_self_closing("textarea"));
    }

    #[test]
    fn test_empty_node() {
        assert!(is_empty_node(&Node::Empty));
        assert!(is_empty_node(&Node::from(false)));
        assert!(!is_empty_node(&Node::from("")));
        assert!(!is_empty_node(&Node::from(0)));
    }
}

//! Markup - UI tree model and HTML serializer
//!
//! Pure, synchronous half of JSX-style server rendering.
//!
//! ## Core Design
//!
//! ```text
//! Node tree (Tag::Name | Tag::Fragment | Tag::Component)
//!        ↓  resolved elsewhere (components expanded)
//! Node tree (no Tag::Component) → Renderer → String
//! ```
//!
//! Nodes are plain enums: empty, text, number or element. Elements carry an
//! ordered attribute list, children and optional raw inner HTML.

pub mod attrs;
pub mod classify;
pub mod component;
pub mod encode;
pub mod error;
pub mod json;
pub mod serializer;
pub mod types;

pub use async_trait::async_trait;
pub use component::{component_fn, Component, FnComponent};
pub use error::{BoxError, MarkupError, Result};
pub use serializer::{RenderOptions, RenderPolicy, Renderer};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_page() {
        let page = h(
            "main",
            Props::new().with("id", "app"),
            vec![
                Child::from(Element::new("h1").child("Title")),
                Child::from(Element::new("img").attr("src", "a.png").attr("alt", "")),
            ],
        );

        assert_eq!(
            Renderer::new().render(&page).unwrap(),
            "<main id=\"app\">\n    <h1>Title</h1>\n    <img src=\"a.png\" alt=\"\" />\n</main>"
        );
    }
}

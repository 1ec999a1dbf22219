//! Component trait - callable element tags
//!
//! A component receives the props of the element it tags and produces a
//! replacement node, possibly after awaiting other work. The replacement may
//! itself be component-tagged; the resolver keeps expanding until a plain
//! node comes out.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

use crate::error::BoxError;
use crate::types::{Node, Props};

#[async_trait]
pub trait Component: Send + Sync {
    /// Human-readable name for diagnostics
    fn name(&self) -> &str;

    /// Produce the replacement node for an element with these props
    async fn render(&self, props: Props) -> Result<Node, BoxError>;
}

/// Closure-backed component, see [`component_fn`]
pub struct FnComponent<F> {
    name: String,
    func: F,
}

#[async_trait]
impl<F, Fut> Component for FnComponent<F>
where
    F: Fn(Props) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Node, BoxError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn render(&self, props: Props) -> Result<Node, BoxError> {
        (self.func)(props).await
    }
}

/// Wrap an async closure as a component
///
/// # Example
/// ```
/// use markup::{component_fn, Component, Element, Node};
///
/// let greet = component_fn("Greet", |props| async move {
///     let name = props.get_str("name").unwrap_or("world").to_string();
///     Ok(Node::from(Element::new("p").child(format!("Hello, {}", name))))
/// });
/// assert_eq!(greet.name(), "Greet");
/// ```
pub fn component_fn<F, Fut>(name: impl Into<String>, func: F) -> Arc<dyn Component>
where
    F: Fn(Props) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Node, BoxError>> + Send + 'static,
{
    Arc::new(FnComponent {
        name: name.into(),
        func,
    })
}

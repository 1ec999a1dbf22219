//! Resolver - expand component tags into a pure tree
//!
//! Design decisions:
//! 1. A new tree is returned; the input is consumed, never shared
//! 2. Sibling children resolve concurrently, results keep input order
//! 3. Fail fast - the first component error aborts the whole pass, the
//!    remaining sibling futures are dropped. No retries.

use futures_util::future::{try_join_all, BoxFuture};
use futures_util::FutureExt;
use markup::{Element, Node, Tag};

use crate::error::{RenderError, Result};

/// Resolve every component in `node`, producing a tree without component tags
///
/// Runs on whatever executor polls it; no task is spawned.
pub fn resolve(node: Node) -> BoxFuture<'static, Result<Node>> {
    async move {
        let node = expand(node).await?;

        match node {
            Node::Element(element) => resolve_children(element).await.map(Node::Element),
            other => Ok(other),
        }
    }
    .boxed()
}

/// Call component tags until something else comes out
async fn expand(mut node: Node) -> Result<Node> {
    loop {
        match node {
            Node::Element(Element {
                tag: Tag::Component(component),
                props,
            }) => {
                tracing::trace!(component = component.name(), "invoking component");
                node = component
                    .render(props)
                    .await
                    .map_err(RenderError::Component)?;
            }
            other => return Ok(other),
        }
    }
}

async fn resolve_children(mut element: Element) -> Result<Element> {
    let children = std::mem::take(&mut element.props.children);
    if children.is_empty() {
        return Ok(element);
    }

    tracing::trace!(
        tag = ?element.tag,
        count = children.len(),
        "resolving children"
    );
    element.props.children = try_join_all(children.into_iter().map(resolve)).await?;

    Ok(element)
}

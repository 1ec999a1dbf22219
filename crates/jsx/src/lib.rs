//! JSX-style server rendering
//!
//! Turns a UI tree (elements, fragments and async components) into an HTML
//! string. No DOM, no browser: the output is the literal markup.
//!
//! # Architecture
//!
//! 1. **Resolve**: expand component tags concurrently, keep sibling order
//! 2. **Render**: serialize the pure tree synchronously under a formatting policy
//!
//! ```text
//! raw tree → resolve() → pure tree → Renderer → String
//! ```
//!
//! # Example
//! ```
//! use jsx::{component_fn, render_jsx, Element, Node, RenderOptions};
//!
//! # tokio_test::block_on(async {
//! let greet = component_fn("Greet", |props| async move {
//!     let name = props.get_str("name").unwrap_or("world").to_string();
//!     Ok(Node::from(Element::new("p").child(format!("Hello, {}", name))))
//! });
//!
//! let page = Element::new("div").child(Element::component(greet).attr("name", "Ada"));
//! let html = render_jsx(page, RenderOptions::default()).await.unwrap();
//! assert_eq!(html, "<div>\n    <p>Hello, Ada</p>\n</div>");
//! # });
//! ```

pub mod error;
pub mod resolver;

pub use error::{RenderError, Result};
pub use markup::*;
pub use resolver::resolve;

/// Resolve `node` and render it to HTML
///
/// Fails only when a component fails; the component's error is returned
/// as-is and no partial output is produced.
pub async fn render_jsx(node: impl Into<Node>, options: RenderOptions) -> Result<String> {
    tracing::debug!(
        pretty = options.pretty,
        max_inline_content_width = options.max_inline_content_width,
        "rendering tree"
    );

    let resolved = resolve(node.into()).await?;
    let html = Renderer::with_options(&options).render(&resolved)?;

    tracing::debug!(bytes = html.len(), "rendered tree");
    Ok(html)
}

/// Render a JSON node document (no components) to HTML
pub async fn render_json(document: &serde_json::Value, options: RenderOptions) -> Result<String> {
    let node = Node::from_json(document)?;
    render_jsx(node, options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    #[tokio::test]
    async fn test_default_options() {
        init_tracing();
        let html = render_jsx(Element::new("div").child("hello"), RenderOptions::default())
            .await
            .unwrap();
        assert_eq!(html, "<div>hello</div>");
    }

    #[tokio::test]
    async fn test_async_page() {
        init_tracing();

        let user_name = component_fn("UserName", |props: Props| async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            let id = props.get("id").map(|v| v.to_string()).unwrap_or_default();
            Ok(Node::from(format!("user-{}", id)))
        });

        let rows: Vec<Node> = (1..=3)
            .map(|id| Element::new("li").child(Element::component(user_name.clone()).attr("id", id)))
            .map(Node::from)
            .collect();

        let page = Element::new("html").child(
            Element::new("body")
                .child(Element::new("h1").attr("class", "title").child("Users"))
                .child(Element::new("ul").children(rows))
                .child(Element::new("input").flag("disabled", true).flag("hidden", false)),
        );

        let html = render_jsx(page, RenderOptions::default()).await.unwrap();
        assert_eq!(
            html,
            [
                "<html>",
                "    <body>",
                "        <h1 class=\"title\">Users</h1>",
                "        <ul>",
                "            <li>user-1</li>",
                "            <li>user-2</li>",
                "            <li>user-3</li>",
                "        </ul>",
                "        <input disabled />",
                "    </body>",
                "</html>",
            ]
            .join("\n")
        );
    }

    #[tokio::test]
    async fn test_compact_rendering() {
        let page = Element::new("p")
            .child("a")
            .child(Element::new("br"))
            .child("b");
        let html = render_jsx(page, RenderOptions::new().pretty(false)).await.unwrap();
        assert_eq!(html, "<p>a<br />b</p>");
    }

    #[tokio::test]
    async fn test_component_fragment_output() {
        let pair = component_fn("Pair", |_props: Props| async move {
            Ok(Node::fragment(vec![
                Element::new("dt").child("k").into(),
                Element::new("dd").child("v").into(),
            ]))
        });

        let html = render_jsx(
            Element::new("dl").child(Element::component(pair)),
            RenderOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(html, "<dl>\n    <dt>k</dt>\n    <dd>v</dd>\n</dl>");
    }

    #[tokio::test]
    async fn test_component_failure_fails_render() {
        let failing = component_fn("Failing", |_props: Props| async move {
            Err::<Node, BoxError>(Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing template",
            )))
        });

        let err = render_jsx(
            Element::new("main").child(Element::component(failing)),
            RenderOptions::default(),
        )
        .await
        .unwrap_err();

        let source = err.component_error().unwrap();
        let io = source.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "missing template");
    }

    #[tokio::test]
    async fn test_render_json_document() {
        let document = serde_json::json!({
            "tag": "div",
            "props": {
                "style": { "backgroundColor": "red" },
                "children": [{ "tag": "img", "props": { "src": "a.png" } }]
            }
        });

        let html = render_json(&document, RenderOptions::default()).await.unwrap();
        assert_eq!(
            html,
            "<div style=\"background-color: red\">\n    <img src=\"a.png\" />\n</div>"
        );
    }

    #[tokio::test]
    async fn test_render_json_malformed() {
        let err = render_json(&serde_json::json!({ "props": {} }), RenderOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::Markup(MarkupError::MalformedNode { .. })
        ));
    }

    #[test]
    fn test_blocking_caller() {
        let html = tokio_test::block_on(render_jsx(
            Node::from("plain & simple"),
            RenderOptions::default(),
        ))
        .unwrap();
        assert_eq!(html, "plain &amp; simple");
    }
}

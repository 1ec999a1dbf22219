//! Render a small page with async components

use jsx::{component_fn, render_jsx, Element, Node, Props, RenderOptions, Style};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Pretend to fetch something slow
    let article = component_fn("Article", |props: Props| async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        let title = props.get_str("title").unwrap_or("Untitled").to_string();
        Ok(Node::from(
            Element::new("article")
                .child(Element::new("h2").child(title))
                .child(Element::new("p").child(
                    "Rendered on the server, with <tags> & entities escaped properly.",
                )),
        ))
    });

    let page = Element::new("html").attr("lang", "en").child(
        Element::new("body")
            .style(Style::new().set("backgroundColor", "white").set("fontFamily", "serif"))
            .child(Element::component(article.clone()).attr("title", "First"))
            .child(Element::component(article).attr("title", "Second"))
            .child(Element::new("textarea").attr("value", "draft \"notes\"")),
    );

    let pretty = render_jsx(page.clone(), RenderOptions::default()).await?;
    println!("{}", pretty);

    let compact = render_jsx(page, RenderOptions::new().pretty(false)).await?;
    println!("\n{}", compact);

    Ok(())
}

//! Text encoding helpers: entities, attribute quoting, CSS joining

use crate::types::Style;

/// Replace `<`, `>`, `&` and `"` with their named entities
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape every double quote in an attribute value. Nothing else is touched.
pub fn quote(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// camelCase → kebab-case: hyphen before each uppercase letter, then lowercase
pub fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(c);
    }
    out.to_lowercase()
}

/// Join declarations as `prop-one: v1; prop-two: v2`
pub fn css(style: &Style) -> String {
    style
        .iter()
        .map(|(property, value)| format!("{}: {}", kebab(property), value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(encode("a < b && c > \"d\""), "a &lt; b &amp;&amp; c &gt; &quot;d&quot;");
        assert_eq!(encode("it's fine"), "it's fine");
    }

    #[test]
    fn test_quote_escapes_every_occurrence() {
        assert_eq!(quote(r#"say "hi" and "bye""#), "say &quot;hi&quot; and &quot;bye&quot;");
        assert_eq!(quote("<b>&"), "<b>&");
    }

    #[test]
    fn test_kebab() {
        assert_eq!(kebab("backgroundColor"), "background-color");
        assert_eq!(kebab("WebkitTransition"), "-webkit-transition");
        assert_eq!(kebab("color"), "color");
    }

    #[test]
    fn test_css_join() {
        let style = Style::new()
            .set("backgroundColor", "red")
            .set("fontSize", "12px");
        assert_eq!(css(&style), "background-color: red; font-size: 12px");
        assert_eq!(css(&Style::new()), "");
    }
}

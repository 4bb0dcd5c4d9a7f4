use pulldown_cmark::{Event, Parser};

/// Renders markdown to HTML. Raw HTML in the source is shown as text, never
/// passed through to the DOM.
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        event => event,
    });
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Cuts `text` to `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown() {
        assert_eq!(to_html("hello world"), "<p>hello world</p>\n");

        let html = to_html("Compila con `rustc`:\n\n```bash\nrustc main.rs\n```");
        assert!(html.contains("<code>rustc</code>"));
        assert!(html.contains("<pre><code class=\"language-bash\">rustc main.rs\n</code></pre>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = to_html("Guión\n\n<img src=x onerror=\"alert(document.cookie)\">");
        assert!(html.starts_with("<p>Guión</p>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));

        let inline = to_html("hola <script>alert(1)</script> mundo");
        assert!(!inline.contains("<script>"));
        assert!(inline.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("corto", 300), "corto");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
        // Never splits a multi-byte character.
        assert_eq!(truncate("ñññññ", 2), "ññ...");
    }
}

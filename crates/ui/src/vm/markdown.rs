use std::collections::HashSet;

/// Render AI-generated markdown to HTML safe to inject into the view.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

/// Strip everything but basic formatting; the explanation comes from an
/// external model and is untrusted.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "h1", "h2", "h3", "h4", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    ammonia::Builder::new().tags(tags).clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown_structure() {
        let html = markdown_to_html("## Deeper explanation\n\n- one\n- two\n\n`inode`");
        assert!(html.contains("<h2>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<code>inode</code>"));
    }

    #[test]
    fn strips_scripts_and_event_handlers() {
        let html = sanitize_html("<p onclick=\"x()\">hi</p><script>alert(1)</script>");
        assert!(!html.contains("script"));
        assert!(!html.contains("onclick"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn drops_links_and_images_entirely() {
        let html = markdown_to_html("[click](https://example.com) ![img](x.png)");
        assert!(!html.contains("<a"));
        assert!(!html.contains("<img"));
    }
}

//! Block-level markup rendering (CommonMark → HTML).
//!
//! Code blocks and inline code spans bypass the default HTML writer and go
//! through the highlighter instead.

use super::highlight::{self, Highlighted};
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render `raw` to HTML.
pub fn render(raw: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut events: Vec<Event> = Vec::new();
    let mut code_block: Option<(Option<String>, String)> = None;

    for event in Parser::new_ext(raw, options) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let hint = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().map(str::to_string)
                    }
                    CodeBlockKind::Indented => None,
                };
                code_block = Some((hint, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((hint, code)) = code_block.take() {
                    let block = render_code_block(&code, hint.as_deref());
                    events.push(Event::Html(CowStr::from(block)));
                }
            }
            Event::Text(text) if code_block.is_some() => {
                if let Some((_, code)) = code_block.as_mut() {
                    code.push_str(&text);
                }
            }
            Event::Code(code) => {
                let Highlighted { html, .. } = highlight::highlight(&code, None);
                events.push(Event::InlineHtml(CowStr::from(format!("<code>{}</code>", html))));
            }
            other => events.push(other),
        }
    }

    let mut out = String::with_capacity(raw.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

fn render_code_block(code: &str, hint: Option<&str>) -> String {
    let Highlighted { html, language } = highlight::highlight(code, hint);
    match language {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            lang, html
        ),
        None => format!("<pre><code>{}</code></pre>\n", html),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn paragraph_and_emphasis() {
        assert_eq!(render("Hello *world*"), "<p>Hello <em>world</em></p>\n");
    }

    #[test]
    fn headings_and_lists() {
        let out = render("# Title\n\n- one\n- two\n");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<li>one</li>"));
        assert!(out.contains("<li>two</li>"));
    }

    #[test]
    fn fenced_code_with_known_language() {
        let out = render("```js\nvar a = 1;\n```\n");
        assert!(out.starts_with("<pre><code class=\"language-js\">"), "got: {}", out);
        assert!(out.contains("<span class="));
    }

    #[test]
    fn fenced_code_with_unknown_language_is_plain() {
        let out = render("```nonsense\na < b\n```\n");
        assert_eq!(out, "<pre><code>a &lt; b\n</code></pre>\n");
    }

    #[test]
    fn indented_prose_is_plain() {
        let out = render("    hello world\n");
        assert_eq!(out, "<pre><code>hello world\n</code></pre>\n");
    }

    #[test]
    fn indented_javascript_is_guessed() {
        let out = render("    var a = function() { return 1; };\n");
        assert!(out.starts_with("<pre><code class=\"language-js\">"), "got: {}", out);
        assert!(out.contains("<span class="));
    }

    #[test]
    fn unlabelled_fence_is_guessed() {
        let out = render("```\nvar a = function() { return 1; };\n```\n");
        assert!(out.starts_with("<pre><code class=\"language-js\">"), "got: {}", out);
    }

    #[test]
    fn inline_code_is_escaped() {
        assert_eq!(render("Use `x & y`"), "<p>Use <code>x &amp; y</code></p>\n");
    }

    #[test]
    fn inline_javascript_is_highlighted() {
        let out = render("Call `var a = 1;` now");
        assert!(out.contains("<code><span class="), "got: {}", out);
    }

    #[test]
    fn tags_survive_rendering() {
        let out = render("See {@link Foo#bar}.");
        assert_eq!(out, "<p>See {@link Foo#bar}.</p>\n");
    }
}

//! Syntax highlighting for code blocks and inline code.
//!
//! Produces class-based `<span>` markup so the page stylesheet owns the
//! colours. The language comes from the fence label, then from first-line
//! detection, then from a content guess over the syntaxes API docs usually
//! embed. Anything still unclassified comes back as plain, escaped code.

use std::sync::LazyLock;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{ParseState, ScopeStackOp, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Syntaxes tried, in order, when nothing names the language.
const GUESS_ORDER: &[&str] = &["js", "json", "html"];

/// Scope prefixes that show a syntax actually recognized something.
/// Operators and plain identifiers match almost any text, so they don't count.
const SIGNIFICANT_SCOPES: &[&str] = &[
    "keyword.control",
    "keyword.other",
    "storage",
    "string",
    "constant.numeric",
    "constant.language",
    "entity.name",
    "support.function",
    "variable.function",
    "variable.language",
];

/// Highlighted markup plus the language it was detected as.
#[derive(Debug, PartialEq, Eq)]
pub struct Highlighted {
    pub html: String,
    pub language: Option<String>,
}

/// Highlight `code`, using `hint` (a fence info token) when it names a known
/// syntax and falling back to detection from the code itself.
pub fn highlight(code: &str, hint: Option<&str>) -> Highlighted {
    let Some(syntax) = detect(code, hint) else {
        return plain(code);
    };
    match classed_html(code, syntax) {
        Ok(html) => Highlighted {
            html,
            language: Some(language_id(syntax)),
        },
        Err(e) => {
            log::debug!("highlighting as {} failed: {}", syntax.name, e);
            plain(code)
        }
    }
}

fn detect(code: &str, hint: Option<&str>) -> Option<&'static SyntaxReference> {
    let by_hint = hint
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .and_then(|h| SYNTAXES.find_syntax_by_token(h));
    by_hint
        .or_else(|| SYNTAXES.find_syntax_by_first_line(code))
        .filter(|syntax| syntax.name != "Plain Text")
        .or_else(|| guess(code))
}

/// First syntax in [`GUESS_ORDER`] that parses `code` cleanly and finds
/// something significant in it.
///
/// Code holding an inline tag (`{@link ...}`) is never guessed: spans would
/// split the tag before the tag passes run.
fn guess(code: &str) -> Option<&'static SyntaxReference> {
    if code.contains("{@") {
        return None;
    }
    GUESS_ORDER
        .iter()
        .filter_map(|token| SYNTAXES.find_syntax_by_token(token))
        .find(|syntax| recognizes(code, syntax))
}

fn recognizes(code: &str, syntax: &SyntaxReference) -> bool {
    let mut state = ParseState::new(syntax);
    let mut significant = false;
    for line in LinesWithEndings::from(code) {
        let Ok(ops) = state.parse_line(line, &SYNTAXES) else {
            return false;
        };
        for (_, op) in ops {
            if let ScopeStackOp::Push(scope) = op {
                let name = scope.build_string();
                if name.starts_with("invalid") {
                    return false;
                }
                significant |= SIGNIFICANT_SCOPES.iter().any(|p| name.starts_with(p));
            }
        }
    }
    significant
}

fn classed_html(code: &str, syntax: &SyntaxReference) -> Result<String, syntect::Error> {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    Ok(generator.finalize())
}

/// Short language name for the `language-*` class, e.g. `js` for JavaScript.
fn language_id(syntax: &SyntaxReference) -> String {
    syntax
        .file_extensions
        .first()
        .cloned()
        .unwrap_or_else(|| syntax.name.to_lowercase().replace(' ', "-"))
}

fn plain(code: &str) -> Highlighted {
    Highlighted {
        html: html_escape(code),
        language: None,
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hint_is_highlighted() {
        let out = highlight("var x = 1;\n", Some("js"));
        assert_eq!(out.language.as_deref(), Some("js"));
        assert!(out.html.contains("<span class="), "got: {}", out.html);
        assert!(out.html.contains("var"));
    }

    #[test]
    fn shebang_detected_without_hint() {
        let out = highlight("#!/bin/bash\necho hi\n", None);
        assert!(out.language.is_some());
        assert!(out.html.contains("<span class="));
    }

    #[test]
    fn unknown_language_falls_back_to_plain() {
        let out = highlight("a < b && c\n", Some("no-such-language"));
        assert_eq!(out.language, None);
        assert_eq!(out.html, "a &lt; b &amp;&amp; c\n");
    }

    #[test]
    fn undetectable_code_is_escaped() {
        let out = highlight("hello world\n", None);
        assert_eq!(
            out,
            Highlighted {
                html: "hello world\n".into(),
                language: None,
            }
        );
    }

    #[test]
    fn unlabelled_javascript_is_guessed() {
        let out = highlight("var a = function() { return 1; };\n", None);
        assert_eq!(out.language.as_deref(), Some("js"));
        assert!(out.html.contains("<span class="), "got: {}", out.html);
    }

    #[test]
    fn unknown_hint_still_guesses_from_content() {
        let out = highlight("var a = 1;\n", Some("no-such-language"));
        assert_eq!(out.language.as_deref(), Some("js"));
    }

    #[test]
    fn markup_is_guessed_as_html() {
        let out = highlight("<div class=\"x\">hi</div>\n", None);
        assert!(out.language.is_some());
        assert!(out.html.contains("<span class="));
    }

    #[test]
    fn code_with_inline_tag_is_not_guessed() {
        let out = highlight("{@link Foo!show}", None);
        assert_eq!(out.language, None);
        assert_eq!(out.html, "{@link Foo!show}");
    }
}

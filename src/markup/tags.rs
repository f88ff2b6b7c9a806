//! Inline cross-reference and image tags.
//!
//! Two tags are recognized in rendered text:
//!
//! - `{@link target}` / `{@link target label}`: a link to another page.
//!   `!` in the target separates scope from member and becomes `-`.
//! - `{@img source}` / `{@img source caption}`: an inline image.
//!
//! Arguments are separated by whitespace or by the escaped newline token `\n`
//! (backslash followed by `n`). A link may be wrapped in stray quote or
//! backtick characters, which are consumed along with the tag.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

/// Whitespace run or escaped newline token.
const SEP: &str = r"(?:\s|\\n)+";

/// Quote characters allowed around a link tag (`"` arrives entity-escaped).
const WRAP: &str = r#"(?:["'`]|&quot;)*"#;

/// `<keyword> <arg>[ <rest>]}` tail shared by both tags.
fn tag_pattern(keyword: &str) -> String {
    format!(r"\{{@{keyword}{SEP}([^\s}}\\]+)(?:{SEP}([^}}]*?))?\s*\}}")
}

static LINK_PATTERN: LazyLock<String> =
    LazyLock::new(|| format!("{WRAP}{}{WRAP}", tag_pattern("link")));

static IMG_PATTERN: LazyLock<String> = LazyLock::new(|| tag_pattern("img"));

static RE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(&LINK_PATTERN).unwrap());

static RE_IMG: LazyLock<Regex> = LazyLock::new(|| Regex::new(&IMG_PATTERN).unwrap());

static RE_LINK_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{}$", *LINK_PATTERN)).unwrap());

static RE_IMG_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{}$", *IMG_PATTERN)).unwrap());

// -- Tag model ----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineTag {
    Link(LinkTag),
    Image(ImageTag),
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    /// Target as written, before `!` is rewritten
    pub target: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTag {
    pub source: String,
    /// Parsed but not rendered
    #[allow(dead_code)]
    pub caption: Option<String>,
}

impl LinkTag {
    /// Target with the scope separator `!` rewritten to `-`.
    pub fn resolved_target(&self) -> String {
        self.target.replace('!', "-")
    }

    /// Member-local name: whatever follows the last `-` or `#` of the resolved target.
    pub fn member_name(&self) -> String {
        let target = self.resolved_target();
        target
            .rsplit(|c: char| c == '-' || c == '#')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self.member_name(),
        }
    }

    /// Page URL for the target.
    ///
    /// A `#` after the first character marks a fragment and gets `.html`
    /// inserted in front of it. A target starting with `#` is not treated as
    /// a same-page anchor: it gets `.html` appended like any other target.
    pub fn href(&self) -> String {
        let target = self.resolved_target();
        match target.find('#') {
            Some(pos) if pos > 0 => target.replacen('#', ".html#", 1),
            _ => format!("{}.html", target),
        }
    }

    pub fn to_html(&self) -> String {
        format!("<a href=\"{}\">{}</a>", self.href(), self.display_label())
    }
}

impl ImageTag {
    pub fn to_html(&self) -> String {
        format!("<img src=\"{}\" />", self.source)
    }
}

// -- Parsing ------------------------------------------------------------------

/// Parse a complete tag, including any quote characters wrapped around a link.
pub fn parse_tag(candidate: &str) -> InlineTag {
    if let Some(caps) = RE_LINK_EXACT.captures(candidate) {
        return InlineTag::Link(link_from(&caps));
    }
    if let Some(caps) = RE_IMG_EXACT.captures(candidate) {
        return InlineTag::Image(image_from(&caps));
    }
    InlineTag::NoMatch
}

fn link_from(caps: &Captures) -> LinkTag {
    LinkTag {
        target: caps[1].to_string(),
        label: optional_arg(caps),
    }
}

fn image_from(caps: &Captures) -> ImageTag {
    ImageTag {
        source: caps[1].to_string(),
        caption: optional_arg(caps),
    }
}

/// Second argument; a blank one counts as absent.
fn optional_arg(caps: &Captures) -> Option<String> {
    caps.get(2)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// -- Rewriting ----------------------------------------------------------------

/// Replace every `{@link ...}` tag with an anchor element.
pub fn rewrite_links(html: &str) -> String {
    RE_LINK
        .replace_all(html, |caps: &Captures| match parse_tag(&caps[0]) {
            InlineTag::Link(link) => link.to_html(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Replace every `{@img ...}` tag with an image element.
pub fn rewrite_images(html: &str) -> String {
    RE_IMG
        .replace_all(html, |caps: &Captures| match parse_tag(&caps[0]) {
            InlineTag::Image(image) => image.to_html(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

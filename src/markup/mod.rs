//! Markup transformer — raw doc text to embeddable HTML.
//!
//! Runs three passes in a fixed order:
//!
//! 1. **Block rendering** — CommonMark with highlighted code
//! 2. **Links** — `{@link ...}` tags to anchors
//! 3. **Images** — `{@img ...}` tags to image elements
//!
//! Only passes 2 and 3 are safe to re-run on their own output.

pub mod block;
pub mod highlight;
pub mod tags;

/// Transform one raw text block. Pure: the same input always gives the same output.
pub fn transform(raw: &str) -> String {
    let html = block::render(raw);
    let html = tags::rewrite_links(&html);
    tags::rewrite_images(&html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_empty_markup() {
        assert_eq!(transform(""), "");
    }

    #[test]
    fn full_pipeline() {
        let out = transform("Shows a {@link Ext!Panel panel}.\n\n{@img images/panel.png Panel}");
        assert_eq!(
            out,
            "<p>Shows a <a href=\"Ext-Panel.html\">panel</a>.</p>\n<p><img src=\"images/panel.png\" /></p>\n"
        );
    }

    #[test]
    fn quoted_link_loses_quotes() {
        let out = transform("Fires \"{@link Foo#bar}\" first");
        assert_eq!(out, "<p>Fires <a href=\"Foo.html#bar\">bar</a> first</p>\n");
    }

    #[test]
    fn link_inside_inline_code() {
        let out = transform("Call `{@link Foo!show}`");
        assert_eq!(out, "<p>Call <code><a href=\"Foo-show.html\">show</a></code></p>\n");
    }

    #[test]
    fn link_and_image_passes_are_idempotent() {
        let out = transform("{@link A#b} {@img x.png}");
        assert_eq!(tags::rewrite_images(&tags::rewrite_links(&out)), out);
    }
}

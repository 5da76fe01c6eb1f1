//! Tooltip markup. Every piece of page-supplied text is escaped, since class
//! names and ids come from arbitrary pages.

use std::fmt::Write;

use super::{TooltipBody, TooltipView, NO_UTILITIES_MESSAGE};

/// Render the tooltip's inner HTML.
pub fn render(view: &TooltipView) -> String {
    let mut out = String::with_capacity(256);
    let _ = write!(
        out,
        r#"<div class="twl-tooltip-tag">{}</div>"#,
        html_escape(&view.label)
    );

    match &view.body {
        TooltipBody::NoUtilities { classes } => {
            let _ = write!(out, r#"<div class="twl-no-tailwind">{NO_UTILITIES_MESSAGE}</div>"#);
            if !classes.is_empty() {
                push_header(&mut out, &view.header());
                push_chips(&mut out, classes, "twl-class-chip twl-class-chip-other");
            }
        }
        TooltipBody::Utilities { classes, css } => {
            push_header(&mut out, &view.header());
            push_chips(&mut out, classes, "twl-class-chip");

            if !css.is_empty() {
                out.push_str(r#"<div class="twl-css-output">"#);
                for line in css {
                    out.push_str(r#"<div class="twl-css-line">"#);
                    match &line.property {
                        Some(property) => {
                            let _ = write!(
                                out,
                                r#"<span class="twl-css-prop">{}: </span>"#,
                                html_escape(property)
                            );
                        }
                        None => out.push_str(r#"<span class="twl-css-prop"></span>"#),
                    }
                    let _ = write!(
                        out,
                        r#"<span class="twl-css-value">{}</span></div>"#,
                        html_escape(&line.value)
                    );
                }
                out.push_str("</div>");
            }
        }
    }

    out
}

fn push_header(out: &mut String, text: &str) {
    let _ = write!(out, r#"<div class="twl-tooltip-header">{}</div>"#, html_escape(text));
}

fn push_chips(out: &mut String, classes: &[String], chip_class: &str) {
    out.push_str(r#"<div class="twl-tooltip-classes">"#);
    for class in classes {
        let _ = write!(out, r#"<span class="{chip_class}">{}</span>"#, html_escape(class));
    }
    out.push_str("</div>");
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::ClassDb;
    use crate::tooltip::ElementInfo;

    #[test]
    fn renders_css_lines() {
        let db = ClassDb::from_entries([("p-4", "padding: 1rem")]);
        let el = ElementInfo::new("div", "main", ["p-4", "flex"]);
        let html = render(&TooltipView::build(&el, Some(&db)));

        assert!(html.starts_with(r#"<div class="twl-tooltip-tag">&lt;div#main&gt;</div>"#));
        assert!(html.contains("Tailwind Classes (2)"));
        assert!(html.contains(r#"<span class="twl-class-chip">flex</span>"#));
        assert!(html.contains(
            r#"<span class="twl-css-prop">padding: </span><span class="twl-css-value">1rem</span>"#
        ));
    }

    #[test]
    fn omits_css_section_without_matches() {
        let el = ElementInfo::new("div", "", ["flex"]);
        let html = render(&TooltipView::build(&el, Some(&ClassDb::default())));
        assert!(!html.contains("twl-css-output"));
    }

    #[test]
    fn no_utilities_without_classes_has_only_message() {
        let el = ElementInfo::new("p", "", Vec::<String>::new());
        let html = render(&TooltipView::build(&el, None));
        assert!(html.contains(NO_UTILITIES_MESSAGE));
        assert!(!html.contains("twl-tooltip-classes"));
    }

    #[test]
    fn escapes_page_text() {
        let el = ElementInfo::new("div", "\"><script>", ["<b>"]);
        let html = render(&TooltipView::build(&el, None));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}

pub mod classifier;
pub mod coordinator;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod lookup;
pub mod message;
pub mod page;
pub mod scan;
pub mod settings;
pub mod tooltip;
pub mod tracker;

#[cfg(feature = "wasm")]
pub mod wasm;

use error::Result;
use lookup::{ClassDb, BUNDLED_DATASET};
use tooltip::{ElementInfo, TooltipView};

/// Parse the class table compiled into the crate.
pub fn bundled_table() -> Result<ClassDb> {
    ClassDb::from_json(BUNDLED_DATASET)
}

/// Tooltip HTML for an element, as the overlay would show it.
pub fn render_tooltip(element: &ElementInfo, table: Option<&ClassDb>) -> String {
    tooltip::html::render(&TooltipView::build(element, table))
}

/// Sorted, unique utility classes used anywhere in an HTML document.
pub fn scan_html(html: &str) -> Vec<String> {
    page::scan_classes(scan::class_attributes(html))
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn end_to_end_card_tooltip() {
        let table = bundled_table().expect("bundled table parses");
        let card = ElementInfo::new(
            "DIV",
            "hero",
            ["card", "md:p-4", "bg-blue-500", "text-white", "shadow-xl"],
        );

        let html = render_tooltip(&card, Some(&table));
        assert!(html.contains("&lt;div#hero&gt;"));
        assert!(html.contains("Tailwind Classes (4)"));
        assert!(html.contains(
            r#"<span class="twl-css-prop">padding: </span><span class="twl-css-value">1rem</span>"#
        ));
        assert!(html.contains("#3b82f6"));
        assert!(!html.contains(">card<"));
    }

    #[test]
    fn end_to_end_plain_markup() {
        let card = ElementInfo::new("nav", "", ["navbar", "js-toggle"]);
        let html = render_tooltip(&card, None);
        assert!(html.contains("No Tailwind classes detected"));
        assert!(html.contains("twl-class-chip-other"));
    }

    #[test]
    fn end_to_end_tooltip_before_table_loads() {
        let el = ElementInfo::new("p", "", ["text-sm", "leading-6"]);
        let html = render_tooltip(&el, None);
        assert!(html.contains("Tailwind Classes (2)"));
        assert!(!html.contains("twl-css-output"));
    }

    #[test]
    fn end_to_end_scan() {
        let html = r#"<main class="container mx-auto"><h1 class="text-2xl font-bold title">Hi</h1>
            <button class="btn hover:bg-blue-600 px-4">Go</button><p class="mx-auto">.</p></main>"#;
        assert_eq!(
            scan_html(html),
            vec!["container", "font-bold", "hover:bg-blue-600", "mx-auto", "px-4", "text-2xl"]
        );
    }

    #[test]
    fn end_to_end_scan_survives_stray_markup_in_text() {
        let html = concat!(
            r#"<p>if a <b's case</p><div class="flex p-4">x</div>"#,
            r#"<span class='mt-2'>y</span>"#,
        );
        assert_eq!(scan_html(html), vec!["flex", "mt-2", "p-4"]);
    }
}

//! Tooltip content for an inspected element.
//!
//! [`TooltipView`] is the host-independent description of what the tooltip
//! shows. The wasm host turns it into markup with [`html::render`]; the CLI
//! prints it as text.
//!
//! This module is split into:
//! - `html` — tooltip markup
//! - `css` — stylesheet for the overlay, highlight, tooltip and badge

pub mod css;
pub mod html;

use std::fmt;

use crate::classifier::partition;
use crate::lookup::ClassDb;

/// Shown instead of the class chips when nothing looks like a utility.
pub const NO_UTILITIES_MESSAGE: &str = "No Tailwind classes detected";

/// Header above the raw class list when nothing looks like a utility.
pub const RAW_CLASSES_HEADER: &str = "Classes";

/// What the host knows about an element under the pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementInfo {
    /// Tag name as reported by the DOM (any case).
    pub tag: String,
    /// `id` attribute; empty when absent.
    pub id: String,
    /// Class list in attribute order.
    pub classes: Vec<String>,
}

impl ElementInfo {
    pub fn new(
        tag: impl Into<String>,
        id: impl Into<String>,
        classes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            tag: tag.into(),
            id: id.into(),
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// `<div#main>`, or `<div>` without an id.
    pub fn label(&self) -> String {
        let tag = self.tag.to_lowercase();
        if self.id.is_empty() {
            format!("<{tag}>")
        } else {
            format!("<{tag}#{}>", self.id)
        }
    }

    /// Utility classes in attribute order.
    pub fn utility_classes(&self) -> Vec<&str> {
        partition(self.classes.iter().map(String::as_str)).0
    }

    /// Text copied to the clipboard on click: utility classes joined by
    /// spaces, or `None` when there are none.
    pub fn clipboard_text(&self) -> Option<String> {
        let utilities = self.utility_classes();
        if utilities.is_empty() {
            None
        } else {
            Some(utilities.join(" "))
        }
    }
}

/// One row of the CSS section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssLine {
    /// The class as written on the element.
    pub class: String,
    /// `None` when the declaration had no colon.
    pub property: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipBody {
    /// No utility classes; `classes` is the raw class list (maybe empty).
    NoUtilities { classes: Vec<String> },
    /// Utility classes, and the declarations found for them. `css` is empty
    /// when the table is not loaded or nothing matched.
    Utilities { classes: Vec<String>, css: Vec<CssLine> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipView {
    pub label: String,
    pub body: TooltipBody,
}

impl TooltipView {
    /// Partition the element's classes and resolve declarations for the
    /// utility ones. `table` is `None` while the dataset is not loaded.
    pub fn build(element: &ElementInfo, table: Option<&ClassDb>) -> Self {
        let (utilities, others) = partition(element.classes.iter().map(String::as_str));

        let body = if utilities.is_empty() {
            TooltipBody::NoUtilities {
                classes: others.into_iter().map(str::to_string).collect(),
            }
        } else {
            let css: Vec<CssLine> = table
                .map(|db| {
                    utilities
                        .iter()
                        .filter_map(|class| {
                            db.declaration(class).map(|d| CssLine {
                                class: class.to_string(),
                                property: d.property.map(str::to_string),
                                value: d.value.to_string(),
                            })
                        })
                        .collect()
                })
                .unwrap_or_default();
            TooltipBody::Utilities {
                classes: utilities.into_iter().map(str::to_string).collect(),
                css,
            }
        };

        Self {
            label: element.label(),
            body,
        }
    }

    /// `Tailwind Classes (N)` header text, for the utility case.
    pub fn header(&self) -> String {
        match &self.body {
            TooltipBody::Utilities { classes, .. } => {
                format!("Tailwind Classes ({})", classes.len())
            }
            TooltipBody::NoUtilities { .. } => RAW_CLASSES_HEADER.to_string(),
        }
    }
}

/// Plain-text rendering, used by the CLI.
impl fmt::Display for TooltipView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        match &self.body {
            TooltipBody::NoUtilities { classes } => {
                writeln!(f, "{NO_UTILITIES_MESSAGE}")?;
                if !classes.is_empty() {
                    writeln!(f, "{}: {}", self.header(), classes.join(" "))?;
                }
            }
            TooltipBody::Utilities { classes, css } => {
                writeln!(f, "{}: {}", self.header(), classes.join(" "))?;
                for line in css {
                    match &line.property {
                        Some(property) => writeln!(f, "  {property}: {}", line.value)?,
                        None => writeln!(f, "  {}", line.value)?,
                    }
                }
            }
        }
        Ok(())
    }
}

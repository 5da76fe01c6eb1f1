//! Utility class detection.
//!
//! A class name is a utility when, after its variant markers are stripped,
//! it starts with (or equals) one of a fixed set of utility prefixes, or
//! carries an arbitrary value in brackets (`w-[200px]`).
//!
//! Matching is deliberately over-inclusive: `my-component` is reported as a
//! utility because `my-` is the margin-y prefix. The tooltip then simply
//! shows no CSS for it.

/// Variant markers stripped from the front of a class name before matching.
///
/// No marker is a prefix of another, so stripping greedily in any order
/// reaches the same base.
pub const VARIANT_MARKERS: &[&str] = &[
    // Responsive
    "sm:",
    "md:",
    "lg:",
    "xl:",
    "2xl:",
    // State
    "hover:",
    "focus:",
    "active:",
    "disabled:",
    "dark:",
    "group-hover:",
    "focus-within:",
    "focus-visible:",
    "first:",
    "last:",
    "odd:",
    "even:",
    "motion-reduce:",
    "motion-safe:",
    // Important
    "!",
];

/// Utility prefixes, checked in order. An entry matches when the base equals
/// it or starts with it.
pub const UTILITY_PREFIXES: &[&str] = &[
    // Layout
    "block", "inline", "flex", "grid", "hidden", "table", "contents",
    // Spacing
    "p-", "px-", "py-", "pt-", "pr-", "pb-", "pl-", "m-", "mx-", "my-",
    "mt-", "mr-", "mb-", "ml-", "gap-", "space-",
    // Sizing
    "w-", "h-", "min-w-", "min-h-", "max-w-", "max-h-", "size-",
    // Typography
    "text-", "font-", "leading-", "tracking-", "uppercase", "lowercase",
    "capitalize", "normal-case", "truncate", "line-clamp-",
    // Colors & backgrounds
    "bg-", "border-", "ring-", "outline-", "divide-", "accent-",
    "fill-", "stroke-", "decoration-", "caret-", "placeholder-",
    // Effects
    "shadow", "shadow-", "opacity-", "blur-", "brightness-", "contrast-",
    "drop-shadow-", "grayscale", "invert", "sepia", "saturate-", "hue-rotate-",
    // Borders
    "rounded", "rounded-", "border",
    // Positioning
    "static", "fixed", "absolute", "relative", "sticky",
    "top-", "right-", "bottom-", "left-", "inset-", "z-",
    // Flex/Grid
    "flex-", "grow", "shrink", "basis-", "justify-", "items-", "self-",
    "order-", "grid-cols-", "grid-rows-", "col-span-", "row-span-",
    "auto-cols-", "auto-rows-", "place-",
    // Overflow
    "overflow-", "overscroll-",
    // Transitions
    "transition", "transition-", "duration-", "ease-", "delay-",
    // Transforms
    "scale-", "rotate-", "translate-", "skew-", "origin-",
    // Interactivity
    "cursor-", "select-", "resize", "scroll-", "snap-", "touch-",
    "pointer-events-", "appearance-", "will-change-",
    // Visibility
    "visible", "invisible", "collapse",
    // Accessibility
    "sr-only", "not-sr-only",
    // Object
    "object-",
    // Aspect ratio
    "aspect-",
    // Columns
    "columns-",
    // Break
    "break-",
    // Float/Clear
    "float-", "clear-",
    // Isolation
    "isolate", "isolation-",
    // Container
    "container",
    // Whitespace
    "whitespace-",
    // Word/Hyphens
    "hyphens-",
    // Content
    "content-",
    // Width/Height shortcuts
    "full", "screen",
    // Variants left over after stripping
    "sm:", "md:", "lg:", "xl:", "2xl:",
    "hover:", "focus:", "active:", "disabled:", "first:", "last:",
    "odd:", "even:", "group-hover:", "focus-within:", "focus-visible:",
    "dark:", "motion-reduce:", "motion-safe:",
    // Negative values
    "-m-", "-mx-", "-my-", "-mt-", "-mr-", "-mb-", "-ml-",
    "-p-", "-top-", "-right-", "-bottom-", "-left-", "-inset-",
    "-translate-", "-rotate-", "-skew-", "-order-", "-z-",
    "-tracking-", "-indent-", "-scroll-",
];

/// Why a class name was accepted as a utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// The base equals or starts with this prefix.
    Prefix(&'static str),
    /// The base contains a bracketed arbitrary value.
    Arbitrary,
}

/// Result of classifying one class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    /// The class name with its variant markers stripped.
    pub base: &'a str,
    /// `None` when the name is not a utility.
    pub matched: Option<Match>,
}

impl Classification<'_> {
    pub fn is_utility(&self) -> bool {
        self.matched.is_some()
    }
}

/// Strip the leading run of variant markers from a class name.
///
/// `hover:dark:bg-blue-600` becomes `bg-blue-600`; names without markers
/// are returned unchanged.
pub fn strip_variants(name: &str) -> &str {
    let mut rest = name;
    'outer: loop {
        for marker in VARIANT_MARKERS {
            if let Some(stripped) = rest.strip_prefix(*marker) {
                rest = stripped;
                continue 'outer;
            }
        }
        return rest;
    }
}

/// Classify a single class name.
pub fn classify(name: &str) -> Classification<'_> {
    let base = strip_variants(name);
    let matched = if name.is_empty() {
        None
    } else if let Some(prefix) = UTILITY_PREFIXES.iter().find(|p| base.starts_with(**p)) {
        Some(Match::Prefix(*prefix))
    } else if has_arbitrary_value(base) {
        Some(Match::Arbitrary)
    } else {
        None
    };
    Classification { base, matched }
}

/// Shorthand for `classify(name).is_utility()`.
pub fn is_utility(name: &str) -> bool {
    classify(name).is_utility()
}

/// Split a class list into (utility, other), preserving order within each.
pub fn partition<'a, I>(classes: I) -> (Vec<&'a str>, Vec<&'a str>)
where
    I: IntoIterator<Item = &'a str>,
{
    classes.into_iter().partition(|c| is_utility(c))
}

/// True when `s` has a `[`, at least one character, then a `]`.
fn has_arbitrary_value(s: &str) -> bool {
    match (s.find('['), s.rfind(']')) {
        (Some(open), Some(close)) => close > open + 1,
        _ => false,
    }
}

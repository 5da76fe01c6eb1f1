//! Page-level inspection context.
//!
//! [`PageContext`] owns everything one page load needs: the hover tracker,
//! the class table cache and the badge state. The driver (the wasm content
//! script, or a test) constructs it, forwards DOM events and messages into
//! it, and performs the fetches it asks for. All page access goes through
//! [`PageHost`].

use std::collections::BTreeSet;
use std::time::Duration;

use crate::classifier::is_utility;
use crate::error::Result;
use crate::geometry::{place_tooltip, Point, Rect, Size};
use crate::lookup::{ClassDb, Dataset, Fetch};
use crate::message::{ClassLookup, PageClasses, Request, Response, ToggleAck};
use crate::settings::Settings;
use crate::tooltip::{ElementInfo, TooltipView};
use crate::tracker::{HoverTracker, Transition};

/// Badge text while inspecting.
pub const BADGE_LABEL: &str = "Tailwind Inspect (Esc to exit)";

/// Badge text after a successful copy.
pub const COPIED_LABEL: &str = "Classes copied!";

/// How long [`COPIED_LABEL`] stays up.
pub const BADGE_FLASH_DURATION: Duration = Duration::from_millis(1500);

/// The page as seen by the inspector.
///
/// Queries take `&self`; overlay updates take `&mut self`. Overlay nodes
/// (highlight, tooltip, badge) are never returned by [`element_at`].
///
/// [`element_at`]: PageHost::element_at
pub trait PageHost {
    /// Handle to a page element.
    type Node: Clone + PartialEq;

    /// Topmost page element at a viewport point, ignoring overlay nodes.
    fn element_at(&self, at: Point) -> Option<Self::Node>;
    fn describe(&self, node: &Self::Node) -> ElementInfo;
    /// Viewport-relative bounding box.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;
    fn scroll_offset(&self) -> Point;
    fn viewport(&self) -> Size;
    /// Class lists of every element carrying a `class` attribute.
    fn class_lists(&self) -> Vec<Vec<String>>;

    /// Called with `true` before any of the drawing calls below, so a host
    /// can create its overlay nodes on first activation.
    fn set_overlay_active(&mut self, active: bool);
    /// Position the highlight box (document coordinates) and show it.
    fn show_highlight(&mut self, rect: Rect);
    fn hide_highlight(&mut self);
    /// Replace the tooltip content, show it, and return its laid-out size
    /// (zero when unknown).
    fn show_tooltip(&mut self, view: &TooltipView) -> Size;
    fn move_tooltip(&mut self, at: Point);
    fn hide_tooltip(&mut self);
    fn set_badge_text(&mut self, text: &str);
}

/// Token for one "copied" flash; pass it back to
/// [`PageContext::restore_badge`] after [`BADGE_FLASH_DURATION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeFlash(u64);

/// Outcome of [`PageContext::dispatch`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    /// The caller must fetch the dataset and hand it to
    /// [`PageContext::dataset_loaded`].
    pub start_fetch: bool,
    /// `false` when the reply will be sent later (after the dataset loads).
    pub replied: bool,
}

pub struct PageContext<H: PageHost> {
    host: H,
    tracker: HoverTracker<H::Node>,
    dataset: Dataset,
    flashes: u64,
}

impl<H: PageHost> PageContext<H> {
    pub fn new(host: H) -> Self {
        Self::with_dataset(host, Dataset::new())
    }

    pub fn with_dataset(host: H, dataset: Dataset) -> Self {
        Self {
            host,
            tracker: HoverTracker::new(),
            dataset,
            flashes: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn is_active(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn target(&self) -> Option<&H::Node> {
        self.tracker.target()
    }

    /// Page start-up: preload the table unless the extension is switched
    /// off. Returns `None` when disabled.
    pub fn init(&mut self, settings: &Settings) -> Option<Fetch> {
        if !settings.enabled {
            log::debug!("extension disabled; skipping class database preload");
            return None;
        }
        Some(self.dataset.ensure_loaded())
    }

    /// Hand over the result of a fetch started after [`Fetch::Start`].
    pub fn dataset_loaded(&mut self, fetched: Result<String>) -> &ClassDb {
        self.dataset.complete(fetched)
    }

    /// Start inspecting: show the overlay and badge, and make sure the
    /// table is on its way.
    pub fn enable(&mut self) -> Fetch {
        if self.tracker.enable() == Transition::Activated {
            log::debug!("inspection enabled");
        }
        self.host.set_overlay_active(true);
        self.host.set_badge_text(BADGE_LABEL);
        self.dataset.ensure_loaded()
    }

    /// Stop inspecting. Always clears the target and hides every overlay
    /// element, whatever the previous state.
    pub fn disable(&mut self) {
        if self.tracker.disable() == Transition::Deactivated {
            log::debug!("inspection disabled");
        }
        self.host.set_overlay_active(false);
        self.host.hide_highlight();
        self.host.hide_tooltip();
    }

    /// Apply a toggle instruction and acknowledge with the resulting state.
    pub fn toggle(&mut self, enabled: bool) -> (ToggleAck, Fetch) {
        let fetch = if enabled {
            self.enable()
        } else {
            self.disable();
            Fetch::Ready
        };
        let ack = ToggleAck {
            ok: true,
            active: Some(self.is_active()),
        };
        (ack, fetch)
    }

    /// Pointer moved to `at` (viewport coordinates).
    pub fn pointer_moved(&mut self, at: Point) {
        if !self.is_active() {
            return;
        }
        let hit = self.host.element_at(at);
        let Some(node) = self.tracker.pointer_moved(hit).cloned() else {
            return;
        };

        let rect = self.host.bounding_rect(&node).offset(self.host.scroll_offset());
        self.host.show_highlight(rect);

        let element = self.host.describe(&node);
        self.render_tooltip(&element, at);
    }

    fn render_tooltip(&mut self, element: &ElementInfo, pointer: Point) {
        let view = TooltipView::build(element, self.dataset.table());
        let size = self.host.show_tooltip(&view);
        let at = place_tooltip(pointer, size, self.host.viewport());
        self.host.move_tooltip(at);
    }

    /// Key pressed while the page has focus.
    pub fn key_pressed(&mut self, key: &str) {
        if self.tracker.key_pressed(key) == Transition::Deactivated {
            self.disable();
        }
    }

    /// Click while inspecting. Returns the text to put on the clipboard:
    /// the target's utility classes, or `None` when there is nothing to
    /// copy. The host swallows the click either way while active.
    pub fn clicked(&self) -> Option<String> {
        let node = self.tracker.target()?;
        self.host.describe(node).clipboard_text()
    }

    /// The clipboard write finished. Shows [`COPIED_LABEL`]; the host calls
    /// [`restore_badge`](Self::restore_badge) with the returned token after
    /// [`BADGE_FLASH_DURATION`].
    pub fn copy_succeeded(&mut self) -> BadgeFlash {
        self.flashes += 1;
        self.host.set_badge_text(COPIED_LABEL);
        BadgeFlash(self.flashes)
    }

    /// Put the badge label back, unless a newer flash took over.
    pub fn restore_badge(&mut self, flash: BadgeFlash) {
        if flash.0 == self.flashes {
            self.host.set_badge_text(BADGE_LABEL);
        }
    }

    /// Message dispatch for the page context.
    ///
    /// `respond` is called exactly once: synchronously for toggles and page
    /// scans, and for lookups as soon as the table is available (on a
    /// failed load, with a miss).
    pub fn dispatch<F>(&mut self, request: Request, respond: F) -> Dispatched
    where
        F: FnOnce(Response) + 'static,
    {
        log::debug!("dispatching {:?}", request.kind());
        match request {
            Request::ToggleInspect { enabled } => {
                let (ack, fetch) = self.toggle(enabled);
                respond(ack.into());
                Dispatched {
                    start_fetch: fetch == Fetch::Start,
                    replied: true,
                }
            }
            Request::LookupClass { class_name } => {
                let fetch = self.dataset.when_ready(move |db| {
                    let css = db.get(&class_name).map(str::to_string);
                    respond(ClassLookup { class_name, css }.into());
                });
                Dispatched {
                    start_fetch: fetch == Fetch::Start,
                    replied: fetch == Fetch::Ready,
                }
            }
            Request::GetPageClasses => {
                respond(self.page_classes().into());
                Dispatched {
                    start_fetch: false,
                    replied: true,
                }
            }
        }
    }

    /// Every utility class used on the page, sorted and de-duplicated.
    pub fn page_classes(&self) -> PageClasses {
        PageClasses {
            classes: scan_classes(self.host.class_lists()),
        }
    }
}

/// Collect the sorted, unique utility classes from a set of class lists.
pub fn scan_classes<L, C>(class_lists: L) -> Vec<String>
where
    L: IntoIterator,
    L::Item: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    let mut found = BTreeSet::new();
    for list in class_lists {
        for class in list {
            let class = class.as_ref();
            if is_utility(class) && !found.contains(class) {
                found.insert(class.to_string());
            }
        }
    }
    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// A page of absolutely positioned boxes; later boxes are on top.
    #[derive(Default)]
    struct FakePage {
        elements: Vec<(ElementInfo, Rect)>,
        scroll: Point,
        viewport: Size,
        tooltip_size: Size,
        overlay_active: bool,
        overlay_created: bool,
        drew_without_overlay: bool,
        highlight: Option<Rect>,
        tooltip: Option<(TooltipView, Option<Point>)>,
        badge: String,
        renders: usize,
    }

    impl FakePage {
        fn new(elements: Vec<(ElementInfo, Rect)>) -> Self {
            Self {
                elements,
                viewport: Size::new(1280.0, 800.0),
                ..Self::default()
            }
        }
    }

    impl PageHost for FakePage {
        type Node = usize;

        fn element_at(&self, at: Point) -> Option<usize> {
            self.elements.iter().rposition(|(_, r)| {
                at.x >= r.x && at.x < r.x + r.width && at.y >= r.y && at.y < r.y + r.height
            })
        }

        fn describe(&self, node: &usize) -> ElementInfo {
            self.elements[*node].0.clone()
        }

        fn bounding_rect(&self, node: &usize) -> Rect {
            self.elements[*node].1
        }

        fn scroll_offset(&self) -> Point {
            self.scroll
        }

        fn viewport(&self) -> Size {
            self.viewport
        }

        fn class_lists(&self) -> Vec<Vec<String>> {
            self.elements
                .iter()
                .filter(|(e, _)| !e.classes.is_empty())
                .map(|(e, _)| e.classes.clone())
                .collect()
        }

        fn set_overlay_active(&mut self, active: bool) {
            self.overlay_created |= active;
            self.overlay_active = active;
        }

        fn show_highlight(&mut self, rect: Rect) {
            self.drew_without_overlay |= !self.overlay_created;
            self.highlight = Some(rect);
        }

        fn hide_highlight(&mut self) {
            self.highlight = None;
        }

        fn show_tooltip(&mut self, view: &TooltipView) -> Size {
            self.drew_without_overlay |= !self.overlay_created;
            self.renders += 1;
            self.tooltip = Some((view.clone(), None));
            self.tooltip_size
        }

        fn move_tooltip(&mut self, at: Point) {
            self.drew_without_overlay |= !self.overlay_created;
            if let Some((_, pos)) = &mut self.tooltip {
                *pos = Some(at);
            }
        }

        fn hide_tooltip(&mut self) {
            self.tooltip = None;
        }

        fn set_badge_text(&mut self, text: &str) {
            self.drew_without_overlay |= !self.overlay_created;
            self.badge = text.to_string();
        }
    }

    fn page() -> PageContext<FakePage> {
        let host = FakePage::new(vec![
            (
                ElementInfo::new("body", "", Vec::<String>::new()),
                Rect::new(0.0, 0.0, 1280.0, 800.0),
            ),
            (
                ElementInfo::new("div", "card", ["card", "p-4", "flex"]),
                Rect::new(100.0, 100.0, 200.0, 100.0),
            ),
            (
                ElementInfo::new("a", "", ["nav-link", "hover:bg-blue-600"]),
                Rect::new(120.0, 120.0, 50.0, 20.0),
            ),
        ]);
        let table = ClassDb::from_entries([
            ("p-4", "padding: 1rem"),
            ("flex", "display: flex"),
            ("bg-blue-600", "background-color: #2563eb"),
        ]);
        PageContext::with_dataset(host, Dataset::with_table(table))
    }

    #[test]
    fn pointer_is_ignored_until_enabled() {
        let mut ctx = page();
        ctx.pointer_moved(Point::new(150.0, 150.0));
        assert_eq!(ctx.target(), None);
        assert_eq!(ctx.host().renders, 0);
    }

    #[test]
    fn hover_highlights_and_renders_once_per_element() {
        let mut ctx = page();
        assert_eq!(ctx.enable(), Fetch::Ready);
        assert!(ctx.host().overlay_active);
        assert_eq!(ctx.host().badge, BADGE_LABEL);

        ctx.host_mut().scroll = Point::new(0.0, 40.0);
        ctx.pointer_moved(Point::new(150.0, 150.0));
        assert_eq!(ctx.target(), Some(&1));
        assert_eq!(ctx.host().highlight, Some(Rect::new(100.0, 140.0, 200.0, 100.0)));

        let (view, pos) = ctx.host().tooltip.clone().expect("tooltip shown");
        assert_eq!(view.label, "<div#card>");
        assert_eq!(pos, Some(Point::new(166.0, 166.0)));

        // Same element: no re-render.
        ctx.pointer_moved(Point::new(160.0, 160.0));
        assert_eq!(ctx.host().renders, 1);

        ctx.pointer_moved(Point::new(130.0, 125.0));
        assert_eq!(ctx.target(), Some(&2));
        assert_eq!(ctx.host().renders, 2);
    }

    #[test]
    fn tooltip_flips_near_right_edge() {
        let mut ctx = page();
        ctx.host_mut().tooltip_size = Size::new(300.0, 100.0);
        let _ = ctx.enable();
        ctx.pointer_moved(Point::new(1200.0, 50.0));
        let (_, pos) = ctx.host().tooltip.clone().unwrap();
        assert_eq!(pos, Some(Point::new(1200.0 - 300.0 - 16.0, 66.0)));
    }

    #[test]
    fn disable_hides_everything_even_without_target() {
        let mut ctx = page();
        ctx.disable();
        assert!(!ctx.host().overlay_active);
        assert_eq!(ctx.host().highlight, None);

        let _ = ctx.enable();
        ctx.pointer_moved(Point::new(150.0, 150.0));
        ctx.disable();
        assert_eq!(ctx.target(), None);
        assert_eq!(ctx.host().highlight, None);
        assert!(ctx.host().tooltip.is_none());
        assert!(!ctx.host().overlay_active);
    }

    #[test]
    fn escape_disables() {
        let mut ctx = page();
        let _ = ctx.enable();
        ctx.pointer_moved(Point::new(150.0, 150.0));
        ctx.key_pressed("Enter");
        assert!(ctx.is_active());
        ctx.key_pressed("Escape");
        assert!(!ctx.is_active());
        assert!(ctx.host().tooltip.is_none());
    }

    #[test]
    fn click_copies_utilities_and_flashes_badge() {
        let mut ctx = page();
        assert_eq!(ctx.clicked(), None);

        let _ = ctx.enable();
        ctx.pointer_moved(Point::new(150.0, 150.0));
        assert_eq!(ctx.clicked().as_deref(), Some("p-4 flex"));

        let first = ctx.copy_succeeded();
        assert_eq!(ctx.host().badge, COPIED_LABEL);
        let second = ctx.copy_succeeded();

        // The stale timer does not cut the newer flash short.
        ctx.restore_badge(first);
        assert_eq!(ctx.host().badge, COPIED_LABEL);
        ctx.restore_badge(second);
        assert_eq!(ctx.host().badge, BADGE_LABEL);
    }

    #[test]
    fn click_on_element_without_utilities_copies_nothing() {
        let mut ctx = page();
        let _ = ctx.enable();
        ctx.pointer_moved(Point::new(5.0, 5.0));
        assert_eq!(ctx.target(), Some(&0));
        assert_eq!(ctx.clicked(), None);
    }

    #[test]
    fn toggle_message_acknowledges_state() {
        let mut ctx = page();
        let reply = Rc::new(RefCell::new(None));

        let r = Rc::clone(&reply);
        let d = ctx.dispatch(Request::ToggleInspect { enabled: true }, move |resp| {
            *r.borrow_mut() = Some(resp)
        });
        assert!(d.replied);
        assert_eq!(
            *reply.borrow(),
            Some(Response::Toggle(ToggleAck {
                ok: true,
                active: Some(true)
            }))
        );

        let r = Rc::clone(&reply);
        let _ = ctx.dispatch(Request::ToggleInspect { enabled: false }, move |resp| {
            *r.borrow_mut() = Some(resp)
        });
        assert_eq!(
            *reply.borrow(),
            Some(Response::Toggle(ToggleAck {
                ok: true,
                active: Some(false)
            }))
        );
    }

    #[test]
    fn lookup_waits_for_dataset() {
        let mut ctx = PageContext::new(FakePage::new(Vec::new()));
        let reply = Rc::new(RefCell::new(None));

        let r = Rc::clone(&reply);
        let d = ctx.dispatch(
            Request::LookupClass {
                class_name: "p-4".to_string(),
            },
            move |resp| *r.borrow_mut() = Some(resp),
        );
        assert_eq!(d, Dispatched { start_fetch: true, replied: false });
        assert!(reply.borrow().is_none());

        ctx.dataset_loaded(Ok(r#"{"p-4": "padding: 1rem"}"#.to_string()));
        assert_eq!(
            *reply.borrow(),
            Some(Response::Lookup(ClassLookup {
                class_name: "p-4".to_string(),
                css: Some("padding: 1rem".to_string()),
            }))
        );
    }

    #[test]
    fn lookup_uses_exact_name() {
        let mut ctx = page();
        let reply = Rc::new(RefCell::new(None));
        let r = Rc::clone(&reply);
        let d = ctx.dispatch(
            Request::LookupClass {
                class_name: "hover:p-4".to_string(),
            },
            move |resp| *r.borrow_mut() = Some(resp),
        );
        assert!(d.replied);
        assert_eq!(
            *reply.borrow(),
            Some(Response::Lookup(ClassLookup {
                class_name: "hover:p-4".to_string(),
                css: None,
            }))
        );
    }

    #[test]
    fn page_scan_is_sorted_and_unique() {
        let mut ctx = page();
        ctx.host_mut().elements.push((
            ElementInfo::new("span", "", ["flex", "text-lg", "js-hook"]),
            Rect::default(),
        ));
        assert_eq!(
            ctx.page_classes().classes,
            vec!["flex", "hover:bg-blue-600", "p-4", "text-lg"]
        );
    }

    #[test]
    fn disabled_settings_skip_preload() {
        let mut ctx = PageContext::new(FakePage::new(Vec::new()));
        let off = Settings {
            enabled: false,
            ..Settings::default()
        };
        assert_eq!(ctx.init(&off), None);
        assert!(!ctx.dataset().is_loading());
        assert_eq!(ctx.init(&Settings::default()), Some(Fetch::Start));
        assert_eq!(ctx.init(&Settings::default()), Some(Fetch::Pending));
    }

    #[test]
    fn overlay_is_created_on_first_enable() {
        let mut ctx = page();
        let off = Settings {
            enabled: false,
            ..Settings::default()
        };
        assert_eq!(ctx.init(&off), None);
        ctx.pointer_moved(Point::new(150.0, 150.0));
        ctx.key_pressed("Escape");
        let _ = ctx.page_classes();
        ctx.disable();
        assert!(!ctx.host().overlay_created);

        let _ = ctx.enable();
        assert!(ctx.host().overlay_created);
        ctx.pointer_moved(Point::new(150.0, 150.0));
        assert_eq!(ctx.clicked().as_deref(), Some("p-4 flex"));
        let flash = ctx.copy_succeeded();
        ctx.restore_badge(flash);
        assert!(!ctx.host().drew_without_overlay);
    }
}

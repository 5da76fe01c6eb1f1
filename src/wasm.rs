//! WASM bindings for the browser extension.
//!
//! One module serves every extension context: the content script calls
//! [`start_content_script`], the service worker [`start_background`], and
//! the popup and options pages use the exported helpers.
//! Build with: `wasm-pack build --target web --features wasm`

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, Window};

use crate::coordinator::{
    on_installed, ControlPanel, InstallReason, Relay, Summary, TabMessenger, SAVED_DISPLAY,
    SAVED_MESSAGE,
};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Size};
use crate::lookup::{Dataset, Fetch, DATASET_PATH, MAX_SEARCH_RESULTS};
use crate::message::{ClassLookup, PageClasses, Request, Response};
use crate::page::{PageContext, PageHost, BADGE_FLASH_DURATION};
use crate::settings::{Settings, SettingsStore, SETTINGS_KEY};
use crate::tooltip::{css::overlay_css, html, ElementInfo, TooltipView};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = getURL)]
    fn runtime_get_url(path: &str) -> String;

    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = sendMessage)]
    fn runtime_send_message(message: &JsValue) -> Promise;

    #[wasm_bindgen(js_namespace = ["chrome", "runtime", "onMessage"], js_name = addListener)]
    fn on_message_add_listener(
        listener: &Closure<dyn FnMut(JsValue, JsValue, Function) -> JsValue>,
    );

    #[wasm_bindgen(js_namespace = ["chrome", "runtime", "onInstalled"], js_name = addListener)]
    fn on_installed_add_listener(listener: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(js_namespace = ["chrome", "storage", "sync"], js_name = get)]
    fn storage_get(key: &str) -> Promise;

    #[wasm_bindgen(js_namespace = ["chrome", "storage", "sync"], js_name = set)]
    fn storage_set(items: &JsValue) -> Promise;

    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = query)]
    fn tabs_query(query: &JsValue) -> Promise;

    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = sendMessage)]
    fn tabs_send_message(tab_id: i32, message: &JsValue) -> Promise;
}

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    crate::logging::init_console(level);
}

// ── JS plumbing ─────────────────────────────────────────────────────────

/// Serialize with `null` for `None`, matching the JSON wire format.
fn to_js<T: Serialize + ?Sized>(value: &T) -> std::result::Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn js_error(context: &str, e: JsValue) -> Error {
    match e.as_string() {
        Some(msg) => Error::fetch(format!("{context}: {msg}")),
        None => Error::fetch(format!("{context}: {e:?}")),
    }
}

/// Run `done` once `promise` settles.
fn on_settled<F>(promise: Promise, done: F)
where
    F: FnOnce(std::result::Result<JsValue, JsValue>) + 'static,
{
    let done = Rc::new(RefCell::new(Some(done)));
    let on_err = Rc::clone(&done);

    let resolve: Closure<dyn FnMut(JsValue)> = Closure::once(move |value: JsValue| {
        let done = done.borrow_mut().take();
        if let Some(done) = done {
            done(Ok(value));
        }
    });
    let reject: Closure<dyn FnMut(JsValue)> = Closure::once(move |e: JsValue| {
        let done = on_err.borrow_mut().take();
        if let Some(done) = done {
            done(Err(e));
        }
    });
    let _ = promise.then2(&resolve, &reject);
    resolve.forget();
    reject.forget();
}

fn set_timeout(window: &Window, after: std::time::Duration, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    let millis = i32::try_from(after.as_millis()).unwrap_or(i32::MAX);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
    {
        log::warn!("setTimeout failed: {e:?}");
    }
}

/// Fetch an extension resource as text.
fn fetch_text(url: &str, done: impl FnOnce(Result<String>) + 'static) {
    let Some(window) = web_sys::window() else {
        done(Err(Error::fetch("no window to fetch from")));
        return;
    };
    on_settled(window.fetch_with_str(url), move |response| {
        let response =
            response.and_then(|r| r.dyn_into::<web_sys::Response>().map_err(JsValue::from));
        let response = match response {
            Ok(response) => response,
            Err(e) => return done(Err(js_error("fetch", e))),
        };
        if !response.ok() {
            return done(Err(Error::fetch(format!("HTTP {}", response.status()))));
        }
        match response.text() {
            Ok(body) => on_settled(body, move |text| {
                done(text.map_err(|e| js_error("response body", e)).and_then(|v| {
                    v.as_string()
                        .ok_or_else(|| Error::fetch("response body is not text"))
                }));
            }),
            Err(e) => done(Err(js_error("response body", e))),
        }
    });
}

/// Send a message to the content script of the active tab.
fn message_active_tab<F>(message: JsValue, done: F)
where
    F: FnOnce(std::result::Result<JsValue, JsValue>) + 'static,
{
    let query = match to_js(&serde_json::json!({ "active": true, "currentWindow": true })) {
        Ok(query) => query,
        Err(e) => return done(Err(e)),
    };
    on_settled(tabs_query(&query), move |tabs| {
        let tab_id = tabs
            .ok()
            .map(|tabs| Array::from(&tabs).get(0))
            .and_then(|tab| Reflect::get(&tab, &"id".into()).ok())
            .and_then(|id| id.as_f64());
        match tab_id {
            Some(id) => on_settled(tabs_send_message(id as i32, &message), done),
            None => done(Err(JsValue::from_str("no active tab"))),
        }
    });
}

fn read_settings(done: impl FnOnce(Option<Settings>) + 'static) {
    on_settled(storage_get(SETTINGS_KEY), move |items| {
        let stored = items
            .and_then(|items| Reflect::get(&items, &SETTINGS_KEY.into()))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null());
        let settings = stored.and_then(|v| match serde_wasm_bindgen::from_value::<Settings>(v) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("ignoring malformed settings: {e}");
                None
            }
        });
        done(settings);
    });
}

// ── Settings and tabs ───────────────────────────────────────────────────

/// `chrome.storage.sync`. Writes are fire-and-forget; reads return the
/// value last fetched with [`read_settings`].
#[derive(Debug, Default)]
struct ChromeStorage {
    cached: Option<Settings>,
}

impl SettingsStore for ChromeStorage {
    fn load(&self) -> Result<Option<Settings>> {
        Ok(self.cached.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        let items = Object::new();
        let value = to_js(settings).map_err(|e| Error::settings(format!("{e:?}")))?;
        Reflect::set(&items, &SETTINGS_KEY.into(), &value)
            .map_err(|e| Error::settings(format!("{e:?}")))?;
        on_settled(storage_set(&items), |result| {
            if let Err(e) = result {
                log::warn!("could not store settings: {e:?}");
            }
        });
        self.cached = Some(settings.clone());
        Ok(())
    }
}

struct ChromeTabs;

impl TabMessenger for ChromeTabs {
    fn send_to_active_tab(&mut self, request: &Request) -> Result<()> {
        let message = to_js(request).map_err(|e| Error::disconnected(format!("{e:?}")))?;
        message_active_tab(message, |result| {
            if let Err(e) = result {
                log::debug!("toggle not delivered: {e:?}");
            }
        });
        Ok(())
    }
}

// ── Page host ───────────────────────────────────────────────────────────

/// Nodes injected into the page on first activation.
struct Overlay {
    backdrop: HtmlElement,
    highlight: HtmlElement,
    tooltip: HtmlElement,
    badge: HtmlElement,
}

impl Overlay {
    fn inject(document: &Document) -> std::result::Result<Self, JsValue> {
        let head = document.head().ok_or_else(|| JsValue::from_str("document has no <head>"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("document has no <body>"))?;

        let style = document.create_element("style")?;
        style.set_text_content(Some(&overlay_css()));
        head.append_child(&style)?;

        let make = |class: &str| -> std::result::Result<HtmlElement, JsValue> {
            let el: HtmlElement = document.create_element("div")?.dyn_into()?;
            el.set_class_name(class);
            body.append_child(&el)?;
            Ok(el)
        };
        Ok(Self {
            backdrop: make("twl-overlay")?,
            highlight: make("twl-highlight")?,
            tooltip: make("twl-tooltip")?,
            badge: make("twl-badge")?,
        })
    }

    fn contains(&self, node: &web_sys::Node) -> bool {
        [&self.backdrop, &self.highlight, &self.tooltip, &self.badge]
            .iter()
            .any(|el| el.contains(Some(node)))
    }
}

/// The live page. The overlay nodes are injected the first time
/// inspection is switched on.
pub struct DomHost {
    window: Window,
    document: Document,
    overlay: Option<Overlay>,
}

impl DomHost {
    pub fn new(window: Window) -> std::result::Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self {
            window,
            document,
            overlay: None,
        })
    }

    fn is_overlay(&self, node: &web_sys::Node) -> bool {
        self.overlay.as_ref().is_some_and(|o| o.contains(node))
    }

    fn in_badge(&self, node: &web_sys::Node) -> bool {
        self.overlay.as_ref().is_some_and(|o| o.badge.contains(Some(node)))
    }

    fn with_overlay(&self, draw: impl FnOnce(&Overlay)) {
        if let Some(overlay) = &self.overlay {
            draw(overlay);
        }
    }
}

fn set_styles(el: &HtmlElement, props: &[(&str, String)]) {
    let style = el.style();
    for (name, value) in props {
        let _ = style.set_property(name, value);
    }
}

fn px(v: f64) -> String {
    format!("{v}px")
}

impl PageHost for DomHost {
    type Node = Element;

    fn element_at(&self, at: Point) -> Option<Element> {
        let el = self.document.element_from_point(at.x as f32, at.y as f32)?;
        if self.is_overlay(&el) {
            None
        } else {
            Some(el)
        }
    }

    fn describe(&self, node: &Element) -> ElementInfo {
        let classes = node.get_attribute("class").unwrap_or_default();
        ElementInfo::new(node.tag_name(), node.id(), classes.split_whitespace())
    }

    fn bounding_rect(&self, node: &Element) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.x(), r.y(), r.width(), r.height())
    }

    fn scroll_offset(&self) -> Point {
        Point::new(
            self.window.scroll_x().unwrap_or(0.0),
            self.window.scroll_y().unwrap_or(0.0),
        )
    }

    fn viewport(&self) -> Size {
        let dim = |v: std::result::Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Size::new(dim(self.window.inner_width()), dim(self.window.inner_height()))
    }

    fn class_lists(&self) -> Vec<Vec<String>> {
        let Ok(nodes) = self.document.query_selector_all("[class]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter(|el| !self.is_overlay(el))
            .map(|el| {
                el.get_attribute("class")
                    .unwrap_or_default()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    fn set_overlay_active(&mut self, active: bool) {
        if active && self.overlay.is_none() {
            match Overlay::inject(&self.document) {
                Ok(overlay) => self.overlay = Some(overlay),
                Err(e) => log::warn!("could not inject overlay: {e:?}"),
            }
        }
        self.with_overlay(|o| {
            let _ = o.backdrop.class_list().toggle_with_force("twl-active", active);
            let _ = o.badge.class_list().toggle_with_force("twl-active", active);
        });
    }

    fn show_highlight(&mut self, rect: Rect) {
        self.with_overlay(|o| {
            set_styles(
                &o.highlight,
                &[
                    ("left", px(rect.x)),
                    ("top", px(rect.y)),
                    ("width", px(rect.width)),
                    ("height", px(rect.height)),
                    ("display", "block".to_string()),
                ],
            );
        });
    }

    fn hide_highlight(&mut self) {
        self.with_overlay(|o| set_styles(&o.highlight, &[("display", "none".to_string())]));
    }

    fn show_tooltip(&mut self, view: &TooltipView) -> Size {
        let Some(o) = &self.overlay else {
            return Size::default();
        };
        o.tooltip.set_inner_html(&html::render(view));
        set_styles(&o.tooltip, &[("display", "block".to_string())]);
        Size::new(
            f64::from(o.tooltip.offset_width()),
            f64::from(o.tooltip.offset_height()),
        )
    }

    fn move_tooltip(&mut self, at: Point) {
        self.with_overlay(|o| set_styles(&o.tooltip, &[("left", px(at.x)), ("top", px(at.y))]));
    }

    fn hide_tooltip(&mut self) {
        self.with_overlay(|o| set_styles(&o.tooltip, &[("display", "none".to_string())]));
    }

    fn set_badge_text(&mut self, text: &str) {
        self.with_overlay(|o| o.badge.set_text_content(Some(text)));
    }
}

// ── Content script ──────────────────────────────────────────────────────

type SharedPage = Rc<RefCell<PageContext<DomHost>>>;

fn load_dataset(page: &SharedPage) {
    let page = Rc::clone(page);
    fetch_text(&runtime_get_url(DATASET_PATH), move |fetched| {
        page.borrow_mut().dataset_loaded(fetched);
    });
}

/// Register `handler` in the capture phase, ahead of page handlers that stop
/// propagation.
fn listen<E, F>(
    target: &web_sys::EventTarget,
    kind: &str,
    mut handler: F,
) -> std::result::Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    let capture = true;
    target.add_event_listener_with_callback_and_bool(
        kind,
        callback.as_ref().unchecked_ref(),
        capture,
    )?;
    callback.forget();
    Ok(())
}

fn copy_to_clipboard(page: &SharedPage, text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let page = Rc::clone(page);
    let promise = window.navigator().clipboard().write_text(text);
    on_settled(promise, move |result| match result {
        Ok(_) => {
            let flash = page.borrow_mut().copy_succeeded();
            set_timeout(&window, BADGE_FLASH_DURATION, move || {
                page.borrow_mut().restore_badge(flash)
            });
        }
        // Clipboard access can be denied; nothing to tell the user.
        Err(e) => log::debug!("clipboard write failed: {e:?}"),
    });
}

/// Set up inspection on the current page.
#[wasm_bindgen]
pub fn start_content_script() -> std::result::Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let page: SharedPage = Rc::new(RefCell::new(PageContext::new(DomHost::new(window)?)));

    {
        let page = Rc::clone(&page);
        read_settings(move |settings| {
            let settings = settings.unwrap_or_default();
            let fetch = page.borrow_mut().init(&settings);
            if fetch == Some(Fetch::Start) {
                load_dataset(&page);
            }
        });
    }

    {
        let page = Rc::clone(&page);
        listen(&document, "mousemove", move |e: MouseEvent| {
            let at = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
            page.borrow_mut().pointer_moved(at);
        })?;
    }

    {
        let page = Rc::clone(&page);
        listen(&document, "keydown", move |e: KeyboardEvent| {
            page.borrow_mut().key_pressed(&e.key());
        })?;
    }

    {
        let page = Rc::clone(&page);
        listen(&document, "click", move |e: MouseEvent| {
            if !page.borrow().is_active() {
                return;
            }
            e.prevent_default();
            e.stop_propagation();

            let on_badge = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| page.borrow().host().in_badge(&node));
            if on_badge {
                page.borrow_mut().disable();
                return;
            }

            let text = page.borrow().clicked();
            if let Some(text) = text {
                copy_to_clipboard(&page, &text);
            }
        })?;
    }

    let on_message = Closure::<dyn FnMut(JsValue, JsValue, Function) -> JsValue>::new(
        move |message: JsValue, _sender: JsValue, send_response: Function| {
            let request = match serde_wasm_bindgen::from_value::<Request>(message) {
                Ok(request) => request,
                Err(e) => {
                    log::debug!("ignoring message: {e}");
                    return JsValue::FALSE;
                }
            };
            let reply = move |response: Response| match to_js(&response) {
                Ok(value) => {
                    let _ = send_response.call1(&JsValue::NULL, &value);
                }
                Err(e) => log::warn!("could not encode reply: {e:?}"),
            };
            let dispatched = page.borrow_mut().dispatch(request, reply);
            if dispatched.start_fetch {
                load_dataset(&page);
            }
            JsValue::from_bool(!dispatched.replied)
        },
    );
    on_message_add_listener(&on_message);
    on_message.forget();

    Ok(())
}

// ── Background ──────────────────────────────────────────────────────────

/// Install hook and toggle relay for the service worker.
#[wasm_bindgen]
pub fn start_background() {
    let on_install = Closure::<dyn FnMut(JsValue)>::new(|details: JsValue| {
        let reason = Reflect::get(&details, &"reason".into())
            .ok()
            .and_then(|r| serde_wasm_bindgen::from_value::<InstallReason>(r).ok());
        let Some(reason) = reason else {
            return;
        };
        if let Err(e) = on_installed(reason, &mut ChromeStorage::default()) {
            log::warn!("install hook failed: {e}");
        }
    });
    on_installed_add_listener(&on_install);
    on_install.forget();

    let relay = Rc::new(RefCell::new(Relay::new(ChromeTabs)));
    let on_message = Closure::<dyn FnMut(JsValue, JsValue, Function) -> JsValue>::new(
        move |message: JsValue, _sender: JsValue, send_response: Function| {
            let Ok(request) = serde_wasm_bindgen::from_value::<Request>(message) else {
                return JsValue::FALSE;
            };
            if let Some(response) = relay.borrow_mut().handle(&request) {
                if let Ok(value) = to_js(&response) {
                    let _ = send_response.call1(&JsValue::NULL, &value);
                }
            }
            JsValue::FALSE
        },
    );
    on_message_add_listener(&on_message);
    on_message.forget();
}

// ── Popup ───────────────────────────────────────────────────────────────

thread_local! {
    static POPUP_DATASET: RefCell<Dataset> = RefCell::new(Dataset::new());
}

/// The popup's inspect button.
#[wasm_bindgen]
#[derive(Default)]
pub struct InspectButton {
    panel: ControlPanel,
}

#[wasm_bindgen]
impl InspectButton {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.panel.button_label().to_string()
    }

    /// Toggle inspection on the active tab. Closes the popup shortly after
    /// switching on.
    pub fn press(&mut self) -> std::result::Result<(), JsValue> {
        let action = self.panel.press();
        on_settled(runtime_send_message(&to_js(&action.request)?), |result| {
            if let Err(e) = result {
                log::debug!("toggle not acknowledged: {e:?}");
            }
        });
        if let Some(delay) = action.close_after {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let closing = window.clone();
            set_timeout(&window, delay, move || {
                let _ = closing.close();
            });
        }
        Ok(())
    }
}

/// Label for the inspect button in the given state.
#[wasm_bindgen]
pub fn inspect_button_label(active: bool) -> String {
    let mut panel = ControlPanel::new();
    if active {
        let _ = panel.press();
    }
    panel.button_label().to_string()
}

#[derive(Serialize)]
struct SearchResult<'a> {
    name: &'a str,
    css: &'a str,
    property: Option<&'a str>,
    value: &'a str,
    exact: bool,
}

/// Search the class table; calls `callback` with an array of
/// `{name, css, property, value, exact}`.
#[wasm_bindgen]
pub fn search_classes(query: String, callback: Function) {
    let fetch = POPUP_DATASET.with(|dataset| {
        dataset.borrow_mut().when_ready(move |table| {
            let results: Vec<SearchResult<'_>> = table
                .search(&query, MAX_SEARCH_RESULTS)
                .into_iter()
                .map(|hit| {
                    let decl = hit.declaration();
                    SearchResult {
                        name: hit.name,
                        css: hit.css,
                        property: decl.property,
                        value: decl.value,
                        exact: hit.exact,
                    }
                })
                .collect();
            match to_js(&results) {
                Ok(value) => {
                    let _ = callback.call1(&JsValue::NULL, &value);
                }
                Err(e) => log::warn!("could not encode search results: {e:?}"),
            }
        })
    });
    if fetch == Fetch::Start {
        fetch_text(&runtime_get_url(DATASET_PATH), |fetched| {
            POPUP_DATASET.with(|dataset| {
                dataset.borrow_mut().complete(fetched);
            });
        });
    }
}

/// Ask the active tab for its classes; calls `callback` with the summary
/// line.
#[wasm_bindgen]
pub fn page_summary(callback: Function) -> std::result::Result<(), JsValue> {
    let message = to_js(&Request::GetPageClasses)?;
    message_active_tab(message, move |reply| {
        let page = reply
            .ok()
            .and_then(|v| serde_wasm_bindgen::from_value::<PageClasses>(v).ok());
        let summary = Summary::from_response(page.as_ref()).to_string();
        let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&summary));
    });
    Ok(())
}

/// Look a class up through the active tab; calls `callback` with
/// `{className, css}` or `null` when the page did not answer.
#[wasm_bindgen]
pub fn lookup_class(class_name: String, callback: Function) -> std::result::Result<(), JsValue> {
    let message = to_js(&Request::LookupClass { class_name })?;
    message_active_tab(message, move |reply| {
        let lookup = reply
            .ok()
            .and_then(|v| serde_wasm_bindgen::from_value::<ClassLookup>(v).ok());
        let value = lookup.as_ref().and_then(|l| to_js(l).ok()).unwrap_or(JsValue::NULL);
        let _ = callback.call1(&JsValue::NULL, &value);
    });
    Ok(())
}

// ── Options page ────────────────────────────────────────────────────────

/// Calls `callback` with the stored settings (defaults when none).
#[wasm_bindgen]
pub fn load_options(callback: Function) {
    read_settings(move |settings| {
        if let Ok(value) = to_js(&settings.unwrap_or_default()) {
            let _ = callback.call1(&JsValue::NULL, &value);
        }
    });
}

/// Store the `enabled` switch. `status` is called with the confirmation
/// text, then with an empty string once it should disappear.
#[wasm_bindgen]
pub fn save_options(enabled: bool, status: Function) {
    read_settings(move |settings| {
        let mut store = ChromeStorage { cached: settings };
        if let Err(e) = crate::settings::save_enabled(&mut store, enabled) {
            log::warn!("could not save options: {e}");
            return;
        }
        let _ = status.call1(&JsValue::NULL, &JsValue::from_str(SAVED_MESSAGE));
        if let Some(window) = web_sys::window() {
            set_timeout(&window, SAVED_DISPLAY, move || {
                let _ = status.call1(&JsValue::NULL, &JsValue::from_str(""));
            });
        }
    });
}

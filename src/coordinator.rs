//! The control side of the extension: the background relay, the install
//! hook, and the popup and options page state.
//!
//! The popup never talks to a page directly. It sends `TOGGLE_INSPECT`
//! through the background [`Relay`], which forwards it to the active tab
//! and acknowledges at once; page scans and lookups go to the tab itself.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::{PageClasses, Request, Response, ToggleAck};
use crate::settings::{Settings, SettingsStore};

pub const INSPECT_LABEL: &str = "Inspect Element";
pub const STOP_LABEL: &str = "Stop Inspecting";

/// The popup closes this long after switching inspection on.
pub const POPUP_CLOSE_DELAY: Duration = Duration::from_millis(200);

/// Options page confirmation, shown for [`SAVED_DISPLAY`].
pub const SAVED_MESSAGE: &str = "Saved!";
pub const SAVED_DISPLAY: Duration = Duration::from_millis(2000);

/// Delivery of requests to the page context of the active tab.
pub trait TabMessenger {
    /// Fire-and-forget send. Fails with [`Error::Disconnected`] when there is
    /// no active tab or nothing listening in it.
    ///
    /// [`Error::Disconnected`]: crate::error::Error::Disconnected
    fn send_to_active_tab(&mut self, request: &Request) -> Result<()>;
}

/// Background message handler.
#[derive(Debug)]
pub struct Relay<M> {
    messenger: M,
}

impl<M: TabMessenger> Relay<M> {
    pub fn new(messenger: M) -> Self {
        Self { messenger }
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Handle one request. Toggles are forwarded and acknowledged with
    /// `{ok: true}` whether or not a page received them; everything else is
    /// left for other listeners (`None`).
    pub fn handle(&mut self, request: &Request) -> Option<Response> {
        match request {
            Request::ToggleInspect { .. } => {
                if let Err(e) = self.messenger.send_to_active_tab(request) {
                    log::debug!("toggle not delivered: {e}");
                }
                Some(ToggleAck { ok: true, active: None }.into())
            }
            other => {
                log::debug!("relay ignoring {:?}", other.kind());
                None
            }
        }
    }
}

/// Why the extension's install hook fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallReason {
    Install,
    Update,
    ChromeUpdate,
    SharedModuleUpdate,
}

/// Install hook: a fresh install stores the default settings. Updates keep
/// whatever the user had. Returns whether anything was written.
pub fn on_installed(reason: InstallReason, store: &mut dyn SettingsStore) -> Result<bool> {
    if reason != InstallReason::Install {
        return Ok(false);
    }
    log::info!("first install; storing default settings");
    store.save(&Settings::default())?;
    Ok(true)
}

/// Popup inspect button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlPanel {
    active: bool,
}

/// What the popup does after a button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAction {
    /// Send to the background relay.
    pub request: Request,
    /// Close the popup after this delay.
    pub close_after: Option<Duration>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn button_label(&self) -> &'static str {
        if self.active {
            STOP_LABEL
        } else {
            INSPECT_LABEL
        }
    }

    /// Flip the local state and produce the toggle to send.
    pub fn press(&mut self) -> PanelAction {
        self.active = !self.active;
        PanelAction {
            request: Request::ToggleInspect {
                enabled: self.active,
            },
            close_after: self.active.then_some(POPUP_CLOSE_DELAY),
        }
    }
}

/// The popup's one-line page summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// The page did not answer (no content script, restricted page).
    Unavailable,
    Classes(usize),
}

impl Summary {
    pub fn from_response(response: Option<&PageClasses>) -> Self {
        match response {
            Some(page) => Summary::Classes(page.classes.len()),
            None => Summary::Unavailable,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Unavailable => f.write_str("Reload page to enable inspection"),
            Summary::Classes(0) => f.write_str("No Tailwind classes detected on this page"),
            Summary::Classes(n) => write!(f, "{n} unique Tailwind classes on this page"),
        }
    }
}

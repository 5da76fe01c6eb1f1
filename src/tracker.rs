//! Hover tracking state machine.
//!
//! ```text
//! Inactive ──enable──▶ Active { target }
//!    ▲                     │
//!    └──disable / Escape───┘
//! ```
//!
//! The tracker only decides; it never touches the page. `N` is whatever
//! handle the host uses for an element.

/// Key that cancels inspection.
pub const CANCEL_KEY: &str = "Escape";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerState<N> {
    Inactive,
    /// `target` is the element last resolved under the pointer.
    Active { target: Option<N> },
}

/// What a state change did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Activated,
    Deactivated,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct HoverTracker<N> {
    state: TrackerState<N>,
}

impl<N> Default for HoverTracker<N> {
    fn default() -> Self {
        Self {
            state: TrackerState::Inactive,
        }
    }
}

impl<N: PartialEq> HoverTracker<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TrackerState<N> {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TrackerState::Active { .. })
    }

    /// The tracked element, if inspecting and one has been resolved.
    pub fn target(&self) -> Option<&N> {
        match &self.state {
            TrackerState::Active { target } => target.as_ref(),
            TrackerState::Inactive => None,
        }
    }

    /// Start inspecting. Enabling while active keeps the current target.
    pub fn enable(&mut self) -> Transition {
        if self.is_active() {
            return Transition::Unchanged;
        }
        self.state = TrackerState::Active { target: None };
        Transition::Activated
    }

    /// Stop inspecting and forget the target. Safe to call in any state.
    pub fn disable(&mut self) -> Transition {
        let was_active = self.is_active();
        self.state = TrackerState::Inactive;
        if was_active {
            Transition::Deactivated
        } else {
            Transition::Unchanged
        }
    }

    /// Feed the element resolved under the pointer (overlay nodes already
    /// excluded). Returns the new target when it changed and needs a render.
    pub fn pointer_moved(&mut self, hit: Option<N>) -> Option<&N> {
        let TrackerState::Active { target } = &mut self.state else {
            return None;
        };
        let hit = hit?;
        if target.as_ref() == Some(&hit) {
            return None;
        }
        *target = Some(hit);
        target.as_ref()
    }

    /// A key press while inspecting; [`CANCEL_KEY`] disables.
    pub fn key_pressed(&mut self, key: &str) -> Transition {
        if key == CANCEL_KEY && self.is_active() {
            self.disable()
        } else {
            Transition::Unchanged
        }
    }
}

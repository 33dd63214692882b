//! Shared drawer state and its transitions.
//!
//! The reveal state, pointer occupancy and pending-reveal flag are read and
//! written only through [`Locked`], which holds the state mutex for the
//! duration of a transition. Both the event handlers and the auto-hide task
//! go through it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, trace};
use serde::Serialize;

use super::DrawerView;

/// Whether the drawer's secondary container is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Revealed,
            Self::Revealed => Self::Hidden,
        }
    }
}

/// Notification sent to the rendering layer when the reveal state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibilityChange {
    /// New reveal state.
    pub state: RevealState,
    /// Whether the primary container carries the "active" marker.
    ///
    /// Set together with the reveal so styling stays consistent while the
    /// reveal animation is still running.
    pub emphasized: bool,
}

impl VisibilityChange {
    /// The change that moves a drawer into `state`.
    pub fn new(state: RevealState) -> Self {
        Self {
            state,
            emphasized: state.is_revealed(),
        }
    }
}

/// Fields guarded by the drawer mutex.
#[derive(Debug)]
pub(crate) struct DrawerState {
    reveal: RevealState,
    /// Pointer is outside the group's hit region.
    free: bool,
    /// A refresh asked for a reveal the task has not acted on yet.
    reset_requested: bool,
    /// The controller is being torn down; no more transitions.
    shut_down: bool,
}

impl Default for DrawerState {
    fn default() -> Self {
        Self {
            reveal: RevealState::Hidden,
            free: true,
            reset_requested: false,
            shut_down: false,
        }
    }
}

/// State shared between a controller and its auto-hide task.
pub(crate) struct Shared {
    name: String,
    state: Mutex<DrawerState>,
    view: Arc<dyn DrawerView>,
}

impl Shared {
    pub fn new(name: impl Into<String>, view: Arc<dyn DrawerView>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(DrawerState::default()),
            view,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lock the state for a transition.
    ///
    /// A panicking view poisons the mutex; the flags are still consistent
    /// at that point, so the poison is ignored.
    pub fn lock(&self) -> Locked<'_> {
        Locked {
            state: self.state.lock().unwrap_or_else(PoisonError::into_inner),
            view: self.view.as_ref(),
            name: &self.name,
        }
    }
}

/// Exclusive access to the drawer state.
pub(crate) struct Locked<'a> {
    state: MutexGuard<'a, DrawerState>,
    view: &'a dyn DrawerView,
    name: &'a str,
}

impl Locked<'_> {
    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn reveal(&self) -> RevealState {
        self.state.reveal
    }

    pub fn is_free(&self) -> bool {
        self.state.free
    }

    pub fn reset_requested(&self) -> bool {
        self.state.reset_requested
    }

    pub fn is_shut_down(&self) -> bool {
        self.state.shut_down
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Move to `target`, notifying the view if the state actually changed.
    ///
    /// Returns whether a notification was sent.
    fn set_reveal(&mut self, target: RevealState) -> bool {
        if self.state.reveal == target {
            trace!("drawer '{}' already {:?}", self.name, target);
            return false;
        }
        self.state.reveal = target;
        debug!("drawer '{}' -> {:?}", self.name, target);
        self.view.visibility_changed(VisibilityChange::new(target));
        true
    }

    /// Pointer entered the hit region. The pointer now governs visibility,
    /// so any pending refresh reveal is considered satisfied.
    pub fn pointer_entered(&mut self) -> bool {
        self.state.free = false;
        self.state.reset_requested = false;
        self.set_reveal(RevealState::Revealed)
    }

    /// Pointer left the whole hit region.
    pub fn pointer_left(&mut self) -> bool {
        self.state.free = true;
        self.set_reveal(RevealState::Hidden)
    }

    /// Flip between hidden and revealed.
    pub fn toggle(&mut self) -> RevealState {
        let target = self.state.reveal.toggled();
        self.set_reveal(target);
        target
    }

    /// Record a refresh reveal request.
    ///
    /// Only accepted while the pointer is free; returns whether the
    /// auto-hide task needs waking.
    pub fn request_reveal(&mut self) -> bool {
        if !self.state.free {
            return false;
        }
        self.state.reset_requested = true;
        true
    }

    /// Act on a pending refresh request: reveal and clear it.
    pub fn take_pending_reveal(&mut self) -> bool {
        if !(self.state.free && self.state.reset_requested) {
            return false;
        }
        self.set_reveal(RevealState::Revealed);
        self.state.reset_requested = false;
        true
    }

    /// Idle hide after the auto-hide interval. Skipped while the pointer is
    /// over the group or a refresh reveal is pending.
    pub fn auto_hide(&mut self) -> bool {
        if !(self.state.free && !self.state.reset_requested) {
            return false;
        }
        self.set_reveal(RevealState::Hidden)
    }

    /// Refuse every further task transition.
    pub fn shut_down(&mut self) {
        self.state.shut_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording() -> (Arc<Mutex<Vec<VisibilityChange>>>, Shared) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let view = move |change: VisibilityChange| sink.lock().unwrap().push(change);
        (log, Shared::new("test", Arc::new(view)))
    }

    #[test]
    fn test_hide_when_hidden_is_silent() {
        let (log, shared) = recording();
        assert!(!shared.lock().pointer_left());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_enter_clears_pending_reveal() {
        let (_log, shared) = recording();
        let mut locked = shared.lock();
        assert!(locked.request_reveal());
        locked.pointer_entered();
        assert!(!locked.reset_requested());
        assert!(!locked.is_free());
        assert!(!locked.request_reveal());
    }

    #[test]
    fn test_pending_reveal_then_auto_hide() {
        let (log, shared) = recording();
        let mut locked = shared.lock();
        locked.request_reveal();
        assert!(!locked.auto_hide());
        assert!(locked.take_pending_reveal());
        assert_eq!(locked.reveal(), RevealState::Revealed);
        assert!(locked.auto_hide());
        drop(locked);
        let log = log.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                VisibilityChange::new(RevealState::Revealed),
                VisibilityChange::new(RevealState::Hidden),
            ]
        );
        assert!(log[0].emphasized);
        assert!(!log[1].emphasized);
    }
}

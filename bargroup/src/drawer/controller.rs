//! Reveal controller: routes interaction events into drawer transitions.

use std::sync::Arc;

use log::{debug, trace};
use tokio::runtime::Handle;

use crate::config::GroupConfig;
use crate::error::GroupError;
use crate::events::{ClickEvent, EventResult, LeaveDetail, PointerEvent};

use super::state::Shared;
use super::task::AutoHideTask;
use super::{DrawerView, RevealState};

/// Owns the reveal state of one group and, in hover mode, its auto-hide
/// task.
///
/// Handlers never block beyond the short state lock, so they are safe to
/// call from the host's event dispatch loop.
pub struct DrawerController {
    shared: Arc<Shared>,
    enabled: bool,
    click_to_reveal: bool,
    signal: Option<i32>,
    task: Option<AutoHideTask>,
}

impl DrawerController {
    /// Create a controller for `config`.
    ///
    /// For a hover-mode drawer this spawns the auto-hide task on the
    /// current tokio runtime. A non-drawer configuration yields an inert
    /// controller.
    pub fn new(config: &GroupConfig, view: Arc<dyn DrawerView>) -> Result<Self, GroupError> {
        let shared = Arc::new(Shared::new(config.name(), view));

        let task = if config.has_auto_hide_task() {
            let runtime = Handle::try_current()?;
            Some(AutoHideTask::spawn(
                &runtime,
                Arc::clone(&shared),
                config.auto_hide_period(),
            ))
        } else {
            None
        };

        Ok(Self {
            shared,
            enabled: config.is_drawer(),
            click_to_reveal: config.click_to_reveal(),
            signal: config.signal_code(),
            task,
        })
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn state(&self) -> RevealState {
        self.shared.lock().reveal()
    }

    /// Whether the pointer is outside the group's hit region.
    pub fn is_pointer_free(&self) -> bool {
        self.shared.lock().is_free()
    }

    /// Whether a refresh reveal is waiting for the auto-hide task.
    pub fn reset_requested(&self) -> bool {
        self.shared.lock().reset_requested()
    }

    pub fn has_task(&self) -> bool {
        self.task.is_some()
    }

    pub fn is_click_to_reveal(&self) -> bool {
        self.click_to_reveal
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    /// Handle a pointer crossing.
    ///
    /// Hover-mode only. Always reports `Ignored` so the host keeps
    /// propagating the crossing event.
    pub fn on_pointer(&self, event: PointerEvent) -> EventResult {
        if !self.enabled || self.click_to_reveal {
            return EventResult::Ignored;
        }

        match event {
            PointerEvent::Enter => {
                self.shared.lock().pointer_entered();
            }
            PointerEvent::Leave(LeaveDetail::Outside) => {
                self.shared.lock().pointer_left();
            }
            PointerEvent::Leave(LeaveDetail::Inferior) => {
                trace!("'{}' pointer moved into a child", self.shared.name());
            }
        }
        EventResult::Ignored
    }

    /// Handle a button press. Primary clicks toggle a click-to-reveal drawer.
    pub fn on_click(&self, event: ClickEvent) -> EventResult {
        if !self.enabled || !self.click_to_reveal || !event.kind.is_primary() {
            return EventResult::Ignored;
        }
        self.shared.lock().toggle();
        EventResult::Consumed
    }

    /// Handle an external refresh trigger.
    ///
    /// Codes that do not match the configured signal are ignored. In
    /// click-to-reveal mode a match acts as a primary click; in hover mode
    /// it asks the auto-hide task to reveal, unless the pointer is already
    /// over the group. Returns whether the code addressed this drawer.
    pub fn refresh(&self, code: i32) -> bool {
        if self.signal != Some(code) {
            return false;
        }
        if !self.enabled {
            return true;
        }
        if self.on_click(ClickEvent::primary()).is_handled() {
            return true;
        }

        let mut locked = self.shared.lock();
        if locked.request_reveal() {
            debug!("'{}' refresh while pointer free, waking task", self.shared.name());
            // Sent under the lock so the task cannot consume the request
            // before its wakeup is queued.
            if let Some(task) = &self.task {
                task.wake();
            }
        }
        true
    }

    /// Stop the auto-hide task and wait for it to exit.
    ///
    /// Dropping the controller aborts the task instead, since `Drop` cannot
    /// wait for it.
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            self.shared.lock().shut_down();
            task.join().await;
        }
    }
}

impl Drop for DrawerController {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            // Once the flag is set under the lock the task performs no
            // further transition, even if it is already awake.
            self.shared.lock().shut_down();
            task.cancel();
            debug!("'{}' drawer dropped, auto-hide task cancelled", self.shared.name());
        }
    }
}

impl std::fmt::Debug for DrawerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerController")
            .field("name", &self.shared.name())
            .field("enabled", &self.enabled)
            .field("click_to_reveal", &self.click_to_reveal)
            .field("signal", &self.signal)
            .field("has_task", &self.task.is_some())
            .finish()
    }
}

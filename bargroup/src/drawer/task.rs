//! Background auto-hide task.

use std::sync::Arc;

use log::{debug, trace, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::AutoHide;

use super::state::Shared;
use super::wakeup::{self, Wake, WakeupReceiver, WakeupSender};

/// Handle to a running auto-hide task.
///
/// Owned exclusively by its controller. Dropping it closes the wake
/// channel, which ends the task at its next wakeup.
pub(crate) struct AutoHideTask {
    wakeup: WakeupSender,
    handle: JoinHandle<()>,
}

impl AutoHideTask {
    pub fn spawn(runtime: &Handle, shared: Arc<Shared>, period: AutoHide) -> Self {
        let (wakeup, receiver) = wakeup::channel();
        debug!("starting auto-hide task for '{}' ({:?})", shared.name(), period);
        let handle = runtime.spawn(run(shared, receiver, period));
        Self { wakeup, handle }
    }

    /// Wake the task immediately.
    pub fn wake(&self) {
        self.wakeup.send();
    }

    /// Abort the task without waiting for it.
    ///
    /// The task is dropped at the runtime's next scheduling point instead of
    /// being left to notice the closed channel on its own.
    pub fn cancel(self) {
        self.handle.abort();
    }

    /// Close the wake channel and wait for the task to finish.
    pub async fn join(self) {
        let Self { wakeup, handle } = self;
        drop(wakeup);
        match handle.await {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => {}
            Err(e) => warn!("auto-hide task ended abnormally: {}", e),
        }
    }
}

async fn run(shared: Arc<Shared>, mut wakeup: WakeupReceiver, period: AutoHide) {
    let period = period.period();
    loop {
        {
            let mut locked = shared.lock();
            if locked.is_shut_down() {
                break;
            }
            if locked.take_pending_reveal() {
                trace!("'{}' revealed for pending refresh", shared.name());
            }
            // Every queued wakeup announced a request consumed above
            wakeup.drain();
        }

        if wakeup.wait(period).await == Wake::Closed {
            break;
        }

        let mut locked = shared.lock();
        if locked.is_shut_down() {
            break;
        }
        locked.auto_hide();
    }
    debug!("auto-hide task for '{}' stopped", shared.name());
}

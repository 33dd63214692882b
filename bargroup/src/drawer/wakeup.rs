//! Wake channel for the auto-hide task.
//!
//! The task parks on [`WakeupReceiver::wait`] between checks. A refresh
//! sends a wakeup so the task acts without waiting out its interval, and
//! dropping the sender closes the channel, which wakes the task for
//! shutdown.

use std::time::Duration;

use tokio::sync::mpsc;

/// Sender half of the wake channel.
#[derive(Clone, Debug)]
pub(crate) struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Send a wakeup signal.
    ///
    /// Non-blocking. A full buffer already holds a pending wakeup, and a
    /// closed receiver means the task is gone, so errors are ignored.
    pub fn send(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Why [`WakeupReceiver::wait`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wake {
    /// A wakeup was sent.
    Signaled,
    /// The period passed without a wakeup.
    Elapsed,
    /// The sender was dropped.
    Closed,
}

/// Receiver half of the wake channel.
#[derive(Debug)]
pub(crate) struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    /// Wait for a wakeup or for `period` to pass, whichever comes first.
    ///
    /// With no period this waits for a wakeup only.
    pub async fn wait(&mut self, period: Option<Duration>) -> Wake {
        let received = match period {
            Some(period) => match tokio::time::timeout(period, self.rx.recv()).await {
                Ok(received) => received,
                Err(_) => return Wake::Elapsed,
            },
            None => self.rx.recv().await,
        };

        match received {
            Some(()) => Wake::Signaled,
            None => Wake::Closed,
        }
    }

    /// Drain all pending wakeup signals.
    ///
    /// Must be called while the drawer state lock is held, right after the
    /// task consumed a pending reveal, so that the wakeups which announced
    /// it cannot cut the next sleep short.
    pub fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

/// Create a new wake channel pair.
pub(crate) fn channel() -> (WakeupSender, WakeupReceiver) {
    // Small buffer - one pending wakeup is all the task needs
    let (tx, rx) = mpsc::channel(16);
    (WakeupSender { tx }, WakeupReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_wait_elapses_without_wakeup() {
        let (_tx, mut rx) = channel();
        assert_eq!(rx.wait(Some(Duration::from_secs(2))).await, Wake::Elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_wakeup_is_not_lost() {
        let (tx, mut rx) = channel();
        tx.send();
        assert_eq!(rx.wait(Some(Duration::from_secs(60))).await, Wake::Signaled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drain_discards_pending() {
        let (tx, mut rx) = channel();
        for _ in 0..20 {
            tx.send();
        }
        rx.drain();
        assert_eq!(rx.wait(Some(Duration::from_secs(1))).await, Wake::Elapsed);
    }

    #[tokio::test]
    async fn test_dropped_sender_closes() {
        let (tx, mut rx) = channel();
        drop(tx);
        assert_eq!(rx.wait(None).await, Wake::Closed);
    }
}

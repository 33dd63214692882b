//! Realtime signal source for refresh triggers.
//!
//! A group configured with `"signal": n` is refreshed when the process
//! receives `SIGRTMIN + n`, the same convention status bars use for
//! `pkill -RTMIN+n`.

use std::io;

/// Stream of refresh codes delivered by realtime signals.
pub struct RefreshSignal {
    #[cfg(target_os = "linux")]
    inner: Option<(tokio::signal::unix::Signal, i32)>,
}

impl RefreshSignal {
    /// Listen for `SIGRTMIN + code`. Without a code, or on platforms
    /// without realtime signals, the stream never yields.
    #[cfg(target_os = "linux")]
    pub fn listen(code: Option<i32>) -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        let Some(code) = code else {
            return Ok(Self { inner: None });
        };
        let Some(signum) = libc::SIGRTMIN()
            .checked_add(code)
            .filter(|signum| code >= 0 && *signum <= libc::SIGRTMAX())
        else {
            log::warn!("signal {} is outside the realtime range, ignoring", code);
            return Ok(Self { inner: None });
        };
        log::info!("listening for SIGRTMIN+{} ({})", code, signum);
        let stream = signal(SignalKind::from_raw(signum))?;
        Ok(Self {
            inner: Some((stream, code)),
        })
    }

    #[cfg(not(target_os = "linux"))]
    pub fn listen(code: Option<i32>) -> io::Result<Self> {
        if code.is_some() {
            log::warn!("realtime signals are not supported on this platform");
        }
        Ok(Self {})
    }

    /// Wait for the next refresh code.
    #[cfg(target_os = "linux")]
    pub async fn recv(&mut self) -> Option<i32> {
        match &mut self.inner {
            Some((stream, code)) => stream.recv().await.map(|()| *code),
            None => std::future::pending().await,
        }
    }

    #[cfg(not(target_os = "linux"))]
    pub async fn recv(&mut self) -> Option<i32> {
        std::future::pending().await
    }
}

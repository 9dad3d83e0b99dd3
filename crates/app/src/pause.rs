//! [`Pause`] implementations.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::ports::Pause;

/// Real-time pause backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPause;

impl Pause for TokioPause {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pause for NoPause {
    fn pause(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

/// Returns immediately but remembers every requested duration.
#[derive(Debug, Default)]
pub struct RecordingPause {
    requested: Mutex<Vec<Duration>>,
}

impl RecordingPause {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every duration requested so far, in order.
    #[must_use]
    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Pause for RecordingPause {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(duration);
        std::future::ready(())
    }
}

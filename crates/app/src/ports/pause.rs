//! Pause port: how the monitor waits between two cycles.

use std::future::Future;
use std::time::Duration;

/// Suspends the monitoring loop between cycles.
///
/// The pause paces output for a human observer and has no effect on
/// device state, so tests may substitute an instant implementation.
pub trait Pause {
    /// Wait for `duration`.
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

impl<T: Pause + Send + Sync> Pause for std::sync::Arc<T> {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        (**self).pause(duration)
    }
}

impl<T: Pause + Sync + ?Sized> Pause for &T {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        (**self).pause(duration)
    }
}

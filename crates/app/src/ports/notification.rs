//! Notification port: where devices and the monitor report what happened.

use std::sync::Arc;

use iotsim_domain::notification::Notification;

/// Receives notifications emitted by devices and the monitor.
///
/// Delivery is synchronous and infallible: a sink that cannot keep a
/// notification simply drops it.
pub trait NotificationSink: Send + Sync {
    /// Accept one notification.
    fn notify(&self, notification: Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

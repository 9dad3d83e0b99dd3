//! In-process notification sinks.

use std::sync::{Mutex, PoisonError};

use iotsim_domain::id::DeviceId;
use iotsim_domain::notification::{Level, Notification, NotificationKind};

use crate::ports::NotificationSink;

/// Forwards every notification to `tracing` at the matching level.
///
/// Device-scoped notifications carry a `device_id` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        let device_id = notification.device_id().map(DeviceId::as_str);
        match notification.level() {
            Level::Debug => tracing::debug!(device_id, "{notification}"),
            Level::Info => tracing::info!(device_id, "{notification}"),
            Level::Warning => tracing::warn!(device_id, "{notification}"),
            Level::Error => tracing::error!(device_id, "{notification}"),
        }
    }
}

/// Keeps every notification in memory, in emission order.
///
/// Useful for tests and for callers that want to inspect a run afterwards.
#[derive(Debug, Default)]
pub struct RecordingSink {
    store: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Only the kinds, which is what most assertions care about.
    #[must_use]
    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.lock().iter().map(|n| n.kind.clone()).collect()
    }

    /// Number of recorded notifications at `level`.
    #[must_use]
    pub fn count_at(&self, level: Level) -> usize {
        self.lock().iter().filter(|n| n.level() == level).count()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.lock().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iotsim_domain::error::AdjustError;
    use iotsim_domain::id::RunId;
    use std::sync::Arc;

    fn powered_on(id: &str) -> Notification {
        Notification::new(NotificationKind::PoweredOn {
            device_id: id.parse().unwrap(),
        })
    }

    #[test]
    fn should_record_notifications_in_order() {
        let sink = RecordingSink::new();
        sink.notify(powered_on("A"));
        sink.notify(powered_on("B"));

        let ids: Vec<_> = sink
            .notifications()
            .iter()
            .filter_map(|n| n.device_id().map(ToString::to_string))
            .collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn should_count_by_level() {
        let sink = RecordingSink::new();
        sink.notify(powered_on("A"));
        sink.notify(Notification::new(NotificationKind::AdjustRejected {
            device_id: "A".parse().unwrap(),
            error: AdjustError::PoweredOff {
                device_id: "A".parse().unwrap(),
            },
        }));

        assert_eq!(sink.count_at(Level::Info), 1);
        assert_eq!(sink.count_at(Level::Warning), 1);
        assert_eq!(sink.count_at(Level::Error), 0);
    }

    #[test]
    fn should_clear_recorded_notifications() {
        let sink = RecordingSink::new();
        sink.notify(powered_on("A"));
        sink.clear();
        assert!(sink.kinds().is_empty());
    }

    #[test]
    fn should_record_through_shared_handle() {
        let sink = Arc::new(RecordingSink::new());
        let handle: Arc<RecordingSink> = Arc::clone(&sink);
        handle.notify(Notification::new(NotificationKind::RunStarted {
            run_id: RunId::new(),
            cycles: 1,
        }));
        assert_eq!(sink.kinds().len(), 1);
    }

    #[test]
    fn should_accept_notifications_in_tracing_sink_without_subscriber() {
        TracingSink.notify(powered_on("A"));
    }
}

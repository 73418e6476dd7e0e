use crate::tracker::Observer;
use crate::tracker::location_tracker::Registry;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Handle returned by [`LocationTracker::subscribe`](crate::tracker::LocationTracker::subscribe).
///
/// Dropping it keeps the observer subscribed; call [`dispose`](Subscription::dispose) to leave.
/// It only holds weak references, so it neither keeps the tracker nor the observer alive.
#[derive(Clone)]
pub struct Subscription {
    observers: Weak<RefCell<Vec<Rc<dyn Observer>>>>,
    observer: Weak<dyn Observer>,
}

impl Subscription {
    pub(crate) fn new(observers: &Registry, observer: &Rc<dyn Observer>) -> Self {
        Subscription {
            observers: Rc::downgrade(observers),
            observer: Rc::downgrade(observer),
        }
    }

    /// A subscription that is not bound to any registry.
    pub(crate) fn inert(observer: &Rc<dyn Observer>) -> Self {
        Subscription {
            observers: Weak::new(),
            observer: Rc::downgrade(observer),
        }
    }

    /// Removes the observer from the tracker if it is still registered. Calling it again, after
    /// the tracker ended, or after the tracker was dropped does nothing.
    pub fn dispose(&self) {
        let (Some(observers), Some(observer)) = (self.observers.upgrade(), self.observer.upgrade()) else {
            trace!("Subscription outlived its tracker or observer");
            return;
        };

        let mut observers = observers.borrow_mut();
        if let Some(index) = observers.iter().position(|registered| Rc::ptr_eq(registered, &observer)) {
            observers.remove(index);
            debug!(observers = observers.len(), "Unsubscribed observer");
        }
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("tracker_alive", &(self.observers.strong_count() > 0))
            .field("observer_alive", &(self.observer.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::Location;
    use crate::tracker::LocationTracker;
    use crate::tracker::observer::recording::{Notification, RecordingObserver, journal};
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn dispose_removes_the_observer() {
        let journal = journal();
        let tracker = LocationTracker::new();
        let subscription = tracker.subscribe(RecordingObserver::new("a", &journal));

        subscription.dispose();
        tracker.track_location(None);

        assert_eq!(tracker.observer_count(), 0);
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn dispose_is_idempotent() {
        let journal = journal();
        let tracker = LocationTracker::new();
        let subscription = tracker.subscribe(RecordingObserver::new("a", &journal));
        tracker.subscribe(RecordingObserver::new("b", &journal));

        subscription.dispose();
        subscription.dispose();
        subscription.clone().dispose();

        assert_eq!(tracker.observer_count(), 1);
    }

    #[test]
    fn dispose_after_end_transmission_does_nothing() {
        let journal = journal();
        let tracker = LocationTracker::new();
        let subscription = tracker.subscribe(RecordingObserver::new("a", &journal));

        tracker.end_transmission();
        subscription.dispose();

        assert_eq!(*journal.borrow(), vec![Notification::Completed("a")]);
    }

    #[test]
    fn dispose_after_the_tracker_is_dropped_does_nothing() {
        let journal = journal();
        let tracker = LocationTracker::new();
        let subscription = tracker.subscribe(RecordingObserver::new("a", &journal));

        drop(tracker);
        subscription.dispose();

        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn both_handles_of_a_duplicate_subscription_remove_the_same_registration() {
        let journal = journal();
        let tracker = LocationTracker::new();
        let observer = RecordingObserver::new("a", &journal);
        let first = tracker.subscribe(observer.clone());
        let second = tracker.subscribe(observer);

        first.dispose();
        second.dispose();
        tracker.track_location(Some(Location::new(0.0, 0.0)));

        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn dropping_the_handle_keeps_the_observer_subscribed() {
        let journal = journal();
        let tracker = LocationTracker::new();
        drop(tracker.subscribe(RecordingObserver::new("a", &journal)));

        tracker.track_location(Some(Location::new(1.0, 2.0)));

        assert_eq!(*journal.borrow(), vec![Notification::Next("a", Location::new(1.0, 2.0))]);
    }
}

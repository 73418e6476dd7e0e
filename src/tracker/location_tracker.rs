use crate::domain::Location;
use crate::tracker::{Observer, Subscription, TrackerError};
use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;
use tracing::{debug, instrument, trace};

pub(crate) type Registry = Rc<RefCell<Vec<Rc<dyn Observer>>>>;

/// Pushes locations to its observers, in the order they subscribed.
///
/// Once [`end_transmission`](LocationTracker::end_transmission) has been called the tracker is
/// ended: the registry is empty and stays empty.
pub struct LocationTracker {
    observers: Registry,
    ended: Cell<bool>,
}

impl LocationTracker {
    pub fn new() -> Self {
        LocationTracker {
            observers: Rc::new(RefCell::new(Vec::new())),
            ended: Cell::new(false),
        }
    }

    /// Registers the observer unless this very instance is already registered. Either way the
    /// returned subscription removes it again.
    ///
    /// On an ended tracker the observer is not registered: its `on_completed` is called before
    /// this returns, and the returned subscription is not bound to anything.
    pub fn subscribe(&self, observer: Rc<dyn Observer>) -> Subscription {
        if self.ended.get() {
            debug!("Tracker has ended, completing new observer right away");
            observer.on_completed();
            return Subscription::inert(&observer);
        }

        {
            let mut observers = self.observers.borrow_mut();
            if observers.iter().any(|registered| Rc::ptr_eq(registered, &observer)) {
                trace!("Observer is already subscribed");
            } else {
                observers.push(observer.clone());
                debug!(observers = observers.len(), "Subscribed observer");
            }
        }

        Subscription::new(&self.observers, &observer)
    }

    /// Sends the location to every observer, or [`TrackerError::LocationUnknown`] when there is none.
    #[instrument(skip(self))]
    pub fn track_location(&self, location: Option<Location>) {
        if self.ended.get() {
            trace!("Transmission has ended, dropping location");
            return;
        }

        let snapshot = self.snapshot();
        trace!(observers = snapshot.len(), "Tracking location");

        for observer in snapshot.iter().filter(|observer| self.is_registered(observer)) {
            match location {
                Some(location) => observer.on_next(location),
                None => observer.on_error(&TrackerError::LocationUnknown),
            }
        }
    }

    /// Completes every observer once and clears the registry.
    #[instrument(skip(self))]
    pub fn end_transmission(&self) {
        if self.ended.replace(true) {
            trace!("Transmission already ended");
            return;
        }

        let snapshot = self.snapshot();
        debug!(observers = snapshot.len(), "Ending transmission");

        // Observers removed by an earlier observer's completion are skipped.
        for observer in snapshot.iter().filter(|observer| self.is_registered(observer)) {
            observer.on_completed();
        }

        self.observers.borrow_mut().clear();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_ended(&self) -> bool {
        self.ended.get()
    }

    fn snapshot(&self) -> Vec<Rc<dyn Observer>> {
        self.observers.borrow().clone()
    }

    fn is_registered(&self, observer: &Rc<dyn Observer>) -> bool {
        self.observers.borrow().iter().any(|registered| Rc::ptr_eq(registered, observer))
    }
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for LocationTracker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationTracker")
            .field("observers", &self.observer_count())
            .field("ended", &self.ended.get())
            .finish()
    }
}

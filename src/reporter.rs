use crate::domain::Location;
use crate::tracker::{LocationTracker, Observer, Subscription, TrackerError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{info, warn};

/// Observer that logs every location it receives and leaves the tracker when transmission ends.
#[derive(Debug)]
pub struct LocationReporter {
    name: String,
    subscription: RefCell<Option<Subscription>>,
    last_location: Cell<Option<Location>>,
    received: Cell<usize>,
}

impl LocationReporter {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(LocationReporter {
            name: name.into(),
            subscription: RefCell::new(None),
            last_location: Cell::new(None),
            received: Cell::new(0),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subscribes to the tracker, leaving whatever tracker it was subscribed to before.
    pub fn subscribe(self: &Rc<Self>, tracker: &LocationTracker) {
        self.unsubscribe();
        let subscription = tracker.subscribe(self.clone());
        self.subscription.replace(Some(subscription));
    }

    pub fn unsubscribe(&self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
    }

    pub fn last_location(&self) -> Option<Location> {
        self.last_location.get()
    }

    pub fn received(&self) -> usize {
        self.received.get()
    }
}

impl Observer for LocationReporter {
    fn on_next(&self, location: Location) {
        info!(reporter = self.name, "📍 The current location is {}", location);
        self.last_location.set(Some(location));
        self.received.set(self.received.get() + 1);
    }

    fn on_error(&self, error: &TrackerError) {
        warn!(reporter = self.name, "⚠️ {}", error);
    }

    fn on_completed(&self) {
        info!(reporter = self.name, "🏁 The location tracker has completed transmitting data");
        self.unsubscribe();
    }
}

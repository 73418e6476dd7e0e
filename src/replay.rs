use crate::app_config::AppConfig;
use crate::reporter::LocationReporter;
use crate::tracker::LocationTracker;
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// Feeds the configured readings to one reporter per configured entry, then ends the transmission.
/// Returns the reporters in configuration order.
#[instrument(skip_all)]
pub fn replay(config: &AppConfig) -> Vec<Rc<LocationReporter>> {
    let tracker = LocationTracker::new();
    let reporters = config
        .reporters()
        .iter()
        .map(|reporter_config| {
            let reporter = LocationReporter::new(reporter_config.name());
            reporter.subscribe(&tracker);
            reporter
        })
        .collect::<Vec<_>>();
    info!("✅  Subscribed {} reporter(s)", reporters.len());

    for (index, reading) in config.readings().iter().enumerate() {
        for (reporter, reporter_config) in reporters.iter().zip(config.reporters()) {
            if reporter_config.leave_after() == Some(index) {
                debug!(reporter = reporter.name(), "Reporter leaves after {} reading(s)", index);
                reporter.unsubscribe();
            }
        }

        tracker.track_location(reading.location());
    }

    tracker.end_transmission();
    info!("✅  Replayed {} reading(s)", config.readings().len());

    reporters
}

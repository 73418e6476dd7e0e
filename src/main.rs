use location_tracker::app_config::AppConfig;
use location_tracker::replay::replay;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.logging().level()?).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let reporters = replay(&config);
    for reporter in &reporters {
        match reporter.last_location() {
            Some(location) => info!("{} received {} location(s), last at {}", reporter.name(), reporter.received(), location),
            None => info!("{} received no locations", reporter.name()),
        }
    }

    info!("🔥 {} is done", env!("CARGO_PKG_NAME"));

    Ok(())
}

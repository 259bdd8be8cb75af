use crate::cooldown::CooldownTracker;
use crate::notifier::NotificationSink;
use crate::types::AircraftRecord;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct DispatchReport {
    /// Matches for which the sinks were invoked.
    pub notified: usize,
    /// Matches skipped because they were still cooling down.
    pub skipped: usize,
    /// Individual sink calls that failed.
    pub sink_failures: usize,
}

pub struct Dispatcher {
    tracker: CooldownTracker,
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(tracker: CooldownTracker, sinks: Vec<Box<dyn NotificationSink>>) -> Self {
        Dispatcher { tracker, sinks }
    }

    #[must_use]
    pub fn tracker(&self) -> &CooldownTracker {
        &self.tracker
    }

    /// Notifies every sink about each eligible match.
    ///
    /// Sinks are called independently of one another, and the cooldown starts
    /// as soon as the attempt is made, whether or not any sink succeeded.
    pub fn dispatch(
        &mut self,
        matches: &[&AircraftRecord],
        now: chrono::DateTime<chrono::Utc>,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();

        for aircraft in matches {
            let Some(identifier) = aircraft.identifier() else {
                continue;
            };

            if !self.tracker.is_eligible(identifier, now) {
                log::info!(
                    "Aircraft {identifier} was already seen recently. Skipping notification."
                );
                report.skipped += 1;
                continue;
            }

            log::info!("Found watched aircraft: {identifier}");
            for sink in &self.sinks {
                if let Err(err) = sink.notify(aircraft) {
                    log::error!("Error sending {} notification: {err}", sink.name());
                    report.sink_failures += 1;
                }
            }
            self.tracker.record(identifier, now);
            report.notified += 1;
        }

        report
    }
}

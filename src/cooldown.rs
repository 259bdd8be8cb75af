/// Last notification attempt per identifier.
///
/// An identifier is eligible for a new notification when it has never been
/// seen, or when strictly more than `cooldown` has elapsed since its last
/// recorded attempt. Entries are only ever added or overwritten.
#[derive(Debug)]
pub struct CooldownTracker {
    cooldown: chrono::TimeDelta,
    last_seen: std::collections::HashMap<String, chrono::DateTime<chrono::Utc>>,
}

impl CooldownTracker {
    #[must_use]
    pub fn new(cooldown: chrono::TimeDelta) -> Self {
        CooldownTracker {
            cooldown,
            last_seen: std::collections::HashMap::new(),
        }
    }

    #[must_use]
    pub fn is_eligible(&self, identifier: &str, now: chrono::DateTime<chrono::Utc>) -> bool {
        match self.last_seen.get(identifier) {
            Some(last_seen) => now - *last_seen > self.cooldown,
            None => true,
        }
    }

    pub fn record(&mut self, identifier: &str, now: chrono::DateTime<chrono::Utc>) {
        self.last_seen.insert(identifier.to_string(), now);
    }

    #[must_use]
    pub fn last_seen(&self, identifier: &str) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_seen.get(identifier).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.last_seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CooldownTracker;

    fn t0() -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc)
    }

    #[test]
    fn when_identifier_never_seen_then_it_is_eligible() {
        let tracker = CooldownTracker::new(chrono::TimeDelta::minutes(90));
        assert!(tracker.is_eligible("N2163J", t0()));
        assert!(tracker.is_empty());
    }

    #[test]
    fn when_within_cooldown_then_not_eligible() {
        let mut tracker = CooldownTracker::new(chrono::TimeDelta::minutes(90));
        tracker.record("N2163J", t0());

        assert!(!tracker.is_eligible("N2163J", t0()));
        assert!(!tracker.is_eligible("N2163J", t0() + chrono::TimeDelta::minutes(30)));
    }

    #[test]
    fn when_exactly_at_cooldown_boundary_then_not_eligible() {
        let mut tracker = CooldownTracker::new(chrono::TimeDelta::minutes(90));
        tracker.record("N2163J", t0());

        assert!(!tracker.is_eligible("N2163J", t0() + chrono::TimeDelta::minutes(90)));
        assert!(tracker.is_eligible(
            "N2163J",
            t0() + chrono::TimeDelta::minutes(90) + chrono::TimeDelta::seconds(1)
        ));
    }

    #[test]
    fn when_recorded_again_then_last_seen_is_overwritten() {
        let mut tracker = CooldownTracker::new(chrono::TimeDelta::minutes(90));
        let later = t0() + chrono::TimeDelta::minutes(95);
        tracker.record("N2163J", t0());
        tracker.record("N2163J", later);

        assert_eq!(tracker.last_seen("N2163J"), Some(later));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn when_other_identifier_cooling_then_unrelated_identifier_is_eligible() {
        let mut tracker = CooldownTracker::new(chrono::TimeDelta::minutes(90));
        tracker.record("N2163J", t0());

        assert!(tracker.is_eligible("IDAHO99", t0()));
    }
}

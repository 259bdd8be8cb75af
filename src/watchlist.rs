use crate::types::AircraftRecord;

/// Tail numbers of interest, fixed for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct WatchList {
    tail_numbers: std::collections::HashSet<String>,
}

impl WatchList {
    pub fn new<I, S>(tail_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WatchList {
            tail_numbers: tail_numbers
                .into_iter()
                .map(|tail_number| tail_number.as_ref().trim().to_string())
                .filter(|tail_number| !tail_number.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.tail_numbers.contains(identifier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tail_numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tail_numbers.is_empty()
    }

    /// Records whose trimmed `flight` field is on the list. Records without an
    /// identifier never match.
    #[must_use]
    pub fn matches<'a>(&self, records: &'a [AircraftRecord]) -> Vec<&'a AircraftRecord> {
        records
            .iter()
            .filter(|record| record.identifier().is_some_and(|id| self.contains(id)))
            .collect()
    }
}

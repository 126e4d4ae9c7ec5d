use diskhead_core::{Algorithm, Direction, ScheduleResult};

/// One algorithm's run within a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The algorithm that was run.
    pub algorithm: Algorithm,

    /// The direction it ran with, if it sweeps.
    pub direction: Option<Direction>,

    /// The schedule it produced.
    pub result: ScheduleResult,
}

impl Entry {
    /// Returns the entry's total seek distance.
    #[must_use]
    pub fn total_seek(&self) -> u64 {
        self.result.total_seek()
    }
}

/// The outcome of comparing several algorithms on one input.
///
/// Entries are kept in canonical algorithm order. The optimum is the entry
/// with the smallest seek total; ties go to the earliest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    entries: Vec<Entry>,
    optimal: usize,
}

impl Report {
    /// Builds a report from canonically ordered, non-empty entries.
    pub(super) fn from_entries(entries: Vec<Entry>) -> Self {
        debug_assert!(!entries.is_empty(), "a comparison needs at least one entry");

        let optimal = entries
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| entry.total_seek())
            .map_or(0, |(index, _)| index);

        Self { entries, optimal }
    }

    /// Returns every entry in canonical order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns each algorithm's seek total in canonical order.
    pub fn all_results(&self) -> impl Iterator<Item = (Algorithm, u64)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.algorithm, entry.total_seek()))
    }

    /// Returns the entry for `algorithm`, if it was compared.
    #[must_use]
    pub fn get(&self, algorithm: Algorithm) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.algorithm == algorithm)
    }

    /// Returns the winning entry.
    #[must_use]
    pub fn optimal(&self) -> &Entry {
        &self.entries[self.optimal]
    }

    /// Returns the winning algorithm.
    #[must_use]
    pub fn optimal_algorithm(&self) -> Algorithm {
        self.optimal().algorithm
    }

    /// Returns the winning schedule.
    #[must_use]
    pub fn optimal_result(&self) -> &ScheduleResult {
        &self.optimal().result
    }

    /// Returns the entries from cheapest to most expensive.
    ///
    /// Equal totals keep canonical order.
    #[must_use]
    pub fn ranking(&self) -> Vec<&Entry> {
        let mut ranking: Vec<_> = self.entries.iter().collect();
        ranking.sort_by_key(|entry| entry.total_seek());
        ranking
    }
}

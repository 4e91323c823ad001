//! Run results and the outcome frequency table

use crate::statistics::RunStatistics;
use std::collections::HashMap;
use std::fmt;

/// Result of running a circuit for a number of shots
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Outcome frequency table; counts sum to the shot count
    pub counts: FrequencyTable,

    /// Wall-clock statistics, when collection was enabled
    pub statistics: Option<RunStatistics>,
}

impl RunResult {
    /// Create a result carrying only the frequency table
    pub fn new(counts: FrequencyTable) -> Self {
        Self {
            counts,
            statistics: None,
        }
    }

    /// Attach run statistics
    pub fn with_statistics(mut self, statistics: RunStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    /// Total number of shots in the run
    pub fn total_shots(&self) -> usize {
        self.counts.total_shots()
    }
}

/// Mapping from outcome bitstring to occurrence count
///
/// The unit of aggregation for a run: one entry per observed outcome,
/// counts summing to the shot count. Bitstrings render the
/// most-significant qubit first, so the outcome of qubit 0 is the last
/// character.
///
/// This table and the originating circuit are the only data handed to
/// downstream reporting; display layers compute their percentage bars
/// and summary metrics from here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    total_shots: usize,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from basis-state-index counts
    pub(crate) fn from_indexed(counts: HashMap<usize, usize>, num_qubits: usize) -> Self {
        let total_shots = counts.values().sum();
        let counts = counts
            .into_iter()
            .map(|(index, count)| (format!("{:0width$b}", index, width = num_qubits), count))
            .collect();
        Self {
            counts,
            total_shots,
        }
    }

    /// Record one outcome
    pub fn record(&mut self, bitstring: impl Into<String>) {
        *self.counts.entry(bitstring.into()).or_insert(0) += 1;
        self.total_shots += 1;
    }

    /// Count for a specific outcome (0 when never observed)
    pub fn count_of(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Observed frequency of an outcome as a fraction of all shots
    pub fn probability(&self, bitstring: &str) -> f64 {
        if self.total_shots == 0 {
            0.0
        } else {
            self.count_of(bitstring) as f64 / self.total_shots as f64
        }
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order
    pub fn outcomes(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(bits, &count)| (bits.as_str(), count))
    }

    /// Number of distinct outcomes observed
    pub fn unique_states(&self) -> usize {
        self.counts.len()
    }

    /// Total number of shots recorded
    pub fn total_shots(&self) -> usize {
        self.total_shots
    }

    /// The most frequent outcome, if any shots were recorded
    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.sorted_by_count().into_iter().next()
    }

    /// Outcomes sorted by count descending, ties broken by bitstring
    pub fn sorted_by_count(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self.outcomes().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted
    }

    /// Convert to an observed probability distribution
    pub fn to_probabilities(&self) -> HashMap<String, f64> {
        self.counts
            .iter()
            .map(|(bits, &count)| (bits.clone(), count as f64 / self.total_shots as f64))
            .collect()
    }

    /// Fraction of all shots landing in the given outcome set
    ///
    /// The fidelity estimate the demo reports use, e.g. the Bell pair
    /// quality is `support_fraction(&["00", "11"])`.
    pub fn support_fraction(&self, outcomes: &[&str]) -> f64 {
        if self.total_shots == 0 {
            return 0.0;
        }
        let hits: usize = outcomes.iter().map(|bits| self.count_of(bits)).sum();
        hits as f64 / self.total_shots as f64
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} shots across {} outcomes:",
            self.total_shots,
            self.unique_states()
        )?;
        for (bits, count) in self.sorted_by_count() {
            let percent = 100.0 * count as f64 / self.total_shots as f64;
            writeln!(f, "  |{}⟩  {:>6}  ({:5.1}%)", bits, count, percent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_table() -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for _ in 0..60 {
            table.record("00");
        }
        for _ in 0..40 {
            table.record("11");
        }
        table
    }

    #[test]
    fn test_record_and_count() {
        let table = sample_table();
        assert_eq!(table.total_shots(), 100);
        assert_eq!(table.count_of("00"), 60);
        assert_eq!(table.count_of("11"), 40);
        assert_eq!(table.count_of("01"), 0);
        assert_eq!(table.unique_states(), 2);
    }

    #[test]
    fn test_probability() {
        let table = sample_table();
        assert_relative_eq!(table.probability("00"), 0.6);
        assert_relative_eq!(table.probability("10"), 0.0);
    }

    #[test]
    fn test_most_common_and_sorting() {
        let table = sample_table();
        assert_eq!(table.most_common(), Some(("00", 60)));

        let sorted = table.sorted_by_count();
        assert_eq!(sorted, vec![("00", 60), ("11", 40)]);
    }

    #[test]
    fn test_from_indexed_pads_bitstrings() {
        let mut indexed = HashMap::new();
        indexed.insert(0b001usize, 3);
        indexed.insert(0b100usize, 7);

        let table = FrequencyTable::from_indexed(indexed, 3);
        assert_eq!(table.total_shots(), 10);
        assert_eq!(table.count_of("001"), 3);
        assert_eq!(table.count_of("100"), 7);
    }

    #[test]
    fn test_support_fraction() {
        let table = sample_table();
        assert_relative_eq!(table.support_fraction(&["00", "11"]), 1.0);
        assert_relative_eq!(table.support_fraction(&["00"]), 0.6);
        assert_relative_eq!(table.support_fraction(&["01", "10"]), 0.0);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new();
        assert_eq!(table.total_shots(), 0);
        assert_eq!(table.most_common(), None);
        assert_relative_eq!(table.probability("0"), 0.0);
        assert_relative_eq!(table.support_fraction(&["0"]), 0.0);
    }

    #[test]
    fn test_display() {
        let table = sample_table();
        let rendered = format!("{}", table);
        assert!(rendered.contains("100 shots"));
        assert!(rendered.contains("|00⟩"));
        assert!(rendered.contains("60.0%"));
    }
}

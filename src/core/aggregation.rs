use crate::core::{AggregateStats, Submission};
use std::collections::BTreeMap;

/// Tallies categorical labels by exact value. Empty labels are skipped.
pub fn aggregate_stats(entries: &[Submission]) -> AggregateStats {
    let mut stats = AggregateStats {
        total_submissions: entries.len(),
        ..AggregateStats::default()
    };

    for entry in entries {
        tally(&mut stats.age_ranges, &entry.age_range);
        tally(&mut stats.family_situations, &entry.family_situation);
    }

    stats
}

fn tally(counts: &mut BTreeMap<String, usize>, label: &str) {
    if label.is_empty() {
        return;
    }
    *counts.entry(label.to_string()).or_insert(0) += 1;
}

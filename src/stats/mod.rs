/// Statistics reporters over a [`FilteredView`](crate::data::filter::FilteredView).
///
/// Each reporter is a pure `compute` returning a stats struct plus a `write`
/// that renders it. An empty view yields `None` / empty counts and an
/// explicit "no trips" line, never a panic.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::collections::BTreeMap;

/// Line printed by every reporter when the filtered view has no rows.
pub const NO_TRIPS: &str = "No trips match the current filters.";

/// Most frequent value, or `None` for empty input. Ties are broken by the
/// smallest value in natural order: counting into a `BTreeMap` and requiring
/// a strictly greater count to displace the current best makes the result
/// deterministic.
pub(crate) fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, u64> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut best: Option<(T, u64)> = None;
    for (value, count) in counts {
        let better = match &best {
            None => true,
            Some((_, best_count)) => count > *best_count,
        };
        if better {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Occurrence count per value, in natural value order.
pub(crate) fn value_counts<T, I>(values: I) -> BTreeMap<T, u64>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, u64> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
}

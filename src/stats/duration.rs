use std::io::{self, Write};

use crate::data::filter::FilteredView;

use super::NO_TRIPS;

/// Trip-duration aggregates over the filtered view.
#[derive(Debug, PartialEq)]
pub struct DurationStats {
    pub trip_count: usize,
    /// Sum of all durations in seconds.
    pub total_secs: u64,
    /// Arithmetic mean in seconds; `None` for an empty view.
    pub mean_secs: Option<f64>,
}

pub fn compute(view: &FilteredView<'_>) -> DurationStats {
    let trip_count = view.len();
    let total_secs: u64 = view.iter().map(|t| u64::from(t.duration_secs)).sum();
    let mean_secs = if trip_count == 0 {
        None
    } else {
        Some(total_secs as f64 / trip_count as f64)
    };
    DurationStats {
        trip_count,
        total_secs,
        mean_secs,
    }
}

pub fn write(out: &mut impl Write, stats: &DurationStats) -> io::Result<()> {
    let Some(mean) = stats.mean_secs else {
        return writeln!(out, "{NO_TRIPS}");
    };
    writeln!(out, "The total travel time is {} seconds", stats.total_secs)?;
    writeln!(out, "The average trip duration is {mean:.2} seconds")
}

use chrono::Weekday;

use super::model::{City, Dataset, TripRecord};

// ---------------------------------------------------------------------------
// Selectors – month / day predicates chosen at the prompts
// ---------------------------------------------------------------------------

/// Month predicate. The prompt encoding is 0 for "all", 1–6 for
/// January–June (the source datasets only cover the first half-year).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// Calendar month, 1–6.
    Month(u32),
}

impl MonthFilter {
    /// Decode the prompt's numeric encoding; `None` for out-of-range input.
    pub fn from_index(index: u32) -> Option<MonthFilter> {
        match index {
            0 => Some(MonthFilter::All),
            1..=6 => Some(MonthFilter::Month(index)),
            _ => None,
        }
    }

    fn matches(self, trip: &TripRecord) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => trip.month == m,
        }
    }
}

/// Day-of-week predicate. The prompt encoding is 0–6 for Monday–Sunday
/// and 7 for "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Decode the prompt's numeric encoding; `None` for out-of-range input.
    pub fn from_index(index: u32) -> Option<DayFilter> {
        match index {
            0..=6 => {
                // 0 = Monday … 6 = Sunday, same as Weekday::num_days_from_monday.
                let day = Weekday::try_from(index as u8).ok()?;
                Some(DayFilter::Day(day))
            }
            7 => Some(DayFilter::All),
            _ => None,
        }
    }

    fn matches(self, trip: &TripRecord) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => trip.weekday == d,
        }
    }
}

/// The triple chosen once per session iteration.
#[derive(Debug, Clone, Copy)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Return indices of trips that pass both selectors, in original order.
/// An empty result is valid; the reporters handle it.
pub fn filtered_indices(dataset: &Dataset, month: MonthFilter, day: DayFilter) -> Vec<usize> {
    dataset
        .trips
        .iter()
        .enumerate()
        .filter(|(_, trip)| month.matches(trip) && day.matches(trip))
        .map(|(i, _)| i)
        .collect()
}

/// A read-only view of the rows passing the session's filters. Borrows the
/// dataset; the underlying trips are never copied or reordered.
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn new(dataset: &'a Dataset, month: MonthFilter, day: DayFilter) -> Self {
        let indices = filtered_indices(dataset, month, day);
        FilteredView { dataset, indices }
    }

    pub fn city(&self) -> City {
        self.dataset.city
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate the retained trips in original timestamp order.
    pub fn iter(&self) -> impl Iterator<Item = &'a TripRecord> + '_ {
        self.indices.iter().map(|&i| &self.dataset.trips[i])
    }

    /// One page of raw rows for the pagination loop, or `None` past the end.
    pub fn page(&self, start: usize, size: usize) -> Option<Vec<&'a TripRecord>> {
        if start >= self.indices.len() {
            return None;
        }
        let end = (start + size).min(self.indices.len());
        Some(
            self.indices[start..end]
                .iter()
                .map(|&i| &self.dataset.trips[i])
                .collect(),
        )
    }
}

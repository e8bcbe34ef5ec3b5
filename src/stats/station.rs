use std::io::{self, Write};

use crate::data::filter::FilteredView;

use super::{mode, NO_TRIPS};

/// Most frequent stations and station pair over the filtered view.
#[derive(Debug, PartialEq, Eq)]
pub struct StationStats {
    pub popular_start: Option<String>,
    pub popular_end: Option<String>,
    /// Most frequent (start, end) combination.
    pub popular_trip: Option<(String, String)>,
}

pub fn compute(view: &FilteredView<'_>) -> StationStats {
    StationStats {
        popular_start: mode(view.iter().map(|t| t.start_station.clone())),
        popular_end: mode(view.iter().map(|t| t.end_station.clone())),
        popular_trip: mode(
            view.iter()
                .map(|t| (t.start_station.clone(), t.end_station.clone())),
        ),
    }
}

pub fn write(out: &mut impl Write, stats: &StationStats) -> io::Result<()> {
    let (Some(start), Some(end), Some((from, to))) = (
        stats.popular_start.as_deref(),
        stats.popular_end.as_deref(),
        stats.popular_trip.as_ref(),
    ) else {
        return writeln!(out, "{NO_TRIPS}");
    };
    writeln!(out, "Most common origin is {start}")?;
    writeln!(out, "Most common destination is {end}")?;
    writeln!(out, "Most popular trip is {from} -> {to}")
}

#[cfg(test)]
mod tests {
    use crate::data::model::City;
    use crate::stats::testutil::{dataset, trip, view};

    use super::*;

    #[test]
    fn picks_most_frequent_stations_and_pair() {
        let mut a = trip(1, 2, 8, 300);
        a.start_station = "Clark St".to_string();
        a.end_station = "Lake St".to_string();
        let mut b = trip(1, 2, 9, 300);
        b.start_station = "Clark St".to_string();
        b.end_station = "Lake St".to_string();
        let mut c = trip(1, 2, 10, 300);
        c.start_station = "Clark St".to_string();
        c.end_station = "Oak St".to_string();

        let ds = dataset(City::Chicago, vec![a, b, c]);
        let stats = compute(&view(&ds));
        assert_eq!(stats.popular_start.as_deref(), Some("Clark St"));
        assert_eq!(stats.popular_end.as_deref(), Some("Lake St"));
        assert_eq!(
            stats.popular_trip,
            Some(("Clark St".to_string(), "Lake St".to_string()))
        );
    }

    #[test]
    fn pair_mode_is_not_the_product_of_the_single_modes() {
        // A->X, A->Y, B->X: start mode A, end mode X, but pair ties are
        // broken to the lexicographically smallest pair (A, X).
        let mut a = trip(1, 2, 8, 300);
        a.start_station = "A".to_string();
        a.end_station = "X".to_string();
        let mut b = trip(1, 2, 9, 300);
        b.start_station = "A".to_string();
        b.end_station = "Y".to_string();
        let mut c = trip(1, 2, 10, 300);
        c.start_station = "B".to_string();
        c.end_station = "X".to_string();

        let ds = dataset(City::Chicago, vec![a, b, c]);
        let stats = compute(&view(&ds));
        assert_eq!(stats.popular_start.as_deref(), Some("A"));
        assert_eq!(stats.popular_end.as_deref(), Some("X"));
        assert_eq!(stats.popular_trip, Some(("A".to_string(), "X".to_string())));
    }

    #[test]
    fn empty_view_renders_no_trips_line() {
        let ds = dataset(City::Chicago, vec![]);
        let stats = compute(&view(&ds));

        let mut out = Vec::new();
        write(&mut out, &stats).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{NO_TRIPS}\n"));
    }
}

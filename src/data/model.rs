use std::fmt;

use chrono::{NaiveDateTime, Weekday};

// ---------------------------------------------------------------------------
// City – which dataset the session explores
// ---------------------------------------------------------------------------

/// One of the three cities with published trip data.
///
/// Washington's dataset does not carry the rider-detail columns
/// (gender, birth year); see [`City::has_rider_details`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Parse a user-entered city name (case-insensitive, surrounding
    /// whitespace ignored).
    pub fn parse(input: &str) -> Option<City> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    /// File name of this city's trip CSV.
    pub fn data_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether the dataset includes the Gender / Birth Year columns.
    pub fn has_rider_details(self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            City::Chicago => write!(f, "Chicago"),
            City::NewYorkCity => write!(f, "New York City"),
            City::Washington => write!(f, "Washington"),
        }
    }
}

// ---------------------------------------------------------------------------
// TripRecord – one row of a city dataset
// ---------------------------------------------------------------------------

/// A single trip (one row of the source CSV) with the calendar fields
/// derived from the start timestamp at load time.
#[derive(Debug, Clone)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    /// Trip length in seconds.
    pub duration_secs: u32,
    pub start_station: String,
    pub end_station: String,
    /// Empty cells in the source become `None`.
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // Derived from `start_time`, not present in the source file.
    /// Calendar month, 1–12.
    pub month: u32,
    pub weekday: Weekday,
    /// Hour of day, 0–23.
    pub hour: u32,
}

// ---------------------------------------------------------------------------
// Dataset – all trips for one city
// ---------------------------------------------------------------------------

/// The full loaded dataset for one city. Immutable after load; filtering
/// produces an index view, never mutates the trips.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    pub trips: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(city: City, trips: Vec<TripRecord>) -> Self {
        Dataset { city, trips }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Calendar display helpers
// ---------------------------------------------------------------------------

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    month
        .checked_sub(1)
        .and_then(|i| NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Full English weekday name (chrono's `Display` is the short form).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_parse_is_case_insensitive() {
        assert_eq!(City::parse("Chicago"), Some(City::Chicago));
        assert_eq!(City::parse("  NEW YORK CITY "), Some(City::NewYorkCity));
        assert_eq!(City::parse("washington"), Some(City::Washington));
        assert_eq!(City::parse("boston"), None);
    }

    #[test]
    fn only_washington_lacks_rider_details() {
        assert!(City::Chicago.has_rider_details());
        assert!(City::NewYorkCity.has_rider_details());
        assert!(!City::Washington.has_rider_details());
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(6), "June");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(month_name(13), "Unknown");
    }
}

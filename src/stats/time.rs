use std::io::{self, Write};

use chrono::Weekday;

use crate::data::filter::FilteredView;
use crate::data::model::{month_name, weekday_name};

use super::{mode, NO_TRIPS};

/// Most frequent travel times over the filtered view.
#[derive(Debug, PartialEq, Eq)]
pub struct TimeStats {
    pub popular_month: Option<u32>,
    pub popular_day: Option<Weekday>,
    /// Start hour, 0–23.
    pub popular_hour: Option<u32>,
}

pub fn compute(view: &FilteredView<'_>) -> TimeStats {
    TimeStats {
        popular_month: mode(view.iter().map(|t| t.month)),
        popular_day: mode(view.iter().map(|t| t.weekday.num_days_from_monday()))
            .and_then(|n| Weekday::try_from(n as u8).ok()),
        popular_hour: mode(view.iter().map(|t| t.hour)),
    }
}

pub fn write(out: &mut impl Write, stats: &TimeStats) -> io::Result<()> {
    let (Some(month), Some(day), Some(hour)) =
        (stats.popular_month, stats.popular_day, stats.popular_hour)
    else {
        return writeln!(out, "{NO_TRIPS}");
    };
    writeln!(out, "The most popular month of commute is {}", month_name(month))?;
    writeln!(out, "The most popular day of commute is {}", weekday_name(day))?;
    writeln!(out, "The most popular hour of commute is {hour}")
}

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::data::filter::FilteredView;

use super::{mode, value_counts, NO_TRIPS};

/// Rider demographics over the filtered view.
///
/// `rider_details` is `None` for Washington, whose dataset has no
/// gender / birth-year columns. That is a schema variation, not an error.
#[derive(Debug, PartialEq, Eq)]
pub struct UserStats {
    /// Trips per user-type category. Empty cells are excluded, matching
    /// how the published figures count them.
    pub user_types: BTreeMap<String, u64>,
    pub rider_details: Option<RiderDetails>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RiderDetails {
    pub genders: BTreeMap<String, u64>,
    pub common_birth_year: Option<i32>,
    pub earliest_birth_year: Option<i32>,
    pub most_recent_birth_year: Option<i32>,
}

pub fn compute(view: &FilteredView<'_>) -> UserStats {
    let user_types = value_counts(view.iter().filter_map(|t| t.user_type.clone()));

    let rider_details = view.city().has_rider_details().then(|| RiderDetails {
        genders: value_counts(view.iter().filter_map(|t| t.gender.clone())),
        common_birth_year: mode(view.iter().filter_map(|t| t.birth_year)),
        earliest_birth_year: view.iter().filter_map(|t| t.birth_year).min(),
        most_recent_birth_year: view.iter().filter_map(|t| t.birth_year).max(),
    });

    UserStats {
        user_types,
        rider_details,
    }
}

pub fn write(out: &mut impl Write, stats: &UserStats) -> io::Result<()> {
    if stats.user_types.is_empty() {
        writeln!(out, "{NO_TRIPS}")?;
    } else {
        writeln!(out, "Types of users:")?;
        for (user_type, count) in &stats.user_types {
            writeln!(out, "  {user_type}: {count}")?;
        }
    }

    let Some(details) = &stats.rider_details else {
        return Ok(());
    };

    if !details.genders.is_empty() {
        writeln!(out, "Gender:")?;
        for (gender, count) in &details.genders {
            writeln!(out, "  {gender}: {count}")?;
        }
    }

    if let (Some(common), Some(earliest), Some(recent)) = (
        details.common_birth_year,
        details.earliest_birth_year,
        details.most_recent_birth_year,
    ) {
        writeln!(out, "Most common birth year is {common}")?;
        writeln!(out, "Earliest birth year is {earliest}")?;
        writeln!(out, "Most recent birth year is {recent}")?;
    }
    Ok(())
}

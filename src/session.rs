//! The interactive controller: one session is a loop of
//! SelectCity → SelectMonth → SelectDay → Load → Report → AskRestart.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::data::filter::{DayFilter, FilterSelection, FilteredView, MonthFilter};
use crate::data::loader;
use crate::data::model::{City, Dataset, TripRecord};
use crate::format::FormatOptions;
use crate::prompt::{ask_yes, prompt, Outcome};
use crate::stats;

/// One loop iteration's state: the active filter selection and the dataset
/// loaded for it. Created per iteration, handed by reference to each
/// reporter, and discarded before the restart prompt.
pub struct Session {
    pub selection: FilterSelection,
    pub dataset: Dataset,
}

impl Session {
    fn filtered(&self) -> FilteredView<'_> {
        FilteredView::new(&self.dataset, self.selection.month, self.selection.day)
    }
}

/// Run the whole interactive session against the given reader/writer pair.
/// Returns normally both on explicit exit and on a declined restart; a
/// failed dataset load is the only fatal path.
pub fn run(
    input: &mut impl BufRead,
    out: &mut impl Write,
    data_dir: &Path,
    format: &FormatOptions,
) -> Result<()> {
    writeln!(
        out,
        "Hello! Let's explore some US bikeshare data for Chicago, New York City, Washington!"
    )?;

    loop {
        let Some(selection) = select_filters(input, out)? else {
            return Ok(());
        };
        writeln!(out, "{}", format.divider())?;

        let dataset = loader::load_city(data_dir, selection.city)
            .with_context(|| format!("loading the {} dataset", selection.city))?;
        let session = Session { selection, dataset };
        report(input, out, &session, format)?;

        if !ask_yes(input, out, "\nWould you like to restart? Enter yes or no.")? {
            writeln!(out, "See you again soon!")?;
            return Ok(());
        }
    }
}

/// The three Select states. `None` means the user chose to exit.
fn select_filters(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<FilterSelection>> {
    let city = prompt(
        input,
        out,
        "Which city would you like to see? Enter Chicago, New York City or Washington ('exit' to quit) -",
        "You entered an invalid city, please choose from the above 3 options.",
        City::parse,
    )?;
    let Outcome::Accepted(city) = city else {
        return Ok(None);
    };

    let month = prompt(
        input,
        out,
        "Which month? Enter 1 for January, 2 for February ... 6 for June, or 0 for all ('exit' to quit) -",
        "You entered an invalid month, please choose from the above options.",
        |line| line.parse().ok().and_then(MonthFilter::from_index),
    )?;
    let Outcome::Accepted(month) = month else {
        return Ok(None);
    };

    let day = prompt(
        input,
        out,
        "Which day? Enter 0 for Monday ... 6 for Sunday, or 7 for all ('exit' to quit) -",
        "You entered an invalid day, please choose from the above options.",
        |line| line.parse().ok().and_then(DayFilter::from_index),
    )?;
    let Outcome::Accepted(day) = day else {
        return Ok(None);
    };

    Ok(Some(FilterSelection { city, month, day }))
}

/// The Report state: the four reporters in fixed order against one
/// filtered view.
fn report(
    input: &mut impl BufRead,
    out: &mut impl Write,
    session: &Session,
    format: &FormatOptions,
) -> io::Result<()> {
    let view = session.filtered();

    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();
    stats::time::write(out, &stats::time::compute(&view))?;
    view_raw_rows(input, out, &view, format)?;
    finish_section(out, format, started)?;

    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();
    stats::station::write(out, &stats::station::compute(&view))?;
    finish_section(out, format, started)?;

    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();
    stats::duration::write(out, &stats::duration::compute(&view))?;
    finish_section(out, format, started)?;

    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();
    stats::user::write(out, &stats::user::compute(&view))?;
    finish_section(out, format, started)
}

fn finish_section(out: &mut impl Write, format: &FormatOptions, started: Instant) -> io::Result<()> {
    writeln!(out, "\nThis took {:.4} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{}", format.divider())
}

/// Optional raw-row pagination after the time report: pages of
/// `format.page_size` rows while the user keeps answering yes.
fn view_raw_rows(
    input: &mut impl BufRead,
    out: &mut impl Write,
    view: &FilteredView<'_>,
    format: &FormatOptions,
) -> io::Result<()> {
    let first_question = format!(
        "\nWould you like to view {} rows of individual trip data? Enter yes or no",
        format.page_size
    );
    let mut wants_more = ask_yes(input, out, &first_question)?;

    let mut start = 0;
    while wants_more {
        let Some(rows) = view.page(start, format.page_size) else {
            writeln!(out, "No more trips to show.")?;
            break;
        };
        for row in rows {
            writeln!(out, "{}", render_row(row))?;
        }
        start += format.page_size;
        wants_more = ask_yes(input, out, "Do you wish to continue? Enter yes or no:")?;
    }
    Ok(())
}

fn render_row(trip: &TripRecord) -> String {
    format!(
        "{} | {:>6}s | {} -> {} | {}",
        trip.start_time,
        trip.duration_secs,
        trip.start_station,
        trip.end_station,
        trip.user_type.as_deref().unwrap_or("-")
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-06-05 17:09:32,2017-06-05 17:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
1,2017-06-12 17:19:03,2017-06-12 17:45:53,1610,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Female,1989.0
2,2017-01-03 08:27:49,2017-01-03 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Customer,,
";

    fn data_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("chicago.csv"), CHICAGO_CSV).unwrap();
        dir
    }

    fn run_session(input_text: &str, data_dir: &Path) -> (Result<()>, String) {
        let mut input = Cursor::new(input_text.to_string());
        let mut out = Vec::new();
        let result = run(&mut input, &mut out, data_dir, &FormatOptions::default());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn exit_at_city_prompt_terminates_with_no_further_output() {
        let dir = data_dir();
        let (result, out) = run_session("exit\n", dir.path());
        result.unwrap();
        assert!(out.contains("Which city"));
        assert!(!out.contains("Which month"));
        assert!(!out.contains("Calculating"));
    }

    #[test]
    fn exit_at_month_and_day_prompts_also_terminates() {
        let dir = data_dir();
        let (result, out) = run_session("chicago\nexit\n", dir.path());
        result.unwrap();
        assert!(out.contains("Which month"));
        assert!(!out.contains("Which day"));

        let (result, out) = run_session("chicago\n0\nexit\n", dir.path());
        result.unwrap();
        assert!(out.contains("Which day"));
        assert!(!out.contains("Calculating"));
    }

    #[test]
    fn invalid_inputs_are_reprompted_before_acceptance() {
        let dir = data_dir();
        let (result, out) =
            run_session("springfield\nchicago\n8\n0\nnine\n7\nno\nno\n", dir.path());
        result.unwrap();
        assert!(out.contains("invalid city"));
        assert!(out.contains("invalid month"));
        assert!(out.contains("invalid day"));
        assert!(out.contains("Calculating User Stats..."));
    }

    #[test]
    fn full_run_reports_all_four_sections_in_order() {
        let dir = data_dir();
        let (result, out) = run_session("chicago\n0\n7\nno\nno\n", dir.path());
        result.unwrap();

        let times = out.find("Calculating The Most Frequent Times of Travel").unwrap();
        let stations = out.find("Calculating The Most Popular Stations and Trip").unwrap();
        let durations = out.find("Calculating Trip Duration").unwrap();
        let users = out.find("Calculating User Stats").unwrap();
        assert!(times < stations && stations < durations && durations < users);

        assert!(out.contains("The most popular month of commute is June"));
        assert!(out.contains("Most common origin is Wood St & Hubbard St"));
        assert!(out.contains("The total travel time is 2347 seconds"));
        assert!(out.contains("Subscriber: 2"));
        assert!(out.contains("Most common birth year is 1989"));
        assert!(out.contains("See you again soon!"));
    }

    #[test]
    fn empty_filtered_set_degrades_gracefully() {
        // February Monday matches nothing in the sample data.
        let dir = data_dir();
        let (result, out) = run_session("chicago\n2\n0\nno\nno\n", dir.path());
        result.unwrap();
        assert!(out.contains(stats::NO_TRIPS));
        assert!(out.contains("Calculating User Stats..."));
    }

    #[test]
    fn raw_row_pagination_shows_rows_while_user_agrees() {
        let dir = data_dir();
        let (result, out) = run_session("chicago\n0\n7\nyes\nno\nno\n", dir.path());
        result.unwrap();
        assert!(out.contains("Wood St & Hubbard St -> Damen Ave & Chicago Ave"));
        assert!(out.contains("Do you wish to continue?"));
    }

    #[test]
    fn restart_loops_back_to_the_city_prompt() {
        let dir = data_dir();
        let (result, out) = run_session("chicago\n0\n7\nno\nyes\nexit\n", dir.path());
        result.unwrap();
        assert_eq!(out.matches("Which city").count(), 2);
    }

    #[test]
    fn missing_dataset_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let (result, _) = run_session("chicago\n0\n7\n", dir.path());
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("chicago"));
    }
}

/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset, derive month/weekday/hour
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  City + Vec<TripRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply month/day selectors → FilteredView
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;

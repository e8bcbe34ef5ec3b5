//! Generate the three city trip CSVs with the production column layout
//! (Washington without the Gender / Birth Year columns), so the explorer
//! can be exercised without downloading the real datasets.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

struct CitySpec {
    file: &'static str,
    stations: &'static [&'static str],
    /// Whether to emit the Gender / Birth Year columns.
    rider_details: bool,
}

const CITIES: [CitySpec; 3] = [
    CitySpec {
        file: "chicago.csv",
        stations: &[
            "Streeter Dr & Grand Ave",
            "Lake Shore Dr & Monroe St",
            "Clinton St & Washington Blvd",
            "Canal St & Adams St",
            "Theater on the Lake",
            "Wood St & Hubbard St",
        ],
        rider_details: true,
    },
    CitySpec {
        file: "new_york_city.csv",
        stations: &[
            "Pershing Square North",
            "E 17 St & Broadway",
            "Broadway & E 22 St",
            "W 21 St & 6 Ave",
            "West St & Chambers St",
            "8 Ave & W 31 St",
        ],
        rider_details: true,
    },
    CitySpec {
        file: "washington.csv",
        stations: &[
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Jefferson Dr & 14th St SW",
            "Massachusetts Ave & Dupont Circle NW",
            "15th & P St NW",
            "4th & M St SW",
        ],
        rider_details: false,
    },
];

const TRIPS_PER_CITY: usize = 600;

fn random_start(rng: &mut SimpleRng) -> NaiveDateTime {
    // Jan 1 – Jun 30 2017, the window the published datasets cover.
    let day = rng.below(181) as i64;
    // Morning and evening commute peaks.
    let hour: u32 = if rng.next_f64() < 0.5 {
        if rng.next_f64() < 0.5 { 8 } else { 17 }
    } else {
        rng.below(24) as u32
    };
    let second = rng.below(3600) as i64;
    NaiveDate::from_ymd_opt(2017, 1, 1)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        + Duration::days(day)
        + Duration::seconds(second)
}

fn main() {
    let mut rng = SimpleRng::new(42);

    for (city_no, city) in CITIES.iter().enumerate() {
        let rider_details = city.rider_details;

        let mut starts: Vec<NaiveDateTime> =
            (0..TRIPS_PER_CITY).map(|_| random_start(&mut rng)).collect();
        starts.sort();

        let mut writer = csv::Writer::from_path(city.file)
            .unwrap_or_else(|e| panic!("failed to create {}: {e}", city.file));

        let mut header = vec!["", "Start Time", "End Time", "Trip Duration", "Start Station", "End Station", "User Type"];
        if rider_details {
            header.extend(["Gender", "Birth Year"]);
        }
        writer.write_record(&header).expect("write header");

        for (i, start) in starts.iter().enumerate() {
            let duration = rng.gauss(900.0, 500.0).max(60.0).round() as i64;
            let end = *start + Duration::seconds(duration);

            let start_station = city.stations[rng.below(city.stations.len())];
            let end_station = city.stations[rng.below(city.stations.len())];
            let user_type = if rng.next_f64() < 0.8 { "Subscriber" } else { "Customer" };

            let index = (city_no * 100_000 + i).to_string();
            let mut record = vec![
                index,
                start.format("%Y-%m-%d %H:%M:%S").to_string(),
                end.format("%Y-%m-%d %H:%M:%S").to_string(),
                duration.to_string(),
                start_station.to_string(),
                end_station.to_string(),
                user_type.to_string(),
            ];

            if rider_details {
                // Roughly one row in ten has no rider details, like the
                // real exports.
                if rng.next_f64() < 0.1 {
                    record.extend([String::new(), String::new()]);
                } else {
                    let gender = if rng.next_f64() < 0.72 { "Male" } else { "Female" };
                    let birth_year = rng.gauss(1983.0, 11.0).round().clamp(1930.0, 2004.0);
                    record.extend([gender.to_string(), format!("{birth_year:.1}")]);
                }
            }
            writer.write_record(&record).expect("write trip row");
        }

        writer.flush().expect("flush CSV");
        println!("Wrote {TRIPS_PER_CITY} trips to {}", city.file);
    }
}

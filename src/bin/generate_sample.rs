use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;

/// One day of synthetic bike-share data.  Field order is column order, so
/// `rentals` stays last — it is the label column the viewer summarizes.
#[derive(Serialize)]
struct DayRecord {
    day: u32,
    mnth: u32,
    year: u32,
    season: u32,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u32,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    rentals: i64,
}

/// Minimal deterministic PRNG (splitmix64).
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn season_of(mnth: u32) -> u32 {
    match mnth {
        3..=5 => 2,
        6..=8 => 3,
        9..=11 => 4,
        _ => 1,
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    fs::create_dir_all("data").context("creating data directory")?;
    let path = "data/daily-bike-share.csv";
    let mut writer = csv::Writer::from_path(path).context("creating sample CSV")?;

    // Two years of daily records.
    for i in 0..731u32 {
        let year = 2011 + i / 365;
        let day_of_year = i % 365;
        let mnth = day_of_year / 31 + 1;
        let day = day_of_year % 31 + 1;
        let season = season_of(mnth);
        let weekday = i % 7;
        let holiday = u8::from(rng.next_f64() < 0.03);
        let workingday = u8::from((1..=5).contains(&weekday) && holiday == 0);
        let weathersit = match rng.next_f64() {
            r if r < 0.62 => 1,
            r if r < 0.92 => 2,
            _ => 3,
        };

        // Seasonal temperature curve, peak mid-year, normalized to [0, 1].
        let phase = (day_of_year as f64 / 365.0 - 0.5) * 2.0 * std::f64::consts::PI;
        let temp = (0.5 + 0.3 * phase.cos() + rng.gauss(0.0, 0.05)).clamp(0.02, 0.98);
        let atemp = (temp + rng.gauss(0.0, 0.02)).clamp(0.0, 1.0);
        let hum = (0.6 + rng.gauss(0.0, 0.12)).clamp(0.1, 1.0);
        let windspeed = (0.19 + rng.gauss(0.0, 0.07)).clamp(0.0, 0.6);

        // Right-skewed demand: warm working days rent far more.
        let expected = 120.0
            + 950.0 * temp
            + 180.0 * f64::from(workingday)
            - 220.0 * f64::from(weathersit - 1)
            - 250.0 * windspeed;
        let rentals = (expected + rng.gauss(0.0, 140.0)).max(1.0).round() as i64;

        writer.serialize(DayRecord {
            day,
            mnth,
            year,
            season,
            holiday,
            weekday,
            workingday,
            weathersit,
            temp,
            atemp,
            hum,
            windspeed,
            rentals,
        })?;
    }

    writer.flush().context("writing sample CSV")?;
    println!("Wrote 731 rows to {path}");
    Ok(())
}

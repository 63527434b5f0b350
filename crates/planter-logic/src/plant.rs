//! A single potted plant: moisture and soil pH drift every tick, and the
//! plant takes damage while moisture sits outside its comfort band.
//!
//! Nothing here is clamped. Moisture, pH and health can all go negative;
//! death is just `health < 1`, and a dead plant keeps decaying if ticked.

use std::fmt;

use chrono::{NaiveDate, TimeDelta};

use crate::random::UniformSource;

/// Health a plant starts with unless told otherwise.
pub const DEFAULT_HEALTH: f64 = 100.0;

/// Below this health a plant is dead.
pub const MIN_LIVING_HEALTH: f64 = 1.0;

/// Moisture lost per tick, drawn uniformly from this range.
pub const MOISTURE_LOSS: (f64, f64) = (1.0, 2.0);

/// Moisture is healthy within `[optimal * LOW, optimal * HIGH]`, inclusive.
pub const MOISTURE_BAND_LOW: f64 = 0.9;
pub const MOISTURE_BAND_HIGH: f64 = 1.1;

/// Multiplicative pH change per tick. Skewed downward.
pub const PH_DRIFT: (f64, f64) = (-0.1, 0.03);

/// pH shift per unit of lime or aluminum sulfate.
pub const AMENDMENT_PH_PER_UNIT: f64 = 0.1;

/// Derived life status. Never stored, so it cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantStatus {
    Alive,
    Dead,
}

impl PlantStatus {
    pub fn from_health(health: f64) -> Self {
        if health >= MIN_LIVING_HEALTH {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    name: String,
    /// Days between intended waterings. Advisory only.
    schedule_days: i64,
    optimal_moisture: f64,
    moisture: f64,
    optimal_ph: f64,
    ph: f64,
    /// Date of the last watering (or of planting).
    watertime: NaiveDate,
    health: f64,
}

impl Plant {
    /// New plant sitting exactly at its optimal moisture and pH.
    pub fn new(
        name: impl Into<String>,
        schedule_days: i64,
        optimal_moisture: f64,
        optimal_ph: f64,
        planted_on: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            schedule_days,
            optimal_moisture,
            moisture: optimal_moisture,
            optimal_ph,
            ph: optimal_ph,
            watertime: planted_on,
            health: DEFAULT_HEALTH,
        }
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule_days(&self) -> i64 {
        self.schedule_days
    }

    /// `None` when the day count is out of range for a `TimeDelta`.
    pub fn schedule(&self) -> Option<TimeDelta> {
        TimeDelta::try_days(self.schedule_days)
    }

    pub fn optimal_moisture(&self) -> f64 {
        self.optimal_moisture
    }

    pub fn moisture(&self) -> f64 {
        self.moisture
    }

    pub fn optimal_ph(&self) -> f64 {
        self.optimal_ph
    }

    pub fn ph(&self) -> f64 {
        self.ph
    }

    pub fn watertime(&self) -> NaiveDate {
        self.watertime
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.status() == PlantStatus::Alive
    }

    pub fn status(&self) -> PlantStatus {
        PlantStatus::from_health(self.health)
    }

    /// Pour `amount` into the pot on `today`. No upper bound.
    pub fn add_water(&mut self, amount: f64, today: NaiveDate) {
        let old = self.moisture;
        self.watertime = today;
        self.moisture += amount;
        log::debug!(
            "{}: added {} water, moisture {} -> {}",
            self.name,
            amount,
            old,
            self.moisture
        );
    }

    /// Raise pH by `amount * 0.1`.
    pub fn add_lime(&mut self, amount: f64) {
        self.ph = round_tenth(self.ph + amount * AMENDMENT_PH_PER_UNIT);
    }

    /// Lower pH by `amount * 0.1`.
    pub fn add_aluminumsulfate(&mut self, amount: f64) {
        self.ph = round_tenth(self.ph - amount * AMENDMENT_PH_PER_UNIT);
    }

    /// When the plant is next due for water. Not enforced by [`Plant::tick`].
    ///
    /// `None` if the date falls outside the calendar's range.
    pub fn next_water_time(&self) -> Option<NaiveDate> {
        self.watertime.checked_add_signed(self.schedule()?)
    }

    /// No floor: health can go negative.
    pub fn take_damage(&mut self, dmg: f64) {
        self.health -= dmg;
    }

    /// Whether moisture is outside the healthy band. Band edges count as healthy.
    pub fn moisture_out_of_band(&self) -> bool {
        self.optimal_moisture * MOISTURE_BAND_LOW > self.moisture
            || self.moisture > self.optimal_moisture * MOISTURE_BAND_HIGH
    }

    /// Advance one simulation step.
    ///
    /// 1. Moisture drops by a draw from [`MOISTURE_LOSS`].
    /// 2. Out of band, the plant takes damage equal to the raw deviation.
    /// 3. pH takes a multiplicative step drawn from [`PH_DRIFT`], rounded to
    ///    one decimal.
    ///
    /// The moisture draw always happens before the pH draw.
    pub fn tick(&mut self, rng: &mut impl UniformSource) {
        let was_alive = self.is_alive();

        self.moisture -= rng.uniform(MOISTURE_LOSS.0, MOISTURE_LOSS.1);
        if self.moisture_out_of_band() {
            self.take_damage((self.optimal_moisture - self.moisture).abs());
        }

        let drift = rng.uniform(PH_DRIFT.0, PH_DRIFT.1);
        self.ph = round_tenth(self.ph + self.ph * drift);

        if was_alive && !self.is_alive() {
            log::info!("{} died (health {:.2})", self.name, self.health);
        }
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.schedule_days == 1 { "day" } else { "days" };
        writeln!(f, "Plant:\t\t\t\t{}", self.name)?;
        writeln!(f, "Schedule:\t\t\t{} {}", self.schedule_days, unit)?;
        writeln!(f, "Optimal moisture:\t{}", self.optimal_moisture)?;
        writeln!(f, "Current moisture:\t{}", self.moisture)?;
        writeln!(f, "Optimal PH:\t\t\t{}", self.optimal_ph)?;
        writeln!(f, "Current PH:\t\t\t{}", self.ph)?;
        writeln!(f, "Current health:\t\t{}", self.health)?;
        write!(f, "Alive:\t\t\t\t{}", self.is_alive())
    }
}

/// Round to one decimal place. Rounds the exact binary value, ties to even,
/// so `6.55` (stored just below) goes to `6.5`.
pub fn round_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

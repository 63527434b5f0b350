//! Scenario configuration: which plants to pot, how to water them, and the
//! seed that makes a run reproducible.
//!
//! Scenarios are plain serde structs so they can be written as JSON:
//!
//! ```json
//! {
//!   "seed": 897354,
//!   "plants": [
//!     { "name": "cactus", "schedule_days": 14, "optimal_moisture": 20,
//!       "optimal_ph": 5.8, "water_per_tick": 1 }
//!   ]
//! }
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::plant::{Plant, DEFAULT_HEALTH};
use crate::random::DEFAULT_SEED;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Stop after this many ticks even if every plant is still alive.
    #[serde(default)]
    pub max_ticks: Option<u64>,
    pub plants: Vec<PlantSpec>,
}

/// Starting stats and care routine for one plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSpec {
    pub name: String,
    pub schedule_days: i64,
    pub optimal_moisture: f64,
    pub optimal_ph: f64,
    #[serde(default = "default_health")]
    pub health: f64,
    /// Water poured in after every tick. Zero means never watered.
    #[serde(default)]
    pub water_per_tick: f64,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_health() -> f64 {
    DEFAULT_HEALTH
}

impl PlantSpec {
    pub fn new(
        name: impl Into<String>,
        schedule_days: i64,
        optimal_moisture: f64,
        optimal_ph: f64,
    ) -> Self {
        Self {
            name: name.into(),
            schedule_days,
            optimal_moisture,
            optimal_ph,
            health: DEFAULT_HEALTH,
            water_per_tick: 0.0,
        }
    }

    fn is_finite(&self) -> bool {
        [
            self.optimal_moisture,
            self.optimal_ph,
            self.health,
            self.water_per_tick,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    pub fn watered(mut self, per_tick: f64) -> Self {
        self.water_per_tick = per_tick;
        self
    }

    pub fn to_plant(&self, planted_on: NaiveDate) -> Plant {
        Plant::new(
            self.name.clone(),
            self.schedule_days,
            self.optimal_moisture,
            self.optimal_ph,
            planted_on,
        )
        .with_health(self.health)
    }
}

impl Default for Scenario {
    /// A single cactus watered with one unit after every tick.
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_ticks: None,
            plants: vec![PlantSpec::new("cactus", 14, 20.0, 5.8).watered(1.0)],
        }
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject scenarios with no plants, a zero tick limit, or a plant stat
    /// that is NaN or infinite (such a plant never leaves its band).
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.plants.is_empty() {
            return Err(ScenarioError::NoPlants);
        }
        if self.max_ticks == Some(0) {
            return Err(ScenarioError::ZeroTickLimit);
        }
        if let Some(spec) = self.plants.iter().find(|p| !p.is_finite()) {
            return Err(ScenarioError::NonFiniteStat(spec.name.clone()));
        }
        Ok(())
    }
}

/// Errors that can occur while loading a scenario
#[derive(Debug)]
pub enum ScenarioError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NoPlants,
    ZeroTickLimit,
    /// Named plant has a NaN or infinite stat.
    NonFiniteStat(String),
}

impl From<std::io::Error> for ScenarioError {
    fn from(e: std::io::Error) -> Self {
        ScenarioError::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        ScenarioError::Json(e)
    }
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "IO error: {}", e),
            ScenarioError::Json(e) => write!(f, "Scenario parse error: {}", e),
            ScenarioError::NoPlants => write!(f, "Scenario has no plants"),
            ScenarioError::ZeroTickLimit => write!(f, "max_ticks must be at least 1"),
            ScenarioError::NonFiniteStat(name) => {
                write!(f, "Plant '{}' has a non-finite stat", name)
            }
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Io(e) => Some(e),
            ScenarioError::Json(e) => Some(e),
            _ => None,
        }
    }
}

//! Simulation driver - owns the planter, the generator, and the date source,
//! and steps the plants until one dies.

use rand::rngs::StdRng;

use crate::calendar::Calendar;
use crate::plant::Plant;
use crate::planter::{PlantId, Planter};
use crate::random::seeded;
use crate::scenario::Scenario;

/// Outcome of a finished run. Names are in planting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub dead: Vec<String>,
    pub living: Vec<String>,
}

pub struct Simulation<C: Calendar> {
    planter: Planter,
    /// Per-plant water poured in after each tick.
    watering: Vec<(PlantId, f64)>,
    rng: StdRng,
    calendar: C,
    seed: u64,
    ticks: u64,
    max_ticks: Option<u64>,
}

impl<C: Calendar> Simulation<C> {
    /// Pot every plant in the scenario, dated by `calendar`.
    pub fn new(scenario: &Scenario, calendar: C) -> Self {
        let today = calendar.today();
        let mut planter = Planter::new();
        let watering = scenario
            .plants
            .iter()
            .map(|spec| (planter.add_plant(spec.to_plant(today)), spec.water_per_tick))
            .collect();

        Self {
            planter,
            watering,
            rng: seeded(scenario.seed),
            calendar,
            seed: scenario.seed,
            ticks: 0,
            max_ticks: scenario.max_ticks,
        }
    }

    pub fn planter(&self) -> &Planter {
        &self.planter
    }

    pub fn planter_mut(&mut self) -> &mut Planter {
        &mut self.planter
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// True once any plant is dead or the tick limit is reached.
    pub fn is_finished(&self) -> bool {
        self.planter.has_dead_plants() || self.max_ticks.is_some_and(|max| self.ticks >= max)
    }

    /// Tick every plant, then water the ones with a watering routine.
    pub fn step(&mut self) {
        self.planter.tick(&mut self.rng);

        let today = self.calendar.today();
        for &(id, amount) in &self.watering {
            if amount == 0.0 {
                continue;
            }
            if let Some(plant) = self.planter.plant_mut(id) {
                plant.add_water(amount, today);
            }
        }
        self.ticks += 1;
    }

    pub fn run(&mut self) -> RunSummary {
        self.run_with(|_| {})
    }

    /// Like [`Simulation::run`], calling `observer` before every step.
    pub fn run_with(&mut self, mut observer: impl FnMut(&Self)) -> RunSummary {
        log::info!(
            "Starting run: {} plants, seed {}",
            self.planter.plant_count(),
            self.seed
        );

        while !self.is_finished() {
            observer(&*self);
            self.step();
        }

        let summary = self.summary();
        log::info!(
            "Run finished after {} ticks: {} dead, {} living",
            summary.ticks,
            summary.dead.len(),
            summary.living.len()
        );
        summary
    }

    pub fn summary(&self) -> RunSummary {
        let names = |plants: Vec<&Plant>| -> Vec<String> {
            plants.iter().map(|p| p.name().to_string()).collect()
        };
        RunSummary {
            ticks: self.ticks,
            dead: names(self.planter.dead_plants()),
            living: names(self.planter.live_plants()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::FixedCalendar;
    use crate::scenario::PlantSpec;
    use chrono::NaiveDate;

    fn calendar() -> FixedCalendar {
        FixedCalendar(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
    }

    #[test]
    fn test_new_pots_every_plant() {
        let mut scenario = Scenario::default();
        scenario.plants.push(PlantSpec::new("fern", 3, 60.0, 6.5));
        let sim = Simulation::new(&scenario, calendar());
        assert_eq!(sim.planter().plant_count(), 2);
        assert_eq!(sim.ticks(), 0);
        assert_eq!(sim.seed(), scenario.seed);
        assert!(!sim.is_finished());
        for p in sim.planter().plants() {
            assert_eq!(p.watertime(), calendar().0);
        }
    }

    #[test]
    fn test_step_waters_after_tick() {
        let scenario = Scenario {
            seed: 3,
            max_ticks: None,
            plants: vec![
                PlantSpec::new("wet", 1, 50.0, 6.0).watered(1.5),
                PlantSpec::new("dry", 1, 50.0, 6.0),
            ],
        };
        let mut sim = Simulation::new(&scenario, calendar());
        sim.step();
        assert_eq!(sim.ticks(), 1);

        let plants = sim.planter().plants();
        // wet lost 1..2 and got 1.5 back, dry only lost
        assert!(plants[0].moisture() >= 49.5 && plants[0].moisture() <= 50.5);
        assert!(plants[1].moisture() >= 48.0 && plants[1].moisture() <= 49.0);
    }

    #[test]
    fn test_tick_limit_stops_run() {
        let scenario = Scenario {
            seed: 11,
            max_ticks: Some(3),
            plants: vec![PlantSpec::new("steady", 7, 100.0, 6.0).watered(1.5)],
        };
        let mut sim = Simulation::new(&scenario, calendar());
        let summary = sim.run();
        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.living, vec!["steady".to_string()]);
        assert!(summary.dead.is_empty());
    }

    #[test]
    fn test_run_ends_on_first_death() {
        let mut sim = Simulation::new(&Scenario::default(), calendar());
        let summary = sim.run();
        assert!(summary.ticks > 0);
        assert_eq!(summary.dead, vec!["cactus".to_string()]);
        assert!(summary.living.is_empty());
        assert!(sim.is_finished());
    }

    #[test]
    fn test_observer_sees_every_step() {
        let scenario = Scenario {
            max_ticks: Some(5),
            ..Scenario::default()
        };
        let mut sim = Simulation::new(&scenario, calendar());
        let mut seen = Vec::new();
        sim.run_with(|s| seen.push(s.ticks()));
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_late_dead_plant_ends_run() {
        let mut sim = Simulation::new(&Scenario::default(), calendar());
        sim.step();
        let husk = Plant::new("husk", 7, 30.0, 6.0, calendar().0).with_health(0.0);
        sim.planter_mut().add_plant(husk);
        assert!(sim.is_finished());

        let summary = sim.run();
        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.dead, vec!["husk".to_string()]);
        assert_eq!(summary.living, vec!["cactus".to_string()]);
    }

    #[test]
    fn test_already_dead_plant_finishes_immediately() {
        let mut spec = PlantSpec::new("husk", 7, 30.0, 6.0);
        spec.health = 0.0;
        let scenario = Scenario {
            seed: 5,
            max_ticks: None,
            plants: vec![spec],
        };
        let mut sim = Simulation::new(&scenario, calendar());
        let summary = sim.run();
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.dead, vec!["husk".to_string()]);
    }
}

//! An ordered collection of plants ticked as a batch.

use crate::plant::Plant;
use crate::random::UniformSource;

/// Handle to a plant inside a [`Planter`]. Stays valid for the planter's life
/// since plants are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlantId(usize);

impl PlantId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Planter {
    plants: Vec<Plant>,
}

impl Planter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plant, returning the handle to reach it later.
    pub fn add_plant(&mut self, plant: Plant) -> PlantId {
        self.plants.push(plant);
        PlantId(self.plants.len() - 1)
    }

    pub fn plant(&self, id: PlantId) -> Option<&Plant> {
        self.plants.get(id.0)
    }

    pub fn plant_mut(&mut self, id: PlantId) -> Option<&mut Plant> {
        self.plants.get_mut(id.0)
    }

    /// All plants in insertion order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn plant_count(&self) -> usize {
        self.plants.len()
    }

    pub fn has_dead_plants(&self) -> bool {
        self.plants.iter().any(|p| !p.is_alive())
    }

    pub fn dead_plants(&self) -> Vec<&Plant> {
        self.plants.iter().filter(|p| !p.is_alive()).collect()
    }

    pub fn live_plants(&self) -> Vec<&Plant> {
        self.plants.iter().filter(|p| p.is_alive()).collect()
    }

    /// Tick every plant in order. Dead plants are ticked too.
    pub fn tick(&mut self, rng: &mut impl UniformSource) {
        log::trace!("ticking {} plants", self.plants.len());
        for plant in &mut self.plants {
            plant.tick(rng);
        }
    }
}

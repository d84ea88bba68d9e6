//! In-memory registries backing the paddock.
//!
//! Both stores are plain vectors scanned linearly, which keeps insertion order
//! for free. The paddock holds a handful of entries, so no index is kept.

use paddock_common::models::{Car, CarId, Pilot, PilotId};
use paddock_common::registry::{CarRepository, PilotRepository};

#[derive(Debug, Default, Clone)]
pub struct InMemoryPilots {
    pilots: Vec<Pilot>,
}

impl InMemoryPilots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PilotRepository for InMemoryPilots {
    fn find(&self, id: PilotId) -> Option<&Pilot> {
        self.pilots.iter().find(|pilot| pilot.id() == id)
    }

    fn find_mut(&mut self, id: PilotId) -> Option<&mut Pilot> {
        self.pilots.iter_mut().find(|pilot| pilot.id() == id)
    }

    fn insert(&mut self, pilot: Pilot) {
        self.pilots.push(pilot);
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Pilot> + '_> {
        Box::new(self.pilots.iter())
    }

    fn len(&self) -> usize {
        self.pilots.len()
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryCars {
    cars: Vec<Car>,
}

impl InMemoryCars {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarRepository for InMemoryCars {
    fn find(&self, id: CarId) -> Option<&Car> {
        self.cars.iter().find(|car| car.id() == id)
    }

    fn find_mut(&mut self, id: CarId) -> Option<&mut Car> {
        self.cars.iter_mut().find(|car| car.id() == id)
    }

    fn insert(&mut self, car: Car) {
        self.cars.push(car);
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Car> + '_> {
        Box::new(self.cars.iter())
    }

    fn len(&self) -> usize {
        self.cars.len()
    }
}

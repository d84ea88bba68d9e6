//! # Registry Ports
//!
//! Contracts the application needs from the pilot and car registries.
//!
//! ## Rules
//! 1. Iteration yields records in insertion order.
//! 2. `insert` appends; uniqueness is checked by the caller before inserting.
//! 3. Implementations live in `paddock-core`.

use crate::models::{Car, CarId, Pilot, PilotId};

/// Storage for [`Pilot`] records.
pub trait PilotRepository: Send {
    fn find(&self, id: PilotId) -> Option<&Pilot>;

    fn find_mut(&mut self, id: PilotId) -> Option<&mut Pilot>;

    fn insert(&mut self, pilot: Pilot);

    /// All pilots, in the order they were inserted.
    fn iter(&self) -> Box<dyn Iterator<Item = &Pilot> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: PilotId) -> bool {
        self.find(id).is_some()
    }
}

/// Storage for [`Car`] records.
pub trait CarRepository: Send {
    fn find(&self, id: CarId) -> Option<&Car>;

    fn find_mut(&mut self, id: CarId) -> Option<&mut Car>;

    fn insert(&mut self, car: Car);

    /// All cars, in the order they were inserted.
    fn iter(&self) -> Box<dyn Iterator<Item = &Car> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: CarId) -> bool {
        self.find(id).is_some()
    }
}

use rust_decimal::Decimal;

use super::{CarId, PilotId};

/// A car in the paddock, optionally owned by one pilot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    id: CarId,
    owner: Option<PilotId>,
    color: String,
    brand: String,
    year: i32,
    power: i32,
    price: Decimal,
}

impl Car {
    pub fn new(
        id: CarId,
        color: impl Into<String>,
        brand: impl Into<String>,
        year: i32,
        power: i32,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            owner: None,
            color: color.into(),
            brand: brand.into(),
            year,
            power,
            price,
        }
    }

    /// Returns the car already assigned to `owner`.
    pub fn owned_by(mut self, owner: PilotId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn owner(&self) -> Option<PilotId> {
        self.owner
    }

    pub fn is_owned_by(&self, pilot: PilotId) -> bool {
        self.owner == Some(pilot)
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Clears the owner and returns who held the car.
    pub fn release(&mut self) -> Option<PilotId> {
        self.owner.take()
    }
}

//! # Racing Application Service
//!
//! Every paddock operation enters here.
//!
//! The service owns the pilot and car registries and, for each request:
//! 1. resolves the referenced entities,
//! 2. checks the business rules,
//! 3. mutates both registries only once every check has passed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use paddock_common::models::{Car, CarId, Pilot, PilotId};
use paddock_common::registry::{CarRepository, PilotRepository};
use paddock_common::{RacingError, RacingResult};

use crate::registry::{InMemoryCars, InMemoryPilots};

pub struct RacingApplication {
    pilots: Box<dyn PilotRepository>,
    cars: Box<dyn CarRepository>,
}

impl RacingApplication {
    pub fn new(pilots: Box<dyn PilotRepository>, cars: Box<dyn CarRepository>) -> Self {
        Self { pilots, cars }
    }

    /// Application backed by empty [`InMemoryPilots`] and [`InMemoryCars`].
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemoryPilots::new()), Box::new(InMemoryCars::new()))
    }

    pub fn pilot_count(&self) -> usize {
        self.pilots.len()
    }

    pub fn car_count(&self) -> usize {
        self.cars.len()
    }

    pub fn register_pilot(
        &mut self,
        id: PilotId,
        name: &str,
        birth_date: NaiveDate,
        career_start: NaiveDate,
        funds: Decimal,
    ) -> RacingResult<()> {
        if self.pilots.contains(id) {
            warn!(pilot = %id, "pilot registration rejected: identifier in use");
            return Err(RacingError::pilot_in_use(id));
        }
        if funds < Decimal::ZERO {
            warn!(pilot = %id, %funds, "pilot registration rejected: negative funds");
            return Err(RacingError::NegativeAmount(funds));
        }

        self.pilots
            .insert(Pilot::new(id, name, birth_date, career_start, funds));
        info!(pilot = %id, name, %birth_date, %career_start, %funds, "pilot registered");
        Ok(())
    }

    /// Creates car `car_id` already owned by `pilot_id` and debits its price.
    ///
    /// Besides the car id itself, the pilot id must not match an existing car id.
    #[allow(clippy::too_many_arguments)]
    pub fn purchase_car(
        &mut self,
        car_id: CarId,
        pilot_id: PilotId,
        color: &str,
        brand: &str,
        year: i32,
        power: i32,
        price: Decimal,
    ) -> RacingResult<()> {
        self.check_purchase(car_id, pilot_id, price)
            .inspect_err(|e| warn!(car = %car_id, pilot = %pilot_id, "purchase rejected: {e}"))?;

        let Some(pilot) = self.pilots.find_mut(pilot_id) else {
            return Err(RacingError::pilot_not_found(pilot_id));
        };
        let remaining = pilot
            .debit(price)
            .ok_or(RacingError::BalanceOverflow(pilot_id))?;

        self.cars
            .insert(Car::new(car_id, color, brand, year, power, price).owned_by(pilot_id));
        info!(car = %car_id, pilot = %pilot_id, brand, year, %price, %remaining, "car purchased");
        Ok(())
    }

    fn check_purchase(&self, car_id: CarId, pilot_id: PilotId, price: Decimal) -> RacingResult<()> {
        if self.cars.contains(car_id) {
            return Err(RacingError::car_in_use(car_id));
        }
        if self.cars.contains(CarId::new(pilot_id.get())) {
            return Err(RacingError::car_in_use(pilot_id.get()));
        }
        if price < Decimal::ZERO {
            return Err(RacingError::NegativeAmount(price));
        }

        let pilot = self
            .pilots
            .find(pilot_id)
            .ok_or(RacingError::pilot_not_found(pilot_id))?;

        if !pilot.can_afford(price) {
            return Err(RacingError::InsufficientFunds {
                pilot: pilot_id,
                funds: pilot.funds(),
                price,
            });
        }
        Ok(())
    }

    /// Returns the car's price to its owner and leaves the car unowned.
    pub fn sell_car(&mut self, car_id: CarId) -> RacingResult<()> {
        let (owner, price) = self
            .sale_terms(car_id)
            .inspect_err(|e| warn!(car = %car_id, "sale rejected: {e}"))?;

        let pilot = self
            .pilots
            .find_mut(owner)
            .ok_or(RacingError::pilot_not_found(owner))?;
        let car = self
            .cars
            .find_mut(car_id)
            .ok_or(RacingError::car_not_found(car_id))?;

        let funds = pilot
            .credit(price)
            .ok_or(RacingError::BalanceOverflow(owner))?;
        car.release();
        info!(car = %car_id, pilot = %owner, %price, %funds, "car sold");
        Ok(())
    }

    fn sale_terms(&self, car_id: CarId) -> RacingResult<(PilotId, Decimal)> {
        let car = self
            .cars
            .find(car_id)
            .ok_or(RacingError::car_not_found(car_id))?;
        let owner = car.owner().ok_or(RacingError::CarNotOwned(car_id))?;
        let pilot = self
            .pilots
            .find(owner)
            .ok_or(RacingError::pilot_not_found(owner))?;

        if pilot.funds().checked_add(car.price()).is_none() {
            return Err(RacingError::BalanceOverflow(owner));
        }
        Ok((owner, car.price()))
    }

    /// Id of the priciest car; the lowest id wins a tie.
    pub fn most_expensive_car(&self) -> RacingResult<CarId> {
        first_max(self.cars_by_id(), |a, b| b.price() > a.price())
            .map(Car::id)
            .ok_or(RacingError::CarNotFound(None))
    }

    /// Id of the most powerful car; the lowest id wins a tie.
    pub fn most_powerful_car(&self) -> RacingResult<CarId> {
        first_max(self.cars_by_id(), |a, b| b.power() > a.power())
            .map(Car::id)
            .ok_or(RacingError::CarNotFound(None))
    }

    pub fn cars_owned_by(&self, pilot_id: PilotId) -> RacingResult<Vec<CarId>> {
        self.require_pilot(pilot_id)?;

        let owned = self
            .cars
            .iter()
            .filter(|car| car.is_owned_by(pilot_id))
            .map(Car::id)
            .collect();
        Ok(owned)
    }

    /// Cars of `brand`, in registration order. An unknown brand yields no cars.
    pub fn cars_by_brand(&self, brand: &str) -> Vec<CarId> {
        let ids: Vec<CarId> = self
            .cars
            .iter()
            .filter(|car| car.brand() == brand)
            .map(Car::id)
            .collect();
        debug!(brand, matches = ids.len(), "cars by brand");
        ids
    }

    pub fn color_of(&self, car_id: CarId) -> RacingResult<String> {
        self.cars
            .find(car_id)
            .map(|car| car.color().to_string())
            .ok_or(RacingError::car_not_found(car_id))
    }

    /// Brand of every car, duplicates included.
    pub fn all_brands(&self) -> Vec<String> {
        self.cars.iter().map(|car| car.brand().to_string()).collect()
    }

    pub fn pilot_name(&self, pilot_id: PilotId) -> RacingResult<String> {
        Ok(self.require_pilot(pilot_id)?.name().to_string())
    }

    /// Pilot with the latest career start date; the lowest id wins a tie.
    ///
    /// Despite the name this picks the most recent debut.
    pub fn most_experienced_pilot(&self) -> RacingResult<PilotId> {
        first_max(self.pilots_by_id(), |a, b| b.career_start() > a.career_start())
            .map(Pilot::id)
            .ok_or(RacingError::PilotNotFound(None))
    }

    /// Pilot with the earliest career start date; the lowest id wins a tie.
    pub fn least_experienced_pilot(&self) -> RacingResult<PilotId> {
        first_max(self.pilots_by_id(), |a, b| b.career_start() < a.career_start())
            .map(Pilot::id)
            .ok_or(RacingError::PilotNotFound(None))
    }

    /// Every pilot id, ascending.
    pub fn all_pilots(&self) -> Vec<PilotId> {
        self.pilots_by_id().into_iter().map(Pilot::id).collect()
    }

    pub fn pilot_balance(&self, pilot_id: PilotId) -> RacingResult<Decimal> {
        Ok(self.require_pilot(pilot_id)?.funds())
    }

    /// Sum of the prices of the cars `pilot_id` currently owns.
    pub fn pilot_net_worth(&self, pilot_id: PilotId) -> RacingResult<Decimal> {
        self.require_pilot(pilot_id)?;

        let worth = self
            .cars
            .iter()
            .filter(|car| car.is_owned_by(pilot_id))
            .map(Car::price)
            .sum();
        Ok(worth)
    }

    pub fn change_car_color(&mut self, car_id: CarId, color: &str) -> RacingResult<()> {
        debug!(car = %car_id, color, "color change requested");
        Err(RacingError::NotSupported("changeCarColor"))
    }

    fn require_pilot(&self, pilot_id: PilotId) -> RacingResult<&Pilot> {
        self.pilots
            .find(pilot_id)
            .ok_or(RacingError::pilot_not_found(pilot_id))
    }

    fn cars_by_id(&self) -> Vec<&Car> {
        let mut cars: Vec<&Car> = self.cars.iter().collect();
        cars.sort_by_key(|car| car.id());
        cars
    }

    fn pilots_by_id(&self) -> Vec<&Pilot> {
        let mut pilots: Vec<&Pilot> = self.pilots.iter().collect();
        pilots.sort_by_key(|pilot| pilot.id());
        pilots
    }
}

impl Default for RacingApplication {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// First element no later element beats. `beats(best, candidate)` must be strict,
/// so ties keep the earlier element.
fn first_max<'a, T>(items: Vec<&'a T>, beats: impl Fn(&T, &T) -> bool) -> Option<&'a T> {
    items
        .into_iter()
        .reduce(|best, candidate| if beats(best, candidate) { candidate } else { best })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

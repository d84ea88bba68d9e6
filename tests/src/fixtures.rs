use chrono::NaiveDate;
use paddock_common::models::{CarId, PilotId};
use paddock_common::RacingResult;
use paddock_core::RacingApplication;
use rust_decimal::Decimal;

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

pub fn pilot(app: &mut RacingApplication, id: i64, name: &str, career_start: &str, funds: Decimal) {
    app.register_pilot(PilotId::new(id), name, date("1960-03-21"), date(career_start), funds)
        .unwrap();
}

pub fn buy(
    app: &mut RacingApplication,
    car: i64,
    pilot: i64,
    brand: &str,
    power: i32,
    price: Decimal,
) -> RacingResult<()> {
    app.purchase_car(CarId::new(car), PilotId::new(pilot), "red", brand, 1990, power, price)
}

pub fn car_ids(ids: &[i64]) -> Vec<CarId> {
    ids.iter().copied().map(CarId::new).collect()
}

use paddock_common::models::{CarId, PilotId};
use paddock_common::RacingError;
use paddock_core::RacingApplication;
use rust_decimal_macros::dec;

use crate::fixtures::{buy, car_ids, pilot};

fn grid() -> RacingApplication {
    let mut app = RacingApplication::in_memory();
    pilot(&mut app, 3, "Alain Prost", "1980-01-13", dec!(5000));
    pilot(&mut app, 1, "Ayrton Senna", "1984-03-25", dec!(5000));
    pilot(&mut app, 2, "Nigel Mansell", "1980-08-17", dec!(5000));

    buy(&mut app, 30, 3, "McLaren", 650, dec!(900.00)).unwrap();
    buy(&mut app, 12, 1, "Lotus", 800, dec!(700.00)).unwrap();
    buy(&mut app, 21, 2, "Williams", 800, dec!(900.0)).unwrap();
    buy(&mut app, 13, 1, "McLaren", 650, dec!(400.00)).unwrap();
    app
}

#[test]
fn empty_paddock_queries() {
    let app = RacingApplication::in_memory();

    assert_eq!(app.most_expensive_car(), Err(RacingError::CarNotFound(None)));
    assert_eq!(app.most_powerful_car(), Err(RacingError::CarNotFound(None)));
    assert_eq!(app.most_experienced_pilot(), Err(RacingError::PilotNotFound(None)));
    assert_eq!(app.least_experienced_pilot(), Err(RacingError::PilotNotFound(None)));
    assert!(app.all_pilots().is_empty());
    assert!(app.all_brands().is_empty());
    assert!(app.cars_by_brand("Ferrari").is_empty());
}

#[test]
fn ties_resolve_to_lowest_id() {
    let app = grid();

    // 21 and 30 share the top price, 12 and 21 the top power
    assert_eq!(app.most_expensive_car(), Ok(CarId::new(21)));
    assert_eq!(app.most_powerful_car(), Ok(CarId::new(12)));
}

#[test]
fn experience_is_ranked_by_career_start() {
    let app = grid();

    assert_eq!(app.most_experienced_pilot(), Ok(PilotId::new(1)));
    assert_eq!(app.least_experienced_pilot(), Ok(PilotId::new(3)));
}

#[test]
fn listings_keep_their_order() {
    let app = grid();

    assert_eq!(
        app.all_pilots(),
        vec![PilotId::new(1), PilotId::new(2), PilotId::new(3)]
    );
    assert_eq!(app.all_brands(), vec!["McLaren", "Lotus", "Williams", "McLaren"]);
    assert_eq!(app.cars_by_brand("McLaren"), car_ids(&[30, 13]));
    assert_eq!(app.cars_owned_by(PilotId::new(1)), Ok(car_ids(&[12, 13])));
    assert!(app.cars_by_brand("mclaren").is_empty());
}

#[test]
fn lookups_on_unknown_entities_fail() {
    let app = grid();
    let ghost = PilotId::new(404);

    assert_eq!(app.pilot_name(ghost), Err(RacingError::pilot_not_found(ghost)));
    assert_eq!(app.pilot_balance(ghost), Err(RacingError::pilot_not_found(ghost)));
    assert_eq!(app.pilot_net_worth(ghost), Err(RacingError::pilot_not_found(ghost)));
    assert_eq!(app.cars_owned_by(ghost), Err(RacingError::pilot_not_found(ghost)));
    assert_eq!(
        app.color_of(CarId::new(404)),
        Err(RacingError::car_not_found(CarId::new(404)))
    );
}

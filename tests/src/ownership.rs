use paddock_common::models::{CarId, PilotId};
use paddock_common::RacingError;
use paddock_core::RacingApplication;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{buy, car_ids, pilot};

/// Pilot 1 with 1000.00 buys car 10 for 600.00 and sells it back.
#[test]
fn buy_then_sell_restores_balance() {
    let mut app = RacingApplication::in_memory();
    let senna = PilotId::new(1);
    pilot(&mut app, 1, "Ayrton Senna", "1984-03-25", dec!(1000.00));

    buy(&mut app, 10, 1, "McLaren", 650, dec!(600.00)).unwrap();
    assert_eq!(app.pilot_balance(senna), Ok(dec!(400.00)));
    assert_eq!(app.cars_owned_by(senna), Ok(car_ids(&[10])));
    assert_eq!(app.pilot_net_worth(senna), Ok(dec!(600.00)));

    app.sell_car(CarId::new(10)).unwrap();
    assert_eq!(app.pilot_balance(senna), Ok(dec!(1000.00)));
    assert_eq!(app.cars_owned_by(senna), Ok(vec![]));
    assert_eq!(app.pilot_net_worth(senna), Ok(Decimal::ZERO));

    // the car stays registered, just without an owner
    assert_eq!(app.car_count(), 1);
    assert_eq!(app.all_brands(), vec!["McLaren"]);
}

#[test]
fn second_sale_of_the_same_car_fails() {
    let mut app = RacingApplication::in_memory();
    pilot(&mut app, 1, "Nelson Piquet", "1978-07-30", dec!(500));
    buy(&mut app, 10, 1, "Brabham", 700, dec!(200)).unwrap();

    app.sell_car(CarId::new(10)).unwrap();
    let second = app.sell_car(CarId::new(10));

    assert_eq!(second, Err(RacingError::CarNotOwned(CarId::new(10))));
    assert_eq!(app.pilot_balance(PilotId::new(1)), Ok(dec!(500)));
}

#[test]
fn purchase_at_exact_balance_succeeds_one_cent_short_fails() {
    let mut app = RacingApplication::in_memory();
    pilot(&mut app, 1, "Exact", "1980-01-01", dec!(250.50));
    pilot(&mut app, 2, "Short", "1980-01-01", dec!(250.49));

    assert_eq!(buy(&mut app, 10, 1, "Lotus", 600, dec!(250.50)), Ok(()));
    assert_eq!(app.pilot_balance(PilotId::new(1)), Ok(Decimal::ZERO));

    let short = buy(&mut app, 11, 2, "Lotus", 600, dec!(250.50));
    assert_eq!(
        short,
        Err(RacingError::InsufficientFunds {
            pilot: PilotId::new(2),
            funds: dec!(250.49),
            price: dec!(250.50),
        })
    );
    assert_eq!(app.pilot_balance(PilotId::new(2)), Ok(dec!(250.49)));
    assert_eq!(app.color_of(CarId::new(11)), Err(RacingError::car_not_found(CarId::new(11))));
}

#[test]
fn duplicate_pilot_registration_is_rejected() {
    let mut app = RacingApplication::in_memory();
    pilot(&mut app, 7, "Original", "1990-01-01", dec!(10));

    let duplicate = app.register_pilot(
        PilotId::new(7),
        "Impostor",
        crate::fixtures::date("1991-01-01"),
        crate::fixtures::date("2010-01-01"),
        dec!(99999),
    );

    assert_eq!(duplicate, Err(RacingError::pilot_in_use(PilotId::new(7))));
    assert_eq!(app.pilot_count(), 1);
    assert_eq!(app.pilot_name(PilotId::new(7)), Ok("Original".to_string()));
}

#[test]
fn pilot_and_car_ids_collide_on_purchase() {
    let mut app = RacingApplication::in_memory();
    pilot(&mut app, 1, "First", "1980-01-01", dec!(1000));
    pilot(&mut app, 10, "Tenth", "1980-01-01", dec!(1000));
    buy(&mut app, 10, 1, "Ferrari", 700, dec!(100)).unwrap();

    // pilot 10 shares its number with car 10
    assert_eq!(
        buy(&mut app, 20, 10, "Ferrari", 700, dec!(100)),
        Err(RacingError::car_in_use(10))
    );
    assert_eq!(app.pilot_balance(PilotId::new(10)), Ok(dec!(1000)));
}

#[test]
fn net_worth_adds_prices_exactly() {
    let mut app = RacingApplication::in_memory();
    pilot(&mut app, 1, "Collector", "1980-01-01", dec!(1000.00));
    pilot(&mut app, 2, "Other", "1980-01-01", dec!(1000.00));
    buy(&mut app, 10, 1, "Ferrari", 700, dec!(100.00)).unwrap();
    buy(&mut app, 11, 1, "Ferrari", 700, dec!(250.50)).unwrap();
    buy(&mut app, 12, 2, "Ferrari", 700, dec!(0.10)).unwrap();

    assert_eq!(app.pilot_net_worth(PilotId::new(1)), Ok(dec!(350.50)));
    assert_eq!(app.pilot_balance(PilotId::new(1)), Ok(dec!(649.50)));
    assert_eq!(app.pilot_net_worth(PilotId::new(2)), Ok(dec!(0.10)));
}

#[test]
fn color_change_is_never_supported() {
    let mut app = RacingApplication::in_memory();
    pilot(&mut app, 1, "Painter", "1980-01-01", dec!(1000));
    buy(&mut app, 10, 1, "Ferrari", 700, dec!(100)).unwrap();

    for (car, color) in [(10, "blue"), (99, "green"), (-1, "")] {
        assert_eq!(
            app.change_car_color(CarId::new(car), color),
            Err(RacingError::NotSupported("changeCarColor"))
        );
    }
    assert_eq!(app.color_of(CarId::new(10)), Ok("red".to_string()));
}

#[test]
fn negative_amounts_come_back_as_errors() {
    use paddock_core::dispatch::Operation;

    let mut app = RacingApplication::in_memory();
    let run = |app: &mut RacingApplication, line: &str| line.parse::<Operation>().unwrap().execute(app);

    run(&mut app, "registerPilot 1 A 1960-01-01 1980-01-01 1").unwrap();
    let purchase = run(&mut app, "purchaseCar 10 1 red Lotus 1985 800 -79228162514264337593543950335");
    let register = run(&mut app, "registerPilot 2 B 1960-01-01 1980-01-01 -5");

    assert_eq!(purchase, Err(RacingError::NegativeAmount(Decimal::MIN)));
    assert_eq!(register, Err(RacingError::NegativeAmount(dec!(-5))));
    assert_eq!(app.pilot_balance(PilotId::new(1)), Ok(dec!(1)));
    assert_eq!(app.pilot_count(), 1);
    assert_eq!(app.car_count(), 0);
}

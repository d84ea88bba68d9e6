use paddock_common::RacingError;
use paddock_core::dispatch::{self, Operation, OperationKind, Outcome, ParseError};
use paddock_core::{RacingApplication, SharedApplication};
use rust_decimal_macros::dec;

/// Runs every command of `script`, collecting the printed form of each result.
fn run(app: &mut RacingApplication, script: &str) -> anyhow::Result<Vec<String>> {
    let mut printed = Vec::new();
    for (line_no, parsed) in dispatch::parse_script(script) {
        let operation = parsed.map_err(|e| anyhow::anyhow!("line {line_no}: {e}"))?;
        let line = match operation.execute(app) {
            Ok(outcome) => outcome.to_string(),
            Err(err) => format!("error: {}", err.kind()),
        };
        printed.push(line);
    }
    Ok(printed)
}

#[test]
fn example_session_through_the_dispatcher() {
    let mut app = RacingApplication::in_memory();
    let script = r#"
        registerPilot 1 "Ayrton Senna" 1960-03-21 1984-03-25 1000.00
        purchaseCar 10 1 white McLaren 1988 650 600.00
        pilotBalance 1
        carsOwnedByPilot 1
        sellCar 10
        pilotBalance 1
        carsOwnedByPilot 1
        changeCarColor 10 red
    "#;

    let printed = run(&mut app, script).unwrap();

    assert_eq!(
        printed,
        vec!["ok", "ok", "400.00", "[10]", "ok", "1000.00", "[]", "error: NotSupported"]
    );
}

#[test]
fn legacy_names_drive_the_same_operations() {
    let mut app = RacingApplication::in_memory();
    let script = "
        novoPiloto 1 Emerson 1946-12-12 1970-07-18 300.00
        novoPiloto 2 Rubens 1972-05-23 1993-03-14 300.00
        comprarCarro 5 1 yellow Lotus 1972 450 100.00
        comprarCarro 6 2 red Ferrari 2000 800 250.50
        buscarCarroMaisCaro
        buscarCarroMaisPotente
        buscarCarrosPorMarca Lotus
        buscarMarcas
        buscarNomePiloto 2
        buscarPilotoMaisExperiente
        buscarPilotoMenosExperiente
        buscarPilotos
        buscarValorPatrimonio 2
        venderCarro 6
        buscarSaldo 2
        trocarCor 5 blue
    ";

    let printed = run(&mut app, script).unwrap();

    assert_eq!(
        printed,
        vec![
            "ok",
            "ok",
            "ok",
            "ok",
            "6",
            "6",
            "[5]",
            "[Lotus, Ferrari]",
            "Rubens",
            "2",
            "1",
            "[1, 2]",
            "250.50",
            "ok",
            "300.00",
            "error: NotSupported",
        ]
    );
}

#[test]
fn failures_come_back_as_values() {
    let mut app = RacingApplication::in_memory();
    let script = "
        registerPilot 1 Ayrton 1960-03-21 1984-03-25 100
        registerPilot 1 Ayrton 1960-03-21 1984-03-25 100
        purchaseCar 10 2 red Lotus 1985 800 50
        purchaseCar 10 1 red Lotus 1985 800 500
        sellCar 10
        mostExpensiveCar
    ";

    let printed = run(&mut app, script).unwrap();

    assert_eq!(
        printed,
        vec![
            "ok",
            "error: IdentifierInUse",
            "error: PilotNotFound",
            "error: InsufficientFunds",
            "error: CarNotFound",
            "error: CarNotFound",
        ]
    );
}

#[test]
fn malformed_commands_do_not_execute() {
    assert_eq!(
        "purchaseCar 10 1 red Lotus 1985 800".parse::<Operation>(),
        Err(ParseError::MissingArgument {
            operation: "purchaseCar",
            argument: "price",
        })
    );
    assert!(matches!(
        "registerPilot 1 Ayrton 1960-03-21 1984-03-25 lots".parse::<Operation>(),
        Err(ParseError::InvalidArgument { argument: "funds", .. })
    ));
    assert_eq!(
        r#"pilotName "1"#.parse::<Operation>(),
        Err(ParseError::UnterminatedQuote)
    );
}

#[test]
fn shared_handle_runs_parsed_operations() {
    let shared = SharedApplication::default();
    let register: Operation = "registerPilot 1 Ayrton 1960-03-21 1984-03-25 10.00"
        .parse()
        .unwrap();

    assert_eq!(shared.with(|app| register.execute(app)), Ok(Outcome::Done));
    assert_eq!(
        shared.with(|app| Operation::PilotBalance { pilot: 1.into() }.execute(app)),
        Ok(Outcome::Amount(dec!(10.00)))
    );
    assert_eq!(
        shared.with(|app| Operation::MostPowerfulCar.execute(app)),
        Err(RacingError::CarNotFound(None))
    );
}

#[test]
fn every_operation_is_listed_once() {
    let mut names: Vec<&str> = OperationKind::ALL
        .iter()
        .flat_map(|kind| [kind.name(), kind.legacy_name()])
        .collect();
    names.sort_unstable();
    names.dedup();

    assert_eq!(names.len(), OperationKind::ALL.len() * 2);
}

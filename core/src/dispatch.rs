//! # Operation Dispatcher
//!
//! Maps named operations to [`RacingApplication`] entry points.
//!
//! A command is one line: the operation name followed by its arguments, e.g.
//! `purchaseCar 10 1 red Ferrari 1990 690 600.00`. Every operation is also
//! reachable under the name used by older harnesses (`comprarCarro`, ...).
//!
//! Argument formats:
//! * ids, years and power: base-10 integers
//! * dates: `YYYY-MM-DD`
//! * amounts: decimals such as `1000.00`, kept exactly as written

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use paddock_common::RacingResult;
use paddock_common::models::{CarId, PilotId};

use crate::application::RacingApplication;

mod lexer;
mod outcome;

pub use lexer::tokenize;
pub use outcome::Outcome;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("{operation}: missing argument <{argument}>")]
    MissingArgument {
        operation: &'static str,
        argument: &'static str,
    },

    #[error("{operation}: unexpected argument '{value}'")]
    UnexpectedArgument {
        operation: &'static str,
        value: String,
    },

    #[error("{operation}: invalid <{argument}> '{value}': {reason}")]
    InvalidArgument {
        operation: &'static str,
        argument: &'static str,
        value: String,
        reason: String,
    },

    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// Names every operation answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    RegisterPilot,
    PurchaseCar,
    SellCar,
    MostExpensiveCar,
    MostPowerfulCar,
    CarsOwnedByPilot,
    CarsByBrand,
    ColorOfCar,
    AllBrands,
    PilotName,
    MostExperiencedPilot,
    LeastExperiencedPilot,
    AllPilots,
    PilotBalance,
    PilotNetWorth,
    ChangeCarColor,
}

impl OperationKind {
    pub const ALL: [OperationKind; 16] = [
        OperationKind::RegisterPilot,
        OperationKind::PurchaseCar,
        OperationKind::SellCar,
        OperationKind::MostExpensiveCar,
        OperationKind::MostPowerfulCar,
        OperationKind::CarsOwnedByPilot,
        OperationKind::CarsByBrand,
        OperationKind::ColorOfCar,
        OperationKind::AllBrands,
        OperationKind::PilotName,
        OperationKind::MostExperiencedPilot,
        OperationKind::LeastExperiencedPilot,
        OperationKind::AllPilots,
        OperationKind::PilotBalance,
        OperationKind::PilotNetWorth,
        OperationKind::ChangeCarColor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::RegisterPilot => "registerPilot",
            OperationKind::PurchaseCar => "purchaseCar",
            OperationKind::SellCar => "sellCar",
            OperationKind::MostExpensiveCar => "mostExpensiveCar",
            OperationKind::MostPowerfulCar => "mostPowerfulCar",
            OperationKind::CarsOwnedByPilot => "carsOwnedByPilot",
            OperationKind::CarsByBrand => "carsByBrand",
            OperationKind::ColorOfCar => "colorOfCar",
            OperationKind::AllBrands => "allBrands",
            OperationKind::PilotName => "pilotName",
            OperationKind::MostExperiencedPilot => "mostExperiencedPilot",
            OperationKind::LeastExperiencedPilot => "leastExperiencedPilot",
            OperationKind::AllPilots => "allPilots",
            OperationKind::PilotBalance => "pilotBalance",
            OperationKind::PilotNetWorth => "pilotNetWorth",
            OperationKind::ChangeCarColor => "changeCarColor",
        }
    }

    /// Portuguese name accepted for older scripts.
    pub fn legacy_name(self) -> &'static str {
        match self {
            OperationKind::RegisterPilot => "novoPiloto",
            OperationKind::PurchaseCar => "comprarCarro",
            OperationKind::SellCar => "venderCarro",
            OperationKind::MostExpensiveCar => "buscarCarroMaisCaro",
            OperationKind::MostPowerfulCar => "buscarCarroMaisPotente",
            OperationKind::CarsOwnedByPilot => "buscarCarros",
            OperationKind::CarsByBrand => "buscarCarrosPorMarca",
            OperationKind::ColorOfCar => "buscarCor",
            OperationKind::AllBrands => "buscarMarcas",
            OperationKind::PilotName => "buscarNomePiloto",
            OperationKind::MostExperiencedPilot => "buscarPilotoMaisExperiente",
            OperationKind::LeastExperiencedPilot => "buscarPilotoMenosExperiente",
            OperationKind::AllPilots => "buscarPilotos",
            OperationKind::PilotBalance => "buscarSaldo",
            OperationKind::PilotNetWorth => "buscarValorPatrimonio",
            OperationKind::ChangeCarColor => "trocarCor",
        }
    }

    /// Argument names, in the order the command line expects them.
    pub fn arguments(self) -> &'static [&'static str] {
        match self {
            OperationKind::RegisterPilot => &["id", "name", "birth-date", "career-start", "funds"],
            OperationKind::PurchaseCar => {
                &["car-id", "pilot-id", "color", "brand", "year", "power", "price"]
            }
            OperationKind::SellCar | OperationKind::ColorOfCar => &["car-id"],
            OperationKind::CarsOwnedByPilot
            | OperationKind::PilotName
            | OperationKind::PilotBalance
            | OperationKind::PilotNetWorth => &["pilot-id"],
            OperationKind::CarsByBrand => &["brand"],
            OperationKind::ChangeCarColor => &["car-id", "color"],
            OperationKind::MostExpensiveCar
            | OperationKind::MostPowerfulCar
            | OperationKind::AllBrands
            | OperationKind::MostExperiencedPilot
            | OperationKind::LeastExperiencedPilot
            | OperationKind::AllPilots => &[],
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            OperationKind::RegisterPilot => "Register a new pilot",
            OperationKind::PurchaseCar => "Create a car owned by a pilot and charge its price",
            OperationKind::SellCar => "Refund a car's price to its owner and release it",
            OperationKind::MostExpensiveCar => "Id of the priciest car",
            OperationKind::MostPowerfulCar => "Id of the most powerful car",
            OperationKind::CarsOwnedByPilot => "Ids of the cars a pilot owns",
            OperationKind::CarsByBrand => "Ids of the cars of a brand",
            OperationKind::ColorOfCar => "Color of a car",
            OperationKind::AllBrands => "Brand of every car",
            OperationKind::PilotName => "Name of a pilot",
            OperationKind::MostExperiencedPilot => "Pilot with the latest career start",
            OperationKind::LeastExperiencedPilot => "Pilot with the earliest career start",
            OperationKind::AllPilots => "Every pilot id, ascending",
            OperationKind::PilotBalance => "Funds of a pilot",
            OperationKind::PilotNetWorth => "Total price of the cars a pilot owns",
            OperationKind::ChangeCarColor => "Not supported",
        }
    }

    /// Resolves a current or legacy operation name. Matching is exact.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name || kind.legacy_name() == name)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ParseError::UnknownOperation(s.to_string()))
    }
}

/// A parsed command, ready to run against a [`RacingApplication`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    RegisterPilot {
        id: PilotId,
        name: String,
        birth_date: NaiveDate,
        career_start: NaiveDate,
        funds: Decimal,
    },
    PurchaseCar {
        car: CarId,
        pilot: PilotId,
        color: String,
        brand: String,
        year: i32,
        power: i32,
        price: Decimal,
    },
    SellCar { car: CarId },
    MostExpensiveCar,
    MostPowerfulCar,
    CarsOwnedByPilot { pilot: PilotId },
    CarsByBrand { brand: String },
    ColorOfCar { car: CarId },
    AllBrands,
    PilotName { pilot: PilotId },
    MostExperiencedPilot,
    LeastExperiencedPilot,
    AllPilots,
    PilotBalance { pilot: PilotId },
    PilotNetWorth { pilot: PilotId },
    ChangeCarColor { car: CarId, color: String },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::RegisterPilot { .. } => OperationKind::RegisterPilot,
            Operation::PurchaseCar { .. } => OperationKind::PurchaseCar,
            Operation::SellCar { .. } => OperationKind::SellCar,
            Operation::MostExpensiveCar => OperationKind::MostExpensiveCar,
            Operation::MostPowerfulCar => OperationKind::MostPowerfulCar,
            Operation::CarsOwnedByPilot { .. } => OperationKind::CarsOwnedByPilot,
            Operation::CarsByBrand { .. } => OperationKind::CarsByBrand,
            Operation::ColorOfCar { .. } => OperationKind::ColorOfCar,
            Operation::AllBrands => OperationKind::AllBrands,
            Operation::PilotName { .. } => OperationKind::PilotName,
            Operation::MostExperiencedPilot => OperationKind::MostExperiencedPilot,
            Operation::LeastExperiencedPilot => OperationKind::LeastExperiencedPilot,
            Operation::AllPilots => OperationKind::AllPilots,
            Operation::PilotBalance { .. } => OperationKind::PilotBalance,
            Operation::PilotNetWorth { .. } => OperationKind::PilotNetWorth,
            Operation::ChangeCarColor { .. } => OperationKind::ChangeCarColor,
        }
    }

    /// Builds an operation from already split words; the first word names it.
    pub fn from_tokens(tokens: Vec<String>) -> Result<Self, ParseError> {
        let mut tokens = tokens.into_iter();
        let name = tokens.next().ok_or(ParseError::Empty)?;
        let kind: OperationKind = name.parse()?;
        let mut args = Args::new(kind, tokens);

        let operation = match kind {
            OperationKind::RegisterPilot => Operation::RegisterPilot {
                id: args.parse()?,
                name: args.text()?,
                birth_date: args.parse()?,
                career_start: args.parse()?,
                funds: args.parse()?,
            },
            OperationKind::PurchaseCar => Operation::PurchaseCar {
                car: args.parse()?,
                pilot: args.parse()?,
                color: args.text()?,
                brand: args.text()?,
                year: args.parse()?,
                power: args.parse()?,
                price: args.parse()?,
            },
            OperationKind::SellCar => Operation::SellCar { car: args.parse()? },
            OperationKind::MostExpensiveCar => Operation::MostExpensiveCar,
            OperationKind::MostPowerfulCar => Operation::MostPowerfulCar,
            OperationKind::CarsOwnedByPilot => Operation::CarsOwnedByPilot {
                pilot: args.parse()?,
            },
            OperationKind::CarsByBrand => Operation::CarsByBrand { brand: args.text()? },
            OperationKind::ColorOfCar => Operation::ColorOfCar { car: args.parse()? },
            OperationKind::AllBrands => Operation::AllBrands,
            OperationKind::PilotName => Operation::PilotName {
                pilot: args.parse()?,
            },
            OperationKind::MostExperiencedPilot => Operation::MostExperiencedPilot,
            OperationKind::LeastExperiencedPilot => Operation::LeastExperiencedPilot,
            OperationKind::AllPilots => Operation::AllPilots,
            OperationKind::PilotBalance => Operation::PilotBalance {
                pilot: args.parse()?,
            },
            OperationKind::PilotNetWorth => Operation::PilotNetWorth {
                pilot: args.parse()?,
            },
            OperationKind::ChangeCarColor => Operation::ChangeCarColor {
                car: args.parse()?,
                color: args.text()?,
            },
        };

        args.finish()?;
        Ok(operation)
    }

    pub fn execute(self, app: &mut RacingApplication) -> RacingResult<Outcome> {
        let outcome = match self {
            Operation::RegisterPilot {
                id,
                name,
                birth_date,
                career_start,
                funds,
            } => {
                app.register_pilot(id, &name, birth_date, career_start, funds)?;
                Outcome::Done
            }
            Operation::PurchaseCar {
                car,
                pilot,
                color,
                brand,
                year,
                power,
                price,
            } => {
                app.purchase_car(car, pilot, &color, &brand, year, power, price)?;
                Outcome::Done
            }
            Operation::SellCar { car } => {
                app.sell_car(car)?;
                Outcome::Done
            }
            Operation::MostExpensiveCar => Outcome::Id(app.most_expensive_car()?.get()),
            Operation::MostPowerfulCar => Outcome::Id(app.most_powerful_car()?.get()),
            Operation::CarsOwnedByPilot { pilot } => {
                Outcome::Ids(app.cars_owned_by(pilot)?.into_iter().map(i64::from).collect())
            }
            Operation::CarsByBrand { brand } => {
                Outcome::Ids(app.cars_by_brand(&brand).into_iter().map(i64::from).collect())
            }
            Operation::ColorOfCar { car } => Outcome::Text(app.color_of(car)?),
            Operation::AllBrands => Outcome::Texts(app.all_brands()),
            Operation::PilotName { pilot } => Outcome::Text(app.pilot_name(pilot)?),
            Operation::MostExperiencedPilot => Outcome::Id(app.most_experienced_pilot()?.get()),
            Operation::LeastExperiencedPilot => {
                Outcome::Id(app.least_experienced_pilot()?.get())
            }
            Operation::AllPilots => {
                Outcome::Ids(app.all_pilots().into_iter().map(i64::from).collect())
            }
            Operation::PilotBalance { pilot } => Outcome::Amount(app.pilot_balance(pilot)?),
            Operation::PilotNetWorth { pilot } => Outcome::Amount(app.pilot_net_worth(pilot)?),
            Operation::ChangeCarColor { car, color } => {
                app.change_car_color(car, &color)?;
                Outcome::Done
            }
        };
        Ok(outcome)
    }
}

impl FromStr for Operation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(tokenize(s)?)
    }
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Operation>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Parses a whole script, pairing each command with its 1-based line number.
pub fn parse_script(
    source: &str,
) -> impl Iterator<Item = (usize, Result<Operation, ParseError>)> + '_ {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line).transpose().map(|parsed| (idx + 1, parsed)))
}

/// Cursor over the arguments of one command.
struct Args {
    kind: OperationKind,
    position: usize,
    tokens: std::vec::IntoIter<String>,
}

impl Args {
    fn new(kind: OperationKind, tokens: std::vec::IntoIter<String>) -> Self {
        Self {
            kind,
            position: 0,
            tokens,
        }
    }

    fn text(&mut self) -> Result<String, ParseError> {
        let argument = self.kind.arguments().get(self.position).copied().unwrap_or("?");
        self.position += 1;
        self.tokens.next().ok_or(ParseError::MissingArgument {
            operation: self.kind.name(),
            argument,
        })
    }

    fn parse<T>(&mut self) -> Result<T, ParseError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let argument = self.kind.arguments().get(self.position).copied().unwrap_or("?");
        let value = self.text()?;
        value.parse().map_err(|e: T::Err| ParseError::InvalidArgument {
            operation: self.kind.name(),
            argument,
            reason: e.to_string(),
            value,
        })
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.tokens.next() {
            Some(value) => Err(ParseError::UnexpectedArgument {
                operation: self.kind.name(),
                value,
            }),
            None => Ok(()),
        }
    }
}

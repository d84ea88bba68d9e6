//! Business failures reported by paddock operations.
//!
//! Every variant is an expected outcome of a request, never a crash. An
//! operation that returns one of these has left both registries untouched.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{CarId, PilotId};

/// Result type alias for paddock operations.
pub type RacingResult<T> = Result<T, RacingError>;

/// Which registry an identifier collided in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Pilot,
    Car,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Pilot => f.write_str("pilot"),
            EntityKind::Car => f.write_str("car"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RacingError {
    /// The identifier is already taken.
    #[error("{kind} identifier {id} is already in use")]
    IdentifierInUse {
        /// Registry the identifier was found in.
        kind: EntityKind,
        /// The colliding identifier.
        id: i64,
    },

    /// `None` when a query needed any pilot and the registry is empty.
    #[error("{}", missing("pilot", .0))]
    PilotNotFound(Option<PilotId>),

    /// `None` when a query needed any car and the registry is empty.
    #[error("{}", missing("car", .0))]
    CarNotFound(Option<CarId>),

    /// A sale was requested for a car nobody owns.
    #[error("car {0} has no owner")]
    CarNotOwned(CarId),

    #[error("pilot {pilot} has {funds} but the car costs {price}")]
    InsufficientFunds {
        pilot: PilotId,
        funds: Decimal,
        price: Decimal,
    },

    /// Prices and starting funds cannot be below zero.
    #[error("amount {0} is negative")]
    NegativeAmount(Decimal),

    /// The pilot's new balance does not fit in a decimal.
    #[error("balance of pilot {0} would overflow")]
    BalanceOverflow(PilotId),

    #[error("operation '{0}' is not supported")]
    NotSupported(&'static str),
}

impl RacingError {
    pub fn pilot_in_use(id: PilotId) -> Self {
        Self::IdentifierInUse {
            kind: EntityKind::Pilot,
            id: id.get(),
        }
    }

    pub fn car_in_use(id: impl Into<i64>) -> Self {
        Self::IdentifierInUse {
            kind: EntityKind::Car,
            id: id.into(),
        }
    }

    pub fn pilot_not_found(id: PilotId) -> Self {
        Self::PilotNotFound(Some(id))
    }

    pub fn car_not_found(id: CarId) -> Self {
        Self::CarNotFound(Some(id))
    }

    /// Short machine-friendly name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IdentifierInUse { .. } => "IdentifierInUse",
            Self::PilotNotFound(_) => "PilotNotFound",
            Self::CarNotFound(_) => "CarNotFound",
            Self::CarNotOwned(_) => "CarNotOwned",
            Self::InsufficientFunds { .. } => "InsufficientFunds",
            Self::NegativeAmount(_) => "NegativeAmount",
            Self::BalanceOverflow(_) => "BalanceOverflow",
            Self::NotSupported(_) => "NotSupported",
        }
    }
}

fn missing<T: fmt::Display>(kind: &str, id: &Option<T>) -> String {
    match id {
        Some(id) => format!("{kind} {id} not found"),
        None => format!("no {kind} registered"),
    }
}

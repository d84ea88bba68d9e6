use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::PilotId;

/// A driver registered in the paddock.
///
/// Only the balance changes after registration: purchases debit it, sales credit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pilot {
    id: PilotId,
    name: String,
    birth_date: NaiveDate,
    career_start: NaiveDate,
    funds: Decimal,
}

impl Pilot {
    pub fn new(
        id: PilotId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        career_start: NaiveDate,
        funds: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            birth_date,
            career_start,
            funds,
        }
    }

    pub fn id(&self) -> PilotId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn career_start(&self) -> NaiveDate {
        self.career_start
    }

    pub fn funds(&self) -> Decimal {
        self.funds
    }

    /// Whether the balance covers `price`. Equality is enough.
    pub fn can_afford(&self, price: Decimal) -> bool {
        self.funds >= price
    }

    /// Takes `amount` off the balance and returns the new one.
    /// `None` on overflow, in which case the balance is left as it was.
    pub fn debit(&mut self, amount: Decimal) -> Option<Decimal> {
        self.funds = self.funds.checked_sub(amount)?;
        Some(self.funds)
    }

    /// Adds `amount` to the balance, with the same overflow rule as [`Pilot::debit`].
    pub fn credit(&mut self, amount: Decimal) -> Option<Decimal> {
        self.funds = self.funds.checked_add(amount)?;
        Some(self.funds)
    }
}

use std::fmt;

use rust_decimal::Decimal;

/// Value produced by a successful operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Mutations report nothing back.
    Done,
    Id(i64),
    Ids(Vec<i64>),
    Text(String),
    Texts(Vec<String>),
    Amount(Decimal),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => f.write_str("ok"),
            Outcome::Id(id) => write!(f, "{id}"),
            Outcome::Ids(ids) => write_list(f, ids),
            Outcome::Text(text) => f.write_str(text),
            Outcome::Texts(texts) => write_list(f, texts),
            Outcome::Amount(amount) => write!(f, "{amount}"),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

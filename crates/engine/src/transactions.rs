//! Transaction primitives.
//!
//! A `Transaction` is a single income or outcome entry owned by one `User`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Outcome,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Outcome => "outcome",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            other => Err(EngineError::InvalidType(format!(
                "invalid transaction type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(title: String, value: f64, kind: TransactionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            value,
            kind,
        }
    }
}

/// Unvalidated transaction fields as received from a caller.
///
/// `value` is already numerically coerced; `kind` is the raw type string.
#[derive(Clone, Debug, Default)]
pub struct TransactionFields {
    pub title: Option<String>,
    pub value: Option<f64>,
    pub kind: Option<String>,
}

/// Totals derived from a user's transactions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Balance {
    pub total_income: f64,
    pub total_outcome: f64,
}

impl Balance {
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        transactions
            .into_iter()
            .fold(Self::default(), |mut acc, tx| {
                match tx.kind {
                    TransactionKind::Income => acc.total_income += tx.value,
                    TransactionKind::Outcome => acc.total_outcome += tx.value,
                }
                acc
            })
    }

    pub fn net(&self) -> f64 {
        self.total_income - self.total_outcome
    }
}

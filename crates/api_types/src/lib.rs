use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A JSON number, or a string holding one.
///
/// Request bodies may send amounts and ages either way; both are coerced to
/// `f64` before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Numeric value, `None` when the text does not hold a number.
    ///
    /// Blank text coerces to `0`.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Some(0.0);
                }
                text.parse().ok().filter(|n: &f64| n.is_finite())
            }
        }
    }
}

/// Error body returned by every failing request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub mensagem: String,
}

pub mod user {
    use super::*;
    use crate::transaction::TransactionView;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct UserNew {
        pub name: Option<String>,
        pub email: Option<String>,
        pub cpf: Option<String>,
        pub age: Option<Numeric>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct UserUpdate {
        pub name: Option<String>,
        pub email: Option<String>,
        pub age: Option<Numeric>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub id: Uuid,
        pub name: String,
        pub email: String,
        pub cpf: String,
        pub age: f64,
        pub transactions: Vec<TransactionView>,
    }

    /// Full store listing.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UsersResponse {
        pub users: Vec<UserView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserResponse {
        pub user: UserView,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Outcome,
    }

    /// Request body for creating and updating a transaction.
    ///
    /// `type` is kept as raw text so an unknown value can be reported as an
    /// invalid type instead of a malformed body.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub title: Option<String>,
        pub value: Option<Numeric>,
        #[serde(rename = "type")]
        pub kind: Option<String>,
    }

    pub type TransactionUpdate = TransactionNew;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub title: String,
        pub value: f64,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionResponse {
        pub transaction: TransactionView,
    }

    /// Transactions of a user with their totals.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
        /// Sum of income values.
        pub valor_entrada: f64,
        /// Sum of outcome values.
        pub valor_retirada: f64,
        /// Income minus outcome.
        pub total_credito: f64,
    }
}

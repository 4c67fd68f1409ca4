//! Users and their owned transactions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, Transaction};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub age: f64,
    pub transactions: Vec<Transaction>,
}

impl User {
    pub fn new(name: String, email: String, cpf: String, age: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            cpf,
            age,
            transactions: Vec::new(),
        }
    }

    pub fn transaction(&self, id: &Uuid) -> ResultEngine<&Transaction> {
        self.transactions
            .iter()
            .find(|tx| &tx.id == id)
            .ok_or_else(|| EngineError::TransactionNotFound(id.to_string()))
    }

    pub fn transaction_mut(&mut self, id: &Uuid) -> ResultEngine<&mut Transaction> {
        self.transactions
            .iter_mut()
            .find(|tx| &tx.id == id)
            .ok_or_else(|| EngineError::TransactionNotFound(id.to_string()))
    }

    /// Remove the transaction keeping the order of the others.
    pub fn remove_transaction(&mut self, id: &Uuid) -> ResultEngine<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|tx| &tx.id == id)
            .ok_or_else(|| EngineError::TransactionNotFound(id.to_string()))?;
        Ok(self.transactions.remove(index))
    }
}

/// Unvalidated user fields as received from a caller.
///
/// `age` is already numerically coerced. `cpf` is ignored on update.
#[derive(Clone, Debug, Default)]
pub struct UserFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub age: Option<f64>,
}

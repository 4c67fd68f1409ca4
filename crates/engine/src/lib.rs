use indexmap::IndexMap;
use uuid::Uuid;

pub use error::EngineError;
pub use transactions::{Balance, Transaction, TransactionFields, TransactionKind};
pub use users::{User, UserFields};

use util::{parse_id, required_number, required_str};

mod error;
mod transactions;
mod users;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

/// In-memory store of users and their transactions.
///
/// Users are kept in insertion order; every listing follows that order.
#[derive(Debug)]
pub struct Engine {
    users: IndexMap<Uuid, User>,
    clear_transactions_on_update: bool,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// All users in insertion order.
    pub fn users(&self) -> impl ExactSizeIterator<Item = &User> {
        self.users.values()
    }

    /// Return the user with the given id.
    pub fn user(&self, id: &str) -> ResultEngine<&User> {
        parse_id(id)
            .and_then(|id| self.users.get(&id))
            .ok_or_else(|| EngineError::UserNotFound(id.to_string()))
    }

    fn user_mut(&mut self, id: &str) -> ResultEngine<&mut User> {
        parse_id(id)
            .and_then(|id| self.users.get_mut(&id))
            .ok_or_else(|| EngineError::UserNotFound(id.to_string()))
    }

    /// Add a new user with an empty transaction list and return its id.
    ///
    /// Every field is required; a missing one fails with
    /// [`EngineError::InvalidInput`] and leaves the store untouched.
    pub fn new_user(&mut self, fields: UserFields) -> ResultEngine<Uuid> {
        let name = required_str("name", fields.name.as_deref())?;
        let email = required_str("email", fields.email.as_deref())?;
        let cpf = required_str("cpf", fields.cpf.as_deref())?;
        let age = required_number("age", fields.age)?;

        let user = User::new(name.to_string(), email.to_string(), cpf.to_string(), age);
        let id = user.id;
        self.users.insert(id, user);
        Ok(id)
    }

    /// Overwrite name, email and age of a user.
    ///
    /// Unless the engine was built with `clear_transactions_on_update(false)`
    /// the user's transaction list is emptied as well.
    pub fn update_user(&mut self, id: &str, fields: UserFields) -> ResultEngine<&User> {
        let name = required_str("name", fields.name.as_deref())?.to_string();
        let email = required_str("email", fields.email.as_deref())?.to_string();
        let age = required_number("age", fields.age)?;
        required_str("id", Some(id))?;

        let clear = self.clear_transactions_on_update;
        let user = self.user_mut(id)?;
        user.name = name;
        user.email = email;
        user.age = age;
        if clear {
            user.transactions.clear();
        }
        Ok(&*user)
    }

    /// Remove a user together with its transactions.
    pub fn delete_user(&mut self, id: &str) -> ResultEngine<User> {
        parse_id(id)
            .and_then(|id| self.users.shift_remove(&id))
            .ok_or_else(|| EngineError::UserNotFound(id.to_string()))
    }

    /// Append a new transaction to a user and return the updated user.
    pub fn new_transaction(
        &mut self,
        user_id: &str,
        fields: TransactionFields,
    ) -> ResultEngine<&User> {
        let title = required_str("title", fields.title.as_deref())?.to_string();
        let value = required_number("value", fields.value)?;
        let kind = required_str("type", fields.kind.as_deref())?;
        required_str("userId", Some(user_id))?;
        let kind = TransactionKind::try_from(kind)?;

        let user = self.user_mut(user_id)?;
        user.transactions.push(Transaction::new(title, value, kind));
        Ok(&*user)
    }

    /// Return a transaction owned by the given user.
    pub fn transaction(&self, user_id: &str, id: &str) -> ResultEngine<&Transaction> {
        required_str("userId", Some(user_id))?;
        required_str("id", Some(id))?;

        let user = self.user(user_id)?;
        let tx_id =
            parse_id(id).ok_or_else(|| EngineError::TransactionNotFound(id.to_string()))?;
        user.transaction(&tx_id)
    }

    /// Return the user's transactions together with their totals.
    pub fn transactions_with_balance(
        &self,
        user_id: &str,
    ) -> ResultEngine<(&[Transaction], Balance)> {
        let user = self.user(user_id)?;
        let balance = Balance::from_transactions(&user.transactions);
        Ok((user.transactions.as_slice(), balance))
    }

    /// Overwrite the supplied fields of a transaction in place.
    ///
    /// Omitted fields keep their value. An unknown type is rejected before
    /// anything is written.
    pub fn update_transaction(
        &mut self,
        user_id: &str,
        id: &str,
        fields: TransactionFields,
    ) -> ResultEngine<&Transaction> {
        required_str("userId", Some(user_id))?;
        required_str("id", Some(id))?;

        let user = self.user_mut(user_id)?;
        let tx_id =
            parse_id(id).ok_or_else(|| EngineError::TransactionNotFound(id.to_string()))?;
        let tx = user.transaction_mut(&tx_id)?;

        let kind = fields
            .kind
            .as_deref()
            .map(TransactionKind::try_from)
            .transpose()?;
        if let Some(title) = fields.title.filter(|t| !t.is_empty()) {
            tx.title = title;
        }
        if let Some(value) = fields.value.filter(|v| v.is_finite()) {
            tx.value = value;
        }
        if let Some(kind) = kind {
            tx.kind = kind;
        }
        Ok(&*tx)
    }

    /// Remove a transaction from the user's list.
    pub fn delete_transaction(&mut self, user_id: &str, id: &str) -> ResultEngine<Transaction> {
        required_str("userId", Some(user_id))?;
        required_str("id", Some(id))?;

        let user = self.user_mut(user_id)?;
        let tx_id =
            parse_id(id).ok_or_else(|| EngineError::TransactionNotFound(id.to_string()))?;
        user.remove_transaction(&tx_id)
    }
}

pub struct EngineBuilder {
    clear_transactions_on_update: bool,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            clear_transactions_on_update: true,
        }
    }
}

impl EngineBuilder {
    /// Whether updating a user empties its transaction list (default `true`).
    pub fn clear_transactions_on_update(mut self, clear: bool) -> EngineBuilder {
        self.clear_transactions_on_update = clear;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            users: IndexMap::new(),
            clear_transactions_on_update: self.clear_transactions_on_update,
        }
    }
}

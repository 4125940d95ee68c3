use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub offset: i64,
    pub limit: i64,
}

#[async_trait]
pub trait TransactionRepo: Sync + Send {
    async fn get_transaction(&self, transaction_id: i64)
        -> Result<Transaction, TransactionRepoError>;

    async fn get_all_transactions(
        &self,
        page_options: Option<PageOptions>,
    ) -> Result<Vec<Transaction>, TransactionRepoError>;

    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    /// Overwrites every column of the transaction. Fields left as `None` are written as NULL.
    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn delete_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError>;

    /// Sum of `amount` for each distinct transaction type.
    async fn get_type_totals(&self) -> Result<Vec<TypeTotal>, TransactionRepoError>;
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error("Transaction with id {0} not found")]
    TransactionNotFound(i64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub description: Option<String>,
}

impl Transaction {
    pub const fn new(
        id: i64,
        transaction_type: String,
        category: String,
        amount: f64,
        date: String,
        description: Option<String>,
    ) -> Transaction {
        Transaction {
            id,
            transaction_type,
            category,
            amount,
            date,
            description,
        }
    }
}

/// Request body for both creating and replacing a transaction.
///
/// Every field is optional on the wire. Presence is only enforced by the `NOT NULL`
/// constraints of the `transactions` table, so a missing `type`, `category`, `amount`
/// or `date` is reported as a storage error.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn new(
        transaction_type: &str,
        category: &str,
        amount: f64,
        date: &str,
        description: Option<&str>,
    ) -> NewTransaction {
        NewTransaction {
            transaction_type: Some(transaction_type.to_owned()),
            category: Some(category.to_owned()),
            amount: Some(amount),
            date: Some(date.to_owned()),
            description: description.map(str::to_owned),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TypeTotal {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub total: f64,
}

impl TypeTotal {
    pub const fn new(transaction_type: String, total: f64) -> TypeTotal {
        TypeTotal {
            transaction_type,
            total,
        }
    }
}

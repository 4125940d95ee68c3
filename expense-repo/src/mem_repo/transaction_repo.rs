use crate::transaction_repo::TransactionRepoError::TransactionNotFound;
use crate::transaction_repo::{
    NewTransaction, PageOptions, Transaction, TransactionRepo, TransactionRepoError, TypeTotal,
};
use crate::HealthCheck;
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    transactions: BTreeMap<i64, Transaction>,
    next_id: i64,
}

/// In-memory stand-in for the SQLite store.
///
/// Ids start at 1 and are never reused, and the `NOT NULL` columns are checked with the
/// same messages SQLite reports.
pub struct MemTransactionRepo {
    state: RwLock<State>,
}

impl MemTransactionRepo {
    pub fn new() -> MemTransactionRepo {
        let state = State {
            transactions: BTreeMap::new(),
            next_id: 1,
        };
        MemTransactionRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

fn not_null(column: &str) -> anyhow::Error {
    anyhow!("NOT NULL constraint failed: transactions.{}", column)
}

fn to_transaction(id: i64, new_transaction: NewTransaction) -> Result<Transaction, anyhow::Error> {
    Ok(Transaction::new(
        id,
        new_transaction
            .transaction_type
            .ok_or_else(|| not_null("type"))?,
        new_transaction.category.ok_or_else(|| not_null("category"))?,
        new_transaction.amount.ok_or_else(|| not_null("amount"))?,
        new_transaction.date.ok_or_else(|| not_null("date"))?,
        new_transaction.description,
    ))
}

#[async_trait]
impl HealthCheck for MemTransactionRepo {
    async fn check(&self) -> bool {
        !self.state.is_poisoned()
    }
}

#[async_trait]
impl TransactionRepo for MemTransactionRepo {
    async fn get_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .transactions
            .get(&transaction_id)
            .cloned()
            .ok_or(TransactionNotFound(transaction_id))
    }

    async fn get_all_transactions(
        &self,
        page_options: Option<PageOptions>,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        let mut transactions: Box<dyn Iterator<Item = &Transaction>> =
            Box::new(read_guard.transactions.values());
        if let Some(page_options) = page_options {
            transactions = Box::new(
                transactions
                    .skip(page_options.offset.max(0) as usize)
                    .take(page_options.limit.max(0) as usize),
            );
        }

        Ok(transactions.cloned().collect())
    }

    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        let transaction = to_transaction(id, new_transaction)?;
        write_guard.next_id += 1;

        write_guard.transactions.insert(id, transaction.clone());

        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(entry) = write_guard.transactions.get_mut(&transaction_id) else {
            return Err(TransactionNotFound(transaction_id));
        };
        let transaction = to_transaction(transaction_id, updated_transaction)?;
        *entry = transaction.clone();

        Ok(transaction)
    }

    async fn delete_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        write_guard
            .transactions
            .remove(&transaction_id)
            .ok_or(TransactionNotFound(transaction_id))
    }

    async fn get_type_totals(&self) -> Result<Vec<TypeTotal>, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for t in read_guard.transactions.values() {
            *totals.entry(t.transaction_type.as_str()).or_insert(0.0) += t.amount;
        }

        Ok(totals
            .into_iter()
            .map(|(transaction_type, total)| TypeTotal::new(transaction_type.to_owned(), total))
            .collect())
    }
}

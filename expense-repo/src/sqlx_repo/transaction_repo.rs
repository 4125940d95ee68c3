use crate::sqlx_repo::SQLxRepo;
use crate::transaction_repo::TransactionRepoError::TransactionNotFound;
use crate::transaction_repo::{NewTransaction, PageOptions, Transaction, TypeTotal};
use crate::transaction_repo::{TransactionRepo, TransactionRepoError};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query_as, QueryBuilder, Sqlite};
use tracing::instrument;

const TRANSACTION_COLUMNS: &str = "id, type, category, amount, date, description";

#[derive(sqlx::FromRow)]
struct TransactionEntry {
    id: i64,
    #[sqlx(rename = "type")]
    transaction_type: String,
    category: String,
    amount: f64,
    date: String,
    description: Option<String>,
}

impl From<TransactionEntry> for Transaction {
    fn from(value: TransactionEntry) -> Self {
        Transaction::new(
            value.id,
            value.transaction_type,
            value.category,
            value.amount,
            value.date,
            value.description,
        )
    }
}

#[derive(sqlx::FromRow)]
struct TypeTotalEntry {
    #[sqlx(rename = "type")]
    transaction_type: String,
    total: f64,
}

impl From<TypeTotalEntry> for TypeTotal {
    fn from(value: TypeTotalEntry) -> Self {
        TypeTotal::new(value.transaction_type, value.total)
    }
}

#[async_trait]
impl TransactionRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let sql = format!("SELECT {} FROM transactions WHERE id = ?", TRANSACTION_COLUMNS);
        let transaction_entry: Option<TransactionEntry> = query_as(&sql)
            .bind(transaction_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get transaction {}", transaction_id))?;
        transaction_entry
            .ok_or(TransactionNotFound(transaction_id))
            .map(|t| t.into())
    }

    #[instrument(skip(self))]
    async fn get_all_transactions(
        &self,
        page_options: Option<PageOptions>,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        query_builder
            .push(TRANSACTION_COLUMNS)
            .push(" FROM transactions ORDER BY id");
        if let Some(po) = page_options {
            query_builder
                .push(" LIMIT ")
                .push_bind(po.limit)
                .push(" OFFSET ")
                .push_bind(po.offset);
        }
        let transaction_entries: Vec<TransactionEntry> = query_builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .context("Unable to get transactions")?;
        Ok(transaction_entries
            .into_iter()
            .map(|transaction_entry| transaction_entry.into())
            .collect())
    }

    #[instrument(skip(self, new_transaction))]
    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let sql = format!(
            "INSERT INTO transactions (type, category, amount, date, description) VALUES (?, ?, ?, ?, ?) RETURNING {}",
            TRANSACTION_COLUMNS
        );
        let transaction_entry: TransactionEntry = query_as(&sql)
            .bind(new_transaction.transaction_type)
            .bind(new_transaction.category)
            .bind(new_transaction.amount)
            .bind(new_transaction.date)
            .bind(new_transaction.description)
            .fetch_one(&self.pool)
            .await
            .context("Unable to insert transaction")?;
        Ok(transaction_entry.into())
    }

    #[instrument(skip(self, updated_transaction))]
    async fn update_transaction(
        &self,
        transaction_id: i64,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let sql = format!(
            "UPDATE transactions SET type = ?, category = ?, amount = ?, date = ?, description = ? WHERE id = ? RETURNING {}",
            TRANSACTION_COLUMNS
        );
        let transaction_entry: TransactionEntry = query_as(&sql)
            .bind(updated_transaction.transaction_type)
            .bind(updated_transaction.category)
            .bind(updated_transaction.amount)
            .bind(updated_transaction.date)
            .bind(updated_transaction.description)
            .bind(transaction_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to update transaction {}", transaction_id))?
            .ok_or(TransactionNotFound(transaction_id))?;
        Ok(transaction_entry.into())
    }

    #[instrument(skip(self))]
    async fn delete_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let sql = format!(
            "DELETE FROM transactions WHERE id = ? RETURNING {}",
            TRANSACTION_COLUMNS
        );
        let transaction_entry: TransactionEntry = query_as(&sql)
            .bind(transaction_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to delete transaction {}", transaction_id))?
            .ok_or(TransactionNotFound(transaction_id))?;
        Ok(transaction_entry.into())
    }

    #[instrument(skip(self))]
    async fn get_type_totals(&self) -> Result<Vec<TypeTotal>, TransactionRepoError> {
        // TOTAL is SUM that always yields a float
        let type_totals: Vec<TypeTotalEntry> =
            query_as("SELECT type, TOTAL(amount) AS total FROM transactions GROUP BY type")
                .fetch_all(&self.pool)
                .await
                .context("Unable to get totals by type")?;
        Ok(type_totals.into_iter().map(|t| t.into()).collect())
    }
}

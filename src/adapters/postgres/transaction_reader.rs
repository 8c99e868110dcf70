//! PostgreSQL implementation of TransactionReader.
//!
//! Read side of the purchase history, newest first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::enrollment::Transaction;
use crate::domain::foundation::{
    Amount, CourseId, DomainError, ErrorCode, OrderId, PaymentProviderKind, Timestamp,
    TransactionId, UserId,
};
use crate::ports::TransactionReader;

/// PostgreSQL implementation of the TransactionReader port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
pub struct PostgresTransactionReader {
    pool: PgPool,
}

impl PostgresTransactionReader {
    /// Creates a new PostgresTransactionReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a transaction.
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: Uuid,
    user_id: String,
    course_id: String,
    order_id: String,
    amount: Decimal,
    payment_provider: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = DomainError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: TransactionId::from_uuid(row.id),
            user_id: UserId::new(row.user_id)
                .map_err(|e| invalid_column("user_id", e))?,
            course_id: CourseId::new(row.course_id)
                .map_err(|e| invalid_column("course_id", e))?,
            order_id: OrderId::new(row.order_id)
                .map_err(|e| invalid_column("order_id", e))?,
            amount: Amount::new(row.amount).map_err(|e| invalid_column("amount", e))?,
            provider: parse_provider(&row.payment_provider)?,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn parse_provider(s: &str) -> Result<PaymentProviderKind, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid payment_provider value: {}", s),
        )
    })
}

fn invalid_column(column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid {} value: {}", column, err),
    )
}

#[async_trait]
impl TransactionReader for PostgresTransactionReader {
    async fn list(&self, user_id: Option<&UserId>) -> Result<Vec<Transaction>, DomainError> {
        let rows: Vec<TransactionRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, course_id, order_id, amount, payment_provider, created_at
            FROM transactions
            WHERE $1::text IS NULL OR user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.map(|u| u.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list transactions: {}", e),
            )
        })?;

        rows.into_iter().map(Transaction::try_from).collect()
    }
}

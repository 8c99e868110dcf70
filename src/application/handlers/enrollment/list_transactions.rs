//! ListTransactionsHandler - Query handler for purchase history.

use std::sync::Arc;

use crate::domain::checkout::CheckoutError;
use crate::domain::enrollment::Transaction;
use crate::domain::foundation::UserId;
use crate::ports::TransactionReader;

/// Query for purchase records.
#[derive(Debug, Clone)]
pub struct ListTransactionsQuery {
    /// When set, only this user's purchases are returned.
    pub user_id: Option<UserId>,
}

/// Result of a transaction listing.
#[derive(Debug, Clone)]
pub struct ListTransactionsResult {
    /// Matching purchases, newest first.
    pub transactions: Vec<Transaction>,
}

/// Handler for listing purchases.
pub struct ListTransactionsHandler {
    reader: Arc<dyn TransactionReader>,
}

impl ListTransactionsHandler {
    pub fn new(reader: Arc<dyn TransactionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListTransactionsQuery,
    ) -> Result<ListTransactionsResult, CheckoutError> {
        let transactions = self.reader.list(query.user_id.as_ref()).await?;
        Ok(ListTransactionsResult { transactions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Amount, CourseId, DomainError, OrderId, PaymentProviderKind};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockTransactionReader {
        transactions: Vec<Transaction>,
    }

    impl MockTransactionReader {
        fn with_transactions(transactions: Vec<Transaction>) -> Self {
            Self { transactions }
        }
    }

    #[async_trait]
    impl TransactionReader for MockTransactionReader {
        async fn list(&self, user_id: Option<&UserId>) -> Result<Vec<Transaction>, DomainError> {
            Ok(self
                .transactions
                .iter()
                .filter(|t| user_id.map_or(true, |u| &t.user_id == u))
                .cloned()
                .collect())
        }
    }

    fn purchase(user: &str, course: &str) -> Transaction {
        Transaction::record(
            UserId::new(user).unwrap(),
            CourseId::new(course).unwrap(),
            OrderId::new(format!("O-{}-{}", user, course)).unwrap(),
            Amount::new(dec!(19.99)).unwrap(),
            PaymentProviderKind::Paypal,
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn lists_all_without_filter() {
        let reader = Arc::new(MockTransactionReader::with_transactions(vec![
            purchase("u1", "c1"),
            purchase("u2", "c1"),
            purchase("u1", "c2"),
        ]));

        let handler = ListTransactionsHandler::new(reader);
        let result = handler
            .handle(ListTransactionsQuery { user_id: None })
            .await
            .unwrap();

        assert_eq!(result.transactions.len(), 3);
    }

    #[tokio::test]
    async fn filters_by_user() {
        let reader = Arc::new(MockTransactionReader::with_transactions(vec![
            purchase("u1", "c1"),
            purchase("u2", "c1"),
            purchase("u1", "c2"),
        ]));

        let handler = ListTransactionsHandler::new(reader);
        let result = handler
            .handle(ListTransactionsQuery {
                user_id: Some(UserId::new("u1").unwrap()),
            })
            .await
            .unwrap();

        assert_eq!(result.transactions.len(), 2);
        assert!(result.transactions.iter().all(|t| t.user_id.as_str() == "u1"));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let reader = Arc::new(MockTransactionReader::with_transactions(vec![]));

        let handler = ListTransactionsHandler::new(reader);
        let result = handler
            .handle(ListTransactionsQuery { user_id: None })
            .await
            .unwrap();

        assert!(result.transactions.is_empty());
    }
}

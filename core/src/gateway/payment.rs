//! Payment gateway trait and its mock implementation.
//!
//! The real collaborator is an external payment processor that debits the
//! purchasing account. The mock shipped here simulates that processor for
//! development and demos.

use super::GatewayResult;
use crate::types::{AccountId, Money};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Payment gateway trait
///
/// Abstraction over the external payment processor. Implementations are
/// expected to debit the given account for exactly the given amount.
pub trait PaymentGateway: Send + Sync {
    /// Charge the account for the given amount
    ///
    /// # Errors
    ///
    /// Returns error if the payment is refused or the processor is unreachable
    fn make_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<()>> + Send>>;
}

/// Mock payment gateway (always succeeds for development)
///
/// This gateway simulates successful payment processing for all requests.
/// In production, replace with a real payment processor integration.
#[derive(Clone, Debug)]
pub struct MockPaymentGateway {
    latency: Duration,
}

impl MockPaymentGateway {
    /// Default simulated processing delay.
    const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

    /// Creates a new mock payment gateway
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Creates a mock payment gateway with a specific simulated delay
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn PaymentGateway> {
        Arc::new(Self::new())
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentGateway for MockPaymentGateway {
    fn make_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<()>> + Send>> {
        let latency = self.latency;
        Box::pin(async move {
            // Simulate network delay
            tokio::time::sleep(latency).await;

            // Generate mock transaction ID
            let transaction_id = format!("mock_txn_{}", uuid::Uuid::new_v4());

            tracing::info!(
                account_id = %account_id,
                amount = %amount,
                transaction_id = %transaction_id,
                "Mock payment processed successfully"
            );

            Ok(())
        })
    }
}

//! Seat reservation gateway trait and its mock implementation.
//!
//! The real collaborator is an external seat booking service. The mock
//! shipped here simulates that service for development and demos.

use super::GatewayResult;
use crate::types::AccountId;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Seat reservation gateway trait
///
/// Abstraction over the external seat booking service. Implementations are
/// expected to reserve exactly the given number of seats for the account.
pub trait SeatReservationGateway: Send + Sync {
    /// Reserve seats for the account
    ///
    /// # Errors
    ///
    /// Returns error if the booking is refused or the service is unreachable
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<()>> + Send>>;
}

/// Mock seat reservation gateway (always succeeds for development)
///
/// This gateway simulates successful seat booking for all requests.
/// In production, replace with a real seat booking integration.
#[derive(Clone, Debug)]
pub struct MockSeatReservationGateway {
    latency: Duration,
}

impl MockSeatReservationGateway {
    /// Default simulated booking delay.
    const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

    /// Creates a new mock seat reservation gateway
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Creates a mock seat reservation gateway with a specific simulated delay
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationGateway> {
        Arc::new(Self::new())
    }
}

impl Default for MockSeatReservationGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatReservationGateway for MockSeatReservationGateway {
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<()>> + Send>> {
        let latency = self.latency;
        Box::pin(async move {
            // Simulate network delay
            tokio::time::sleep(latency).await;

            // Generate mock booking reference
            let booking_reference = format!("mock_booking_{}", uuid::Uuid::new_v4());

            tracing::info!(
                account_id = %account_id,
                seat_count,
                booking_reference = %booking_reference,
                "Mock seat reservation processed successfully"
            );

            Ok(())
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_reservation_success() {
        let gateway = MockSeatReservationGateway::with_latency(Duration::ZERO);

        let result = gateway.reserve_seats(AccountId::new(42), 5).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_reservation_accepts_zero_seats() {
        let gateway = MockSeatReservationGateway::with_latency(Duration::ZERO);

        let result = gateway.reserve_seats(AccountId::new(1), 0).await;

        assert!(result.is_ok());
    }
}

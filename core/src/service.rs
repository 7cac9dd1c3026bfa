//! The purchase service: validation first, then payment, then seats.
//!
//! This is the imperative shell around the pure rules in [`crate::order`].
//! It owns no state of its own; every call validates the incoming request
//! from scratch and, only when every rule passes, drives the two downstream
//! gateways in a fixed sequence.

use crate::error::{PurchaseError, Result};
use crate::gateway::{PaymentGateway, SeatReservationGateway};
use crate::order::PurchaseOrder;
use crate::types::{AccountId, TicketRequest};
use std::sync::Arc;

/// Coordinates ticket purchases against the downstream gateways.
///
/// The service holds its collaborators behind trait objects, so production
/// integrations, the shipped mocks, and the recording doubles from
/// `boxoffice-testing` are all interchangeable.
#[derive(Clone)]
pub struct PurchaseService {
    payment_gateway: Arc<dyn PaymentGateway>,
    seating_gateway: Arc<dyn SeatReservationGateway>,
}

impl PurchaseService {
    /// Creates a new `PurchaseService` with the given gateways
    #[must_use]
    pub fn new(
        payment_gateway: Arc<dyn PaymentGateway>,
        seating_gateway: Arc<dyn SeatReservationGateway>,
    ) -> Self {
        Self {
            payment_gateway,
            seating_gateway,
        }
    }

    /// Purchases tickets for the account.
    ///
    /// Validates the request, charges the account for the priced amount, and
    /// reserves one seat per adult and child ticket. Payment always precedes
    /// seat reservation, and each gateway is called at most once. A request
    /// that fails validation reaches neither gateway.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::Invalid`] if the request violates a purchase rule;
    ///   no gateway was called
    /// - [`PurchaseError::Payment`] if the payment gateway call failed; no
    ///   seats were reserved
    /// - [`PurchaseError::SeatReservation`] if the seat reservation call
    ///   failed after payment succeeded
    pub async fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<()> {
        let order = PurchaseOrder::new(account_id, requests.to_vec());

        let totals = order.validate().map_err(|error| {
            tracing::warn!(
                account_id = %account_id,
                %error,
                "purchase request rejected"
            );
            PurchaseError::Invalid(error)
        })?;

        self.payment_gateway
            .make_payment(account_id, totals.amount_to_pay)
            .await
            .map_err(PurchaseError::Payment)?;

        self.seating_gateway
            .reserve_seats(account_id, totals.seats_to_reserve)
            .await
            .map_err(PurchaseError::SeatReservation)?;

        tracing::info!(
            account_id = %account_id,
            amount = %totals.amount_to_pay,
            seats = totals.seats_to_reserve,
            "purchase completed"
        );

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::InvalidPurchase;
    use crate::gateway::{MockPaymentGateway, MockSeatReservationGateway};
    use crate::types::TicketType;
    use std::time::Duration;

    fn service() -> PurchaseService {
        PurchaseService::new(
            Arc::new(MockPaymentGateway::with_latency(Duration::ZERO)),
            Arc::new(MockSeatReservationGateway::with_latency(Duration::ZERO)),
        )
    }

    #[tokio::test]
    async fn test_valid_purchase_succeeds() {
        let result = service()
            .purchase_tickets(
                AccountId::new(1),
                &[
                    TicketRequest::new(TicketType::Adult, 2),
                    TicketRequest::new(TicketType::Child, 1),
                ],
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected() {
        let result = service()
            .purchase_tickets(AccountId::new(1), &[TicketRequest::new(TicketType::Child, 1)])
            .await;

        assert_eq!(
            result,
            Err(PurchaseError::Invalid(InvalidPurchase::NoAccompanyingAdult))
        );
    }

    #[tokio::test]
    async fn test_rejection_reports_the_account() {
        let result = service()
            .purchase_tickets(AccountId::new(0), &[TicketRequest::new(TicketType::Adult, 1)])
            .await;

        assert!(result.unwrap_err().is_rejection());
    }
}

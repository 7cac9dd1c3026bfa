//! End-to-end purchase flow tests over the public service API.
//!
//! Exercises the service with recording and failing gateway doubles to pin
//! down the downstream contract: exact arguments, payment before seats,
//! each gateway called at most once, and nothing called on rejection.

use boxoffice_core::{
    AccountId, GatewayError, InvalidPurchase, Money, PurchaseError, PurchaseService,
    TicketRequest, TicketType,
};
use boxoffice_testing::{
    CallJournal, FailingPaymentGateway, FailingSeatReservationGateway, GatewayCall,
    RecordingPaymentGateway, RecordingSeatReservationGateway,
};

fn recording_service(journal: &CallJournal) -> PurchaseService {
    PurchaseService::new(
        RecordingPaymentGateway::shared(journal),
        RecordingSeatReservationGateway::shared(journal),
    )
}

fn line(ticket_type: TicketType, quantity: u32) -> TicketRequest {
    TicketRequest::new(ticket_type, quantity)
}

#[tokio::test]
async fn test_single_adult_charges_and_reserves_once() {
    let journal = CallJournal::new();
    let service = recording_service(&journal);

    let result = service
        .purchase_tickets(AccountId::new(1), &[line(TicketType::Adult, 1)])
        .await;

    assert!(result.is_ok());
    assert_eq!(
        journal.calls(),
        vec![
            GatewayCall::Payment {
                account_id: AccountId::new(1),
                amount: Money::from_pounds(20),
            },
            GatewayCall::SeatReservation {
                account_id: AccountId::new(1),
                seats: 1,
            },
        ]
    );
}

#[tokio::test]
async fn test_family_purchase_passes_exact_totals_downstream() {
    let journal = CallJournal::new();
    let service = recording_service(&journal);

    let result = service
        .purchase_tickets(
            AccountId::new(42),
            &[
                line(TicketType::Adult, 3),
                line(TicketType::Child, 2),
                line(TicketType::Infant, 1),
            ],
        )
        .await;

    assert!(result.is_ok());
    // Payment first, then seats; the infant is neither charged nor seated
    assert_eq!(
        journal.calls(),
        vec![
            GatewayCall::Payment {
                account_id: AccountId::new(42),
                amount: Money::from_pounds(80),
            },
            GatewayCall::SeatReservation {
                account_id: AccountId::new(42),
                seats: 5,
            },
        ]
    );
}

#[tokio::test]
async fn test_each_gateway_is_called_exactly_once() {
    let journal = CallJournal::new();
    let service = recording_service(&journal);

    let result = service
        .purchase_tickets(
            AccountId::new(5),
            &[line(TicketType::Adult, 14), line(TicketType::Child, 6)],
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(journal.len(), 2);
    assert!(matches!(journal.calls()[0], GatewayCall::Payment { .. }));
    assert!(matches!(
        journal.calls()[1],
        GatewayCall::SeatReservation { .. }
    ));
}

#[tokio::test]
async fn test_child_without_adult_touches_no_gateway() {
    let journal = CallJournal::new();
    let service = recording_service(&journal);

    let result = service
        .purchase_tickets(AccountId::new(1), &[line(TicketType::Child, 1)])
        .await;

    assert_eq!(
        result,
        Err(PurchaseError::Invalid(InvalidPurchase::NoAccompanyingAdult))
    );
    assert!(journal.is_empty());
}

#[tokio::test]
async fn test_infant_without_adult_touches_no_gateway() {
    let journal = CallJournal::new();
    let service = recording_service(&journal);

    let result = service
        .purchase_tickets(AccountId::new(1), &[line(TicketType::Infant, 1)])
        .await;

    assert_eq!(
        result,
        Err(PurchaseError::Invalid(InvalidPurchase::NoAccompanyingAdult))
    );
    assert!(journal.is_empty());
}

#[tokio::test]
async fn test_invalid_account_touches_no_gateway() {
    let journal = CallJournal::new();
    let service = recording_service(&journal);

    let result = service
        .purchase_tickets(AccountId::new(0), &[line(TicketType::Adult, 1)])
        .await;

    assert_eq!(
        result,
        Err(PurchaseError::Invalid(InvalidPurchase::InvalidAccount {
            account_id: AccountId::new(0),
        }))
    );
    assert!(journal.is_empty());
}

#[tokio::test]
async fn test_oversize_request_touches_no_gateway() {
    let journal = CallJournal::new();
    let service = recording_service(&journal);

    let result = service
        .purchase_tickets(
            AccountId::new(1),
            &[line(TicketType::Adult, 20), line(TicketType::Adult, 1)],
        )
        .await;

    assert_eq!(
        result,
        Err(PurchaseError::Invalid(
            InvalidPurchase::TicketCountOutOfRange { requested: 21 }
        ))
    );
    assert!(journal.is_empty());
}

#[tokio::test]
async fn test_empty_request_touches_no_gateway() {
    let journal = CallJournal::new();
    let service = recording_service(&journal);

    let result = service.purchase_tickets(AccountId::new(1), &[]).await;

    assert_eq!(
        result,
        Err(PurchaseError::Invalid(
            InvalidPurchase::TicketCountOutOfRange { requested: 0 }
        ))
    );
    assert!(journal.is_empty());
}

#[tokio::test]
async fn test_failed_payment_skips_seat_reservation() {
    let journal = CallJournal::new();
    let service = PurchaseService::new(
        FailingPaymentGateway::shared(),
        RecordingSeatReservationGateway::shared(&journal),
    );

    let result = service
        .purchase_tickets(AccountId::new(1), &[line(TicketType::Adult, 2)])
        .await;

    assert_eq!(
        result,
        Err(PurchaseError::Payment(GatewayError::Rejected {
            reason: "card declined".to_string(),
        }))
    );
    assert!(journal.is_empty());
}

#[tokio::test]
async fn test_failed_reservation_still_reports_the_payment_made() {
    let journal = CallJournal::new();
    let service = PurchaseService::new(
        RecordingPaymentGateway::shared(&journal),
        FailingSeatReservationGateway::shared(),
    );

    let result = service
        .purchase_tickets(AccountId::new(8), &[line(TicketType::Adult, 1)])
        .await;

    assert_eq!(
        result,
        Err(PurchaseError::SeatReservation(GatewayError::Rejected {
            reason: "no seats available".to_string(),
        }))
    );
    // Payment had already gone through by the time the reservation failed
    assert_eq!(
        journal.calls(),
        vec![GatewayCall::Payment {
            account_id: AccountId::new(8),
            amount: Money::from_pounds(20),
        }]
    );
}

#[tokio::test]
async fn test_transient_payment_failure_propagates_as_payment_error() {
    let journal = CallJournal::new();
    let service = PurchaseService::new(
        std::sync::Arc::new(FailingPaymentGateway::with_error(GatewayError::Timeout)),
        RecordingSeatReservationGateway::shared(&journal),
    );

    let result = service
        .purchase_tickets(AccountId::new(1), &[line(TicketType::Adult, 1)])
        .await;

    assert_eq!(result, Err(PurchaseError::Payment(GatewayError::Timeout)));
    assert!(journal.is_empty());
}

#[tokio::test]
async fn test_zero_quantity_adult_line_still_accompanies() {
    let journal = CallJournal::new();
    let service = recording_service(&journal);

    let result = service
        .purchase_tickets(
            AccountId::new(9),
            &[line(TicketType::Adult, 0), line(TicketType::Child, 2)],
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(
        journal.calls(),
        vec![
            GatewayCall::Payment {
                account_id: AccountId::new(9),
                amount: Money::from_pounds(20),
            },
            GatewayCall::SeatReservation {
                account_id: AccountId::new(9),
                seats: 2,
            },
        ]
    );
}

#[tokio::test]
async fn test_infants_are_not_seated() {
    let journal = CallJournal::new();
    let service = recording_service(&journal);

    let result = service
        .purchase_tickets(
            AccountId::new(3),
            &[line(TicketType::Adult, 2), line(TicketType::Infant, 2)],
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(
        journal.calls(),
        vec![
            GatewayCall::Payment {
                account_id: AccountId::new(3),
                amount: Money::from_pounds(40),
            },
            GatewayCall::SeatReservation {
                account_id: AccountId::new(3),
                seats: 2,
            },
        ]
    );
}

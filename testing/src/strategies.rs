//! Property-based testing strategies for the purchase domain.
//!
//! Custom proptest strategies for domain types, used by the purchase rule
//! property tests in `boxoffice-core`.

use boxoffice_core::{TicketRequest, TicketType};
use proptest::prelude::*;

/// Strategy producing any ticket category.
pub fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

/// Strategy producing a single ticket line with a quantity up to `max_quantity`.
pub fn ticket_request(max_quantity: u32) -> impl Strategy<Value = TicketRequest> {
    (ticket_type(), 0..=max_quantity)
        .prop_map(|(ticket_type, quantity)| TicketRequest::new(ticket_type, quantity))
}

/// Strategy producing an arbitrary batch of ticket lines.
///
/// Deliberately spans the whole input space: batches may be empty, exceed
/// the purchase limits, or lack an adult line, so validation outcomes vary.
pub fn request_batch() -> impl Strategy<Value = Vec<TicketRequest>> {
    prop::collection::vec(ticket_request(25), 0..6)
}

/// Strategy producing batches that a valid account can always purchase.
///
/// Every batch carries an adult line with at least one ticket and holds at
/// most 15 tickets in total, leaving room for a test to append a few more
/// lines and still stay within the purchase limits.
pub fn accompanied_order_requests() -> impl Strategy<Value = Vec<TicketRequest>> {
    (1u32..=5, 0u32..=5, 0u32..=5).prop_map(|(adults, children, infants)| {
        vec![
            TicketRequest::new(TicketType::Adult, adults),
            TicketRequest::new(TicketType::Child, children),
            TicketRequest::new(TicketType::Infant, infants),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_core::{AccountId, PurchaseOrder};

    proptest! {
        #[test]
        fn request_batches_stay_within_generator_bounds(requests in request_batch()) {
            prop_assert!(requests.len() < 6);
            for request in &requests {
                prop_assert!(request.quantity <= 25);
            }
        }

        #[test]
        fn accompanied_batches_always_validate(requests in accompanied_order_requests()) {
            let order = PurchaseOrder::new(AccountId::new(1), requests);
            prop_assert!(order.total_tickets() <= 15);
            prop_assert!(order.validate().is_ok());
        }
    }
}

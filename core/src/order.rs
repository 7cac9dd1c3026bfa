//! Purchase orders and the rules that accept or refuse them.
//!
//! A [`PurchaseOrder`] is the pure heart of the service: it carries the
//! purchasing account and the requested ticket lines, and [`PurchaseOrder::validate`]
//! applies every business rule and prices the order without touching any
//! external system. The async shell in [`crate::service`] only ever acts on
//! the totals this module computes.

use crate::constants::limits;
use crate::error::InvalidPurchase;
use crate::types::{AccountId, Money, OrderTotals, TicketRequest, TicketType};
use serde::{Deserialize, Serialize};

/// A ticket purchase request: one account buying a batch of ticket lines.
///
/// Orders are plain data. Building one performs no validation; call
/// [`PurchaseOrder::validate`] to apply the purchase rules and obtain the
/// totals for the downstream gateways.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Account paying for the order
    pub account_id: AccountId,
    /// Requested ticket lines, in the order the caller supplied them
    pub requests: Vec<TicketRequest>,
}

impl PurchaseOrder {
    /// Creates a new `PurchaseOrder`
    #[must_use]
    pub const fn new(account_id: AccountId, requests: Vec<TicketRequest>) -> Self {
        Self {
            account_id,
            requests,
        }
    }

    /// Returns the total number of tickets across all lines, infants included
    #[must_use]
    pub fn total_tickets(&self) -> u64 {
        self.requests
            .iter()
            .map(|request| u64::from(request.quantity))
            .sum()
    }

    /// Checks whether the order includes an adult ticket line.
    ///
    /// Line presence is what satisfies the accompaniment rule; the line's
    /// quantity is not consulted.
    #[must_use]
    pub fn includes_adult(&self) -> bool {
        self.requests
            .iter()
            .any(|request| request.ticket_type == TicketType::Adult)
    }

    /// Applies every purchase rule and prices the order.
    ///
    /// Rules are applied in a fixed sequence and the first violation wins:
    /// the account must be valid, child and infant tickets need an adult
    /// ticket on the order, and the aggregate ticket count must stay within
    /// the purchase limits.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchase`] naming the first rule the order violated.
    pub fn validate(&self) -> Result<OrderTotals, InvalidPurchase> {
        self.validate_account()?;
        self.validate_adult_accompaniment()?;
        self.validate_ticket_count()?;
        Ok(self.totals())
    }

    fn validate_account(&self) -> Result<(), InvalidPurchase> {
        if self.account_id.is_valid() {
            Ok(())
        } else {
            Err(InvalidPurchase::InvalidAccount {
                account_id: self.account_id,
            })
        }
    }

    fn validate_adult_accompaniment(&self) -> Result<(), InvalidPurchase> {
        if self.includes_child_or_infant() && !self.includes_adult() {
            Err(InvalidPurchase::NoAccompanyingAdult)
        } else {
            Ok(())
        }
    }

    fn validate_ticket_count(&self) -> Result<(), InvalidPurchase> {
        let requested = self.total_tickets();
        if (limits::MIN_TICKETS_PER_PURCHASE..=limits::MAX_TICKETS_PER_PURCHASE)
            .contains(&requested)
        {
            Ok(())
        } else {
            Err(InvalidPurchase::TicketCountOutOfRange { requested })
        }
    }

    fn includes_child_or_infant(&self) -> bool {
        self.requests
            .iter()
            .any(|request| matches!(request.ticket_type, TicketType::Child | TicketType::Infant))
    }

    // Callers must have applied the count rule first; the seat sum here
    // assumes the aggregate quantity fits the purchase limits.
    fn totals(&self) -> OrderTotals {
        let mut seats_to_reserve = 0;
        let mut amount_to_pay = Money::from_pence(0);
        for request in &self.requests {
            seats_to_reserve += request.seats();
            amount_to_pay = amount_to_pay.add(request.cost());
        }
        OrderTotals::new(seats_to_reserve, amount_to_pay)
    }
}

//! Purchase policy constants.
//!
//! This module contains the business rule values applied to every purchase
//! request: how many tickets one request may hold, and what each ticket
//! category costs.

/// Bounds on the number of tickets a single purchase request may hold.
pub mod limits {
    /// Maximum number of tickets purchasable in one request, all categories
    /// combined (infants included).
    pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;

    /// Minimum number of tickets purchasable in one request.
    pub const MIN_TICKETS_PER_PURCHASE: u64 = 1;
}

/// Ticket prices, in pence.
pub mod tariff {
    /// Price of an adult ticket.
    pub const ADULT_PRICE_PENCE: u64 = 2000;

    /// Price of a child ticket.
    pub const CHILD_PRICE_PENCE: u64 = 1000;

    /// Price of an infant ticket. Infants sit on an adult's lap for free.
    pub const INFANT_PRICE_PENCE: u64 = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_limits() {
        assert_eq!(limits::MIN_TICKETS_PER_PURCHASE, 1);
        assert_eq!(limits::MAX_TICKETS_PER_PURCHASE, 20);
    }

    #[test]
    fn test_tariff_ordering() {
        // Child tickets are half price and infants are free
        assert_eq!(tariff::CHILD_PRICE_PENCE * 2, tariff::ADULT_PRICE_PENCE);
        assert_eq!(tariff::INFANT_PRICE_PENCE, 0);
    }
}

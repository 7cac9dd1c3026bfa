//! Domain types for the Box Office purchase service.
//!
//! This module contains the value objects shared by the purchase rules and the
//! gateway contracts: account identifiers, the ticket catalogue, money, and
//! the computed totals handed to the downstream gateways.

use crate::constants::tariff;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a purchasing account.
///
/// Accounts are issued elsewhere; this service only receives them. The inner
/// value is signed so that whatever a caller sends can be represented and
/// judged, rather than rejected at the type boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an `AccountId` from a raw value
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw account value
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Checks whether this account is valid (strictly positive)
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (pence-based to avoid floating point errors)
// ============================================================================

/// Represents money in pence to avoid floating-point arithmetic errors
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates a `Money` value from pence
    #[must_use]
    pub const fn from_pence(pence: u64) -> Self {
        Self(pence)
    }

    /// Creates a `Money` value from whole pounds
    ///
    /// # Panics
    ///
    /// Panics if the conversion would overflow (pounds * 100 > `u64::MAX`).
    /// Use `checked_from_pounds` for non-panicking conversion.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn from_pounds(pounds: u64) -> Self {
        match pounds.checked_mul(100) {
            Some(pence) => Self(pence),
            None => panic!("Money::from_pounds overflow"),
        }
    }

    /// Creates a `Money` value from whole pounds with overflow checking
    #[must_use]
    pub const fn checked_from_pounds(pounds: u64) -> Option<Self> {
        match pounds.checked_mul(100) {
            Some(pence) => Some(Self(pence)),
            None => None,
        }
    }

    /// Returns the amount in pence
    #[must_use]
    pub const fn pence(&self) -> u64 {
        self.0
    }

    /// Returns the amount in whole pounds (rounded down)
    #[must_use]
    pub const fn pounds(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Adds two money amounts
    ///
    /// # Panics
    ///
    /// Panics if the addition would overflow.
    /// Use `checked_add` for non-panicking addition.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn add(self, other: Self) -> Self {
        match self.checked_add(other) {
            Some(result) => result,
            None => panic!("Money::add overflow"),
        }
    }

    /// Multiplies money by a quantity with overflow checking
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity
    ///
    /// # Panics
    ///
    /// Panics if the multiplication would overflow.
    /// Use `checked_multiply` for non-panicking multiplication.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn multiply(self, quantity: u32) -> Self {
        match self.checked_multiply(quantity) {
            Some(result) => result,
            None => panic!("Money::multiply overflow"),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}.{:02}", self.pounds(), self.0 % 100)
    }
}

// ============================================================================
// Ticket Catalogue
// ============================================================================

/// The three ticket categories sold by the box office
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    /// Full-price ticket with a seat
    Adult,
    /// Reduced-price ticket with a seat
    Child,
    /// Free ticket; the infant sits on an adult's lap
    Infant,
}

impl TicketType {
    /// Returns the unit price for this ticket category
    #[must_use]
    pub const fn unit_price(self) -> Money {
        match self {
            Self::Adult => Money::from_pence(tariff::ADULT_PRICE_PENCE),
            Self::Child => Money::from_pence(tariff::CHILD_PRICE_PENCE),
            Self::Infant => Money::from_pence(tariff::INFANT_PRICE_PENCE),
        }
    }

    /// Checks whether this ticket category occupies a seat of its own
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adult => write!(f, "adult"),
            Self::Child => write!(f, "child"),
            Self::Infant => write!(f, "infant"),
        }
    }
}

/// One line of a purchase request: a ticket category and how many of it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    /// Ticket category requested
    pub ticket_type: TicketType,
    /// Number of tickets of this category
    pub quantity: u32,
}

impl TicketRequest {
    /// Creates a new `TicketRequest`
    #[must_use]
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Returns the number of seats this line occupies
    #[must_use]
    pub const fn seats(&self) -> u32 {
        if self.ticket_type.occupies_seat() {
            self.quantity
        } else {
            0
        }
    }

    /// Returns the cost of this line
    #[must_use]
    pub const fn cost(&self) -> Money {
        self.ticket_type.unit_price().multiply(self.quantity)
    }
}

impl fmt::Display for TicketRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.quantity, self.ticket_type)
    }
}

// ============================================================================
// Order Totals
// ============================================================================

/// Totals computed from a validated purchase order.
///
/// These are the only two numbers the downstream gateways ever see: infants
/// are already excluded from the seat count and contribute nothing to the
/// amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Seats to reserve (adult and child tickets only)
    pub seats_to_reserve: u32,
    /// Amount to charge for the whole order
    pub amount_to_pay: Money,
}

impl OrderTotals {
    /// Creates a new `OrderTotals`
    #[must_use]
    pub const fn new(seats_to_reserve: u32, amount_to_pay: Money) -> Self {
        Self {
            seats_to_reserve,
            amount_to_pay,
        }
    }
}

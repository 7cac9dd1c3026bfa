//! Error types for ticket purchase operations.

use crate::gateway::GatewayError;
use crate::types::AccountId;
use thiserror::Error;

/// Result type alias for purchase operations.
pub type Result<T> = std::result::Result<T, PurchaseError>;

/// A purchase request that failed business validation.
///
/// Each variant names the rule that was violated so callers can give precise
/// feedback, but they all mean the same thing: the request was refused before
/// any money moved or any seat was touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPurchase {
    /// The purchasing account id is not strictly positive.
    #[error("account {account_id} is not a valid purchasing account")]
    InvalidAccount {
        /// The offending account id
        account_id: AccountId,
    },

    /// Child or infant tickets were requested without any adult ticket.
    #[error("child and infant tickets cannot be purchased without an adult ticket")]
    NoAccompanyingAdult,

    /// The aggregate ticket count is outside the allowed range.
    #[error("cannot purchase {requested} tickets in one request (allowed: 1 to 20)")]
    TicketCountOutOfRange {
        /// Total tickets requested across all lines
        requested: u64,
    },
}

/// Comprehensive error type for the purchase service.
///
/// Distinguishes business rejections (the request itself was refused) from
/// downstream failures (a gateway call failed after validation passed).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// The request violated a purchase rule; nothing was charged or reserved.
    #[error("invalid purchase request: {0}")]
    Invalid(#[from] InvalidPurchase),

    /// The payment gateway call failed; no seats were reserved.
    #[error("payment failed: {0}")]
    Payment(#[source] GatewayError),

    /// The seat reservation gateway call failed after payment succeeded.
    #[error("seat reservation failed: {0}")]
    SeatReservation(#[source] GatewayError),
}

impl PurchaseError {
    /// Returns `true` if this error is a business rejection of the request.
    ///
    /// # Examples
    ///
    /// ```
    /// # use boxoffice_core::{GatewayError, InvalidPurchase, PurchaseError};
    /// assert!(PurchaseError::Invalid(InvalidPurchase::NoAccompanyingAdult).is_rejection());
    /// assert!(!PurchaseError::Payment(GatewayError::Timeout).is_rejection());
    /// ```
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

//! Gateway contracts for the purchase flow's external collaborators.
//!
//! The box office never moves money or allocates seats itself; it delegates
//! both to downstream services behind these traits. This enables:
//!
//! - **Testing**: recording and failing doubles (see `boxoffice-testing`)
//! - **Production**: real payment and seat booking integrations
//! - **Development**: the mock gateways shipped alongside the traits
//!
//! Gateways are **interfaces**, not implementations. The purchase service
//! depends on these traits only and receives concrete implementations at
//! construction time.

use thiserror::Error;

pub mod payment;
pub mod seating;

// Re-export gateway traits and their mock implementations
pub use payment::{MockPaymentGateway, PaymentGateway};
pub use seating::{MockSeatReservationGateway, SeatReservationGateway};

/// Result type alias for gateway calls.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Error returned by a downstream gateway call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The gateway understood the request and refused it.
    #[error("rejected by gateway: {reason}")]
    Rejected {
        /// Reason given by the gateway
        reason: String,
    },

    /// The gateway did not answer in time.
    #[error("gateway timed out")]
    Timeout,

    /// The gateway could not be reached.
    #[error("gateway unavailable: {message}")]
    Unavailable {
        /// Transport-level detail
        message: String,
    },
}

impl GatewayError {
    /// Returns `true` if retrying the same call later could succeed.
    ///
    /// Rejections are final; timeouts and outages are transient.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(GatewayError::Timeout.is_transient());
        assert!(
            GatewayError::Unavailable {
                message: "connection refused".to_string(),
            }
            .is_transient()
        );
        assert!(
            !GatewayError::Rejected {
                reason: "card declined".to_string(),
            }
            .is_transient()
        );
    }

    #[test]
    fn test_error_display() {
        let error = GatewayError::Rejected {
            reason: "card declined".to_string(),
        };
        assert_eq!(error.to_string(), "rejected by gateway: card declined");
        assert_eq!(GatewayError::Timeout.to_string(), "gateway timed out");
    }
}

//! Gateway doubles for exercising the purchase flow without real collaborators.
//!
//! Provides fast, deterministic test infrastructure for the purchase service:
//! - [`CallJournal`]: shared, ordered record of every gateway call
//! - [`RecordingPaymentGateway`] / [`RecordingSeatReservationGateway`]: succeed and record
//! - [`FailingPaymentGateway`] / [`FailingSeatReservationGateway`]: fail with a chosen error

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity

use boxoffice_core::{
    AccountId, GatewayError, GatewayResult, Money, PaymentGateway, SeatReservationGateway,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};

/// One observed downstream call, with the exact arguments the service passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayCall {
    /// The payment gateway was asked to charge an account.
    Payment {
        /// Account that was charged
        account_id: AccountId,
        /// Amount that was charged
        amount: Money,
    },
    /// The seat reservation gateway was asked to reserve seats.
    SeatReservation {
        /// Account the seats were reserved for
        account_id: AccountId,
        /// Number of seats reserved
        seats: u32,
    },
}

/// Shared, ordered journal of gateway calls.
///
/// Hand clones of one journal to every recording gateway given to the
/// service; all clones share the same underlying record, so the journal
/// preserves ordering across gateways. This is what lets tests assert that
/// payment happened before seat reservation, and that each happened once.
///
/// # Example
///
/// ```
/// use boxoffice_testing::{CallJournal, RecordingPaymentGateway};
/// use boxoffice_core::{AccountId, Money, PaymentGateway};
///
/// # async fn example() {
/// let journal = CallJournal::new();
/// let gateway = RecordingPaymentGateway::new(journal.clone());
///
/// gateway
///     .make_payment(AccountId::new(1), Money::from_pounds(20))
///     .await
///     .unwrap();
/// assert_eq!(journal.len(), 1);
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CallJournal {
    calls: Arc<RwLock<Vec<GatewayCall>>>,
}

impl CallJournal {
    /// Create a new empty journal
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a call to the journal
    pub fn record(&self, call: GatewayCall) {
        self.calls.write().unwrap().push(call);
    }

    /// Get every recorded call, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.read().unwrap().clone()
    }

    /// Get the number of recorded calls
    ///
    /// Useful for assertions in tests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Check if no calls were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.read().unwrap().is_empty()
    }

    /// Clear all recorded calls (for test isolation)
    ///
    /// Useful for resetting state between scenarios without rebuilding the
    /// gateways.
    pub fn clear(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Default for CallJournal {
    fn default() -> Self {
        Self::new()
    }
}

/// Payment gateway double that records every call and succeeds.
#[derive(Clone, Debug)]
pub struct RecordingPaymentGateway {
    journal: CallJournal,
}

impl RecordingPaymentGateway {
    /// Create a recording payment gateway writing into the given journal
    #[must_use]
    pub const fn new(journal: CallJournal) -> Self {
        Self { journal }
    }

    /// Creates an Arc-wrapped instance sharing the given journal
    #[must_use]
    pub fn shared(journal: &CallJournal) -> Arc<dyn PaymentGateway> {
        Arc::new(Self::new(journal.clone()))
    }
}

impl PaymentGateway for RecordingPaymentGateway {
    fn make_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<()>> + Send>> {
        let journal = self.journal.clone();
        Box::pin(async move {
            journal.record(GatewayCall::Payment { account_id, amount });
            Ok(())
        })
    }
}

/// Seat reservation gateway double that records every call and succeeds.
#[derive(Clone, Debug)]
pub struct RecordingSeatReservationGateway {
    journal: CallJournal,
}

impl RecordingSeatReservationGateway {
    /// Create a recording seat reservation gateway writing into the given journal
    #[must_use]
    pub const fn new(journal: CallJournal) -> Self {
        Self { journal }
    }

    /// Creates an Arc-wrapped instance sharing the given journal
    #[must_use]
    pub fn shared(journal: &CallJournal) -> Arc<dyn SeatReservationGateway> {
        Arc::new(Self::new(journal.clone()))
    }
}

impl SeatReservationGateway for RecordingSeatReservationGateway {
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<()>> + Send>> {
        let journal = self.journal.clone();
        Box::pin(async move {
            journal.record(GatewayCall::SeatReservation {
                account_id,
                seats: seat_count,
            });
            Ok(())
        })
    }
}

/// Payment gateway double that always fails with a chosen error.
#[derive(Clone, Debug)]
pub struct FailingPaymentGateway {
    error: GatewayError,
}

impl FailingPaymentGateway {
    /// Create a failing payment gateway that rejects every charge
    #[must_use]
    pub fn new() -> Self {
        Self {
            error: GatewayError::Rejected {
                reason: "card declined".to_string(),
            },
        }
    }

    /// Create a failing payment gateway returning the given error
    #[must_use]
    pub const fn with_error(error: GatewayError) -> Self {
        Self { error }
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn PaymentGateway> {
        Arc::new(Self::new())
    }
}

impl Default for FailingPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentGateway for FailingPaymentGateway {
    fn make_payment(
        &self,
        _account_id: AccountId,
        _amount: Money,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<()>> + Send>> {
        let error = self.error.clone();
        Box::pin(async move { Err(error) })
    }
}

/// Seat reservation gateway double that always fails with a chosen error.
#[derive(Clone, Debug)]
pub struct FailingSeatReservationGateway {
    error: GatewayError,
}

impl FailingSeatReservationGateway {
    /// Create a failing seat reservation gateway that rejects every booking
    #[must_use]
    pub fn new() -> Self {
        Self {
            error: GatewayError::Rejected {
                reason: "no seats available".to_string(),
            },
        }
    }

    /// Create a failing seat reservation gateway returning the given error
    #[must_use]
    pub const fn with_error(error: GatewayError) -> Self {
        Self { error }
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationGateway> {
        Arc::new(Self::new())
    }
}

impl Default for FailingSeatReservationGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatReservationGateway for FailingSeatReservationGateway {
    fn reserve_seats(
        &self,
        _account_id: AccountId,
        _seat_count: u32,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<()>> + Send>> {
        let error = self.error.clone();
        Box::pin(async move { Err(error) })
    }
}

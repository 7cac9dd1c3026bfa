//! # Box Office Testing
//!
//! Testing utilities and doubles for the Box Office purchase service.
//!
//! This crate provides:
//! - Recording gateway doubles that capture the exact downstream calls
//! - Failing gateway doubles for exercising error propagation
//! - Property-based testing strategies for domain types
//!
//! ## Example
//!
//! ```
//! use boxoffice_core::{AccountId, PurchaseService, TicketRequest, TicketType};
//! use boxoffice_testing::{CallJournal, RecordingPaymentGateway, RecordingSeatReservationGateway};
//!
//! # async fn example() -> boxoffice_core::Result<()> {
//! let journal = CallJournal::new();
//! let service = PurchaseService::new(
//!     RecordingPaymentGateway::shared(&journal),
//!     RecordingSeatReservationGateway::shared(&journal),
//! );
//!
//! service
//!     .purchase_tickets(AccountId::new(7), &[TicketRequest::new(TicketType::Adult, 1)])
//!     .await?;
//!
//! assert_eq!(journal.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod gateways;
pub mod strategies;

// Re-export commonly used items
pub use gateways::{
    CallJournal, FailingPaymentGateway, FailingSeatReservationGateway, GatewayCall,
    RecordingPaymentGateway, RecordingSeatReservationGateway,
};

//! # Box Office Core
//!
//! Domain types and purchase rules for the Box Office ticketing service.
//!
//! The service answers one question: may this account buy this batch of
//! tickets, and if so, what should be charged and how many seats reserved?
//! Validation and pricing are pure functions over the order; the only side
//! effects are the two downstream gateway calls made after a request is
//! accepted.
//!
//! ## Purchase rules
//!
//! - The purchasing account id must be strictly positive
//! - Child and infant tickets require an adult ticket on the same order
//! - One request may hold between 1 and 20 tickets, infants included
//! - Infants pay nothing and are allocated no seat
//!
//! ## Architecture
//!
//! Functional core, imperative shell:
//!
//! ```text
//! Request → PurchaseOrder::validate → OrderTotals → payment → seats
//! ```
//!
//! [`PurchaseOrder::validate`] applies every rule and prices the order
//! without any I/O. [`PurchaseService`] wraps it and drives the gateways:
//! payment first, seat reservation second, each exactly once, and neither
//! when validation fails.
//!
//! ## Example: pricing an order
//!
//! ```
//! use boxoffice_core::{AccountId, PurchaseOrder, TicketRequest, TicketType};
//!
//! let order = PurchaseOrder::new(
//!     AccountId::new(42),
//!     vec![
//!         TicketRequest::new(TicketType::Adult, 2),
//!         TicketRequest::new(TicketType::Infant, 1),
//!     ],
//! );
//!
//! let totals = order.validate()?;
//! assert_eq!(totals.seats_to_reserve, 2);
//! assert_eq!(totals.amount_to_pay.pence(), 4000);
//! # Ok::<(), boxoffice_core::InvalidPurchase>(())
//! ```
//!
//! ## Example: a full purchase
//!
//! ```rust,ignore
//! use boxoffice_core::*;
//!
//! let service = PurchaseService::new(
//!     MockPaymentGateway::shared(),
//!     MockSeatReservationGateway::shared(),
//! );
//!
//! service
//!     .purchase_tickets(
//!         AccountId::new(42),
//!         &[TicketRequest::new(TicketType::Adult, 1)],
//!     )
//!     .await?;
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod constants;
pub mod error;
pub mod gateway;
pub mod order;
pub mod service;
pub mod types;

// Re-export main types for convenience
pub use error::{InvalidPurchase, PurchaseError, Result};
pub use gateway::{
    GatewayError, GatewayResult, MockPaymentGateway, MockSeatReservationGateway, PaymentGateway,
    SeatReservationGateway,
};
pub use order::PurchaseOrder;
pub use service::PurchaseService;
pub use types::{AccountId, Money, OrderTotals, TicketRequest, TicketType};

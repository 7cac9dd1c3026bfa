//! Box Office Demo
//!
//! Interactive demonstration of the ticket purchase service showing:
//! - A family purchase priced and booked through the mock gateways
//! - Infants riding free on an adult's lap
//! - Requests refused before any gateway is touched
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin demo
//!
//! # Slow the mock gateways down to watch the call sequence
//! GATEWAY_LATENCY_MS=500 cargo run --bin demo
//! ```

use boxoffice_core::{
    AccountId, MockPaymentGateway, MockSeatReservationGateway, PurchaseService, TicketRequest,
    TicketType,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,boxoffice_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("\n🎫 ============================================");
    println!("   Box Office - Live Demo");
    println!("============================================\n");

    // Gateway latency is configurable to make the call sequence visible
    let latency = std::env::var("GATEWAY_LATENCY_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map_or(Duration::from_millis(100), Duration::from_millis);

    let service = PurchaseService::new(
        Arc::new(MockPaymentGateway::with_latency(latency)),
        Arc::new(MockSeatReservationGateway::with_latency(latency)),
    );

    let account_id = AccountId::new(42);

    // Step 1: a family buys tickets
    println!(
        "1️⃣  Family purchase: 2 adults, 1 child, 1 infant (account {})",
        account_id.value()
    );

    service
        .purchase_tickets(
            account_id,
            &[
                TicketRequest::new(TicketType::Adult, 2),
                TicketRequest::new(TicketType::Child, 1),
                TicketRequest::new(TicketType::Infant, 1),
            ],
        )
        .await?;

    println!("   ✓ Charged £50.00 and reserved 3 seats");
    println!("   ✓ The infant pays nothing and sits on an adult's lap\n");

    // Step 2: a group booking right at the purchase limit
    println!("2️⃣  Group booking at the limit: 20 tickets");

    service
        .purchase_tickets(
            account_id,
            &[
                TicketRequest::new(TicketType::Adult, 14),
                TicketRequest::new(TicketType::Child, 5),
                TicketRequest::new(TicketType::Infant, 1),
            ],
        )
        .await?;

    println!("   ✓ Charged £330.00 and reserved 19 seats\n");

    // Step 3: requests the purchase rules refuse
    println!("3️⃣  Requests the purchase rules refuse:");

    let rejections = [
        (
            "a child ticket with no adult",
            AccountId::new(42),
            vec![TicketRequest::new(TicketType::Child, 1)],
        ),
        (
            "21 tickets in one request",
            AccountId::new(42),
            vec![TicketRequest::new(TicketType::Adult, 21)],
        ),
        (
            "an invalid account id",
            AccountId::new(0),
            vec![TicketRequest::new(TicketType::Adult, 1)],
        ),
    ];

    for (label, account, requests) in rejections {
        match service.purchase_tickets(account, &requests).await {
            Ok(()) => println!("   ✗ {label}: unexpectedly accepted"),
            Err(error) => println!("   ✓ {label}: {error}"),
        }
    }

    println!("\n✨ Demo completed");
    println!("\n📝 What happened:");
    println!("   1. Valid requests were priced, charged, then seated, in that order");
    println!("   2. Infants counted toward the 20-ticket limit but not the bill");
    println!("   3. Refused requests never reached either gateway");

    Ok(())
}

/*
[INPUT]:  PAYEER_ACCOUNT / PAYEER_API_ID / PAYEER_API_SECRET environment variables
[OUTPUT]: Wallet balance and reference data printed to stdout
[POS]:    Examples - read-only wallet and reference queries
[UPDATE]: When adding new read-only endpoints
*/

use payeer_adapter::*;

/// Example: Balance and reference-data queries
///
/// Requires real API credentials in the environment; every call here is
/// read-only.
#[tokio::main]
async fn main() {
    println!("=== Payeer Balance Example ===\n");

    let credentials = match credentials_from_env() {
        Some(c) => c,
        None => {
            eprintln!("Set PAYEER_ACCOUNT, PAYEER_API_ID and PAYEER_API_SECRET to run this example");
            return;
        }
    };

    let client = match PayeerClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    // Wallet balance per currency
    println!("Querying balance...");
    match client.get_balance().await {
        Ok(balance) => println!("✓ Balance: {}", balance),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Deposit conversion rates
    println!("\nQuerying deposit exchange rates...");
    match client.get_exchange_rate(RateKind::Deposit).await {
        Ok(rate) => println!("✓ Rates: {}", rate),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Payment systems available for payouts
    println!("\nQuerying available payment systems...");
    match client.get_pay_systems().await {
        Ok(list) => println!("✓ Pay systems: {}", list),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Balance example complete");
}

fn credentials_from_env() -> Option<Credentials> {
    let account = std::env::var("PAYEER_ACCOUNT").ok()?;
    let api_id = std::env::var("PAYEER_API_ID").ok()?;
    let api_secret = std::env::var("PAYEER_API_SECRET").ok()?;
    Some(Credentials::new(account, api_id, api_secret))
}

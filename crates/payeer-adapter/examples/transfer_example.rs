/*
[INPUT]:  Recipient identifier and transfer amount
[OUTPUT]: Transfer request construction and validation walkthrough
[POS]:    Examples - fund transfer flow
[UPDATE]: When the transfer API changes
*/

use payeer_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: Transferring funds
///
/// Transfers are live mutations, so this example only constructs and
/// validates requests; sending requires real credentials and is left to the
/// reader.
#[tokio::main]
async fn main() {
    println!("=== Payeer Transfer Example ===\n");

    // Recipient validation runs before any network call
    println!("Validating recipients...");
    for candidate in ["P1000000", "someone@example.com", "not-an-account"] {
        match validate_account(candidate) {
            Ok(()) => println!("✓ {} is a valid recipient", candidate),
            Err(e) => println!("✗ {}", e),
        }
    }

    // Example: plain transfer, currencies default to USD
    let transfer = TransferRequest::new(
        Decimal::from_str("10.50").unwrap_or_default(),
        "P1000000",
    );
    println!("\nExample transfer request:");
    println!("  {:?}", transfer);

    // Example: protected transfer with an escrow code
    let mut protected = TransferRequest::new(Decimal::from(5), "someone@example.com");
    protected.cur_out = Currency::Rub;
    protected.comment = Some("invoice 42".to_string());
    protected.protection = Some(Protection {
        period: Some(3),
        code: Some("1234".to_string()),
    });
    println!("\nExample protected transfer request:");
    println!("  {:?}", protected);

    // In production:
    // let client = PayeerClient::new(credentials)?;
    // let envelope = client.transfer(transfer).await?;

    println!("\n✓ Transfer example complete");
}

//! Example: passwordless login against the rental API
//!
//! This example demonstrates how to:
//! 1. Build a client with an in-memory session
//! 2. Request a login OTP by email
//! 3. Verify the OTP, which stores the bearer token in the session
//! 4. Call authenticated endpoints
//!
//! ## Running
//!
//! ```bash
//! export HRENT_EMAIL="you@example.com"
//! # optional, defaults to the production API
//! export HRENT_API_URL="http://localhost:5000/api"
//! cargo run --example otp_login
//! ```

use std::env;
use std::io::{self, Write};
use std::sync::Arc;

use hrent_client::{ApiClient, ClientConfig, Session, SortOrder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let email = env::var("HRENT_EMAIL").map_err(|_| "HRENT_EMAIL environment variable not set")?;
    let config = match env::var("HRENT_API_URL") {
        Ok(url) => ClientConfig::new(url)?,
        Err(_) => ClientConfig::production()?,
    };

    println!("HRENT OTP Login Example");
    println!("=======================\n");
    println!("API: {}\n", config.base_url);

    let session = Arc::new(Session::in_memory());
    let client = ApiClient::new(config, session)?;

    println!("Step 1: Requesting a login code for {email}...");
    let sent = client.send_login_otp(&email).await?;
    println!("  {}\n", sent.message);

    print!("Enter the code from your inbox: ");
    io::stdout().flush()?;
    let mut code = String::new();
    io::stdin().read_line(&mut code)?;
    let code = code.trim();

    if code.is_empty() {
        println!("\nNo code entered. Exiting.");
        return Ok(());
    }

    println!("\nStep 2: Verifying...");
    let auth = client.verify_login_otp(&email, code).await?;
    println!("✓ Logged in as {} ({})", auth.user.full_name(), auth.user.user_type.display_name());
    println!("  User id from token: {:?}\n", client.current_user_id());

    println!("Step 3: Cheapest listings first:");
    for property in client.properties(SortOrder::PriceAsc).await?.properties {
        println!("  {:<40} {}", property.title, property.price_label());
    }

    println!("\nStep 4: Your rental requests:");
    for rental in client.my_rental_requests().await?.rentals {
        println!("  {:<40} {}", rental.property.title, rental.status);
    }

    Ok(())
}

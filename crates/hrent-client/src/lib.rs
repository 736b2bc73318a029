//! # hrent-client
//!
//! Typed session and REST client for the HRENT property-rental API.
//!
//! ## Features
//!
//! - **Session**: bearer token persisted in the system keyring (or a file),
//!   with the user id read from the token claims for display
//! - **Transport**: JSON requests, bearer auth, status classification and
//!   typed decoding; multipart image upload
//! - **Endpoints**: OTP registration/login, Google sign-in passthrough,
//!   profile, properties, rentals, chat, uploads
//! - **Models**: the API's records plus presentation helpers such as the
//!   rental actions each party may request
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use hrent_client::{ApiClient, ClientConfig, KeyringStore, Session, SortOrder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Arc::new(Session::new(KeyringStore::new()));
//!     let client = ApiClient::new(ClientConfig::production()?, session)?;
//!
//!     if !client.session().is_authenticated() {
//!         client.send_login_otp("me@example.com").await?;
//!         // ... read the code the user received ...
//!         let auth = client.verify_login_otp("me@example.com", "123456").await?;
//!         println!("Welcome, {}", auth.user.full_name());
//!     }
//!
//!     for property in client.properties(SortOrder::PriceAsc).await?.properties {
//!         println!("{} - {}", property.title, property.price_label());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every [`Error`] renders to a message fit for the user. Server-side
//! failures carry the server's own message:
//!
//! ```ignore
//! match client.delete_property("missing").await {
//!     Err(Error::Status { status: 404, message }) => assert_eq!(message, "Property not found"),
//!     other => { /* ... */ }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod api;
pub mod config;
mod error;
pub mod models;
pub mod multipart;
pub mod request;
pub mod session;
pub mod transport;

pub use api::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, MISSING_CREDENTIAL_MESSAGE, Result};
pub use models::*;
pub use request::{ApiRequest, RequestBody};
pub use session::{
    CredentialError, CredentialResult, FileStore, KeyringStore, MemoryStore, Session, TokenStore,
};
pub use transport::{Transport, interpret_response};

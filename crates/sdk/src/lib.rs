//! # Infomaniak SDK
//!
//! Thin async client for the Infomaniak REST API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use infomaniak_sdk::{InfomaniakClient, InfomaniakResult};
//!
//! #[tokio::main]
//! async fn main() -> InfomaniakResult<()> {
//!     let client = InfomaniakClient::builder()
//!         .api_token("your-api-token")
//!         .build()?;
//!
//!     let accounts = client.accounts().list().await?;
//!     println!("{}", accounts);
//!
//!     let records = client.domains().list_records("example.com").await?;
//!     println!("{}", records);
//!
//!     Ok(())
//! }
//! ```
//!
//! Every method performs exactly one HTTP request and returns the JSON body
//! untouched. Non-2xx responses become [`InfomaniakError::Api`], whose message
//! reads `Infomaniak API Error (<status>): <description>`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main client
pub use client::{InfomaniakClient, InfomaniakClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{InfomaniakError, InfomaniakResult};

// Re-export the HTTP method type used by the raw request API
pub use reqwest::Method;

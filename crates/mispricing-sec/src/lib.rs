//! [sec-api.io](https://sec-api.io/) filing search client.
//!
//! Finds a company's most recent 10-K, 10-Q, Form 4 and SC 13D filings and
//! groups them by form type for the catalyst scan.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mispricing_sec::SecClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SecClient::from_env()?;
//!     let filings = client.latest_filings("AAPL", 20).await?;
//!
//!     if let Some(annual) = filings.first("10-K") {
//!         println!("{:?}", annual.link());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `SEC_API_KEY` in your environment or `.env` file.

mod client;
mod error;

pub use client::{FilingQuery, SecClient};
pub use error::SecError;

/// Result type for sec-api.io operations.
pub type Result<T> = std::result::Result<T, SecError>;

//! Financial Modeling Prep (FMP) API client for the mispricing workspace.
//!
//! This crate fetches the annual statements, enterprise value snapshots,
//! company profile, quote and news headlines that feed the analysis from
//! the [Financial Modeling Prep](https://financialmodelingprep.com/) API.
//! Statement records deserialize straight into the shared
//! [`mispricing_traits`] types.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mispricing_fmp::{FmpClient, Period};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     // Income, balance sheet and cash flow, fetched concurrently
//!     let statements = client.financial_statements("AAPL", Period::Annual, 10).await?;
//!
//!     // Latest enterprise value snapshot
//!     let ev = client.latest_enterprise_value("AAPL").await?;
//!
//!     // Recent headlines
//!     let news = client.stock_news("AAPL", 50).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;

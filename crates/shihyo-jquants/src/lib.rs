//! J-Quants API client for shihyo.
//!
//! This crate fetches the inputs of the valuation solver from the
//! [J-Quants](https://jpx-jquants.com/) API: the company name, the latest
//! closing price, and the most recently disclosed EPS and BPS for a Tokyo
//! Stock Exchange security code.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shihyo_jquants::JQuantsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JQuantsClient::from_env()?;
//!
//!     // 4-digit codes are extended to the 5-digit form J-Quants expects
//!     let data = client.fundamentals("7203").await?;
//!     println!("{} as of {}: {:?}", data.company_name, data.as_of, data.base_values());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `JQUANTS_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! JQUANTS_API_KEY=your_api_key_here
//! # optional, e.g. for a proxy
//! JQUANTS_BASE_URL=https://api.jquants.com/v2
//! ```

mod client;
mod error;
mod types;

pub use client::{
    DEFAULT_LOOKBACK_DAYS, DEFAULT_TIMEOUT, JQUANTS_BASE_URL, JQuantsClient, JQuantsConfig,
};
pub use error::JQuantsError;
pub use types::*;

/// Result type for J-Quants operations.
pub type Result<T> = std::result::Result<T, JQuantsError>;

//! Alpha Vantage API access.
//!
//! One GET per (function, symbol) against the `query` endpoint. Upstream
//! errors arrive inside HTTP 200 bodies and are surfaced by
//! [`validate_response`].

pub mod client;
pub mod function;
pub mod response;

pub use client::AlphaVantageClient;
pub use function::Function;
pub use response::validate_response;

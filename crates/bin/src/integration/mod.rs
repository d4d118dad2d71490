//! Glue between the command line and the library crates.
//!
//! Resolves the on-disk response cache and wires it around the Alpha Vantage
//! client.

pub(crate) mod cache_manager;

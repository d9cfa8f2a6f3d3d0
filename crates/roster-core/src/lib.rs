//! Core types and trait definitions for the roster employee store.
//!
//! This crate is deliberately free of HTTP, spreadsheet, and database
//! dependencies. All other crates depend on it; it depends on nothing
//! proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod employee;
pub mod error;
pub mod outcome;
pub mod page;
pub mod store;
pub mod validate;

pub use error::{Error, Result};

//! Call record store and filter engine for the `CallSense` engine
//!
//! The store keeps an ordered, in-memory working set of call records behind
//! the [`CallRepository`] seam, and the filter engine is a pure function over
//! record slices. Deleting is the only destructive operation; records
//! themselves are immutable once inserted.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod error;
pub mod filter;
pub mod repository;
pub mod sample;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use filter::{ALL_AGENTS, ALL_SENTIMENTS, CallFilter, filter_calls};
pub use repository::CallRepository;
pub use store::MemoryCallStore;

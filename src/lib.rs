//! Catalog, leaderboard, and registration query layer for the
//! Varnothsava 2026 fest site.
//!
//! All data is fixture-backed and loaded once into a [`Catalog`]; every
//! operation on it is a pure read returning a newly allocated result, so
//! the view layer can recompute on every keystroke without ceremony.

pub use catalog::{Catalog, CatalogTables};
pub use error::{CatalogError, Result};
pub use model::*;
pub use query::fees::{calculate_total, early_bird_cutoff, FeeBreakdown};
pub use timer::{simulate_payment, time_remaining, Countdown, PaymentReceipt, Remaining};

mod catalog;
mod error;
pub mod fixtures;
pub mod model;
pub mod query;
pub mod timer;

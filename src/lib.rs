//! Merit-order economic dispatch for a fleet of power plants.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
/// Normalization, merit ordering, and allocation.
pub mod dispatch;
pub mod io;
pub mod logging;
pub mod scenario;

/// Greedy allocation with minimum-power backtracking.
pub mod allocator;
pub mod engine;
pub mod error;
/// Merit-order ranking of plants.
pub mod merit;
pub mod normalize;
pub mod summary;
pub mod types;

pub use engine::{Engine, dispatch};
pub use error::DispatchError;
pub use summary::DispatchSummary;
pub use types::{Allocation, DispatchRequest, DispatchResult, Fuels, PlantKind, PowerPlant};

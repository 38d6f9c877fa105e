use thiserror::Error;

/// Terminal failure of a single dispatch request.
///
/// No partial plan is ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// A plant's type is none of `gasfired`, `turbojet`, `windturbine`.
    #[error("plant \"{name}\" has unsupported type \"{plant_type}\"")]
    InvalidPlantType { name: String, plant_type: String },

    /// A plant envelope is negative, non-finite or has `pmin > pmax`.
    #[error("plant \"{name}\" has invalid bounds: pmin={pmin} MW, pmax={pmax} MW")]
    InvalidPlantBounds { name: String, pmin: f64, pmax: f64 },

    /// A thermal plant's efficiency lies outside (0, 1].
    #[error("plant \"{name}\" has efficiency {efficiency}, expected a value in (0, 1]")]
    InvalidEfficiency { name: String, efficiency: f64 },

    /// A fuel price is non-finite or the wind availability lies outside
    /// [0, 100].
    #[error("fuel input \"{field}\" has invalid value {value}")]
    InvalidFuels { field: &'static str, value: f64 },

    /// The requested load is negative or non-finite.
    #[error("load {load} MW must be a finite, non-negative number")]
    InvalidLoad { load: f64 },

    /// The plants cannot be committed to cover the load.
    #[error("insufficient capacity: load {load} MW, available {capacity} MW")]
    InsufficientCapacity { load: f64, capacity: f64 },
}

/// Convenience alias for dispatch results.
pub type DispatchOutcome<T> = Result<T, DispatchError>;

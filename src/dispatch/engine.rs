//! Dispatch engine composing normalization, ranking, and allocation.

use tracing::debug;

use crate::config::DispatchConfig;

use super::allocator::allocate;
use super::error::DispatchOutcome;
use super::merit::rank;
use super::normalize::normalize;
use super::types::{DispatchRequest, DispatchResult};

/// Emitted CO2 per MWh produced by a gas-fired plant (t/MWh).
pub const DEFAULT_CO2_T_PER_MWH: f64 = 0.3;

/// Stateless economic dispatch engine.
///
/// Holds only immutable parameters, so one instance can serve any number
/// of requests from any number of threads.
///
/// # Examples
///
/// ```
/// use powerplant_dispatch::dispatch::engine::Engine;
/// use powerplant_dispatch::dispatch::types::{DispatchRequest, Fuels, PowerPlant};
///
/// let request = DispatchRequest {
///     load: 90.0,
///     fuels: Fuels {
///         gas_euro_per_mwh: 10.0,
///         kerosine_euro_per_mwh: 50.0,
///         co2_euro_per_ton: 0.0,
///         wind_pct: 0.0,
///     },
///     powerplants: vec![PowerPlant::new("gas", "gasfired", 1.0, 60.0, 120.0)],
/// };
/// let result = Engine::default().dispatch(&request).unwrap();
/// assert_eq!(result.power_of("gas"), Some(90.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    co2_t_per_mwh: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_CO2_T_PER_MWH)
    }
}

impl Engine {
    /// Creates an engine with the given gas-fired CO2 emission factor.
    pub fn new(co2_t_per_mwh: f64) -> Self {
        Self { co2_t_per_mwh }
    }

    /// Creates an engine from the `[dispatch]` configuration section.
    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(config.co2_t_per_mwh)
    }

    /// CO2 emission factor applied to gas-fired plants (t/MWh).
    pub fn co2_t_per_mwh(&self) -> f64 {
        self.co2_t_per_mwh
    }

    /// Computes the production plan for one request.
    ///
    /// The request is normalized to a 0.1 MW grid, validated, ranked into
    /// merit order and allocated. The caller's request is not modified.
    ///
    /// # Errors
    ///
    /// Returns the first [`super::error::DispatchError`] encountered; no
    /// partial plan is produced.
    pub fn dispatch(&self, request: &DispatchRequest) -> DispatchOutcome<DispatchResult> {
        let normalized = normalize(request);
        normalized.validate()?;

        let order = rank(&normalized, self.co2_t_per_mwh)?;
        let result = allocate(&order, normalized.load)?;

        debug!(
            load = normalized.load,
            plants = result.commitments.len(),
            committed = result.total_power(),
            "dispatch complete"
        );
        Ok(result)
    }
}

/// Dispatches `request` with the default engine.
///
/// # Errors
///
/// See [`Engine::dispatch`].
pub fn dispatch(request: &DispatchRequest) -> DispatchOutcome<DispatchResult> {
    Engine::default().dispatch(request)
}

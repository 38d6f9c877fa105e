//! Merit-order ranking.
//!
//! Wind turbines come first by descending available output, then thermal
//! plants by ascending marginal cost. Ties keep submission order: every
//! comparison falls back to the original index, so the result never depends
//! on sort stability.

use std::cmp::Ordering;

use tracing::trace;

use super::error::DispatchError;
use super::normalize::round_tenth;
use super::types::{DispatchRequest, Fuels, PlantKind, PowerPlant};

/// A plant annotated with everything the allocator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlant {
    /// Position in the submitted plant list.
    pub index: usize,
    /// Plant identifier.
    pub name: String,
    /// Parsed technology.
    pub kind: PlantKind,
    /// Marginal cost (euro/MWh, 0 for wind).
    pub marginal_cost: f64,
    /// Minimum operating power (MW).
    pub pmin: f64,
    /// Output the plant could deliver before the minimum-power check (MW).
    /// Orders the wind block; equals `capacity` for thermal plants.
    pub available: f64,
    /// Highest power the plant can deliver this run (MW): `pmax` for thermal
    /// plants, available output for wind, 0 for a turbine below its `pmin`.
    pub capacity: f64,
}

impl RankedPlant {
    /// Cost of running the plant at its minimum power for one hour.
    pub fn cost_at_pmin(&self) -> f64 {
        self.pmin * self.marginal_cost
    }

    fn sort_key(&self) -> f64 {
        if self.kind.is_renewable() {
            -self.available
        } else {
            self.marginal_cost
        }
    }
}

/// Available wind output (MW) for a turbine of rated `pmax`, on the same
/// 0.1 MW grid as the normalized load and bounds.
pub fn available_output(pmax: f64, fuels: &Fuels) -> f64 {
    round_tenth(fuels.wind_pct / 100.0 * pmax)
}

fn rank_plant(
    index: usize,
    plant: &PowerPlant,
    fuels: &Fuels,
    co2_t_per_mwh: f64,
) -> Result<RankedPlant, DispatchError> {
    let kind = plant.plant_type.parse::<PlantKind>().map_err(|()| {
        DispatchError::InvalidPlantType {
            name: plant.name.clone(),
            plant_type: plant.plant_type.clone(),
        }
    })?;

    let (available, capacity) = if kind.is_renewable() {
        let available = available_output(plant.pmax, fuels);
        // A turbine that cannot reach its own minimum stays off.
        let capacity = if available < plant.pmin { 0.0 } else { available };
        (available, capacity)
    } else {
        if !(plant.efficiency > 0.0 && plant.efficiency <= 1.0) {
            return Err(DispatchError::InvalidEfficiency {
                name: plant.name.clone(),
                efficiency: plant.efficiency,
            });
        }
        (plant.pmax, plant.pmax)
    };

    Ok(RankedPlant {
        index,
        name: plant.name.clone(),
        kind,
        marginal_cost: kind.marginal_cost(plant.efficiency, fuels, co2_t_per_mwh),
        pmin: plant.pmin,
        available,
        capacity,
    })
}

fn merit_cmp(a: &RankedPlant, b: &RankedPlant) -> Ordering {
    // Renewables (`true`) sort before thermal plants.
    b.kind
        .is_renewable()
        .cmp(&a.kind.is_renewable())
        .then_with(|| a.sort_key().total_cmp(&b.sort_key()))
        .then_with(|| a.index.cmp(&b.index))
}

/// Produces the merit order for a normalized request.
///
/// # Arguments
///
/// * `request` - Normalized dispatch request
/// * `co2_t_per_mwh` - CO2 emission factor of gas-fired plants
///
/// # Errors
///
/// Returns [`DispatchError::InvalidPlantType`] for the first plant with an
/// unrecognized type and [`DispatchError::InvalidEfficiency`] for a thermal
/// plant whose efficiency lies outside (0, 1].
pub fn rank(
    request: &DispatchRequest,
    co2_t_per_mwh: f64,
) -> Result<Vec<RankedPlant>, DispatchError> {
    let mut ranked = request
        .powerplants
        .iter()
        .enumerate()
        .map(|(index, plant)| rank_plant(index, plant, &request.fuels, co2_t_per_mwh))
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(merit_cmp);

    for (position, plant) in ranked.iter().enumerate() {
        trace!(
            position,
            name = %plant.name,
            kind = %plant.kind,
            marginal_cost = plant.marginal_cost,
            capacity = plant.capacity,
            "ranked plant"
        );
    }

    Ok(ranked)
}

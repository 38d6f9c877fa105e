//! Greedy merit-order allocation with minimum-power backtracking.
//!
//! Plants are committed at full capacity in merit order until the load is
//! covered. The last plant touched (the marginal plant) is then trimmed so
//! the total matches the load exactly. When the trimmed output falls below
//! the marginal plant's `pmin`, the allocator either hands the residual to
//! the next plant in merit order or keeps the marginal plant at `pmin`,
//! whichever costs less to run at minimum power.

use tracing::debug;

use super::error::DispatchError;
use super::merit::RankedPlant;
use super::types::{Commitment, DispatchResult};

/// Slack absorbing floating-point noise when comparing summed powers (MW).
const TOLERANCE_MW: f64 = 1e-6;

/// Walks the merit order and commits plants at capacity.
///
/// Returns the per-plant powers, the committed total and the index of the
/// marginal plant (`None` when nothing had to run).
fn forward_pass(order: &[RankedPlant], load: f64) -> (Vec<f64>, f64, Option<usize>) {
    let mut powers = vec![0.0; order.len()];
    let mut committed = 0.0;
    let mut marginal = None;

    for (i, plant) in order.iter().enumerate() {
        if committed < load - TOLERANCE_MW {
            powers[i] = plant.capacity;
            committed += plant.capacity;
            marginal = Some(i);
        }
    }

    (powers, committed, marginal)
}

/// Resolves the marginal plant once its exact-match output `required` is
/// known, applying the minimum-power rule.
///
/// Returns the index of the plant that finally carries the residual.
fn reconcile(
    order: &[RankedPlant],
    powers: &mut [f64],
    mut current: usize,
    required: f64,
) -> Option<usize> {
    while order[current].pmin > required + TOLERANCE_MW {
        let next = order.get(current + 1)?;
        let stay_cost = order[current].cost_at_pmin();
        let switch_cost = next.cost_at_pmin();
        let can_cover = next.capacity + TOLERANCE_MW >= required.max(next.pmin);

        if switch_cost < stay_cost && can_cover {
            debug!(
                from = %order[current].name,
                to = %next.name,
                stay_cost,
                switch_cost,
                required,
                "handing residual to next plant"
            );
            powers[current] = 0.0;
            current += 1;
        } else {
            debug!(
                name = %order[current].name,
                pmin = order[current].pmin,
                required,
                "keeping marginal plant at minimum power"
            );
            break;
        }
    }

    powers[current] = required.max(order[current].pmin);
    Some(current)
}

/// Allocates `load` over a merit-ordered plant list.
///
/// # Arguments
///
/// * `order` - Plants in merit order, as produced by [`super::merit::rank`]
/// * `load` - Normalized target load (MW)
///
/// # Returns
///
/// One commitment per plant, in merit order.
///
/// # Errors
///
/// Returns [`DispatchError::InsufficientCapacity`] when the plants cannot
/// cover the load at full output, or when the minimum-power backtrack would
/// need a plant beyond the end of the merit order.
pub fn allocate(order: &[RankedPlant], load: f64) -> Result<DispatchResult, DispatchError> {
    let capacity: f64 = order.iter().map(|p| p.capacity).sum();
    let insufficient = DispatchError::InsufficientCapacity { load, capacity };

    let (mut powers, committed, marginal) = forward_pass(order, load);
    if committed < load - TOLERANCE_MW {
        return Err(insufficient);
    }

    if let Some(marginal) = marginal {
        let overshoot = committed - load;
        if overshoot > TOLERANCE_MW {
            let required = order[marginal].capacity - overshoot;
            debug!(
                name = %order[marginal].name,
                committed,
                overshoot,
                required,
                "trimming marginal plant"
            );
            reconcile(order, &mut powers, marginal, required).ok_or(insufficient)?;
        }
    }

    let commitments = order
        .iter()
        .zip(powers)
        .map(|(plant, power)| Commitment {
            name: plant.name.clone(),
            kind: plant.kind,
            marginal_cost: plant.marginal_cost,
            power,
        })
        .collect();

    Ok(DispatchResult { load, commitments })
}

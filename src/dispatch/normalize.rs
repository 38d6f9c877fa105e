//! Input normalization to a 0.1 MW grid.

use super::types::DispatchRequest;

/// Rounds to the nearest tenth, halves away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Returns a copy of `request` with the load and every plant's `pmin` and
/// `pmax` rounded to one decimal. The caller's request is left untouched.
pub fn normalize(request: &DispatchRequest) -> DispatchRequest {
    let mut normalized = request.clone();
    normalized.load = round_tenth(normalized.load);
    for plant in &mut normalized.powerplants {
        plant.pmin = round_tenth(plant.pmin);
        plant.pmax = round_tenth(plant.pmax);
    }
    normalized
}

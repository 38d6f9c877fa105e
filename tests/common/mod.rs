//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use powerplant_dispatch::dispatch::merit::available_output;
use powerplant_dispatch::dispatch::{DispatchRequest, DispatchResult, Fuels, PowerPlant};

/// Slack for comparing summed powers (MW).
pub const EPS: f64 = 1e-6;

/// Fuels with the given prices and no CO2 cost.
pub fn fuels(gas: f64, kerosine: f64, wind_pct: f64) -> Fuels {
    Fuels {
        gas_euro_per_mwh: gas,
        kerosine_euro_per_mwh: kerosine,
        co2_euro_per_ton: 0.0,
        wind_pct,
    }
}

/// Three-plant request: wind (200 MW at 80%), gas (cost 43) and turbojet
/// (cost ~166.7) against a 480 MW load.
pub fn three_plant_request() -> DispatchRequest {
    DispatchRequest {
        load: 480.0,
        fuels: Fuels {
            gas_euro_per_mwh: 20.0,
            kerosine_euro_per_mwh: 50.0,
            co2_euro_per_ton: 10.0,
            wind_pct: 80.0,
        },
        powerplants: vec![
            PowerPlant::new("windpark", "windturbine", 1.0, 0.0, 200.0),
            PowerPlant::new("gasfired", "gasfired", 0.5, 100.0, 400.0),
            PowerPlant::new("turbojet", "turbojet", 0.3, 40.0, 210.0),
        ],
    }
}

/// Plan as `(name, p)` pairs for compact assertions.
pub fn plan_pairs(result: &DispatchResult) -> Vec<(String, f64)> {
    result.plan().into_iter().map(|a| (a.name, a.p)).collect()
}

/// Capacity of a plant for this run: available output for wind, `pmax`
/// otherwise.
pub fn capacity_of(plant: &PowerPlant, fuels: &Fuels) -> f64 {
    if plant.plant_type == "windturbine" {
        available_output(plant.pmax, fuels)
    } else {
        plant.pmax
    }
}

/// Asserts every nonzero commitment lies within its plant's envelope.
pub fn assert_within_bounds(request: &DispatchRequest, result: &DispatchResult) {
    for c in &result.commitments {
        let plant = request
            .powerplants
            .iter()
            .find(|p| p.name == c.name)
            .expect("every commitment names an input plant");
        assert!(c.power >= -EPS, "{} has negative power {}", c.name, c.power);
        if c.power > EPS {
            assert!(
                c.power + EPS >= plant.pmin,
                "{} runs at {} below pmin {}",
                c.name,
                c.power,
                plant.pmin
            );
            assert!(
                c.power <= capacity_of(plant, &request.fuels) + EPS,
                "{} runs at {} above its capacity",
                c.name,
                c.power
            );
        }
    }
}

//! Dispatch request sources: JSON payload files and built-in presets.

use std::fs;
use std::path::Path;

use crate::dispatch::types::{DispatchRequest, Fuels, PowerPlant};

/// Available preset names.
pub const PRESETS: &[&str] = &["payload1", "payload2", "payload3"];

/// Loads a dispatch request from a JSON payload file.
///
/// # Errors
///
/// Returns a message naming the file if it cannot be read or parsed.
pub fn from_json_path(path: &Path) -> Result<DispatchRequest, String> {
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read payload `{}`: {err}", path.display()))?;
    DispatchRequest::from_json_str(&raw)
        .map_err(|err| format!("invalid payload `{}`: {err}", path.display()))
}

/// Returns a built-in request by name.
///
/// # Errors
///
/// Returns a message listing the known presets if `name` is unknown.
pub fn from_preset(name: &str) -> Result<DispatchRequest, String> {
    match name {
        "payload1" => Ok(payload1()),
        "payload2" => Ok(payload2()),
        "payload3" => Ok(payload3()),
        _ => Err(format!(
            "invalid value for `preset`: unknown preset `{name}` (expected one of {})",
            PRESETS.join(", ")
        )),
    }
}

/// Reference fleet shared by all presets.
fn reference_fleet() -> Vec<PowerPlant> {
    vec![
        PowerPlant::new("gasfiredbig1", "gasfired", 0.53, 100.0, 460.0),
        PowerPlant::new("gasfiredbig2", "gasfired", 0.53, 100.0, 460.0),
        PowerPlant::new("gasfiredsomewhatsmaller", "gasfired", 0.37, 40.0, 210.0),
        PowerPlant::new("tj1", "turbojet", 0.3, 0.0, 16.0),
        PowerPlant::new("windpark1", "windturbine", 1.0, 0.0, 150.0),
        PowerPlant::new("windpark2", "windturbine", 1.0, 0.0, 36.0),
    ]
}

fn reference_fuels(wind_pct: f64) -> Fuels {
    Fuels {
        gas_euro_per_mwh: 13.4,
        kerosine_euro_per_mwh: 50.8,
        co2_euro_per_ton: 20.0,
        wind_pct,
    }
}

/// 480 MW with 60% wind.
pub fn payload1() -> DispatchRequest {
    DispatchRequest {
        load: 480.0,
        fuels: reference_fuels(60.0),
        powerplants: reference_fleet(),
    }
}

/// 480 MW on a windless day.
pub fn payload2() -> DispatchRequest {
    DispatchRequest {
        load: 480.0,
        fuels: reference_fuels(0.0),
        powerplants: reference_fleet(),
    }
}

/// 910 MW with 60% wind.
pub fn payload3() -> DispatchRequest {
    DispatchRequest {
        load: 910.0,
        fuels: reference_fuels(60.0),
        powerplants: reference_fleet(),
    }
}

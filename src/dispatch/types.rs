//! Core dispatch types: request payload, plant kinds, and the production plan.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use super::error::DispatchError;
use super::normalize::round_tenth;

/// Fuel and market prices supplied with every dispatch request.
///
/// Field names follow the wire payload (`gas(euro/MWh)` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fuels {
    /// Gas price (euro/MWh).
    #[serde(rename = "gas(euro/MWh)")]
    pub gas_euro_per_mwh: f64,
    /// Kerosine price (euro/MWh).
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine_euro_per_mwh: f64,
    /// CO2 emission allowance price (euro/ton).
    #[serde(rename = "co2(euro/ton)")]
    pub co2_euro_per_ton: f64,
    /// Wind availability (percent, 0–100).
    #[serde(rename = "wind(%)")]
    pub wind_pct: f64,
}

impl Fuels {
    /// Checks that every price is finite and that wind availability is a
    /// percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidFuels`] naming the first offending
    /// wire field.
    pub fn validate(&self) -> Result<(), DispatchError> {
        let prices = [
            ("gas(euro/MWh)", self.gas_euro_per_mwh),
            ("kerosine(euro/MWh)", self.kerosine_euro_per_mwh),
            ("co2(euro/ton)", self.co2_euro_per_ton),
        ];
        if let Some(&(field, value)) = prices.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DispatchError::InvalidFuels { field, value });
        }
        if !(0.0..=100.0).contains(&self.wind_pct) {
            return Err(DispatchError::InvalidFuels {
                field: "wind(%)",
                value: self.wind_pct,
            });
        }
        Ok(())
    }
}

/// Single power plant as submitted by the caller.
///
/// `plant_type` is kept as the raw wire string so that an unknown type
/// surfaces as [`DispatchError::InvalidPlantType`] from the ranker rather
/// than as a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPlant {
    /// Unique plant identifier.
    pub name: String,
    /// Plant type: `"gasfired"`, `"turbojet"` or `"windturbine"`.
    #[serde(rename = "type")]
    pub plant_type: String,
    /// Fuel-to-electricity conversion rate in (0, 1].
    pub efficiency: f64,
    /// Minimum operating power (MW).
    pub pmin: f64,
    /// Maximum operating power (MW).
    pub pmax: f64,
}

impl PowerPlant {
    /// Creates a plant from its wire fields.
    pub fn new(name: &str, plant_type: &str, efficiency: f64, pmin: f64, pmax: f64) -> Self {
        Self {
            name: name.to_string(),
            plant_type: plant_type.to_string(),
            efficiency,
            pmin,
            pmax,
        }
    }
}

/// Immutable input to one dispatch computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Target load (MW).
    pub load: f64,
    /// Fuel prices and wind availability.
    pub fuels: Fuels,
    /// Plants in submission order.
    pub powerplants: Vec<PowerPlant>,
}

impl DispatchRequest {
    /// Parses a request from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the document is malformed or misses
    /// a required field.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Checks the load and fuel inputs, then every plant envelope.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidLoad`] for a negative or non-finite
    /// load, [`DispatchError::InvalidFuels`] as described on
    /// [`Fuels::validate`], and [`DispatchError::InvalidPlantBounds`] for the
    /// first plant with a negative bound or `pmin > pmax`.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if !self.load.is_finite() || self.load < 0.0 {
            return Err(DispatchError::InvalidLoad { load: self.load });
        }
        self.fuels.validate()?;
        for plant in &self.powerplants {
            let finite = plant.pmin.is_finite() && plant.pmax.is_finite();
            if !finite || plant.pmin < 0.0 || plant.pmin > plant.pmax {
                return Err(DispatchError::InvalidPlantBounds {
                    name: plant.name.clone(),
                    pmin: plant.pmin,
                    pmax: plant.pmax,
                });
            }
        }
        Ok(())
    }
}

/// Closed set of plant technologies.
///
/// Owns the one cost function shared by ranking and minimum-power
/// reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlantKind {
    #[serde(rename = "gasfired")]
    GasFired,
    #[serde(rename = "turbojet")]
    Turbojet,
    #[serde(rename = "windturbine")]
    WindTurbine,
}

impl PlantKind {
    /// Wire spelling of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GasFired => "gasfired",
            Self::Turbojet => "turbojet",
            Self::WindTurbine => "windturbine",
        }
    }

    /// Whether the plant runs on an intermittent, zero-fuel source.
    pub fn is_renewable(self) -> bool {
        matches!(self, Self::WindTurbine)
    }

    /// Marginal generation cost (euro/MWh).
    ///
    /// # Arguments
    ///
    /// * `efficiency` - Plant conversion rate, ignored for wind
    /// * `fuels` - Per-run prices
    /// * `co2_t_per_mwh` - Emitted CO2 per generated MWh for gas-fired plants
    pub fn marginal_cost(self, efficiency: f64, fuels: &Fuels, co2_t_per_mwh: f64) -> f64 {
        match self {
            Self::GasFired => {
                fuels.gas_euro_per_mwh / efficiency + co2_t_per_mwh * fuels.co2_euro_per_ton
            }
            Self::Turbojet => fuels.kerosine_euro_per_mwh / efficiency,
            Self::WindTurbine => 0.0,
        }
    }
}

impl FromStr for PlantKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gasfired" => Ok(Self::GasFired),
            "turbojet" => Ok(Self::Turbojet),
            "windturbine" => Ok(Self::WindTurbine),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Committed power for one plant.
#[derive(Debug, Clone, PartialEq)]
pub struct Commitment {
    /// Plant identifier.
    pub name: String,
    /// Plant technology.
    pub kind: PlantKind,
    /// Marginal cost used for ranking (euro/MWh, 0 for wind).
    pub marginal_cost: f64,
    /// Committed power (MW), unrounded.
    pub power: f64,
}

/// Wire entry of the production plan: `{"name": ..., "p": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Plant identifier.
    pub name: String,
    /// Committed power rounded to 0.1 MW.
    pub p: f64,
}

/// Outcome of one dispatch: one commitment per input plant, in merit order.
///
/// Serializes as the wire production plan (array of [`Allocation`]).
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResult {
    /// Normalized load the plan was computed for (MW).
    pub load: f64,
    /// Commitments in merit order.
    pub commitments: Vec<Commitment>,
}

impl DispatchResult {
    /// Production plan with powers rounded to one decimal.
    pub fn plan(&self) -> Vec<Allocation> {
        self.commitments
            .iter()
            .map(|c| Allocation {
                name: c.name.clone(),
                p: round_tenth(c.power),
            })
            .collect()
    }

    /// Sum of committed power (MW).
    pub fn total_power(&self) -> f64 {
        self.commitments.iter().map(|c| c.power).sum()
    }

    /// Looks up the committed power of a plant by name.
    pub fn power_of(&self, name: &str) -> Option<f64> {
        self.commitments
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.power)
    }
}

impl Serialize for DispatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let plan = self.plan();
        let mut seq = serializer.serialize_seq(Some(plan.len()))?;
        for allocation in &plan {
            seq.serialize_element(allocation)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuels() -> Fuels {
        Fuels {
            gas_euro_per_mwh: 20.0,
            kerosine_euro_per_mwh: 50.0,
            co2_euro_per_ton: 10.0,
            wind_pct: 80.0,
        }
    }

    #[test]
    fn parses_wire_payload() {
        let json = r#"{
            "load": 480,
            "fuels": {
                "gas(euro/MWh)": 13.4,
                "kerosine(euro/MWh)": 50.8,
                "co2(euro/ton)": 20,
                "wind(%)": 60
            },
            "powerplants": [
                {"name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460}
            ]
        }"#;
        let request = DispatchRequest::from_json_str(json).expect("payload should parse");
        assert_eq!(request.load, 480.0);
        assert_eq!(request.fuels.kerosine_euro_per_mwh, 50.8);
        assert_eq!(request.fuels.wind_pct, 60.0);
        assert_eq!(request.powerplants[0].plant_type, "gasfired");
    }

    #[test]
    fn unknown_type_still_deserializes() {
        let json = r#"{"name": "sun", "type": "solar", "efficiency": 1, "pmin": 0, "pmax": 10}"#;
        let plant: PowerPlant = serde_json::from_str(json).expect("plant should parse");
        assert_eq!(plant.plant_type, "solar");
        assert!(plant.plant_type.parse::<PlantKind>().is_err());
    }

    #[test]
    fn kind_round_trips_through_wire_spelling() {
        for kind in [PlantKind::GasFired, PlantKind::Turbojet, PlantKind::WindTurbine] {
            assert_eq!(kind.as_str().parse::<PlantKind>(), Ok(kind));
        }
    }

    #[test]
    fn gas_cost_includes_co2() {
        let cost = PlantKind::GasFired.marginal_cost(0.5, &fuels(), 0.3);
        assert!((cost - 43.0).abs() < 1e-9);
    }

    #[test]
    fn turbojet_cost_ignores_co2() {
        let cost = PlantKind::Turbojet.marginal_cost(0.3, &fuels(), 0.3);
        assert!((cost - 50.0 / 0.3).abs() < 1e-9);
    }

    #[test]
    fn wind_is_free() {
        assert_eq!(PlantKind::WindTurbine.marginal_cost(1.0, &fuels(), 0.3), 0.0);
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let request = DispatchRequest {
            load: 10.0,
            fuels: fuels(),
            powerplants: vec![PowerPlant::new("bad", "gasfired", 0.5, 50.0, 40.0)],
        };
        assert!(matches!(
            request.validate(),
            Err(DispatchError::InvalidPlantBounds { ref name, .. }) if name == "bad"
        ));
    }

    #[test]
    fn validate_rejects_negative_load() {
        let request = DispatchRequest {
            load: -1.0,
            fuels: fuels(),
            powerplants: Vec::new(),
        };
        assert!(matches!(
            request.validate(),
            Err(DispatchError::InvalidLoad { .. })
        ));
    }

    #[test]
    fn validate_rejects_wind_above_full_availability() {
        let request = DispatchRequest {
            load: 140.0,
            fuels: Fuels {
                wind_pct: 150.0,
                ..fuels()
            },
            powerplants: vec![PowerPlant::new("wind", "windturbine", 1.0, 0.0, 100.0)],
        };
        assert_eq!(
            request.validate(),
            Err(DispatchError::InvalidFuels {
                field: "wind(%)",
                value: 150.0,
            })
        );
    }

    #[test]
    fn validate_rejects_non_finite_price() {
        let bad = Fuels {
            kerosine_euro_per_mwh: f64::INFINITY,
            ..fuels()
        };
        assert!(matches!(
            bad.validate(),
            Err(DispatchError::InvalidFuels { field: "kerosine(euro/MWh)", .. })
        ));

        let no_wind_reading = Fuels {
            wind_pct: f64::NAN,
            ..fuels()
        };
        assert!(no_wind_reading.validate().is_err());
        assert_eq!(fuels().validate(), Ok(()));
    }

    #[test]
    fn result_serializes_as_rounded_plan() {
        let result = DispatchResult {
            load: 21.6,
            commitments: vec![Commitment {
                name: "windpark2".to_string(),
                kind: PlantKind::WindTurbine,
                marginal_cost: 0.0,
                power: 0.6 * 36.0,
            }],
        };
        let json = serde_json::to_string(&result).expect("result should serialize");
        assert_eq!(json, r#"[{"name":"windpark2","p":21.6}]"#);
    }
}

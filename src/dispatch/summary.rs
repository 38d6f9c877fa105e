//! Post-hoc summary of a production plan.

use std::fmt;

use super::types::DispatchResult;

/// Aggregate figures derived from a complete dispatch result.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchSummary {
    /// Target load (MW).
    pub load_mw: f64,
    /// Sum of committed power (MW).
    pub committed_mw: f64,
    /// `committed_mw - load_mw`; positive when a plant runs at `pmin` above
    /// the residual.
    pub imbalance_mw: f64,
    /// Hourly generation cost (euro/h): Σ power × marginal cost.
    pub total_cost_euro_per_h: f64,
    /// Number of plants with nonzero output.
    pub committed_plants: usize,
    /// Last plant in merit order with nonzero output.
    pub marginal_plant: Option<String>,
}

impl DispatchSummary {
    /// Builds the summary for one result.
    pub fn from_result(result: &DispatchResult) -> Self {
        let mut committed = 0.0_f64;
        let mut cost = 0.0_f64;
        let mut count = 0_usize;
        let mut marginal = None;

        for c in &result.commitments {
            committed += c.power;
            cost += c.power * c.marginal_cost;
            if c.power > 0.0 {
                count += 1;
                marginal = Some(c.name.clone());
            }
        }

        Self {
            load_mw: result.load,
            committed_mw: committed,
            imbalance_mw: committed - result.load,
            total_cost_euro_per_h: cost,
            committed_plants: count,
            marginal_plant: marginal,
        }
    }
}

impl fmt::Display for DispatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Dispatch Summary ---")?;
        writeln!(f, "Load:              {:.1} MW", self.load_mw)?;
        writeln!(f, "Committed:         {:.1} MW", self.committed_mw)?;
        writeln!(f, "Imbalance:         {:+.1} MW", self.imbalance_mw)?;
        writeln!(f, "Hourly cost:       {:.2} euro/h", self.total_cost_euro_per_h)?;
        writeln!(f, "Committed plants:  {}", self.committed_plants)?;
        write!(
            f,
            "Marginal plant:    {}",
            self.marginal_plant.as_deref().unwrap_or("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::types::{Commitment, PlantKind};

    fn commitment(name: &str, kind: PlantKind, marginal_cost: f64, power: f64) -> Commitment {
        Commitment {
            name: name.to_string(),
            kind,
            marginal_cost,
            power,
        }
    }

    fn result() -> DispatchResult {
        DispatchResult {
            load: 480.0,
            commitments: vec![
                commitment("wind", PlantKind::WindTurbine, 0.0, 160.0),
                commitment("gas", PlantKind::GasFired, 43.0, 320.0),
                commitment("tj", PlantKind::Turbojet, 166.7, 0.0),
            ],
        }
    }

    #[test]
    fn totals_and_cost() {
        let summary = DispatchSummary::from_result(&result());
        assert_eq!(summary.committed_mw, 480.0);
        assert_eq!(summary.imbalance_mw, 0.0);
        assert!((summary.total_cost_euro_per_h - 320.0 * 43.0).abs() < 1e-9);
        assert_eq!(summary.committed_plants, 2);
        assert_eq!(summary.marginal_plant.as_deref(), Some("gas"));
    }

    #[test]
    fn empty_result() {
        let summary = DispatchSummary::from_result(&DispatchResult {
            load: 0.0,
            commitments: Vec::new(),
        });
        assert_eq!(summary.committed_plants, 0);
        assert!(summary.marginal_plant.is_none());
        assert_eq!(summary.total_cost_euro_per_h, 0.0);
    }

    #[test]
    fn display_does_not_panic() {
        let s = format!("{}", DispatchSummary::from_result(&result()));
        assert!(s.contains("Marginal plant:    gas"));
    }
}

//! Figures derived from a trip record.
//!
//! Everything here is recomputed from the current [`TripRecord`] on
//! every call; nothing is cached or mutated independently.

use crate::model::TripRecord;

const LANDFILL_M3_PER_TON: f64 = 2.0 * 0.7646;
const WATER_LITERS_PER_TON: f64 = 30.0 * 3.78541;
const ENERGY_KWH_PER_TON: f64 = 47.0;
const CO2_KG_PER_TON: f64 = 315.0;

/// Net weight plus the estimated environmental savings for one trip.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedMetrics {
    /// Billable recycled mass in tons.  Negative when tare exceeds gross;
    /// the renderer refuses such trips.
    pub net_weight: f64,
    /// Float glass as printed: three decimals when entered, `"0.000"` otherwise.
    pub float_glass_display: String,
    /// Landfill volume saved, cubic metres.
    pub landfill_volume: f64,
    /// Water saved, litres.
    pub water_liters: f64,
    /// Energy saved, kWh.
    pub energy_kwh: f64,
    /// CO2 emissions avoided, kg.
    pub co2_kg: f64,
}

impl DerivedMetrics {
    /// Computes the metrics for `trip`.  Pure; no side effects.
    ///
    /// Float glass is only added to the gross/tare difference when it was
    /// actually entered (> 0).  That asymmetry is how the scale house has
    /// always billed these trips, so it is kept as-is.
    pub fn for_trip(trip: &TripRecord) -> Self {
        let (net_weight, float_glass_display) = if trip.float_glass > 0.0 {
            (
                trip.gross_weight - trip.tare_weight + trip.float_glass,
                format!("{:.3}", trip.float_glass),
            )
        } else {
            (trip.gross_weight - trip.tare_weight, "0.000".to_owned())
        };

        Self {
            net_weight,
            float_glass_display,
            landfill_volume: net_weight * LANDFILL_M3_PER_TON,
            water_liters: net_weight * WATER_LITERS_PER_TON,
            energy_kwh: net_weight * ENERGY_KWH_PER_TON,
            co2_kg: net_weight * CO2_KG_PER_TON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(gross: f64, tare: f64, float_glass: f64) -> TripRecord {
        TripRecord {
            gross_weight: gross,
            tare_weight: tare,
            float_glass,
            ..TripRecord::default()
        }
    }

    #[test]
    fn net_weight_without_float_glass() {
        let metrics = DerivedMetrics::for_trip(&trip(20.0, 5.0, 0.0));
        assert_eq!(metrics.net_weight, 15.0);
        assert_eq!(metrics.float_glass_display, "0.000");
    }

    #[test]
    fn net_weight_adds_float_glass_when_entered() {
        let metrics = DerivedMetrics::for_trip(&trip(20.0, 5.0, 2.5));
        assert_eq!(metrics.net_weight, 17.5);
        assert_eq!(metrics.float_glass_display, "2.500");
    }

    #[test]
    fn net_weight_may_go_negative() {
        let metrics = DerivedMetrics::for_trip(&trip(3.0, 5.0, 0.0));
        assert_eq!(metrics.net_weight, -2.0);
    }

    #[test]
    fn impact_figures_are_linear_in_net_weight() {
        let metrics = DerivedMetrics::for_trip(&trip(12.0, 2.0, 0.0));
        assert_eq!(metrics.net_weight, 10.0);
        assert!((metrics.landfill_volume - 15.292).abs() < 1e-9);
        assert!((metrics.water_liters - 1135.623).abs() < 1e-9);
        assert_eq!(metrics.energy_kwh, 470.0);
        assert_eq!(metrics.co2_kg, 3150.0);
    }

    #[test]
    fn recomputed_from_the_current_record() {
        let mut record = trip(20.0, 5.0, 0.0);
        assert_eq!(DerivedMetrics::for_trip(&record).net_weight, 15.0);
        record.tare_weight = 8.0;
        assert_eq!(DerivedMetrics::for_trip(&record).net_weight, 12.0);
    }
}

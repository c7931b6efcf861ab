//! Input model for a single weighbridge trip.
//!
//! The record is a flat snapshot of the values collected at the scale
//! house.  It only holds data and the default/format rules; everything
//! derived from it lives in [`crate::metrics`].

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Vehicle registration pre-filled when no plate is entered.
pub const DEFAULT_VEHICLE_NO: &str = "91/56491";

/// Error returned when a label does not match any variant of a closed set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLabel {
    field: &'static str,
    value: String,
    allowed: &'static [&'static str],
}

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}' (expected one of: {})",
            self.field,
            self.value,
            self.allowed.join(", ")
        )
    }
}

impl std::error::Error for UnknownLabel {}

/// Customers the trips are billed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Customer {
    #[serde(rename = "Avenues Mall")]
    AvenuesMall,
    #[serde(rename = "360 Mall")]
    ThreeSixtyMall,
    #[serde(rename = "Khiran Mall")]
    KhiranMall,
}

impl Customer {
    /// All customers, in form order.
    pub const ALL: [Customer; 3] = [
        Customer::AvenuesMall,
        Customer::ThreeSixtyMall,
        Customer::KhiranMall,
    ];

    const LABELS: [&'static str; 3] = ["Avenues Mall", "360 Mall", "Khiran Mall"];

    /// Returns the label printed on the report.
    pub fn label(self) -> &'static str {
        match self {
            Customer::AvenuesMall => Self::LABELS[0],
            Customer::ThreeSixtyMall => Self::LABELS[1],
            Customer::KhiranMall => Self::LABELS[2],
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Customer {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| UnknownLabel {
                field: "customer",
                value: value.to_owned(),
                allowed: &Self::LABELS,
            })
    }
}

/// Glass categories accepted at the weighbridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "Bottle Glass")]
    BottleGlass,
    #[serde(rename = "Mixed Glass")]
    MixedGlass,
}

impl Material {
    /// All materials, in form order.
    pub const ALL: [Material; 2] = [Material::BottleGlass, Material::MixedGlass];

    const LABELS: [&'static str; 2] = ["Bottle Glass", "Mixed Glass"];

    /// Returns the label printed on the report.
    pub fn label(self) -> &'static str {
        match self {
            Material::BottleGlass => Self::LABELS[0],
            Material::MixedGlass => Self::LABELS[1],
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Material {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| UnknownLabel {
                field: "material",
                value: value.to_owned(),
                allowed: &Self::LABELS,
            })
    }
}

/// One weighbridge trip as entered on the form.
///
/// Weights are tons and are expected to be non-negative; the entry
/// boundary enforces that, the record itself does not re-validate.
/// `print_time` is free text ("HH:MM:SS" by convention) and is printed
/// verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripRecord {
    pub print_date: NaiveDate,
    pub print_time: String,
    pub ticket_no: String,
    pub vehicle_no: String,
    pub customer: Customer,
    pub material: Material,
    pub gross_weight: f64,
    pub tare_weight: f64,
    pub float_glass: f64,
}

impl Default for TripRecord {
    fn default() -> Self {
        Self {
            print_date: Local::now().date_naive(),
            print_time: String::new(),
            ticket_no: String::new(),
            vehicle_no: DEFAULT_VEHICLE_NO.to_owned(),
            customer: Customer::AvenuesMall,
            material: Material::BottleGlass,
            gross_weight: 0.0,
            tare_weight: 0.0,
            float_glass: 0.0,
        }
    }
}

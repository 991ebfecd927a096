//! Derived job figures. Produced by the calculator, never mutated afterwards.

use haulbid_types::{JobType, MaterialType, PayoutMode, TruckType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyMetrics {
    pub truck_type: TruckType,
    pub material_type: MaterialType,
    pub num_trucks: u32,
    pub total_hours: f64,
    pub hourly_rate_per_truck: f64,
    pub total_payout: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonnageMetrics {
    pub truck_type: TruckType,
    pub material_type: MaterialType,
    pub load_capacity_tons: f64,
    pub payout_mode: PayoutMode,

    // Per-load breakdown
    pub fuel_cost_per_mile: f64,
    pub trip_fuel_cost: f64,
    pub cost_per_load: f64,
    pub labor_cost: f64,

    // Project totals
    pub total_loads: u64,
    pub total_project_hours: f64,
    pub total_project_miles: f64,
    pub all_in_cost: f64,
    pub cost_per_mile_final: f64,
    pub cost_per_hour: f64,

    // Profit analysis
    pub total_job_payout: f64,
    /// Present only when priced with [`PayoutMode::MarkupPercent`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup_amount: Option<f64>,
    pub profit: f64,
    pub profit_margin_percent: f64,
}

/// Output of the job cost calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JobMetrics {
    Hourly(HourlyMetrics),
    Tonnage(TonnageMetrics),
}

impl JobMetrics {
    pub fn job_type(&self) -> JobType {
        match self {
            JobMetrics::Hourly(_) => JobType::Hourly,
            JobMetrics::Tonnage(_) => JobType::Tonnage,
        }
    }

    /// Amount billed to the customer
    pub fn total_payout(&self) -> f64 {
        match self {
            JobMetrics::Hourly(m) => m.total_payout,
            JobMetrics::Tonnage(m) => m.total_job_payout,
        }
    }
}

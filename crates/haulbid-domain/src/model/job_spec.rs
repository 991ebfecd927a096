//! Job specification: the immutable input of one calculation

use haulbid_types::{JobType, MaterialType, PayoutMode, TruckType};
use serde::{Deserialize, Serialize};

/// Trucks billed by the hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyJob {
    pub truck_type: TruckType,
    pub material_type: MaterialType,
    pub num_trucks: u32,
    pub hours_per_day: f64,
    pub job_length_days: u32,
    pub hourly_rate_per_truck: f64,
}

impl Default for HourlyJob {
    fn default() -> Self {
        Self {
            truck_type: TruckType::SingleAxle,
            material_type: MaterialType::Dirt,
            num_trucks: 1,
            hours_per_day: 8.0,
            job_length_days: 5,
            hourly_rate_per_truck: 95.0,
        }
    }
}

/// Trucks paid per job, costed per load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TonnageJob {
    /// One-way distance; every load is costed as a round trip
    pub haul_distance_miles: f64,
    /// Must be non-zero
    pub miles_per_gallon: f64,
    pub fuel_cost_per_gallon: f64,
    pub driver_wage_per_hour: f64,
    pub operating_cost_per_load: f64,
    pub num_trucks: u32,
    pub truck_type: TruckType,
    /// Informational only
    pub load_capacity_tons: f64,
    pub loads_per_day_per_truck: u32,
    pub job_length_days: u32,
    pub daily_hours_per_truck: f64,
    pub material_type: MaterialType,
    /// Used when pricing with [`PayoutMode::FixedPayout`]
    pub total_job_payout: f64,
    /// Used when pricing with [`PayoutMode::MarkupPercent`]
    pub markup_percent: f64,
}

impl Default for TonnageJob {
    fn default() -> Self {
        Self {
            haul_distance_miles: 20.0,
            miles_per_gallon: 5.0,
            fuel_cost_per_gallon: 4.25,
            driver_wage_per_hour: 35.0,
            operating_cost_per_load: 50.0,
            num_trucks: 3,
            truck_type: TruckType::SingleAxle,
            load_capacity_tons: 16.0,
            loads_per_day_per_truck: 10,
            job_length_days: 5,
            daily_hours_per_truck: 8.0,
            material_type: MaterialType::Dirt,
            total_job_payout: 25000.0,
            markup_percent: 20.0,
        }
    }
}

/// A hauling job as submitted by the form/input provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JobSpec {
    Hourly(HourlyJob),
    Tonnage(TonnageJob),
}

impl JobSpec {
    pub fn job_type(&self) -> JobType {
        match self {
            JobSpec::Hourly(_) => JobType::Hourly,
            JobSpec::Tonnage(_) => JobType::Tonnage,
        }
    }

    pub fn truck_type(&self) -> TruckType {
        match self {
            JobSpec::Hourly(job) => job.truck_type,
            JobSpec::Tonnage(job) => job.truck_type,
        }
    }

    pub fn material_type(&self) -> MaterialType {
        match self {
            JobSpec::Hourly(job) => job.material_type,
            JobSpec::Tonnage(job) => job.material_type,
        }
    }
}

/// Calculation options chosen by configuration rather than by the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcOptions {
    pub payout_mode: PayoutMode,
}

impl CalcOptions {
    pub fn new(payout_mode: PayoutMode) -> Self {
        Self { payout_mode }
    }
}

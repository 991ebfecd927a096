//! Job cost calculator
//!
//! Maps a [`JobSpec`] to [`JobMetrics`]. The transform is pure: same input,
//! same output, no I/O.
//!
//! Two different policies apply to division:
//! - `miles_per_gallon == 0` is a caller error and is rejected with
//!   [`Error::InvalidInput`] before any arithmetic happens.
//! - Zero totals (project hours, project miles, job payout) are legitimate and
//!   the derived rate falls back to 0 instead of failing.
//!
//! Inputs that are finite but large enough to overflow a total are rejected
//! too, so no metric is ever reported as infinity.

use haulbid_types::{Error, PayoutMode, Result};
use tracing::debug;

use crate::model::{
    CalcOptions, HourlyJob, HourlyMetrics, JobMetrics, JobSpec, TonnageJob, TonnageMetrics,
};

/// Compute all derived figures for a job
pub fn compute_metrics(spec: &JobSpec, options: &CalcOptions) -> Result<JobMetrics> {
    validate(spec, options)?;

    let metrics = match spec {
        JobSpec::Hourly(job) => JobMetrics::Hourly(compute_hourly(job)?),
        JobSpec::Tonnage(job) => JobMetrics::Tonnage(compute_tonnage(job, options.payout_mode)?),
    };
    Ok(metrics)
}

/// Check numeric inputs before computation.
///
/// Only the pricing input selected by `options.payout_mode` is checked; the
/// other one is ignored by the calculator.
pub fn validate(spec: &JobSpec, options: &CalcOptions) -> Result<()> {
    match spec {
        JobSpec::Hourly(job) => {
            non_negative("hours_per_day", job.hours_per_day)?;
            non_negative("hourly_rate_per_truck", job.hourly_rate_per_truck)?;
        }
        JobSpec::Tonnage(job) => {
            non_negative("haul_distance_miles", job.haul_distance_miles)?;
            non_negative("miles_per_gallon", job.miles_per_gallon)?;
            if job.miles_per_gallon == 0.0 {
                return Err(Error::invalid_input(
                    "miles_per_gallon",
                    "must be greater than zero",
                ));
            }
            non_negative("fuel_cost_per_gallon", job.fuel_cost_per_gallon)?;
            non_negative("driver_wage_per_hour", job.driver_wage_per_hour)?;
            non_negative("operating_cost_per_load", job.operating_cost_per_load)?;
            non_negative("load_capacity_tons", job.load_capacity_tons)?;
            non_negative("daily_hours_per_truck", job.daily_hours_per_truck)?;
            match options.payout_mode {
                PayoutMode::FixedPayout => non_negative("total_job_payout", job.total_job_payout)?,
                PayoutMode::MarkupPercent => non_negative("markup_percent", job.markup_percent)?,
            }
        }
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_input(
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    if value < 0.0 {
        return Err(Error::invalid_input(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

/// Reject a total that overflowed to infinity
fn finite_total(total: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_input(total, "inputs are too large, the total overflows"))
    }
}

fn compute_hourly(job: &HourlyJob) -> Result<HourlyMetrics> {
    let total_hours = finite_total(
        "total_hours",
        f64::from(job.num_trucks) * job.hours_per_day * f64::from(job.job_length_days),
    )?;
    let total_payout = finite_total("total_payout", total_hours * job.hourly_rate_per_truck)?;

    Ok(HourlyMetrics {
        truck_type: job.truck_type,
        material_type: job.material_type,
        num_trucks: job.num_trucks,
        total_hours,
        hourly_rate_per_truck: job.hourly_rate_per_truck,
        total_payout,
    })
}

fn compute_tonnage(job: &TonnageJob, payout_mode: PayoutMode) -> Result<TonnageMetrics> {
    let total_loads = u64::from(job.num_trucks)
        .checked_mul(u64::from(job.loads_per_day_per_truck))
        .and_then(|n| n.checked_mul(u64::from(job.job_length_days)))
        .ok_or_else(|| Error::invalid_input("loads_per_day_per_truck", "total load count overflows"))?;
    let loads = total_loads as f64;

    let fuel_cost_per_mile = job.fuel_cost_per_gallon / job.miles_per_gallon;
    let trip_fuel_cost = job.haul_distance_miles * 2.0 * fuel_cost_per_mile;
    let cost_per_load = trip_fuel_cost + job.operating_cost_per_load;

    let total_hours =
        job.daily_hours_per_truck * f64::from(job.job_length_days) * f64::from(job.num_trucks);
    let labor_cost = job.driver_wage_per_hour * total_hours;

    let all_in_cost = finite_total("all_in_cost", (cost_per_load * loads) + labor_cost)?;
    let total_project_hours = finite_total("total_project_hours", total_hours)?;
    let total_project_miles =
        finite_total("total_project_miles", job.haul_distance_miles * 2.0 * loads)?;

    let cost_per_hour = ratio_or_zero("total_project_hours", all_in_cost, total_project_hours);
    let cost_per_mile_final = ratio_or_zero("total_project_miles", all_in_cost, total_project_miles);

    let (total_job_payout, markup_percent, markup_amount, profit) = match payout_mode {
        PayoutMode::FixedPayout => {
            let payout = job.total_job_payout;
            (payout, None, None, payout - all_in_cost)
        }
        PayoutMode::MarkupPercent => {
            let markup_amount = all_in_cost * job.markup_percent / 100.0;
            let payout = all_in_cost + markup_amount;
            // Profit is the markup itself; subtracting back would reintroduce rounding
            (payout, Some(job.markup_percent), Some(markup_amount), markup_amount)
        }
    };
    let total_job_payout = finite_total("total_job_payout", total_job_payout)?;
    let profit_margin_percent = ratio_or_zero("total_job_payout", profit, total_job_payout) * 100.0;

    debug!(
        total_loads,
        all_in_cost,
        total_job_payout,
        profit,
        mode = %payout_mode,
        "Computed tonnage job metrics"
    );

    Ok(TonnageMetrics {
        truck_type: job.truck_type,
        material_type: job.material_type,
        load_capacity_tons: job.load_capacity_tons,
        payout_mode,
        fuel_cost_per_mile,
        trip_fuel_cost,
        cost_per_load,
        labor_cost,
        total_loads,
        total_project_hours,
        total_project_miles,
        all_in_cost,
        cost_per_mile_final,
        cost_per_hour,
        total_job_payout,
        markup_percent,
        markup_amount,
        profit,
        profit_margin_percent,
    })
}

/// `numerator / denominator`, or 0 when the denominator is zero
fn ratio_or_zero(denominator_name: &str, numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        debug!(denominator = denominator_name, "Zero denominator, rate falls back to 0");
        0.0
    }
}

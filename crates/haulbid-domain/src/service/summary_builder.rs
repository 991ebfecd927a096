//! Serializes computed metrics into the label/value form used for display
//! and document export.
//!
//! Currency: `$` with thousands separators and two decimals. Percentages:
//! two decimals. Hours and miles: two decimals.

use crate::model::{BidSummary, ClientInfo, JobMetrics, Section};

pub fn build_summary(metrics: &JobMetrics, client: &ClientInfo) -> BidSummary {
    let mut summary = BidSummary::new();

    let header = [
        ("Company", &client.company),
        ("Client", &client.client),
        ("Job Location", &client.location),
        ("Notes", &client.notes),
    ];
    for (label, value) in header {
        if let Some(text) = value.as_deref().filter(|s| !s.trim().is_empty()) {
            summary.push(Section::Client, label, text);
        }
    }

    summary.push(Section::Job, "Job Type", metrics.job_type().label());

    match metrics {
        JobMetrics::Hourly(m) => {
            summary.push(Section::Job, "Truck Type", m.truck_type.label());
            summary.push(Section::Job, "Material Type", m.material_type.label());
            summary.push(Section::Job, "Total Trucks", m.num_trucks.to_string());
            summary.push(Section::Job, "Total Hours", format_quantity(m.total_hours));
            summary.push(
                Section::Job,
                "Hourly Rate per Truck",
                format_currency(m.hourly_rate_per_truck),
            );
            summary.push(Section::Profit, "Total Payout", format_currency(m.total_payout));
        }
        JobMetrics::Tonnage(m) => {
            summary.push(Section::Job, "Truck Type", m.truck_type.label());
            summary.push(Section::Job, "Material Type", m.material_type.label());
            summary.push(
                Section::Job,
                "Load Capacity",
                format!("{} tons", format_quantity(m.load_capacity_tons)),
            );
            summary.push(Section::Job, "Total Loads", m.total_loads.to_string());
            summary.push(Section::Job, "Total Hours", format_quantity(m.total_project_hours));
            summary.push(Section::Job, "Total Miles", format_quantity(m.total_project_miles));
            summary.push(Section::Job, "All-In Cost", format_currency(m.all_in_cost));
            summary.push(Section::Job, "Cost per Load", format_currency(m.cost_per_load));
            summary.push(Section::Job, "Cost per Mile", format_currency(m.cost_per_mile_final));
            summary.push(Section::Job, "Cost per Hour", format_currency(m.cost_per_hour));

            if let (Some(percent), Some(amount)) = (m.markup_percent, m.markup_amount) {
                summary.push(Section::Profit, "Markup", format_percent(percent));
                summary.push(Section::Profit, "Markup Amount", format_currency(amount));
            }
            summary.push(Section::Profit, "Total Payout", format_currency(m.total_job_payout));
            summary.push(Section::Profit, "Profit", format_currency(m.profit));
            summary.push(Section::Profit, "Profit Margin", format_percent(m.profit_margin_percent));
        }
    }

    summary
}

/// `$1,234.50`; negatives render as `$-1,234.50`
pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(&format!("{:.2}", value)))
}

/// `32.80%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// `6,000.00`
pub fn format_quantity(value: f64) -> String {
    group_thousands(&format!("{:.2}", value))
}

fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return formatted.to_string();
    }

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

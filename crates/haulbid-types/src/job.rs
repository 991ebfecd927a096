//! Job classification enums shared across layers
//!
//! Truck and material types are descriptive labels only. They are carried
//! through to summaries and exported documents but never enter the cost math.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a hauling job is billed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Hourly,
    Tonnage,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::Hourly => "Hourly",
            JobType::Tonnage => "Tonnage",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How the total payout of a tonnage job is determined
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutMode {
    /// Payout is quoted by the customer; margin is derived from it
    #[default]
    #[value(name = "fixed_payout", alias = "fixed")]
    FixedPayout,
    /// Payout is cost plus a markup percentage
    #[value(name = "markup_percent", alias = "markup")]
    MarkupPercent,
}

impl std::fmt::Display for PayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayoutMode::FixedPayout => write!(f, "fixed_payout"),
            PayoutMode::MarkupPercent => write!(f, "markup_percent"),
        }
    }
}

/// Dump truck configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TruckType {
    #[default]
    SingleAxle,
    Tandem,
    TriAxle,
    Quad,
    Quint,
    DumpTrailer,
}

impl TruckType {
    pub const ALL: [TruckType; 6] = [
        TruckType::SingleAxle,
        TruckType::Tandem,
        TruckType::TriAxle,
        TruckType::Quad,
        TruckType::Quint,
        TruckType::DumpTrailer,
    ];

    /// Display label as shown on bids
    pub fn label(&self) -> &'static str {
        match self {
            TruckType::SingleAxle => "Single-axle",
            TruckType::Tandem => "Tandem",
            TruckType::TriAxle => "Tri-axle",
            TruckType::Quad => "Quad",
            TruckType::Quint => "Quint",
            TruckType::DumpTrailer => "Dump-Trailer",
        }
    }
}

impl std::fmt::Display for TruckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Hauled material
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialType {
    #[default]
    Dirt,
    Gravel,
    Sand,
    Millings,
    Asphalt,
    TearOut,
}

impl MaterialType {
    pub const ALL: [MaterialType; 6] = [
        MaterialType::Dirt,
        MaterialType::Gravel,
        MaterialType::Sand,
        MaterialType::Millings,
        MaterialType::Asphalt,
        MaterialType::TearOut,
    ];

    /// Display label as shown on bids
    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::Dirt => "Dirt",
            MaterialType::Gravel => "Gravel",
            MaterialType::Sand => "Sand",
            MaterialType::Millings => "Millings",
            MaterialType::Asphalt => "Asphalt",
            MaterialType::TearOut => "Tear-out",
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truck_labels() {
        let labels: Vec<&str> = TruckType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            ["Single-axle", "Tandem", "Tri-axle", "Quad", "Quint", "Dump-Trailer"]
        );
    }

    #[test]
    fn test_material_labels() {
        assert_eq!(MaterialType::TearOut.to_string(), "Tear-out");
        assert_eq!(MaterialType::ALL.len(), 6);
    }

    #[test]
    fn test_enum_serde_names() {
        assert_eq!(serde_json::to_string(&TruckType::TriAxle).unwrap(), "\"tri-axle\"");
        assert_eq!(serde_json::to_string(&TruckType::DumpTrailer).unwrap(), "\"dump-trailer\"");
        assert_eq!(serde_json::to_string(&MaterialType::TearOut).unwrap(), "\"tear-out\"");
        assert_eq!(
            serde_json::to_string(&PayoutMode::MarkupPercent).unwrap(),
            "\"markup_percent\""
        );
        let mode: PayoutMode = serde_json::from_str("\"fixed_payout\"").unwrap();
        assert_eq!(mode, PayoutMode::FixedPayout);
    }

    #[test]
    fn test_payout_mode_value_enum() {
        let mode = PayoutMode::from_str("markup_percent", true).unwrap();
        assert_eq!(mode, PayoutMode::MarkupPercent);
        let mode = PayoutMode::from_str("fixed", true).unwrap();
        assert_eq!(mode, PayoutMode::FixedPayout);
    }
}

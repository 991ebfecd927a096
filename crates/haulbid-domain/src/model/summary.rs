//! Flat label/value rendition of a computed job, ready for display or export

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const BID_TITLE: &str = "Hauling Services Bid Summary";

/// Grouping used by table output; exporters may ignore it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Client,
    Job,
    Profit,
}

impl Section {
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Client => "Bid Details",
            Section::Job => "Job Summary",
            Section::Profit => "Profit Analysis",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub section: Section,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidSummary {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepared_on: Option<NaiveDate>,
    pub lines: Vec<SummaryLine>,
}

impl BidSummary {
    pub fn new() -> Self {
        Self {
            title: BID_TITLE.to_string(),
            prepared_on: None,
            lines: Vec::new(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.prepared_on = Some(date);
        self
    }

    pub fn push(&mut self, section: Section, label: impl Into<String>, value: impl Into<String>) {
        self.lines.push(SummaryLine {
            section,
            label: label.into(),
            value: value.into(),
        });
    }

    /// Ordered (label, value) pairs as consumed by document exporters
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.lines
            .iter()
            .map(|line| (line.label.as_str(), line.value.as_str()))
            .collect()
    }

    /// Lines belonging to one section, in order
    pub fn section(&self, section: Section) -> impl Iterator<Item = &SummaryLine> {
        self.lines.iter().filter(move |line| line.section == section)
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

impl Default for BidSummary {
    fn default() -> Self {
        Self::new()
    }
}

use serde::{Deserialize, Serialize};

/// Free-text bid header fields, carried through to output unmodified
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    #[serde(default)]
    pub company: Option<String>,     // hauling company issuing the bid
    #[serde(default)]
    pub client: Option<String>,      // customer name
    #[serde(default)]
    pub location: Option<String>,    // job site
    #[serde(default)]
    pub notes: Option<String>,
}

impl ClientInfo {
    pub fn is_empty(&self) -> bool {
        [&self.company, &self.client, &self.location, &self.notes]
            .iter()
            .all(|field| field.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

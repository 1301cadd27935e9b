//! Lead capture types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lead as submitted by a form, before the ledger accepts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadCandidate {
    pub company: String,
    pub industry: String,
    pub region: String,
    pub material: String,
    pub volume: Decimal,
}

/// Lead as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRecord {
    pub submitted_at: DateTime<Utc>,
    pub company: String,
    pub industry: String,
    pub region: String,
    pub material: String,
    pub volume: Decimal,
    pub status: LeadStatus,
}

// Nothing moves a lead past Pending yet; the other states are only read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    Pending,
    Reviewed,
    Rejected,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "pending",
            LeadStatus::Reviewed => "reviewed",
            LeadStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(LeadStatus::Pending),
            "reviewed" => Ok(LeadStatus::Reviewed),
            "rejected" => Ok(LeadStatus::Rejected),
            other => Err(format!("unknown lead status: {other}")),
        }
    }
}

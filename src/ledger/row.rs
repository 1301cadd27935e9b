//! CSV row mapping for the lead ledger

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::{
    config::LEDGER_DATE_FORMAT,
    types::{LeadRecord, LeadStatus},
};

pub const LEDGER_COLUMNS: [&str; 7] = [
    "Date",
    "Company",
    "Industry",
    "Region",
    "Material",
    "Volume_MT",
    "Status",
];

/// One line of the backing file, kept as text so bad cells can be reported by row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Material")]
    pub material: String,
    #[serde(rename = "Volume_MT")]
    pub volume: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl From<&LeadRecord> for LedgerRow {
    fn from(record: &LeadRecord) -> Self {
        Self {
            date: record.submitted_at.format(LEDGER_DATE_FORMAT).to_string(),
            company: record.company.clone(),
            industry: record.industry.clone(),
            region: record.region.clone(),
            material: record.material.clone(),
            volume: record.volume.to_string(),
            status: record.status.to_string(),
        }
    }
}

impl TryFrom<LedgerRow> for LeadRecord {
    type Error = String;

    fn try_from(row: LedgerRow) -> Result<Self, Self::Error> {
        let submitted_at = NaiveDateTime::parse_from_str(row.date.trim(), LEDGER_DATE_FORMAT)
            .map_err(|e| format!("bad Date {:?}: {}", row.date, e))?
            .and_utc();
        let volume = Decimal::from_str(row.volume.trim())
            .map_err(|e| format!("bad Volume_MT {:?}: {}", row.volume, e))?;
        let status = LeadStatus::from_str(&row.status)?;

        Ok(LeadRecord {
            submitted_at,
            company: row.company,
            industry: row.industry,
            region: row.region,
            material: row.material,
            volume,
            status,
        })
    }
}

/// Drops sub-minute precision so a stored timestamp reads back unchanged.
pub fn ledger_timestamp(at: DateTime<Utc>) -> DateTime<Utc> {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}

//! Lead submission validation

use rust_decimal::Decimal;
use crate::errors::{NexusError, NexusResult};
use crate::types::LeadCandidate;

/// Checks a submitted lead and returns it with surrounding whitespace trimmed.
pub fn validate_lead(candidate: &LeadCandidate) -> NexusResult<LeadCandidate> {
    let company = required_text("company", &candidate.company)?;
    let industry = required_text("industry", &candidate.industry)?;
    let region = required_text("region", &candidate.region)?;
    let material = required_text("material", &candidate.material)?;

    if candidate.volume <= Decimal::ZERO {
        return Err(NexusError::validation(
            "volume",
            format!("must be positive, got {}", candidate.volume),
        ));
    }

    Ok(LeadCandidate {
        company,
        industry,
        region,
        material,
        volume: candidate.volume.normalize(),
    })
}

fn required_text(field: &'static str, value: &str) -> NexusResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NexusError::validation(field, "must not be empty"));
    }
    // One ledger line per record.
    if trimmed.contains(['\n', '\r']) {
        return Err(NexusError::validation(field, "must be a single line"));
    }
    Ok(trimmed.to_string())
}

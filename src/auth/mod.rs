//! Access gating for the lead reporting view

use tracing::warn;
use crate::{
    config::Config,
    errors::{NexusError, NexusResult},
};

/// Checks a presented token against the configured one. With no token
/// configured the gate is open.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    token: Option<String>,
}

impl AccessGate {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.access_token.clone())
    }

    pub fn is_open(&self) -> bool {
        self.token.is_none()
    }

    pub fn verify(&self, presented: Option<&str>) -> NexusResult<()> {
        let Some(expected) = self.token.as_deref() else {
            return Ok(());
        };

        match presented {
            Some(given) if constant_time_eq(expected.as_bytes(), given.as_bytes()) => Ok(()),
            _ => {
                warn!("Rejected access to lead ledger report");
                Err(NexusError::Unauthorized)
            }
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_gate_admits_everyone() {
        let gate = AccessGate::from_config(&Config::new("leads.csv"));
        assert!(gate.is_open());
        assert!(gate.verify(None).is_ok());
        assert!(gate.verify(Some("anything")).is_ok());
    }

    #[test]
    fn configured_token_must_match_exactly() {
        let gate = AccessGate::from_config(&Config::new("leads.csv").with_access_token("nexus-2024"));
        assert!(gate.verify(Some("nexus-2024")).is_ok());
        assert!(matches!(gate.verify(Some("nexus-2025")), Err(NexusError::Unauthorized)));
        assert!(matches!(gate.verify(Some("nexus")), Err(NexusError::Unauthorized)));
        assert!(matches!(gate.verify(None), Err(NexusError::Unauthorized)));
    }
}

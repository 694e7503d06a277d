use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;

/// Tuning knobs for a single search invocation. The puzzle's state space is
/// tiny, so the expansion cap only matters if the move rules are altered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub max_expansions: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

/// Start-configuration preconditions, checked before any search is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("totals must be non-negative (got {missionaries} missionaries, {cannibals} cannibals)")]
    NegativeTotal { missionaries: i32, cannibals: i32 },
    #[error("Cannibals cannot outnumber missionaries at the start.")]
    CannibalsOutnumber { missionaries: i32, cannibals: i32 },
}

/// A puzzle instance is searchable only when both totals are non-negative and
/// cannibals do not outnumber missionaries at the start.
pub fn validate_totals(total_m: i32, total_c: i32) -> Result<(), ConfigError> {
    if total_m < 0 || total_c < 0 {
        return Err(ConfigError::NegativeTotal {
            missionaries: total_m,
            cannibals: total_c,
        });
    }
    if total_c > total_m {
        return Err(ConfigError::CannibalsOutnumber {
            missionaries: total_m,
            cannibals: total_c,
        });
    }
    Ok(())
}

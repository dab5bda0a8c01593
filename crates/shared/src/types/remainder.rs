//! Policy for placing the minor units left over after an equal split.

use serde::{Deserialize, Serialize};

/// Who receives the `total mod N` minor units that cannot be split evenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// The payer absorbs the entire remainder.
    #[default]
    Payer,
    /// One extra minor unit each, starting with the payer and then following
    /// participant order. Shares never differ by more than one minor unit.
    RoundRobin,
}

impl std::fmt::Display for RemainderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Payer => write!(f, "payer"),
            Self::RoundRobin => write!(f, "round_robin"),
        }
    }
}

impl std::str::FromStr for RemainderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "payer" => Ok(Self::Payer),
            "round_robin" => Ok(Self::RoundRobin),
            _ => Err(format!("Unknown remainder policy: {s}")),
        }
    }
}

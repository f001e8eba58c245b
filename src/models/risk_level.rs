use serde::{Deserialize, Serialize};
use std::fmt;

/// Five risk tiers. Declaration order is ascending risk, so `VeryHigh` compares
/// greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => "very_high",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::VeryLow => "very_low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => "Very risky",
            RiskLevel::High => "Risky",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Moderate",
            RiskLevel::VeryLow => "Very moderate",
        }
    }

    /// Coarser four-colour grouping used by the history table.
    pub fn band(&self) -> RiskBand {
        match self {
            RiskLevel::VeryHigh => RiskBand::Red,
            RiskLevel::High => RiskBand::Orange,
            RiskLevel::Medium => RiskBand::Yellow,
            RiskLevel::Low | RiskLevel::VeryLow => RiskBand::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Red,
    Orange,
    Yellow,
    Green,
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskBand::Red => write!(f, "red"),
            RiskBand::Orange => write!(f, "orange"),
            RiskBand::Yellow => write!(f, "yellow"),
            RiskBand::Green => write!(f, "green"),
        }
    }
}

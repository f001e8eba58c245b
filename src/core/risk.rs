use crate::models::RiskLevel;

/// At or above this leverage a trade is very high risk whatever its ratio.
pub const EXTREME_LEVERAGE: f64 = 50.0;
/// At or above this leverage a trade is at least high risk.
pub const HIGH_LEVERAGE: f64 = 20.0;

/// Upper bounds on the leverage-adjusted ratio for each tier, checked in order.
const RATIO_TIERS: &[(f64, RiskLevel)] = &[
    (0.5, RiskLevel::VeryHigh),
    (1.0, RiskLevel::High),
    (2.0, RiskLevel::Medium),
    (3.0, RiskLevel::Low),
];

/// Risk/reward ratio scaled down by leverage.
pub fn adjusted_ratio(risk_reward_ratio: f64, leverage: f64) -> f64 {
    risk_reward_ratio * (1.0 / leverage)
}

/// Classifies a trade from its risk/reward ratio and leverage. Leverage
/// thresholds are checked first; the first matching rule wins.
pub fn classify_risk(risk_reward_ratio: f64, leverage: f64) -> RiskLevel {
    if leverage >= EXTREME_LEVERAGE {
        return RiskLevel::VeryHigh;
    }
    if leverage >= HIGH_LEVERAGE {
        return RiskLevel::High;
    }

    let adjusted = adjusted_ratio(risk_reward_ratio, leverage);
    RATIO_TIERS
        .iter()
        .find(|(bound, _)| adjusted <= *bound)
        .map(|(_, level)| *level)
        .unwrap_or(RiskLevel::VeryLow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskBand;

    #[test]
    fn extreme_leverage_overrides_ratio() {
        assert_eq!(classify_risk(1000.0, 50.0), RiskLevel::VeryHigh);
        assert_eq!(classify_risk(1000.0, 150.0), RiskLevel::VeryHigh);
    }

    #[test]
    fn high_leverage_caps_at_high() {
        assert_eq!(classify_risk(1000.0, 20.0), RiskLevel::High);
        // adjusted = 30 / 49 ≈ 0.612, but leverage alone decides
        assert_eq!(classify_risk(30.0, 49.0), RiskLevel::High);
    }

    #[test]
    fn ratio_tiers_at_unit_leverage() {
        assert_eq!(classify_risk(0.5, 1.0), RiskLevel::VeryHigh);
        assert_eq!(classify_risk(0.51, 1.0), RiskLevel::High);
        assert_eq!(classify_risk(1.0, 1.0), RiskLevel::High);
        assert_eq!(classify_risk(2.0, 1.0), RiskLevel::Medium);
        assert_eq!(classify_risk(3.0, 1.0), RiskLevel::Low);
        assert_eq!(classify_risk(3.01, 1.0), RiskLevel::VeryLow);
    }

    #[test]
    fn leverage_shrinks_ratio() {
        // 2 / 5 = 0.4
        assert!((adjusted_ratio(2.0, 5.0) - 0.4).abs() < 1e-12);
        assert_eq!(classify_risk(2.0, 5.0), RiskLevel::VeryHigh);
        // 15 / 10 = 1.5
        assert_eq!(classify_risk(15.0, 10.0), RiskLevel::Medium);
    }

    #[test]
    fn display_band_follows_level() {
        assert_eq!(classify_risk(4.0, 1.0).band(), RiskBand::Green);
        assert_eq!(classify_risk(2.5, 1.0).band(), RiskBand::Green);
        assert_eq!(classify_risk(1.5, 1.0).band(), RiskBand::Yellow);
        assert_eq!(classify_risk(5.0, 25.0).band(), RiskBand::Orange);
    }
}

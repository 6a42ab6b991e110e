use chrono::{Local, Timelike};

/// Time-of-day pricing regime. Recomputed on every spot fetch, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRegime {
    Peak,
    OffPeak,
}

impl PriceRegime {
    /// Peak window is 8 AM through 6 PM, upper bound inclusive
    pub fn for_hour(hour: u32) -> Self {
        if (8..=18).contains(&hour) {
            PriceRegime::Peak
        } else {
            PriceRegime::OffPeak
        }
    }

    /// Regime for the current local wall-clock hour
    pub fn current() -> Self {
        Self::for_hour(Local::now().hour())
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            PriceRegime::Peak => 1.5,
            PriceRegime::OffPeak => 1.0,
        }
    }

    /// Banner text shown above the board
    pub fn banner(&self) -> &'static str {
        match self {
            PriceRegime::Peak => "Peak hours: 8 AM - 6 PM. Prices are 1.5x during this time.",
            PriceRegime::OffPeak => "Off-peak hours: Prices are at normal rates.",
        }
    }
}

/// Round to 2 decimal places for display prices
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_window_is_8_through_18_inclusive() {
        for hour in 0..24u32 {
            let regime = PriceRegime::for_hour(hour);
            if (8..=18).contains(&hour) {
                assert_eq!(regime, PriceRegime::Peak, "hour {}", hour);
                assert_eq!(regime.multiplier(), 1.5);
            } else {
                assert_eq!(regime, PriceRegime::OffPeak, "hour {}", hour);
                assert_eq!(regime.multiplier(), 1.0);
            }
        }
    }

    #[test]
    fn banners_name_the_regime() {
        assert!(PriceRegime::Peak.banner().contains("Peak hours"));
        assert!(PriceRegime::OffPeak.banner().contains("Off-peak"));
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(14.999), 15.0);
        assert_eq!(round2(10.0 * 1.5), 15.0);
        assert_eq!(round2(12.34 * 1.5), 18.51);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(0.1 + 0.2), 0.3);
    }
}

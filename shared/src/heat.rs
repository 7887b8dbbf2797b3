/// Qualitative band for a progress fraction. Values below the low band carry no tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatTier {
    Low,
    Mid,
    High,
}

impl HeatTier {
    /// Classify a fraction. Lower bounds are inclusive.
    pub fn classify(value: f64) -> Option<Self> {
        if value >= 0.98 {
            Some(Self::High)
        } else if value >= 0.90 {
            Some(Self::Mid)
        } else if value >= 0.75 {
            Some(Self::Low)
        } else {
            None
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "heat-low",
            Self::Mid => "heat-mid",
            Self::High => "heat-high",
        }
    }
}

/// CSS class for an optional tier; empty when untiered.
pub fn heat_class(tier: Option<HeatTier>) -> &'static str {
    tier.map(HeatTier::css_class).unwrap_or("")
}

/// Direction of a clan-vs-opponent difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapPolarity {
    Positive,
    Neutral,
    Negative,
}

impl GapPolarity {
    /// Differences within ±0.03 (inclusive) are neutral.
    pub fn classify(value: f64) -> Self {
        if value > 0.03 {
            Self::Positive
        } else if value < -0.03 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "gap-positive",
            Self::Neutral => "gap-neutral",
            Self::Negative => "gap-negative",
        }
    }
}

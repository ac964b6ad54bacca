use serde::{Deserialize, Serialize};

use crate::model::profile::TierThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTier {
    Green,
    LightGreen,
    Yellow,
    Red,
}

impl ColorTier {
    /// Lower bounds are inclusive: exactly 80.0 is Green, exactly 50.0 is LightGreen.
    pub fn from_probability(probability: f64, thresholds: &TierThresholds) -> Self {
        if probability >= thresholds.green {
            ColorTier::Green
        } else if probability >= thresholds.light_green {
            ColorTier::LightGreen
        } else if probability >= thresholds.yellow {
            ColorTier::Yellow
        } else {
            ColorTier::Red
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorTier::Green => "green",
            ColorTier::LightGreen => "light_green",
            ColorTier::Yellow => "yellow",
            ColorTier::Red => "red",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ColorTier::Green => "green",
            ColorTier::LightGreen => "light-green",
            ColorTier::Yellow => "yellow",
            ColorTier::Red => "red",
        }
    }

    /// Counseling label shown next to the color.
    pub fn label(self) -> &'static str {
        match self {
            ColorTier::Green => "안정",
            ColorTier::LightGreen => "적정",
            ColorTier::Yellow => "소신",
            ColorTier::Red => "도전",
        }
    }
}

pub fn tier_order() -> &'static [ColorTier] {
    &[
        ColorTier::Green,
        ColorTier::LightGreen,
        ColorTier::Yellow,
        ColorTier::Red,
    ]
}

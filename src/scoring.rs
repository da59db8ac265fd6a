//! Regret probability scoring
//!
//! Urgency carries 60% of the score and the emotion's weight 40%, then the
//! trigger multiplier scales the result. The output is clamped to 5-95 so
//! it never reads as certain or impossible.

use crate::tables::{self, DEFAULT_EMOTION_WEIGHT, DEFAULT_TRIGGER_MULTIPLIER};
use crate::types::{EmotionData, RiskLevel};

pub const MIN_REGRET: u8 = 5;
pub const MAX_REGRET: u8 = 95;

const URGENCY_SHARE: f64 = 0.6;
const EMOTION_SHARE: f64 = 0.4;

/// Thresholds for the displayed risk bucket
pub const HIGH_RISK_ABOVE: u8 = 60;
pub const MEDIUM_RISK_ABOVE: u8 = 35;

/// Synthetic 5-95 estimate of how likely the user is to regret acting now
pub fn regret_probability(data: &EmotionData) -> u8 {
    let weight = data
        .emotion_kind()
        .map(tables::emotion_weight)
        .unwrap_or(DEFAULT_EMOTION_WEIGHT);
    let multiplier = data
        .trigger_kind()
        .map(tables::trigger_multiplier)
        .unwrap_or(DEFAULT_TRIGGER_MULTIPLIER);

    let base = data.clamped_urgency() as f64 * URGENCY_SHARE + weight * 100.0 * EMOTION_SHARE;
    let adjusted = (base * multiplier).round();

    adjusted.clamp(MIN_REGRET as f64, MAX_REGRET as f64) as u8
}

impl RiskLevel {
    pub fn from_probability(regret_probability: u8) -> Self {
        if regret_probability > HIGH_RISK_ABOVE {
            RiskLevel::High
        } else if regret_probability > MEDIUM_RISK_ABOVE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

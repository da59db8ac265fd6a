//! History narratives for the personalization surface
//!
//! Works on a caller-aggregated [`HistoryStats`] snapshot and is
//! independent of the per-decision analysis. Unlike insights, the result
//! may be empty.

use crate::tables::{
    dominant_emotion_narrative, NARRATIVE_BUILDING_PATTERN, NARRATIVE_COOLING,
    NARRATIVE_HIGH_URGENCY,
};
use crate::types::{Emotion, HistoryStats};

const MIN_DECISIONS_FOR_PAUSE_NOTE: u32 = 3;
const STRONG_AVOIDANCE_ABOVE: u32 = 70;
const BUILDING_AVOIDANCE_ABOVE: u32 = 50;
const COOL_URGENCY_BELOW: f64 = 40.0;
const HOT_URGENCY_ABOVE: f64 = 65.0;

/// Narrative sentences for the user's decision history, in fixed order
pub fn narrate_history(stats: &HistoryStats) -> Vec<String> {
    let mut narratives = Vec::new();

    if stats.total_decisions >= MIN_DECISIONS_FOR_PAUSE_NOTE {
        narratives.push(format!(
            "You've paused to reflect {} times. Each pause is a step toward clarity.",
            stats.total_decisions
        ));
    }

    if stats.regret_avoided > STRONG_AVOIDANCE_ABOVE {
        narratives.push(format!(
            "You've avoided high-risk decisions {}% of the time. Your patience is paying off.",
            stats.regret_avoided
        ));
    } else if stats.regret_avoided > BUILDING_AVOIDANCE_ABOVE {
        narratives.push(NARRATIVE_BUILDING_PATTERN.to_string());
    }

    if stats.avg_urgency < COOL_URGENCY_BELOW {
        narratives.push(NARRATIVE_COOLING.to_string());
    } else if stats.avg_urgency > HOT_URGENCY_ABOVE {
        narratives.push(NARRATIVE_HIGH_URGENCY.to_string());
    }

    if let Some(emotion) = Emotion::from_key(&stats.dominant_emotion) {
        narratives.push(dominant_emotion_narrative(emotion).to_string());
    }

    tracing::debug!(
        total_decisions = stats.total_decisions,
        regret_avoided = stats.regret_avoided,
        avg_urgency = stats.avg_urgency,
        dominant_emotion = %stats.dominant_emotion,
        count = narratives.len(),
        "narrated history"
    );

    narratives
}

/// Short label for an average urgency level
pub fn urgency_band(avg_urgency: f64) -> &'static str {
    if avg_urgency < 40.0 {
        "Low pressure"
    } else if avg_urgency < 65.0 {
        "Moderate"
    } else {
        "High intensity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmotionTrend;

    fn stats(total: u32, avg_urgency: f64, emotion: &str, avoided: u32) -> HistoryStats {
        HistoryStats {
            total_decisions: total,
            avg_urgency,
            dominant_emotion: emotion.to_string(),
            regret_avoided: avoided,
            emotion_trend: EmotionTrend::Stable,
        }
    }

    #[test]
    fn test_nothing_fires() {
        assert!(narrate_history(&stats(0, 50.0, "unknown", 0)).is_empty());
    }

    #[test]
    fn test_everything_fires_in_order() {
        let result = narrate_history(&stats(5, 20.0, "calm", 85));
        assert_eq!(result.len(), 4);
        assert_eq!(
            result[0],
            "You've paused to reflect 5 times. Each pause is a step toward clarity."
        );
        assert_eq!(
            result[1],
            "You've avoided high-risk decisions 85% of the time. Your patience is paying off."
        );
        assert_eq!(result[2], NARRATIVE_COOLING);
        assert_eq!(result[3], dominant_emotion_narrative(Emotion::Calm));
    }

    #[test]
    fn test_avoidance_pair_is_exclusive() {
        let strong = narrate_history(&stats(0, 50.0, "", 71));
        assert_eq!(strong.len(), 1);
        assert!(strong[0].contains("71%"));

        let building = narrate_history(&stats(0, 50.0, "", 70));
        assert_eq!(building, vec![NARRATIVE_BUILDING_PATTERN]);

        assert!(narrate_history(&stats(0, 50.0, "", 50)).is_empty());
    }

    #[test]
    fn test_urgency_pair_is_exclusive() {
        assert_eq!(narrate_history(&stats(0, 39.9, "", 0)), vec![NARRATIVE_COOLING]);
        assert!(narrate_history(&stats(0, 40.0, "", 0)).is_empty());
        assert!(narrate_history(&stats(0, 65.0, "", 0)).is_empty());
        assert_eq!(narrate_history(&stats(0, 65.5, "", 0)), vec![NARRATIVE_HIGH_URGENCY]);
    }

    #[test]
    fn test_total_decisions_threshold() {
        assert!(narrate_history(&stats(2, 50.0, "", 0)).is_empty());
        assert_eq!(narrate_history(&stats(3, 50.0, "", 0)).len(), 1);
    }

    #[test]
    fn test_every_emotion_has_a_narrative() {
        for emotion in Emotion::ALL {
            let result = narrate_history(&stats(0, 50.0, emotion.key(), 0));
            assert_eq!(result, vec![dominant_emotion_narrative(emotion)]);
        }
    }

    #[test]
    fn test_urgency_band() {
        assert_eq!(urgency_band(10.0), "Low pressure");
        assert_eq!(urgency_band(40.0), "Moderate");
        assert_eq!(urgency_band(64.9), "Moderate");
        assert_eq!(urgency_band(65.0), "High intensity");
    }

    #[test]
    fn test_trend_reflection() {
        assert!(EmotionTrend::Improving.reflection().contains("positive growth"));
        assert!(EmotionTrend::Declining.reflection().contains("extra care"));
        assert!(EmotionTrend::Stable.reflection().contains("consistent"));
    }
}

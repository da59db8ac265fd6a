//! Contextual insights
//!
//! Rules are independent and evaluated in a fixed order; every rule that
//! holds contributes one line. When none hold, a single reflective
//! fallback is returned so the result is never empty.

use crate::tables::{
    INSIGHT_ANGER, INSIGHT_ANXIOUS_URGENCY, INSIGHT_BALANCED, INSIGHT_EMOTIONAL_MESSAGE,
    INSIGHT_FALLBACK, INSIGHT_HIGH_URGENCY,
};
use crate::types::{Emotion, EmotionData, Trigger};

struct InsightRule {
    applies: fn(Option<Emotion>, i32, Option<Trigger>) -> bool,
    text: &'static str,
}

const RULES: &[InsightRule] = &[
    InsightRule {
        applies: |_, urgency, _| urgency > 75,
        text: INSIGHT_HIGH_URGENCY,
    },
    InsightRule {
        applies: |emotion, _, _| emotion == Some(Emotion::Angry),
        text: INSIGHT_ANGER,
    },
    InsightRule {
        applies: |emotion, urgency, _| emotion == Some(Emotion::Anxious) && urgency > 50,
        text: INSIGHT_ANXIOUS_URGENCY,
    },
    InsightRule {
        applies: |emotion, _, trigger| {
            trigger == Some(Trigger::Message)
                && matches!(emotion, Some(Emotion::Angry | Emotion::Sad))
        },
        text: INSIGHT_EMOTIONAL_MESSAGE,
    },
    InsightRule {
        applies: |emotion, urgency, _| {
            urgency < 30 && matches!(emotion, Some(Emotion::Calm | Emotion::Happy))
        },
        text: INSIGHT_BALANCED,
    },
];

/// Observations about this moment, in rule order; never empty
pub fn insights(data: &EmotionData) -> Vec<String> {
    let emotion = data.emotion_kind();
    let trigger = data.trigger_kind();
    let urgency = data.clamped_urgency();

    let fired: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(emotion, urgency, trigger))
        .map(|rule| rule.text.to_string())
        .collect();

    if fired.is_empty() {
        vec![INSIGHT_FALLBACK.to_string()]
    } else {
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angry_message_high_urgency() {
        let result = insights(&EmotionData::new("angry", 78, "message"));
        assert_eq!(
            result,
            vec![INSIGHT_HIGH_URGENCY, INSIGHT_ANGER, INSIGHT_EMOTIONAL_MESSAGE]
        );
    }

    #[test]
    fn test_anxious_needs_urgency_over_50() {
        assert_eq!(
            insights(&EmotionData::new("anxious", 50, "decision")),
            vec![INSIGHT_FALLBACK]
        );
        assert_eq!(
            insights(&EmotionData::new("anxious", 51, "decision")),
            vec![INSIGHT_ANXIOUS_URGENCY]
        );
    }

    #[test]
    fn test_balanced_state() {
        assert_eq!(
            insights(&EmotionData::new("calm", 10, "decision")),
            vec![INSIGHT_BALANCED]
        );
        assert_eq!(
            insights(&EmotionData::new("happy", 29, "message")),
            vec![INSIGHT_BALANCED]
        );
        assert_eq!(
            insights(&EmotionData::new("happy", 30, "message")),
            vec![INSIGHT_FALLBACK]
        );
    }

    #[test]
    fn test_sad_message() {
        assert_eq!(
            insights(&EmotionData::new("sad", 40, "message")),
            vec![INSIGHT_EMOTIONAL_MESSAGE]
        );
    }

    #[test]
    fn test_high_urgency_applies_to_unknown_emotion() {
        assert_eq!(
            insights(&EmotionData::new("confused", 90, "unknown")),
            vec![INSIGHT_HIGH_URGENCY]
        );
    }

    #[test]
    fn test_never_empty() {
        for emotion in ["calm", "happy", "anxious", "angry", "sad", "excited", "other"] {
            for trigger in ["message", "decision", "action", "other"] {
                for urgency in (0..=100).step_by(5) {
                    assert!(!insights(&EmotionData::new(emotion, urgency, trigger)).is_empty());
                }
            }
        }
    }
}

//! Core types for the Future Self reflection engine
//!
//! Inputs arrive as loose strings from the UI (emotion chip, trigger
//! category, urgency slider). They are parsed into enums at the edge and
//! anything unrecognized falls back to a documented default instead of
//! failing.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Lowest and highest urgency the slider can produce
pub const URGENCY_MIN: i32 = 0;
pub const URGENCY_MAX: i32 = 100;

/// The user's stated state at the moment of a decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionData {
    pub emotion: String,
    /// 0-100; out-of-range values are clamped, never rejected
    #[serde(deserialize_with = "lenient_urgency")]
    pub urgency: i32,
    pub trigger: String,
}

impl EmotionData {
    pub fn new(emotion: impl Into<String>, urgency: i32, trigger: impl Into<String>) -> Self {
        Self {
            emotion: emotion.into(),
            urgency,
            trigger: trigger.into(),
        }
    }

    /// Parse from the JSON shape the UI submits
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid emotion data JSON")
    }

    /// Urgency clamped into the slider range
    pub fn clamped_urgency(&self) -> i32 {
        self.urgency.clamp(URGENCY_MIN, URGENCY_MAX)
    }

    pub fn urgency_in_range(&self) -> bool {
        (URGENCY_MIN..=URGENCY_MAX).contains(&self.urgency)
    }

    pub fn emotion_kind(&self) -> Option<Emotion> {
        Emotion::from_key(&self.emotion)
    }

    pub fn trigger_kind(&self) -> Option<Trigger> {
        Trigger::from_key(&self.trigger)
    }

    /// Urgency above 65 reads as pressing
    pub fn urgency_level(&self) -> UrgencyLevel {
        if self.clamped_urgency() > 65 {
            UrgencyLevel::High
        } else {
            UrgencyLevel::Low
        }
    }
}

/// Accept any JSON number for urgency: fractions round half up, and
/// values beyond `i32` saturate so clamping can still apply
fn lenient_urgency<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok((value + 0.5).floor() as i32)
}

/// Emotions offered by the check-in chips
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Calm,
    Happy,
    Anxious,
    Angry,
    Sad,
    Excited,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Calm,
        Emotion::Happy,
        Emotion::Anxious,
        Emotion::Angry,
        Emotion::Sad,
        Emotion::Excited,
    ];

    /// Exact lowercase key match; anything else is unrecognized
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "calm" => Some(Emotion::Calm),
            "happy" => Some(Emotion::Happy),
            "anxious" => Some(Emotion::Anxious),
            "angry" => Some(Emotion::Angry),
            "sad" => Some(Emotion::Sad),
            "excited" => Some(Emotion::Excited),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Emotion::Calm => "calm",
            Emotion::Happy => "happy",
            Emotion::Anxious => "anxious",
            Emotion::Angry => "angry",
            Emotion::Sad => "sad",
            Emotion::Excited => "excited",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Calm => "😌",
            Emotion::Happy => "😊",
            Emotion::Anxious => "😰",
            Emotion::Angry => "😤",
            Emotion::Sad => "😢",
            Emotion::Excited => "🤩",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Calm => "Calm",
            Emotion::Happy => "Happy",
            Emotion::Anxious => "Anxious",
            Emotion::Angry => "Angry",
            Emotion::Sad => "Sad",
            Emotion::Excited => "Excited",
        }
    }
}

/// Category of the decision being weighed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Message,
    Decision,
    Action,
}

impl Trigger {
    pub const ALL: [Trigger; 3] = [Trigger::Message, Trigger::Decision, Trigger::Action];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "message" => Some(Trigger::Message),
            "decision" => Some(Trigger::Decision),
            "action" => Some(Trigger::Action),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Trigger::Message => "message",
            Trigger::Decision => "decision",
            Trigger::Action => "action",
        }
    }

    /// Label shown on the trigger picker
    pub fn label(&self) -> &'static str {
        match self {
            Trigger::Message => "Message to Send",
            Trigger::Decision => "Major Decision",
            Trigger::Action => "Action to Take",
        }
    }

    /// Phrase used when describing a user's most common trigger
    pub fn pattern_label(&self) -> &'static str {
        match self {
            Trigger::Message => "sending messages",
            Trigger::Decision => "major decisions",
            Trigger::Action => "taking actions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyLevel {
    Low,
    High,
}

impl UrgencyLevel {
    pub fn name(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::High => "high",
        }
    }
}

/// Coarse display bucket derived from regret probability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Regret",
            RiskLevel::Medium => "Medium Regret",
            RiskLevel::High => "High Regret",
        }
    }
}

/// Direction a projected narrative moves relative to the present
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalShift {
    Improved,
    Stable,
    Declined,
}

/// One imagined look back from a future horizon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureSimulation {
    pub timeframe: String,
    pub emoji: String,
    pub narrative: String,
    pub emotional_shift: EmotionalShift,
}

/// Full analysis of one decision moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiResponse {
    pub recommendation: String,
    /// Always 24 hours, 7 days, 30 days, in that order
    pub future_simulations: [FutureSimulation; 3],
    /// 5-95
    pub regret_probability: u8,
    pub risk_level: RiskLevel,
    pub insights: Vec<String>,
}

/// Direction of the user's recent check-in moods
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmotionTrend {
    Improving,
    #[default]
    Stable,
    Declining,
}

impl EmotionTrend {
    /// One-line reflection shown next to the trend indicator
    pub fn reflection(&self) -> &'static str {
        match self {
            EmotionTrend::Improving => "Your emotional patterns show positive growth over time.",
            EmotionTrend::Declining => "Consider extra care in your reflections right now.",
            EmotionTrend::Stable => "You're maintaining consistent emotional awareness.",
        }
    }
}

/// Snapshot of past decisions, aggregated by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total_decisions: u32,
    pub avg_urgency: f64,
    pub dominant_emotion: String,
    /// Percentage 0-100
    pub regret_avoided: u32,
    #[serde(default)]
    pub emotion_trend: EmotionTrend,
}

impl HistoryStats {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid history stats JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_keys_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_key(emotion.key()), Some(emotion));
        }
        assert_eq!(Emotion::from_key("Angry"), None);
        assert_eq!(Emotion::from_key("bored"), None);
    }

    #[test]
    fn test_trigger_keys() {
        for trigger in Trigger::ALL {
            assert_eq!(Trigger::from_key(trigger.key()), Some(trigger));
        }
        assert_eq!(Trigger::from_key("unknown"), None);
    }

    #[test]
    fn test_clamped_urgency() {
        assert_eq!(EmotionData::new("calm", -20, "decision").clamped_urgency(), 0);
        assert_eq!(EmotionData::new("calm", 140, "decision").clamped_urgency(), 100);
        assert_eq!(EmotionData::new("calm", 42, "decision").clamped_urgency(), 42);
    }

    #[test]
    fn test_urgency_level_boundary() {
        assert_eq!(EmotionData::new("calm", 65, "decision").urgency_level(), UrgencyLevel::Low);
        assert_eq!(EmotionData::new("calm", 66, "decision").urgency_level(), UrgencyLevel::High);
    }

    #[test]
    fn test_emotion_data_from_json() {
        let data = EmotionData::from_json(r#"{"emotion":"sad","urgency":40,"trigger":"message"}"#).unwrap();
        assert_eq!(data, EmotionData::new("sad", 40, "message"));

        assert!(EmotionData::from_json(r#"{"emotion":"sad"}"#).is_err());
    }

    #[test]
    fn test_from_json_clamps_extreme_urgency() {
        let huge = EmotionData::from_json(r#"{"emotion":"angry","urgency":5000000000,"trigger":"message"}"#).unwrap();
        assert_eq!(huge.urgency, i32::MAX);
        assert_eq!(huge.clamped_urgency(), 100);

        let negative = EmotionData::from_json(r#"{"emotion":"angry","urgency":-5000000000,"trigger":"message"}"#).unwrap();
        assert_eq!(negative.clamped_urgency(), 0);

        let fractional = EmotionData::from_json(r#"{"emotion":"calm","urgency":72.5,"trigger":"decision"}"#).unwrap();
        assert_eq!(fractional.urgency, 73);

        let below_half = EmotionData::from_json(r#"{"emotion":"calm","urgency":72.4,"trigger":"decision"}"#).unwrap();
        assert_eq!(below_half.urgency, 72);

        assert!(EmotionData::from_json(r#"{"emotion":"calm","urgency":"high","trigger":"decision"}"#).is_err());
    }

    #[test]
    fn test_urgency_in_range() {
        assert!(EmotionData::new("calm", 0, "decision").urgency_in_range());
        assert!(EmotionData::new("calm", 100, "decision").urgency_in_range());
        assert!(!EmotionData::new("calm", 101, "decision").urgency_in_range());
        assert!(!EmotionData::new("calm", -1, "decision").urgency_in_range());
    }

    #[test]
    fn test_display_labels() {
        let emotions: Vec<_> = Emotion::ALL.iter().map(|e| (e.emoji(), e.label())).collect();
        assert_eq!(
            emotions,
            [
                ("😌", "Calm"),
                ("😊", "Happy"),
                ("😰", "Anxious"),
                ("😤", "Angry"),
                ("😢", "Sad"),
                ("🤩", "Excited"),
            ]
        );

        let triggers: Vec<_> = Trigger::ALL.iter().map(|t| (t.label(), t.pattern_label())).collect();
        assert_eq!(
            triggers,
            [
                ("Message to Send", "sending messages"),
                ("Major Decision", "major decisions"),
                ("Action to Take", "taking actions"),
            ]
        );

        assert_eq!(RiskLevel::Low.label(), "Low Regret");
        assert_eq!(RiskLevel::Medium.label(), "Medium Regret");
        assert_eq!(RiskLevel::High.label(), "High Regret");
    }

    #[test]
    fn test_history_stats_camel_case() {
        let stats = HistoryStats::from_json(
            r#"{"totalDecisions":4,"avgUrgency":55.5,"dominantEmotion":"calm","regretAvoided":80,"emotionTrend":"improving"}"#,
        )
        .unwrap();
        assert_eq!(stats.total_decisions, 4);
        assert_eq!(stats.emotion_trend, EmotionTrend::Improving);

        let defaulted = HistoryStats::from_json(
            r#"{"totalDecisions":0,"avgUrgency":0,"dominantEmotion":"","regretAvoided":0}"#,
        )
        .unwrap();
        assert_eq!(defaulted.emotion_trend, EmotionTrend::Stable);
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&EmotionalShift::Declined).unwrap(), "\"declined\"");
        assert_eq!(serde_json::to_string(&EmotionTrend::Declining).unwrap(), "\"declining\"");
    }
}

//! Static tables: weights, multipliers and the curated phrasing pools
//!
//! Nothing here is mutated at runtime. Each pool carries a distinct tone
//! per emotion (anger leans on timing, sadness on self-gentleness) so new
//! phrasing must keep to the theme of the pool it lands in.

use crate::types::{Emotion, Trigger, UrgencyLevel};

pub const DEFAULT_EMOTION_WEIGHT: f64 = 0.5;
pub const DEFAULT_TRIGGER_MULTIPLIER: f64 = 1.0;

/// How strongly an emotion clouds judgment (0-1)
pub fn emotion_weight(emotion: Emotion) -> f64 {
    match emotion {
        Emotion::Calm => 0.1,
        Emotion::Happy => 0.2,
        Emotion::Anxious => 0.7,
        Emotion::Angry => 0.9,
        Emotion::Sad => 0.5,
        Emotion::Excited => 0.6,
    }
}

/// Messages and actions are harder to take back than a considered decision
pub fn trigger_multiplier(trigger: Trigger) -> f64 {
    match trigger {
        Trigger::Message => 1.2,
        Trigger::Decision => 1.0,
        Trigger::Action => 1.3,
    }
}

// ============================================================================
// Recommendations
// ============================================================================

/// Which urgency levels a recommendation pool covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolScope {
    Only(UrgencyLevel),
    Any,
}

pub struct RecommendationPool {
    pub emotion: Emotion,
    pub scope: PoolScope,
    pub options: &'static [&'static str],
}

pub static RECOMMENDATIONS: &[RecommendationPool] = &[
    RecommendationPool {
        emotion: Emotion::Calm,
        scope: PoolScope::Only(UrgencyLevel::Low),
        options: &[
            "Your centered state suggests clarity. Trust your process.",
            "A calm mind often sees further. Proceed with gentle awareness.",
        ],
    },
    RecommendationPool {
        emotion: Emotion::Calm,
        scope: PoolScope::Only(UrgencyLevel::High),
        options: &[
            "Though urgency feels real, your calm foundation is a strength. Use it.",
            "Urgency and calm can coexist. Let your steady mind guide the pace.",
        ],
    },
    RecommendationPool {
        emotion: Emotion::Angry,
        scope: PoolScope::Any,
        options: &[
            "Strong emotions carry important information, but rarely good timing.",
            "A calmer response today may reduce emotional weight later.",
            "What feels urgent now may look different after rest.",
        ],
    },
    RecommendationPool {
        emotion: Emotion::Anxious,
        scope: PoolScope::Any,
        options: &[
            "Anxiety often magnifies urgency. Consider what's actually at stake.",
            "Your mind is preparing for possibilities. Not all need immediate action.",
            "What would you tell a friend feeling this way about this decision?",
        ],
    },
    RecommendationPool {
        emotion: Emotion::Excited,
        scope: PoolScope::Only(UrgencyLevel::High),
        options: &[
            "Excitement is beautiful, but quick decisions can miss important details.",
            "Let the energy fuel your preparation, not just your speed.",
        ],
    },
    RecommendationPool {
        emotion: Emotion::Excited,
        scope: PoolScope::Only(UrgencyLevel::Low),
        options: &[
            "Positive anticipation is a good companion for thoughtful planning.",
            "Your enthusiasm can guide you well when paired with patience.",
        ],
    },
    RecommendationPool {
        emotion: Emotion::Sad,
        scope: PoolScope::Any,
        options: &[
            "Decisions made in low moments often carry that weight forward.",
            "Gentleness with yourself now may prevent regret later.",
            "This feeling will shift. Give yourself time before committing.",
        ],
    },
    RecommendationPool {
        emotion: Emotion::Happy,
        scope: PoolScope::Any,
        options: &[
            "Happiness can be a wonderful lens, but consider multiple perspectives.",
            "Joy is a gift. Let it inform, not rush, your choices.",
        ],
    },
];

/// Used when neither an exact nor an "any" pool exists for the emotion
pub static GENERIC_RECOMMENDATIONS: &[&str] = &[
    "Pausing to reflect is already a wise choice.",
    "Consider what matters most before moving forward.",
];

// ============================================================================
// 24-hour outcomes, keyed by trigger and tier
// ============================================================================

/// Outcome tone for the near-term projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeTone {
    Positive,
    Neutral,
    Negative,
}

pub fn outcome_pool(trigger: Trigger, tone: OutcomeTone) -> &'static [&'static str] {
    match (tone, trigger) {
        (OutcomeTone::Positive, Trigger::Message) => &[
            "I'm relieved I waited. The message I sent was clearer and kinder.",
            "Taking time helped me say what I actually meant.",
            "The conversation went better than expected because I was ready.",
        ],
        (OutcomeTone::Positive, Trigger::Decision) => &[
            "Looking back, the extra thought made all the difference.",
            "I found options I wouldn't have seen if I'd rushed.",
            "The decision feels right because I gave it proper weight.",
        ],
        (OutcomeTone::Positive, Trigger::Action) => &[
            "Acting from a calmer place led to better outcomes.",
            "I'm proud of how I handled this.",
            "The pause helped me act with intention rather than reaction.",
        ],
        (OutcomeTone::Neutral, Trigger::Message) => &[
            "The message landed okay. Neither great nor problematic.",
            "I said what needed saying. Time will tell the rest.",
        ],
        (OutcomeTone::Neutral, Trigger::Decision) => &[
            "I made my choice. The future is still unfolding.",
            "Some uncertainty remains, but I'm at peace with my process.",
        ],
        (OutcomeTone::Neutral, Trigger::Action) => &[
            "I did what I felt was right in the moment.",
            "The action is done. Now I focus on what comes next.",
        ],
        (OutcomeTone::Negative, Trigger::Message) => &[
            "I wish I had waited longer. The words landed harder than intended.",
            "Rushing that message created more to clean up.",
        ],
        (OutcomeTone::Negative, Trigger::Decision) => &[
            "Hindsight shows me what I couldn't see in the moment.",
            "The urgency I felt wasn't the wisest advisor.",
        ],
        (OutcomeTone::Negative, Trigger::Action) => &[
            "Acting so quickly didn't serve me as well as I'd hoped.",
            "I learned something about my patterns. That has value too.",
        ],
    }
}

// ============================================================================
// Insights
// ============================================================================

pub const INSIGHT_HIGH_URGENCY: &str =
    "High urgency often masks fear. Consider what you're afraid might happen if you wait.";
pub const INSIGHT_ANGER: &str =
    "Anger often protects something vulnerable. What's underneath this feeling?";
pub const INSIGHT_ANXIOUS_URGENCY: &str =
    "Anxiety paired with urgency can create a false sense of emergency.";
pub const INSIGHT_EMOTIONAL_MESSAGE: &str =
    "Words sent in strong emotion often outlive the feeling that created them.";
pub const INSIGHT_BALANCED: &str = "Your balanced state is ideal for thoughtful decision-making.";
pub const INSIGHT_FALLBACK: &str = "Taking time to reflect is itself a valuable choice.";

// ============================================================================
// History narratives
// ============================================================================

pub const NARRATIVE_BUILDING_PATTERN: &str =
    "You're building a pattern of thoughtful choices. Keep nurturing this habit.";
pub const NARRATIVE_COOLING: &str =
    "Your emotional temperature is cooling over time. This suggests growing self-awareness.";
pub const NARRATIVE_HIGH_URGENCY: &str =
    "You often face high-urgency moments. Remember: urgency felt isn't always urgency real.";

pub fn dominant_emotion_narrative(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anxious => {
            "Anxiety has been a frequent visitor. Consider what it's trying to protect you from."
        }
        Emotion::Angry => {
            "You tend to reflect most when feeling frustrated. This self-awareness is valuable."
        }
        Emotion::Calm => "Calm is your dominant state. You're making decisions from a centered place.",
        Emotion::Excited => {
            "Excitement drives many of your reflections. Channel that energy thoughtfully."
        }
        Emotion::Happy => {
            "Positive emotions guide much of your reflection. Joy can be a wise advisor."
        }
        Emotion::Sad => {
            "You seek reflection during low moments. This gentleness with yourself matters."
        }
    }
}

//! Future-self projections at three horizons
//!
//! - 24 hours: trigger-specific narrative, tone picked by regret tier
//! - 7 days: fixed narrative by regret band (50/30), trigger ignored
//! - 30 days: fixed narrative by regret band (65/40), always `Improved`
//!
//! Each horizon keeps its own cutoffs. They are not meant to line up.

use crate::counsel::pick;
use crate::scoring::regret_probability;
use crate::tables::{outcome_pool, OutcomeTone};
use crate::types::{EmotionData, EmotionalShift, FutureSimulation, Trigger};
use rand::Rng;

pub const TIMEFRAME_24H: &str = "24 Hours Later";
pub const TIMEFRAME_7D: &str = "7 Days Later";
pub const TIMEFRAME_30D: &str = "30 Days Later";

const NEAR_TERM_HIGH_ABOVE: u8 = 60;
const NEAR_TERM_MEDIUM_ABOVE: u8 = 35;

const WEEK_REFLECTIVE_ABOVE: u8 = 50;
const WEEK_RELIEVED_ABOVE: u8 = 30;

const MONTH_LESSON_ABOVE: u8 = 65;
const MONTH_GROWTH_ABOVE: u8 = 40;

/// A fixed horizon outcome (emoji, narrative, shift)
struct Scenario {
    emoji: &'static str,
    narrative: &'static str,
    shift: EmotionalShift,
}

impl Scenario {
    fn at(&self, timeframe: &str) -> FutureSimulation {
        FutureSimulation {
            timeframe: timeframe.to_string(),
            emoji: self.emoji.to_string(),
            narrative: self.narrative.to_string(),
            emotional_shift: self.shift,
        }
    }
}

static WEEK_REFLECTIVE: Scenario = Scenario {
    emoji: "🤔",
    narrative: "A week of perspective has helped me see this more clearly. I understand my patterns better now.",
    shift: EmotionalShift::Stable,
};
static WEEK_RELIEVED: Scenario = Scenario {
    emoji: "😊",
    narrative: "Time has eased my concerns. What felt heavy then feels lighter now.",
    shift: EmotionalShift::Improved,
};
static WEEK_GRATEFUL: Scenario = Scenario {
    emoji: "😌",
    narrative: "I'm grateful for the reflection I took. It helped me move forward with confidence.",
    shift: EmotionalShift::Improved,
};

static MONTH_LESSON: Scenario = Scenario {
    emoji: "📚",
    narrative: "This became a lesson I carry forward. Every experience teaches something.",
    shift: EmotionalShift::Improved,
};
static MONTH_GROWTH: Scenario = Scenario {
    emoji: "🌱",
    narrative: "A month later, the details have faded but the growth remains.",
    shift: EmotionalShift::Improved,
};
static MONTH_PATTERN: Scenario = Scenario {
    emoji: "✨",
    narrative: "Looking back, I see how this moment fit into a larger pattern of mindful choices.",
    shift: EmotionalShift::Improved,
};

fn near_term_tone(regret: u8) -> OutcomeTone {
    if regret > NEAR_TERM_HIGH_ABOVE {
        OutcomeTone::Negative
    } else if regret > NEAR_TERM_MEDIUM_ABOVE {
        OutcomeTone::Neutral
    } else {
        OutcomeTone::Positive
    }
}

impl OutcomeTone {
    fn emoji(&self) -> &'static str {
        match self {
            OutcomeTone::Negative => "😔",
            OutcomeTone::Neutral => "😐",
            OutcomeTone::Positive => "😌",
        }
    }

    fn shift(&self) -> EmotionalShift {
        match self {
            OutcomeTone::Negative => EmotionalShift::Declined,
            OutcomeTone::Neutral => EmotionalShift::Stable,
            OutcomeTone::Positive => EmotionalShift::Improved,
        }
    }
}

/// Unrecognized triggers share the `decision` pools
fn resolve_trigger(data: &EmotionData) -> Trigger {
    data.trigger_kind().unwrap_or_else(|| {
        tracing::trace!(trigger = %data.trigger, "unrecognized trigger, using decision pools");
        Trigger::Decision
    })
}

/// The pool the 24-hour narrative will be drawn from
pub fn near_term_candidates(data: &EmotionData) -> &'static [&'static str] {
    let tone = near_term_tone(regret_probability(data));
    outcome_pool(resolve_trigger(data), tone)
}

fn week_scenario(regret: u8) -> &'static Scenario {
    if regret > WEEK_REFLECTIVE_ABOVE {
        &WEEK_REFLECTIVE
    } else if regret > WEEK_RELIEVED_ABOVE {
        &WEEK_RELIEVED
    } else {
        &WEEK_GRATEFUL
    }
}

fn month_scenario(regret: u8) -> &'static Scenario {
    if regret > MONTH_LESSON_ABOVE {
        &MONTH_LESSON
    } else if regret > MONTH_GROWTH_ABOVE {
        &MONTH_GROWTH
    } else {
        &MONTH_PATTERN
    }
}

/// Generate the three horizon projections, in chronological order
pub fn project<R: Rng + ?Sized>(data: &EmotionData, rng: &mut R) -> [FutureSimulation; 3] {
    project_scored(data, regret_probability(data), rng)
}

/// Projections for an already computed regret probability
pub fn project_scored<R: Rng + ?Sized>(
    data: &EmotionData,
    regret: u8,
    rng: &mut R,
) -> [FutureSimulation; 3] {
    let tone = near_term_tone(regret);
    let pool = outcome_pool(resolve_trigger(data), tone);

    let narrative = pick(pool, rng).unwrap_or(outcome_pool(Trigger::Decision, tone)[0]);

    let near_term = FutureSimulation {
        timeframe: TIMEFRAME_24H.to_string(),
        emoji: tone.emoji().to_string(),
        narrative: narrative.to_string(),
        emotional_shift: tone.shift(),
    };

    [
        near_term,
        week_scenario(regret).at(TIMEFRAME_7D),
        month_scenario(regret).at(TIMEFRAME_30D),
    ]
}

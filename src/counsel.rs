//! Recommendation selector
//!
//! Pool resolution walks from the most specific key to the least:
//! emotion + urgency level, then the emotion's "any" pool, then the
//! generic pool. The pick inside the resolved pool is uniformly random.

use crate::tables::{PoolScope, GENERIC_RECOMMENDATIONS, RECOMMENDATIONS};
use crate::types::{Emotion, EmotionData};
use rand::seq::SliceRandom;
use rand::Rng;

/// The pool a recommendation for `data` will be drawn from
pub fn candidate_recommendations(data: &EmotionData) -> &'static [&'static str] {
    let level = data.urgency_level();
    let Some(emotion) = data.emotion_kind() else {
        tracing::trace!(emotion = %data.emotion, "unrecognized emotion, using generic pool");
        return GENERIC_RECOMMENDATIONS;
    };

    find_pool(emotion, PoolScope::Only(level))
        .or_else(|| find_pool(emotion, PoolScope::Any))
        .unwrap_or(GENERIC_RECOMMENDATIONS)
}

fn find_pool(emotion: Emotion, scope: PoolScope) -> Option<&'static [&'static str]> {
    RECOMMENDATIONS
        .iter()
        .find(|pool| pool.emotion == emotion && pool.scope == scope)
        .map(|pool| pool.options)
}

/// Pick one short advisory line for this moment
pub fn recommend<R: Rng + ?Sized>(data: &EmotionData, rng: &mut R) -> &'static str {
    pick(candidate_recommendations(data), rng).unwrap_or(GENERIC_RECOMMENDATIONS[0])
}

/// Uniform draw from a finite pool
pub(crate) fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> Option<&'static str> {
    pool.choose(rng).copied()
}

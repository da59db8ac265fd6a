//! Reasoning engine: composes scoring, counsel, projections and insights
//!
//! `ReasoningEngine` owns its random source so callers can pin phrasing
//! with a seed. The free functions at the bottom use the thread-local RNG
//! for one-off calls.

use crate::config::EngineConfig;
use crate::counsel;
use crate::insights;
use crate::projection;
use crate::scoring::regret_probability;
use crate::types::{AiResponse, EmotionData, FutureSimulation, RiskLevel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Stateless apart from its RNG; safe to reuse for any number of calls
pub struct ReasoningEngine<R: Rng = StdRng> {
    rng: R,
}

impl ReasoningEngine<StdRng> {
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::with_rng(StdRng::from_entropy()),
        }
    }
}

impl Default for ReasoningEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ReasoningEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn regret_probability(&self, data: &EmotionData) -> u8 {
        regret_probability(data)
    }

    pub fn recommend(&mut self, data: &EmotionData) -> String {
        counsel::recommend(data, &mut self.rng).to_string()
    }

    pub fn project(&mut self, data: &EmotionData) -> [FutureSimulation; 3] {
        projection::project(data, &mut self.rng)
    }

    pub fn insights(&self, data: &EmotionData) -> Vec<String> {
        insights::insights(data)
    }

    /// Full analysis of one decision moment
    pub fn analyze(&mut self, data: &EmotionData) -> AiResponse {
        let regret = regret_probability(data);
        let risk_level = RiskLevel::from_probability(regret);

        if !data.urgency_in_range() {
            tracing::debug!(urgency = data.urgency, "urgency out of range, clamping");
        }

        tracing::debug!(
            emotion = %data.emotion,
            trigger = %data.trigger,
            urgency = data.urgency,
            urgency_level = data.urgency_level().name(),
            regret_probability = regret,
            risk_level = ?risk_level,
            "analyzed decision"
        );

        AiResponse {
            recommendation: self.recommend(data),
            future_simulations: projection::project_scored(data, regret, &mut self.rng),
            regret_probability: regret,
            risk_level,
            insights: insights::insights(data),
        }
    }
}

/// Regret probability for a decision moment (5-95)
pub fn calculate_regret_probability(data: &EmotionData) -> u8 {
    regret_probability(data)
}

pub fn generate_recommendation(data: &EmotionData) -> String {
    counsel::recommend(data, &mut rand::thread_rng()).to_string()
}

pub fn generate_future_simulations(data: &EmotionData) -> [FutureSimulation; 3] {
    projection::project(data, &mut rand::thread_rng())
}

pub fn generate_insights(data: &EmotionData) -> Vec<String> {
    insights::insights(data)
}

/// One-off analysis using the thread-local RNG
pub fn analyze_decision(data: &EmotionData) -> AiResponse {
    ReasoningEngine::with_rng(rand::thread_rng()).analyze(data)
}

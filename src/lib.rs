//! Future Self - regret-aware reflection engine
//!
//! Given how someone feels, how urgent things seem and what kind of
//! decision they face, the engine produces a regret probability, a risk
//! level, a short recommendation, three look-backs from their future self
//! and a handful of insights. A separate narrator turns aggregated history
//! into personalization sentences.
//!
//! The numbers are illustrative, not predictive: there is no model, no
//! learning and no I/O. Every call is a pure function of its input plus
//! a random pick among equally valid phrasings.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use future_self::{EmotionData, ReasoningEngine};
//!
//! // Seed for reproducible phrasing, or ReasoningEngine::new() for entropy
//! let mut engine = ReasoningEngine::with_seed(42);
//! let response = engine.analyze(&EmotionData::new("angry", 78, "message"));
//!
//! assert_eq!(response.regret_probability, 95);
//! println!("{}", response.recommendation);
//! for sim in &response.future_simulations {
//!     println!("{} {} {}", sim.timeframe, sim.emoji, sim.narrative);
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! EmotionData ──┬─> scoring    ─> regret probability ─> risk level
//!               ├─> counsel    ─> recommendation
//!               ├─> projection ─> 24h / 7d / 30d simulations
//!               └─> insights   ─> contextual observations
//!                        │
//!                        ▼
//!                    AiResponse
//!
//! HistoryStats ───> narrative  ─> personalization sentences
//! ```

pub mod config;
pub mod counsel;
pub mod engine;
pub mod insights;
pub mod narrative;
pub mod projection;
pub mod scoring;
pub mod tables;
pub mod types;

// Core types
pub use config::EngineConfig;
pub use engine::ReasoningEngine;
pub use types::*;

// Individually addressable operations
pub use engine::{
    analyze_decision, calculate_regret_probability, generate_future_simulations,
    generate_insights, generate_recommendation,
};
pub use narrative::{narrate_history, urgency_band};

// Candidate pools, for membership checks against random picks
pub use counsel::candidate_recommendations;
pub use projection::near_term_candidates;

//! Rule-Based Fallback System
//!
//! Provides rule-based transit heuristics when the trained model is unavailable.

mod rules;

pub use rules::{FallbackConfig, HeuristicScorer, LightCurveStats};

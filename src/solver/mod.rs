//! Candidate narrowing and guess selection
//!
//! `CandidateSet` does the elimination and scoring; strategies decide which
//! scoring routine to use on each turn.

mod candidates;
pub mod strategy;

pub use candidates::CandidateSet;
pub use strategy::{
    FrequencyStrategy, PROBE_THRESHOLD, ProbingStrategy, Strategy, StrategyState, StrategyType,
};

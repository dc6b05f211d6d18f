//! DeckForge Solver Engine
//!
//! This crate implements the multi-stage combinatorial deck-set search:
//! - Candidate scorer (popularity × recency × readiness)
//! - Stage expander and beam selector
//! - Final ranking and diversification pass
//! - The `Recommender` orchestrator
//! - Progress-event system for monitoring
//!
//! The pipeline is single-threaded in structure and fully deterministic:
//! catalog and level data are immutable snapshots, and the only internal
//! parallelism is per-candidate scoring, whose results are merged back
//! in enumeration order before any selection happens.

pub mod event;
pub mod expand;
pub mod finalize;
pub mod node;
pub mod recommender;
pub mod score;

pub use event::{
    CountingProgressListener, LoggingProgressListener, ProgressEventSupport, ProgressListener,
};
pub use expand::{expand_stage, select_beam};
pub use finalize::finalize;
pub use node::PartialDeckSet;
pub use recommender::{RecommendError, RecommendRequest, Recommender};
pub use score::{
    score_candidate, ScoringContext, READINESS_DECAY, RECENCY_DECAY_PER_DAY, REJECTED_SCORE,
};

//! Progress events for recommendation monitoring.
//!
//! The event channel lets front ends surface "Assembling deck slot 2/4"
//! style status while a recommendation runs. It is strictly
//! observational: listeners are notified after the fact and can never
//! influence which candidates advance.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use deckforge_solver::event::{ProgressEventSupport, ProgressListener};
//!
//! #[derive(Debug)]
//! struct StageEcho;
//! impl ProgressListener for StageEcho {
//!     fn on_stage_started(&self, stage: usize, total_stages: usize) {
//!         println!("Assembling deck slot {stage}/{total_stages}...");
//!     }
//! }
//!
//! let mut support = ProgressEventSupport::new();
//! support.add_listener(Arc::new(StageEcho));
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Listener for recommendation progress events.
///
/// All methods have empty defaults; implement the ones of interest.
pub trait ProgressListener: Send + Sync + Debug {
    /// Called once before the first search stage.
    fn on_recommendation_started(&self, _total_stages: usize) {}

    /// Called when a search stage starts.
    ///
    /// # Arguments
    ///
    /// * `stage` - The stage about to run (1-based)
    /// * `total_stages` - Total number of stages in this run
    fn on_stage_started(&self, _stage: usize, _total_stages: usize) {}

    /// Called when a search stage ends.
    ///
    /// # Arguments
    ///
    /// * `stage` - The stage that finished (1-based)
    /// * `total_stages` - Total number of stages in this run
    /// * `surviving` - Partial deck-sets alive after the stage
    fn on_stage_ended(&self, _stage: usize, _total_stages: usize, _surviving: usize) {}

    /// Called when the final ranking/diversification pass starts.
    fn on_ranking_started(&self, _candidates: usize) {}

    /// Called once with the number of returned deck-sets.
    fn on_recommendation_ended(&self, _returned: usize) {}
}

/// Central event broadcaster for recommendation progress.
///
/// Manages listener registration and event distribution. All listener
/// methods are called synchronously in registration order.
#[derive(Default)]
pub struct ProgressEventSupport {
    listeners: Vec<Arc<dyn ProgressListener>>,
}

impl ProgressEventSupport {
    /// Creates a new event support instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a progress listener.
    pub fn add_listener(&mut self, listener: Arc<dyn ProgressListener>) {
        self.listeners.push(listener);
    }

    /// Removes all listeners.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if any listener is registered.
    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Fires the recommendation started event.
    pub fn fire_recommendation_started(&self, total_stages: usize) {
        for listener in &self.listeners {
            listener.on_recommendation_started(total_stages);
        }
    }

    /// Fires the stage started event.
    pub fn fire_stage_started(&self, stage: usize, total_stages: usize) {
        for listener in &self.listeners {
            listener.on_stage_started(stage, total_stages);
        }
    }

    /// Fires the stage ended event.
    pub fn fire_stage_ended(&self, stage: usize, total_stages: usize, surviving: usize) {
        for listener in &self.listeners {
            listener.on_stage_ended(stage, total_stages, surviving);
        }
    }

    /// Fires the ranking started event.
    pub fn fire_ranking_started(&self, candidates: usize) {
        for listener in &self.listeners {
            listener.on_ranking_started(candidates);
        }
    }

    /// Fires the recommendation ended event.
    pub fn fire_recommendation_ended(&self, returned: usize) {
        for listener in &self.listeners {
            listener.on_recommendation_ended(returned);
        }
    }
}

impl Debug for ProgressEventSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressEventSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A logging listener that prints progress to stdout.
///
/// Mirrors the status lines the original console front end showed.
#[derive(Debug, Clone, Default)]
pub struct LoggingProgressListener {
    /// Prefix for log messages.
    prefix: String,
}

impl LoggingProgressListener {
    /// Creates a new logging listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a logging listener with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ProgressListener for LoggingProgressListener {
    fn on_stage_started(&self, stage: usize, total_stages: usize) {
        println!(
            "{}Assembling deck slot {}/{}...",
            self.prefix, stage, total_stages
        );
    }

    fn on_ranking_started(&self, candidates: usize) {
        println!(
            "{}Ranking {} candidate deck sets...",
            self.prefix, candidates
        );
    }

    fn on_recommendation_ended(&self, returned: usize) {
        println!("{}Done: {} deck set(s) recommended", self.prefix, returned);
    }
}

/// A counting listener that tracks event occurrences.
///
/// Useful for testing and statistics collection.
#[derive(Debug, Default)]
pub struct CountingProgressListener {
    recommendation_started_count: AtomicUsize,
    stage_started_count: AtomicUsize,
    stage_ended_count: AtomicUsize,
    ranking_started_count: AtomicUsize,
    recommendation_ended_count: AtomicUsize,
}

impl CountingProgressListener {
    /// Creates a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recommendation started events.
    pub fn recommendation_started_count(&self) -> usize {
        self.recommendation_started_count.load(Ordering::SeqCst)
    }

    /// Returns the number of stage started events.
    pub fn stage_started_count(&self) -> usize {
        self.stage_started_count.load(Ordering::SeqCst)
    }

    /// Returns the number of stage ended events.
    pub fn stage_ended_count(&self) -> usize {
        self.stage_ended_count.load(Ordering::SeqCst)
    }

    /// Returns the number of ranking started events.
    pub fn ranking_started_count(&self) -> usize {
        self.ranking_started_count.load(Ordering::SeqCst)
    }

    /// Returns the number of recommendation ended events.
    pub fn recommendation_ended_count(&self) -> usize {
        self.recommendation_ended_count.load(Ordering::SeqCst)
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.recommendation_started_count.store(0, Ordering::SeqCst);
        self.stage_started_count.store(0, Ordering::SeqCst);
        self.stage_ended_count.store(0, Ordering::SeqCst);
        self.ranking_started_count.store(0, Ordering::SeqCst);
        self.recommendation_ended_count.store(0, Ordering::SeqCst);
    }
}

impl ProgressListener for CountingProgressListener {
    fn on_recommendation_started(&self, _total_stages: usize) {
        self.recommendation_started_count
            .fetch_add(1, Ordering::SeqCst);
    }

    fn on_stage_started(&self, _stage: usize, _total_stages: usize) {
        self.stage_started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_stage_ended(&self, _stage: usize, _total_stages: usize, _surviving: usize) {
        self.stage_ended_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_ranking_started(&self, _candidates: usize) {
        self.ranking_started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_recommendation_ended(&self, _returned: usize) {
        self.recommendation_ended_count.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

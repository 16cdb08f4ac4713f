//! Counters for grounding runs.
//!
//! `GroundingMetrics` is a shared, thread-safe accumulator covering the
//! lifetime of an engine; `GroundingReport` is the per-call aggregate a
//! single grounding run returns. Both count the same events, at different
//! scopes.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared counters, incremented from worker threads with relaxed ordering.
/// Read via `snapshot`.
#[derive(Debug, Default)]
pub struct GroundingMetrics {
    substitutions: AtomicU64,
    emitted: AtomicU64,
    satisfied: AtomicU64,
    unresolved: AtomicU64,
    filtered: AtomicU64,
    invariant_violations: AtomicU64,
    dispatch_failed: AtomicU64,
}

impl GroundingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_substitution(&self) {
        self.substitutions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_satisfied(&self) {
        self.satisfied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unresolved(&self) {
        self.unresolved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_filtered(&self) {
        self.filtered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invariant_violation(&self) {
        self.invariant_violations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dispatch_failed(&self) {
        self.dispatch_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            substitutions: self.substitutions.load(Ordering::Relaxed),
            emitted: self.emitted.load(Ordering::Relaxed),
            satisfied: self.satisfied.load(Ordering::Relaxed),
            unresolved: self.unresolved.load(Ordering::Relaxed),
            filtered: self.filtered.load(Ordering::Relaxed),
            invariant_violations: self.invariant_violations.load(Ordering::Relaxed),
            dispatch_failed: self.dispatch_failed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the shared counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub substitutions: u64,
    pub emitted: u64,
    pub satisfied: u64,
    pub unresolved: u64,
    pub filtered: u64,
    pub invariant_violations: u64,
    pub dispatch_failed: u64,
}

impl std::fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Grounding Metrics ===")?;
        writeln!(f, "Substitutions:        {}", self.substitutions)?;
        writeln!(f, "Emitted:              {}", self.emitted)?;
        writeln!(f, "Satisfied drops:      {}", self.satisfied)?;
        writeln!(f, "Unresolved drops:     {}", self.unresolved)?;
        writeln!(f, "Relevance filtered:   {}", self.filtered)?;
        writeln!(f, "Invariant violations: {}", self.invariant_violations)?;
        writeln!(f, "Dispatch failures:    {}", self.dispatch_failed)?;
        Ok(())
    }
}

/// Result of grounding one clause: how each substitution was resolved.
///
/// `emitted` counts ground clauses actually delivered to a shard, so a
/// split negative-weight clause adds more than one per substitution and a
/// dead shard adds none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingReport {
    pub substitutions: u64,
    pub emitted: u64,
    pub satisfied: u64,
    pub unresolved: u64,
    pub filtered: u64,
}

impl GroundingReport {
    /// Fold another report into this one.
    pub fn merge(&mut self, other: &GroundingReport) {
        self.substitutions += other.substitutions;
        self.emitted += other.emitted;
        self.satisfied += other.satisfied;
        self.unresolved += other.unresolved;
        self.filtered += other.filtered;
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

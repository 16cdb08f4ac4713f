//! Parallel grounding: a producer enumerating assignments and a pool of
//! workers evaluating them.

use crate::assign::Assignment;
use crate::config::GrounderConfig;
use crate::error::GroundError;
use crate::evidence::Evidence;
use crate::ground::ClauseGrounder;
use crate::metrics::GroundingReport;
use crossbeam_channel::bounded;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

#[cfg(feature = "tracing")]
use crate::trace::{debug, debug_span};

/// Scoped worker pool for grounding clauses.
///
/// Workers are spawned per `ground` call and joined before it returns, so
/// the pool borrows the grounder and its collaborators without `Arc`
/// plumbing. The assignment channel is bounded, which holds memory flat on
/// large cartesian products.
#[derive(Debug, Clone)]
pub struct GroundingPool {
    threads: usize,
}

impl GroundingPool {
    /// Thread count clamps to at least 1.
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
        }
    }

    pub fn from_config(config: &GrounderConfig) -> Self {
        Self::new(config.threads)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Ground every substitution of the grounder's clause and block until
    /// all of them resolve.
    ///
    /// A ground clause skips the pool entirely and evaluates once on the
    /// calling thread. On a fatal error the producer stops enumerating,
    /// queued and in-flight assignments still complete, and the first
    /// error observed is returned; the partial report is discarded.
    pub fn ground<E: Evidence>(
        &self,
        grounder: &ClauseGrounder<'_, E>,
    ) -> Result<GroundingReport, GroundError> {
        #[cfg(feature = "tracing")]
        let _span = debug_span!("ground", threads = self.threads).entered();

        if grounder.is_ground() {
            return grounder.ground_once(&Assignment::empty());
        }

        let queue_bound = grounder.config().queue_bound.max(1);
        let (tx, rx) = bounded::<Assignment>(queue_bound);
        let failed = AtomicBool::new(false);
        let first_error: Mutex<Option<GroundError>> = Mutex::new(None);
        let mut report = GroundingReport::default();

        thread::scope(|scope| {
            let mut workers = Vec::with_capacity(self.threads);
            for _ in 0..self.threads {
                let rx = rx.clone();
                let failed = &failed;
                let first_error = &first_error;
                workers.push(scope.spawn(move || {
                    let mut local = GroundingReport::default();
                    while let Ok(assignment) = rx.recv() {
                        match grounder.ground_once(&assignment) {
                            Ok(unit) => local.merge(&unit),
                            Err(err) => {
                                failed.store(true, Ordering::Release);
                                let mut slot = first_error.lock();
                                if slot.is_none() {
                                    *slot = Some(err);
                                }
                            }
                        }
                    }
                    local
                }));
            }
            drop(rx);

            for assignment in grounder.assignments() {
                if failed.load(Ordering::Acquire) {
                    break;
                }
                if tx.send(assignment).is_err() {
                    break;
                }
            }
            drop(tx);

            for worker in workers {
                if let Ok(local) = worker.join() {
                    report.merge(&local);
                }
            }
        });

        #[cfg(feature = "tracing")]
        debug!(
            substitutions = report.substitutions,
            emitted = report.emitted,
            "ground_done"
        );

        match first_error.into_inner() {
            Some(err) => Err(err),
            None => Ok(report),
        }
    }
}

#[cfg(test)]
#[path = "tests/pool.rs"]
mod tests;

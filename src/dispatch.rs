//! Hash-routed dispatch of ground clauses to shard workers.

use crate::emit::GroundClause;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Fans ground clauses out to N shard channels by clause hash.
///
/// Sends are fire-and-forget: the router never blocks and never waits for
/// acknowledgement. Per-shard FIFO is whatever the channel provides; no
/// ordering holds across shards.
#[derive(Debug, Clone)]
pub struct ShardRouter {
    senders: Vec<Sender<GroundClause>>,
}

impl ShardRouter {
    /// Create a router and the receiving end of every shard channel.
    /// Shard count clamps to at least 1.
    pub fn channels(shards: usize) -> (Self, Vec<Receiver<GroundClause>>) {
        let shards = shards.max(1);
        let mut senders = Vec::with_capacity(shards);
        let mut receivers = Vec::with_capacity(shards);
        for _ in 0..shards {
            let (tx, rx) = unbounded();
            senders.push(tx);
            receivers.push(rx);
        }
        (Self { senders }, receivers)
    }

    pub fn shard_count(&self) -> usize {
        self.senders.len()
    }

    /// Shard selection is a pure function of the hash. `unsigned_abs`
    /// keeps `i64::MIN` in range.
    pub fn shard_of(&self, hash: i64) -> usize {
        (hash.unsigned_abs() % self.senders.len() as u64) as usize
    }

    /// Send a clause to its shard. Returns false when that shard's
    /// receiver is gone; the clause is lost, which the caller records.
    pub fn dispatch(&self, clause: GroundClause) -> bool {
        let shard = self.shard_of(clause.hash);
        self.senders[shard].send(clause).is_ok()
    }
}

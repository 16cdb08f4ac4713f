//! Canonical ground-clause form and negative-weight normalization.

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::hash::Hasher;

/// Signed evidence ids of a ground clause's surviving literals.
pub type LiteralIds = SmallVec<[i64; 4]>;

/// A ground clause ready for dispatch.
///
/// `literals` holds signed evidence ids, sorted ascending whenever there
/// is more than one, so the same logical clause reached through different
/// substitutions is bit-identical. `hash` is derived from the sorted array
/// and is never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundClause {
    pub hash: i64,
    pub weight: f64,
    pub literals: LiteralIds,
}

impl GroundClause {
    /// Build the canonical form: sort, then hash.
    pub fn new(weight: f64, mut literals: LiteralIds) -> Self {
        if literals.len() > 1 {
            literals.sort_unstable();
        }
        let hash = clause_hash(&literals);
        Self {
            hash,
            weight,
            literals,
        }
    }
}

/// Deterministic hash of a sorted literal-id array.
///
/// Zero is remapped to one: the downstream integer-set uses zero as its
/// missing-key sentinel, so zero must never leave this function.
pub fn clause_hash(literals: &[i64]) -> i64 {
    let mut hasher = FxHasher::default();
    for lit in literals {
        hasher.write_i64(*lit);
    }
    let hash = hasher.finish() as i64;
    if hash == 0 {
        1
    } else {
        hash
    }
}

/// Final emitted form(s) of a candidate ground clause.
///
/// With splitting enabled, a negative-weight clause of n literals becomes
/// n unit clauses, each with one literal negated and weight (-w)/n; the
/// emitted weights sum to -w. Everything else passes through as a single
/// canonical clause. `literals` must be non-empty.
pub fn normalize(weight: f64, literals: LiteralIds, split_negative: bool) -> SmallVec<[GroundClause; 2]> {
    debug_assert!(!literals.is_empty(), "Cannot normalize an empty clause");
    let mut out = SmallVec::new();
    if split_negative && weight < 0.0 {
        let share = -weight / literals.len() as f64;
        for &lit in &literals {
            out.push(GroundClause::new(share, smallvec![-lit]));
        }
    } else {
        out.push(GroundClause::new(weight, literals));
    }
    out
}

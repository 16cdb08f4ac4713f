//! Literal-ordering heuristic.
//!
//! Orders a clause's literals so the ones most likely to prune the
//! substitution cheaply run first. The order is advisory: evaluation is
//! correct under any permutation, only the amount of wasted work changes.

use crate::clause::{Clause, Literal};
use crate::evidence::Evidence;
use crate::registry::DynamicRegistry;
use std::cmp::Ordering;

/// Ordering key of a literal.
///
/// Dynamic literals rank by distinct-variable count. Regular literals rank
/// by the fraction of evidence instances that either fail the literal's
/// polarity or are unknown; low scores are likely to trivially satisfy the
/// clause and are tried first anyway because cheap drops end evaluation
/// early.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Rank {
    Dynamic {
        vars: usize,
    },
    Regular {
        vars: usize,
        has_unknown: bool,
        score: f64,
    },
}

fn rank<E: Evidence>(lit: &Literal, evidence: &E, dynamics: &DynamicRegistry) -> Rank {
    let vars = lit.distinct_vars();
    if dynamics.is_dynamic(&lit.atom.sig) {
        return Rank::Dynamic { vars };
    }
    let stats = evidence.stats(&lit.atom.sig);
    // A positive literal is missed by FALSE instances, a negative one by
    // TRUE instances.
    let miss = if lit.polarity {
        stats.false_count
    } else {
        stats.true_count
    };
    let score = if stats.total == 0 {
        0.0
    } else {
        (miss + stats.unknown_count) as f64 / stats.total as f64
    };
    Rank::Regular {
        vars,
        has_unknown: stats.has_unknown(),
        score,
    }
}

fn compare(a: &Rank, b: &Rank) -> Ordering {
    match (a, b) {
        (Rank::Dynamic { vars: av }, Rank::Dynamic { vars: bv }) => av.cmp(bv),
        (
            Rank::Dynamic { vars: av },
            Rank::Regular {
                vars: bv,
                has_unknown,
                ..
            },
        ) => {
            // A dynamic literal goes first when the regular side still has
            // unknown instances to prune against.
            if *has_unknown {
                Ordering::Less
            } else {
                av.cmp(bv)
            }
        }
        (
            Rank::Regular {
                vars: av,
                has_unknown,
                ..
            },
            Rank::Dynamic { vars: bv },
        ) => {
            if *has_unknown {
                Ordering::Greater
            } else {
                av.cmp(bv)
            }
        }
        (Rank::Regular { score: a, .. }, Rank::Regular { score: b, .. }) => {
            // Scores are never NaN: totals of zero map to 0.0.
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
    }
}

/// Order a clause's literals for evaluation.
///
/// Ties keep their clause order. The pairwise relation is not transitive
/// across the dynamic/regular boundary, which rules out `slice::sort_by`;
/// an insertion sort only ever consults pairwise verdicts and is stable.
pub fn order_literals<E: Evidence>(
    clause: &Clause,
    evidence: &E,
    dynamics: &DynamicRegistry,
) -> Vec<Literal> {
    let mut ranked: Vec<(Literal, Rank)> = clause
        .literals()
        .iter()
        .map(|lit| (lit.clone(), rank(lit, evidence, dynamics)))
        .collect();
    for i in 1..ranked.len() {
        let mut j = i;
        while j > 0 && compare(&ranked[j - 1].1, &ranked[j].1) == Ordering::Greater {
            ranked.swap(j - 1, j);
            j -= 1;
        }
    }
    ranked.into_iter().map(|(lit, _)| lit).collect()
}

#[cfg(test)]
#[path = "tests/order.rs"]
mod tests;

//! Substitution enumeration: the cartesian product of variable domains.

use crate::symbol::{Symbol, SymbolStore};
use crate::term::Variable;
use smallvec::SmallVec;
use std::sync::Arc;

/// A total assignment of a clause's free variables to domain constants.
///
/// The variable list is shared between every assignment of one clause;
/// cloning an assignment is a refcount bump plus a few inline symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    vars: Arc<[Variable]>,
    values: SmallVec<[Symbol; 8]>,
}

impl Assignment {
    /// The empty substitution, used for ground clauses.
    pub fn empty() -> Self {
        Self {
            vars: Arc::from(Vec::new()),
            values: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value bound to the variable of this name, if any.
    pub fn lookup(&self, name: Symbol) -> Option<Symbol> {
        self.vars
            .iter()
            .position(|v| v.name == name)
            .map(|i| self.values[i])
    }

    /// Render as `x=a, y=b` for diagnostics.
    pub fn describe(&self, symbols: &SymbolStore) -> String {
        let mut out = String::new();
        for (i, (var, value)) in self.vars.iter().zip(&self.values).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(symbols.resolve_or_opaque(var.name));
            out.push('=');
            out.push_str(symbols.resolve_or_opaque(*value));
        }
        out
    }
}

/// Lazy iterator over every total assignment, in odometer order with the
/// last variable cycling fastest. Finite and not restartable.
///
/// An empty domain makes the product empty; no variables at all yields
/// exactly one empty assignment.
pub struct AssignmentIter<'a> {
    vars: Arc<[Variable]>,
    domains: Vec<&'a [Symbol]>,
    indices: SmallVec<[usize; 8]>,
    done: bool,
}

impl<'a> AssignmentIter<'a> {
    /// `domains[i]` is the domain of `vars[i]`.
    pub fn new(vars: Arc<[Variable]>, domains: Vec<&'a [Symbol]>) -> Self {
        debug_assert_eq!(vars.len(), domains.len());
        let done = domains.iter().any(|d| d.is_empty());
        let indices = domains.iter().map(|_| 0).collect();
        Self {
            vars,
            domains,
            indices,
            done,
        }
    }

    /// Number of assignments the full product contains, saturating.
    pub fn total(&self) -> u64 {
        if self.domains.iter().any(|d| d.is_empty()) {
            return 0;
        }
        self.domains
            .iter()
            .fold(1u64, |acc, d| acc.saturating_mul(d.len() as u64))
    }
}

impl Iterator for AssignmentIter<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.done {
            return None;
        }
        let values = self
            .indices
            .iter()
            .zip(&self.domains)
            .map(|(&i, d)| d[i])
            .collect();
        let out = Assignment {
            vars: Arc::clone(&self.vars),
            values,
        };
        // Advance the odometer; wrapping past the first wheel ends it.
        let mut wheel = self.indices.len();
        loop {
            if wheel == 0 {
                self.done = true;
                break;
            }
            wheel -= 1;
            self.indices[wheel] += 1;
            if self.indices[wheel] < self.domains[wheel].len() {
                break;
            }
            self.indices[wheel] = 0;
        }
        Some(out)
    }
}

#[cfg(test)]
#[path = "tests/assign.rs"]
mod tests;

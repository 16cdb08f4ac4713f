//! Per-substitution evaluation of one clause against the evidence.

use crate::assign::{Assignment, AssignmentIter};
use crate::clause::{Atom, Clause, Literal};
use crate::config::GrounderConfig;
use crate::dispatch::ShardRouter;
use crate::emit::{normalize, LiteralIds};
use crate::error::GroundError;
use crate::evidence::{AtomId, Evidence, RelevanceParts, TruthValue};
use crate::metrics::{GroundingMetrics, GroundingReport};
use crate::order::order_literals;
use crate::registry::{DynamicRegistry, FunctionMap};
use crate::symbol::{Symbol, SymbolStore};
use crate::term::{GroundArgs, Term, Variable};
use smallvec::SmallVec;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use crate::trace::{debug, trace, warn};

/// Read-only collaborators shared by every grounding of one engine.
///
/// Plain references: the caller owns all of it and a context is copied
/// freely into whatever needs one.
pub struct GroundingContext<'a, E: Evidence> {
    pub symbols: &'a SymbolStore,
    pub evidence: &'a E,
    pub functions: &'a FunctionMap,
    pub dynamics: &'a DynamicRegistry,
    pub relevance: &'a RelevanceParts,
    pub router: &'a ShardRouter,
    pub metrics: &'a GroundingMetrics,
    pub config: &'a GrounderConfig,
}

impl<E: Evidence> Clone for GroundingContext<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Evidence> Copy for GroundingContext<'_, E> {}

/// A buffered literal of a candidate ground clause. The signed form is
/// paired with its atom id at buffering time so the relevance filter never
/// has to re-derive one from the other.
#[derive(Debug, Clone, Copy)]
struct Survivor {
    atom: AtomId,
    signed: i64,
}

/// How one substitution resolved.
enum Outcome {
    /// A literal is definitely true under the substitution; nothing to
    /// emit.
    Satisfied,
    /// Some atom does not exist under the closed-world assumption; the
    /// instantiation cannot be resolved and emits nothing.
    Unresolved,
    /// No drop occurred; the buffered literals form the candidate.
    Candidate(SmallVec<[Survivor; 4]>),
}

/// Grounds one clause: orders its literals once, then evaluates any number
/// of substitutions against that order.
pub struct ClauseGrounder<'a, E: Evidence> {
    clause: &'a Clause,
    ordered: Vec<Literal>,
    vars: Arc<[Variable]>,
    domains: Vec<&'a [Symbol]>,
    ctx: GroundingContext<'a, E>,
}

impl<'a, E: Evidence> ClauseGrounder<'a, E> {
    /// Fails when a clause variable ranges over a domain the evidence does
    /// not define.
    pub fn new(clause: &'a Clause, ctx: GroundingContext<'a, E>) -> Result<Self, GroundError> {
        let ordered = order_literals(clause, ctx.evidence, ctx.dynamics);
        let vars: Arc<[Variable]> = clause.free_vars().into();
        let mut domains = Vec::with_capacity(vars.len());
        for var in vars.iter() {
            match ctx.evidence.domain(var.domain) {
                Some(constants) => domains.push(constants),
                None => {
                    return Err(GroundError::UnknownDomain {
                        variable: ctx.symbols.resolve_or_opaque(var.name).to_string(),
                        domain: ctx.symbols.resolve_or_opaque(var.domain).to_string(),
                    })
                }
            }
        }
        #[cfg(feature = "tracing")]
        debug!(
            literals = ordered.len(),
            vars = vars.len(),
            "grounder_ready"
        );
        Ok(Self {
            clause,
            ordered,
            vars,
            domains,
            ctx,
        })
    }

    /// True when the clause has no free variables.
    pub fn is_ground(&self) -> bool {
        self.vars.is_empty()
    }

    /// The evaluation order chosen by the heuristic.
    pub fn ordered_literals(&self) -> &[Literal] {
        &self.ordered
    }

    pub fn config(&self) -> &GrounderConfig {
        self.ctx.config
    }

    /// Every total assignment of the clause's free variables. A ground
    /// clause yields exactly one empty assignment.
    pub fn assignments(&self) -> AssignmentIter<'a> {
        AssignmentIter::new(Arc::clone(&self.vars), self.domains.clone())
    }

    /// Evaluate one assignment end to end: drop, filter, normalize and
    /// dispatch. Returns what happened as a single-substitution report.
    pub fn ground_once(&self, assignment: &Assignment) -> Result<GroundingReport, GroundError> {
        self.ctx.metrics.record_substitution();
        let mut report = GroundingReport {
            substitutions: 1,
            ..GroundingReport::default()
        };
        match self.evaluate(assignment)? {
            Outcome::Satisfied => {
                self.ctx.metrics.record_satisfied();
                report.satisfied = 1;
                #[cfg(feature = "tracing")]
                trace!(
                    assignment = %assignment.describe(self.ctx.symbols),
                    "satisfied_drop"
                );
            }
            Outcome::Unresolved => {
                self.ctx.metrics.record_unresolved();
                report.unresolved = 1;
                #[cfg(feature = "tracing")]
                trace!(
                    assignment = %assignment.describe(self.ctx.symbols),
                    "unresolved_drop"
                );
            }
            Outcome::Candidate(survivors) => {
                if survivors.is_empty() {
                    // Unreachable when evidence behaves; log loudly, emit
                    // nothing.
                    self.ctx.metrics.record_invariant_violation();
                    #[cfg(feature = "tracing")]
                    warn!(
                        assignment = %assignment.describe(self.ctx.symbols),
                        "empty_candidate_buffer"
                    );
                    return Ok(report);
                }
                if !self.is_relevant(&survivors) {
                    self.ctx.metrics.record_filtered();
                    report.filtered = 1;
                    return Ok(report);
                }
                let literals: LiteralIds = survivors.iter().map(|s| s.signed).collect();
                let split = self.ctx.config.split_negative;
                for clause in normalize(self.clause.weight(), literals, split) {
                    #[cfg(feature = "tracing")]
                    let hash = clause.hash;
                    if self.ctx.router.dispatch(clause) {
                        self.ctx.metrics.record_emitted();
                        report.emitted += 1;
                    } else {
                        self.ctx.metrics.record_dispatch_failed();
                        #[cfg(feature = "tracing")]
                        warn!(hash, "shard_send_failed");
                    }
                }
            }
        }
        Ok(report)
    }

    /// Walk the ordered literals under one substitution.
    fn evaluate(&self, assignment: &Assignment) -> Result<Outcome, GroundError> {
        let mut survivors: SmallVec<[Survivor; 4]> = SmallVec::new();
        for lit in &self.ordered {
            let args = match self.ground_args(&lit.atom, assignment)? {
                Some(args) => args,
                None => return Ok(Outcome::Unresolved),
            };
            if let Some(holds) = self.ctx.dynamics.evaluate(&lit.atom.sig, &args) {
                if holds == lit.polarity {
                    return Ok(Outcome::Satisfied);
                }
                // A dynamic literal that does not satisfy contributes
                // nothing; its state is definite.
                continue;
            }
            let id = match self.ctx.evidence.encode(&lit.atom.sig, &args) {
                Some(id) => id,
                None => return Ok(Outcome::Unresolved),
            };
            match self.ctx.evidence.state(&lit.atom.sig, id) {
                TruthValue::True if lit.polarity => return Ok(Outcome::Satisfied),
                TruthValue::False if !lit.polarity => return Ok(Outcome::Satisfied),
                TruthValue::Unknown => survivors.push(Survivor {
                    atom: id,
                    signed: id.signed(lit.polarity),
                }),
                // The complementary definite state: neither satisfies nor
                // survives.
                _ => {}
            }
        }
        Ok(Outcome::Candidate(survivors))
    }

    /// Substitute an atom's terms, resolving function applications.
    /// `None` means some function has no entry for its ground tuple.
    fn ground_args(
        &self,
        atom: &Atom,
        assignment: &Assignment,
    ) -> Result<Option<GroundArgs>, GroundError> {
        let mut args = GroundArgs::new();
        for term in &atom.args {
            match self.ground_term(term, assignment)? {
                Some(constant) => args.push(constant),
                None => return Ok(None),
            }
        }
        Ok(Some(args))
    }

    fn ground_term(
        &self,
        term: &Term,
        assignment: &Assignment,
    ) -> Result<Option<Symbol>, GroundError> {
        match term {
            Term::Const(c) => Ok(Some(*c)),
            Term::Var(v) => match assignment.lookup(v.name) {
                Some(constant) => Ok(Some(constant)),
                None => Err(GroundError::UnboundVariable {
                    variable: self.ctx.symbols.resolve_or_opaque(v.name).to_string(),
                }),
            },
            Term::Func(sig, inner) => {
                let mut args = GroundArgs::new();
                for term in inner {
                    match self.ground_term(term, assignment)? {
                        Some(constant) => args.push(constant),
                        None => return Ok(None),
                    }
                }
                self.ctx.functions.resolve(sig, &args, self.ctx.symbols)
            }
        }
    }

    /// The emission filter: at least one surviving atom must be relevant.
    fn is_relevant(&self, survivors: &[Survivor]) -> bool {
        survivors
            .iter()
            .any(|s| self.ctx.relevance.is_relevant(s.atom))
    }
}

#[cfg(test)]
#[path = "tests/ground.rs"]
mod tests;

use crate::clause::{Atom, AtomSig, Literal};
use crate::config::GrounderConfig;
use crate::dispatch::ShardRouter;
use crate::emit::GroundClause;
use crate::evidence::{AtomId, MemoryEvidence, RelevanceParts, TruthValue};
use crate::ground::GroundingContext;
use crate::metrics::GroundingMetrics;
use crate::registry::{DynamicRegistry, FunctionMap};
use crate::symbol::{Symbol, SymbolStore};
use crate::term::{Term, Variable};
use crossbeam_channel::Receiver;

pub(crate) fn sig(symbols: &SymbolStore, name: &str, arity: usize) -> AtomSig {
    AtomSig::new(symbols.intern(name), arity)
}

pub(crate) fn con(symbols: &SymbolStore, name: &str) -> Term {
    Term::Const(symbols.intern(name))
}

pub(crate) fn var(symbols: &SymbolStore, name: &str, domain: &str) -> Term {
    Term::Var(Variable::new(symbols.intern(name), symbols.intern(domain)))
}

pub(crate) fn atom(symbols: &SymbolStore, name: &str, args: Vec<Term>) -> Atom {
    Atom::new(AtomSig::new(symbols.intern(name), args.len()), args)
}

pub(crate) fn pos(symbols: &SymbolStore, name: &str, args: Vec<Term>) -> Literal {
    Literal::positive(atom(symbols, name, args))
}

pub(crate) fn neg(symbols: &SymbolStore, name: &str, args: Vec<Term>) -> Literal {
    Literal::negative(atom(symbols, name, args))
}

/// Owns every grounding collaborator, with collector channels standing in
/// for shard workers.
pub(crate) struct World {
    pub symbols: SymbolStore,
    pub evidence: MemoryEvidence,
    pub functions: FunctionMap,
    pub dynamics: DynamicRegistry,
    pub relevance: RelevanceParts,
    pub router: ShardRouter,
    pub receivers: Vec<Receiver<GroundClause>>,
    pub metrics: GroundingMetrics,
    pub config: GrounderConfig,
}

impl World {
    pub fn new(shards: usize) -> Self {
        let (router, receivers) = ShardRouter::channels(shards);
        Self {
            symbols: SymbolStore::new(),
            evidence: MemoryEvidence::new(),
            functions: FunctionMap::new(),
            dynamics: DynamicRegistry::new(),
            relevance: RelevanceParts::unconditional(1),
            router,
            receivers,
            metrics: GroundingMetrics::new(),
            config: GrounderConfig {
                threads: 2,
                queue_bound: 8,
                split_negative: true,
            },
        }
    }

    pub fn ctx(&self) -> GroundingContext<'_, MemoryEvidence> {
        GroundingContext {
            symbols: &self.symbols,
            evidence: &self.evidence,
            functions: &self.functions,
            dynamics: &self.dynamics,
            relevance: &self.relevance,
            router: &self.router,
            metrics: &self.metrics,
            config: &self.config,
        }
    }

    /// Define a domain from plain strings.
    pub fn domain(&mut self, name: &str, members: &[&str]) -> Symbol {
        let name_sym = self.symbols.intern(name);
        let constants = members.iter().map(|m| self.symbols.intern(m)).collect();
        self.evidence.add_domain(name_sym, constants);
        name_sym
    }

    /// Insert one evidence atom from plain strings.
    pub fn fact(&mut self, pred: &str, args: &[&str], state: TruthValue) -> AtomId {
        let sig = AtomSig::new(self.symbols.intern(pred), args.len());
        let tuple = args.iter().map(|a| self.symbols.intern(a)).collect();
        self.evidence.add_atom(sig, tuple, state)
    }

    /// Drain every shard channel, in shard order.
    pub fn drain(&self) -> Vec<GroundClause> {
        let mut out = Vec::new();
        for rx in &self.receivers {
            while let Ok(clause) = rx.try_recv() {
                out.push(clause);
            }
        }
        out
    }
}

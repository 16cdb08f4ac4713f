use crate::clause::AtomSig;
use crate::symbol::Symbol;
use crate::term::GroundArgs;
use hashbrown::{HashMap, HashSet};

/// Truth state of a ground atom in the evidence store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruthValue {
    True,
    False,
    Unknown,
}

/// Evidence id of a ground atom.
///
/// Ids start at 1; zero is never issued so a signed id can carry polarity
/// on its sign without ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomId(u64);

impl AtomId {
    pub fn new(raw: u64) -> Self {
        debug_assert!(raw != 0, "Atom id zero is reserved");
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }

    /// The id as a signed literal: positive when the literal holds the atom
    /// positively, negative when negated.
    pub fn signed(self, polarity: bool) -> i64 {
        if polarity {
            self.0 as i64
        } else {
            -(self.0 as i64)
        }
    }
}

/// Aggregate truth-state counts for one predicate. Used only by the
/// literal-ordering heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvidenceStats {
    pub true_count: u64,
    pub false_count: u64,
    pub unknown_count: u64,
    pub total: u64,
}

impl EvidenceStats {
    pub fn has_unknown(&self) -> bool {
        self.unknown_count > 0
    }
}

/// Read-only access to ground-atom evidence and variable domains.
///
/// `encode` maps a fully substituted atom to its id, or `None` when no such
/// ground atom exists under the closed-world assumption. `state` answers for
/// ids previously produced by `encode`; any other id is `Unknown`.
pub trait Evidence: Send + Sync {
    fn encode(&self, sig: &AtomSig, args: &[Symbol]) -> Option<AtomId>;
    fn state(&self, sig: &AtomSig, id: AtomId) -> TruthValue;
    fn stats(&self, sig: &AtomSig) -> EvidenceStats;
    fn domain(&self, name: Symbol) -> Option<&[Symbol]>;
}

#[derive(Debug, Default)]
struct PredicateTable {
    ids: HashMap<GroundArgs, AtomId>,
    states: HashMap<AtomId, TruthValue>,
    stats: EvidenceStats,
}

/// In-memory evidence store.
///
/// Every ground atom mentioned in the evidence gets an id at insertion;
/// atoms never inserted do not exist as far as `encode` is concerned.
#[derive(Debug, Default)]
pub struct MemoryEvidence {
    domains: HashMap<Symbol, Vec<Symbol>>,
    tables: HashMap<AtomSig, PredicateTable>,
    next_id: u64,
}

impl MemoryEvidence {
    pub fn new() -> Self {
        Self {
            domains: HashMap::new(),
            tables: HashMap::new(),
            next_id: 1,
        }
    }

    /// Define (or redefine) a domain's constants. Enumeration order of
    /// substitutions follows the order given here.
    pub fn add_domain(&mut self, name: Symbol, constants: Vec<Symbol>) {
        self.domains.insert(name, constants);
    }

    /// Insert a ground atom with a truth state, returning its id. Inserting
    /// the same tuple again updates its state in place and keeps its id.
    pub fn add_atom(&mut self, sig: AtomSig, args: GroundArgs, state: TruthValue) -> AtomId {
        debug_assert_eq!(sig.arity, args.len(), "Evidence tuple arity mismatch");
        let table = self.tables.entry(sig).or_default();
        if let Some(&id) = table.ids.get(&args) {
            if let Some(old) = table.states.insert(id, state) {
                *stat_slot(&mut table.stats, old) -= 1;
                table.stats.total -= 1;
            }
            *stat_slot(&mut table.stats, state) += 1;
            table.stats.total += 1;
            return id;
        }
        let id = AtomId::new(self.next_id);
        self.next_id += 1;
        table.ids.insert(args, id);
        table.states.insert(id, state);
        *stat_slot(&mut table.stats, state) += 1;
        table.stats.total += 1;
        id
    }

    /// Number of ground atoms across all predicates.
    pub fn atom_count(&self) -> u64 {
        self.next_id - 1
    }
}

fn stat_slot(stats: &mut EvidenceStats, state: TruthValue) -> &mut u64 {
    match state {
        TruthValue::True => &mut stats.true_count,
        TruthValue::False => &mut stats.false_count,
        TruthValue::Unknown => &mut stats.unknown_count,
    }
}

impl Evidence for MemoryEvidence {
    fn encode(&self, sig: &AtomSig, args: &[Symbol]) -> Option<AtomId> {
        self.tables.get(sig)?.ids.get(args).copied()
    }

    fn state(&self, sig: &AtomSig, id: AtomId) -> TruthValue {
        match self.tables.get(sig).and_then(|t| t.states.get(&id)) {
            Some(&state) => state,
            None => TruthValue::Unknown,
        }
    }

    fn stats(&self, sig: &AtomSig) -> EvidenceStats {
        match self.tables.get(sig) {
            Some(table) => table.stats,
            None => EvidenceStats::default(),
        }
    }

    fn domain(&self, name: Symbol) -> Option<&[Symbol]> {
        self.domains.get(&name).map(Vec::as_slice)
    }
}

/// Partitioned relevance sets for the emission filter.
///
/// Atom ids route to partition `id mod part_count`. A `None` partition is
/// declared absent: every id routed there counts as relevant, which is how
/// designated query atoms bypass the filter.
#[derive(Debug, Clone)]
pub struct RelevanceParts {
    parts: Vec<Option<HashSet<u64>>>,
}

impl RelevanceParts {
    /// All partitions absent: every atom is relevant. Partition count
    /// clamps to at least 1.
    pub fn unconditional(part_count: usize) -> Self {
        Self {
            parts: vec![None; part_count.max(1)],
        }
    }

    /// All partitions present and empty: no atom is relevant until marked.
    pub fn with_sets(part_count: usize) -> Self {
        Self {
            parts: vec![Some(HashSet::new()); part_count.max(1)],
        }
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    fn slot(&self, id: AtomId) -> usize {
        (id.raw() % self.parts.len() as u64) as usize
    }

    /// Record an atom as relevant. A no-op when its partition is absent,
    /// since everything routed there is already relevant.
    pub fn mark(&mut self, id: AtomId) {
        let slot = self.slot(id);
        if let Some(set) = &mut self.parts[slot] {
            set.insert(id.raw());
        }
    }

    /// Declare one partition absent, making every id routed to it relevant.
    pub fn declare_absent(&mut self, slot: usize) {
        if slot < self.parts.len() {
            self.parts[slot] = None;
        }
    }

    pub fn is_relevant(&self, id: AtomId) -> bool {
        match &self.parts[self.slot(id)] {
            None => true,
            Some(set) => set.contains(&id.raw()),
        }
    }
}

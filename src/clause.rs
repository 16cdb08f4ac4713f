use crate::error::GroundError;
use crate::symbol::{Symbol, SymbolStore};
use crate::term::{format_term, Term, Variable};

/// A predicate name together with its arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomSig {
    pub name: Symbol,
    pub arity: usize,
}

impl AtomSig {
    pub fn new(name: Symbol, arity: usize) -> Self {
        Self { name, arity }
    }
}

/// A predicate applied to argument terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub sig: AtomSig,
    pub args: Vec<Term>,
}

impl Atom {
    /// The argument count must match the signature's arity.
    pub fn new(sig: AtomSig, args: Vec<Term>) -> Self {
        debug_assert_eq!(sig.arity, args.len(), "Atom arity mismatch");
        Self { sig, args }
    }

    pub fn is_ground(&self) -> bool {
        self.args.iter().all(Term::is_ground)
    }

    pub fn collect_vars(&self, out: &mut Vec<Variable>) {
        for arg in &self.args {
            arg.collect_vars(out);
        }
    }
}

/// A literal: an atom with a polarity. `polarity == true` means the atom
/// appears positively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub atom: Atom,
    pub polarity: bool,
}

impl Literal {
    pub fn positive(atom: Atom) -> Self {
        Self {
            atom,
            polarity: true,
        }
    }

    pub fn negative(atom: Atom) -> Self {
        Self {
            atom,
            polarity: false,
        }
    }

    pub fn is_ground(&self) -> bool {
        self.atom.is_ground()
    }

    /// Number of distinct variables in the literal's atom.
    pub fn distinct_vars(&self) -> usize {
        let mut vars = Vec::new();
        self.atom.collect_vars(&mut vars);
        vars.len()
    }
}

/// A weighted disjunction of literals.
///
/// The weight may be any real number except NaN; negative weights are
/// meaningful and handled downstream by the normalizer. Infinite weights
/// stand for hard constraints and pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    literals: Vec<Literal>,
    weight: f64,
}

impl Clause {
    /// Build a clause, rejecting the two inputs nothing downstream can
    /// give a meaning to: an empty disjunction and a NaN weight.
    pub fn new(literals: Vec<Literal>, weight: f64) -> Result<Self, GroundError> {
        if literals.is_empty() {
            return Err(GroundError::EmptyClause);
        }
        if weight.is_nan() {
            return Err(GroundError::InvalidWeight { weight });
        }
        Ok(Self { literals, weight })
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// A clause is ground when every literal is.
    pub fn is_ground(&self) -> bool {
        self.literals.iter().all(Literal::is_ground)
    }

    /// Free variables of the clause, in first-appearance order across the
    /// literal sequence.
    pub fn free_vars(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        for lit in &self.literals {
            lit.atom.collect_vars(&mut vars);
        }
        vars
    }
}

/// Render a literal as `P(a, x)` or `!P(a, x)`.
pub fn format_literal(lit: &Literal, symbols: &SymbolStore) -> String {
    let mut out = String::new();
    if !lit.polarity {
        out.push('!');
    }
    out.push_str(symbols.resolve_or_opaque(lit.atom.sig.name));
    if !lit.atom.args.is_empty() {
        out.push('(');
        for (i, arg) in lit.atom.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&format_term(arg, symbols));
        }
        out.push(')');
    }
    out
}

/// Render a clause as `weight: lit v lit v ...`.
pub fn format_clause(clause: &Clause, symbols: &SymbolStore) -> String {
    let mut out = format!("{}: ", clause.weight);
    for (i, lit) in clause.literals.iter().enumerate() {
        if i > 0 {
            out.push_str(" v ");
        }
        out.push_str(&format_literal(lit, symbols));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolStore;

    fn atom(symbols: &SymbolStore, name: &str, args: Vec<Term>) -> Atom {
        Atom::new(AtomSig::new(symbols.intern(name), args.len()), args)
    }

    fn var(symbols: &SymbolStore, name: &str) -> Term {
        Term::Var(Variable::new(
            symbols.intern(name),
            symbols.intern("person"),
        ))
    }

    // ========== CONSTRUCTION TESTS ==========

    #[test]
    fn nan_weight_is_rejected() {
        let symbols = SymbolStore::new();
        let lit = Literal::positive(atom(&symbols, "Smokes", vec![var(&symbols, "x")]));
        let result = Clause::new(vec![lit], f64::NAN);
        assert!(matches!(result, Err(GroundError::InvalidWeight { .. })));
    }

    #[test]
    fn empty_clause_is_rejected() {
        assert!(matches!(Clause::new(vec![], 1.0), Err(GroundError::EmptyClause)));
    }

    #[test]
    fn negative_and_infinite_weights_are_accepted() {
        let symbols = SymbolStore::new();
        let lit = Literal::positive(atom(&symbols, "Smokes", vec![var(&symbols, "x")]));
        assert!(Clause::new(vec![lit.clone()], -3.0).is_ok());
        assert!(Clause::new(vec![lit], f64::INFINITY).is_ok());
    }

    // ========== GROUNDNESS AND VARIABLE TESTS ==========

    #[test]
    fn groundness_requires_every_literal_ground() {
        let symbols = SymbolStore::new();
        let ground_lit = Literal::positive(atom(
            &symbols,
            "Smokes",
            vec![Term::Const(symbols.intern("alice"))],
        ));
        let open_lit = Literal::negative(atom(&symbols, "Cancer", vec![var(&symbols, "x")]));
        let ground = Clause::new(vec![ground_lit.clone()], 1.0).unwrap();
        assert!(ground.is_ground());
        let open = Clause::new(vec![ground_lit, open_lit], 1.0).unwrap();
        assert!(!open.is_ground());
    }

    #[test]
    fn free_vars_span_literals_without_repeats() {
        let symbols = SymbolStore::new();
        let friends = Literal::positive(atom(
            &symbols,
            "Friends",
            vec![var(&symbols, "x"), var(&symbols, "y")],
        ));
        let smokes = Literal::negative(atom(&symbols, "Smokes", vec![var(&symbols, "y")]));
        let clause = Clause::new(vec![friends, smokes], 0.5).unwrap();
        let names: Vec<_> = clause
            .free_vars()
            .iter()
            .map(|v| symbols.resolve(v.name).unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["x", "y"], "y appears in both literals but collects once");
    }

    #[test]
    fn distinct_vars_counts_names_not_occurrences() {
        let symbols = SymbolStore::new();
        let lit = Literal::positive(atom(
            &symbols,
            "Friends",
            vec![var(&symbols, "x"), var(&symbols, "x")],
        ));
        assert_eq!(lit.distinct_vars(), 1);
    }

    // ========== FORMATTING TESTS ==========

    #[test]
    fn format_negated_literal() {
        let symbols = SymbolStore::new();
        let lit = Literal::negative(atom(&symbols, "Cancer", vec![var(&symbols, "x")]));
        assert_eq!(format_literal(&lit, &symbols), "!Cancer(x)");
    }

    #[test]
    fn format_clause_shows_weight_and_disjunction() {
        let symbols = SymbolStore::new();
        let a = Literal::positive(atom(&symbols, "Smokes", vec![var(&symbols, "x")]));
        let b = Literal::positive(atom(&symbols, "Cancer", vec![var(&symbols, "x")]));
        let clause = Clause::new(vec![a, b], 2.0).unwrap();
        assert_eq!(format_clause(&clause, &symbols), "2: Smokes(x) v Cancer(x)");
    }
}

use crate::symbol::{Symbol, SymbolStore};
use smallvec::SmallVec;

/// Ground argument tuple of a predicate or function.
///
/// Tuples are short in practice; four inline slots cover the stock
/// benchmark networks without spilling to the heap.
pub type GroundArgs = SmallVec<[Symbol; 4]>;

/// A function name together with its arity.
///
/// Two signatures denote the same mapping only when both name and arity
/// agree, so the pair is the lookup key everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FuncSig {
    pub name: Symbol,
    pub arity: usize,
}

impl FuncSig {
    pub fn new(name: Symbol, arity: usize) -> Self {
        Self { name, arity }
    }
}

/// A variable, identified by name, ranging over a finite named domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: Symbol,
    pub domain: Symbol,
}

impl Variable {
    pub fn new(name: Symbol, domain: Symbol) -> Self {
        Self { name, domain }
    }
}

/// A first-order term: a domain constant, a variable, or a function applied
/// to argument terms. Function arguments nest, so they live in a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Const(Symbol),
    Var(Variable),
    Func(FuncSig, Vec<Term>),
}

impl Term {
    /// True when no variable occurs anywhere in the term.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Const(_) => true,
            Term::Var(_) => false,
            Term::Func(_, args) => args.iter().all(Term::is_ground),
        }
    }

    /// Append the term's variables to `out` in first-appearance order.
    ///
    /// Variables are identified by name: a repeated name contributes one
    /// slot, keyed by its first occurrence.
    pub fn collect_vars(&self, out: &mut Vec<Variable>) {
        match self {
            Term::Const(_) => {}
            Term::Var(v) => {
                if !out.iter().any(|seen| seen.name == v.name) {
                    out.push(*v);
                }
            }
            Term::Func(_, args) => {
                for arg in args {
                    arg.collect_vars(out);
                }
            }
        }
    }
}

/// Render a term using the names in `symbols`.
///
/// Symbols from a foreign store render as a placeholder rather than failing,
/// so this is safe to call from log and error paths.
pub fn format_term(term: &Term, symbols: &SymbolStore) -> String {
    match term {
        Term::Const(c) => symbols.resolve_or_opaque(*c).to_string(),
        Term::Var(v) => symbols.resolve_or_opaque(v.name).to_string(),
        Term::Func(sig, args) => {
            let mut out = String::from(symbols.resolve_or_opaque(sig.name));
            out.push('(');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&format_term(arg, symbols));
            }
            out.push(')');
            out
        }
    }
}

use crate::clause::AtomSig;
use crate::error::GroundError;
use crate::symbol::{Symbol, SymbolStore};
use crate::term::{FuncSig, GroundArgs};
use hashbrown::HashMap;
use std::fmt;

/// Finite maps backing function terms.
///
/// Registration and lookup are separate failures: resolving an
/// unregistered signature is fatal, while a registered signature with no
/// entry for a tuple simply yields nothing, which drops the substitution.
#[derive(Debug, Default)]
pub struct FunctionMap {
    maps: HashMap<FuncSig, HashMap<GroundArgs, Symbol>>,
}

impl FunctionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a signature, with no tuples yet.
    pub fn register(&mut self, sig: FuncSig) {
        self.maps.entry(sig).or_default();
    }

    /// Map one ground tuple to its value, registering the signature if
    /// needed.
    pub fn insert(&mut self, sig: FuncSig, args: GroundArgs, value: Symbol) {
        debug_assert_eq!(sig.arity, args.len(), "Function tuple arity mismatch");
        self.maps.entry(sig).or_default().insert(args, value);
    }

    pub fn is_registered(&self, sig: &FuncSig) -> bool {
        self.maps.contains_key(sig)
    }

    /// Resolve a ground application. `Ok(None)` means the signature is
    /// known but maps nothing for this tuple.
    pub fn resolve(
        &self,
        sig: &FuncSig,
        args: &[Symbol],
        symbols: &SymbolStore,
    ) -> Result<Option<Symbol>, GroundError> {
        match self.maps.get(sig) {
            Some(table) => Ok(table.get(args).copied()),
            None => Err(GroundError::UnknownFunction {
                function: symbols.resolve_or_opaque(sig.name).to_string(),
                arity: sig.arity,
            }),
        }
    }
}

/// Truth function of a dynamic predicate, computed from ground arguments.
pub type DynamicFn = Box<dyn Fn(&[Symbol]) -> bool + Send + Sync>;

/// Dynamic predicates: signatures whose truth value is computed rather
/// than looked up in evidence, such as equality and arithmetic
/// comparisons. Closures that need argument text capture the symbol store.
#[derive(Default)]
pub struct DynamicRegistry {
    preds: HashMap<AtomSig, DynamicFn>,
}

impl DynamicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, sig: AtomSig, f: F)
    where
        F: Fn(&[Symbol]) -> bool + Send + Sync + 'static,
    {
        self.preds.insert(sig, Box::new(f));
    }

    pub fn is_dynamic(&self, sig: &AtomSig) -> bool {
        self.preds.contains_key(sig)
    }

    /// Evaluate the predicate on a ground tuple, or `None` if the
    /// signature is not dynamic.
    pub fn evaluate(&self, sig: &AtomSig, args: &[Symbol]) -> Option<bool> {
        self.preds.get(sig).map(|f| f(args))
    }
}

impl fmt::Debug for DynamicRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicRegistry")
            .field("predicates", &self.preds.len())
            .finish()
    }
}

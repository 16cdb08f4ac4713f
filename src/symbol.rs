use lasso::{Spur, ThreadedRodeo};

/// A unique identifier for an interned name.
///
/// Predicate names, constants, function names and domain names all live in
/// the same store, so a `Symbol` compares in O(1) regardless of what kind of
/// name it stands for.
pub type Symbol = Spur;

/// Thread-safe store for interning the names that appear in clauses and
/// evidence.
///
/// Guarantees:
/// - Same string always produces the same Symbol
/// - Different strings always produce different Symbols
/// - A Symbol can be resolved back to the original string
pub struct SymbolStore {
    rodeo: ThreadedRodeo,
}

impl SymbolStore {
    /// Create a new empty symbol store.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Intern a name, returning its Symbol.
    /// If the name was already interned, returns the existing Symbol.
    pub fn intern(&self, name: &str) -> Symbol {
        self.rodeo.get_or_intern(name)
    }

    /// Resolve a Symbol back to its string.
    /// Returns None if the Symbol was not created by this store.
    pub fn resolve(&self, sym: Symbol) -> Option<&str> {
        self.rodeo.try_resolve(&sym)
    }

    /// Resolve a Symbol for display, substituting a placeholder for ids
    /// from a foreign store.
    pub fn resolve_or_opaque(&self, sym: Symbol) -> &str {
        self.rodeo.try_resolve(&sym).unwrap_or("<?>")
    }

    /// Get the Symbol for a name if it exists, without interning.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.rodeo.get(name)
    }

    /// Number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl Default for SymbolStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SymbolStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolStore")
            .field("len", &self.rodeo.len())
            .finish()
    }
}

use super::*;

fn person_vars(symbols: &SymbolStore, names: &[&str]) -> Arc<[Variable]> {
    let domain = symbols.intern("person");
    names
        .iter()
        .map(|n| Variable::new(symbols.intern(n), domain))
        .collect::<Vec<_>>()
        .into()
}

// ========== ENUMERATION TESTS ==========

#[test]
fn product_runs_in_odometer_order() {
    let symbols = SymbolStore::new();
    let vars = person_vars(&symbols, &["x", "y"]);
    let x = symbols.intern("x");
    let y = symbols.intern("y");
    let first = vec![symbols.intern("a"), symbols.intern("b")];
    let second = vec![symbols.intern("c"), symbols.intern("d")];
    let iter = AssignmentIter::new(Arc::clone(&vars), vec![&first, &second]);
    let got: Vec<(Symbol, Symbol)> = iter
        .map(|a| (a.lookup(x).unwrap(), a.lookup(y).unwrap()))
        .collect();
    let expected = vec![
        (first[0], second[0]),
        (first[0], second[1]),
        (first[1], second[0]),
        (first[1], second[1]),
    ];
    assert_eq!(got, expected, "The last variable should cycle fastest");
}

#[test]
fn empty_domain_empties_the_product() {
    let symbols = SymbolStore::new();
    let vars = person_vars(&symbols, &["x", "y"]);
    let first = vec![symbols.intern("a")];
    let second: Vec<Symbol> = Vec::new();
    let mut iter = AssignmentIter::new(vars, vec![&first, &second]);
    assert_eq!(iter.total(), 0);
    assert!(iter.next().is_none());
}

#[test]
fn no_variables_yield_exactly_one_empty_assignment() {
    let symbols = SymbolStore::new();
    let vars = person_vars(&symbols, &[]);
    let mut iter = AssignmentIter::new(vars, Vec::new());
    assert_eq!(iter.total(), 1);
    let only = iter.next().expect("The empty product has one element");
    assert!(only.is_empty());
    assert!(iter.next().is_none());
}

#[test]
fn iterator_length_matches_total() {
    let symbols = SymbolStore::new();
    let vars = person_vars(&symbols, &["x", "y", "z"]);
    let d1 = vec![symbols.intern("a"), symbols.intern("b")];
    let d2 = vec![
        symbols.intern("c"),
        symbols.intern("d"),
        symbols.intern("e"),
    ];
    let d3 = vec![
        symbols.intern("f"),
        symbols.intern("g"),
        symbols.intern("h"),
        symbols.intern("i"),
    ];
    let iter = AssignmentIter::new(vars, vec![&d1, &d2, &d3]);
    assert_eq!(iter.total(), 24);
    assert_eq!(iter.count(), 24);
}

// ========== ASSIGNMENT TESTS ==========

#[test]
fn lookup_answers_bound_names_only() {
    let symbols = SymbolStore::new();
    let vars = person_vars(&symbols, &["x"]);
    let domain = vec![symbols.intern("a")];
    let mut iter = AssignmentIter::new(vars, vec![&domain]);
    let assignment = iter.next().unwrap();
    assert_eq!(assignment.lookup(symbols.intern("x")), Some(domain[0]));
    assert_eq!(assignment.lookup(symbols.intern("zz")), None);
    assert_eq!(assignment.len(), 1);
}

#[test]
fn empty_assignment_has_no_bindings() {
    let symbols = SymbolStore::new();
    let empty = Assignment::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.lookup(symbols.intern("x")), None);
    assert_eq!(empty.describe(&symbols), "");
}

#[test]
fn describe_lists_bindings_in_variable_order() {
    let symbols = SymbolStore::new();
    let vars = person_vars(&symbols, &["x", "y"]);
    let d1 = vec![symbols.intern("a")];
    let d2 = vec![symbols.intern("b")];
    let mut iter = AssignmentIter::new(vars, vec![&d1, &d2]);
    let assignment = iter.next().unwrap();
    assert_eq!(assignment.describe(&symbols), "x=a, y=b");
}

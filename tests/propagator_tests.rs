use binsym::backend::{LinearExpr, VarId};
use binsym::constraint::Constraint;
use binsym::events::{Event, Listeners};
use binsym::linear::{
    LinearEqualityConstraint, LinearEqualityPropagator, LinearInequalityPropagator,
};
use binsym::objective_function::{LinearObjective, ObjectiveFunction};
use binsym::propagator::Propagator;
use binsym::store::Store;

fn new_store(n: usize) -> (Store, Vec<VarId>) {
    let mut store = Store::new();
    let vars = (0..n)
        .map(|i| store.new_variable(format!("x_{}", i)))
        .collect();
    (store, vars)
}

fn assert_values(store: &Store, vars: &[VarId], expected: &[Option<i64>]) {
    for (v, e) in vars.iter().zip(expected) {
        assert_eq!(
            store.value(*v),
            *e,
            "unexpected value for {}",
            store.name(*v)
        );
    }
}

#[test]
fn test_inequality_fixes_heavy_items() {
    // 5a + 3b + 4c <= 6
    let (mut store, x) = new_store(3);
    let mut p = LinearInequalityPropagator::new(x.clone(), vec![5, 3, 4], 6, 0);
    p.propagate(&mut store);
    assert!(!store.failed());
    assert_values(&store, &x, &[None, None, None]);

    store.checkpoint();
    store.assign(x[0], 1);
    p.propagate(&mut store);
    assert!(!store.failed());
    assert_values(&store, &x, &[Some(1), Some(0), Some(0)]);

    store.rollback();
    assert_values(&store, &x, &[None, None, None]);
}

#[test]
fn test_inequality_negative_coefficient() {
    // a - b <= 0, i.e. a implies b
    let (mut store, x) = new_store(2);
    let mut p = LinearInequalityPropagator::new(x.clone(), vec![1, -1], 0, 0);
    store.checkpoint();
    store.assign(x[0], 1);
    p.propagate(&mut store);
    assert_values(&store, &x, &[Some(1), Some(1)]);
    store.rollback();

    store.checkpoint();
    store.assign(x[1], 0);
    p.propagate(&mut store);
    assert_values(&store, &x, &[Some(0), Some(0)]);
    store.rollback();
}

#[test]
fn test_inequality_failure() {
    // 4a + 4b <= 6
    let (mut store, x) = new_store(2);
    let mut p = LinearInequalityPropagator::new(x.clone(), vec![4, 4], 6, 0);
    store.checkpoint();
    store.assign(x[0], 1);
    store.assign(x[1], 1);
    p.propagate(&mut store);
    assert!(store.failed());
    store.rollback();
    assert!(!store.failed());
}

#[test]
fn test_equality_exactly_one() {
    let (mut store, x) = new_store(3);
    let mut p = LinearEqualityPropagator::new(x.clone(), vec![1, 1, 1], 1, 0);
    store.checkpoint();
    store.assign(x[1], 1);
    p.propagate(&mut store);
    assert_values(&store, &x, &[Some(0), Some(1), Some(0)]);
    store.rollback();

    store.checkpoint();
    store.assign(x[0], 0);
    store.assign(x[2], 0);
    p.propagate(&mut store);
    assert_values(&store, &x, &[Some(0), Some(1), Some(0)]);
    store.rollback();
}

#[test]
fn test_equality_satisfied() {
    let (mut store, x) = new_store(2);
    let c = LinearEqualityConstraint::new(x.clone(), vec![2, 3], 3);
    assert!(!c.satisfied(&store));
    store.assign(x[0], 0);
    store.assign(x[1], 1);
    assert!(c.satisfied(&store));
}

#[test]
fn test_conflicting_assignment() {
    let (mut store, x) = new_store(1);
    store.checkpoint();
    store.assign(x[0], 1);
    store.set_ub(x[0], 0);
    assert!(store.failed());
    store.rollback();
    assert!(!store.failed());
    assert!(!store.is_assigned(x[0]));
    assert_eq!(store.get_lb(x[0]), 0);
    assert_eq!(store.get_ub(x[0]), 1);
}

#[test]
fn test_bound_events() {
    let (mut store, x) = new_store(2);
    store.assign(x[0], 1);
    store.assign(x[1], 0);
    store.assign(x[1], 0);
    assert_eq!(
        store.take_events(),
        vec![(x[0], Event::LowerBound), (x[1], Event::UpperBound)]
    );
    assert!(store.take_events().is_empty());
}

#[test]
fn test_listeners() {
    let (_, x) = new_store(2);
    let mut listeners = Listeners::new(2);
    let p = LinearInequalityPropagator::new(x.clone(), vec![2, -1], 1, 7);
    p.listen(&mut listeners);
    assert_eq!(listeners.get(x[0], Event::LowerBound), &[7]);
    assert!(listeners.get(x[0], Event::UpperBound).is_empty());
    assert_eq!(listeners.get(x[1], Event::UpperBound), &[7]);
    assert!(listeners.get(x[1], Event::LowerBound).is_empty());
}

#[test]
fn test_objective_cut() {
    let (mut store, x) = new_store(3);
    let objective = LinearObjective::new(x.iter().map(|&v| (v, 1)).collect::<LinearExpr>());
    let mut cut = objective.create_cut(0);

    // inactive without an incumbent
    store.assign(x[0], 1);
    cut.propagate(&mut store);
    assert_values(&store, &x, &[Some(1), None, None]);
    assert_eq!(objective.bound(&store), 1);

    store.set_incumbent(2);
    cut.propagate(&mut store);
    assert_values(&store, &x, &[Some(1), Some(0), Some(0)]);
    assert_eq!(objective.eval(&store), 1);
}

use crate::backend::VarId;
use crate::constraint::Constraint;
use crate::events::{Event, Listeners};
use crate::propagator::{Propagator, PropagatorControlBlock};
use crate::store::Store;

// Coefficients and sums are widened to i128 so sums of i64 terms stay exact.

// assuming q > 0
fn floor_div(p: i128, q: i128) -> i128 {
    if p > 0 {
        p / q
    } else {
        -((-p + q - 1) / q)
    }
}

// assuming q > 0
fn ceil_div(p: i128, q: i128) -> i128 {
    if p > 0 {
        (p + q - 1) / q
    } else {
        -((-p) / q)
    }
}

// bounds handed to the store, saturated to its value type
fn narrow(v: i128) -> i64 {
    v.clamp(i64::MIN.into(), i64::MAX.into()) as i64
}

fn widen(a: Vec<i64>) -> Vec<i128> {
    a.into_iter().map(i128::from).collect()
}

fn lower_sum(x: &[VarId], a: &[i128], store: &Store) -> i128 {
    let mut sum = 0;
    for (v, a) in x.iter().copied().zip(a.iter().copied()) {
        if a > 0 {
            sum += i128::from(store.get_lb(v)) * a;
        } else {
            sum += i128::from(store.get_ub(v)) * a;
        }
    }
    sum
}

fn upper_sum(x: &[VarId], a: &[i128], store: &Store) -> i128 {
    let mut sum = 0;
    for (v, a) in x.iter().copied().zip(a.iter().copied()) {
        if a > 0 {
            sum += i128::from(store.get_ub(v)) * a;
        } else {
            sum += i128::from(store.get_lb(v)) * a;
        }
    }
    sum
}

fn assigned_sum(x: &[VarId], a: &[i128], store: &Store) -> Option<i128> {
    let mut sum = 0;
    for (v, a) in x.iter().copied().zip(a.iter().copied()) {
        sum += i128::from(store.value(v)?) * a;
    }
    Some(sum)
}

/// Bounds reasoning for sum x[i] * a[i] <= b.
pub(crate) fn propagate_le(x: &[VarId], a: &[i128], b: i128, store: &mut Store) {
    let lower_sum = lower_sum(x, a, store);
    if lower_sum > b {
        store.fail();
        return;
    }
    for (v, a) in x.iter().copied().zip(a.iter().copied()) {
        if a > 0 {
            let up = b - lower_sum + i128::from(store.get_lb(v)) * a;
            store.set_ub(v, narrow(floor_div(up, a)));
        } else if a < 0 {
            let down = -b + lower_sum - i128::from(store.get_ub(v)) * a;
            store.set_lb(v, narrow(ceil_div(down, -a)));
        }
    }
}

/// Subscribes to the events that can raise the lower sum of sum x[i] * a[i].
pub(crate) fn listen_le(x: &[VarId], a: &[i128], id: usize, listeners: &mut Listeners) {
    for (v, a) in x.iter().copied().zip(a.iter().copied()) {
        if a > 0 {
            listeners.add_listener(v, Event::LowerBound, id);
        } else if a < 0 {
            listeners.add_listener(v, Event::UpperBound, id);
        }
    }
}

// sum x[i] * a[i] <= b
pub struct LinearInequalityConstraint {
    x: Vec<VarId>,
    a: Vec<i128>,
    b: i128,
}

impl LinearInequalityConstraint {
    pub fn new(x: Vec<VarId>, a: Vec<i64>, b: i64) -> Self {
        assert!(x.len() == a.len());
        Self {
            x,
            a: widen(a),
            b: b.into(),
        }
    }

    /// sum x[i] * a[i] >= b, kept as sum x[i] * -a[i] <= -b
    pub fn at_least(x: Vec<VarId>, a: Vec<i64>, b: i64) -> Self {
        assert!(x.len() == a.len());
        Self {
            x,
            a: a.into_iter().map(|a| -i128::from(a)).collect(),
            b: -i128::from(b),
        }
    }
}

impl Constraint for LinearInequalityConstraint {
    fn satisfied(&self, store: &Store) -> bool {
        match assigned_sum(&self.x, &self.a, store) {
            Some(sum) => sum <= self.b,
            None => false,
        }
    }

    fn create_propagators(&self, index0: usize) -> Vec<Box<dyn Propagator>> {
        vec![Box::new(LinearInequalityPropagator::new(
            self.x.clone(),
            self.a.clone(),
            self.b,
            index0,
        ))]
    }
}

pub struct LinearInequalityPropagator {
    pcb: PropagatorControlBlock,
    x: Vec<VarId>,
    a: Vec<i128>,
    b: i128,
}

impl LinearInequalityPropagator {
    pub fn new(x: Vec<VarId>, a: Vec<i128>, b: i128, id: usize) -> Self {
        Self {
            pcb: PropagatorControlBlock::new(id),
            x,
            a,
            b,
        }
    }
}

impl Propagator for LinearInequalityPropagator {
    fn listen(&self, listeners: &mut Listeners) {
        listen_le(&self.x, &self.a, self.get_id(), listeners);
    }

    fn propagate(&mut self, store: &mut Store) {
        propagate_le(&self.x, &self.a, self.b, store);
    }

    fn get_cb(&self) -> &PropagatorControlBlock {
        &self.pcb
    }

    fn get_cb_mut(&mut self) -> &mut PropagatorControlBlock {
        &mut self.pcb
    }
}

// sum x[i] * a[i] == b
pub struct LinearEqualityConstraint {
    x: Vec<VarId>,
    a: Vec<i128>,
    b: i128,
}

impl LinearEqualityConstraint {
    pub fn new(x: Vec<VarId>, a: Vec<i64>, b: i64) -> Self {
        assert!(x.len() == a.len());
        Self {
            x,
            a: widen(a),
            b: b.into(),
        }
    }
}

impl Constraint for LinearEqualityConstraint {
    fn satisfied(&self, store: &Store) -> bool {
        assigned_sum(&self.x, &self.a, store) == Some(self.b)
    }

    fn create_propagators(&self, index0: usize) -> Vec<Box<dyn Propagator>> {
        vec![Box::new(LinearEqualityPropagator::new(
            self.x.clone(),
            self.a.clone(),
            self.b,
            index0,
        ))]
    }
}

pub struct LinearEqualityPropagator {
    pcb: PropagatorControlBlock,
    x: Vec<VarId>,
    a: Vec<i128>,
    b: i128,
}

impl LinearEqualityPropagator {
    pub fn new(x: Vec<VarId>, a: Vec<i128>, b: i128, id: usize) -> Self {
        Self {
            pcb: PropagatorControlBlock::new(id),
            x,
            a,
            b,
        }
    }
}

impl Propagator for LinearEqualityPropagator {
    fn listen(&self, listeners: &mut Listeners) {
        for (v, a) in self.x.iter().copied().zip(self.a.iter().copied()) {
            if a != 0 {
                listeners.add_listener(v, Event::LowerBound, self.get_id());
                listeners.add_listener(v, Event::UpperBound, self.get_id());
            }
        }
    }

    fn propagate(&mut self, store: &mut Store) {
        let lower_sum = lower_sum(&self.x, &self.a, store);
        let upper_sum = upper_sum(&self.x, &self.a, store);
        if lower_sum > self.b || upper_sum < self.b {
            store.fail();
            return;
        }
        for (v, a) in self.x.iter().copied().zip(self.a.iter().copied()) {
            if a > 0 {
                let up = self.b - lower_sum + i128::from(store.get_lb(v)) * a;
                store.set_ub(v, narrow(floor_div(up, a)));
                let down = self.b - upper_sum + i128::from(store.get_ub(v)) * a;
                store.set_lb(v, narrow(ceil_div(down, a)));
            } else if a < 0 {
                let down = -self.b + lower_sum - i128::from(store.get_ub(v)) * a;
                store.set_lb(v, narrow(ceil_div(down, -a)));
                let up = -self.b + upper_sum - i128::from(store.get_lb(v)) * a;
                store.set_ub(v, narrow(floor_div(up, -a)));
            }
        }
    }

    fn get_cb(&self) -> &PropagatorControlBlock {
        &self.pcb
    }

    fn get_cb_mut(&mut self) -> &mut PropagatorControlBlock {
        &mut self.pcb
    }
}

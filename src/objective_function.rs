use crate::backend::{LinearExpr, VarId};
use crate::events::Listeners;
use crate::linear::{listen_le, propagate_le};
use crate::propagator::{Propagator, PropagatorControlBlock};
use crate::store::Store;

// function to minimize
pub trait ObjectiveFunction {
    fn eval(&self, store: &Store) -> i128;
    /// lower bound over every completion of the current partial assignment
    fn bound(&self, store: &Store) -> i128;
    /// propagator enforcing objective <= incumbent - 1 once there is an incumbent
    fn create_cut(&self, id: usize) -> Box<dyn Propagator>;
}

/// sum x[i] * c[i]; the empty sum is the objective of a pure feasibility problem
#[derive(Default)]
pub struct LinearObjective {
    x: Vec<VarId>,
    c: Vec<i128>,
}

impl LinearObjective {
    pub fn new(expr: LinearExpr) -> Self {
        let (x, c) = expr.into_parts();
        Self {
            x,
            c: c.into_iter().map(i128::from).collect(),
        }
    }
}

impl ObjectiveFunction for LinearObjective {
    fn eval(&self, store: &Store) -> i128 {
        let mut sum = 0;
        for (v, c) in self.x.iter().copied().zip(self.c.iter().copied()) {
            sum += i128::from(store.get_lb(v)) * c;
        }
        sum
    }

    fn bound(&self, store: &Store) -> i128 {
        let mut sum = 0;
        for (v, c) in self.x.iter().copied().zip(self.c.iter().copied()) {
            if c > 0 {
                sum += i128::from(store.get_lb(v)) * c;
            } else {
                sum += i128::from(store.get_ub(v)) * c;
            }
        }
        sum
    }

    fn create_cut(&self, id: usize) -> Box<dyn Propagator> {
        Box::new(ObjectiveCutPropagator {
            pcb: PropagatorControlBlock::new(id),
            x: self.x.clone(),
            c: self.c.clone(),
        })
    }
}

pub struct ObjectiveCutPropagator {
    pcb: PropagatorControlBlock,
    x: Vec<VarId>,
    c: Vec<i128>,
}

impl Propagator for ObjectiveCutPropagator {
    fn listen(&self, listeners: &mut Listeners) {
        listen_le(&self.x, &self.c, self.get_id(), listeners);
    }

    fn propagate(&mut self, store: &mut Store) {
        if let Some(best) = store.incumbent() {
            propagate_le(&self.x, &self.c, best - 1, store);
        }
    }

    fn get_cb(&self) -> &PropagatorControlBlock {
        &self.pcb
    }

    fn get_cb_mut(&mut self) -> &mut PropagatorControlBlock {
        &mut self.pcb
    }
}

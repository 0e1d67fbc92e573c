use crate::backend::VarId;
use crate::events::Event;

/// Domains of all boolean variables, with a trail of fixings for backtracking.
#[derive(Default)]
pub struct Store {
    values: Vec<Option<bool>>,
    names: Vec<String>,
    trail: Vec<VarId>,
    checkpoints: Vec<usize>,
    events: Vec<(VarId, Event)>,
    incumbent: Option<i128>,
    failed: bool,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_variable(&mut self, name: String) -> VarId {
        let var = VarId::new(self.values.len());
        self.values.push(None);
        self.names.push(name);
        var
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn name(&self, var: VarId) -> &str {
        &self.names[var.index()]
    }

    pub fn get_lb(&self, var: VarId) -> i64 {
        match self.values[var.index()] {
            Some(true) => 1,
            _ => 0,
        }
    }

    pub fn get_ub(&self, var: VarId) -> i64 {
        match self.values[var.index()] {
            Some(false) => 0,
            _ => 1,
        }
    }

    pub fn is_assigned(&self, var: VarId) -> bool {
        self.values[var.index()].is_some()
    }

    pub fn value(&self, var: VarId) -> Option<i64> {
        self.values[var.index()].map(i64::from)
    }

    pub fn assign(&mut self, var: VarId, x: i64) {
        match x {
            0 => self.fix(var, false),
            1 => self.fix(var, true),
            _ => self.fail(),
        }
    }

    pub fn set_lb(&mut self, var: VarId, x: i64) {
        if x > 1 {
            self.fail();
        } else if x == 1 {
            self.fix(var, true);
        }
    }

    pub fn set_ub(&mut self, var: VarId, x: i64) {
        if x < 0 {
            self.fail();
        } else if x == 0 {
            self.fix(var, false);
        }
    }

    fn fix(&mut self, var: VarId, val: bool) {
        match self.values[var.index()] {
            Some(current) if current != val => self.fail(),
            Some(_) => {}
            None => {
                self.values[var.index()] = Some(val);
                self.trail.push(var);
                let event = if val {
                    Event::LowerBound
                } else {
                    Event::UpperBound
                };
                self.events.push((var, event));
            }
        }
    }

    pub fn fail(&mut self) {
        self.failed = true;
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn checkpoint(&mut self) {
        self.checkpoints.push(self.trail.len());
    }

    /// Undoes every fixing made since the matching checkpoint and clears the failure flag.
    pub fn rollback(&mut self) {
        let mark = self.checkpoints.pop().unwrap_or(0);
        for var in self.trail.drain(mark..) {
            self.values[var.index()] = None;
        }
        self.events.clear();
        self.failed = false;
    }

    pub fn take_events(&mut self) -> Vec<(VarId, Event)> {
        std::mem::take(&mut self.events)
    }

    /// Objective value of the best solution found so far; not trailed.
    pub fn incumbent(&self) -> Option<i128> {
        self.incumbent
    }

    pub fn set_incumbent(&mut self, value: i128) {
        self.incumbent = Some(value);
    }

    pub fn clear_incumbent(&mut self) {
        self.incumbent = None;
    }

    pub fn vars(&self) -> impl Iterator<Item = VarId> {
        (0..self.values.len()).map(VarId::new)
    }

    /// Values of all variables, `None` while any of them is unassigned.
    pub fn snapshot(&self) -> Option<Vec<i64>> {
        self.values.iter().map(|v| v.map(i64::from)).collect()
    }
}

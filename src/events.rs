use crate::backend::VarId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The lower bound went up, i.e. the variable was fixed to 1.
    LowerBound = 0,
    /// The upper bound went down, i.e. the variable was fixed to 0.
    UpperBound = 1,
}

pub const N_EVENTS: usize = 2;

pub fn event_index(e: &Event) -> usize {
    *e as usize
}

/// Propagator ids subscribed to each (event, variable) pair.
pub struct Listeners {
    lists: [Vec<Vec<usize>>; N_EVENTS],
}

impl Listeners {
    pub fn new(n_vars: usize) -> Self {
        Self {
            lists: std::array::from_fn(|_| vec![Vec::new(); n_vars]),
        }
    }

    pub fn add_listener(&mut self, var: VarId, event: Event, propagator: usize) {
        let list = &mut self.lists[event_index(&event)][var.index()];
        if !list.contains(&propagator) {
            list.push(propagator);
        }
    }

    pub fn get(&self, var: VarId, event: Event) -> &[usize] {
        &self.lists[event_index(&event)][var.index()]
    }
}

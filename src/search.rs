use crate::backend::{SolutionStatus, VarId};
use crate::config::Config;
use crate::constraint::Constraint;
use crate::events::Listeners;
use crate::objective_function::ObjectiveFunction;
use crate::propagator::Propagator;
use crate::store::Store;
use log::{debug, trace};
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    /// Nodes entered, the root included.
    pub nodes: u64,
    pub fails: u64,
    pub max_depth: usize,
    pub solutions: u64,
    pub whole_tree_explored: bool,
}

#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub status: SolutionStatus,
    pub objective: Option<i128>,
    /// Values of all variables in the best solution, indexed by `VarId::index`.
    pub best_solution: Option<Vec<i64>>,
    pub stats: SearchStats,
}

#[derive(Clone, Copy, Default)]
struct SearchNode {
    var: Option<VarId>,
    branch: usize,
    n_branches: usize,
}

/// Depth-first branch and bound over the variables of `store`.
pub struct Search<'a> {
    store: &'a mut Store,
    constraints: &'a [Box<dyn Constraint>],
    objective: &'a dyn ObjectiveFunction,
    config: &'a Config,
    propagators: Vec<Box<dyn Propagator>>,
    listeners: Listeners,
    queue: VecDeque<usize>,
    // unassigned variables offered to the selector, reused across nodes
    candidates: Vec<VarId>,
    cut: usize,
    best_solution: Option<Vec<i64>>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    pub fn new(
        config: &'a Config,
        store: &'a mut Store,
        constraints: &'a [Box<dyn Constraint>],
        objective: &'a dyn ObjectiveFunction,
    ) -> Self {
        let mut propagators: Vec<Box<dyn Propagator>> = Vec::new();
        for c in constraints {
            let created = c.create_propagators(propagators.len());
            propagators.extend(created);
        }
        let cut = propagators.len();
        propagators.push(objective.create_cut(cut));
        let mut listeners = Listeners::new(store.len());
        for p in &propagators {
            p.listen(&mut listeners);
        }
        store.clear_incumbent();
        Self {
            store,
            constraints,
            objective,
            config,
            propagators,
            listeners,
            queue: VecDeque::new(),
            candidates: Vec::new(),
            cut,
            best_solution: None,
            stats: SearchStats::default(),
        }
    }

    fn enqueue(&mut self, id: usize) {
        let p = &mut self.propagators[id];
        if !p.is_queued() {
            p.enqueue();
            self.queue.push_back(id);
        }
    }

    fn schedule_events(&mut self) {
        for (var, event) in self.store.take_events() {
            for i in 0..self.listeners.get(var, event).len() {
                let id = self.listeners.get(var, event)[i];
                self.enqueue(id);
            }
        }
    }

    fn clear_queue(&mut self) {
        for id in self.queue.drain(..) {
            self.propagators[id].dequeue();
        }
    }

    /// Runs the queued propagators to a fixpoint; false on failure.
    pub fn propagate(&mut self) -> bool {
        if self.store.incumbent().is_some() {
            self.enqueue(self.cut);
        }
        loop {
            if self.store.failed() {
                self.clear_queue();
                return false;
            }
            self.schedule_events();
            let Some(id) = self.queue.pop_front() else {
                return true;
            };
            let p = &mut self.propagators[id];
            p.dequeue();
            p.propagate(self.store);
        }
    }

    pub fn check_solution(&self) -> bool {
        self.constraints.iter().all(|c| c.satisfied(&*self.store))
    }

    fn select_variable(&mut self) -> Option<VarId> {
        let store = &*self.store;
        let candidates = &mut self.candidates;
        candidates.clear();
        candidates.extend(
            self.config
                .branchable_vars
                .iter()
                .copied()
                .filter(|v| !store.is_assigned(*v)),
        );
        if candidates.is_empty() {
            candidates.extend(store.vars().filter(|v| !store.is_assigned(*v)));
        }
        if candidates.is_empty() {
            None
        } else {
            Some(self.config.variable_selector.select(store, candidates))
        }
    }

    fn limit_reached(&self, start: &Instant) -> bool {
        if let Some(limit) = self.config.node_limit {
            if self.stats.nodes >= limit {
                return true;
            }
        }
        if let Some(limit) = self.config.time_limit {
            if start.elapsed() >= limit {
                return true;
            }
        }
        false
    }

    // called at a leaf with every variable assigned
    fn record_solution(&mut self) {
        if !self.check_solution() {
            trace!("leaf violates a constraint after propagation");
            return;
        }
        let val = self.objective.eval(self.store);
        if self.store.incumbent().is_some_and(|best| val >= best) {
            return;
        }
        self.best_solution = self.store.snapshot();
        self.store.set_incumbent(val);
        self.stats.solutions += 1;
        debug!(
            "new incumbent with objective {} after {} nodes",
            val, self.stats.nodes
        );
    }

    pub fn run(mut self) -> SearchOutcome {
        let start = Instant::now();
        for id in 0..self.propagators.len() {
            self.enqueue(id);
        }
        self.store.checkpoint();
        let mut stack = vec![SearchNode::default()];
        let mut stopped = false;
        loop {
            let depth = stack.len();
            let Some(node) = stack.last_mut() else {
                break;
            };
            if let Some(var) = node.var {
                if node.branch == node.n_branches {
                    self.store.rollback();
                    stack.pop();
                    continue;
                }
                let branch = node.branch;
                node.branch += 1;
                trace!("branch #{} for variable {}", branch, self.store.name(var));
                self.store.checkpoint();
                self.config.brancher.branch(self.store, var, branch);
                stack.push(SearchNode::default());
                continue;
            }
            if self.limit_reached(&start) {
                stopped = true;
                break;
            }
            self.stats.nodes += 1;
            self.stats.max_depth = self.stats.max_depth.max(depth);
            if !self.propagate() {
                self.stats.fails += 1;
                self.store.rollback();
                stack.pop();
                continue;
            }
            if let Some(best) = self.store.incumbent() {
                if self.objective.bound(self.store) >= best {
                    self.store.rollback();
                    stack.pop();
                    continue;
                }
            }
            match self.select_variable() {
                Some(var) => {
                    node.var = Some(var);
                    node.branch = 0;
                    node.n_branches = self.config.brancher.n_branches(self.store, var);
                }
                None => {
                    self.record_solution();
                    self.store.rollback();
                    stack.pop();
                }
            }
        }
        for _ in 0..stack.len() {
            self.store.rollback();
        }
        self.clear_queue();
        self.stats.whole_tree_explored = !stopped;
        let objective = self.best_solution.as_ref().and(self.store.incumbent());
        let status = match (self.best_solution.is_some(), stopped) {
            (true, false) => SolutionStatus::Optimal,
            (true, true) => SolutionStatus::Feasible,
            (false, false) => SolutionStatus::Infeasible,
            (false, true) => SolutionStatus::Unknown,
        };
        debug!(
            "search finished: status {}, {} nodes, {} fails, max depth {}, {:.3}s",
            status,
            self.stats.nodes,
            self.stats.fails,
            self.stats.max_depth,
            start.elapsed().as_secs_f64()
        );
        SearchOutcome {
            status,
            objective,
            best_solution: self.best_solution,
            stats: self.stats,
        }
    }
}

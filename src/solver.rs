use crate::backend::{Backend, LinearExpr, Relation, SolutionStatus, VarId};
use crate::config::Config;
use crate::constraint::Constraint;
use crate::linear::{LinearEqualityConstraint, LinearInequalityConstraint};
use crate::objective_function::LinearObjective;
use crate::search::{Search, SearchOutcome, SearchStats};
use crate::store::Store;
use log::trace;
use rustc_hash::FxHashMap;

/// Propagation-based branch-and-bound solver over boolean variables.
pub struct Solver {
    store: Store,
    vars_by_name: FxHashMap<String, VarId>,
    constraints: Vec<Box<dyn Constraint>>,
    constraint_names: Vec<String>,
    objective: LinearObjective,
    config: Config,
    outcome: Option<SearchOutcome>,
}

impl Solver {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            store: Store::new(),
            vars_by_name: FxHashMap::default(),
            constraints: Vec::new(),
            constraint_names: Vec::new(),
            objective: LinearObjective::default(),
            config,
            outcome: None,
        }
    }

    /// creates a new variable or returns an existing variable if a variable with the same name exists
    pub fn new_variable(&mut self, name: String) -> VarId {
        if let Some(var) = self.vars_by_name.get(&name) {
            return *var;
        }
        let var = self.store.new_variable(name.clone());
        self.vars_by_name.insert(name, var);
        var
    }

    pub fn add_constraint(&mut self, c: Box<dyn Constraint>, name: String) {
        trace!("adding constraint {}", name);
        self.constraints.push(c);
        self.constraint_names.push(name);
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.vars_by_name.contains_key(name)
    }

    pub fn get_variable_by_name(&self, name: &str) -> Option<VarId> {
        self.vars_by_name.get(name).copied()
    }

    pub fn variable_name(&self, var: VarId) -> &str {
        self.store.name(var)
    }

    pub fn n_variables(&self) -> usize {
        self.store.len()
    }

    pub fn n_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn constraint_names(&self) -> &[String] {
        &self.constraint_names
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Statistics of the last search, if one ran.
    pub fn stats(&self) -> Option<&SearchStats> {
        self.outcome.as_ref().map(|o| &o.stats)
    }

    pub fn solve(&mut self) -> SolutionStatus {
        let outcome = Search::new(
            &self.config,
            &mut self.store,
            &self.constraints,
            &self.objective,
        )
        .run();
        let status = outcome.status;
        self.outcome = Some(outcome);
        status
    }
}

impl Backend for Solver {
    fn add_binary(&mut self, name: String) -> VarId {
        self.new_variable(name)
    }

    fn add_linear(&mut self, expr: LinearExpr, relation: Relation, rhs: i64, name: String) {
        let (x, a) = expr.into_parts();
        let c: Box<dyn Constraint> = match relation {
            Relation::Le => Box::new(LinearInequalityConstraint::new(x, a, rhs)),
            Relation::Ge => Box::new(LinearInequalityConstraint::at_least(x, a, rhs)),
            Relation::Eq => Box::new(LinearEqualityConstraint::new(x, a, rhs)),
        };
        self.add_constraint(c, name);
    }

    fn minimize(&mut self, objective: LinearExpr) {
        self.objective = LinearObjective::new(objective);
    }

    fn optimize(&mut self) {
        self.solve();
    }

    fn status(&self) -> SolutionStatus {
        self.outcome
            .as_ref()
            .map_or(SolutionStatus::Unknown, |o| o.status)
    }

    fn objective_value(&self) -> Option<i64> {
        // None when the optimum does not fit in i64
        self.outcome
            .as_ref()
            .and_then(|o| o.objective)
            .and_then(|v| i64::try_from(v).ok())
    }

    fn value(&self, var: VarId) -> Option<i64> {
        let solution = self.outcome.as_ref()?.best_solution.as_ref()?;
        solution.get(var.index()).copied()
    }

    fn node_count(&self) -> u64 {
        self.outcome.as_ref().map_or(0, |o| o.stats.nodes)
    }
}

//! The narrow modeling interface a solver has to offer.
//!
//! Model construction only talks to a [`Backend`]: it declares boolean
//! variables, linear constraints over them and a linear objective, asks for an
//! optimization run and reads back status, values and the size of the search
//! tree. [`Solver`](crate::solver::Solver) is the bundled implementation.

use std::fmt;

/// Handle of a variable inside the backend that created it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relation {
    /// sum <= rhs
    Le,
    /// sum >= rhs
    Ge,
    /// sum == rhs
    Eq,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Le => write!(f, "<="),
            Relation::Ge => write!(f, ">="),
            Relation::Eq => write!(f, "=="),
        }
    }
}

/// sum of coef * var, integer coefficients only
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearExpr {
    terms: Vec<(VarId, i64)>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Vec::with_capacity(capacity),
        }
    }

    pub fn add_term(&mut self, var: VarId, coef: i64) {
        self.terms.push((var, coef));
    }

    pub fn term(mut self, var: VarId, coef: i64) -> Self {
        self.add_term(var, coef);
        self
    }

    pub fn terms(&self) -> &[(VarId, i64)] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn into_parts(self) -> (Vec<VarId>, Vec<i64>) {
        self.terms.into_iter().unzip()
    }
}

impl FromIterator<(VarId, i64)> for LinearExpr {
    fn from_iter<T: IntoIterator<Item = (VarId, i64)>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Extend<(VarId, i64)> for LinearExpr {
    fn extend<T: IntoIterator<Item = (VarId, i64)>>(&mut self, iter: T) {
        self.terms.extend(iter);
    }
}

/// Terminal state of an optimization run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolutionStatus {
    /// The search tree was exhausted and the best solution found is optimal.
    Optimal,
    /// A limit stopped the search after at least one solution was found.
    Feasible,
    /// The search tree was exhausted without finding a solution.
    Infeasible,
    /// Not solved yet, or a limit stopped the search before any solution.
    Unknown,
}

impl SolutionStatus {
    pub fn has_solution(self) -> bool {
        matches!(self, SolutionStatus::Optimal | SolutionStatus::Feasible)
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolutionStatus::Optimal => "optimal",
            SolutionStatus::Feasible => "feasible",
            SolutionStatus::Infeasible => "infeasible",
            SolutionStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

pub trait Backend {
    /// Declares a variable with domain {0, 1}.
    fn add_binary(&mut self, name: String) -> VarId;

    fn add_linear(&mut self, expr: LinearExpr, relation: Relation, rhs: i64, name: String);

    /// Sets the expression to minimize, replacing any previous objective.
    fn minimize(&mut self, objective: LinearExpr);

    /// Runs the solver to completion. Blocking.
    fn optimize(&mut self);

    fn status(&self) -> SolutionStatus;

    /// Objective value of the best solution, if there is one.
    fn objective_value(&self) -> Option<i64>;

    /// Value of `var` in the best solution, if there is one.
    fn value(&self, var: VarId) -> Option<i64>;

    /// Number of search-tree nodes explored by the last `optimize` call.
    fn node_count(&self) -> u64;
}

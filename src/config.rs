use crate::backend::VarId;
use crate::brancher::{Brancher, MinValueBrancher};
use crate::variable_selector::{LexVariableSelector, VariableSelector};
use std::time::Duration;

pub struct Config {
    pub brancher: Box<dyn Brancher>,
    pub variable_selector: Box<dyn VariableSelector>,
    /// If this vector is empty, all variables will be used for branching, in declaration order.
    pub branchable_vars: Vec<VarId>,
    /// Wall-clock budget for one search; unlimited when `None`.
    pub time_limit: Option<Duration>,
    /// Maximum number of search nodes; unlimited when `None`.
    pub node_limit: Option<u64>,
}

impl Config {
    pub fn new(
        brancher: Box<dyn Brancher>,
        variable_selector: Box<dyn VariableSelector>,
        branchable_vars: Vec<VarId>,
    ) -> Self {
        Self {
            brancher,
            variable_selector,
            branchable_vars,
            time_limit: None,
            node_limit: None,
        }
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            Box::new(MinValueBrancher {}),
            Box::new(LexVariableSelector {}),
            Vec::new(),
        )
    }
}

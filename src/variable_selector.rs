use crate::backend::VarId;
use crate::store::Store;

pub trait VariableSelector {
    /// `vars` is never empty and holds only unassigned variables.
    fn select(&self, store: &Store, vars: &[VarId]) -> VarId;
}

/// First variable in declaration order.
pub struct LexVariableSelector {}

impl VariableSelector for LexVariableSelector {
    fn select(&self, _store: &Store, vars: &[VarId]) -> VarId {
        vars[0]
    }
}

/// Last variable in declaration order.
pub struct AntiLexVariableSelector {}

impl VariableSelector for AntiLexVariableSelector {
    fn select(&self, _store: &Store, vars: &[VarId]) -> VarId {
        vars[vars.len() - 1]
    }
}

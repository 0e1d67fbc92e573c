use crate::backend::VarId;
use crate::store::Store;

/// Branches on the given variable.
pub trait Brancher {
    fn n_branches(&self, _store: &Store, _v: VarId) -> usize {
        2
    }
    fn branch(&self, store: &mut Store, v: VarId, branch: usize);
}

/// Tries 0 first.
pub struct MinValueBrancher {}

impl Brancher for MinValueBrancher {
    fn branch(&self, store: &mut Store, v: VarId, branch: usize) {
        let x = store.get_lb(v);
        if branch == 0 {
            store.assign(v, x);
        } else {
            store.set_lb(v, x + 1);
        }
    }
}

/// Tries 1 first.
pub struct MaxValueBrancher {}

impl Brancher for MaxValueBrancher {
    fn branch(&self, store: &mut Store, v: VarId, branch: usize) {
        let x = store.get_ub(v);
        if branch == 0 {
            store.assign(v, x);
        } else {
            store.set_ub(v, x - 1);
        }
    }
}

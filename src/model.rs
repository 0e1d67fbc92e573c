//! 0/1 formulation of bin packing.
//!
//! With `n` items there are `n` candidate bins, enough for one item per bin.
//! `x[i, j]` says item `i` goes to bin `j`, `y[j]` says bin `j` is used:
//!
//! ```text
//! minimize    sum_j y[j]
//! subject to  sum_j x[i, j] = 1                       for every item i
//!             sum_i size[i] * x[i, j] <= C * y[j]     for every bin j
//!             x[i, j] <= y[j]                         for every i, j
//! ```
//!
//! Any relabelling of the bins maps a solution onto an equivalent one. The
//! optional symmetry-breaking families keep one representative per class:
//! used bins first (`y[j] >= y[j + 1]`) and non-increasing loads
//! (`load[j] >= load[j + 1]`). Neither changes the optimal number of bins.

use crate::backend::{Backend, LinearExpr, Relation, VarId};
use crate::instance::Instance;
use std::fmt;
use std::ops::Index;

/// Which symmetry-breaking constraint families to add.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Symmetry {
    pub lexicographic: bool,
    pub load_ordering: bool,
}

impl Symmetry {
    pub const NONE: Symmetry = Symmetry {
        lexicographic: false,
        load_ordering: false,
    };
    pub const LEXICOGRAPHIC: Symmetry = Symmetry {
        lexicographic: true,
        load_ordering: false,
    };
    pub const LOAD_ORDERING: Symmetry = Symmetry {
        lexicographic: false,
        load_ordering: true,
    };
    pub const ALL: Symmetry = Symmetry {
        lexicographic: true,
        load_ordering: true,
    };

    pub fn is_none(self) -> bool {
        !self.lexicographic && !self.load_ordering
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lexicographic, self.load_ordering) {
            (false, false) => f.write_str("none"),
            (true, false) => f.write_str("lexicographic"),
            (false, true) => f.write_str("load ordering"),
            (true, true) => f.write_str("lexicographic + load ordering"),
        }
    }
}

// dense row-major matrix of variable handles
#[derive(Clone, Debug)]
struct VarMatrix {
    rows: usize,
    cols: usize,
    vars: Vec<VarId>,
}

impl VarMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn row(&self, r: usize) -> &[VarId] {
        &self.vars[r * self.cols..(r + 1) * self.cols]
    }

    fn column(&self, c: usize) -> impl Iterator<Item = VarId> + '_ {
        (0..self.rows).map(move |r| self[(r, c)])
    }
}

impl Index<(usize, usize)> for VarMatrix {
    type Output = VarId;

    fn index(&self, (r, c): (usize, usize)) -> &VarId {
        &self.vars[r * self.cols + c]
    }
}

/// Variable handles of one built formulation. Only valid for the backend that built it.
#[derive(Clone, Debug)]
pub struct BinPackingModel {
    x: VarMatrix,
    y: Vec<VarId>,
    sizes: Vec<i64>,
    capacity: i64,
}

impl BinPackingModel {
    /// Declares variables, objective and constraints of `instance` on `backend`.
    pub fn build<B: Backend>(backend: &mut B, instance: &Instance, symmetry: Symmetry) -> Self {
        let n = instance.item_count();
        let mut vars = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                vars.push(backend.add_binary(format!("x_{}_{}", i, j)));
            }
        }
        let y = (0..n)
            .map(|j| backend.add_binary(format!("y_{}", j)))
            .collect();
        let model = Self {
            x: VarMatrix {
                rows: n,
                cols: n,
                vars,
            },
            y,
            sizes: instance.sizes().to_vec(),
            capacity: instance.capacity(),
        };

        backend.minimize(model.y.iter().map(|&y| (y, 1)).collect());
        model.add_placement(backend);
        model.add_capacity(backend);
        model.add_linking(backend);
        if symmetry.lexicographic {
            model.add_lexicographic(backend);
        }
        if symmetry.load_ordering {
            model.add_load_ordering(backend);
        }
        model
    }

    pub fn n_items(&self) -> usize {
        self.x.rows()
    }

    pub fn n_bins(&self) -> usize {
        self.y.len()
    }

    pub fn x(&self, item: usize, bin: usize) -> VarId {
        self.x[(item, bin)]
    }

    pub fn y(&self, bin: usize) -> VarId {
        self.y[bin]
    }

    /// sum_i size[i] * x[i, bin]
    pub fn load(&self, bin: usize) -> LinearExpr {
        self.x
            .column(bin)
            .zip(self.sizes.iter().copied())
            .collect()
    }

    // every item in exactly one bin
    fn add_placement<B: Backend>(&self, backend: &mut B) {
        for i in 0..self.n_items() {
            let expr = self.x.row(i).iter().map(|&x| (x, 1)).collect();
            backend.add_linear(expr, Relation::Eq, 1, format!("place_{}", i));
        }
    }

    // load[j] - C * y[j] <= 0
    fn add_capacity<B: Backend>(&self, backend: &mut B) {
        for j in 0..self.n_bins() {
            let expr = self.load(j).term(self.y[j], -self.capacity);
            backend.add_linear(expr, Relation::Le, 0, format!("capacity_{}", j));
        }
    }

    // x[i, j] - y[j] <= 0, implied by capacity for positive sizes but tightens the relaxation
    fn add_linking<B: Backend>(&self, backend: &mut B) {
        for i in 0..self.n_items() {
            for j in 0..self.n_bins() {
                let expr = LinearExpr::with_capacity(2)
                    .term(self.x[(i, j)], 1)
                    .term(self.y[j], -1);
                backend.add_linear(expr, Relation::Le, 0, format!("link_{}_{}", i, j));
            }
        }
    }

    // y[j] - y[j + 1] >= 0
    fn add_lexicographic<B: Backend>(&self, backend: &mut B) {
        for j in 0..self.n_bins().saturating_sub(1) {
            let expr = LinearExpr::with_capacity(2)
                .term(self.y[j], 1)
                .term(self.y[j + 1], -1);
            backend.add_linear(expr, Relation::Ge, 0, format!("lex_{}", j));
        }
    }

    // load[j] - load[j + 1] >= 0
    fn add_load_ordering<B: Backend>(&self, backend: &mut B) {
        for j in 0..self.n_bins().saturating_sub(1) {
            let mut expr = self.load(j);
            expr.extend(self.load(j + 1).terms().iter().map(|&(x, s)| (x, -s)));
            backend.add_linear(expr, Relation::Ge, 0, format!("load_{}", j));
        }
    }
}

use crate::backend::{Backend, SolutionStatus};
use crate::instance::Instance;
use crate::model::{BinPackingModel, Symmetry};
use std::fmt;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsedBin {
    pub index: usize,
    pub items: Vec<usize>,
}

/// What one solve produced, read back from the backend.
#[derive(Clone, Debug)]
pub struct Solution {
    pub instance_name: String,
    pub symmetry: Symmetry,
    pub status: SolutionStatus,
    /// Number of bins used, when the backend has a solution.
    pub objective: Option<i64>,
    /// Bin of each item, `None` for every item when there is no solution.
    pub assignment: Vec<Option<usize>>,
    /// Used bins in index order with their items.
    pub bins: Vec<UsedBin>,
    pub elapsed: Duration,
    pub nodes: u64,
}

impl Solution {
    pub fn extract<B: Backend>(
        backend: &B,
        model: &BinPackingModel,
        instance: &Instance,
        symmetry: Symmetry,
        elapsed: Duration,
    ) -> Self {
        let status = backend.status();
        let mut assignment = vec![None; model.n_items()];
        let mut bins = Vec::new();
        if status.has_solution() {
            for j in 0..model.n_bins() {
                if backend.value(model.y(j)) != Some(1) {
                    continue;
                }
                let items: Vec<usize> = (0..model.n_items())
                    .filter(|&i| backend.value(model.x(i, j)) == Some(1))
                    .collect();
                for &i in &items {
                    assignment[i] = Some(j);
                }
                bins.push(UsedBin { index: j, items });
            }
        }
        Self {
            instance_name: instance.name().to_string(),
            symmetry,
            status,
            objective: backend.objective_value(),
            assignment,
            bins,
            elapsed,
            nodes: backend.node_count(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Total size per bin index, `n` entries for `n` items.
    pub fn loads(&self, instance: &Instance) -> Vec<i64> {
        let mut loads = vec![0; instance.item_count()];
        for (i, bin) in self.assignment.iter().enumerate() {
            if let Some(j) = bin {
                loads[*j] += instance.sizes()[i];
            }
        }
        loads
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.objective) {
            (SolutionStatus::Optimal, Some(objective)) => {
                writeln!(
                    f,
                    "Optimal solution found for instance '{}' with {} bins used.",
                    self.instance_name, objective
                )?;
                for bin in &self.bins {
                    let items: Vec<String> = bin.items.iter().map(|i| i.to_string()).collect();
                    writeln!(f, "  Bin {}: items {}", bin.index, items.join(" "))?;
                }
            }
            _ => writeln!(f, "No optimal solution found.")?,
        }
        writeln!(f, "Solving time: {:.4} seconds", self.elapsed.as_secs_f64())?;
        write!(f, "Branch-and-Bound nodes: {}", self.nodes)
    }
}

/// Side-by-side summary of a run without and a run with symmetry breaking.
pub struct Comparison<'a> {
    pub without: &'a Solution,
    pub with: &'a Solution,
}

impl<'a> Comparison<'a> {
    pub fn new(without: &'a Solution, with: &'a Solution) -> Self {
        Self { without, with }
    }
}

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparison of Results:")?;
        writeln!(
            f,
            "Solving time without symmetry-breaking constraints: {:.4} seconds",
            self.without.elapsed.as_secs_f64()
        )?;
        writeln!(
            f,
            "Branch-and-Bound nodes without symmetry-breaking constraints: {}",
            self.without.nodes
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Solving time with symmetry-breaking constraints ({}): {:.4} seconds",
            self.with.symmetry,
            self.with.elapsed.as_secs_f64()
        )?;
        write!(
            f,
            "Branch-and-Bound nodes with symmetry-breaking constraints ({}): {}",
            self.with.symmetry, self.with.nodes
        )
    }
}

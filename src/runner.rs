use crate::backend::Backend;
use crate::brancher::MaxValueBrancher;
use crate::config::Config;
use crate::instance::Instance;
use crate::model::{BinPackingModel, Symmetry};
use crate::report::Solution;
use crate::solver::Solver;
use crate::variable_selector::LexVariableSelector;
use log::info;
use std::time::Instant;

/// Search setup for bin packing: variables in declaration order (every x
/// item by item, then y), value 1 first, which makes the first dive a first-fit packing.
pub fn search_config() -> Config {
    Config::new(
        Box::new(MaxValueBrancher {}),
        Box::new(LexVariableSelector {}),
        Vec::new(),
    )
}

/// Builds the formulation on a fresh bundled solver and solves it.
pub fn solve(instance: &Instance, symmetry: Symmetry) -> Solution {
    solve_with(Solver::with_config(search_config()), instance, symmetry)
}

/// Builds the formulation on `backend`, runs it once and reads the result back.
/// The backend is consumed; nothing of it outlives the call.
pub fn solve_with<B: Backend>(mut backend: B, instance: &Instance, symmetry: Symmetry) -> Solution {
    let model = BinPackingModel::build(&mut backend, instance, symmetry);
    info!(
        "solving '{}' ({} items, total size {}, capacity {}) with symmetry breaking: {}",
        instance.name(),
        instance.item_count(),
        instance.total_size(),
        instance.capacity(),
        symmetry
    );
    let start = Instant::now();
    backend.optimize();
    let elapsed = start.elapsed();
    let solution = Solution::extract(&backend, &model, instance, symmetry, elapsed);
    info!(
        "'{}': status {}, objective {:?}, {} nodes, {:.4}s",
        instance.name(),
        solution.status,
        solution.objective,
        solution.nodes,
        elapsed.as_secs_f64()
    );
    solution
}

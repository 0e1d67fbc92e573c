use binsym::backend::SolutionStatus;
use binsym::instance::Instance;
use binsym::model::Symmetry;
use binsym::report::{Comparison, Solution, UsedBin};
use std::time::Duration;

fn optimal() -> Solution {
    Solution {
        instance_name: "four_items".to_string(),
        symmetry: Symmetry::NONE,
        status: SolutionStatus::Optimal,
        objective: Some(2),
        assignment: vec![Some(0), Some(1), Some(0), Some(1)],
        bins: vec![
            UsedBin {
                index: 0,
                items: vec![0, 2],
            },
            UsedBin {
                index: 1,
                items: vec![1, 3],
            },
        ],
        elapsed: Duration::from_millis(1500),
        nodes: 42,
    }
}

#[test]
fn test_optimal_report() {
    let expected = "Optimal solution found for instance 'four_items' with 2 bins used.\n\
                    \x20 Bin 0: items 0 2\n\
                    \x20 Bin 1: items 1 3\n\
                    Solving time: 1.5000 seconds\n\
                    Branch-and-Bound nodes: 42";
    assert_eq!(optimal().to_string(), expected);
}

#[test]
fn test_non_optimal_report() {
    for status in [
        SolutionStatus::Infeasible,
        SolutionStatus::Unknown,
        SolutionStatus::Feasible,
    ] {
        let mut solution = optimal();
        solution.status = status;
        let txt = solution.to_string();
        assert!(txt.starts_with("No optimal solution found.\n"), "{}", txt);
        assert!(!txt.contains("Bin 0"));
        assert!(txt.contains("Solving time: 1.5000 seconds"));
        assert!(txt.ends_with("Branch-and-Bound nodes: 42"));
    }
}

#[test]
fn test_loads() {
    let instance = Instance::new("four_items", 10, vec![6, 5, 4, 3]);
    assert_eq!(optimal().loads(&instance), vec![10, 8, 0, 0]);
}

#[test]
fn test_comparison() {
    let without = optimal();
    let mut with = optimal();
    with.symmetry = Symmetry::ALL;
    with.nodes = 7;
    with.elapsed = Duration::from_millis(250);
    let txt = Comparison::new(&without, &with).to_string();
    let lines: Vec<&str> = txt.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Comparison of Results:",
            "Solving time without symmetry-breaking constraints: 1.5000 seconds",
            "Branch-and-Bound nodes without symmetry-breaking constraints: 42",
            "",
            "Solving time with symmetry-breaking constraints (lexicographic + load ordering): 0.2500 seconds",
            "Branch-and-Bound nodes with symmetry-breaking constraints (lexicographic + load ordering): 7",
        ]
    );
}

#[test]
fn test_symmetry_names() {
    assert_eq!(Symmetry::NONE.to_string(), "none");
    assert_eq!(Symmetry::LEXICOGRAPHIC.to_string(), "lexicographic");
    assert_eq!(Symmetry::LOAD_ORDERING.to_string(), "load ordering");
    assert!(Symmetry::default().is_none());
    assert!(!Symmetry::ALL.is_none());
}

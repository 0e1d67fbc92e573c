use assert_cmd::cargo;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::read_dir;
use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(cargo::cargo_bin!("binsym"));
    cmd.args(args).output().unwrap()
}

#[test]
fn test_instance_files() {
    // every well-formed instance runs both variants; spot-check the bin counts
    let expected = [
        ("four_items.bpa", "with 2 bins used."),
        ("five_items.bpa", "with 2 bins used."),
        ("first_fit_trap.bpa", "with 2 bins used."),
        ("empty.bpa", "with 0 bins used."),
        ("oversized.bpa", "No optimal solution found."),
        ("huge_sizes.bpa", "with 3 bins used."),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect::<HashMap<String, String>>();
    let paths = read_dir("tests/instances").unwrap();
    for p in paths.filter(|pp| {
        if let Ok(p) = pp {
            p.path().is_file() && p.path().extension() == Some(OsStr::new("bpa"))
        } else {
            false
        }
    }) {
        let path = p.unwrap().path();
        let testname = path.file_name().unwrap().to_str().unwrap().to_string();
        let Some(substr) = expected.get(&testname) else {
            continue;
        };
        eprintln!("testing instance {}", &testname);
        let out = run(&[path.to_str().unwrap()]);
        assert!(out.status.success(), "{} failed", testname);
        let txt = std::str::from_utf8(&out.stdout).unwrap();
        assert_eq!(txt.matches(substr.as_str()).count(), 2, "{}", txt);
        assert!(txt.contains("Comparison of Results:"));
        assert!(txt.contains("Running without symmetry-breaking constraints..."));
        assert!(txt.contains("Running with symmetry-breaking constraints..."));
    }
}

#[test]
fn test_report_lists_bins() {
    let out = run(&["tests/instances/four_items.bpa"]);
    assert!(out.status.success());
    let txt = std::str::from_utf8(&out.stdout).unwrap();
    assert!(txt.contains("Optimal solution found for instance 'four_items' with 2 bins used."));
    assert!(txt.contains("Bin 0: items"));
    assert!(txt.contains("Bin 1: items"));
    assert!(!txt.contains("Bin 2: items"));
    assert_eq!(txt.matches("Solving time: ").count(), 2);
    assert_eq!(txt.matches("Branch-and-Bound nodes: ").count(), 2);
}

#[test]
fn test_truncated_instance_fails() {
    let out = run(&["tests/instances/truncated.bpa"]);
    assert!(!out.status.success());
    let err = std::str::from_utf8(&out.stderr).unwrap();
    assert!(err.contains("failed to load instance"), "{}", err);
    assert!(out.stdout.is_empty());
}

#[test]
fn test_missing_file_fails() {
    let out = run(&["tests/instances/does_not_exist.bpa"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_wrong_argument_count() {
    let out = run(&[]);
    assert!(!out.status.success());
    let err = std::str::from_utf8(&out.stderr).unwrap();
    assert!(err.contains("Usage"), "{}", err);
    assert!(out.stdout.is_empty());

    let out = run(&["a.bpa", "b.bpa"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

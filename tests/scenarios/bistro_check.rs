//! Scenario: checking the bundled bistro sample
//!
//! The sample has one real violation (kitchen reaches into `staff::rota`) and
//! one reviewed exception (booking reads kitchen prep capacity).

use crate::common::*;

/// SCENARIO: `brigade check` in the sample reports the violation and fails.
#[test]
fn scenario_bistro_check_fails_on_violation() {
    let result = run_brigade(&bistro_demo(), &["check"], &[]);

    assert_eq!(result.exit_code, 1, "output:\n{}", result.combined_output());
    assert!(
        result
            .stdout
            .contains("src/kitchen/prep.rs:2:25: kitchen -> staff::rota::Shift"),
        "stdout:\n{}",
        result.stdout
    );
    assert!(result.stdout.contains("[FAIL] 1 boundary violation"));
    assert!(result.stdout.contains("3 modules, 9 files"));
    assert!(result.stdout.contains("1 allowed"));
    assert!(!result.stdout.contains("booking ->"));
}

/// SCENARIO: `--warn-only` reports but does not fail.
#[test]
fn scenario_bistro_warn_only() {
    let result = run_brigade(&bistro_demo(), &["check", "--warn-only"], &[]);
    assert!(result.success, "output:\n{}", result.combined_output());
    assert!(result.stdout.contains("kitchen -> staff::rota::Shift"));
}

/// SCENARIO: verbose output lists the reviewed exception with its reason.
#[test]
fn scenario_bistro_verbose_lists_allowed() {
    let result = run_brigade(&bistro_demo(), &["check", "--warn-only", "-v"], &[]);
    assert!(result.stdout.contains(
        "allowed: src/booking/mod.rs:6:5: booking -> kitchen::prep::capacity (capacity moves to kitchen::api next)"
    ), "stdout:\n{}", result.stdout);
}

/// SCENARIO: the sample's internals are visible crate-wide, so Rust privacy
/// alone would let both references compile and only the check catches them.
#[test]
fn scenario_bistro_internals_are_crate_visible() {
    for (file, decl) in [
        ("src/kitchen/mod.rs", "pub(crate) mod prep;"),
        ("src/staff/mod.rs", "pub(crate) mod rota;"),
    ] {
        let content = std::fs::read_to_string(bistro_demo().join(file)).unwrap();
        assert!(
            content.lines().any(|line| line.trim() == decl),
            "{file} should declare `{decl}`"
        );
    }
}

//! Boundary contracts: references into another module's internals are always
//! reported, references through its surface never are.

use std::path::Path;
use std::sync::Arc;

use brigade::application::CheckOptions;
use brigade::config::Manifest;
use brigade::domain::ports::NoopEventSink;
use brigade::presentation::factory;

use crate::common::*;

fn check(env: &TestEnv) -> brigade::CheckReport {
    let manifest_path = env.project_path("brigade.toml");
    let manifest = Manifest::load(&manifest_path).unwrap();
    let use_case =
        factory::create_check_use_case(&manifest, &manifest_path, Arc::new(NoopEventSink));
    let options: CheckOptions = factory::check_options(&manifest, &manifest_path);
    use_case
        .execute(manifest.module_decls(&manifest_path).unwrap(), &options)
        .unwrap()
}

/// CONTRACT: reaching a private symbol of another module is a violation.
#[test]
fn contract_private_reference_is_reported() {
    let env = TestEnv::builder()
        .with_manifest(STAFF_AND_KITCHEN)
        .with_file("src/kitchen/prep.rs", "use crate::staff::rota::Shift;\n")
        .build();

    let report = check(&env);
    assert_eq!(report.violations.len(), 1);
    let violation = &report.violations[0];
    assert_eq!(violation.source_module, "kitchen");
    assert_eq!(violation.target_module, "staff");
    assert_eq!(violation.symbol, "rota::Shift");
    assert_eq!(violation.location.file, Path::new("src/kitchen/prep.rs"));
    assert_eq!(violation.location.line, 1);
}

/// CONTRACT: the surface is the only legal way in.
#[test]
fn contract_surface_reference_is_allowed() {
    let env = TestEnv::builder()
        .with_manifest(STAFF_AND_KITCHEN)
        .with_file(
            "src/kitchen/prep.rs",
            "use crate::staff::api;\nfn f() { crate::staff::api::get_kitchen_rota(); api::count(); }\n",
        )
        .build();

    assert!(check(&env).is_clean());
}

/// CONTRACT: surface files are checked too, so a surface cannot forward into
/// another module's internals.
#[test]
fn contract_transitive_calls_obey_the_rule() {
    let env = TestEnv::builder()
        .with_manifest(STAFF_AND_KITCHEN)
        .with_file(
            "src/kitchen/api.rs",
            "pub fn rota() { crate::staff::rota::build(); }\n",
        )
        .build();

    let report = check(&env);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].symbol, "rota::build");
}

/// CONTRACT: a module may reach its own internals freely.
#[test]
fn contract_own_internals_are_not_violations() {
    let env = TestEnv::builder()
        .with_manifest(STAFF_AND_KITCHEN)
        .with_file(
            "src/staff/api.rs",
            "use super::rota;\npub fn get() { rota::build(); crate::staff::rota::build(); }\n",
        )
        .build();

    assert!(check(&env).is_clean());
}

/// CONTRACT: a `use` inside a function body is followed like a module-level one.
#[test]
fn contract_function_level_imports_are_followed() {
    let env = TestEnv::builder()
        .with_manifest(STAFF_AND_KITCHEN)
        .with_file(
            "src/kitchen/prep.rs",
            "pub fn f() {\n    use crate::staff;\n    staff::rota::build();\n}\n",
        )
        .build();

    let report = check(&env);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].symbol, "rota::build");
    assert_eq!(report.violations[0].location.line, 3);
}

/// CONTRACT: an import that starts from an earlier import is resolved through it.
#[test]
fn contract_chained_imports_are_followed() {
    let env = TestEnv::builder()
        .with_manifest(STAFF_AND_KITCHEN)
        .with_file(
            "src/kitchen/prep.rs",
            "use crate::staff;\nuse staff::rota::Shift;\n",
        )
        .build();

    let report = check(&env);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].symbol, "rota::Shift");
    assert_eq!(report.violations[0].location.line, 2);
}

/// CONTRACT: macro arguments are checked like ordinary expressions.
#[test]
fn contract_macro_arguments_are_checked() {
    let env = TestEnv::builder()
        .with_manifest(STAFF_AND_KITCHEN)
        .with_file(
            "src/kitchen/prep.rs",
            "pub fn f() -> Vec<u8> {\n    vec![crate::staff::rota::build()]\n}\n",
        )
        .build();

    let report = check(&env);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].symbol, "rota::build");
}

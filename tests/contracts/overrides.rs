//! Override contracts: transparency, LIFO restoration, idempotent end and
//! restoration on panic.

use std::panic::{catch_unwind, AssertUnwindSafe};

use brigade::{OperationRef, RegistryError, ScopeState};

use crate::common::*;

const ROTA: OperationRef<(), Vec<String>> = OperationRef::new("staff", "GetKitchenRota");

/// CONTRACT: an override is visible to every caller until its scope ends.
#[test]
fn contract_override_transparency() {
    let registry = staff_registry();

    let mut scope = ROTA
        .begin_override(&registry, |_: ()| rota(&["X", "Y"]))
        .unwrap();
    assert_eq!(ROTA.call(&registry, ()).unwrap(), rota(&["X", "Y"]));

    assert!(scope.end());
    assert_eq!(scope.state(), ScopeState::Restored);
    assert_eq!(ROTA.call(&registry, ()).unwrap(), rota(&["A", "B"]));
}

/// CONTRACT: ending a scope twice has no further effect.
#[test]
fn contract_end_is_idempotent() {
    let registry = staff_registry();
    let mut outer = ROTA.begin_override(&registry, |_: ()| rota(&["O"])).unwrap();
    let mut inner = ROTA.begin_override(&registry, |_: ()| rota(&["I"])).unwrap();

    assert!(inner.end());
    assert!(!inner.end());
    assert_eq!(ROTA.call(&registry, ()).unwrap(), rota(&["O"]));

    outer.end();
    assert_eq!(registry.override_depth("staff", "GetKitchenRota").unwrap(), 0);
}

/// CONTRACT: nested scopes restore last-in-first-out.
#[test]
fn contract_nested_scopes_restore_lifo() {
    let registry = staff_registry();
    {
        let _first = ROTA.begin_override(&registry, |_: ()| rota(&["1"])).unwrap();
        {
            let _second = ROTA.begin_override(&registry, |_: ()| rota(&["2"])).unwrap();
            assert_eq!(ROTA.call(&registry, ()).unwrap(), rota(&["2"]));
        }
        assert_eq!(ROTA.call(&registry, ()).unwrap(), rota(&["1"]));
    }
    assert_eq!(ROTA.call(&registry, ()).unwrap(), rota(&["A", "B"]));
}

/// CONTRACT: a panic inside the scope still restores the original binding.
#[test]
fn contract_restores_on_panic() {
    let registry = staff_registry();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _scope = ROTA.begin_override(&registry, |_: ()| rota(&["X"])).unwrap();
        panic!("test body failed");
    }));

    assert!(result.is_err());
    assert_eq!(ROTA.call(&registry, ()).unwrap(), rota(&["A", "B"]));
}

/// CONTRACT: overriding something that does not exist fails and changes nothing.
#[test]
fn contract_override_unknown_operation() {
    let registry = staff_registry();
    let err = registry
        .begin_override("staff", "GetBarRota", |_: ()| rota(&["X"]))
        .err()
        .unwrap();
    assert!(matches!(err, RegistryError::UnknownOperation { .. }));
    assert_eq!(registry.override_depth("staff", "GetKitchenRota").unwrap(), 0);
}

//! Registry contracts: lookup failures, registration uniqueness and domain
//! error passthrough.

use brigade::{ModuleRegistry, PublicSurface, RegistryError};

use crate::common::*;

/// CONTRACT: an unknown module fails with `UnknownModule`.
#[test]
fn contract_unknown_module() {
    let registry = staff_registry();
    let err = registry
        .invoke::<(), Vec<String>>("payroll", GET_KITCHEN_ROTA, ())
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownModule {
            module: "payroll".to_string()
        }
    );
    assert!(err.is_lookup_failure());
}

/// CONTRACT: an unknown operation on a known module fails with `UnknownOperation`.
#[test]
fn contract_unknown_operation() {
    let registry = staff_registry();
    let err = registry
        .invoke::<(), Vec<String>>("staff", "GetBarRota", ())
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownOperation {
            module: "staff".to_string(),
            operation: "GetBarRota".to_string(),
        }
    );
}

/// CONTRACT: a duplicate registration is refused and the first one is kept.
#[test]
fn contract_registration_uniqueness() {
    let registry = staff_registry();
    let impostor = PublicSurface::builder("staff")
        .operation(GET_KITCHEN_ROTA, |_: ()| rota(&["Z"]))
        .build()
        .unwrap();

    let err = registry.register(impostor).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateModule { ref module } if module == "staff"));
    assert_eq!(
        registry
            .invoke::<(), Vec<String>>("staff", GET_KITCHEN_ROTA, ())
            .unwrap(),
        rota(&["A", "B"])
    );
    assert_eq!(registry.modules(), vec!["staff".to_string()]);
}

/// CONTRACT: errors produced by an implementation come back unchanged.
#[test]
fn contract_domain_errors_pass_through() {
    #[derive(Debug, PartialEq)]
    enum RotaError {
        NobodyAvailable,
    }

    let registry = ModuleRegistry::new();
    registry
        .register(
            PublicSurface::builder("staff")
                .operation("GetBarRota", |_: ()| -> Result<Vec<String>, RotaError> {
                    Err(RotaError::NobodyAvailable)
                })
                .build()
                .unwrap(),
        )
        .unwrap();

    let outer = registry.invoke::<(), Result<Vec<String>, RotaError>>("staff", "GetBarRota", ());
    assert_eq!(outer, Ok(Err(RotaError::NobodyAvailable)));
}

/// CONTRACT: using an operation with the wrong types is a lookup failure,
/// never a panic.
#[test]
fn contract_mismatched_types_are_reported() {
    let registry = staff_registry();
    let err = registry
        .invoke::<u32, Vec<String>>("staff", GET_KITCHEN_ROTA, 3)
        .unwrap_err();
    assert!(matches!(err, RegistryError::ContractMismatch { .. }));
    assert!(!err.is_lookup_failure());
}

/// CONTRACT: nothing registers once the registry is sealed.
#[test]
fn contract_sealed_registry_refuses_registration() {
    let registry = staff_registry();
    registry.seal();
    let kitchen = PublicSurface::builder("kitchen")
        .operation("PrepList", |_: ()| Vec::<String>::new())
        .build()
        .unwrap();
    assert!(matches!(
        registry.register(kitchen),
        Err(RegistryError::RegistrySealed { .. })
    ));
    assert!(!registry.contains("kitchen"));
}

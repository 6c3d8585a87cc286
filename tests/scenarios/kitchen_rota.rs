//! Scenario: the kitchen asks staff for today's rota
//!
//! The staff module keeps its rota private and exposes `GetKitchenRota` on
//! its surface. The kitchen module only knows the surface handle. A test
//! swaps the rota for a fixed one without touching either module.

use std::sync::Arc;

use brigade::{ModuleRegistry, OperationRef, PublicSurface, RegistryResult};

mod staff {
    use super::*;

    mod rota {
        pub(crate) fn kitchen_rota() -> Vec<String> {
            vec!["A".to_string(), "B".to_string()]
        }
    }

    pub mod api {
        use super::*;

        pub const GET_KITCHEN_ROTA: OperationRef<(), Vec<String>> =
            OperationRef::new("staff", "GetKitchenRota");

        pub fn surface() -> PublicSurface {
            PublicSurface::builder("staff")
                .operation(GET_KITCHEN_ROTA.operation(), |_: ()| rota::kitchen_rota())
                .build()
                .expect("staff surface builds")
        }
    }
}

mod kitchen {
    use super::*;

    mod prep {
        use super::*;

        pub(crate) fn cooks_for_service(registry: &ModuleRegistry) -> RegistryResult<Vec<String>> {
            crate::kitchen_rota::staff::api::GET_KITCHEN_ROTA.call(registry, ())
        }
    }

    pub mod api {
        use super::*;

        pub const COOKS_FOR_SERVICE: OperationRef<(), RegistryResult<Vec<String>>> =
            OperationRef::new("kitchen", "CooksForService");

        pub fn surface(registry: Arc<ModuleRegistry>) -> PublicSurface {
            PublicSurface::builder("kitchen")
                .operation(COOKS_FOR_SERVICE.operation(), move |_: ()| {
                    prep::cooks_for_service(&registry)
                })
                .build()
                .expect("kitchen surface builds")
        }
    }
}

fn app() -> Arc<ModuleRegistry> {
    let registry = Arc::new(ModuleRegistry::new());
    registry.register(staff::api::surface()).unwrap();
    registry
        .register(kitchen::api::surface(registry.clone()))
        .unwrap();
    registry.seal();
    registry
}

/// SCENARIO: kitchen sees the real rota, an overridden one inside a scope,
/// and the real one again afterwards.
#[test]
fn scenario_kitchen_rota_override_round_trip() {
    let registry = app();
    let cooks = || {
        kitchen::api::COOKS_FOR_SERVICE
            .call(&registry, ())
            .unwrap()
            .unwrap()
    };

    assert_eq!(cooks(), vec!["A", "B"]);

    {
        let _scope = staff::api::GET_KITCHEN_ROTA
            .begin_override(&registry, |_: ()| vec!["X".to_string(), "Y".to_string()])
            .unwrap();
        assert_eq!(cooks(), vec!["X", "Y"]);
    }

    assert_eq!(cooks(), vec!["A", "B"]);
}

/// SCENARIO: `with_override` scopes the substitute to a closure.
#[test]
fn scenario_with_override_closure() {
    let registry = app();

    let during = registry
        .with_override(
            "staff",
            "GetKitchenRota",
            |_: ()| vec!["Solo".to_string()],
            || {
                kitchen::api::COOKS_FOR_SERVICE
                    .call(&registry, ())
                    .unwrap()
                    .unwrap()
            },
        )
        .unwrap();

    assert_eq!(during, vec!["Solo"]);
    assert_eq!(
        registry.override_depth("staff", "GetKitchenRota").unwrap(),
        0
    );
}

/// SCENARIO: the registry describes what each module exposes.
#[test]
fn scenario_describe_surfaces() {
    let registry = app();
    assert_eq!(registry.modules(), vec!["staff", "kitchen"]);

    let staff = registry.describe("staff").unwrap();
    assert_eq!(staff.operations.len(), 1);
    assert_eq!(staff.operations[0].name, "GetKitchenRota");
    assert_eq!(staff.operations[0].override_depth, 0);
}

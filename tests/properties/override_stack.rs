//! Property tests for override scope stacking.

use proptest::prelude::*;

use brigade::{ModuleRegistry, OperationRef, OverrideScope, PublicSurface};

const VALUE: OperationRef<(), u32> = OperationRef::new("staff", "Value");

fn registry() -> ModuleRegistry {
    let registry = ModuleRegistry::new();
    registry
        .register(
            PublicSurface::builder("staff")
                .operation("Value", |_: ()| 0u32)
                .build()
                .unwrap(),
        )
        .unwrap();
    registry
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after any number of nested overrides end in LIFO order, each
    /// step exposes the previous substitute and finally the original.
    #[test]
    fn property_lifo_restores_each_level(depth in 1usize..12) {
        let registry = registry();
        let mut scopes: Vec<OverrideScope> = Vec::new();
        for level in 1..=depth {
            let value = level as u32;
            scopes.push(VALUE.begin_override(&registry, move |_: ()| value).unwrap());
            prop_assert_eq!(VALUE.call(&registry, ()).unwrap(), value);
        }

        while let Some(mut scope) = scopes.pop() {
            scope.end();
            prop_assert_eq!(VALUE.call(&registry, ()).unwrap(), scopes.len() as u32);
        }
        prop_assert_eq!(registry.override_depth("staff", "Value").unwrap(), 0);
    }

    /// PROPERTY: ending scopes in any order always leaves the most recently
    /// begun live substitute current, and the original once all have ended.
    #[test]
    fn property_any_end_order_restores_original(
        order in (1usize..10).prop_flat_map(|n| Just((1..=n).collect::<Vec<usize>>()).prop_shuffle())
    ) {
        let registry = registry();
        let mut scopes: Vec<Option<OverrideScope>> = Vec::new();
        for level in 1..=order.len() {
            let value = level as u32;
            scopes.push(Some(VALUE.begin_override(&registry, move |_: ()| value).unwrap()));
        }

        for level in order {
            if let Some(mut scope) = scopes[level - 1].take() {
                scope.end();
            }
            let expected = scopes
                .iter()
                .rposition(Option::is_some)
                .map(|i| (i + 1) as u32)
                .unwrap_or(0);
            prop_assert_eq!(VALUE.call(&registry, ()).unwrap(), expected);
        }
        prop_assert_eq!(registry.override_depth("staff", "Value").unwrap(), 0);
    }
}

//! Reusable fixtures.

use brigade::{ModuleRegistry, PublicSurface};

pub const STAFF_AND_KITCHEN: &str = r#"
[[modules]]
name = "staff"

[[modules]]
name = "kitchen"
"#;

pub const GET_KITCHEN_ROTA: &str = "GetKitchenRota";

/// Staff surface whose rota is always `["A", "B"]`
pub fn staff_surface() -> PublicSurface {
    PublicSurface::builder("staff")
        .operation(GET_KITCHEN_ROTA, |_: ()| vec!["A".to_string(), "B".to_string()])
        .operation("CountCooks", |rota: Vec<String>| rota.len())
        .build()
        .expect("staff surface builds")
}

/// Registry with the staff module registered
pub fn staff_registry() -> ModuleRegistry {
    let registry = ModuleRegistry::new();
    registry.register(staff_surface()).expect("staff registers");
    registry
}

pub fn rota(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

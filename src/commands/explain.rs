use anyhow::Result;

pub fn cmd_explain(brief: bool, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "name": "brigade",
            "version": env!("CARGO_PKG_VERSION"),
            "purpose": "Module isolation for monoliths",
            "manifest": "brigade.toml",
            "rule": "code in one module may reference another module only through its surface submodules or exports",
            "layout": {
                "src/<module>/mod.rs": "Private by default",
                "src/<module>/api.rs": "Public surface (default surface submodule)",
            },
            "commands": {
                "brigade check": "Report boundary violations (non-zero exit on violations)",
                "brigade check --warn-only": "Report without failing",
                "brigade modules": "List declared modules",
            },
        });
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "explain",
                "data": output,
            })
        );
        return Ok(());
    }

    println!("Brigade v{}", env!("CARGO_PKG_VERSION"));
    println!("Module isolation for monoliths.\n");

    if brief {
        println!("KEY COMMANDS:");
        println!("  brigade check [--warn-only]");
        println!("  brigade modules");
        return Ok(());
    }

    println!("RULE:");
    println!("  Each module exposes exactly one public surface. Code in one module may");
    println!("  reference another module only through that surface.\n");

    println!("LAYOUT:");
    println!("  src/");
    println!("  |-- staff/");
    println!("  |   |-- mod.rs       pub mod api; mod rota;");
    println!("  |   |-- api.rs       Public surface");
    println!("  |   +-- rota.rs      Private");
    println!("  +-- kitchen/");
    println!("      +-- prep.rs      use crate::staff::api;   (allowed)");
    println!("                       use crate::staff::rota;  (violation)\n");

    println!("MANIFEST (brigade.toml):");
    println!("  [project]");
    println!("  root = \"src\"");
    println!();
    println!("  [[modules]]");
    println!("  name = \"staff\"");
    println!("  surface = [\"api\"]        # default");
    println!("  exports = [\"Shift\"]      # root-level items that are also public\n");

    println!("RUNTIME:");
    println!("  Register each module's PublicSurface in a ModuleRegistry, call operations");
    println!("  through OperationRef handles, and override them in tests with a scope");
    println!("  that restores the original when dropped.\n");

    println!("COMMANDS:");
    println!("  brigade check [--warn-only]   Exit 1 on violations unless --warn-only");
    println!("  brigade modules               List declared modules");
    println!("  brigade explain [--brief]     This text");
    Ok(())
}

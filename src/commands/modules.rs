use anyhow::Result;

use brigade::presentation::output::modules_json;
use brigade::presentation::{OutputContext, TextRenderer};

use super::{load_manifest, Globals};

pub fn cmd_modules(globals: &Globals) -> Result<()> {
    let loaded = load_manifest(globals)?;
    let ui = OutputContext::new(globals.json, globals.verbose, globals.color, &loaded.manifest);
    let modules = loaded.manifest.module_decls(&loaded.path)?;

    if ui.json {
        let json = serde_json::json!({
            "event": "complete",
            "command": "modules",
            "manifest": loaded.path.display().to_string(),
            "modules": modules_json(&modules),
        });
        println!("{}", json);
        return Ok(());
    }

    for warning in &loaded.warnings {
        eprintln!("warning: {}", warning);
    }
    let renderer = TextRenderer {
        color: ui.color,
        unicode: ui.unicode,
        verbose: ui.verbose,
    };
    print!("{}", renderer.render_modules(&modules));
    Ok(())
}

use std::sync::Arc;

use anyhow::Result;

use brigade::domain::ports::{CheckEvent, CheckEventSink};
use brigade::infrastructure::{ConsoleEventSink, JsonEventSink};
use brigade::presentation::{factory, OutputContext, TextRenderer};

use super::{load_manifest, Globals};

pub fn cmd_check(globals: &Globals, warn_only: bool) -> Result<()> {
    let loaded = load_manifest(globals)?;
    let ui = OutputContext::new(globals.json, globals.verbose, globals.color, &loaded.manifest);

    let events: Arc<dyn CheckEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(ui.verbose))
    };

    for warning in &loaded.warnings {
        events.on_check_event(CheckEvent::ManifestWarning {
            message: warning.to_string(),
        });
    }

    let modules = loaded.manifest.module_decls(&loaded.path)?;
    let options = factory::check_options(&loaded.manifest, &loaded.path);
    let use_case = factory::create_check_use_case(&loaded.manifest, &loaded.path, events);
    let report = use_case.execute(modules, &options)?;

    if !ui.json {
        let renderer = TextRenderer {
            color: ui.color,
            unicode: ui.unicode,
            verbose: ui.verbose,
        };
        print!("{}", renderer.render_check(&report));
    }

    if !report.is_clean() && !warn_only {
        std::process::exit(1);
    }
    Ok(())
}

#![no_main]

use std::path::Path;

use brigade::domain::value_objects::ModulePath;
use brigade::infrastructure::scan_source;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any text, parseable or not, must scan without panicking
        let module = ModulePath::from_segments(vec!["kitchen".to_string()]);
        let _ = scan_source(content, Path::new("src/kitchen.rs"), &module, Some("bistro"));
    }
});

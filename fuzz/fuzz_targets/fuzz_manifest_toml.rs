#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Manifest parsing and validation should never panic
        if let Ok(manifest) = toml::from_str::<brigade::Manifest>(content) {
            let _ = manifest.module_decls(std::path::Path::new("brigade.toml"));
            let _ = manifest.allow_rules();
        }
    }
});

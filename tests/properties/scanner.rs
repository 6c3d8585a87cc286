//! Property tests for the source scanner and manifest parser.

use std::path::Path;

use proptest::prelude::*;

use brigade::domain::value_objects::ModulePath;
use brigade::infrastructure::scan_source;

fn ident() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scanning arbitrary text never panics.
    #[test]
    fn property_scan_never_panics(content in "(?s).{0,256}") {
        let _ = scan_source(&content, Path::new("src/x.rs"), &ModulePath::root(), Some("bistro"));
    }

    /// PROPERTY: a `crate::` path is resolved to the same absolute path from
    /// any module.
    #[test]
    fn property_crate_paths_are_absolute(
        module in proptest::collection::vec(ident(), 0..4),
        target in proptest::collection::vec(ident(), 2..5),
    ) {
        prop_assume!(module.iter().chain(target.iter()).all(|s| !matches!(
            s.as_str(),
            "as" | "crate" | "do" | "dyn" | "fn" | "for" | "if" | "in" | "let" | "loop" | "mod"
                | "move" | "mut" | "pub" | "ref" | "self" | "super" | "try" | "type" | "use"
                | "box" | "else" | "enum" | "gen" | "impl" | "macro" | "match" | "priv" | "static"
                | "struct" | "trait" | "true" | "false" | "where" | "while" | "async" | "await"
                | "break" | "const" | "continue" | "extern" | "final" | "return" | "unsafe"
                | "unsized" | "virtual" | "yield" | "abstract" | "become" | "override" | "typeof"
        )));

        let source = format!("use crate::{};\n", target.join("::"));
        let module_path = ModulePath::from_segments(module);
        let refs = scan_source(&source, Path::new("src/x.rs"), &module_path, None).unwrap();
        prop_assert_eq!(refs.len(), 1);
        prop_assert_eq!(&refs[0].target, &target);
    }

    /// PROPERTY: manifest parsing never panics.
    #[test]
    fn property_manifest_never_panics(content in "(?s).{0,256}") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brigade.toml");
        std::fs::write(&path, &content).unwrap();
        if let Ok(manifest) = brigade::Manifest::load(&path) {
            let _ = manifest.module_decls(&path);
        }
    }
}

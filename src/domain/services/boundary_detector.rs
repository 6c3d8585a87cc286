//! Boundary violation detector
//!
//! Given the declared module graph and the references observed in source,
//! reports every reference from one module into another module's internals.
//!
//! A reference from module A into module B (B != A) is legal only when it
//! names B itself, or when its first segment below B is one of B's surface
//! submodules or exports. Surface files get no exemption, so transitive calls
//! obey the same rule.

use crate::domain::entities::{BoundaryViolation, ModuleDecl, ObservedReference};

/// Name used for code that belongs to no declared module.
pub const UNOWNED: &str = "crate";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModuleGraphError {
    #[error("module '{module}' is declared more than once")]
    DuplicateModule { module: String },

    #[error("modules '{first}' and '{second}' share the path '{path}'")]
    DuplicatePath {
        first: String,
        second: String,
        path: String,
    },
}

/// Declared modules, ordered so the deepest module path matches first.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    modules: Vec<ModuleDecl>,
}

impl ModuleGraph {
    pub fn new(modules: Vec<ModuleDecl>) -> Result<Self, ModuleGraphError> {
        for (i, module) in modules.iter().enumerate() {
            for earlier in &modules[..i] {
                if earlier.name == module.name {
                    return Err(ModuleGraphError::DuplicateModule {
                        module: module.name.to_string(),
                    });
                }
                if earlier.path == module.path {
                    return Err(ModuleGraphError::DuplicatePath {
                        first: earlier.name.to_string(),
                        second: module.name.to_string(),
                        path: module.path.to_string(),
                    });
                }
            }
        }

        let mut modules = modules;
        modules.sort_by(|a, b| b.path.len().cmp(&a.path.len()).then(a.path.cmp(&b.path)));
        Ok(Self { modules })
    }

    /// Module owning `path`: the declared module with the longest matching path.
    pub fn owner(&self, path: &[String]) -> Option<&ModuleDecl> {
        self.modules.iter().find(|m| m.path.contains(path))
    }

    pub fn modules(&self) -> &[ModuleDecl] {
        &self.modules
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

pub struct BoundaryDetector<'g> {
    graph: &'g ModuleGraph,
    include_unowned: bool,
}

impl<'g> BoundaryDetector<'g> {
    pub fn new(graph: &'g ModuleGraph) -> Self {
        Self {
            graph,
            include_unowned: false,
        }
    }

    /// Also check code outside every declared module (reported as `crate`).
    pub fn with_unowned(mut self, include_unowned: bool) -> Self {
        self.include_unowned = include_unowned;
        self
    }

    /// Classify a single reference.
    pub fn check(&self, reference: &ObservedReference) -> Option<BoundaryViolation> {
        let source = self.graph.owner(reference.origin.segments());
        if source.is_none() && !self.include_unowned {
            return None;
        }

        let target = self.graph.owner(&reference.target)?;
        if source.is_some_and(|s| s.name == target.name) {
            return None;
        }

        let rest = &reference.target[target.path.len()..];
        let symbol = match rest.first() {
            None if reference.glob => "*".to_string(),
            None => return None,
            Some(first) if target.is_public_entry(first) => return None,
            Some(_) if reference.glob => format!("{}::*", rest.join("::")),
            Some(_) => rest.join("::"),
        };

        Some(BoundaryViolation {
            source_module: source
                .map(|s| s.name.to_string())
                .unwrap_or_else(|| UNOWNED.to_string()),
            target_module: target.name.to_string(),
            symbol,
            kind: reference.kind,
            location: reference.location.clone(),
        })
    }

    /// All violations, sorted by location and deduplicated.
    pub fn detect(&self, references: &[ObservedReference]) -> Vec<BoundaryViolation> {
        let mut violations: Vec<BoundaryViolation> =
            references.iter().filter_map(|r| self.check(r)).collect();
        violations.sort_by(|a, b| {
            a.location
                .cmp(&b.location)
                .then_with(|| a.target_module.cmp(&b.target_module))
                .then_with(|| a.symbol.cmp(&b.symbol))
        });
        violations.dedup();
        violations
    }
}

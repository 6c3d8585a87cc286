//! Reference collection over a parsed source file
//!
//! Records every `use` leaf and every path with two or more segments,
//! normalized to an absolute crate path. Macro bodies are parsed as
//! comma-separated expressions or as statements; bodies that are neither are
//! skipped.

use std::collections::HashMap;
use std::path::Path;

use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::visit::{self, Visit};
use syn::Token;

use crate::domain::entities::{ObservedReference, ReferenceKind, SourceLocation};
use crate::domain::value_objects::ModulePath;

type Aliases = HashMap<String, Vec<String>>;

/// Bound on alias-to-alias expansion within one scope
const MAX_ALIAS_CHAIN: usize = 8;

/// `use` bindings of one module body or block
struct AliasScope {
    aliases: Aliases,
    /// Module bodies end the lookup; names from outer modules are not in scope
    module: bool,
}

pub(super) struct ReferenceCollector<'a> {
    file: &'a Path,
    crate_name: Option<&'a str>,
    /// Current module, innermost last
    module: Vec<String>,
    /// `use` bindings per enclosing module body and block, innermost last
    scopes: Vec<AliasScope>,
    pub(super) references: Vec<ObservedReference>,
}

impl<'a> ReferenceCollector<'a> {
    pub(super) fn new(file: &'a Path, module: &ModulePath, crate_name: Option<&'a str>) -> Self {
        Self {
            file,
            crate_name,
            module: module.segments().to_vec(),
            scopes: Vec::new(),
            references: Vec::new(),
        }
    }

    fn location(&self, span: Span) -> SourceLocation {
        let start = span.start();
        SourceLocation {
            file: self.file.to_path_buf(),
            line: start.line,
            column: start.column + 1,
        }
    }

    fn origin(&self) -> ModulePath {
        ModulePath::from_segments(self.module.clone())
    }

    /// Resolve a path written in the current module to an absolute one.
    /// Returns `None` for paths that cannot name a crate item (`Self::..`).
    fn normalize(&self, segments: &[String]) -> Option<Vec<String>> {
        let first = segments.first()?;
        match first.as_str() {
            "crate" => Some(segments[1..].to_vec()),
            "self" | "super" => Some(self.resolve_relative(segments)),
            "Self" => None,
            _ if self.crate_name == Some(first.as_str()) => Some(segments[1..].to_vec()),
            _ => {
                if let Some(target) = self.lookup_alias(first) {
                    let mut out = target.clone();
                    out.extend(segments[1..].iter().cloned());
                    return Some(out);
                }
                let mut out = self.module.clone();
                out.extend(segments.iter().cloned());
                Some(out)
            }
        }
    }

    fn resolve_relative(&self, segments: &[String]) -> Vec<String> {
        let mut base = self.module.clone();
        let mut idx = 0;
        while idx < segments.len() && segments[idx] == "super" {
            base.pop();
            idx += 1;
        }
        if idx < segments.len() && segments[idx] == "self" {
            idx += 1;
        }
        base.extend(segments[idx..].iter().cloned());
        base
    }

    fn lookup_alias(&self, name: &str) -> Option<&Vec<String>> {
        for scope in self.scopes.iter().rev() {
            if let Some(target) = scope.aliases.get(name) {
                return Some(target);
            }
            if scope.module {
                break;
            }
        }
        None
    }

    /// Resolve every `use` binding among `items`. A binding may start from
    /// another binding of the same scope (`use crate::staff; use staff::rota;`).
    fn collect_aliases<'i>(&self, items: impl IntoIterator<Item = &'i syn::Item>) -> Aliases {
        let mut raw = Aliases::new();
        for item in items {
            let syn::Item::Use(item_use) = item else {
                continue;
            };
            if item_use.leading_colon.is_some() {
                // `::name` is an extern crate path
                continue;
            }
            let mut prefix = Vec::new();
            alias_tree(&item_use.tree, &mut prefix, &mut raw);
        }

        raw.iter()
            .filter_map(|(alias, segments)| {
                self.resolve_alias(segments, &raw, MAX_ALIAS_CHAIN)
                    .map(|full| (alias.clone(), full))
            })
            .collect()
    }

    fn resolve_alias(&self, segments: &[String], raw: &Aliases, depth: usize) -> Option<Vec<String>> {
        let first = segments.first()?;
        let keyword = matches!(first.as_str(), "crate" | "self" | "super" | "Self")
            || self.crate_name == Some(first.as_str());
        if !keyword && depth > 0 {
            if let Some(inner) = raw.get(first).filter(|inner| inner.as_slice() != segments) {
                let mut out = self.resolve_alias(inner, raw, depth - 1)?;
                out.extend(segments[1..].iter().cloned());
                return Some(out);
            }
        }
        self.normalize(segments)
    }

    fn push_scope(&mut self, aliases: Aliases, module: bool) {
        self.scopes.push(AliasScope { aliases, module });
    }

    fn record_use_tree(&mut self, tree: &syn::UseTree, prefix: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(p) => {
                prefix.push(p.ident.to_string());
                self.record_use_tree(&p.tree, prefix);
                prefix.pop();
            }
            syn::UseTree::Name(name) => {
                let ident = name.ident.to_string();
                if ident == "self" {
                    let leaf = prefix.clone();
                    self.record_use(&leaf, false, name.ident.span());
                } else {
                    prefix.push(ident);
                    let leaf = prefix.clone();
                    prefix.pop();
                    self.record_use(&leaf, false, name.ident.span());
                }
            }
            syn::UseTree::Rename(rename) => {
                prefix.push(rename.ident.to_string());
                let leaf = prefix.clone();
                prefix.pop();
                self.record_use(&leaf, false, rename.ident.span());
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix);
                }
            }
            syn::UseTree::Glob(glob) => {
                let leaf = prefix.clone();
                self.record_use(&leaf, true, glob.star_token.spans[0]);
            }
        }
    }

    fn record_use(&mut self, segments: &[String], glob: bool, span: Span) {
        if segments.is_empty() {
            return;
        }
        if let Some(target) = self.normalize(segments) {
            self.references.push(ObservedReference {
                origin: self.origin(),
                target,
                glob,
                kind: ReferenceKind::Use,
                location: self.location(span),
            });
        }
    }

    fn enter_module(&mut self, items: &[syn::Item]) {
        let aliases = self.collect_aliases(items);
        self.push_scope(aliases, true);
    }

    fn visit_macro_body(&mut self, mac: &syn::Macro) {
        if let Ok(exprs) = mac.parse_body_with(Punctuated::<syn::Expr, Token![,]>::parse_terminated) {
            for expr in &exprs {
                self.visit_expr(expr);
            }
        } else if let Ok(stmts) = mac.parse_body_with(syn::Block::parse_within) {
            for stmt in &stmts {
                self.visit_stmt(stmt);
            }
        }
    }
}

/// Flatten a `use` tree into alias name -> path as written.
fn alias_tree(tree: &syn::UseTree, prefix: &mut Vec<String>, raw: &mut Aliases) {
    match tree {
        syn::UseTree::Path(p) => {
            prefix.push(p.ident.to_string());
            alias_tree(&p.tree, prefix, raw);
            prefix.pop();
        }
        syn::UseTree::Name(name) => {
            let ident = name.ident.to_string();
            if ident == "self" {
                if let Some(last) = prefix.last() {
                    raw.insert(last.clone(), prefix.clone());
                }
            } else {
                prefix.push(ident.clone());
                raw.insert(ident, prefix.clone());
                prefix.pop();
            }
        }
        syn::UseTree::Rename(rename) => {
            let alias = rename.rename.to_string();
            if alias != "_" {
                prefix.push(rename.ident.to_string());
                raw.insert(alias, prefix.clone());
                prefix.pop();
            }
        }
        syn::UseTree::Group(group) => {
            for item in &group.items {
                alias_tree(item, prefix, raw);
            }
        }
        syn::UseTree::Glob(_) => {}
    }
}

impl<'ast> Visit<'ast> for ReferenceCollector<'_> {
    fn visit_file(&mut self, file: &'ast syn::File) {
        self.enter_module(&file.items);
        visit::visit_file(self, file);
        self.scopes.pop();
    }

    fn visit_item_mod(&mut self, item: &'ast syn::ItemMod) {
        let Some((_, items)) = &item.content else {
            return;
        };
        self.module.push(item.ident.to_string());
        self.enter_module(items);
        for attr in &item.attrs {
            self.visit_attribute(attr);
        }
        for nested in items {
            self.visit_item(nested);
        }
        self.scopes.pop();
        self.module.pop();
    }

    fn visit_block(&mut self, block: &'ast syn::Block) {
        let aliases = self.collect_aliases(block.stmts.iter().filter_map(|stmt| match stmt {
            syn::Stmt::Item(item) => Some(item),
            _ => None,
        }));
        self.push_scope(aliases, false);
        visit::visit_block(self, block);
        self.scopes.pop();
    }

    fn visit_macro(&mut self, mac: &'ast syn::Macro) {
        self.visit_macro_body(mac);
        visit::visit_macro(self, mac);
    }

    fn visit_item_use(&mut self, item: &'ast syn::ItemUse) {
        if item.leading_colon.is_some() {
            return;
        }
        let mut prefix = Vec::new();
        self.record_use_tree(&item.tree, &mut prefix);
    }

    fn visit_path(&mut self, path: &'ast syn::Path) {
        if path.leading_colon.is_none() && path.segments.len() >= 2 {
            let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
            if let Some(target) = self.normalize(&segments) {
                let span = path
                    .segments
                    .first()
                    .map(|s| s.ident.span())
                    .unwrap_or_else(Span::call_site);
                self.references.push(ObservedReference {
                    origin: self.origin(),
                    target,
                    glob: false,
                    kind: ReferenceKind::Path,
                    location: self.location(span),
                });
            }
        }
        visit::visit_path(self, path);
    }
}

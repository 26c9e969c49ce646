//! Import classification.
//!
//! Every import-like statement contributes its module specifier, which is sorted
//! into an external npm package, an internal registry component, or nothing.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Static import/re-export specifiers, including multi-line and side-effect imports:
/// - `import { cn } from "@/lib/utils"`
/// - `import type { VariantProps } from "class-variance-authority"`
/// - `import "./styles.css"`
/// - `export { Slot } from "@radix-ui/react-slot"`, `export * as icons from "lucide-react"`
///
/// Only `import` may span arbitrary text before `from`; `export` must be a re-export clause,
/// so text inside an exported declaration never counts.
static MODULE_SPECIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^\s*(?:import\b(?:[^'";]*?\bfrom\s*)?|export\s+(?:type\s+)?(?:\{[^}]*\}|\*(?:\s+as\s+\w+)?)\s*from)\s*['"]([^'"\n]+)['"]"#,
    )
    .unwrap()
});

/// How module specifiers are interpreted.
#[derive(Debug, Clone)]
pub struct DependencyRules {
    /// Prefix denoting this project's own source root, e.g. `@/`.
    pub internal_alias: String,
    /// Internal modules that are infrastructure rather than components.
    pub infrastructure_modules: Vec<String>,
    /// Framework packages assumed present in every consumer.
    pub peer_dependencies: Vec<String>,
}

/// Classification of a single module specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleRef {
    External(String),
    Internal(String),
    Ignored,
}

/// Dependencies of one component, each list deduplicated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dependencies {
    pub external: Vec<String>,
    pub internal: Vec<String>,
}

/// Collect every module specifier referenced by an import-like statement.
pub fn module_specifiers(source: &str) -> impl Iterator<Item = &str> {
    MODULE_SPECIFIER_REGEX
        .captures_iter(source)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
}

impl DependencyRules {
    pub fn classify(&self, specifier: &str) -> ModuleRef {
        if let Some(internal_path) = specifier.strip_prefix(self.internal_alias.as_str()) {
            let name = internal_path
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or_default();
            if name.is_empty() || self.infrastructure_modules.iter().any(|m| m == name) {
                return ModuleRef::Ignored;
            }
            return ModuleRef::Internal(name.to_string());
        }

        if specifier.starts_with('.') || specifier.starts_with('/') {
            return ModuleRef::Ignored;
        }

        let package = package_name(specifier);
        if self.peer_dependencies.iter().any(|p| p == package) {
            ModuleRef::Ignored
        } else {
            ModuleRef::External(package.to_string())
        }
    }

    pub fn extract(&self, source: &str) -> Dependencies {
        let mut deps = Dependencies::default();
        for specifier in module_specifiers(source) {
            match self.classify(specifier) {
                ModuleRef::External(name) => push_unique(&mut deps.external, name),
                ModuleRef::Internal(name) => push_unique(&mut deps.internal, name),
                ModuleRef::Ignored => {}
            }
        }
        deps
    }
}

/// Package name of a bare specifier: two segments for scoped packages, one otherwise.
///
/// `@radix-ui/react-dialog/dist` -> `@radix-ui/react-dialog`, `lucide-react/icons` -> `lucide-react`.
pub fn package_name(specifier: &str) -> &str {
    let segments = if specifier.starts_with('@') { 2 } else { 1 };
    match specifier.match_indices('/').nth(segments - 1) {
        Some((idx, _)) => &specifier[..idx],
        None => specifier,
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

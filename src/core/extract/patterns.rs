//! Pattern rules for exported symbols, capability flags and style tokens.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

// export const Button = ..., export interface ButtonProps, export type Size = ...
static EXPORT_DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+(?:const|function|class|interface|type)\s+(\w+)").unwrap()
});

// CSS custom property references: --primary, --radius-lg
static STYLE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--[\w-]+").unwrap());

/// A capability is detected only when both its declaration-side token
/// and its usage-side token appear in the source.
pub struct CapabilityRule {
    pub declaration: &'static str,
    pub usage: &'static str,
}

impl CapabilityRule {
    pub fn detect(&self, source: &str) -> bool {
        source.contains(self.declaration) && source.contains(self.usage)
    }
}

/// `variants: { ... }` table in a cva() call plus a `variant:` default or prop.
pub const VARIANTS: CapabilityRule = CapabilityRule {
    declaration: "variants:",
    usage: "variant:",
};

/// `sizes` table plus a `size:` default or prop.
pub const SIZES: CapabilityRule = CapabilityRule {
    declaration: "sizes",
    usage: "size:",
};

/// Identifiers of top-level export declarations, deduplicated in first-seen order.
pub fn exported_symbols(source: &str) -> Vec<String> {
    let mut symbols: Vec<String> = Vec::new();
    for cap in EXPORT_DECLARATION_REGEX.captures_iter(source) {
        let symbol = &cap[1];
        if !symbols.iter().any(|s| s == symbol) {
            symbols.push(symbol.to_string());
        }
    }
    symbols
}

/// Custom property names referenced by the source, deduplicated in first-seen order.
pub fn style_tokens(source: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for m in STYLE_TOKEN_REGEX.find_iter(source) {
        if !tokens.iter().any(|t| t == m.as_str()) {
            tokens.push(m.as_str().to_string());
        }
    }
    tokens
}

/// Theme extension stub mapping each token to `hsl(var(<token>))`.
pub fn theme_extension(tokens: &[String]) -> Map<String, Value> {
    tokens
        .iter()
        .map(|token| (token.clone(), Value::String(format!("hsl(var({}))", token))))
        .collect()
}

//! Build-variable interpolation.
//!
//! Option values may embed `$NAME` tokens that are only resolvable once a
//! specific build runs. Expansion is lenient: a token with no matching
//! variable is left in place as literal text, never an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

// A $NAME token extends to the first non-identifier character.
static VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Per-run mapping of build-variable names to their current values.
///
/// Supplied by the CI host at the moment a build runs and discarded after.
/// An empty context behaves exactly like an absent one.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    vars: HashMap<String, String>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable for this run.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Builder-style `set`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up a variable bound for this run.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Replace every `$NAME` token that has a binding; tokens without one
    /// pass through unchanged.
    pub fn interpolate(&self, input: &str) -> String {
        VAR_REGEX
            .replace_all(input, |caps: &regex::Captures| {
                let name = &caps[1];
                self.lookup(name)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("${name}"))
            })
            .to_string()
    }
}

/// A raw option value, tagged by whether it still needs per-build expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigValue {
    /// Fully known at configuration time.
    Literal(String),
    /// Contains at least one `$NAME` token.
    Template(String),
}

impl ConfigValue {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if VAR_REGEX.is_match(&raw) {
            ConfigValue::Template(raw)
        } else {
            ConfigValue::Literal(raw)
        }
    }

    /// The raw string as persisted.
    pub fn raw(&self) -> &str {
        match self {
            ConfigValue::Literal(s) | ConfigValue::Template(s) => s,
        }
    }

    /// Resolve against a build context. Literals ignore the context.
    pub fn expand(&self, ctx: &BuildContext) -> String {
        match self {
            ConfigValue::Literal(s) => s.clone(),
            ConfigValue::Template(s) => ctx.interpolate(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_bound_variables() {
        let ctx = BuildContext::new().with("MYHOSTNAME", "definedhostname");
        assert_eq!(ctx.interpolate("$MYHOSTNAME"), "definedhostname");
    }

    #[test]
    fn interpolates_multiple_tokens() {
        let ctx = BuildContext::new()
            .with("HOST", "web1")
            .with("PORT", "8080");
        assert_eq!(ctx.interpolate("http://$HOST:$PORT/"), "http://web1:8080/");
    }

    #[test]
    fn unbound_variables_are_preserved() {
        let ctx = BuildContext::new();
        assert_eq!(ctx.interpolate("$MYHOSTNAME"), "$MYHOSTNAME");
    }

    #[test]
    fn token_ends_at_the_first_non_identifier_character() {
        let ctx = BuildContext::new().with("HOST", "web1");
        assert_eq!(ctx.interpolate("$HOST:8080"), "web1:8080");
        assert_eq!(ctx.interpolate("$HOST.example.org"), "web1.example.org");
    }

    #[test]
    fn strings_without_tokens_pass_through() {
        let ctx = BuildContext::new().with("HOST", "web1");
        assert_eq!(ctx.interpolate("hudson.local"), "hudson.local");
        // A bare dollar sign is not a token.
        assert_eq!(ctx.interpolate("costs 5$"), "costs 5$");
    }

    #[test]
    fn config_values_are_tagged_at_construction() {
        assert_eq!(
            ConfigValue::new("hudson.local"),
            ConfigValue::Literal("hudson.local".to_string())
        );
        assert_eq!(
            ConfigValue::new("$MYPORT"),
            ConfigValue::Template("$MYPORT".to_string())
        );
    }

    #[test]
    fn templates_expand_and_literals_do_not_consult_the_context() {
        let ctx = BuildContext::new().with("MYPORT", "6789");
        assert_eq!(ConfigValue::new("$MYPORT").expand(&ctx), "6789");
        assert_eq!(ConfigValue::new("8080").expand(&ctx), "8080");
    }
}

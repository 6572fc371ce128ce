//! Scoped style-rule generation for dynamically loaded themes.

use std::collections::BTreeMap;

use minijinja::{context, Environment};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A dynamically loadable theme: a name plus its style variables.
///
/// The variables map style-variable names (`--bg-primary`) to values; a
/// `BTreeMap` keeps the rendered rule deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub name: String,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl ThemeDefinition {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            variables: BTreeMap::new(),
        }
    }

    pub fn variable<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.variables.insert(key.into(), value.into());
        self
    }
}

const RULE_TEMPLATE: &str = r#"[data-theme="{{ name }}"] {
{%- for key, value in variables|items %}
  {{ key }}: {{ value }};
{%- endfor %}
}"#;

static RULE_ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("rule", RULE_TEMPLATE)
        .expect("static rule template parses");
    env
});

/// Renders the style rule scoped to `theme`'s marker; variables appear in
/// key order.
pub(crate) fn scoped_rule(theme: &str, variables: &BTreeMap<String, String>) -> Option<String> {
    let template = RULE_ENV.get_template("rule").ok()?;
    template
        .render(context! { name => theme, variables => variables })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_rule_renders_variables_in_key_order() {
        let mut variables = BTreeMap::new();
        variables.insert("--text-primary".to_string(), "#f1f5f9".to_string());
        variables.insert("--bg-primary".to_string(), "#1e293b".to_string());

        let rule = scoped_rule("midnight", &variables).unwrap();
        assert_eq!(
            rule,
            "[data-theme=\"midnight\"] {\n  --bg-primary: #1e293b;\n  --text-primary: #f1f5f9;\n}"
        );
    }

    #[test]
    fn test_scoped_rule_empty_variables() {
        let rule = scoped_rule("bare", &BTreeMap::new()).unwrap();
        assert_eq!(rule, "[data-theme=\"bare\"] {\n}");
    }

    #[test]
    fn test_definition_builder() {
        let definition = ThemeDefinition::new("ocean")
            .variable("--bg", "navy")
            .variable("--fg", "white");
        assert_eq!(definition.name, "ocean");
        assert_eq!(definition.variables.len(), 2);
    }

    #[test]
    fn test_definition_deserializes_without_variables() {
        let definition: ThemeDefinition = serde_json::from_str(r#"{"name": "plain"}"#).unwrap();
        assert_eq!(definition.name, "plain");
        assert!(definition.variables.is_empty());
    }
}

//! `{{name}}` substitution.

use std::collections::HashMap;
use std::hash::BuildHasher;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern"));

/// Source of substitution values keyed by placeholder name.
pub trait Variables {
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> Variables for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> Variables for HashMap<&str, &str, S> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

/// Replaces every `{{identifier}}` in `template` with its value, or with `""` when the name is unknown.
///
/// Single pass: values are inserted literally, so a value containing `{{x}}` is not expanded again.
pub fn replace_placeholders<V: Variables + ?Sized>(template: &str, vars: &V) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            vars.lookup(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Placeholder names in order of appearance (duplicates kept).
pub fn placeholders_in(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_known_keys() {
        let v = vars(&[
            ("provider", "OpenAI"),
            ("tone", "professional"),
            ("user_input", "write a poem"),
        ]);
        assert_eq!(
            replace_placeholders(
                "Enhance for {{provider}} using tone {{tone}}: {{user_input}}",
                &v
            ),
            "Enhance for OpenAI using tone professional: write a poem"
        );
    }

    #[test]
    fn unknown_key_becomes_empty() {
        let v = vars(&[("a", "1")]);
        assert_eq!(replace_placeholders("x{{nonexistent_key}}y{{a}}", &v), "xy1");
    }

    #[test]
    fn values_are_not_re_expanded() {
        let v = vars(&[("a", "{{b}}"), ("b", "nope")]);
        assert_eq!(replace_placeholders("<{{a}}>", &v), "<{{b}}>");
    }

    #[test]
    fn dollar_signs_in_values_are_literal() {
        let v = vars(&[("a", "$1 ${b} $$")]);
        assert_eq!(replace_placeholders("{{a}}", &v), "$1 ${b} $$");
    }

    #[test]
    fn text_without_placeholders_passes_through() {
        let v = vars(&[]);
        let text = "plain {single} braces and {{ spaced }} tokens";
        assert_eq!(replace_placeholders(text, &v), text);
        assert_eq!(
            replace_placeholders(&replace_placeholders(text, &v), &v),
            text
        );
    }

    #[test]
    fn placeholders_in_lists_names() {
        assert_eq!(
            placeholders_in("{{a}} and {{b_2}} and {{a}} and {{-x}}"),
            vec!["a", "b_2", "a"]
        );
    }
}

//! Checks the builtin catalog against the variable record.

use catalog::Catalog;
use prompt::{placeholders_in, PromptVariables};

/// **Test: Every placeholder in the builtin templates is a recognized variable.**
///
/// **Expected:** No template refers to a key outside `PromptVariables::KEYS`.
#[test]
fn builtin_placeholders_are_known_keys() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    for tool in catalog.tools() {
        let Some(template) = catalog.template(&tool.id) else {
            continue;
        };
        for key in placeholders_in(template) {
            assert!(
                PromptVariables::KEYS.contains(&key),
                "template {} uses unknown key {}",
                tool.id,
                key
            );
        }
    }
}

/// **Test: Every builtin template embeds the user input.**
#[test]
fn builtin_templates_reference_user_input() {
    let catalog = Catalog::builtin().unwrap();
    let templated: Vec<_> = catalog
        .tools()
        .iter()
        .filter_map(|t| catalog.template(&t.id).map(|tmpl| (t.id.as_str(), tmpl)))
        .collect();
    assert!(!templated.is_empty());
    for (id, template) in templated {
        assert!(placeholders_in(template).contains(&"user_input"), "{}", id);
    }
}

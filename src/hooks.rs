//! Extension hooks.
//!
//! A host may register a `(value) -> value` transform at each extension point:
//!
//! | Hook | Runs after | Value |
//! | --- | --- | --- |
//! | `attributes` | attribute defaulting | [`Attributes`] |
//! | `hide_rules` | building predicates from `for` | `Vec<Predicate>` |
//! | `show_rules` | building predicates from `exclude` | `Vec<Predicate>` |
//! | `content` | final content assembly | `String` |
//!
//! Unset hooks are the identity.

use std::fmt;
use std::sync::Arc;

use hidethis_rules::parser::Predicate;

use crate::attributes::Attributes;

/// A transform registered at one extension point.
pub type Hook<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

#[derive(Clone, Default)]
pub struct Hooks {
    attributes: Option<Hook<Attributes>>,
    hide_rules: Option<Hook<Vec<Predicate>>>,
    show_rules: Option<Hook<Vec<Predicate>>>,
    content: Option<Hook<String>>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("attributes", &self.attributes.is_some())
            .field("hide_rules", &self.hide_rules.is_some())
            .field("show_rules", &self.show_rules.is_some())
            .field("content", &self.content.is_some())
            .finish()
    }
}

fn apply<T>(hook: &Option<Hook<T>>, value: T) -> T {
    match hook {
        Some(hook) => hook(value),
        None => value,
    }
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_attributes<F>(mut self, hook: F) -> Self
    where
        F: Fn(Attributes) -> Attributes + Send + Sync + 'static,
    {
        self.attributes = Some(Arc::new(hook));
        self
    }

    pub fn on_hide_rules<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<Predicate>) -> Vec<Predicate> + Send + Sync + 'static,
    {
        self.hide_rules = Some(Arc::new(hook));
        self
    }

    pub fn on_show_rules<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<Predicate>) -> Vec<Predicate> + Send + Sync + 'static,
    {
        self.show_rules = Some(Arc::new(hook));
        self
    }

    pub fn on_content<F>(mut self, hook: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.content = Some(Arc::new(hook));
        self
    }

    pub fn apply_attributes(&self, attributes: Attributes) -> Attributes {
        apply(&self.attributes, attributes)
    }

    pub fn apply_hide_rules(&self, rules: Vec<Predicate>) -> Vec<Predicate> {
        apply(&self.hide_rules, rules)
    }

    pub fn apply_show_rules(&self, rules: Vec<Predicate>) -> Vec<Predicate> {
        apply(&self.show_rules, rules)
    }

    pub fn apply_content(&self, content: String) -> String {
        apply(&self.content, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_hooks_are_identity() {
        let hooks = Hooks::new();
        let attrs = Attributes::new("editor", "", "");
        assert_eq!(hooks.apply_attributes(attrs.clone()), attrs);
        assert_eq!(hooks.apply_content("body".to_string()), "body");
        assert!(hooks.apply_hide_rules(Vec::new()).is_empty());
    }

    #[test]
    fn test_registered_hooks_run() {
        let hooks = Hooks::new()
            .on_attributes(|mut a| {
                a.test = "content".to_string();
                a
            })
            .on_show_rules(|mut rules| {
                rules.push(Predicate::new("subscriber", ""));
                rules
            })
            .on_content(|c| c.to_uppercase());

        assert_eq!(hooks.apply_attributes(Attributes::default()).test, "content");
        assert_eq!(hooks.apply_show_rules(Vec::new()).len(), 1);
        assert!(hooks.apply_hide_rules(Vec::new()).is_empty());
        assert_eq!(hooks.apply_content("body".to_string()), "BODY");
    }
}

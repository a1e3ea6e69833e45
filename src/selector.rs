//! Content selection for one shortcode block.
//!
//! Selection runs two passes over the block and an optional annotation:
//!
//! 1. **Inclusion** (`for`): a matching rule reveals the original content;
//!    otherwise the block is replaced by the hidden fallback.
//! 2. **Exclusion** (`exclude`): a matching rule hides the block again;
//!    otherwise the inclusion result stands.
//! 3. **Test annotation** (`test`): appends a pass/fail marker for diagnostic
//!    blocks.

use hidethis_rules::prelude::*;

use crate::attributes::Attributes;
use crate::config::RenderConfig;
use crate::constants::{TEST_FAILED, TEST_PASSED, test_modes};
use crate::hooks::Hooks;

/// Resolves attributes and content for a viewer.
///
/// Holds no per-request state; one selector can serve concurrent renders.
#[derive(Debug, Clone, Default)]
pub struct ContentSelector {
    hooks: Hooks,
    hidden_content: String,
}

impl ContentSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new().with_hidden_content(config.hidden_content.clone())
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Content substituted for a hidden block. Empty by default.
    pub fn with_hidden_content(mut self, hidden_content: impl Into<String>) -> Self {
        self.hidden_content = hidden_content.into();
        self
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn hidden_content(&self) -> &str {
        &self.hidden_content
    }

    /// Run both passes and the test annotation, without the content hook.
    pub fn resolve(&self, attributes: Attributes, original: &str, ctx: &ViewerContext) -> String {
        let attributes = self.hooks.apply_attributes(attributes);
        let hide_rules = self.hooks.apply_hide_rules(parse_rule_spec(&attributes.for_spec));
        let show_rules = self.hooks.apply_show_rules(parse_rule_spec(&attributes.exclude));
        let hidden = self.hidden_content.as_str();

        let included = ResolutionRequest {
            rules: RuleSet::from_parts(&attributes.for_spec, hide_rules),
            default_content: original,
            alternative_content: hidden,
        }
        .resolve(ctx);

        let visible = ResolutionRequest {
            rules: RuleSet::from_parts(&attributes.exclude, show_rules),
            default_content: hidden,
            alternative_content: included,
        }
        .resolve(ctx);

        tracing::debug!(
            for_spec = %attributes.for_spec,
            exclude = %attributes.exclude,
            shown = visible == original,
            "content block resolved"
        );

        annotate(&attributes.test, original, visible)
    }

    /// Resolve a block and pass the result through the content hook.
    pub fn select(&self, attributes: Attributes, original: &str, ctx: &ViewerContext) -> String {
        let content = self.resolve(attributes, original, ctx);
        self.hooks.apply_content(content)
    }
}

/// Append the self-test marker selected by `test`.
///
/// `content` passes when the result equals the original, `empty` when the
/// result is empty. Any other mode leaves the content untouched.
pub fn annotate(test: &str, original: &str, content: &str) -> String {
    let passed = match test {
        test_modes::CONTENT => content == original,
        test_modes::EMPTY => content.is_empty(),
        _ => return content.to_string(),
    };
    let marker = if passed { TEST_PASSED } else { TEST_FAILED };
    format!("{content}{marker}")
}

/// Resolve a block with default hooks and an empty hidden fallback.
pub fn resolve_visibility(
    for_spec: &str,
    exclude_spec: &str,
    test_spec: &str,
    original_content: &str,
    ctx: &ViewerContext,
) -> String {
    ContentSelector::new().select(
        Attributes::new(for_spec, exclude_spec, test_spec),
        original_content,
        ctx,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> ViewerContext {
        ViewerContext::logged_in("42", "alice", "alice@example.com")
            .with_role("editor")
            .with_capability("edit_posts")
    }

    fn subscriber() -> ViewerContext {
        ViewerContext::logged_in("7", "sam", "sam@example.com").with_role("subscriber")
    }

    #[test]
    fn test_all_shows_content() {
        assert_eq!(resolve_visibility("all", "", "", "X", &editor()), "X");
        assert_eq!(resolve_visibility("all", "", "", "X", &ViewerContext::anonymous()), "X");
    }

    #[test]
    fn test_empty_for_hides_content() {
        assert_eq!(resolve_visibility("", "", "", "X", &editor()), "");
    }

    #[test]
    fn test_none_hides_content() {
        assert_eq!(resolve_visibility("none", "", "", "X", &editor()), "");
    }

    #[test]
    fn test_role_rules() {
        assert_eq!(resolve_visibility("editor", "", "", "SECRET", &editor()), "SECRET");
        assert_eq!(resolve_visibility("editor", "", "", "SECRET", &subscriber()), "");
        assert_eq!(resolve_visibility("!editor", "", "", "SECRET", &subscriber()), "SECRET");
    }

    #[test]
    fn test_logged_rules() {
        let anon = ViewerContext::anonymous();
        assert_eq!(resolve_visibility("logged", "", "", "M", &editor()), "M");
        assert_eq!(resolve_visibility("logged", "", "", "M", &anon), "");
        assert_eq!(resolve_visibility("!logged", "", "", "M", &editor()), "");
        assert_eq!(resolve_visibility("!logged", "", "", "M", &anon), "M");
    }

    #[test]
    fn test_exclusion_hides_again() {
        assert_eq!(resolve_visibility("all", "subscriber", "", "PUBLIC", &subscriber()), "");
        assert_eq!(resolve_visibility("all", "subscriber", "", "PUBLIC", &editor()), "PUBLIC");
        assert_eq!(resolve_visibility("logged", "userid:42", "", "PUBLIC", &editor()), "");
    }

    #[test]
    fn test_exclusion_absolutes() {
        let anon = ViewerContext::anonymous();
        assert_eq!(resolve_visibility("all", "all", "", "P", &editor()), "");
        assert_eq!(resolve_visibility("all", "logged", "", "P", &editor()), "");
        assert_eq!(resolve_visibility("all", "logged", "", "P", &anon), "P");
        assert_eq!(resolve_visibility("all", "!logged", "", "P", &anon), "");
    }

    #[test]
    fn test_annotation() {
        assert_eq!(annotate("content", "A", "A"), "A TEST PASSED!");
        assert_eq!(annotate("content", "A", ""), " TEST FAILED!");
        assert_eq!(annotate("empty", "A", ""), " TEST PASSED!");
        assert_eq!(annotate("empty", "A", "A"), "A TEST FAILED!");
        assert_eq!(annotate("loud", "A", "A"), "A");
        assert_eq!(annotate("", "A", "A"), "A");
    }

    #[test]
    fn test_resolve_with_test_attribute() {
        assert_eq!(resolve_visibility("all", "", "empty", "Y", &editor()), "Y TEST FAILED!");
        assert_eq!(resolve_visibility("editor", "", "content", "Y", &editor()), "Y TEST PASSED!");
        assert_eq!(resolve_visibility("editor", "", "empty", "Y", &subscriber()), " TEST PASSED!");
    }

    #[test]
    fn test_hidden_content_fallback() {
        let selector = ContentSelector::new().with_hidden_content("<em>members only</em>");
        let attrs = Attributes::new("logged", "", "");
        assert_eq!(
            selector.select(attrs, "body", &ViewerContext::anonymous()),
            "<em>members only</em>"
        );
    }

    #[test]
    fn test_hooks_run_at_each_point() {
        let hooks = Hooks::new()
            .on_attributes(|mut a| {
                if a.for_spec == "staff" {
                    a.for_spec = "editor, administrator".to_string();
                }
                a
            })
            .on_show_rules(|mut rules| {
                rules.push(Predicate::new("", "!edit_posts"));
                rules
            })
            .on_content(|c| format!("<div>{c}</div>"));
        let selector = ContentSelector::new().with_hooks(hooks);

        let staff = Attributes::new("staff", "", "");
        assert_eq!(selector.select(staff.clone(), "memo", &editor()), "<div>memo</div>");
        assert_eq!(selector.select(staff, "memo", &subscriber()), "<div></div>");
    }

    #[test]
    fn test_hide_rules_hook_rewrites_inclusion() {
        let hooks = Hooks::new().on_hide_rules(|_| vec![Predicate::new("userid", "7")]);
        let selector = ContentSelector::new().with_hooks(hooks);
        let attrs = Attributes::new("editor", "", "");

        assert_eq!(selector.select(attrs.clone(), "x", &subscriber()), "x");
        assert_eq!(selector.select(attrs, "x", &editor()), "");
    }
}
